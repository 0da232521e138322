use crate::shared::components::table::number_format::{format_money, format_number_int};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Formato del valor principal de una tarjeta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatoValor {
    Entero,
    Euros,
}

/// Tarjeta de indicador para el panel resumen
#[component]
pub fn StatCard(
    /// Etiqueta sobre el valor
    label: String,
    /// Nombre del icono del helper icon()
    icon_name: String,
    /// Valor principal (None = cargando o error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Formato del valor
    format: FormatoValor,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => match format {
            FormatoValor::Entero => format_number_int(v),
            FormatoValor::Euros => format!("{} €", format_money(v)),
        },
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
