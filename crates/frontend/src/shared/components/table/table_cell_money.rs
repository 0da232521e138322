//! Celda de tabla para importes monetarios

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Celda de tabla para importes
///
/// Formatea el valor con 2 decimales y separador de millares,
/// alineado a la derecha. Con `show_currency` añade el símbolo "€".
#[component]
pub fn TableCellMoney(
    /// Valor a mostrar
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Añadir el sufijo de moneda
    #[prop(optional, default = false)]
    show_currency: bool,

    /// Negrita (para totales)
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => {
            let formatted = format_money(v);
            if show_currency {
                format!("{} €", formatted)
            } else {
                formatted
            }
        }
        None => "—".to_string(),
    };

    let cell_style = move || {
        if bold {
            "font-weight: 600".to_string()
        } else {
            String::new()
        }
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
