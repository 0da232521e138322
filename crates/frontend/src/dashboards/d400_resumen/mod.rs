//! Panel resumen: indicadores globales del negocio.

use crate::shared::api_utils::get_json;
use crate::shared::components::stat_card::{FormatoValor, StatCard};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_resumen::ResumenStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ResumenDashboard() -> impl IntoView {
    let (stats, set_stats) = signal::<Option<ResumenStats>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_stats = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match get_json::<ResumenStats>("/api/dashboard/stats").await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => set_error.set(Some(e)),
            }

            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_stats();
    });

    view! {
        <PageFrame page_id="d400_resumen--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>"Resumen"</h2>
                <div class="page__toolbar">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_stats()
                    >
                        "Actualizar"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="page__error">{e}</div>
            })}

            <Show when=move || loading.get() && stats.get().is_none()>
                <Spinner />
            </Show>

            <div class="dashboard-cards">
                <StatCard
                    label="Artículos en catálogo".to_string()
                    icon_name="package".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_articulos as f64))
                    format=FormatoValor::Entero
                />
                <StatCard
                    label="Clientes".to_string()
                    icon_name="customers".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_clientes as f64))
                    format=FormatoValor::Entero
                />
                <StatCard
                    label="Presupuestos emitidos".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_presupuestos as f64))
                    format=FormatoValor::Entero
                />
                <StatCard
                    label="Importe presupuestado".to_string()
                    icon_name="euro".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.importe_total))
                    format=FormatoValor::Euros
                />
            </div>
        </PageFrame>
    }
}
