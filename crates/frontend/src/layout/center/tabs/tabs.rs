use crate::dashboards::ResumenDashboard;
use crate::domain::a001_articulo::ui::details::ArticuloDetail;
use crate::domain::a001_articulo::ui::list::ArticuloList;
use crate::domain::a002_cliente::ui::details::ClienteDetail;
use crate::domain::a002_cliente::ui::list::ClienteList;
use crate::domain::a003_presupuesto::ui::details::PresupuestoDetail;
use crate::domain::a003_presupuesto::ui::editor::PresupuestoEditor;
use crate::domain::a003_presupuesto::ui::list::PresupuestoList;
use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Contenido de una pestaña. Se crea una vez al abrirla y se mantiene
/// montado (oculto) mientras la pestaña siga abierta.
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    let tab_key_for_content = tab_key.clone();
    let content = {
        let key_ref = tab_key_for_content.as_str();
        let key_for_close = tab_key_for_content.clone();

        match key_ref {
            "d400_resumen" => view! { <ResumenDashboard /> }.into_any(),
            "a001_articulo" => view! { <ArticuloList /> }.into_any(),
            k if k.starts_with("a001_articulo_detail_") => {
                let id = k
                    .strip_prefix("a001_articulo_detail_")
                    .unwrap_or_default()
                    .to_string();
                view! { <ArticuloDetail id=id /> }.into_any()
            }
            "a002_cliente" => view! { <ClienteList /> }.into_any(),
            "a002_cliente_new" => view! {
                <ClienteDetail
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any(),
            k if k.starts_with("a002_cliente_detail_") => {
                let id = k
                    .strip_prefix("a002_cliente_detail_")
                    .unwrap_or_default()
                    .to_string();
                view! {
                    <ClienteDetail
                        id=id
                        on_close=Callback::new(move |_| {
                            tabs_store.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any()
            }
            "a003_presupuesto_editor" => view! { <PresupuestoEditor /> }.into_any(),
            "a003_presupuesto" => view! { <PresupuestoList /> }.into_any(),
            k if k.starts_with("a003_presupuesto_detail_") => {
                let id = k
                    .strip_prefix("a003_presupuesto_detail_")
                    .unwrap_or_default()
                    .to_string();
                view! {
                    <PresupuestoDetail
                        id=id
                        on_close=Callback::new(move |_| {
                            tabs_store.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any()
            }
            _ => {
                log::warn!("pestaña desconocida: {}", key_ref);
                view! { <div class="placeholder">{"Página no disponible"}</div> }.into_any()
            }
        }
    };

    view! {
        <div
            class="tab-page"
            class:hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
