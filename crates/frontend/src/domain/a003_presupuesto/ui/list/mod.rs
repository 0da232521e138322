pub mod state;

use self::state::create_state;
use crate::domain::a003_presupuesto::api::fetch_presupuestos;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_presupuesto::totales::calcular_totales;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PresupuestoList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match fetch_presupuestos().await {
                Ok(items) => {
                    state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                }
                Err(e) => set_error.set(Some(e)),
            }

            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let open_detail = move |id: String, numero: String| {
        tabs_store.open_tab(
            &format!("a003_presupuesto_detail_{}", id),
            &detail_tab_label("Presupuesto", &numero),
        );
    };

    view! {
        <PageFrame page_id="a003_presupuesto--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Presupuestos"</h2>
                <div class="page__toolbar">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                    >
                        "Actualizar"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="page__error">{e}</div>
            })}

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Número"</TableHeaderCell>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Cliente"</TableHeaderCell>
                        <TableHeaderCell>"Líneas"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|p| p.to_string_id()
                        children=move |presupuesto| {
                            let id = presupuesto.to_string_id();
                            let numero = presupuesto.numero.clone();
                            let numero_click = numero.clone();
                            let total = calcular_totales(&presupuesto.lineas, presupuesto.modo).total;
                            let cliente = presupuesto
                                .cliente_nombre
                                .clone()
                                .unwrap_or_else(|| "—".to_string());
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                class="page__link"
                                                on:click=move |_| open_detail(id.clone(), numero_click.clone())
                                            >
                                                {numero}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_date(&presupuesto.fecha)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{cliente}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{presupuesto.lineas.len()}</TableCellLayout>
                                    </TableCell>
                                    <TableCellMoney
                                        value=Signal::derive(move || Some(total))
                                        show_currency=true
                                        bold=true
                                    />
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </PageFrame>
    }
}
