pub mod state;

use self::state::create_state;
use crate::domain::a001_articulo::api::fetch_articulos;
use crate::domain::a003_presupuesto::draft::use_borrador;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::table::TableCellMoney;
use crate::shared::list_utils::SearchInput;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_articulo::aggregate::{Articulo, Categoria};
use contracts::domain::a001_articulo::catalog::{filtrar_articulos, FiltroCategoria};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn parse_filtro(valor: &str) -> FiltroCategoria {
    match valor {
        "todas" => FiltroCategoria::Todas,
        "plaquetas" => FiltroCategoria::Plaquetas,
        otra => Categoria::from_clave(otra)
            .map(FiltroCategoria::Solo)
            .unwrap_or(FiltroCategoria::Todas),
    }
}

fn filtro_valor(filtro: &FiltroCategoria) -> String {
    match filtro {
        FiltroCategoria::Todas => "todas".to_string(),
        FiltroCategoria::Plaquetas => "plaquetas".to_string(),
        FiltroCategoria::Solo(c) => c.clave().to_string(),
    }
}

#[component]
pub fn ArticuloList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let borrador = use_borrador();
    let notify = use_notify();

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match fetch_articulos().await {
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

    // Carga inicial del catálogo
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let open_detail = move |id: String, nombre: String| {
        tabs_store.open_tab(
            &format!("a001_articulo_detail_{}", id),
            &detail_tab_label("Artículo", &nombre),
        );
    };

    // Filtrado en cliente: texto + categoría
    let visibles = Signal::derive(move || {
        state.with(|s| {
            filtrar_articulos(&s.items, &s.search_query, &s.categoria)
                .into_iter()
                .cloned()
                .collect::<Vec<Articulo>>()
        })
    });

    let agregar = move |articulo: Articulo| {
        borrador.agregar_articulo(&articulo);
        notify.exito(format!("«{}» añadido al presupuesto", articulo.base.description));
    };

    view! {
        <PageFrame page_id="a001_articulo--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Catálogo"</h2>
                <div class="page__toolbar">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_change=Callback::new(move |texto: String| {
                            state.update(|s| s.search_query = texto);
                        })
                        placeholder="Buscar por nombre o descripción..."
                    />
                    <select
                        class="page__select"
                        on:change=move |ev| {
                            let valor = event_target_value(&ev);
                            state.update(|s| s.categoria = parse_filtro(&valor));
                        }
                        prop:value=move || state.with(|s| filtro_valor(&s.categoria))
                    >
                        <option value="todas">"Todas las categorías"</option>
                        <option value="plaquetas">"Plaquetas (todas)"</option>
                        {Categoria::TODAS.iter().map(|c| {
                            view! {
                                <option value=c.clave()>{c.etiqueta()}</option>
                            }
                        }).collect_view()}
                    </select>
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

            <Show when=move || !loading.get() && visibles.get().is_empty() && state.with(|s| s.is_loaded)>
                <div class="page__empty">"Ningún artículo coincide con el filtro"</div>
            </Show>

            <Show when=move || !visibles.get().is_empty()>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Nombre"</TableHeaderCell>
                            <TableHeaderCell>"Categoría"</TableHeaderCell>
                            <TableHeaderCell>"Dimensiones"</TableHeaderCell>
                            <TableHeaderCell>"Precio"</TableHeaderCell>
                            <TableHeaderCell>"Stock"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visibles.get()
                            key=|a| a.to_string_id()
                            children=move |articulo| {
                                let id = articulo.to_string_id();
                                let nombre = articulo.base.description.clone();
                                let nombre_click = nombre.clone();
                                let id_click = id.clone();
                                let articulo_add = articulo.clone();
                                let precio = articulo.precio;
                                let sin_stock = articulo.stock == 0;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a
                                                    class="page__link"
                                                    on:click=move |_| open_detail(id_click.clone(), nombre_click.clone())
                                                >
                                                    {nombre}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{articulo.categoria.etiqueta()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{articulo.dimensiones.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=Signal::derive(move || Some(precio)) show_currency=true />
                                        <TableCell>
                                            <TableCellLayout>
                                                {if sin_stock { "Sin stock".to_string() } else { articulo.stock.to_string() }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                on_click=move |_| agregar(articulo_add.clone())
                                            >
                                                "Añadir"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}
