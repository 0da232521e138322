use crate::domain::a001_articulo::api::fetch_articulo;
use crate::domain::a003_presupuesto::draft::use_borrador;
use crate::shared::components::table::number_format::format_money;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_articulo::aggregate::Articulo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Ficha del artículo: imágenes, características y precio.
#[component]
pub fn ArticuloDetail(id: String) -> impl IntoView {
    let (articulo, set_articulo) = signal::<Option<Articulo>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let borrador = use_borrador();
    let notify = use_notify();

    let id_for_fetch = id.clone();
    Effect::new(move |_| {
        let id = id_for_fetch.clone();
        spawn_local(async move {
            match fetch_articulo(&id).await {
                Ok(a) => set_articulo.set(Some(a)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let agregar = move |_| {
        if let Some(a) = articulo.get_untracked() {
            borrador.agregar_articulo(&a);
            notify.exito(format!("«{}» añadido al presupuesto", a.base.description));
        }
    };

    view! {
        <PageFrame page_id="a001_articulo--detail" category=PAGE_CAT_DETAIL>
            {move || error.get().map(|e| view! {
                <div class="page__error">{e}</div>
            })}

            {move || match articulo.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(a) => {
                    let nombre = a.base.description.clone();
                    let stock_texto = if a.stock == 0 {
                        "Sin stock".to_string()
                    } else {
                        format!("{} uds.", a.stock)
                    };

                    // Vistas auxiliares con datos propios, sin retener `a`
                    let nombre_alt = nombre.clone();
                    let imagenes = a.imagenes.clone();
                    let imagenes_view = (!imagenes.is_empty()).then(move || {
                        view! {
                            <div class="articulo-detail__imagenes">
                                {imagenes.into_iter().map(|url| view! {
                                    <img src=url alt=nombre_alt.clone() />
                                }).collect_view()}
                            </div>
                        }
                    });

                    let ficha_tecnica = a.ficha_tecnica.clone();
                    let ficha_view = (!ficha_tecnica.is_empty()).then(move || {
                        view! {
                            <div class="articulo-detail__ficha">
                                <h3>"Ficha técnica"</h3>
                                <Table>
                                    <TableBody>
                                        {ficha_tecnica.into_iter().map(|(clave, valor)| view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{clave}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{valor}</TableCellLayout></TableCell>
                                            </TableRow>
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        }
                    });

                    view! {
                        <div class="articulo-detail">
                            <div class="articulo-detail__header">
                                <h2>{nombre}</h2>
                                <span class="articulo-detail__categoria">
                                    {a.categoria.etiqueta()}
                                </span>
                            </div>

                            {imagenes_view}

                            <p class="articulo-detail__descripcion">{a.descripcion().to_string()}</p>

                            <div class="articulo-detail__datos">
                                <div>
                                    <Label>"Precio"</Label>
                                    <span>{format!("{} €", format_money(a.precio))}</span>
                                </div>
                                <div>
                                    <Label>"Dimensiones"</Label>
                                    <span>{a.dimensiones.clone()}</span>
                                </div>
                                <div>
                                    <Label>"Stock"</Label>
                                    <span>{stock_texto}</span>
                                </div>
                                <div>
                                    <Label>"Valoración"</Label>
                                    <span>{format!("{:.1} / 5", a.valoracion)}</span>
                                </div>
                            </div>

                            {ficha_view}

                            <div class="articulo-detail__acciones">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=agregar
                                >
                                    "Añadir al presupuesto"
                                </Button>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}
