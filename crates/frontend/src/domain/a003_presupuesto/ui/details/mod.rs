//! Vista de solo lectura de un presupuesto guardado, con reexportación a PDF.

use crate::domain::a002_cliente::api::fetch_cliente;
use crate::domain::a003_presupuesto::api::{delete_presupuesto, fetch_presupuesto};
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_date;
use crate::shared::export::descargar_pdf;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_cliente::aggregate::Cliente;
use contracts::domain::a003_presupuesto::aggregate::Presupuesto;
use contracts::domain::a003_presupuesto::pdf::{generar_pdf, nombre_archivo, DatosPdf};
use contracts::domain::a003_presupuesto::totales::{calcular_totales, formatear_euros};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PresupuestoDetail(id: String, on_close: Callback<()>) -> impl IntoView {
    let (presupuesto, set_presupuesto) = signal::<Option<Presupuesto>>(None);
    let (cliente, set_cliente) = signal::<Option<Cliente>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let notify = use_notify();

    let id_for_fetch = id.clone();
    Effect::new(move |_| {
        let id = id_for_fetch.clone();
        spawn_local(async move {
            match fetch_presupuesto(&id).await {
                Ok(p) => {
                    if let Some(cliente_id) = p.cliente_id.clone() {
                        if let Ok(c) = fetch_cliente(&cliente_id).await {
                            set_cliente.set(Some(c));
                        }
                    }
                    set_presupuesto.set(Some(p));
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let exportar = move |_| {
        let Some(p) = presupuesto.get_untracked() else {
            return;
        };
        let cliente_actual = cliente.get_untracked();

        let datos = DatosPdf {
            numero: &p.numero,
            fecha_texto: format_date(&p.fecha),
            cliente: cliente_actual.as_ref(),
            lineas: &p.lineas,
            modo: p.modo,
        };

        match generar_pdf(&datos) {
            Ok(bytes) => {
                let fecha = chrono::NaiveDate::parse_from_str(&p.fecha, "%Y-%m-%d")
                    .unwrap_or_else(|_| chrono::Utc::now().date_naive());
                let archivo = nombre_archivo(
                    p.cliente_nombre.as_deref(),
                    fecha,
                );
                if let Err(e) = descargar_pdf(&bytes, &archivo) {
                    notify.error(e);
                } else {
                    notify.exito(format!("PDF generado: {}", archivo));
                }
            }
            Err(e) => notify.error(e.to_string()),
        }
    };

    let id_for_delete = id.clone();
    let eliminar = move |_| {
        let id = id_for_delete.clone();
        spawn_local(async move {
            match delete_presupuesto(&id).await {
                Ok(()) => {
                    notify.exito("Presupuesto eliminado");
                    on_close.run(());
                }
                Err(e) => notify.error(e),
            }
        });
    };

    view! {
        <PageFrame page_id="a003_presupuesto--detail" category=PAGE_CAT_DETAIL>
            {move || error.get().map(|e| view! {
                <div class="page__error">{e}</div>
            })}

            {move || match presupuesto.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(p) => {
                    let totales = calcular_totales(&p.lineas, p.modo);
                    let cliente_texto = p
                        .cliente_nombre
                        .clone()
                        .unwrap_or_else(|| "Sin cliente".to_string());
                    view! {
                        <div class="presupuesto-detail">
                            <div class="page__header">
                                <h2>{p.numero.clone()}</h2>
                                <span class="presupuesto-detail__fecha">{format_date(&p.fecha)}</span>
                            </div>

                            <div class="presupuesto-detail__cliente">
                                <Label>"Cliente"</Label>
                                <span>{cliente_texto}</span>
                            </div>

                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Artículo"</TableHeaderCell>
                                        <TableHeaderCell>"Categoría"</TableHeaderCell>
                                        <TableHeaderCell>"Precio unitario"</TableHeaderCell>
                                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                        <TableHeaderCell>"Importe"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {p.lineas.clone().into_iter().map(|linea| {
                                        let precio = linea.precio_unitario;
                                        let importe = linea.importe();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{linea.nombre.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{linea.categoria.etiqueta()}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney
                                                    value=Signal::derive(move || Some(precio))
                                                    show_currency=true
                                                />
                                                <TableCell>
                                                    <TableCellLayout>{linea.cantidad}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney
                                                    value=Signal::derive(move || Some(importe))
                                                    show_currency=true
                                                />
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>

                            <div class="presupuesto-editor__totales">
                                <div>
                                    <span>"Subtotal"</span>
                                    <span>{formatear_euros(totales.subtotal)}</span>
                                </div>
                                <div>
                                    <span>"IVA (21%)"</span>
                                    <span>{formatear_euros(totales.iva)}</span>
                                </div>
                                {totales.irpf.map(|irpf| view! {
                                    <div>
                                        <span>"IRPF (15%)"</span>
                                        <span>{format!("-{}", formatear_euros(irpf))}</span>
                                    </div>
                                })}
                                <div class="presupuesto-editor__total">
                                    <span>"Total"</span>
                                    <span>{formatear_euros(totales.total)}</span>
                                </div>
                            </div>

                            <div class="form-actions">
                                <Button appearance=ButtonAppearance::Secondary on_click=exportar>
                                    "Exportar PDF"
                                </Button>
                                <Button appearance=ButtonAppearance::Subtle on_click=eliminar.clone()>
                                    "Eliminar"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| on_close.run(())
                                >
                                    "Cerrar"
                                </Button>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}
