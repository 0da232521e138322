//! Editor del presupuesto en curso: líneas, cliente, totales y exportación.

use crate::domain::a002_cliente::api::fetch_clientes;
use crate::domain::a003_presupuesto::api::guardar_presupuesto;
use crate::domain::a003_presupuesto::draft::use_borrador;
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_date;
use crate::shared::export::descargar_pdf;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use chrono::Utc;
use contracts::domain::a002_cliente::aggregate::Cliente;
use contracts::domain::a003_presupuesto::aggregate::{generar_numero, Presupuesto};
use contracts::domain::a003_presupuesto::pdf::{generar_pdf, nombre_archivo, DatosPdf};
use contracts::domain::a003_presupuesto::totales::{
    calcular_totales, formatear_euros, ModoTotales,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PresupuestoEditor() -> impl IntoView {
    let borrador = use_borrador();
    let notify = use_notify();

    let (clientes, set_clientes) = signal::<Vec<Cliente>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modo = RwSignal::new(ModoTotales::default());

    // Lista de clientes para el selector
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_clientes("").await {
                Ok(v) => set_clientes.set(v),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let lineas = Signal::derive(move || borrador.borrador.with(|b| b.lineas.clone()));
    let esta_vacio = Signal::derive(move || borrador.borrador.with(|b| b.esta_vacio()));
    let cliente_id = Signal::derive(move || borrador.borrador.with(|b| b.cliente_id.clone()));

    let totales = Signal::derive(move || calcular_totales(&lineas.get(), modo.get()));

    let cliente_actual = Signal::derive(move || {
        let id = cliente_id.get()?;
        clientes
            .get()
            .into_iter()
            .find(|c| c.to_string_id() == id)
    });

    let cambiar_cliente = move |valor: String| {
        if valor.is_empty() {
            borrador.set_cliente(None);
        } else {
            borrador.set_cliente(Some(valor));
        }
    };

    let exportar = move |_| {
        let lineas_actuales = lineas.get_untracked();
        let cliente = cliente_actual.get_untracked();
        let ahora = Utc::now();
        let numero = generar_numero(ahora);
        let fecha_iso = ahora.format("%Y-%m-%d").to_string();

        let datos = DatosPdf {
            numero: &numero,
            fecha_texto: format_date(&fecha_iso),
            cliente: cliente.as_ref(),
            lineas: &lineas_actuales,
            modo: modo.get_untracked(),
        };

        match generar_pdf(&datos) {
            Ok(bytes) => {
                let archivo = nombre_archivo(
                    cliente.as_ref().map(|c| c.nombre()),
                    ahora.date_naive(),
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

    let guardar = move |_| {
        if esta_vacio.get_untracked() {
            notify.error("El presupuesto no tiene líneas");
            return;
        }
        let b = borrador.borrador.get_untracked();
        let cliente_nombre = cliente_actual
            .get_untracked()
            .map(|c| c.nombre().to_string());
        let mut presupuesto = Presupuesto::desde_borrador(&b, cliente_nombre, Utc::now());
        presupuesto.modo = modo.get_untracked();

        spawn_local(async move {
            match guardar_presupuesto(&presupuesto).await {
                Ok(guardado) => {
                    borrador.limpiar();
                    notify.exito(format!("Presupuesto {} guardado", guardado.numero));
                }
                Err(e) => notify.error(e),
            }
        });
    };

    let vaciar = move |_| {
        borrador.limpiar();
        notify.exito("Borrador vaciado");
    };

    view! {
        <PageFrame page_id="a003_presupuesto--editor" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h2>"Nuevo presupuesto"</h2>
            </div>

            {move || error.get().map(|e| view! {
                <div class="page__error">{e}</div>
            })}

            <div class="presupuesto-editor__cliente">
                <label for="cliente">{"Cliente"}</label>
                <select
                    id="cliente"
                    on:change=move |ev| cambiar_cliente(event_target_value(&ev))
                    prop:value=move || cliente_id.get().unwrap_or_default()
                >
                    <option value="">"Sin cliente (presupuesto general)"</option>
                    {move || clientes.get().into_iter().map(|c| {
                        let id = c.to_string_id();
                        view! {
                            <option value=id>{c.nombre().to_string()}</option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !esta_vacio.get()
                fallback=|| view! {
                    <div class="page__empty">
                        "El presupuesto está vacío. Añade artículos desde el catálogo."
                    </div>
                }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Artículo"</TableHeaderCell>
                            <TableHeaderCell>"Categoría"</TableHeaderCell>
                            <TableHeaderCell>"Precio unitario"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Importe"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || lineas.get()
                            key=|l| l.articulo_id.clone()
                            children=move |linea| {
                                let id_precio = linea.articulo_id.clone();
                                let id_cantidad = linea.articulo_id.clone();
                                let id_quitar = linea.articulo_id.clone();
                                let importe = linea.importe();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{linea.nombre.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{linea.categoria.etiqueta()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <input
                                                type="number"
                                                class="presupuesto-editor__precio"
                                                min="0"
                                                step="0.01"
                                                prop:value=linea.precio_unitario.to_string()
                                                on:change=move |ev| {
                                                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                        borrador.cambiar_precio(&id_precio, v);
                                                    }
                                                }
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <input
                                                type="number"
                                                class="presupuesto-editor__cantidad"
                                                min="1"
                                                step="1"
                                                prop:value=linea.cantidad.to_string()
                                                on:change=move |ev| {
                                                    if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                                        borrador.cambiar_cantidad(&id_cantidad, v);
                                                    }
                                                }
                                            />
                                        </TableCell>
                                        <TableCellMoney
                                            value=Signal::derive(move || Some(importe))
                                            show_currency=true
                                        />
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| borrador.quitar_linea(&id_quitar)
                                            >
                                                "Quitar"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <div class="presupuesto-editor__modo">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || modo.get() == ModoTotales::ConIrpf
                            on:change=move |ev| {
                                modo.set(if event_target_checked(&ev) {
                                    ModoTotales::ConIrpf
                                } else {
                                    ModoTotales::SoloIva
                                });
                            }
                        />
                        "Aplicar retención IRPF (15%)"
                    </label>
                </div>

                <div class="presupuesto-editor__totales">
                    <div>
                        <span>"Subtotal"</span>
                        <span>{move || formatear_euros(totales.get().subtotal)}</span>
                    </div>
                    <div>
                        <span>"IVA (21%)"</span>
                        <span>{move || formatear_euros(totales.get().iva)}</span>
                    </div>
                    {move || totales.get().irpf.map(|irpf| view! {
                        <div>
                            <span>"IRPF (15%)"</span>
                            <span>{format!("-{}", formatear_euros(irpf))}</span>
                        </div>
                    })}
                    <div class="presupuesto-editor__total">
                        <span>"Total"</span>
                        <span>{move || formatear_euros(totales.get().total)}</span>
                    </div>
                </div>

                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=guardar>
                        "Guardar presupuesto"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=exportar>
                        "Exportar PDF"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=vaciar>
                        "Vaciar"
                    </Button>
                </div>
            </Show>
        </PageFrame>
    }
}
