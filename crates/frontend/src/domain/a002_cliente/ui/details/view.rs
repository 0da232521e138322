use super::view_model::ClienteDetailsViewModel;
use crate::shared::date_utils::format_datetime;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ClienteDetail(
    #[prop(into, optional)] id: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ClienteDetailsViewModel::new();
    vm.load_if_needed(id);
    let notify = use_notify();

    let vm_clone = vm.clone();

    view! {
        <PageFrame page_id="a002_cliente--detail" category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Ficha de cliente" } else { "Nuevo cliente" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="page__error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="nombre">{"Nombre"}</label>
                    <input
                        type="text"
                        id="nombre"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().nombre
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.nombre = event_target_value(&ev));
                            }
                        }
                        placeholder="Razón social o nombre"
                    />
                </div>

                <div class="form-group">
                    <label for="nif">{"NIF"}</label>
                    <input
                        type="text"
                        id="nif"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().nif.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.nif = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
                        placeholder="B12345678"
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().email.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.email = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
                        placeholder="correo@ejemplo.es"
                    />
                </div>

                <div class="form-group">
                    <label for="telefono">{"Teléfono"}</label>
                    <input
                        type="tel"
                        id="telefono"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().telefono.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.telefono = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="direccion">{"Dirección"}</label>
                    <input
                        type="text"
                        id="direccion"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().direccion.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.direccion = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="ciudad">{"Ciudad"}</label>
                    <input
                        type="text"
                        id="ciudad"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().ciudad.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.ciudad = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="codigo_postal">{"Código postal"}</label>
                    <input
                        type="text"
                        id="codigo_postal"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().codigo_postal.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.codigo_postal = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="comentario">{"Comentario"}</label>
                    <textarea id="comentario"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().comentario.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.comentario = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
                    />
                </div>

                {
                    let vm = vm_clone.clone();
                    move || {
                        if let Some(updated_at) = vm.form.get().updated_at {
                            view! {
                                <div class="form-group">
                                    <label>{"Última modificación"}</label>
                                    <div class="readonly-field">
                                        {format_datetime(&updated_at.to_rfc3339())}
                                    </div>
                                </div>
                            }.into_any()
                        } else {
                            view! {}.into_any()
                        }
                    }
                }

                <div class="form-actions">
                    <button class="btn btn-primary"
                        disabled={
                            let vm = vm_clone.clone();
                            move || !vm.is_form_valid()()
                        }
                        on:click={
                            let vm = vm_clone.clone();
                            move |_| {
                                let on_saved = Rc::new(move |_| {
                                    notify.exito("Cliente guardado");
                                });
                                vm.save_command(on_saved)();
                            }
                        }
                    >{"Guardar"}</button>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            let vm_btn = vm.clone();
                            vm.form.get().id.map(|_| view! {
                                <button class="btn btn-danger"
                                    on:click={
                                        let vm = vm_btn.clone();
                                        move |_| {
                                            let on_deleted = Rc::new(move |_| {
                                                notify.exito("Cliente eliminado");
                                                on_close.run(());
                                            });
                                            vm.delete_command(on_deleted)();
                                        }
                                    }
                                >{"Eliminar"}</button>
                            })
                        }
                    }
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>{"Cerrar"}</button>
                </div>
            </div>

            // Historial de notas, solo con el cliente ya guardado
            {
                let vm = vm_clone.clone();
                move || {
                    let vm_notas = vm.clone();
                    vm.form.get().id.map(|_| view! {
                        <div class="cliente-notas">
                            <h4>"Notas"</h4>
                            <div class="cliente-notas__nueva">
                                <textarea
                                    placeholder="Escribe una nota..."
                                    prop:value={
                                        let vm = vm_notas.clone();
                                        move || vm.nota_nueva.get()
                                    }
                                    on:input={
                                        let vm = vm_notas.clone();
                                        move |ev| vm.nota_nueva.set(event_target_value(&ev))
                                    }
                                />
                                <button class="btn btn-secondary"
                                    on:click={
                                        let vm = vm_notas.clone();
                                        move |_| vm.add_nota_command()()
                                    }
                                >{"Añadir nota"}</button>
                            </div>
                            <ul class="cliente-notas__lista">
                                {
                                    let vm = vm_notas.clone();
                                    move || vm.notas.get().into_iter().map(|nota| view! {
                                        <li>
                                            <span class="cliente-notas__fecha">
                                                {format_datetime(&nota.fecha.to_rfc3339())}
                                            </span>
                                            <p>{nota.texto}</p>
                                        </li>
                                    }).collect_view()
                                }
                            </ul>
                        </div>
                    })
                }
            }
        </PageFrame>
    }
}
