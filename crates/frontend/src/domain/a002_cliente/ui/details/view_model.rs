use super::model;
use contracts::domain::a002_cliente::aggregate::{ClienteDto, NotaCliente, NotaClienteDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel del formulario de cliente
#[derive(Clone)]
pub struct ClienteDetailsViewModel {
    pub form: RwSignal<ClienteDto>,
    pub error: RwSignal<Option<String>>,
    pub notas: RwSignal<Vec<NotaCliente>>,
    pub nota_nueva: RwSignal<String>,
}

impl ClienteDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ClienteDto::default()),
            error: RwSignal::new(None),
            notas: RwSignal::new(Vec::new()),
            nota_nueva: RwSignal::new(String::new()),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().validate().is_ok()
    }

    /// Carga el cliente y sus notas si hay id
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };

        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_by_id(existing_id.clone()).await {
                Ok(item) => {
                    this.form.update(|f| {
                        f.id = Some(item.base.id.as_string());
                        f.nombre = item.base.description.clone();
                        f.email = Some(item.email.clone());
                        f.telefono = Some(item.telefono.clone());
                        f.direccion = Some(item.direccion.clone());
                        f.ciudad = Some(item.ciudad.clone());
                        f.codigo_postal = Some(item.codigo_postal.clone());
                        f.nif = Some(item.nif.clone());
                        f.comentario = item.base.comment.clone();
                        f.updated_at = Some(item.base.metadata.updated_at);
                    });
                    this.load_notas(existing_id);
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn load_notas(&self, cliente_id: String) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_notas(cliente_id).await {
                Ok(mut notas) => {
                    // Las más recientes primero
                    notas.sort_by(|a, b| b.fecha.cmp(&a.fecha));
                    this.notas.set(notas);
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            let dto = this.form.get();

            if let Err(e) = dto.validate() {
                this.error.set(Some(e));
                return;
            }

            let on_saved_cb = on_saved.clone();
            leptos::task::spawn_local(async move {
                match model::save_form(dto).await {
                    Ok(guardado) => {
                        this.form
                            .update(|f| f.id = Some(guardado.base.id.as_string()));
                        on_saved_cb(());
                    }
                    Err(e) => this.error.set(Some(e)),
                }
            });
        }
    }

    pub fn delete_command(&self, on_deleted: Rc<dyn Fn(())>) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            let Some(id) = this.form.get().id else {
                return;
            };
            let on_deleted_cb = on_deleted.clone();
            leptos::task::spawn_local(async move {
                match model::delete_cliente(id).await {
                    Ok(()) => on_deleted_cb(()),
                    Err(e) => this.error.set(Some(e)),
                }
            });
        }
    }

    /// Añade la nota escrita y recarga el historial
    pub fn add_nota_command(&self) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            let texto = this.nota_nueva.get().trim().to_string();
            if texto.is_empty() {
                return;
            }
            let Some(cliente_id) = this.form.get().id else {
                return;
            };

            leptos::task::spawn_local(async move {
                let dto = NotaClienteDto {
                    cliente_id: cliente_id.clone(),
                    texto,
                };
                match model::agregar_nota(dto).await {
                    Ok(_) => {
                        this.nota_nueva.set(String::new());
                        this.load_notas(cliente_id);
                    }
                    Err(e) => this.error.set(Some(e)),
                }
            });
        }
    }
}

impl Default for ClienteDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
