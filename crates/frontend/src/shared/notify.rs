//! Avisos transitorios (toasts) de la aplicación.
//!
//! Servicio provisto como contexto global: cualquier componente puede
//! encolar un aviso de éxito o de error; el componente `Avisos` los pinta
//! en una esquina y los descarta solo a los pocos segundos.

use leptos::prelude::*;
use leptos::task::spawn_local;

const DURACION_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Aviso {
    pub id: u64,
    pub texto: String,
    pub es_error: bool,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    avisos: RwSignal<Vec<Aviso>>,
    siguiente_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            avisos: RwSignal::new(vec![]),
            siguiente_id: RwSignal::new(0),
        }
    }

    pub fn exito(&self, texto: impl Into<String>) {
        self.publicar(texto.into(), false);
    }

    pub fn error(&self, texto: impl Into<String>) {
        self.publicar(texto.into(), true);
    }

    pub fn descartar(&self, id: u64) {
        self.avisos.update(|lista| lista.retain(|a| a.id != id));
    }

    fn publicar(&self, texto: String, es_error: bool) {
        let id = self.siguiente_id.get_untracked();
        self.siguiente_id.set(id + 1);
        self.avisos.update(|lista| {
            lista.push(Aviso { id, texto, es_error });
        });

        // Autodescartar pasado un tiempo
        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DURACION_MS).await;
            this.descartar(id);
        });
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceso al servicio de avisos desde cualquier componente
pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not provided")
}

/// Pila de avisos visibles. Debe montarse una sola vez, dentro del Shell.
#[component]
pub fn Avisos() -> impl IntoView {
    let notify = use_notify();

    view! {
        <div class="toast-stack">
            <For
                each=move || notify.avisos.get()
                key=|aviso| aviso.id
                children=move |aviso| {
                    let clase = if aviso.es_error {
                        "toast toast--error"
                    } else {
                        "toast toast--success"
                    };
                    let id = aviso.id;
                    view! {
                        <div class=clase>
                            <span>{aviso.texto.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| notify.descartar(id)
                            >"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
