//! Barra superior de la aplicación.
//!
//! Contiene el conmutador del panel lateral, la marca, el usuario
//! conectado y el botón de salida.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        do_logout(set_auth_state);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Cerámicas Alfar"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.nombre_completo.clone().unwrap_or(u.usuario))
                            .unwrap_or_else(|| "Invitado".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Salir">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
