use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (usuario, set_usuario) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let usuario_val = usuario.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(set_auth_state, usuario_val, password_val).await {
                Ok(()) => {
                    // El cambio de estado conmuta automáticamente al MainLayout
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Cerámicas Alfar"</h1>
                <h2>"Acceso"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="usuario">"Usuario"</label>
                        <input
                            type="text"
                            id="usuario"
                            value=move || usuario.get()
                            on:input=move |ev| set_usuario.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
