use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Crea el estado de sesión, intenta restaurarla desde localStorage y lo
/// deja disponible como contexto para toda la aplicación.
pub fn provide_auth() {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                // Validar el token pidiendo el usuario actual
                match api::get_current_user(&access_token).await {
                    Ok(user_info) => {
                        set_auth_state.set(AuthState {
                            access_token: Some(access_token),
                            user_info: Some(user_info),
                        });
                    }
                    Err(_) => {
                        // Token caducado o revocado: de vuelta al login
                        storage::clear_token();
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);
}

/// Acceso al estado de sesión
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("provide_auth not called");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("provide_auth not called");

    (auth_state, set_auth_state)
}

/// Iniciar sesión y dejar el token guardado
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    usuario: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(usuario, password).await?;

    storage::save_access_token(&response.access_token);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Cerrar sesión: borra el token y el estado
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
