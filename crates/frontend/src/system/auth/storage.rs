use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Guardar el token de acceso en localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Leer el token de acceso de localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Borrar el token de acceso
pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
