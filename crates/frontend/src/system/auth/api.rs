use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Iniciar sesión con usuario y contraseña
pub async fn login(usuario: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { usuario, password };

    let response = Request::post(&format!("{}/api/usuarios/login", api_base()))
        .json(&request)
        .map_err(|e| format!("No se pudo preparar la petición: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(format!("Usuario o contraseña incorrectos ({})", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Respuesta inesperada del servidor: {}", e))
}

/// Obtener el usuario de la sesión actual
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&format!("{}/api/usuarios/me", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(format!("Sesión no válida ({})", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Respuesta inesperada del servidor: {}", e))
}
