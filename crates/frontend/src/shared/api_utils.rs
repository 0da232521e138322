//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making
//! authorized JSON requests. Every helper attaches the bearer token from
//! localStorage; backend validation messages (`detail`) are surfaced
//! verbatim so the UI can show them to the user.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/articulos");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn bearer() -> String {
    format!("Bearer {}", storage::get_access_token().unwrap_or_default())
}

/// Extract a user-facing error from a non-2xx response. A 4xx body with a
/// `detail` field is shown verbatim (backend validation messages).
async fn error_de_respuesta(response: Response) -> String {
    let status = response.status();
    if let Ok(cuerpo) = response.json::<serde_json::Value>().await {
        if let Some(detalle) = cuerpo.get("detail").and_then(|d| d.as_str()) {
            return detalle.to_string();
        }
    }
    match status {
        401 => "Sesión caducada; vuelve a iniciar sesión".to_string(),
        _ => format!("Error del servidor: HTTP {}", status),
    }
}

/// GET autorizado que espera JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(error_de_respuesta(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inesperada del servidor: {}", e))
}

/// POST autorizado con cuerpo JSON
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &bearer())
        .json(body)
        .map_err(|e| format!("No se pudo preparar la petición: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(error_de_respuesta(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inesperada del servidor: {}", e))
}

/// PUT autorizado con cuerpo JSON
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &bearer())
        .json(body)
        .map_err(|e| format!("No se pudo preparar la petición: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(error_de_respuesta(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inesperada del servidor: {}", e))
}

/// DELETE autorizado; ignora el cuerpo de la respuesta
pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(error_de_respuesta(response).await);
    }

    Ok(())
}
