//! Cliente REST del fichero de clientes

use crate::shared::api_utils::get_json;
use contracts::domain::a002_cliente::aggregate::Cliente;

/// Lista de clientes; la búsqueda se resuelve en el servidor.
pub async fn fetch_clientes(buscar: &str) -> Result<Vec<Cliente>, String> {
    let path = if buscar.trim().is_empty() {
        "/api/clientes".to_string()
    } else {
        format!("/api/clientes?buscar={}", urlencoding::encode(buscar.trim()))
    };
    get_json(&path).await
}

pub async fn fetch_cliente(id: &str) -> Result<Cliente, String> {
    get_json(&format!("/api/clientes/{}", id)).await
}
