use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use contracts::domain::a002_cliente::aggregate::{
    Cliente, ClienteDto, NotaCliente, NotaClienteDto,
};

pub async fn fetch_by_id(id: String) -> Result<Cliente, String> {
    get_json(&format!("/api/clientes/{}", id)).await
}

/// Alta o modificación según el DTO lleve id o no
pub async fn save_form(dto: ClienteDto) -> Result<Cliente, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/clientes/{}", id), &dto).await,
        None => post_json("/api/clientes", &dto).await,
    }
}

pub async fn delete_cliente(id: String) -> Result<(), String> {
    delete(&format!("/api/clientes/{}", id)).await
}

pub async fn fetch_notas(cliente_id: String) -> Result<Vec<NotaCliente>, String> {
    get_json(&format!("/api/notas?cliente_id={}", cliente_id)).await
}

pub async fn agregar_nota(dto: NotaClienteDto) -> Result<NotaCliente, String> {
    post_json("/api/notas", &dto).await
}
