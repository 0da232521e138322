//! Cliente REST del catálogo de artículos

use crate::shared::api_utils::get_json;
use contracts::domain::a001_articulo::aggregate::{Articulo, ArticuloDto};

/// Descarga el catálogo completo. El filtrado se hace en el cliente.
pub async fn fetch_articulos() -> Result<Vec<Articulo>, String> {
    let dtos: Vec<ArticuloDto> = get_json("/api/articulos").await?;
    dtos.into_iter().map(Articulo::from_dto).collect()
}

pub async fn fetch_articulo(id: &str) -> Result<Articulo, String> {
    let dto: ArticuloDto = get_json(&format!("/api/articulos/{}", id)).await?;
    Articulo::from_dto(dto)
}
