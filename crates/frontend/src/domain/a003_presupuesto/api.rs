//! Cliente REST de presupuestos guardados

use crate::shared::api_utils::{delete, get_json, post_json};
use contracts::domain::a003_presupuesto::aggregate::Presupuesto;

pub async fn guardar_presupuesto(presupuesto: &Presupuesto) -> Result<Presupuesto, String> {
    post_json("/api/presupuestos", presupuesto).await
}

pub async fn fetch_presupuestos() -> Result<Vec<Presupuesto>, String> {
    get_json("/api/presupuestos").await
}

pub async fn fetch_presupuesto(id: &str) -> Result<Presupuesto, String> {
    get_json(&format!("/api/presupuestos/{}", id)).await
}

pub async fn delete_presupuesto(id: &str) -> Result<(), String> {
    delete(&format!("/api/presupuestos/{}", id)).await
}
