//! Persistencia del borrador del presupuesto entre navegaciones.
//!
//! Adaptador explícito sobre localStorage: el estado vive en el
//! `BorradorStore`; aquí solo se serializa/deserializa en el límite.
//! Se limpia al guardar el presupuesto.

use contracts::domain::a003_presupuesto::lineas::BorradorPresupuesto;
use web_sys::window;

const BORRADOR_KEY: &str = "presupuesto_borrador";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Guardar el borrador (líneas + cliente seleccionado)
pub fn save_borrador(borrador: &BorradorPresupuesto) {
    if let Some(storage) = get_local_storage() {
        if let Ok(json) = serde_json::to_string(borrador) {
            let _ = storage.set_item(BORRADOR_KEY, &json);
        }
    }
}

/// Restaurar el borrador, si lo hay. Un borrador corrupto se descarta.
pub fn load_borrador() -> Option<BorradorPresupuesto> {
    let json = get_local_storage()?.get_item(BORRADOR_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Borrar el borrador (tras guardar con éxito)
pub fn clear_borrador() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(BORRADOR_KEY);
    }
}
