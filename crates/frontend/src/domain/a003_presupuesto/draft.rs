//! Borrador del presupuesto en curso, respaldado en localStorage.
//!
//! El estado vive en un `RwSignal` global; cada cambio se refleja en
//! localStorage para sobrevivir a la recarga de la página.

use crate::shared::draft_storage;
use contracts::domain::a001_articulo::aggregate::Articulo;
use contracts::domain::a003_presupuesto::lineas::BorradorPresupuesto;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BorradorStore {
    pub borrador: RwSignal<BorradorPresupuesto>,
}

impl BorradorStore {
    /// Crea el store restaurando, si existe, el borrador guardado.
    pub fn new() -> Self {
        let inicial = draft_storage::load_borrador().unwrap_or_default();
        let borrador = RwSignal::new(inicial);

        // Cada cambio del borrador se persiste en localStorage
        Effect::new(move |_| {
            borrador.with(|b| draft_storage::save_borrador(b));
        });

        Self { borrador }
    }

    pub fn agregar_articulo(&self, articulo: &Articulo) {
        let articulo = articulo.clone();
        self.borrador.update(|b| b.agregar_articulo(&articulo));
    }

    pub fn cambiar_cantidad(&self, articulo_id: &str, cantidad: u32) {
        let id = articulo_id.to_string();
        self.borrador.update(|b| b.cambiar_cantidad(&id, cantidad));
    }

    pub fn cambiar_precio(&self, articulo_id: &str, precio: f64) {
        let id = articulo_id.to_string();
        self.borrador.update(|b| b.cambiar_precio(&id, precio));
    }

    pub fn quitar_linea(&self, articulo_id: &str) {
        let id = articulo_id.to_string();
        self.borrador.update(|b| b.quitar_linea(&id));
    }

    pub fn set_cliente(&self, cliente_id: Option<String>) {
        self.borrador.update(|b| b.cliente_id = cliente_id);
    }

    /// Vacía el borrador y elimina la copia persistida.
    pub fn limpiar(&self) {
        self.borrador.update(|b| b.vaciar());
        draft_storage::clear_borrador();
    }

    /// Número total de unidades en el borrador (para el indicador del menú).
    pub fn total_unidades(&self) -> u32 {
        self.borrador
            .with(|b| b.lineas.iter().map(|l| l.cantidad).sum())
    }
}

impl Default for BorradorStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_borrador() -> BorradorStore {
    use_context::<BorradorStore>().expect("BorradorStore not found in context")
}
