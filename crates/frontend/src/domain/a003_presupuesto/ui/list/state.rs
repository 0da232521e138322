use contracts::domain::a003_presupuesto::aggregate::Presupuesto;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PresupuestoListState {
    pub items: Vec<Presupuesto>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<PresupuestoListState> {
    RwSignal::new(PresupuestoListState::default())
}
