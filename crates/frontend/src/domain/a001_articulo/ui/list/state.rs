use contracts::domain::a001_articulo::aggregate::Articulo;
use contracts::domain::a001_articulo::catalog::FiltroCategoria;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ArticuloListState {
    pub items: Vec<Articulo>,
    pub search_query: String,
    pub categoria: FiltroCategoria,
    pub is_loaded: bool,
}

impl Default for ArticuloListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            categoria: FiltroCategoria::Todas,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ArticuloListState> {
    RwSignal::new(ArticuloListState::default())
}
