//! Ficha de cliente
//!
//! Patrón MVVM simplificado:
//! - model.rs: funciones de API (fetch, save, delete, notas)
//! - view_model.rs: estado del formulario y comandos
//! - view.rs: componente Leptos (UI pura)

mod model;
mod view;
mod view_model;

pub use view::ClienteDetail;
pub use view_model::ClienteDetailsViewModel;
