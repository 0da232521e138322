pub mod d400_resumen;

pub use d400_resumen::ResumenDashboard;
