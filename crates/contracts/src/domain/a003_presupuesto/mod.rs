pub mod aggregate;
pub mod lineas;
pub mod pdf;
pub mod totales;
