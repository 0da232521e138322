pub mod a001_articulo;
pub mod a002_cliente;
pub mod a003_presupuesto;
