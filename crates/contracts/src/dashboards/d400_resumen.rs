use serde::{Deserialize, Serialize};

/// Respuesta de `GET /dashboard/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumenStats {
    #[serde(default)]
    pub total_articulos: u64,
    #[serde(default)]
    pub total_clientes: u64,
    #[serde(default)]
    pub total_presupuestos: u64,
    /// Importe acumulado de los presupuestos emitidos, en euros
    #[serde(default)]
    pub importe_total: f64,
}
