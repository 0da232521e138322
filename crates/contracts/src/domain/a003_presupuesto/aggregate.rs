use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lineas::{BorradorPresupuesto, LineaPresupuesto};
use super::totales::ModoTotales;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresupuestoId(pub Uuid);

impl PresupuestoId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PresupuestoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PresupuestoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Número de documento: `PPTO-<año>-<mes 2 dígitos>-<4 dígitos pseudoaleatorios>`
pub fn generar_numero(ahora: DateTime<Utc>) -> String {
    // 4 dígitos derivados de un UUID v4; suficiente para distinguir
    // documentos emitidos el mismo mes
    let bytes = Uuid::new_v4().into_bytes();
    let sufijo = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) % 10_000;
    format!("PPTO-{}-{:02}-{:04}", ahora.year(), ahora.month(), sufijo)
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Presupuesto guardado. Las líneas van tipadas en el propio documento;
/// los totales nunca se persisten, se recalculan siempre de las líneas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presupuesto {
    #[serde(flatten)]
    pub base: BaseAggregate<PresupuestoId>,

    /// Número de documento (por ejemplo "PPTO-2026-08-4821")
    pub numero: String,

    /// Fecha del documento (YYYY-MM-DD)
    pub fecha: String,

    pub cliente_id: Option<String>,

    /// Nombre del cliente en el momento de guardar (para el listado)
    pub cliente_nombre: Option<String>,

    pub lineas: Vec<LineaPresupuesto>,

    #[serde(default)]
    pub modo: ModoTotales,
}

impl Presupuesto {
    /// Construir el documento a partir del borrador en curso
    pub fn desde_borrador(
        borrador: &BorradorPresupuesto,
        cliente_nombre: Option<String>,
        ahora: DateTime<Utc>,
    ) -> Self {
        let numero = generar_numero(ahora);
        let fecha = ahora.format("%Y-%m-%d").to_string();
        let description = format!("{} de {}", numero, fecha);
        let base = BaseAggregate::new(PresupuestoId::new_v4(), numero.clone(), description);

        Self {
            base,
            numero,
            fecha,
            cliente_id: borrador.cliente_id.clone(),
            cliente_nombre,
            lineas: borrador.lineas.clone(),
            modo: ModoTotales::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.lineas.is_empty() {
            return Err("El presupuesto no tiene líneas".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Presupuesto {
    type Id = PresupuestoId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "presupuestos"
    }

    fn element_name() -> &'static str {
        "Presupuesto"
    }

    fn list_name() -> &'static str {
        "Presupuestos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_articulo::aggregate::Categoria;
    use chrono::TimeZone;

    #[test]
    fn test_formato_numero_documento() {
        let fecha = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let numero = generar_numero(fecha);

        assert!(numero.starts_with("PPTO-2026-08-"));
        let sufijo = numero.rsplit('-').next().unwrap();
        assert_eq!(sufijo.len(), 4);
        assert!(sufijo.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_mes_con_dos_digitos() {
        let fecha = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        assert!(generar_numero(fecha).starts_with("PPTO-2026-01-"));
    }

    #[test]
    fn test_desde_borrador() {
        let mut borrador = BorradorPresupuesto::default();
        borrador.cliente_id = Some("c-1".into());
        borrador.lineas.push(LineaPresupuesto {
            articulo_id: "a-1".into(),
            nombre: "Adoquín gris".into(),
            categoria: Categoria::Adoquin,
            precio_unitario: 0.6,
            cantidad: 400,
        });

        let ahora = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let doc = Presupuesto::desde_borrador(&borrador, Some("Obras Pino SL".into()), ahora);

        assert_eq!(doc.fecha, "2026-08-30");
        assert_eq!(doc.lineas.len(), 1);
        assert_eq!(doc.cliente_id.as_deref(), Some("c-1"));
        assert!(doc.validate().is_ok());
        assert_eq!(doc.base.code, doc.numero);
    }
}
