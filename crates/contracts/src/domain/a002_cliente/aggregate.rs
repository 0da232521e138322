use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClienteId(pub Uuid);

impl ClienteId {
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

impl AggregateId for ClienteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClienteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Cliente de la empresa (constructoras, almacenes, particulares)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(flatten)]
    pub base: BaseAggregate<ClienteId>,

    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub ciudad: String,
    #[serde(default)]
    pub codigo_postal: String,

    /// Identificación fiscal (NIF/CIF)
    #[serde(default)]
    pub nif: String,
}

impl Cliente {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Nombre a mostrar en la UI y el PDF
    pub fn nombre(&self) -> &str {
        &self.base.description
    }

    pub fn update(&mut self, dto: &ClienteDto) {
        self.base.description = dto.nombre.clone();
        self.base.comment = dto.comentario.clone();
        self.email = dto.email.clone().unwrap_or_default();
        self.telefono = dto.telefono.clone().unwrap_or_default();
        self.direccion = dto.direccion.clone().unwrap_or_default();
        self.ciudad = dto.ciudad.clone().unwrap_or_default();
        self.codigo_postal = dto.codigo_postal.clone().unwrap_or_default();
        self.nif = dto.nif.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        if self.nif.trim().is_empty() {
            return Err("El NIF/CIF es obligatorio".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Cliente {
    type Id = ClienteId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "clientes"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

// ============================================================================
// DTO (formulario y forma JSON del backend)
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClienteDto {
    pub id: Option<String>,
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub codigo_postal: Option<String>,
    pub nif: Option<String>,
    pub comentario: Option<String>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ClienteDto {
    /// Validación local del formulario, antes de enviar nada al backend
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        match self.nif.as_deref() {
            Some(nif) if !nif.trim().is_empty() => {}
            _ => return Err("El NIF/CIF es obligatorio".into()),
        }
        if let Some(email) = self.email.as_deref() {
            if !email.trim().is_empty() && !email.contains('@') {
                return Err("El email no es válido".into());
            }
        }
        Ok(())
    }
}

// ============================================================================
// Notas del cliente
// ============================================================================

/// Nota libre asociada a un cliente. El backend devuelve las notas más
/// recientes primero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotaCliente {
    pub id: String,
    pub cliente_id: String,
    pub texto: String,
    pub fecha: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotaClienteDto {
    pub cliente_id: String,
    pub texto: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_validacion() {
        let mut dto = ClienteDto {
            nombre: "Construcciones Vega SL".into(),
            nif: Some("B41999999".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.email = Some("obras-vega".into());
        assert!(dto.validate().is_err());

        dto.email = Some("obras@vega.es".into());
        assert!(dto.validate().is_ok());

        dto.nif = None;
        assert!(dto.validate().is_err());

        dto.nif = Some("B41999999".into());
        dto.nombre = "   ".into();
        assert!(dto.validate().is_err());
    }
}
