use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Agregado base con los campos obligatorios de todos los agregados
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Identificador único del registro
    pub id: Id,
    /// Código de negocio (por ejemplo "ART-0001", "PPTO-2026-08-1234")
    pub code: String,
    /// Descripción / nombre del registro
    pub description: String,
    /// Comentario libre
    pub comment: Option<String>,
    /// Metadatos de ciclo de vida
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Crear un agregado nuevo
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Actualizar el timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    /// Establecer el comentario
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}
