use serde::{Deserialize, Serialize};

/// Metadatos de ciclo de vida de un agregado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Fecha de creación del registro
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Fecha de la última actualización
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Borrado lógico (soft delete)
    #[serde(default)]
    pub is_deleted: bool,
    /// Versión del registro
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    /// Crear metadatos para un agregado nuevo
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }

    /// Actualizar el timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
