use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait para los tipos de identificador de agregado
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convertir el ID a cadena
    fn as_string(&self) -> String;

    /// Crear un ID a partir de una cadena
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}
