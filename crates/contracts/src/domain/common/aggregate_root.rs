use super::EntityMetadata;

/// Trait para la raíz de un agregado
///
/// Define los métodos obligatorios y los metadatos de clase de todos los
/// agregados del sistema.
pub trait AggregateRoot {
    /// Tipo del identificador del agregado
    type Id;

    // ========================================================================
    // Métodos de instancia (datos del registro concreto)
    // ========================================================================

    /// Obtener el ID del registro
    fn id(&self) -> Self::Id;

    /// Obtener el código de negocio del registro
    fn code(&self) -> &str;

    /// Obtener la descripción / nombre del registro
    fn description(&self) -> &str;

    /// Obtener los metadatos de ciclo de vida
    fn metadata(&self) -> &EntityMetadata;

    /// Obtener los metadatos mutables
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ========================================================================
    // Metadatos de la clase de agregado (datos estáticos)
    // ========================================================================

    /// Índice del agregado en el sistema (por ejemplo "a001")
    fn aggregate_index() -> &'static str;

    /// Ruta de la colección en el backend (por ejemplo "articulos")
    fn collection_name() -> &'static str;

    /// Nombre del elemento para la UI (singular, por ejemplo "Artículo")
    fn element_name() -> &'static str;

    /// Nombre del listado para la UI (plural, por ejemplo "Artículos")
    fn list_name() -> &'static str;
}
