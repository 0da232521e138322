use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticuloId(pub Uuid);

impl ArticuloId {
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

impl AggregateId for ArticuloId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ArticuloId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Categoría (enumeración cerrada de tipos de pieza cerámica)
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Categoria {
    LadrilloCaraVista,
    LadrilloHueco,
    LadrilloMacizo,
    PlaquetaRustica,
    PlaquetaLisa,
    Adoquin,
    Termoarcilla,
}

impl Categoria {
    /// Todas las categorías, en el orden en que se muestran en la UI
    pub const TODAS: [Categoria; 7] = [
        Categoria::LadrilloCaraVista,
        Categoria::LadrilloHueco,
        Categoria::LadrilloMacizo,
        Categoria::PlaquetaRustica,
        Categoria::PlaquetaLisa,
        Categoria::Adoquin,
        Categoria::Termoarcilla,
    ];

    /// Etiqueta legible para la UI y el PDF
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Categoria::LadrilloCaraVista => "Ladrillo cara vista",
            Categoria::LadrilloHueco => "Ladrillo hueco",
            Categoria::LadrilloMacizo => "Ladrillo macizo",
            Categoria::PlaquetaRustica => "Plaqueta rústica",
            Categoria::PlaquetaLisa => "Plaqueta lisa",
            Categoria::Adoquin => "Adoquín",
            Categoria::Termoarcilla => "Termoarcilla",
        }
    }

    /// Valor de la categoría tal y como lo serializa el backend
    pub fn clave(&self) -> &'static str {
        match self {
            Categoria::LadrilloCaraVista => "ladrillo_cara_vista",
            Categoria::LadrilloHueco => "ladrillo_hueco",
            Categoria::LadrilloMacizo => "ladrillo_macizo",
            Categoria::PlaquetaRustica => "plaqueta_rustica",
            Categoria::PlaquetaLisa => "plaqueta_lisa",
            Categoria::Adoquin => "adoquin",
            Categoria::Termoarcilla => "termoarcilla",
        }
    }

    pub fn from_clave(s: &str) -> Option<Categoria> {
        Categoria::TODAS.into_iter().find(|c| c.clave() == s)
    }

    /// Las plaquetas se agrupan bajo la categoría sintética "Plaquetas"
    pub fn es_plaqueta(&self) -> bool {
        matches!(self, Categoria::PlaquetaRustica | Categoria::PlaquetaLisa)
    }
}

impl std::fmt::Display for Categoria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.etiqueta())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Artículo del catálogo (pieza cerámica). Datos de referencia inmutables
/// una vez cargados del backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Articulo {
    #[serde(flatten)]
    pub base: BaseAggregate<ArticuloId>,

    pub categoria: Categoria,

    /// Precio de tarifa por unidad, en euros
    pub precio: f64,

    /// Existencias disponibles
    #[serde(default)]
    pub stock: u32,

    /// Valoración media (0..5)
    #[serde(default)]
    pub valoracion: f64,

    /// Dimensiones en texto libre (por ejemplo "24×11,5×5 cm")
    #[serde(default)]
    pub dimensiones: String,

    /// URLs de imágenes, en orden de presentación
    #[serde(default)]
    pub imagenes: Vec<String>,

    /// Ficha técnica: pares clave/valor en texto libre, ordenados
    #[serde(default)]
    pub ficha_tecnica: Vec<(String, String)>,
}

impl Articulo {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Mapeo explícito desde la forma JSON del backend
    pub fn from_dto(dto: ArticuloDto) -> Result<Self, String> {
        let id = match dto.id.as_deref() {
            Some(s) => ArticuloId::from_string(s)?,
            None => ArticuloId::new_v4(),
        };
        let categoria = Categoria::from_clave(&dto.categoria)
            .ok_or_else(|| format!("Categoría desconocida: {}", dto.categoria))?;

        let mut base = BaseAggregate::new(id, dto.codigo.unwrap_or_default(), dto.nombre);
        base.comment = dto.descripcion;

        Ok(Self {
            base,
            categoria,
            precio: dto.precio,
            stock: dto.stock,
            valoracion: dto.valoracion,
            dimensiones: dto.dimensiones.unwrap_or_default(),
            imagenes: dto.imagenes,
            ficha_tecnica: dto.ficha_tecnica,
        })
    }

    /// Descripción comercial (texto libre del backend)
    pub fn descripcion(&self) -> &str {
        self.base.comment.as_deref().unwrap_or("")
    }
}

impl AggregateRoot for Articulo {
    type Id = ArticuloId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "articulos"
    }

    fn element_name() -> &'static str {
        "Artículo"
    }

    fn list_name() -> &'static str {
        "Artículos"
    }
}

// ============================================================================
// DTO (forma JSON del backend, campos en castellano y snake_case)
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArticuloDto {
    pub id: Option<String>,
    pub codigo: Option<String>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria: String,
    pub precio: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub valoracion: f64,
    pub dimensiones: Option<String>,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub ficha_tecnica: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categoria_clave_roundtrip() {
        for c in Categoria::TODAS {
            assert_eq!(Categoria::from_clave(c.clave()), Some(c));
        }
        assert_eq!(Categoria::from_clave("gres"), None);
    }

    #[test]
    fn test_from_dto_categoria_desconocida() {
        let dto = ArticuloDto {
            nombre: "Ladrillo visto rojo".into(),
            categoria: "inexistente".into(),
            precio: 0.35,
            ..Default::default()
        };
        assert!(Articulo::from_dto(dto).is_err());
    }

    #[test]
    fn test_from_dto_completo() {
        let dto = ArticuloDto {
            id: Some("7f5f1a8e-3a55-4a7a-9d3e-0a1b2c3d4e5f".into()),
            codigo: Some("ART-0001".into()),
            nombre: "Plaqueta rústica teja".into(),
            descripcion: Some("Acabado envejecido".into()),
            categoria: "plaqueta_rustica".into(),
            precio: 1.15,
            stock: 12000,
            valoracion: 4.5,
            dimensiones: Some("24×5×2 cm".into()),
            imagenes: vec!["https://cdn.example/p1.jpg".into()],
            ficha_tecnica: vec![("Absorción".into(), "≤ 6%".into())],
        };
        let art = Articulo::from_dto(dto).unwrap();
        assert_eq!(art.base.description, "Plaqueta rústica teja");
        assert_eq!(art.categoria, Categoria::PlaquetaRustica);
        assert!(art.categoria.es_plaqueta());
        assert_eq!(art.descripcion(), "Acabado envejecido");
    }
}
