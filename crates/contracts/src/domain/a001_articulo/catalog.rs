//! Filtro del catálogo: búsqueda por texto y por categoría.
//!
//! Función pura sobre la lista de artículos ya cargada; el filtrado se hace
//! siempre en el cliente. Un resultado vacío es un resultado válido (la UI
//! muestra un mensaje de "sin resultados", nunca un error).

use super::aggregate::{Articulo, Categoria};

/// Selección de categoría del filtro del catálogo.
///
/// `Plaquetas` es una categoría sintética que agrupa las dos variantes de
/// plaqueta; no existe como valor en el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiltroCategoria {
    #[default]
    Todas,
    Plaquetas,
    Solo(Categoria),
}

impl FiltroCategoria {
    fn acepta(&self, categoria: Categoria) -> bool {
        match self {
            FiltroCategoria::Todas => true,
            FiltroCategoria::Plaquetas => categoria.es_plaqueta(),
            FiltroCategoria::Solo(c) => *c == categoria,
        }
    }

    /// Etiqueta para el selector de la UI
    pub fn etiqueta(&self) -> &'static str {
        match self {
            FiltroCategoria::Todas => "Todas las categorías",
            FiltroCategoria::Plaquetas => "Plaquetas",
            FiltroCategoria::Solo(c) => c.etiqueta(),
        }
    }
}

/// Filtra el catálogo por texto (subcadena, sin distinguir mayúsculas, sobre
/// nombre y descripción) y por categoría.
pub fn filtrar_articulos<'a>(
    articulos: &'a [Articulo],
    texto: &str,
    categoria: &FiltroCategoria,
) -> Vec<&'a Articulo> {
    let texto = texto.trim().to_lowercase();
    articulos
        .iter()
        .filter(|a| categoria.acepta(a.categoria))
        .filter(|a| {
            texto.is_empty()
                || a.base.description.to_lowercase().contains(&texto)
                || a.descripcion().to_lowercase().contains(&texto)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_articulo::aggregate::{ArticuloDto, ArticuloId};
    use crate::domain::common::BaseAggregate;

    fn articulo(nombre: &str, descripcion: &str, categoria: Categoria) -> Articulo {
        let mut base =
            BaseAggregate::new(ArticuloId::new_v4(), String::new(), nombre.to_string());
        base.comment = Some(descripcion.to_string());
        Articulo {
            base,
            categoria,
            precio: 1.0,
            stock: 100,
            valoracion: 4.0,
            dimensiones: String::new(),
            imagenes: vec![],
            ficha_tecnica: vec![],
        }
    }

    fn catalogo() -> Vec<Articulo> {
        vec![
            articulo("Ladrillo visto rojo", "Para fachadas", Categoria::LadrilloCaraVista),
            articulo("Ladrillo hueco doble", "Tabiquería", Categoria::LadrilloHueco),
            articulo("Plaqueta rústica teja", "Revestimiento", Categoria::PlaquetaRustica),
            articulo("Plaqueta lisa blanca", "Revestimiento interior", Categoria::PlaquetaLisa),
            articulo("Adoquín gris", "Pavimento exterior", Categoria::Adoquin),
        ]
    }

    #[test]
    fn test_busqueda_sin_distinguir_mayusculas() {
        let cat = catalogo();
        let res = filtrar_articulos(&cat, "LADRILLO", &FiltroCategoria::Todas);
        assert_eq!(res.len(), 2);
        for a in &res {
            assert!(a.base.description.to_lowercase().contains("ladrillo"));
        }
    }

    #[test]
    fn test_busqueda_en_descripcion() {
        let cat = catalogo();
        let res = filtrar_articulos(&cat, "revestimiento", &FiltroCategoria::Todas);
        assert_eq!(res.len(), 2);
    }

    #[test]
    fn test_filtro_por_categoria_exacta() {
        let cat = catalogo();
        let res = filtrar_articulos(&cat, "", &FiltroCategoria::Solo(Categoria::Adoquin));
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].base.description, "Adoquín gris");
    }

    #[test]
    fn test_categoria_agrupada_plaquetas() {
        let cat = catalogo();
        let res = filtrar_articulos(&cat, "", &FiltroCategoria::Plaquetas);
        assert_eq!(res.len(), 2);
        assert!(res.iter().all(|a| a.categoria.es_plaqueta()));
    }

    #[test]
    fn test_texto_y_categoria_combinados() {
        let cat = catalogo();
        let res = filtrar_articulos(&cat, "lisa", &FiltroCategoria::Plaquetas);
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].categoria, Categoria::PlaquetaLisa);
    }

    #[test]
    fn test_sin_resultados_es_lista_vacia() {
        let cat = catalogo();
        let res = filtrar_articulos(&cat, "gres porcelánico", &FiltroCategoria::Todas);
        assert!(res.is_empty());
    }
}
