//! Modelo de líneas del presupuesto en curso.
//!
//! Invariante: como mucho una línea por artículo. Volver a añadir un artículo
//! ya presente incrementa la cantidad de su línea en vez de duplicarla.
//!
//! Políticas fijadas (las dos variantes históricas de la UI discrepaban):
//! - incremento al re-añadir: `INCREMENTO_CANTIDAD` (+1)
//! - cantidad mínima: 1; poner 0 NO elimina la línea, se fija a 1.
//!   Eliminar es siempre una acción explícita (`quitar_linea`).

use crate::domain::a001_articulo::aggregate::{Articulo, Categoria};
use serde::{Deserialize, Serialize};

/// Cantidad que se añade al agregar un artículo (nuevo o ya presente)
pub const INCREMENTO_CANTIDAD: u32 = 1;

/// Línea del presupuesto. Referencia al artículo por id; el precio unitario
/// es independiente del precio de tarifa (admite precio negociado).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineaPresupuesto {
    pub articulo_id: String,
    pub nombre: String,
    pub categoria: Categoria,
    pub precio_unitario: f64,
    pub cantidad: u32,
}

impl LineaPresupuesto {
    /// Importe de la línea (cantidad × precio unitario)
    pub fn importe(&self) -> f64 {
        self.cantidad as f64 * self.precio_unitario
    }
}

/// Presupuesto en curso: líneas más cliente opcional. Vive en el estado de la
/// UI (y en localStorage como borrador) hasta que se guarda o se exporta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorradorPresupuesto {
    pub lineas: Vec<LineaPresupuesto>,
    pub cliente_id: Option<String>,
}

impl BorradorPresupuesto {
    pub fn esta_vacio(&self) -> bool {
        self.lineas.is_empty()
    }

    /// Añadir un artículo del catálogo. Si ya hay línea para ese artículo,
    /// incrementa su cantidad; si no, crea la línea con el precio de tarifa.
    pub fn agregar_articulo(&mut self, articulo: &Articulo) {
        let id = articulo.to_string_id();
        if let Some(linea) = self.lineas.iter_mut().find(|l| l.articulo_id == id) {
            linea.cantidad += INCREMENTO_CANTIDAD;
        } else {
            self.lineas.push(LineaPresupuesto {
                articulo_id: id,
                nombre: articulo.base.description.clone(),
                categoria: articulo.categoria,
                precio_unitario: articulo.precio,
                cantidad: INCREMENTO_CANTIDAD,
            });
        }
    }

    /// Cambiar la cantidad de una línea. La cantidad mínima es 1.
    pub fn cambiar_cantidad(&mut self, articulo_id: &str, cantidad: u32) {
        if let Some(linea) = self.lineas.iter_mut().find(|l| l.articulo_id == articulo_id) {
            linea.cantidad = cantidad.max(1);
        }
    }

    /// Cambiar el precio unitario de una línea (precio negociado).
    /// Los precios negativos se fijan a 0.
    pub fn cambiar_precio(&mut self, articulo_id: &str, precio: f64) {
        if let Some(linea) = self.lineas.iter_mut().find(|l| l.articulo_id == articulo_id) {
            linea.precio_unitario = precio.max(0.0);
        }
    }

    /// Quitar una línea. Si el id no existe, no hace nada.
    pub fn quitar_linea(&mut self, articulo_id: &str) {
        self.lineas.retain(|l| l.articulo_id != articulo_id);
    }

    pub fn vaciar(&mut self) {
        self.lineas.clear();
        self.cliente_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_articulo::aggregate::ArticuloId;
    use crate::domain::common::BaseAggregate;

    fn articulo(nombre: &str, precio: f64) -> Articulo {
        Articulo {
            base: BaseAggregate::new(ArticuloId::new_v4(), String::new(), nombre.to_string()),
            categoria: Categoria::LadrilloHueco,
            precio,
            stock: 500,
            valoracion: 4.0,
            dimensiones: String::new(),
            imagenes: vec![],
            ficha_tecnica: vec![],
        }
    }

    #[test]
    fn test_agregar_dos_veces_fusiona_en_una_linea() {
        let art = articulo("Ladrillo hueco doble", 0.35);
        let mut borrador = BorradorPresupuesto::default();
        borrador.agregar_articulo(&art);
        borrador.agregar_articulo(&art);

        assert_eq!(borrador.lineas.len(), 1);
        assert_eq!(borrador.lineas[0].cantidad, 2 * INCREMENTO_CANTIDAD);
        assert_eq!(borrador.lineas[0].precio_unitario, 0.35);
    }

    #[test]
    fn test_articulos_distintos_lineas_distintas() {
        let a = articulo("Ladrillo hueco doble", 0.35);
        let b = articulo("Plaqueta lisa blanca", 1.15);
        let mut borrador = BorradorPresupuesto::default();
        borrador.agregar_articulo(&a);
        borrador.agregar_articulo(&b);
        assert_eq!(borrador.lineas.len(), 2);
    }

    #[test]
    fn test_cantidad_cero_se_fija_a_uno() {
        let art = articulo("Ladrillo hueco doble", 0.35);
        let mut borrador = BorradorPresupuesto::default();
        borrador.agregar_articulo(&art);
        let id = borrador.lineas[0].articulo_id.clone();

        borrador.cambiar_cantidad(&id, 0);
        assert_eq!(borrador.lineas.len(), 1);
        assert_eq!(borrador.lineas[0].cantidad, 1);

        borrador.cambiar_cantidad(&id, 250);
        assert_eq!(borrador.lineas[0].cantidad, 250);
    }

    #[test]
    fn test_precio_negativo_se_fija_a_cero() {
        let art = articulo("Ladrillo hueco doble", 0.35);
        let mut borrador = BorradorPresupuesto::default();
        borrador.agregar_articulo(&art);
        let id = borrador.lineas[0].articulo_id.clone();

        borrador.cambiar_precio(&id, -5.0);
        assert_eq!(borrador.lineas[0].precio_unitario, 0.0);

        // Precio negociado por debajo de tarifa: permitido
        borrador.cambiar_precio(&id, 0.28);
        assert_eq!(borrador.lineas[0].precio_unitario, 0.28);
    }

    #[test]
    fn test_quitar_linea_inexistente_no_hace_nada() {
        let art = articulo("Ladrillo hueco doble", 0.35);
        let mut borrador = BorradorPresupuesto::default();
        borrador.agregar_articulo(&art);

        borrador.quitar_linea("no-existe");
        assert_eq!(borrador.lineas.len(), 1);

        let id = borrador.lineas[0].articulo_id.clone();
        borrador.quitar_linea(&id);
        assert!(borrador.esta_vacio());
    }
}
