//! Cálculo de totales del presupuesto.
//!
//! Política autoritativa de la aplicación: presupuesto de cara al cliente,
//! `total = subtotal + IVA 21%` (`ModoTotales::SoloIva`). El modo con
//! retención de IRPF (15%) queda disponible para presupuestos de uso
//! interno/contable y para el PDF.
//!
//! Los importes se acumulan sin redondear; el redondeo a 2 decimales
//! (mitad hacia arriba) se aplica solo al mostrar o imprimir.

use super::lineas::LineaPresupuesto;
use serde::{Deserialize, Serialize};

/// Tipo de IVA aplicado (21 %)
pub const TIPO_IVA: f64 = 0.21;
/// Tipo de retención de IRPF (15 %)
pub const TIPO_IRPF: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModoTotales {
    /// Total = subtotal + IVA (presupuesto de cara al cliente)
    #[default]
    SoloIva,
    /// Total = subtotal + IVA − IRPF (presupuesto interno/contable)
    ConIrpf,
}

/// Totales derivados de las líneas. Nunca se persisten: se recalculan
/// siempre a partir de las líneas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totales {
    pub subtotal: f64,
    pub iva: f64,
    pub irpf: Option<f64>,
    pub total: f64,
}

pub fn calcular_totales(lineas: &[LineaPresupuesto], modo: ModoTotales) -> Totales {
    let subtotal: f64 = lineas.iter().map(|l| l.importe()).sum();
    let iva = subtotal * TIPO_IVA;
    match modo {
        ModoTotales::SoloIva => Totales {
            subtotal,
            iva,
            irpf: None,
            total: subtotal + iva,
        },
        ModoTotales::ConIrpf => {
            let irpf = subtotal * TIPO_IRPF;
            Totales {
                subtotal,
                iva,
                irpf: Some(irpf),
                total: subtotal + iva - irpf,
            }
        }
    }
}

/// Redondeo a 2 decimales, mitad hacia arriba. Solo para presentación.
pub fn redondear2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

/// Importe formateado para UI/PDF: separador de millares con punto,
/// 2 decimales con coma y símbolo del euro ("1.234,56 €")
pub fn formatear_euros(valor: f64) -> String {
    let texto = format!("{:.2}", redondear2(valor));
    let (entero, decimales) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));

    // Separador de millares cada 3 dígitos desde el final
    let mut agrupado = String::new();
    let cifras: Vec<char> = entero.chars().rev().collect();
    for (i, c) in cifras.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            agrupado.push('.');
        }
        agrupado.push(*c);
    }
    let entero = agrupado.chars().rev().collect::<String>();

    format!("{},{} €", entero, decimales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_articulo::aggregate::Categoria;

    fn linea(cantidad: u32, precio: f64) -> LineaPresupuesto {
        LineaPresupuesto {
            articulo_id: format!("art-{}-{}", cantidad, precio),
            nombre: "Artículo".into(),
            categoria: Categoria::LadrilloHueco,
            precio_unitario: precio,
            cantidad,
        }
    }

    #[test]
    fn test_ejemplo_de_referencia_solo_iva() {
        // lines = [{qty:2, price:1.15}, {qty:1, price:0.95}]
        let lineas = vec![linea(2, 1.15), linea(1, 0.95)];
        let t = calcular_totales(&lineas, ModoTotales::SoloIva);

        assert!((t.subtotal - 3.25).abs() < 1e-9);
        assert!((t.iva - 0.6825).abs() < 1e-9);
        assert_eq!(redondear2(t.iva), 0.68);
        assert_eq!(t.irpf, None);
        assert_eq!(redondear2(t.total), 3.93);
    }

    #[test]
    fn test_con_irpf() {
        let lineas = vec![linea(10, 10.0)];
        let t = calcular_totales(&lineas, ModoTotales::ConIrpf);

        assert_eq!(t.subtotal, 100.0);
        assert_eq!(t.iva, 21.0);
        assert_eq!(t.irpf, Some(15.0));
        assert_eq!(t.total, 106.0);
    }

    #[test]
    fn test_sin_lineas_todo_cero() {
        let t = calcular_totales(&[], ModoTotales::SoloIva);
        assert_eq!(t.subtotal, 0.0);
        assert_eq!(t.total, 0.0);
    }

    #[test]
    fn test_subtotal_exacto_a_dos_decimales() {
        let lineas = vec![linea(3, 0.1), linea(7, 0.35)];
        let t = calcular_totales(&lineas, ModoTotales::SoloIva);
        assert_eq!(redondear2(t.subtotal), 2.75);
        // Recalcular sobre las mismas líneas da exactamente lo mismo
        let t2 = calcular_totales(&lineas, ModoTotales::SoloIva);
        assert_eq!(redondear2(t.total), redondear2(t2.total));
    }

    #[test]
    fn test_redondeo_mitad_hacia_arriba() {
        assert_eq!(redondear2(0.6825), 0.68);
        assert_eq!(redondear2(0.685), 0.69);
        assert_eq!(redondear2(3.9325), 3.93);
        assert_eq!(redondear2(2.0), 2.0);
    }

    #[test]
    fn test_formato_euros() {
        assert_eq!(formatear_euros(3.9325), "3,93 €");
        assert_eq!(formatear_euros(0.0), "0,00 €");
    }

    #[test]
    fn test_formato_euros_con_millares() {
        assert_eq!(formatear_euros(1234.56), "1.234,56 €");
        assert_eq!(formatear_euros(1234567.891), "1.234.567,89 €");
        assert_eq!(formatear_euros(999.99), "999,99 €");
        assert_eq!(formatear_euros(-1234.5), "-1.234,50 €");
    }
}
