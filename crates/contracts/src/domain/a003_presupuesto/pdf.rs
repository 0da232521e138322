//! Exportación del presupuesto a PDF.
//!
//! Documento A4 de maquetación fija: cabecera con marca y número de
//! documento, bloque de cliente opcional, tabla de líneas con salto de
//! página automático, bloque de totales alineado a la derecha y pie con
//! datos de contacto y nota de validez. Exportar sin líneas se rechaza con
//! `ErrorPdf::SinLineas` y no produce ningún fichero.

use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use std::io::BufWriter;
use thiserror::Error;

use crate::domain::a002_cliente::aggregate::Cliente;

use super::lineas::LineaPresupuesto;
use super::totales::{calcular_totales, formatear_euros, ModoTotales};

// Identidad de la empresa que aparece en el documento
const MARCA: &str = "Cerámicas Alfar S.L.";
const SUBTITULO: &str = "Presupuesto";
const CONTACTO: &str =
    "Cerámicas Alfar S.L. · Ctra. de la Vega km 3, Sevilla · 954 000 000 · pedidos@ceramicasalfar.es";
const NOTA_VALIDEZ: &str =
    "Presupuesto válido durante 30 días, sujeto a disponibilidad de stock.";

// Geometría de página (A4, en mm)
const ANCHO_PAGINA: f64 = 210.0;
const ALTO_PAGINA: f64 = 297.0;
const MARGEN_IZQ: f64 = 15.0;
const MARGEN_DCHA: f64 = 195.0;
const Y_INICIO_TABLA_CONT: f64 = 275.0;
const Y_MINIMA_FILA: f64 = 45.0;
const ALTO_FILA: f64 = 7.0;

// Columnas de la tabla: Producto, Categoría, Precio ud., Cantidad, Subtotal
const X_PRODUCTO: f64 = 15.0;
const X_CATEGORIA: f64 = 93.0;
const X_PRECIO_DCHA: f64 = 150.0;
const X_CANTIDAD_DCHA: f64 = 168.0;
const X_SUBTOTAL_DCHA: f64 = 195.0;

#[derive(Debug, Error)]
pub enum ErrorPdf {
    #[error("El presupuesto no tiene líneas; añade algún artículo antes de exportar")]
    SinLineas,
    #[error("No se pudo generar el PDF: {0}")]
    Generacion(String),
}

/// Datos ya resueltos para la maquetación del documento
pub struct DatosPdf<'a> {
    pub numero: &'a str,
    /// Fecha con formato legible (DD.MM.YYYY)
    pub fecha_texto: String,
    pub cliente: Option<&'a Cliente>,
    pub lineas: &'a [LineaPresupuesto],
    pub modo: ModoTotales,
}

/// Nombre del fichero de descarga:
/// `presupuesto_<cliente-o-general>_<fecha ISO>.pdf`
pub fn nombre_archivo(cliente: Option<&str>, fecha: NaiveDate) -> String {
    let quien = cliente
        .map(slug)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "general".to_string());
    format!("presupuesto_{}_{}.pdf", quien, fecha.format("%Y-%m-%d"))
}

/// Slug del nombre del cliente: minúsculas, vocales acentuadas plegadas,
/// todo lo que no sea alfanumérico pasa a guiones (sin repetir)
fn slug(texto: &str) -> String {
    let mut out = String::with_capacity(texto.len());
    for c in texto.to_lowercase().chars() {
        let plegado = match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            otro => otro,
        };
        if plegado.is_ascii_alphanumeric() {
            out.push(plegado);
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

/// Genera el documento y devuelve los bytes del PDF
pub fn generar_pdf(datos: &DatosPdf) -> Result<Vec<u8>, ErrorPdf> {
    if datos.lineas.is_empty() {
        return Err(ErrorPdf::SinLineas);
    }

    let titulo = format!("{} {}", SUBTITULO, datos.numero);
    let (doc, pagina1, capa1) =
        PdfDocument::new(titulo, Mm(ANCHO_PAGINA), Mm(ALTO_PAGINA), "Capa 1");

    let normal = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ErrorPdf::Generacion(e.to_string()))?;
    let negrita = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ErrorPdf::Generacion(e.to_string()))?;

    let mut capa = doc.get_page(pagina1).get_layer(capa1);
    pintar_pie(&capa, &normal);

    // ---- Cabecera -----------------------------------------------------
    capa.use_text(MARCA, 18.0, Mm(MARGEN_IZQ), Mm(280.0), &negrita);
    capa.use_text(SUBTITULO, 12.0, Mm(MARGEN_IZQ), Mm(273.0), &normal);
    texto_dcha(&capa, datos.numero, 12.0, MARGEN_DCHA, 280.0, &negrita);
    texto_dcha(
        &capa,
        &format!("Fecha: {}", datos.fecha_texto),
        10.0,
        MARGEN_DCHA,
        273.0,
        &normal,
    );
    pintar_regla(&capa, 269.0);

    let mut y = 262.0;

    // ---- Bloque de cliente (opcional) ---------------------------------
    if let Some(cliente) = datos.cliente {
        capa.use_text("Cliente", 9.0, Mm(MARGEN_IZQ), Mm(y), &negrita);
        y -= 5.0;
        capa.use_text(cliente.nombre(), 10.0, Mm(MARGEN_IZQ), Mm(y), &normal);
        y -= 5.0;
        if !cliente.nif.is_empty() {
            capa.use_text(
                format!("NIF/CIF: {}", cliente.nif),
                9.0,
                Mm(MARGEN_IZQ),
                Mm(y),
                &normal,
            );
            y -= 5.0;
        }
        let localidad = [cliente.direccion.as_str(), cliente.ciudad.as_str(), cliente.codigo_postal.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if !localidad.is_empty() {
            capa.use_text(localidad, 9.0, Mm(MARGEN_IZQ), Mm(y), &normal);
            y -= 5.0;
        }
        let contacto = [cliente.telefono.as_str(), cliente.email.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" · ");
        if !contacto.is_empty() {
            capa.use_text(contacto, 9.0, Mm(MARGEN_IZQ), Mm(y), &normal);
            y -= 5.0;
        }
        y -= 4.0;
    }

    // ---- Tabla de líneas ----------------------------------------------
    pintar_cabecera_tabla(&capa, y, &negrita);
    y -= ALTO_FILA;

    for linea in datos.lineas {
        if y < Y_MINIMA_FILA {
            capa = nueva_pagina(&doc, &normal);
            pintar_cabecera_tabla(&capa, Y_INICIO_TABLA_CONT, &negrita);
            y = Y_INICIO_TABLA_CONT - ALTO_FILA;
        }
        capa.use_text(
            recortar(&linea.nombre, 44),
            9.0,
            Mm(X_PRODUCTO),
            Mm(y),
            &normal,
        );
        capa.use_text(
            linea.categoria.etiqueta(),
            9.0,
            Mm(X_CATEGORIA),
            Mm(y),
            &normal,
        );
        texto_dcha(
            &capa,
            &formatear_euros(linea.precio_unitario),
            9.0,
            X_PRECIO_DCHA,
            y,
            &normal,
        );
        texto_dcha(&capa, &linea.cantidad.to_string(), 9.0, X_CANTIDAD_DCHA, y, &normal);
        texto_dcha(
            &capa,
            &formatear_euros(linea.importe()),
            9.0,
            X_SUBTOTAL_DCHA,
            y,
            &normal,
        );
        y -= ALTO_FILA;
    }

    pintar_regla(&capa, y + ALTO_FILA - 2.5);

    // ---- Bloque de totales --------------------------------------------
    // Si no queda sitio para el bloque completo, pasa a una página nueva
    if y < Y_MINIMA_FILA + 25.0 {
        capa = nueva_pagina(&doc, &normal);
        y = Y_INICIO_TABLA_CONT;
    }
    y -= 4.0;

    let totales = calcular_totales(datos.lineas, datos.modo);
    let x_etiqueta = 140.0;

    capa.use_text("Subtotal:", 10.0, Mm(x_etiqueta), Mm(y), &normal);
    texto_dcha(&capa, &formatear_euros(totales.subtotal), 10.0, X_SUBTOTAL_DCHA, y, &normal);
    y -= 6.0;

    capa.use_text("IVA (21 %):", 10.0, Mm(x_etiqueta), Mm(y), &normal);
    texto_dcha(&capa, &formatear_euros(totales.iva), 10.0, X_SUBTOTAL_DCHA, y, &normal);
    y -= 6.0;

    if let Some(irpf) = totales.irpf {
        capa.use_text("IRPF (15 %):", 10.0, Mm(x_etiqueta), Mm(y), &normal);
        texto_dcha(
            &capa,
            &format!("-{}", formatear_euros(irpf)),
            10.0,
            X_SUBTOTAL_DCHA,
            y,
            &normal,
        );
        y -= 6.0;
    }

    pintar_regla_corta(&capa, y + 4.0, x_etiqueta);
    capa.use_text("TOTAL:", 12.0, Mm(x_etiqueta), Mm(y - 1.0), &negrita);
    texto_dcha(
        &capa,
        &formatear_euros(totales.total),
        12.0,
        X_SUBTOTAL_DCHA,
        y - 1.0,
        &negrita,
    );

    // ---- Serializar ----------------------------------------------------
    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        doc.save(&mut writer)
            .map_err(|e| ErrorPdf::Generacion(e.to_string()))?;
    }
    Ok(bytes)
}

fn nueva_pagina(doc: &PdfDocumentReference, normal: &IndirectFontRef) -> PdfLayerReference {
    let (pagina, capa) = doc.add_page(Mm(ANCHO_PAGINA), Mm(ALTO_PAGINA), "Capa 1");
    let capa = doc.get_page(pagina).get_layer(capa);
    pintar_pie(&capa, normal);
    capa
}

fn pintar_cabecera_tabla(capa: &PdfLayerReference, y: f64, negrita: &IndirectFontRef) {
    capa.use_text("Producto", 9.0, Mm(X_PRODUCTO), Mm(y), negrita);
    capa.use_text("Categoría", 9.0, Mm(X_CATEGORIA), Mm(y), negrita);
    texto_dcha(capa, "Precio ud.", 9.0, X_PRECIO_DCHA, y, negrita);
    texto_dcha(capa, "Cantidad", 9.0, X_CANTIDAD_DCHA, y, negrita);
    texto_dcha(capa, "Subtotal", 9.0, X_SUBTOTAL_DCHA, y, negrita);
    pintar_regla(capa, y - 2.5);
}

fn pintar_pie(capa: &PdfLayerReference, normal: &IndirectFontRef) {
    pintar_regla(capa, 22.0);
    capa.use_text(CONTACTO, 7.5, Mm(MARGEN_IZQ), Mm(17.0), normal);
    capa.use_text(NOTA_VALIDEZ, 7.5, Mm(MARGEN_IZQ), Mm(12.5), normal);
}

fn pintar_regla(capa: &PdfLayerReference, y: f64) {
    pintar_regla_corta(capa, y, MARGEN_IZQ)
}

fn pintar_regla_corta(capa: &PdfLayerReference, y: f64, x_desde: f64) {
    let linea = Line {
        points: vec![
            (Point::new(Mm(x_desde), Mm(y)), false),
            (Point::new(Mm(MARGEN_DCHA), Mm(y)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    capa.set_outline_color(Color::Rgb(Rgb::new(0.55, 0.55, 0.55, None)));
    capa.set_outline_thickness(0.4);
    capa.add_shape(linea);
}

/// Texto alineado a la derecha sobre `x_dcha`. Las fuentes integradas no
/// traen métricas en printpdf, así que el ancho se estima con el ancho
/// medio de Helvetica (~0,5 em por carácter).
fn texto_dcha(
    capa: &PdfLayerReference,
    texto: &str,
    tamano: f64,
    x_dcha: f64,
    y: f64,
    fuente: &IndirectFontRef,
) {
    const PT_A_MM: f64 = 0.352_778;
    let ancho = texto.chars().count() as f64 * tamano * 0.5 * PT_A_MM;
    capa.use_text(texto, tamano, Mm(x_dcha - ancho), Mm(y), fuente);
}

fn recortar(texto: &str, max: usize) -> String {
    if texto.chars().count() <= max {
        texto.to_string()
    } else {
        let corto: String = texto.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", corto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_articulo::aggregate::Categoria;

    fn linea(nombre: &str, cantidad: u32, precio: f64) -> LineaPresupuesto {
        LineaPresupuesto {
            articulo_id: nombre.to_string(),
            nombre: nombre.to_string(),
            categoria: Categoria::PlaquetaRustica,
            precio_unitario: precio,
            cantidad,
        }
    }

    fn datos<'a>(lineas: &'a [LineaPresupuesto]) -> DatosPdf<'a> {
        DatosPdf {
            numero: "PPTO-2026-08-0042",
            fecha_texto: "30.08.2026".into(),
            cliente: None,
            lineas,
            modo: ModoTotales::SoloIva,
        }
    }

    #[test]
    fn test_exportar_sin_lineas_se_rechaza() {
        let res = generar_pdf(&datos(&[]));
        assert!(matches!(res, Err(ErrorPdf::SinLineas)));
    }

    #[test]
    fn test_exportar_con_lineas_produce_pdf() {
        let lineas = vec![linea("Plaqueta rústica teja", 2, 1.15)];
        let bytes = generar_pdf(&datos(&lineas)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_muchas_lineas_paginan_sin_fallar() {
        let lineas: Vec<_> = (0..90)
            .map(|i| linea(&format!("Artículo {}", i), 10, 0.5))
            .collect();
        let muchas = generar_pdf(&datos(&lineas)).unwrap();
        let pocas = generar_pdf(&datos(&lineas[..1])).unwrap();
        assert!(muchas.starts_with(b"%PDF"));
        // Con 90 filas el documento ocupa varias páginas y pesa bastante más
        assert!(muchas.len() > pocas.len());
    }

    #[test]
    fn test_nombre_archivo_con_cliente() {
        let fecha = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            nombre_archivo(Some("Construcciones Álvarez, S.L."), fecha),
            "presupuesto_construcciones-alvarez-s-l_2026-08-30.pdf"
        );
    }

    #[test]
    fn test_nombre_archivo_sin_cliente() {
        let fecha = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(nombre_archivo(None, fecha), "presupuesto_general_2026-01-02.pdf");
    }

    #[test]
    fn test_nombre_archivo_cliente_sin_caracteres_validos() {
        let fecha = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            nombre_archivo(Some("¡¡¡"), fecha),
            "presupuesto_general_2026-08-30.pdf"
        );
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Construcciones Núñez"), "construcciones-nunez");
        assert_eq!(slug("  Obras   del Río  "), "obras-del-rio");
    }
}
