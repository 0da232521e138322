//! Títulos de pestañas: única fuente de verdad para los rótulos.

/// Devuelve el título legible de la pestaña para una clave dada.
///
/// Para claves de detalle (restauradas desde la URL) se usa un rótulo
/// genérico; al abrir el detalle desde la propia aplicación el título
/// se fija con [`detail_tab_label`].
pub fn tab_label_for_key(key: &str) -> String {
    let label = match key {
        "d400_resumen" => "Resumen",
        "a001_articulo" => "Catálogo",
        "a002_cliente" => "Clientes",
        "a002_cliente_new" => "Nuevo cliente",
        "a003_presupuesto" => "Presupuestos",
        "a003_presupuesto_editor" => "Nuevo presupuesto",
        k if k.starts_with("a001_articulo_detail_") => "Artículo",
        k if k.starts_with("a002_cliente_detail_") => "Cliente",
        k if k.starts_with("a003_presupuesto_detail_") => "Presupuesto",
        other => other,
    };
    label.to_string()
}

/// Compone el título de una pestaña de detalle: «<entidad> · <identificador>».
pub fn detail_tab_label(entity: &str, identifier: &str) -> String {
    if identifier.is_empty() {
        entity.to_string()
    } else {
        format!("{} · {}", entity, identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_conocido() {
        assert_eq!(tab_label_for_key("a001_articulo"), "Catálogo");
        assert_eq!(tab_label_for_key("a003_presupuesto_editor"), "Nuevo presupuesto");
    }

    #[test]
    fn label_detalle_generico() {
        assert_eq!(tab_label_for_key("a002_cliente_detail_123"), "Cliente");
    }

    #[test]
    fn label_desconocido_devuelve_clave() {
        assert_eq!(tab_label_for_key("zzz"), "zzz");
    }

    #[test]
    fn titulo_detalle() {
        assert_eq!(detail_tab_label("Cliente", "Azulejos Pérez"), "Cliente · Azulejos Pérez");
        assert_eq!(detail_tab_label("Cliente", ""), "Cliente");
    }
}
