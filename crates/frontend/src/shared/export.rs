/// Descarga de ficheros generados en el cliente (PDF del presupuesto)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Ofrece unos bytes de PDF como descarga del navegador con el nombre dado
pub fn descargar_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let blob = crear_blob_pdf(bytes)?;
    descargar_blob(&blob, filename)
}

/// Crea un Blob con los bytes del PDF
fn crear_blob_pdf(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    let vista = js_sys::Uint8Array::from(bytes);
    array.push(&vista.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_buffer_source_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Inicia la descarga del Blob a través de un <a download> temporal
fn descargar_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
