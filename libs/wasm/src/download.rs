//! Blob download sink.

use tiptop_viewer::{ExportArtifact, ExportError, ExportSink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::js_error_message;

/// Saves artifacts through a temporary `<a download>` element.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDownloadSink;

impl ExportSink for BrowserDownloadSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), ExportError> {
        trigger_download(artifact).map_err(|err| ExportError::Sink(js_error_message(&err)))
    }
}

fn trigger_download(artifact: &ExportArtifact) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(&artifact.bytes[..]));
    let options = BlobPropertyBag::new();
    options.set_type(&artifact.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)
}
