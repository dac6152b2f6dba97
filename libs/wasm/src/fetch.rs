//! Asset fetching through `window.fetch`.

use tiptop_viewer::{AssetSpec, FetchError, InMemoryAssetSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::js_error_message;

/// Fetches `path` and returns the body bytes.
///
/// # Errors
/// [`FetchError::Status`] for non-OK responses, [`FetchError::Network`] for
/// everything the browser rejects.
pub async fn fetch_bytes(path: &str) -> Result<Vec<u8>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::network(path, "no window"))?;

    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|err| FetchError::network(path, js_error_message(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| FetchError::network(path, "fetch did not return a Response"))?;

    if !response.ok() {
        return Err(FetchError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .array_buffer()
        .map_err(|err| FetchError::network(path, js_error_message(&err)))?;
    let buffer = JsFuture::from(body)
        .await
        .map_err(|err| FetchError::network(path, js_error_message(&err)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetches every asset and stores the outcome, failures included, so the
/// synchronous preloader can run afterwards.
pub async fn prefetch(specs: &[AssetSpec]) -> InMemoryAssetSource {
    let mut source = InMemoryAssetSource::default();
    for spec in specs {
        match fetch_bytes(&spec.path).await {
            Ok(bytes) => source.insert(spec.path.clone(), bytes),
            Err(err) => {
                web_sys::console::warn_1(&err.to_string().into());
                source.insert_error(spec.path.clone(), err);
            }
        }
    }
    source
}
