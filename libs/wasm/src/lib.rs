//! WASM-facing entry points for the TipTop viewer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The page owns the Three.js renderer; Rust owns the viewer
//! state and answers with JSON and typed arrays. Native tests exercise the
//! `_internal` helpers and the JSON modules to avoid depending on a JS host.
//!
//! ```
//! let handle = tiptop_wasm::mesh_for_slot_internal(None, "optimized");
//! assert!(handle.is_none());
//! ```

use config::ViewerConfig;
use tiptop_viewer::{
    AssetCache, AssetSlot, AssetSpec, Clock, PromptAnswers, RandomJitter, ViewerContext,
    ViewerError,
};
use wasm_bindgen::prelude::*;

mod download;
mod fetch;
pub mod frame;
mod mesh_handle;
pub mod ui_state;

pub use download::BrowserDownloadSink;
pub use frame::{FrameCapture, FrameDescription};
pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "tiptop-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Static labels for the page as JSON.
#[wasm_bindgen(js_name = uiText)]
pub fn ui_text() -> Result<String, JsValue> {
    serde_json::to_string(&ui_state::ui_text()).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Wall clock backed by `Date.now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateClock;

impl Clock for DateClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

type BrowserContext = ViewerContext<DateClock, RandomJitter>;

/// Fetches both STL assets and builds a viewer for a `width` x `height`
/// canvas.
///
/// Failed fetches degrade to placeholder cubes; the promise only rejects when
/// the page has no `window`.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const viewer = await createViewer(canvas.clientWidth, canvas.clientHeight);
/// // const state = JSON.parse(viewer.uiState());
/// ```
#[wasm_bindgen(js_name = createViewer)]
pub async fn create_viewer(width: u32, height: u32) -> Result<ViewerHandle, JsValue> {
    if web_sys::window().is_none() {
        return Err(JsValue::from_str("createViewer requires a browser window"));
    }
    let specs = AssetSpec::defaults();
    let source = fetch::prefetch(&specs).await;

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let mut context = ViewerContext::new(
        ViewerConfig::default(),
        DateClock,
        RandomJitter::seeded(seed),
        width,
        height,
    );
    context.preload_from(&source, &specs);
    Ok(ViewerHandle { context })
}

/// Handle to a live viewer. Every method is a no-op after `dispose`.
#[wasm_bindgen]
pub struct ViewerHandle {
    context: BrowserContext,
}

#[wasm_bindgen]
impl ViewerHandle {
    /// File picker changed. `filePresent` is false when the picker was cancelled.
    #[wasm_bindgen(js_name = selectFile)]
    pub fn select_file(&mut self, file_present: bool) -> bool {
        self.context.select_file(file_present).is_some()
    }

    /// Opens the prompt if the optimize button is enabled.
    #[wasm_bindgen(js_name = requestOptimization)]
    pub fn request_optimization(&mut self) -> bool {
        self.context.request_optimization()
    }

    #[wasm_bindgen(js_name = dismissPrompt)]
    pub fn dismiss_prompt(&mut self) {
        self.context.dismiss_prompt();
    }

    /// Confirms the prompt.
    ///
    /// # Errors
    /// Rejects with the alert text when an answer is empty.
    #[wasm_bindgen(js_name = submitPrompt)]
    pub fn submit_prompt(
        &mut self,
        force_scaling: String,
        resolution: String,
        volume_fraction_limit: String,
    ) -> Result<String, JsValue> {
        let answers = PromptAnswers::new(force_scaling, resolution, volume_fraction_limit);
        self.context
            .submit_prompt(answers)
            .map(|outcome| ui_state::outcome_name(outcome).to_string())
            .map_err(|err| JsValue::from_str(&alert_text(&err)))
    }

    /// Advances the run to `Date.now()`. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        !self.context.tick().is_empty()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Downloads `optimized_model.stl`. Returns false, exporting nothing,
    /// until a run has completed.
    ///
    /// # Errors
    /// Returns the browser's error text when the download could not start.
    pub fn download(&self) -> Result<bool, JsValue> {
        self.context
            .download(&mut BrowserDownloadSink)
            .map_err(|err| {
                web_sys::console::warn_1(&err.to_string().into());
                JsValue::from_str(&err.to_string())
            })
    }

    /// Control state as JSON.
    #[wasm_bindgen(js_name = uiState)]
    pub fn ui_state(&self) -> Result<String, JsValue> {
        ui_state::snapshot_json(&self.context.snapshot())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Latest frame (camera, lights, orbit limits, displayed object) as JSON,
    /// or `undefined` once disposed.
    pub fn frame(&self) -> Result<Option<String>, JsValue> {
        frame_json_internal(&self.context).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Camera position as [x, y, z].
    #[wasm_bindgen(js_name = cameraPosition)]
    pub fn camera_position(&self) -> Vec<f64> {
        self.context.scene().camera().position.to_array().to_vec()
    }

    /// Camera look-at target as [x, y, z].
    #[wasm_bindgen(js_name = cameraTarget)]
    pub fn camera_target(&self) -> Vec<f64> {
        self.context.scene().camera().target.to_array().to_vec()
    }

    /// Geometry of the displayed asset.
    #[wasm_bindgen(js_name = displayedMesh)]
    pub fn displayed_mesh(&self) -> Option<MeshHandle> {
        self.context.displayed_asset().map(MeshHandle::from_asset)
    }

    /// Geometry of a slot ("original" or "optimized") whether displayed or not.
    #[wasm_bindgen(js_name = meshForSlot)]
    pub fn mesh_for_slot(&self, slot: &str) -> Option<MeshHandle> {
        mesh_for_slot_internal(self.context.assets(), slot)
    }

    /// Cancels any run and releases the scene. Safe to call twice.
    pub fn dispose(&mut self) {
        self.context.teardown();
    }
}

/// Host-only helper that renders one frame into JSON.
///
/// # Errors
/// Returns the serializer error.
pub fn frame_json_internal<C, J>(
    context: &ViewerContext<C, J>,
) -> Result<Option<String>, serde_json::Error>
where
    C: Clock,
    J: tiptop_viewer::Jitter,
{
    let mut capture = FrameCapture::default();
    if !context.render_frame(&mut capture) {
        return Ok(None);
    }
    capture
        .take()
        .map(|frame| serde_json::to_string(&frame))
        .transpose()
}

/// Host-only helper resolving a slot name against a cache.
pub fn mesh_for_slot_internal(assets: Option<&AssetCache>, slot: &str) -> Option<MeshHandle> {
    let slot = parse_slot(slot)?;
    assets.map(|cache| MeshHandle::from_asset(cache.get(slot)))
}

fn parse_slot(name: &str) -> Option<AssetSlot> {
    AssetSlot::ALL
        .into_iter()
        .find(|&slot| mesh_handle::slot_name(slot) == name)
}

/// Text shown to the user for a failed operation.
pub fn alert_text(err: &ViewerError) -> String {
    match err {
        ViewerError::Validation(validation) => validation.alert_message().to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests;
