//! # Viewer Context
//!
//! The single owned state object behind the page: asset cache, scene, view
//! controller, sequencer, status line and the UI flags derived from them.
//! Every host event is one method call. After [`ViewerContext::teardown`]
//! every method is a no-op.

use config::constants::{
    completion_status, LOADING_LABEL, RUN_LABEL, STATUS_ASSETS_DEGRADED, STATUS_AWAITING_UPLOAD,
    STATUS_READY,
};
use config::ViewerConfig;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::assets::{preload, AssetCache, AssetSlot, AssetSource, AssetSpec, LoadStatus, MeshAsset};
use crate::error::ViewerError;
use crate::export::{export_optimized, ExportSink};
use crate::scene::{CameraPose, FrameDriver, SceneManager};
use crate::sequencer::{
    Clock, Jitter, PromptAnswers, Sequencer, SequencerEvent, StartOutcome,
};
use crate::view::{ViewController, ViewEvent, ViewState};

/// Control state the host renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    pub status: String,
    pub view: ViewState,
    pub upload_enabled: bool,
    pub optimize_enabled: bool,
    pub prompt_open: bool,
    pub download_visible: bool,
    /// Label of the busy indicator, if one is shown.
    pub loading_label: Option<&'static str>,
    /// Rounded run progress while a run is active.
    pub progress_percent: Option<u32>,
    pub camera: CameraPose,
    pub disposed: bool,
}

/// Owned viewer state, generic over its time and randomness sources.
///
/// # Example
///
/// ```rust
/// use config::ViewerConfig;
/// use tiptop_viewer::{
///     AssetSpec, FixedJitter, InMemoryAssetSource, ManualClock, PromptAnswers, ViewState,
///     ViewerContext,
/// };
///
/// let clock = ManualClock::new(0);
/// let mut ctx = ViewerContext::new(ViewerConfig::default(), &clock, FixedJitter(2.5), 800, 600);
/// ctx.preload_from(&InMemoryAssetSource::default(), &AssetSpec::defaults());
///
/// ctx.select_file(true);
/// assert!(ctx.request_optimization());
/// ctx.submit_prompt(PromptAnswers::new("1", "2", "3")).unwrap();
///
/// clock.advance(10_000);
/// ctx.tick();
/// assert_eq!(ctx.view_state(), ViewState::ShowingOptimized);
/// ```
#[derive(Debug)]
pub struct ViewerContext<C, J> {
    assets: Option<AssetCache>,
    scene: SceneManager,
    view: ViewController,
    sequencer: Sequencer,
    clock: C,
    jitter: J,
    status: String,
    prompt_open: bool,
    download_available: bool,
    disposed: bool,
}

impl<C: Clock, J: Jitter> ViewerContext<C, J> {
    /// Creates a context for a `width` x `height` surface with no assets yet.
    pub fn new(config: ViewerConfig, clock: C, jitter: J, width: u32, height: u32) -> Self {
        Self {
            assets: None,
            scene: SceneManager::new(&config, width, height),
            view: ViewController::new(),
            sequencer: Sequencer::new(&config),
            clock,
            jitter,
            status: STATUS_AWAITING_UPLOAD.to_string(),
            prompt_open: false,
            download_available: false,
            disposed: false,
        }
    }

    /// Installs the preloaded cache.
    ///
    /// A cache arriving after teardown is stored but changes nothing visible.
    pub fn install_assets(&mut self, cache: AssetCache) {
        if !self.disposed {
            self.status = if cache.any_placeholder() {
                STATUS_ASSETS_DEGRADED
            } else {
                STATUS_AWAITING_UPLOAD
            }
            .to_string();
        }
        info!(degraded = cache.any_placeholder(), "asset cache installed");
        self.assets = Some(cache);
    }

    /// Preloads both slots from `source` and installs the result.
    pub fn preload_from<S>(&mut self, source: &S, specs: &[AssetSpec; 2])
    where
        S: AssetSource + ?Sized,
    {
        self.install_assets(preload(source, specs));
    }

    /// Handles the file picker. The file content is never read; a cancelled
    /// picker (`file_present == false`) does nothing.
    pub fn select_file(&mut self, file_present: bool) -> Option<ViewState> {
        if self.disposed || !file_present {
            return None;
        }
        let state = self
            .view
            .handle(ViewEvent::FileSelected, self.assets.as_ref(), &mut self.scene)?;
        self.status = STATUS_READY.to_string();
        Some(state)
    }

    /// Opens the prompt if the optimize control is enabled.
    pub fn request_optimization(&mut self) -> bool {
        if !self.optimize_enabled() {
            return false;
        }
        self.prompt_open = true;
        true
    }

    /// Closes the prompt without starting a run.
    pub fn dismiss_prompt(&mut self) {
        self.prompt_open = false;
    }

    /// Starts the run with the prompt answers.
    ///
    /// Returns [`StartOutcome::Cancelled`] after teardown and
    /// [`StartOutcome::NotReady`] before the original model is displayed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Validation`] for an empty answer; the prompt
    /// stays open and nothing else changes.
    pub fn submit_prompt(&mut self, answers: PromptAnswers) -> Result<StartOutcome, ViewerError> {
        if self.disposed {
            return Ok(StartOutcome::Cancelled);
        }
        if self.view.state() != ViewState::ShowingOriginal && self.sequencer.is_idle() {
            debug!("prompt submitted while no original is shown");
            return Ok(StartOutcome::NotReady);
        }

        let now = self.clock.now_ms();
        let outcome = self.sequencer.start(answers, now)?;
        if outcome == StartOutcome::Started {
            self.prompt_open = false;
            if let Some(text) = self.sequencer.run().and_then(|run| run.phase.status_text()) {
                self.status = text.to_string();
            }
        }
        Ok(outcome)
    }

    /// Advances the sequencer to the current clock reading.
    pub fn tick(&mut self) -> Vec<SequencerEvent> {
        if self.disposed {
            return Vec::new();
        }
        let now = self.clock.now_ms();
        let events = self.sequencer.advance(now, &mut self.jitter);
        for event in &events {
            match event {
                SequencerEvent::Progressed { phase, .. } => {
                    if let Some(text) = phase.status_text() {
                        self.status = text.to_string();
                    }
                }
                SequencerEvent::Completed => {
                    self.view
                        .handle(ViewEvent::RunCompleted, self.assets.as_ref(), &mut self.scene);
                    self.status = completion_status();
                    self.download_available = true;
                }
            }
        }
        events
    }

    /// Draws one frame through `driver`. False after teardown.
    pub fn render_frame(&self, driver: &mut dyn FrameDriver) -> bool {
        if self.disposed {
            return false;
        }
        self.scene.render_frame(self.assets.as_ref(), driver)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.disposed {
            self.scene.resize(width, height);
        }
    }

    /// Exports the optimized model into `sink`.
    ///
    /// Returns `Ok(false)` without touching the sink until a run has
    /// completed, when no cache is installed, or after teardown.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Export`] when encoding or delivery fails.
    pub fn download(&self, sink: &mut dyn ExportSink) -> Result<bool, ViewerError> {
        if !self.download_available || self.disposed {
            return Ok(false);
        }
        let Some(cache) = self.assets.as_ref() else {
            return Ok(false);
        };
        let artifact = export_optimized(cache)?;
        sink.deliver(&artifact).map_err(|err| {
            warn!(error = %err, "download failed");
            err
        })?;
        Ok(true)
    }

    /// Cancels any run, detaches the displayed asset and releases the
    /// surface. Idempotent.
    pub fn teardown(&mut self) {
        if self.disposed {
            return;
        }
        self.sequencer.cancel();
        self.view
            .handle(ViewEvent::Reset, self.assets.as_ref(), &mut self.scene);
        self.scene.teardown();
        self.prompt_open = false;
        self.download_available = false;
        self.disposed = true;
        info!("viewer torn down");
    }

    fn optimize_enabled(&self) -> bool {
        !self.disposed && self.view.state() == ViewState::ShowingOriginal && self.sequencer.is_idle()
    }

    /// Current control state.
    pub fn snapshot(&self) -> UiSnapshot {
        let running = self.sequencer.is_running();
        let loading_label = if self.disposed {
            None
        } else if self.assets.is_none() {
            Some(LOADING_LABEL)
        } else if running {
            Some(RUN_LABEL)
        } else {
            None
        };

        UiSnapshot {
            status: self.status.clone(),
            view: self.view.state(),
            upload_enabled: !self.disposed
                && self.assets.is_some()
                && self.view.state() == ViewState::None,
            optimize_enabled: self.optimize_enabled(),
            prompt_open: self.prompt_open,
            download_visible: self.download_available,
            loading_label,
            progress_percent: running.then(|| self.sequencer.progress().round() as u32),
            camera: self.scene.camera().pose(),
            disposed: self.disposed,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    pub fn progress(&self) -> f64 {
        self.sequencer.progress()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn scene(&self) -> &SceneManager {
        &self.scene
    }

    pub fn assets(&self) -> Option<&AssetCache> {
        self.assets.as_ref()
    }

    /// Load status of `slot`, `Pending` until a cache is installed.
    pub fn load_status(&self, slot: AssetSlot) -> LoadStatus {
        self.assets
            .as_ref()
            .map_or(LoadStatus::Pending, |cache| cache.get(slot).status.clone())
    }

    /// The asset attached to the scene.
    pub fn displayed_asset(&self) -> Option<&MeshAsset> {
        let slot = self.scene.attached()?;
        self.assets.as_ref().map(|cache| cache.get(slot))
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::InMemoryAssetSource;
    use crate::sequencer::{FixedJitter, ManualClock};

    fn context(clock: &ManualClock) -> ViewerContext<&ManualClock, FixedJitter> {
        ViewerContext::new(ViewerConfig::default(), clock, FixedJitter(5.0), 800, 600)
    }

    #[test]
    fn test_initial_snapshot_is_loading() {
        let clock = ManualClock::new(0);
        let ctx = context(&clock);
        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.status, STATUS_AWAITING_UPLOAD);
        assert_eq!(snapshot.loading_label, Some(LOADING_LABEL));
        assert!(!snapshot.upload_enabled);
        assert!(!snapshot.optimize_enabled);
        assert_eq!(ctx.load_status(AssetSlot::Original), LoadStatus::Pending);
    }

    #[test]
    fn test_select_before_assets_is_ignored() {
        let clock = ManualClock::new(0);
        let mut ctx = context(&clock);
        assert_eq!(ctx.select_file(true), None);
        assert_eq!(ctx.view_state(), ViewState::None);
    }

    #[test]
    fn test_degraded_status_on_placeholder() {
        let clock = ManualClock::new(0);
        let mut ctx = context(&clock);
        ctx.preload_from(&InMemoryAssetSource::default(), &AssetSpec::defaults());
        assert_eq!(ctx.status(), STATUS_ASSETS_DEGRADED);
        assert!(ctx.snapshot().upload_enabled);
        assert!(matches!(
            ctx.load_status(AssetSlot::Optimized),
            LoadStatus::Placeholder { .. }
        ));
    }

    #[test]
    fn test_cancelled_picker_does_nothing() {
        let clock = ManualClock::new(0);
        let mut ctx = context(&clock);
        ctx.preload_from(&InMemoryAssetSource::default(), &AssetSpec::defaults());
        assert_eq!(ctx.select_file(false), None);
        assert!(ctx.displayed_asset().is_none());
    }

    #[test]
    fn test_optimize_requires_original() {
        let clock = ManualClock::new(0);
        let mut ctx = context(&clock);
        ctx.preload_from(&InMemoryAssetSource::default(), &AssetSpec::defaults());
        assert!(!ctx.request_optimization());
        assert_eq!(
            ctx.submit_prompt(PromptAnswers::new("1", "2", "3")),
            Ok(StartOutcome::NotReady)
        );
        assert!(ctx.sequencer().is_idle());
    }

    #[test]
    fn test_dismiss_prompt() {
        let clock = ManualClock::new(0);
        let mut ctx = context(&clock);
        ctx.preload_from(&InMemoryAssetSource::default(), &AssetSpec::defaults());
        ctx.select_file(true);
        assert!(ctx.request_optimization());
        ctx.dismiss_prompt();
        assert!(!ctx.snapshot().prompt_open);
        assert!(ctx.snapshot().optimize_enabled);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let clock = ManualClock::new(0);
        let ctx = context(&clock);
        let json = serde_json::to_value(ctx.snapshot()).unwrap();
        assert_eq!(json["view"], "none");
        assert_eq!(json["uploadEnabled"], false);
        assert_eq!(json["loadingLabel"], "Loading...");
    }
}
