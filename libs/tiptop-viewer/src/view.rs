//! # View State Controller
//!
//! Chooses which asset, if any, is attached to the scene.
//!
//! ```text
//!  None ──FileSelected──► ShowingOriginal ──RunCompleted──► ShowingOptimized
//!   ▲                                                              │
//!   └─────────────────────────── Reset ◄───────────────────────────┘
//! ```
//!
//! Events that do not match a transition are ignored. `Reset` is only raised
//! by teardown.

use serde::Serialize;
use tracing::info;

use crate::assets::{AssetCache, AssetSlot};
use crate::scene::SceneManager;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewState {
    #[default]
    None,
    ShowingOriginal,
    ShowingOptimized,
}

impl ViewState {
    /// Slot displayed in this state.
    pub fn slot(self) -> Option<AssetSlot> {
        match self {
            ViewState::None => None,
            ViewState::ShowingOriginal => Some(AssetSlot::Original),
            ViewState::ShowingOptimized => Some(AssetSlot::Optimized),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    FileSelected,
    RunCompleted,
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Applies `event` and returns the new state if a transition happened.
    ///
    /// Entering a displaying state detaches the previous asset, attaches the
    /// target and frames the camera on it. Without a cache nothing can be
    /// displayed, so display transitions are refused.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::ViewerConfig;
    /// use tiptop_viewer::scene::SceneManager;
    /// use tiptop_viewer::{preload, AssetSpec, InMemoryAssetSource, ViewController, ViewEvent, ViewState};
    ///
    /// let cache = preload(&InMemoryAssetSource::default(), &AssetSpec::defaults());
    /// let mut scene = SceneManager::new(&ViewerConfig::default(), 640, 480);
    /// let mut view = ViewController::new();
    ///
    /// assert_eq!(view.handle(ViewEvent::RunCompleted, Some(&cache), &mut scene), None);
    /// assert_eq!(
    ///     view.handle(ViewEvent::FileSelected, Some(&cache), &mut scene),
    ///     Some(ViewState::ShowingOriginal)
    /// );
    /// ```
    pub fn handle(
        &mut self,
        event: ViewEvent,
        assets: Option<&AssetCache>,
        scene: &mut SceneManager,
    ) -> Option<ViewState> {
        let target = match (self.state, event) {
            (ViewState::None, ViewEvent::FileSelected) => ViewState::ShowingOriginal,
            (ViewState::ShowingOriginal, ViewEvent::RunCompleted) => ViewState::ShowingOptimized,
            (ViewState::ShowingOriginal | ViewState::ShowingOptimized, ViewEvent::Reset) => {
                scene.detach();
                self.state = ViewState::None;
                info!("view reset");
                return Some(ViewState::None);
            }
            _ => return None,
        };

        let cache = assets?;
        let slot = target.slot()?;
        let asset = cache.get(slot);
        scene.detach();
        scene.attach(slot);
        scene.fit_camera_to_object(&asset.world_bounds());
        self.state = target;
        info!(state = ?target, placeholder = asset.is_placeholder(), "view changed");
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{preload, AssetSpec, InMemoryAssetSource};
    use config::ViewerConfig;

    fn setup() -> (AssetCache, SceneManager, ViewController) {
        let cache = preload(&InMemoryAssetSource::default(), &AssetSpec::defaults());
        let scene = SceneManager::new(&ViewerConfig::default(), 640, 480);
        (cache, scene, ViewController::new())
    }

    #[test]
    fn test_file_selected_requires_assets() {
        let (_, mut scene, mut view) = setup();
        assert_eq!(view.handle(ViewEvent::FileSelected, None, &mut scene), None);
        assert_eq!(view.state(), ViewState::None);
        assert_eq!(scene.attached(), None);
    }

    #[test]
    fn test_full_sequence_keeps_single_attachment() {
        let (cache, mut scene, mut view) = setup();

        view.handle(ViewEvent::FileSelected, Some(&cache), &mut scene);
        assert_eq!(scene.attached(), Some(AssetSlot::Original));

        view.handle(ViewEvent::RunCompleted, Some(&cache), &mut scene);
        assert_eq!(view.state(), ViewState::ShowingOptimized);
        assert_eq!(scene.attached(), Some(AssetSlot::Optimized));

        // Repeated events are ignored
        assert_eq!(view.handle(ViewEvent::FileSelected, Some(&cache), &mut scene), None);
        assert_eq!(view.handle(ViewEvent::RunCompleted, Some(&cache), &mut scene), None);
        assert_eq!(scene.attached(), Some(AssetSlot::Optimized));
    }

    #[test]
    fn test_camera_framed_on_entry() {
        let (cache, mut scene, mut view) = setup();
        view.handle(ViewEvent::FileSelected, Some(&cache), &mut scene);
        assert_eq!(scene.camera().target, cache.get(AssetSlot::Original).world_bounds().center());
        assert_ne!(scene.camera().position, glam::DVec3::new(5.0, 3.0, 5.0));
    }

    #[test]
    fn test_reset() {
        let (cache, mut scene, mut view) = setup();
        assert_eq!(view.handle(ViewEvent::Reset, Some(&cache), &mut scene), None);

        view.handle(ViewEvent::FileSelected, Some(&cache), &mut scene);
        assert_eq!(
            view.handle(ViewEvent::Reset, Some(&cache), &mut scene),
            Some(ViewState::None)
        );
        assert_eq!(scene.attached(), None);
    }

    #[test]
    fn test_slot_mapping() {
        assert_eq!(ViewState::None.slot(), None);
        assert_eq!(ViewState::ShowingOptimized.slot(), Some(AssetSlot::Optimized));
    }
}
