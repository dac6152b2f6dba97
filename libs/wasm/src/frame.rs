//! Frame driver that hands frames to JavaScript as JSON.
//!
//! The page owns the Three.js renderer and orbit controls; each animation
//! frame it asks for the latest frame description and applies it.

use serde::Serialize;
use tiptop_viewer::scene::{Light, OrbitSettings, PerspectiveCamera};
use tiptop_viewer::{AssetSlot, Frame, FrameDriver, Material};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDescription {
    pub slot: AssetSlot,
    pub material: Material,
    pub placeholder: bool,
}

/// Owned copy of a [`Frame`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescription {
    pub camera: PerspectiveCamera,
    pub lights: Vec<Light>,
    pub orbit: OrbitSettings,
    pub object: Option<ObjectDescription>,
}

impl From<&Frame<'_>> for FrameDescription {
    fn from(frame: &Frame<'_>) -> Self {
        Self {
            camera: *frame.camera,
            lights: frame.lights.to_vec(),
            orbit: *frame.orbit,
            object: frame.object.map(|asset| ObjectDescription {
                slot: asset.slot,
                material: asset.material,
                placeholder: asset.is_placeholder(),
            }),
        }
    }
}

/// Keeps the most recent frame.
#[derive(Debug, Default)]
pub struct FrameCapture {
    last: Option<FrameDescription>,
}

impl FrameCapture {
    pub fn take(&mut self) -> Option<FrameDescription> {
        self.last.take()
    }
}

impl FrameDriver for FrameCapture {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.last = Some(FrameDescription::from(frame));
    }
}
