//! # Scene
//!
//! Camera, lights, orbit limits and the single attached asset. Drawing is
//! delegated to a host [`FrameDriver`]; this module only owns the state a
//! frame is built from.

mod camera;
mod lighting;

pub use camera::{fit_pose, CameraPose, PerspectiveCamera};
pub use lighting::{standard_rig, Light, OrbitSettings};

use config::ViewerConfig;
use tiptop_mesh::Aabb;
use tracing::debug;

use crate::assets::{AssetCache, AssetSlot, MeshAsset};

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub camera: &'a PerspectiveCamera,
    pub lights: &'a [Light],
    pub orbit: &'a OrbitSettings,
    /// The attached asset, if any.
    pub object: Option<&'a MeshAsset>,
}

/// Host capability that turns a [`Frame`] into pixels.
pub trait FrameDriver {
    fn draw(&mut self, frame: &Frame<'_>);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Surface {
    Live { width: u32, height: u32 },
    Released,
}

/// Owns the camera, light rig and attachment slot.
///
/// At most one asset is attached at a time. After [`SceneManager::teardown`]
/// every mutating call is a no-op and nothing is drawn.
#[derive(Debug, Clone)]
pub struct SceneManager {
    camera: PerspectiveCamera,
    lights: Vec<Light>,
    orbit: OrbitSettings,
    attached: Option<AssetSlot>,
    surface: Surface,
    fit_padding: f64,
}

impl SceneManager {
    /// Creates a scene for a surface of `width` x `height` pixels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::ViewerConfig;
    /// use tiptop_viewer::scene::SceneManager;
    ///
    /// let scene = SceneManager::new(&ViewerConfig::default(), 800, 600);
    /// assert!(scene.is_live());
    /// assert_eq!(scene.lights().len(), 4);
    /// assert!(scene.attached().is_none());
    /// ```
    pub fn new(config: &ViewerConfig, width: u32, height: u32) -> Self {
        Self {
            camera: PerspectiveCamera::new(config.fov_degrees, aspect_ratio(width, height)),
            lights: standard_rig(),
            orbit: OrbitSettings::default(),
            attached: None,
            surface: Surface::Live {
                width,
                height: height.max(1),
            },
            fit_padding: config.fit_padding,
        }
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn orbit(&self) -> &OrbitSettings {
        &self.orbit
    }

    /// Slot of the attached asset.
    pub fn attached(&self) -> Option<AssetSlot> {
        self.attached
    }

    pub fn is_live(&self) -> bool {
        matches!(self.surface, Surface::Live { .. })
    }

    /// Surface size in pixels, `None` once released.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        match self.surface {
            Surface::Live { width, height } => Some((width, height)),
            Surface::Released => None,
        }
    }

    /// Attaches `slot`, detaching whatever was attached before.
    ///
    /// Returns the previously attached slot.
    pub fn attach(&mut self, slot: AssetSlot) -> Option<AssetSlot> {
        if !self.is_live() {
            return None;
        }
        let previous = self.detach();
        self.attached = Some(slot);
        debug!(?slot, ?previous, "attached asset");
        previous
    }

    /// Removes the attached asset, if any.
    pub fn detach(&mut self) -> Option<AssetSlot> {
        self.attached.take()
    }

    /// Frames `bounds` and returns the new pose.
    ///
    /// Calling it twice with the same bounds yields the same pose.
    pub fn fit_camera_to_object(&mut self, bounds: &Aabb) -> CameraPose {
        if !self.is_live() {
            return self.camera.pose();
        }
        let pose = fit_pose(bounds, self.camera.fov_degrees, self.fit_padding);
        self.camera.set_pose(pose);
        pose
    }

    /// Updates the aspect ratio. A zero height is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 || !self.is_live() {
            return;
        }
        self.camera.aspect = aspect_ratio(width, height);
        self.surface = Surface::Live { width, height };
    }

    /// Hands one frame to `driver`. Returns false without drawing once the
    /// surface is released.
    pub fn render_frame(&self, assets: Option<&AssetCache>, driver: &mut dyn FrameDriver) -> bool {
        if !self.is_live() {
            return false;
        }
        let object = match (assets, self.attached) {
            (Some(cache), Some(slot)) => Some(cache.get(slot)),
            _ => None,
        };
        driver.draw(&Frame {
            camera: &self.camera,
            lights: &self.lights,
            orbit: &self.orbit,
            object,
        });
        true
    }

    /// Detaches everything and releases the surface. Idempotent.
    pub fn teardown(&mut self) {
        if self.is_live() {
            debug!("releasing render surface");
        }
        self.attached = None;
        self.surface = Surface::Released;
    }
}

fn aspect_ratio(width: u32, height: u32) -> f64 {
    f64::from(width) / f64::from(height.max(1))
}
