//! Light rig and orbit-control settings.

use config::constants::{
    AMBIENT_LIGHT_COLOR, AMBIENT_LIGHT_INTENSITY, DIRECTIONAL_LIGHT_COLOR, FILL_LIGHT_INTENSITY,
    FILL_LIGHT_POSITION, HEMISPHERE_GROUND_COLOR, HEMISPHERE_INTENSITY, HEMISPHERE_POSITION,
    HEMISPHERE_SKY_COLOR, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION, KEY_LIGHT_SHADOW_EXTENT,
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR_ANGLE, ORBIT_MIN_DISTANCE,
};
use glam::DVec3;
use serde::Serialize;

/// A light in the scene. Colors are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Light {
    Ambient {
        color: u32,
        intensity: f32,
    },
    #[serde(rename_all = "camelCase")]
    Hemisphere {
        sky_color: u32,
        ground_color: u32,
        intensity: f32,
        position: DVec3,
    },
    #[serde(rename_all = "camelCase")]
    Directional {
        color: u32,
        intensity: f32,
        position: DVec3,
        /// Half-width of the orthographic shadow frustum, if the light casts shadows.
        shadow_extent: Option<f64>,
    },
}

impl Light {
    pub fn casts_shadow(&self) -> bool {
        matches!(
            self,
            Light::Directional {
                shadow_extent: Some(_),
                ..
            }
        )
    }
}

/// Ambient fill, sky/ground hemisphere, a shadow-casting key light and a
/// weaker back light.
pub fn standard_rig() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: AMBIENT_LIGHT_COLOR,
            intensity: AMBIENT_LIGHT_INTENSITY,
        },
        Light::Hemisphere {
            sky_color: HEMISPHERE_SKY_COLOR,
            ground_color: HEMISPHERE_GROUND_COLOR,
            intensity: HEMISPHERE_INTENSITY,
            position: DVec3::from_array(HEMISPHERE_POSITION),
        },
        Light::Directional {
            color: DIRECTIONAL_LIGHT_COLOR,
            intensity: KEY_LIGHT_INTENSITY,
            position: DVec3::from_array(KEY_LIGHT_POSITION),
            shadow_extent: Some(KEY_LIGHT_SHADOW_EXTENT),
        },
        Light::Directional {
            color: DIRECTIONAL_LIGHT_COLOR,
            intensity: FILL_LIGHT_INTENSITY,
            position: DVec3::from_array(FILL_LIGHT_POSITION),
            shadow_extent: None,
        },
    ]
}

/// Orbit-control limits applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitSettings {
    pub damping: f64,
    pub screen_space_panning: bool,
    /// Radians from the +Y axis.
    pub max_polar_angle: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            screen_space_panning: true,
            max_polar_angle: ORBIT_MAX_POLAR_ANGLE,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}
