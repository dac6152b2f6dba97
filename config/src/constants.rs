//! # Configuration Constants
//!
//! Centralized constants for the TipTop viewer. Asset locations, camera
//! framing, lighting, sequencer timing and status text are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Assets**: Static mesh paths, scale factors and colors
//! - **Camera**: Projection, framing and orbit limits
//! - **Lighting**: The fixed four-light rig
//! - **Sequencer**: Simulated optimization timing and thresholds
//! - **Text**: Status lines, prompt labels and export naming

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Normals shorter than this are treated as degenerate when exporting STL.
pub const NORMAL_EPSILON: f64 = 1e-12;

// =============================================================================
// ASSET CONSTANTS
// =============================================================================

/// Path of the "before" model, served next to the page.
pub const ORIGINAL_ASSET_PATH: &str = "/models/model1.stl";

/// Path of the pre-baked "optimized" model.
pub const OPTIMIZED_ASSET_PATH: &str = "/models/model2.stl";

/// Uniform scale applied to the original model (10% of its authored size).
///
/// # Example
///
/// ```rust
/// use config::constants::{OPTIMIZED_SCALE, ORIGINAL_SCALE};
///
/// // The optimized model is always displayed smaller than the original.
/// assert!(OPTIMIZED_SCALE < ORIGINAL_SCALE);
/// ```
pub const ORIGINAL_SCALE: f64 = 0.1;

/// Uniform scale applied to the optimized model (5% of its authored size).
pub const OPTIMIZED_SCALE: f64 = 0.05;

/// Display color of the original model (blue).
pub const ORIGINAL_COLOR: u32 = 0x2563eb;

/// Display color of the optimized model (green).
pub const OPTIMIZED_COLOR: u32 = 0x10b981;

/// Edge length of the placeholder cube.
pub const PLACEHOLDER_SIZE: f64 = 1.0;

/// Maximum accepted asset size in bytes (100 MB).
pub const MAX_ASSET_BYTES: usize = 100 * 1024 * 1024;

/// Maximum triangle count accepted from a single STL file.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Extensions advertised by the upload picker. The chosen file is never read.
///
/// # Example
///
/// ```rust
/// use config::constants::ACCEPTED_UPLOAD_EXTENSIONS;
///
/// assert!(ACCEPTED_UPLOAD_EXTENSIONS.contains(&".stl"));
/// ```
pub const ACCEPTED_UPLOAD_EXTENSIONS: &[&str] = &[".stl", ".stp", ".iges", ".igs"];

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Physical material metalness for loaded models.
pub const MATERIAL_METALNESS: f32 = 0.1;

/// Physical material roughness for loaded models and the placeholder.
pub const MATERIAL_ROUGHNESS: f32 = 0.5;

/// Physical material reflectivity for loaded models.
pub const MATERIAL_REFLECTIVITY: f32 = 0.5;

/// Clearcoat layer strength for loaded models.
pub const MATERIAL_CLEARCOAT: f32 = 0.3;

/// Clearcoat layer roughness for loaded models.
pub const MATERIAL_CLEARCOAT_ROUGHNESS: f32 = 0.25;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f64 = 60.0;

/// Near clipping plane.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clipping plane.
pub const CAMERA_FAR: f64 = 2000.0;

/// Camera position before any object has been framed.
pub const CAMERA_INITIAL_POSITION: [f64; 3] = [5.0, 3.0, 5.0];

/// Multiplier applied to the fitted distance so the object keeps a margin.
///
/// # Example
///
/// ```rust
/// use config::constants::FIT_PADDING;
///
/// let tight_distance = 4.0;
/// assert_eq!(tight_distance * FIT_PADDING, 10.0);
/// ```
pub const FIT_PADDING: f64 = 2.5;

/// Fraction of the fitted distance used for the oblique camera offset (x, y, z).
pub const FIT_OFFSET: [f64; 3] = [0.7, 0.5, 0.7];

/// Largest dimension assumed when framing a zero-sized object.
pub const FIT_MIN_DIMENSION: f64 = 1.0;

/// Orbit control damping factor.
pub const ORBIT_DAMPING: f64 = 0.05;

/// Upper bound of the orbit polar angle (radians).
pub const ORBIT_MAX_POLAR_ANGLE: f64 = std::f64::consts::PI / 1.5;

/// Closest the orbit controls may dolly towards the target.
pub const ORBIT_MIN_DISTANCE: f64 = 2.0;

/// Farthest the orbit controls may dolly from the target.
pub const ORBIT_MAX_DISTANCE: f64 = 50.0;

// =============================================================================
// LIGHTING CONSTANTS
// =============================================================================

/// Ambient fill color.
pub const AMBIENT_LIGHT_COLOR: u32 = 0xcccccc;

/// Ambient fill intensity.
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.4;

/// Hemisphere light sky color.
pub const HEMISPHERE_SKY_COLOR: u32 = 0xffffff;

/// Hemisphere light ground color.
pub const HEMISPHERE_GROUND_COLOR: u32 = 0xbfd4ff;

/// Hemisphere light intensity.
pub const HEMISPHERE_INTENSITY: f32 = 0.6;

/// Hemisphere light position.
pub const HEMISPHERE_POSITION: [f64; 3] = [0.0, 50.0, 0.0];

/// Shadow-casting key light intensity.
pub const KEY_LIGHT_INTENSITY: f32 = 0.8;

/// Shadow-casting key light position.
pub const KEY_LIGHT_POSITION: [f64; 3] = [5.0, 10.0, 7.5];

/// Half extent of the key light's orthographic shadow frustum.
pub const KEY_LIGHT_SHADOW_EXTENT: f64 = 10.0;

/// Back fill light intensity.
pub const FILL_LIGHT_INTENSITY: f32 = 0.3;

/// Back fill light position, opposite the key light.
pub const FILL_LIGHT_POSITION: [f64; 3] = [-5.0, 5.0, -7.5];

/// Color shared by both directional lights.
pub const DIRECTIONAL_LIGHT_COLOR: u32 = 0xffffff;

// =============================================================================
// SEQUENCER CONSTANTS
// =============================================================================

/// Interval between simulated progress ticks.
pub const PROGRESS_TICK_MS: u64 = 250;

/// Fixed duration of a simulated optimization run.
pub const OPTIMIZATION_DURATION_MS: u64 = 10_000;

/// Largest random progress increment applied per tick.
pub const MAX_PROGRESS_INCREMENT: f64 = 5.0;

/// Progress never exceeds this value through ticks alone.
pub const PROGRESS_CEILING: f64 = 99.0;

/// Progress reported once the run has completed.
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Progress above this switches the label to the core-algorithm phase.
pub const RUNNING_THRESHOLD: f64 = 30.0;

/// Progress above this switches the label to the finalizing phase.
pub const FINALIZING_THRESHOLD: f64 = 70.0;

// =============================================================================
// RESULT CONSTANTS
// =============================================================================

/// Material reduction announced when the run completes. Not computed.
pub const MATERIAL_REDUCTION_PERCENT: u32 = 47;

/// Weight reduction announced when the run completes. Not computed.
pub const WEIGHT_REDUCTION_PERCENT: u32 = 38;

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Status shown until the original model is displayed.
pub const STATUS_AWAITING_UPLOAD: &str = "Upload a file to begin the optimization process";

/// Status shown when one of the assets had to be replaced by a placeholder.
pub const STATUS_ASSETS_DEGRADED: &str =
    "Some models could not be loaded; placeholder geometry will be shown";

/// Status shown once the original model is on screen.
pub const STATUS_READY: &str = "Original model loaded. Click \"Topologically Optimize\" to improve the design with AI-driven structural analysis.";

/// Status for progress at or below [`RUNNING_THRESHOLD`].
pub const STATUS_INITIALIZING: &str = "Initializing...";

/// Status for progress above [`RUNNING_THRESHOLD`].
pub const STATUS_RUNNING: &str = "Running our PEN algorithm...";

/// Status for progress above [`FINALIZING_THRESHOLD`].
pub const STATUS_FINALIZING: &str = "Finalizing mesh...";

/// Loading indicator text while assets are being fetched.
pub const LOADING_LABEL: &str = "Loading...";

/// Loading indicator heading while a run is in progress.
pub const RUN_LABEL: &str = "Running topological optimization...";

/// Blocking alert raised when a prompt answer is missing.
pub const VALIDATION_MESSAGE: &str = "Please answer all questions";

/// Title of the three-question prompt.
pub const PROMPT_TITLE: &str = "Optimization Characteristics";

/// Placeholder text of each prompt input.
pub const PROMPT_PLACEHOLDER: &str = "0.00";

/// Labels of the three prompt inputs, in display order.
pub const PROMPT_LABELS: [&str; 3] = ["Force Scaling", "Resolution", "Volume Fraction Limit"];

/// File name of the exported optimized model.
pub const EXPORT_FILE_NAME: &str = "optimized_model.stl";

/// MIME type of the exported optimized model.
pub const EXPORT_MIME_TYPE: &str = "application/sla";

/// Text written into the 80-byte binary STL header.
pub const STL_HEADER_TEXT: &str = "TipTop STL Export";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Builds the status line announced when a run completes.
///
/// # Example
///
/// ```rust
/// use config::constants::completion_status;
///
/// let status = completion_status();
/// assert!(status.contains("47%"));
/// assert!(status.contains("38%"));
/// ```
pub fn completion_status() -> String {
    format!(
        "Optimization complete! Material reduced by {MATERIAL_REDUCTION_PERCENT}% with equivalent structural integrity. Weight reduced by {WEIGHT_REDUCTION_PERCENT}%."
    )
}

/// Joins [`ACCEPTED_UPLOAD_EXTENSIONS`] into an HTML `accept` attribute.
///
/// # Example
///
/// ```rust
/// use config::constants::accept_attribute;
///
/// assert_eq!(accept_attribute(), ".stl,.stp,.iges,.igs");
/// ```
pub fn accept_attribute() -> String {
    ACCEPTED_UPLOAD_EXTENSIONS.join(",")
}

/// Splits a `0xRRGGBB` color into linear `[r, g, b]` components in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use config::constants::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
/// ```
pub fn hex_to_rgb(color: u32) -> [f32; 3] {
    let channel = |shift: u32| ((color >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
