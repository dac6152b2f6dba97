//! Validated runtime settings shared by the viewer crates.
//!
//! [`ViewerConfig`] bundles the tunables that the scene and sequencer read at
//! construction time. Defaults come from [`crate::constants`].

use std::fmt;

use crate::constants::{
    CAMERA_FOV_DEGREES, FIT_PADDING, MAX_PROGRESS_INCREMENT, OPTIMIZATION_DURATION_MS,
    PROGRESS_CEILING, PROGRESS_COMPLETE, PROGRESS_TICK_MS,
};

/// Immutable snapshot of viewer settings.
///
/// # Examples
/// ```
/// use config::ViewerConfig;
/// let config = ViewerConfig::default();
/// assert!(config.tick_interval_ms < config.run_duration_ms);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Vertical field of view of the perspective camera, in degrees.
    pub fov_degrees: f64,
    /// Multiplier applied to the fitted camera distance.
    pub fit_padding: f64,
    /// Interval between simulated progress ticks.
    pub tick_interval_ms: u64,
    /// Delay after which a simulated run completes.
    pub run_duration_ms: u64,
    /// Largest random increment applied on a single tick.
    pub max_increment: f64,
    /// Highest progress value reachable through ticks alone.
    pub progress_ceiling: f64,
}

impl ViewerConfig {
    /// Builds a configuration, rejecting values the viewer cannot honor.
    ///
    /// # Examples
    /// ```
    /// use config::{ConfigError, ViewerConfig};
    ///
    /// let cfg = ViewerConfig::new(45.0, 2.0, 100, 1_000, 5.0, 99.0).expect("valid config");
    /// assert_eq!(cfg.fov_degrees, 45.0);
    ///
    /// let err = ViewerConfig::new(0.0, 2.0, 100, 1_000, 5.0, 99.0).unwrap_err();
    /// assert_eq!(err, ConfigError::InvalidFieldOfView(0.0));
    /// ```
    pub fn new(
        fov_degrees: f64,
        fit_padding: f64,
        tick_interval_ms: u64,
        run_duration_ms: u64,
        max_increment: f64,
        progress_ceiling: f64,
    ) -> Result<Self, ConfigError> {
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(fov_degrees));
        }
        if !(fit_padding > 0.0) {
            return Err(ConfigError::InvalidPadding(fit_padding));
        }
        if tick_interval_ms == 0 || run_duration_ms <= tick_interval_ms {
            return Err(ConfigError::InvalidTiming {
                tick_interval_ms,
                run_duration_ms,
            });
        }
        if !(max_increment >= 0.0 && max_increment.is_finite()) {
            return Err(ConfigError::InvalidIncrement(max_increment));
        }
        if !(progress_ceiling > 0.0 && progress_ceiling < PROGRESS_COMPLETE) {
            return Err(ConfigError::InvalidCeiling(progress_ceiling));
        }
        Ok(Self {
            fov_degrees,
            fit_padding,
            tick_interval_ms,
            run_duration_ms,
            max_increment,
            progress_ceiling,
        })
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            fit_padding: FIT_PADDING,
            tick_interval_ms: PROGRESS_TICK_MS,
            run_duration_ms: OPTIMIZATION_DURATION_MS,
            max_increment: MAX_PROGRESS_INCREMENT,
            progress_ceiling: PROGRESS_CEILING,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Field of view outside (0, 180) degrees.
    InvalidFieldOfView(f64),
    /// Padding multiplier that is zero, negative or NaN.
    InvalidPadding(f64),
    /// Tick interval of zero, or a run that ends before the first tick.
    InvalidTiming {
        tick_interval_ms: u64,
        run_duration_ms: u64,
    },
    /// Negative or non-finite progress increment.
    InvalidIncrement(f64),
    /// Ceiling that would let ticks alone report completion.
    InvalidCeiling(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFieldOfView(value) => {
                write!(f, "field of view must be within (0, 180) degrees: {value}")
            }
            ConfigError::InvalidPadding(value) => {
                write!(f, "fit padding must be positive: {value}")
            }
            ConfigError::InvalidTiming {
                tick_interval_ms,
                run_duration_ms,
            } => write!(
                f,
                "run duration ({run_duration_ms} ms) must exceed a non-zero tick interval ({tick_interval_ms} ms)"
            ),
            ConfigError::InvalidIncrement(value) => {
                write!(f, "progress increment must be finite and >= 0: {value}")
            }
            ConfigError::InvalidCeiling(value) => {
                write!(f, "progress ceiling must be within (0, 100): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
