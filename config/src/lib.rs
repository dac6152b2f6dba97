//! # Config Crate
//!
//! Centralized configuration constants for the TipTop viewer.
//! Asset locations, camera framing, lighting, simulated optimization timing
//! and every user-facing status string live here so the viewer crates stay
//! free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{OPTIMIZATION_DURATION_MS, PROGRESS_TICK_MS};
//! use config::ViewerConfig;
//!
//! let ticks = OPTIMIZATION_DURATION_MS / PROGRESS_TICK_MS;
//! assert_eq!(ticks, 40);
//!
//! let cfg = ViewerConfig::default();
//! assert_eq!(cfg.run_duration_ms, OPTIMIZATION_DURATION_MS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Canned Results**: Reported reductions are constants, never computed

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, ViewerConfig};

#[cfg(test)]
mod tests;
