//! # TipTop Viewer
//!
//! Host-agnostic core of the TipTop before/after model viewer.
//!
//! ## Architecture
//!
//! ```text
//! AssetSource → preload → AssetCache ─┐
//!                                     ├─► ViewerContext ─► FrameDriver (host)
//! Clock + Jitter → Sequencer ─────────┤        │
//!                  ViewController ────┘        └─► ExportSink (host)
//! ```
//!
//! The browser crate supplies the clock, the frame driver and the download
//! sink. Natively everything runs against in-memory sources and a manual clock.
//!
//! ## Usage
//!
//! ```rust
//! use config::ViewerConfig;
//! use tiptop_viewer::{AssetSpec, FixedJitter, InMemoryAssetSource, ManualClock, ViewerContext};
//!
//! let clock = ManualClock::new(0);
//! let mut ctx = ViewerContext::new(ViewerConfig::default(), &clock, FixedJitter(1.0), 640, 480);
//! ctx.preload_from(&InMemoryAssetSource::default(), &AssetSpec::defaults());
//! assert!(ctx.snapshot().upload_enabled);
//! ```

pub mod assets;
pub mod context;
pub mod error;
pub mod export;
pub mod scene;
pub mod sequencer;
pub mod view;

pub use assets::{
    preload, AssetCache, AssetSlot, AssetSource, AssetSpec, DirectoryAssetSource,
    InMemoryAssetSource, LoadStatus, Material, MeshAsset, Transform,
};
pub use context::{UiSnapshot, ViewerContext};
pub use error::{AssetError, ExportError, FetchError, ValidationError, ViewerError};
pub use export::{export_optimized, ExportArtifact, ExportSink, MemorySink};
pub use scene::{CameraPose, Frame, FrameDriver, SceneManager};
pub use sequencer::{
    Clock, FixedJitter, Jitter, ManualClock, OptimizationRun, Phase, PromptAnswers, PromptField,
    RandomJitter, Sequencer, SequencerEvent, StartOutcome,
};
pub use view::{ViewController, ViewEvent, ViewState};
