//! # Export
//!
//! Turns the optimized asset into a downloadable binary STL.

use config::constants::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE, STL_HEADER_TEXT};
use tiptop_mesh::stl::write_binary_stl;
use tracing::info;

use crate::assets::{AssetCache, AssetSlot};
use crate::error::ExportError;

/// A file ready for the host to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Host capability that saves an [`ExportArtifact`].
pub trait ExportSink {
    /// # Errors
    ///
    /// Returns [`ExportError::Sink`] when the host cannot deliver the file.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), ExportError>;
}

/// Sink that keeps every delivered artifact in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub delivered: Vec<ExportArtifact>,
}

impl ExportSink for MemorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), ExportError> {
        self.delivered.push(artifact.clone());
        Ok(())
    }
}

/// Encodes the optimized asset in world space as binary STL.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the mesh holds a dangling index.
///
/// # Example
///
/// ```rust
/// use tiptop_viewer::{export_optimized, preload, AssetSpec, InMemoryAssetSource};
///
/// let cache = preload(&InMemoryAssetSource::default(), &AssetSpec::defaults());
/// let artifact = export_optimized(&cache).unwrap();
/// assert_eq!(artifact.file_name, "optimized_model.stl");
/// assert_eq!(artifact.bytes.len(), 84 + 12 * 50);
/// ```
pub fn export_optimized(assets: &AssetCache) -> Result<ExportArtifact, ExportError> {
    let asset = assets.get(AssetSlot::Optimized);
    let bytes = write_binary_stl(&asset.world_mesh(), STL_HEADER_TEXT)?;
    info!(bytes = bytes.len(), placeholder = asset.is_placeholder(), "exported optimized model");
    Ok(ExportArtifact {
        file_name: EXPORT_FILE_NAME.to_string(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        bytes,
    })
}
