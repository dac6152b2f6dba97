//! Byte sources the preloader reads assets from.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::error::FetchError;

/// Minimal fetch capability for asset bytes.
///
/// # Examples
/// ```
/// use tiptop_viewer::{AssetSource, InMemoryAssetSource};
/// let source = InMemoryAssetSource::default();
/// assert!(source.fetch("/models/model1.stl").is_err());
/// ```
pub trait AssetSource {
    /// Reads the whole asset stored under `path`.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}

/// Asset source backed by a map, for tests and prefetched browser bytes.
///
/// # Examples
/// ```
/// use tiptop_viewer::{AssetSource, FetchError, InMemoryAssetSource};
/// let mut source = InMemoryAssetSource::default();
/// source.insert("/a.stl", vec![1, 2, 3]);
/// source.insert_error("/b.stl", FetchError::Status { path: "/b.stl".into(), status: 500 });
/// assert_eq!(source.fetch("/a.stl").unwrap(), vec![1, 2, 3]);
/// assert!(matches!(source.fetch("/b.stl"), Err(FetchError::Status { status: 500, .. })));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssetSource {
    entries: HashMap<String, Result<Vec<u8>, FetchError>>,
}

impl InMemoryAssetSource {
    /// Inserts or replaces the bytes stored under `path`.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), Ok(bytes.into()));
    }

    /// Makes every fetch of `path` fail with `error`.
    pub fn insert_error(&mut self, path: impl Into<String>, error: FetchError) {
        self.entries.insert(path.into(), Err(error));
    }
}

impl AssetSource for InMemoryAssetSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        self.entries
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::NotFound { path: path.into() }))
    }
}

/// Asset source reading files below a root directory.
///
/// Leading slashes in asset paths are ignored, so `/models/model1.stl` maps to
/// `<root>/models/model1.stl`.
#[derive(Debug, Clone)]
pub struct DirectoryAssetSource {
    root: PathBuf,
}

impl DirectoryAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl AssetSource for DirectoryAssetSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        std::fs::read(self.resolve(path)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => FetchError::NotFound { path: path.into() },
            _ => FetchError::network(path, err.to_string()),
        })
    }
}
