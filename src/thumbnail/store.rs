//! Storage backends for source images and generated thumbnails.

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Default image root, relative to the working directory.
pub const DEFAULT_IMAGE_ROOT: &str = "img";

/// Where source images are read from and thumbnails are cached.
///
/// Existence checks and writes are not atomic with respect to each other;
/// concurrent renders may both generate the same thumbnail, and the last
/// complete write wins.
pub trait ThumbnailStore: Send + Sync {
    /// Check whether a source image exists.
    fn has_source(&self, name: &str) -> bool;

    /// Read a source image.
    fn read_source(&self, name: &str) -> Result<Vec<u8>>;

    /// Check whether a thumbnail exists.
    fn has_thumbnail(&self, name: &str) -> bool;

    /// Persist a thumbnail.
    fn write_thumbnail(&self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Filesystem store: sources and thumbnails share one image root.
#[derive(Debug, Clone)]
pub struct FsThumbnailStore {
    root: PathBuf,
}

impl FsThumbnailStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The image root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a name under the root, refusing anything that could escape it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let contained = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if contained {
            Some(self.root.join(relative))
        } else {
            log::warn!("Refusing image path outside image root: {}", name);
            None
        }
    }
}

impl Default for FsThumbnailStore {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_ROOT)
    }
}

impl ThumbnailStore for FsThumbnailStore {
    fn has_source(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.is_file())
    }

    fn read_source(&self, name: &str) -> Result<Vec<u8>> {
        let path = self
            .resolve(name)
            .ok_or_else(|| Error::Thumbnail(format!("invalid image name: {}", name)))?;
        Ok(fs::read(path)?)
    }

    fn has_thumbnail(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.exists())
    }

    fn write_thumbnail(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self
            .resolve(name)
            .ok_or_else(|| Error::Thumbnail(format!("invalid thumbnail name: {}", name)))?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// In-memory store, for tests and for callers without a writable image root.
#[derive(Debug, Default)]
pub struct MemoryThumbnailStore {
    sources: Mutex<HashMap<String, Vec<u8>>>,
    thumbnails: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryThumbnailStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source image.
    pub fn with_source(self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert_source(name, bytes);
        self
    }

    /// Add a pre-existing thumbnail.
    pub fn with_thumbnail(self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        lock(&self.thumbnails).insert(name.into(), bytes);
        self
    }

    /// Add a source image.
    pub fn insert_source(&self, name: impl Into<String>, bytes: Vec<u8>) {
        lock(&self.sources).insert(name.into(), bytes);
    }

    /// Get a stored thumbnail.
    pub fn thumbnail(&self, name: &str) -> Option<Vec<u8>> {
        lock(&self.thumbnails).get(name).cloned()
    }

    /// Number of stored thumbnails.
    pub fn thumbnail_count(&self) -> usize {
        lock(&self.thumbnails).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ThumbnailStore for MemoryThumbnailStore {
    fn has_source(&self, name: &str) -> bool {
        lock(&self.sources).contains_key(name)
    }

    fn read_source(&self, name: &str) -> Result<Vec<u8>> {
        lock(&self.sources)
            .get(name)
            .cloned()
            .ok_or_else(|| Error::Thumbnail(format!("source image not found: {}", name)))
    }

    fn has_thumbnail(&self, name: &str) -> bool {
        lock(&self.thumbnails).contains_key(name)
    }

    fn write_thumbnail(&self, name: &str, bytes: &[u8]) -> Result<()> {
        lock(&self.thumbnails).insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}
