//! Loaders for authored RON data files.

use std::fs;
use std::path::Path;

pub mod map;

pub use map::MapLoader;

pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))
}
