//! Raw/pool file pairs on disk: naming, writing, scanning, parsing.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use valence_core::errors::{HarvestError, ValenceResult};

use crate::client::RawPost;

static POOL_FILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^pool\d+").unwrap());

/// `poolNNNNN.json` for a page sequence number.
pub fn pool_path(dir: &Path, seq: usize) -> PathBuf {
    dir.join(format!("pool{seq:05}.json"))
}

/// `rawNNNNN.json` for a page sequence number.
pub fn raw_path(dir: &Path, seq: usize) -> PathBuf {
    dir.join(format!("raw{seq:05}.json"))
}

/// Store the untouched response body.
pub fn write_raw(dir: &Path, seq: usize, body: &str) -> ValenceResult<()> {
    std::fs::write(raw_path(dir, seq), body)?;
    Ok(())
}

/// Store the trimmed pool entries, pretty-printed.
pub fn write_pool(dir: &Path, seq: usize, posts: &[RawPost]) -> ValenceResult<()> {
    let path = pool_path(dir, seq);
    let json = serde_json::to_string_pretty(posts).map_err(|e| HarvestError::PoolFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    std::fs::write(&path, json)?;
    debug!(path = %path.display(), posts = posts.len(), "pool file written");
    Ok(())
}

/// All pool files in a directory, sorted by name (page order).
pub fn scan_pool_files(dir: &Path) -> ValenceResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if POOL_FILE_RE.is_match(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one pool file.
pub fn read_pool_file(path: &Path) -> ValenceResult<Vec<RawPost>> {
    let raw = std::fs::read_to_string(path).map_err(|e| HarvestError::PoolFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| {
            HarvestError::PoolFile {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
}
