//! Sample file loading

use crate::error::{Error, Result};
use futures::future::try_join_all;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Load recorded response bodies from files and directories
///
/// A directory contributes every `*.json` file directly inside it, in
/// file-name order. All files are read concurrently; the result keeps
/// the order in which paths were given.
pub async fn load_bodies(paths: &[PathBuf]) -> Result<Vec<Value>> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(expand(path).await?);
    }

    tracing::debug!(files = files.len(), "loading sample corpus");
    try_join_all(files.iter().map(|file| read_body(file))).await
}

async fn expand(path: &Path) -> Result<Vec<PathBuf>> {
    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(path).await?;
    while let Some(entry) = entries.next_entry().await? {
        let file = entry.path();
        if file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

async fn read_body(path: &Path) -> Result<Value> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content)
        .map_err(|e| Error::corpus(path.display().to_string(), e.to_string()))
}
