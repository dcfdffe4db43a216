//! Loader reading the tree from a JSON document on disk.

use std::path::PathBuf;

use crate::error::{NavError, NavResult};
use crate::loader::TreeLoader;
use crate::tree::Folder;

#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TreeLoader for JsonFileLoader {
    async fn fetch_initial_tree(&self) -> NavResult<Folder> {
        tracing::debug!("reading folder tree from {}", self.path.display());
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| NavError::TreeUnavailable(format!("{}: {}", self.path.display(), e)))?;

        let tree: Folder = serde_json::from_slice(&raw)?;
        if tree.name.trim().is_empty() {
            return Err(NavError::Malformed("root folder has no name".into()));
        }
        Ok(tree)
    }
}
