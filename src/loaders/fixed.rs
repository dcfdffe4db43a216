//! Loader that hands out a tree already held in memory.

use crate::error::{NavError, NavResult};
use crate::loader::TreeLoader;
use crate::tree::Folder;

/// Serves a fixed tree, or a fixed failure
#[derive(Debug, Clone)]
pub struct FixedLoader {
    tree: Result<Folder, String>,
}

impl FixedLoader {
    pub fn new(tree: Folder) -> Self {
        Self { tree: Ok(tree) }
    }

    /// A loader whose fetch always fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            tree: Err(reason.into()),
        }
    }

    /// The small listing bundled with the crate
    pub fn sample() -> NavResult<Self> {
        let tree: Folder = serde_json::from_str(SAMPLE_TREE)?;
        Ok(Self::new(tree))
    }
}

const SAMPLE_TREE: &str = include_str!("../../data/directory-list.json");

#[async_trait::async_trait]
impl TreeLoader for FixedLoader {
    async fn fetch_initial_tree(&self) -> NavResult<Folder> {
        self.tree
            .clone()
            .map_err(NavError::TreeUnavailable)
    }
}
