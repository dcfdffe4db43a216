//! The folder tree: a plain recursive structure owned by the navigator.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::types::{FolderId, FolderPath, FolderSummary};

/// One node of the folder tree
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    // Leaf folders may carry no `contents` key at all, or an explicit null
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<Folder>,
}

impl Folder {
    /// Create a folder with no children
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: FolderId(id),
            name: name.into(),
            contents: Vec::new(),
        }
    }

    pub fn with_contents(mut self, contents: Vec<Folder>) -> Self {
        self.contents = contents;
        self
    }

    pub fn summary(&self) -> FolderSummary {
        FolderSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }

    /// Largest id anywhere in this subtree
    pub fn max_id(&self) -> FolderId {
        self.contents
            .iter()
            .map(Folder::max_id)
            .fold(self.id, std::cmp::max)
    }

    /// Number of folders in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.contents.iter().map(Folder::count).sum::<usize>()
    }

    /// Whether a direct child already uses `name`, ignoring case and
    /// surrounding whitespace.
    pub fn contains_name(&self, name: &str) -> bool {
        self.child_named(name).is_some()
    }

    pub fn child_named(&self, name: &str) -> Option<(usize, &Folder)> {
        let wanted = name.trim().to_lowercase();
        self.contents
            .iter()
            .enumerate()
            .find(|(_, c)| c.name.trim().to_lowercase() == wanted)
    }

    pub fn child_position(&self, id: FolderId) -> Option<usize> {
        self.contents.iter().position(|c| c.id == id)
    }

    pub fn descendant(&self, path: &FolderPath) -> Option<&Folder> {
        path.steps()
            .iter()
            .try_fold(self, |folder, &i| folder.contents.get(i))
    }

    pub fn descendant_mut(&mut self, path: &FolderPath) -> Option<&mut Folder> {
        path.steps()
            .iter()
            .try_fold(self, |folder, &i| folder.contents.get_mut(i))
    }
}
