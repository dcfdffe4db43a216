//! Core value types: folder ids, paths into the tree, visited nodes and views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AddRejection;

/// Tree-wide unique folder identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub u64);

impl FolderId {
    /// The id after this one, or `None` once `u64` is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(FolderId)
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Child indices leading from the root to a folder. Empty means the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderPath(Vec<usize>);

impl FolderPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(index);
        Self(steps)
    }

    pub fn steps(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        let steps: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        f.write_str(&steps.join("/"))
    }
}

/// One entry of the navigation history.
///
/// The folder is resolved from the root through `path` whenever it is read,
/// so folders added after the node was pushed are visible through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedNode {
    pub path: FolderPath,
    pub has_parent: bool,
}

impl VisitedNode {
    pub fn root() -> Self {
        Self {
            path: FolderPath::root(),
            has_parent: false,
        }
    }

    pub fn child_of(&self, index: usize) -> Self {
        Self {
            path: self.path.child(index),
            has_parent: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub id: FolderId,
    pub name: String,
}

/// Snapshot handed to the presentation sink after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub current: FolderSummary,
    pub entries: Vec<FolderSummary>,
    pub breadcrumbs: Vec<FolderSummary>,
    pub add_dialog_open: bool,
}

impl View {
    pub fn breadcrumb_names(&self) -> Vec<&str> {
        self.breadcrumbs.iter().map(|b| b.name.as_str()).collect()
    }
}

/// Result of `add_folder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOutcome {
    Created(FolderId),
    Rejected(AddRejection),
}

impl AddOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, AddOutcome::Created(_))
    }
}
