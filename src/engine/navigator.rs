//! Navigation engine: turns commands into stack mutations and derives the
//! current folder and breadcrumb trail from the stack.

use crate::command::{Command, Outcome, Target};
use crate::error::{AddRejection, NavError, NavResult};
use crate::loader::TreeLoader;
use crate::sink::{NullSink, PresentationSink};
use crate::tree::Folder;
use crate::types::{AddOutcome, FolderId, FolderPath, View, VisitedNode};

use super::stack::NavStack;

/// Owns the folder tree for a session and the history of visited folders.
pub struct Navigator {
    root: Option<Folder>,
    stack: NavStack<VisitedNode>,
    add_dialog_open: bool,
    sink: Box<dyn PresentationSink>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }

    pub fn with_sink(sink: impl PresentationSink + 'static) -> Self {
        Self {
            root: None,
            stack: NavStack::new(),
            add_dialog_open: false,
            sink: Box::new(sink),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.root.is_some()
    }

    /// Fetch the tree from `loader` and initialise with it.
    pub async fn load<L>(&mut self, loader: &L) -> NavResult<()>
    where
        L: TreeLoader + ?Sized,
    {
        if self.is_initialized() {
            return Err(NavError::AlreadyInitialized);
        }

        let root = match loader.fetch_initial_tree().await {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!("initial folder tree unavailable: {}", e);
                return Err(match e {
                    NavError::TreeUnavailable(reason) => NavError::TreeUnavailable(reason),
                    other => NavError::TreeUnavailable(other.to_string()),
                });
            }
        };
        self.init(root)
    }

    pub fn init(&mut self, root: Folder) -> NavResult<()> {
        if self.is_initialized() || !self.stack.is_empty() {
            return Err(NavError::AlreadyInitialized);
        }

        tracing::info!(
            "folder tree loaded: root {:?}, {} folders",
            root.name,
            root.count()
        );
        self.root = Some(root);
        self.stack.push(VisitedNode::root());
        self.publish()
    }

    /// The whole tree
    pub fn tree(&self) -> NavResult<&Folder> {
        self.root.as_ref().ok_or(NavError::NotInitialized)
    }

    pub fn current_folder(&self) -> NavResult<&Folder> {
        let node = self.current_node()?;
        self.resolve(&node.path)
    }

    /// Folders from the root down to the current one
    pub fn breadcrumbs(&self) -> NavResult<Vec<&Folder>> {
        self.tree()?;
        self.stack
            .to_sequence()
            .iter()
            .map(|node| self.resolve(&node.path))
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn view(&self) -> NavResult<View> {
        let current = self.current_folder()?;
        Ok(View {
            current: current.summary(),
            entries: current.contents.iter().map(Folder::summary).collect(),
            breadcrumbs: self
                .breadcrumbs()?
                .into_iter()
                .map(Folder::summary)
                .collect(),
            add_dialog_open: self.add_dialog_open,
        })
    }

    /// Enter `target`, which must be a direct child of the current folder.
    pub fn descend(&mut self, target: FolderId) -> NavResult<()> {
        self.push_child(target)?;
        self.publish()
    }

    /// Return to the parent folder. At the root this does nothing and
    /// returns `false`.
    pub fn back(&mut self) -> NavResult<bool> {
        let moved = self.pop_to_parent()?;
        self.publish()?;
        Ok(moved)
    }

    /// Move one step toward `target`: one `back`, then a descend into
    /// `target` unless the back already landed on it.
    ///
    /// `target` may be the current folder (no-op), an ancestor on the
    /// breadcrumb trail, or a child of the folder `back` lands on. Returns
    /// whether `target` is now current; an ancestor more than one level up
    /// takes one call per level.
    pub fn jump(&mut self, target: FolderId) -> NavResult<bool> {
        if self.current_folder()?.id == target {
            self.publish()?;
            return Ok(true);
        }

        {
            let crumbs = self.breadcrumbs()?;
            let landing = crumbs[crumbs.len().saturating_sub(2)];
            let on_trail = crumbs.iter().any(|f| f.id == target);
            if !on_trail && landing.child_position(target).is_none() {
                return Err(NavError::InvalidTarget(format!(
                    "{} is neither on the breadcrumb trail nor next to {:?}",
                    target,
                    self.current_folder()?.name
                )));
            }
        }

        self.pop_to_parent()?;
        let here = self.current_folder()?;
        let arrived = if here.id == target {
            true
        } else if here.child_position(target).is_some() {
            self.push_child(target)?;
            true
        } else {
            false
        };

        tracing::debug!("jump toward {}: arrived={}", target, arrived);
        self.publish()?;
        Ok(arrived)
    }

    /// Create a subfolder of the current folder.
    ///
    /// Empty and duplicate names are rejected without touching the tree or
    /// the dialog; on success the dialog is closed.
    pub fn add_folder(&mut self, name: &str) -> NavResult<AddOutcome> {
        let path = self.current_node()?.path.clone();
        let outcome = self.insert_folder(&path, name)?;

        match &outcome {
            AddOutcome::Created(id) => {
                tracing::debug!("created folder {} {:?} at {}", id, name.trim(), path);
                self.add_dialog_open = false;
            }
            AddOutcome::Rejected(reason) => {
                tracing::debug!("add folder rejected: {}", reason);
            }
        }

        self.publish()?;
        Ok(outcome)
    }

    /// Flip the add-folder dialog flag and return its new state.
    pub fn toggle_add_dialog(&mut self) -> NavResult<bool> {
        self.add_dialog_open = !self.add_dialog_open;
        if self.is_initialized() {
            self.publish()?;
        }
        Ok(self.add_dialog_open)
    }

    pub fn execute(&mut self, command: Command) -> NavResult<Outcome> {
        tracing::debug!("executing {:?}", command);
        match command {
            Command::Descend(target) => {
                let id = self.descend_target(&target)?;
                self.descend(id)?;
                Ok(Outcome::Moved(true))
            }
            Command::Back => self.back().map(Outcome::Moved),
            Command::Jump(target) => {
                let id = self.jump_target(&target)?;
                self.jump(id).map(Outcome::Moved)
            }
            Command::AddFolder(name) => self.add_folder(&name).map(Outcome::Added),
            Command::ToggleAddDialog => self.toggle_add_dialog().map(Outcome::Dialog),
            Command::Show => {
                self.publish()?;
                self.view().map(Outcome::View)
            }
        }
    }

    fn current_node(&self) -> NavResult<&VisitedNode> {
        self.tree()?;
        self.stack.peek()
    }

    fn resolve(&self, path: &FolderPath) -> NavResult<&Folder> {
        self.tree()?
            .descendant(path)
            .ok_or_else(|| NavError::UnresolvedPath(path.to_string()))
    }

    fn push_child(&mut self, target: FolderId) -> NavResult<()> {
        let current = self.current_folder()?;
        let index = current.child_position(target).ok_or_else(|| {
            NavError::InvalidTarget(format!("{} is not inside {:?}", target, current.name))
        })?;

        let node = self.stack.peek()?.child_of(index);
        tracing::debug!("descend into {} at {}", target, node.path);
        self.stack.push(node);
        Ok(())
    }

    fn pop_to_parent(&mut self) -> NavResult<bool> {
        let node = self.current_node()?;
        debug_assert_eq!(node.has_parent, self.stack.has_previous());
        if !node.has_parent {
            return Ok(false);
        }
        let left = self.stack.pop()?;
        tracing::debug!("back from {}", left.path);
        Ok(true)
    }

    fn insert_folder(&mut self, path: &FolderPath, name: &str) -> NavResult<AddOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(AddOutcome::Rejected(AddRejection::EmptyName));
        }

        let root = self.root.as_mut().ok_or(NavError::NotInitialized)?;
        let unresolved = || NavError::UnresolvedPath(path.to_string());

        if root.descendant(path).ok_or_else(unresolved)?.contains_name(name) {
            return Ok(AddOutcome::Rejected(AddRejection::DuplicateName(
                name.to_string(),
            )));
        }

        let max_id = root.max_id();
        let next_id = max_id.next().ok_or(NavError::IdSpaceExhausted(max_id.0))?;
        root.descendant_mut(path).ok_or_else(unresolved)?.contents.push(Folder {
            id: next_id,
            name: name.to_string(),
            contents: Vec::new(),
        });
        Ok(AddOutcome::Created(next_id))
    }

    fn descend_target(&self, target: &Target) -> NavResult<FolderId> {
        match target {
            Target::Id(id) => Ok(*id),
            Target::Name(name) => self
                .current_folder()?
                .child_named(name)
                .map(|(_, folder)| folder.id)
                .ok_or_else(|| NavError::InvalidTarget(format!("no folder named {:?}", name))),
        }
    }

    /// Names match the breadcrumb trail first (nearest ancestor wins), then
    /// the folders next to the current one.
    fn jump_target(&self, target: &Target) -> NavResult<FolderId> {
        let name = match target {
            Target::Id(id) => return Ok(*id),
            Target::Name(name) => name,
        };

        let crumbs = self.breadcrumbs()?;
        let wanted = name.trim().to_lowercase();
        if let Some(folder) = crumbs
            .iter()
            .rev()
            .find(|f| f.name.trim().to_lowercase() == wanted)
        {
            return Ok(folder.id);
        }

        crumbs[crumbs.len().saturating_sub(2)]
            .child_named(name)
            .map(|(_, folder)| folder.id)
            .ok_or_else(|| {
                NavError::InvalidTarget(format!("no folder named {:?} to jump to", name))
            })
    }

    fn publish(&mut self) -> NavResult<()> {
        let view = self.view()?;
        self.sink.render(&view);
        self.sink.scroll_to_top();
        Ok(())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("root", &self.root.as_ref().map(|r| &r.name))
            .field("stack", &self.stack)
            .field("add_dialog_open", &self.add_dialog_open)
            .finish_non_exhaustive()
    }
}
