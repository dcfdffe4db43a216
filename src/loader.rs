use crate::error::NavResult;
use crate::tree::Folder;

/// Source of the initial folder tree.
/// Called exactly once per session; a failure leaves the navigator unloaded.
#[async_trait::async_trait]
pub trait TreeLoader: Send + Sync + 'static {
    async fn fetch_initial_tree(&self) -> NavResult<Folder>;
}
