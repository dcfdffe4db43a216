//! foldernav: navigate an in-memory folder tree with a breadcrumb trail and
//! create folders in it.

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod loaders;
pub mod session;
pub mod sink;
pub mod tree;
pub mod types;

// Re-export
pub use command::{Command, Outcome, Target};
pub use engine::{NavStack, Navigator};
pub use error::{AddRejection, NavError, NavResult};
pub use loader::TreeLoader;
pub use session::{Session, SessionHandle};
pub use sink::{ConsoleSink, NullSink, PresentationSink, RecordingSink, RenderFormat};
pub use tree::Folder;
pub use types::*;
