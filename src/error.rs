use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum NavError {
    #[error("folder tree not loaded")]
    NotInitialized,

    #[error("folder tree already loaded")]
    AlreadyInitialized,

    #[error("navigation stack is empty")]
    EmptyStack,

    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("path does not resolve: {0}")]
    UnresolvedPath(String),

    #[error("tree unavailable: {0}")]
    TreeUnavailable(String),

    // std::io::Error is stringified so it works with Serialize/Deserialize
    #[error("system I/O error: {0}")]
    SystemIo(String),

    #[error("malformed tree: {0}")]
    Malformed(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("session closed")]
    SessionClosed,

    #[error("unexpected reply: {0}")]
    UnexpectedReply(String),

    #[error("no folder ids left above {0}")]
    IdSpaceExhausted(u64),
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        NavError::SystemIo(e.to_string())
    }
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        NavError::Malformed(e.to_string())
    }
}

pub type NavResult<T> = Result<T, NavError>;

/// Why `add_folder` declined to create a folder.
///
/// These are ordinary outcomes, returned inside `Ok`, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AddRejection {
    #[error("folder name is empty")]
    EmptyName,

    #[error("a folder named {0:?} already exists here")]
    DuplicateName(String),
}
