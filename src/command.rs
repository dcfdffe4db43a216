//! User command surface: parsed commands and what executing them yields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AddOutcome, FolderId, View};

/// How a command names a folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Id(FolderId),
    Name(String),
}

impl From<FolderId> for Target {
    fn from(id: FolderId) -> Self {
        Target::Id(id)
    }
}

impl FromStr for Target {
    type Err = ParseCommandError;

    /// `#12` is an id, anything else a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCommandError::MissingArgument("target"));
        }
        match s.strip_prefix('#').map(str::parse::<u64>) {
            Some(Ok(id)) => Ok(Target::Id(FolderId(id))),
            _ => Ok(Target::Name(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Descend(Target),
    Back,
    Jump(Target),
    AddFolder(String),
    ToggleAddDialog,
    Show,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Navigation command; `true` when the current folder changed as asked
    Moved(bool),
    Added(AddOutcome),
    /// New state of the add-folder dialog
    Dialog(bool),
    View(View),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };

        match verb {
            "" => Err(ParseCommandError::Empty),
            "cd" | "open" => match rest.trim() {
                ".." => Ok(Command::Back),
                _ => Ok(Command::Descend(rest.parse()?)),
            },
            "back" | ".." => Ok(Command::Back),
            "jump" | "j" => Ok(Command::Jump(rest.parse()?)),
            // name validation (empty, whitespace) belongs to add_folder
            "mkdir" | "add" => Ok(Command::AddFolder(rest.to_string())),
            "dialog" | "new" => Ok(Command::ToggleAddDialog),
            "ls" | "show" | "pwd" => Ok(Command::Show),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}
