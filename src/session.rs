//! Single-owner session: one task owns the navigator and applies commands
//! in the order they arrive.

use tokio::sync::{mpsc, oneshot};

use crate::command::{Command, Outcome};
use crate::engine::Navigator;
use crate::error::{NavError, NavResult};
use crate::loader::TreeLoader;
use crate::sink::PresentationSink;
use crate::types::{AddOutcome, FolderId, View};

pub const DEFAULT_QUEUE_DEPTH: usize = 32;

enum Request {
    Execute {
        command: Command,
        reply: oneshot::Sender<NavResult<Outcome>>,
    },
    // read-only, nothing is published
    Snapshot {
        reply: oneshot::Sender<NavResult<View>>,
    },
}

pub struct Session;

impl Session {
    /// Start a session task. The tree is fetched first; commands sent in the
    /// meantime wait in the queue.
    pub fn spawn<L, S>(loader: L, sink: S) -> SessionHandle
    where
        L: TreeLoader,
        S: PresentationSink + 'static,
    {
        Self::spawn_with_depth(loader, sink, DEFAULT_QUEUE_DEPTH)
    }

    pub fn spawn_with_depth<L, S>(loader: L, sink: S, depth: usize) -> SessionHandle
    where
        L: TreeLoader,
        S: PresentationSink + 'static,
    {
        let (tx, rx) = mpsc::channel(depth.max(1));
        tokio::spawn(run(Navigator::with_sink(sink), loader, rx));
        SessionHandle { tx }
    }
}

async fn run<L: TreeLoader>(mut nav: Navigator, loader: L, mut rx: mpsc::Receiver<Request>) {
    if let Err(e) = nav.load(&loader).await {
        tracing::warn!("session running without a tree: {}", e);
    }

    while let Some(request) = rx.recv().await {
        let delivered = match request {
            Request::Execute { command, reply } => reply.send(nav.execute(command)).is_ok(),
            Request::Snapshot { reply } => reply.send(nav.view()).is_ok(),
        };
        if !delivered {
            tracing::debug!("caller went away before the reply");
        }
    }
    tracing::debug!("session closed");
}

/// Cheap to clone; the session ends when every handle is dropped.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Request>,
}

impl SessionHandle {
    pub async fn execute(&self, command: Command) -> NavResult<Outcome> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::Execute { command, reply }).await?;
        rx.await.map_err(|_| NavError::SessionClosed)?
    }

    /// Current view without re-rendering it
    pub async fn view(&self) -> NavResult<View> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::Snapshot { reply }).await?;
        rx.await.map_err(|_| NavError::SessionClosed)?
    }

    async fn send(&self, request: Request) -> NavResult<()> {
        self.tx
            .send(request)
            .await
            .map_err(|_| NavError::SessionClosed)
    }

    pub async fn descend(&self, target: FolderId) -> NavResult<()> {
        self.execute(Command::Descend(target.into())).await.map(|_| ())
    }

    pub async fn back(&self) -> NavResult<bool> {
        match self.execute(Command::Back).await? {
            Outcome::Moved(moved) => Ok(moved),
            other => Err(unexpected(other)),
        }
    }

    pub async fn jump(&self, target: FolderId) -> NavResult<bool> {
        match self.execute(Command::Jump(target.into())).await? {
            Outcome::Moved(arrived) => Ok(arrived),
            other => Err(unexpected(other)),
        }
    }

    pub async fn add_folder(&self, name: impl Into<String>) -> NavResult<AddOutcome> {
        match self.execute(Command::AddFolder(name.into())).await? {
            Outcome::Added(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    pub async fn toggle_add_dialog(&self) -> NavResult<bool> {
        match self.execute(Command::ToggleAddDialog).await? {
            Outcome::Dialog(open) => Ok(open),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(outcome: Outcome) -> NavError {
    NavError::UnexpectedReply(format!("{:?}", outcome))
}
