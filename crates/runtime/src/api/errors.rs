use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinError;

use stash_core::{ExecuteError, LayoutError};

use super::ActorId;

/// Errors surfaced by the runtime API.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("stash worker command channel closed")]
    CommandChannelClosed,

    #[error("stash worker dropped the reply channel")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("stash worker task failed")]
    WorkerJoin(#[source] JoinError),

    #[error("item catalog must be provided before building the runtime")]
    MissingCatalog,

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("{0} has no registered equipment")]
    UnknownActor(ActorId),

    #[error("{0} already has registered equipment")]
    ActorAlreadyRegistered(ActorId),

    #[error("invalid equipment layout: {0}")]
    Layout(#[source] LayoutError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("{action} returned an unexpected result")]
    UnexpectedResult { action: &'static str },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
