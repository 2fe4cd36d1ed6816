//! Error types for satucommit modules using thiserror.

use thiserror::Error;

/// Errors from invoking the git executable.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found. Install git or set SATUCOMMIT_GIT to its path")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Not a git repository")]
    NotARepository,
}

/// Errors from the programmatic facade.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No commit message provided. Call generate() first or provide a message.")]
    NoMessage,

    #[error("Grouped commits require manual execution; generate them with group and commit each one")]
    GroupedAutoCommit,

    #[error(transparent)]
    Git(#[from] GitError),
}
