//! Git operations via the system `git` binary.

pub mod executor;
pub mod staged;

pub use executor::{GIT_BIN_ENV_VAR, GitExecutor, SystemGit};
pub use staged::{
    FileStatus, StagedChangeLine, create_commit, is_repository, list_staged_changes,
    staged_changes_or_empty, status_short,
};
