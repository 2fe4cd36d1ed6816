//! satucommit - generate semantic gitmoji commit messages from staged changes.
//!
//! # Overview
//!
//! satucommit reads `git diff --cached --name-status`, classifies the staged
//! paths into status buckets, inferred commit types and scopes, and renders a
//! conventional commit header such as `✨ feat(api)!: drop v1 endpoint`.
//! Changes can also be split into topic groups with one proposed commit each.

pub mod api;
pub mod commit;
pub mod error;
pub mod git;

// Re-export commonly used types
pub use api::{GenerateOptions, Generated, GroupedCommit, SatuCommit};
pub use commit::{ChangeSet, CommitDraft, CommitType, GroupedCommitPlan, Suggestion, Topic};
pub use error::{ApiError, GitError};
pub use git::{FileStatus, GitExecutor, StagedChangeLine, SystemGit};
