//! Commit message synthesis from staged changes.

pub mod analysis;
pub mod group;
pub mod message;
pub mod types;

pub use analysis::{ChangeSet, classify, infer_scope, infer_type};
pub use group::{
    ChangeGroups, GroupedCommitPlan, Topic, generate_grouped_commits, group_changes, topic_for,
};
pub use message::{
    CommitDraft, DEFAULT_DESCRIPTION, Suggestion, describe_changes, format_commit_message,
    generate_commit_message, select_type, suggest,
};
pub use types::{COMMIT_TYPES, COMMON_SCOPES, CommitType, TYPE_PRIORITY, TypeInfo};
