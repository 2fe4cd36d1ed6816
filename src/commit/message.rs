//! Commit message synthesis.

use serde::Serialize;

use crate::commit::analysis::ChangeSet;
use crate::commit::types::{CommitType, gitmoji_for};

/// Description used when the caller gives none.
pub const DEFAULT_DESCRIPTION: &str = "update project files";

/// A commit message before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitDraft {
    pub commit_type: String,
    pub scope: Option<String>,
    pub description: String,
    pub body: Option<String>,
    pub footer: Option<String>,
    pub breaking: bool,
}

impl CommitDraft {
    pub fn new(commit_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            description: description.into(),
            body: None,
            footer: None,
            breaking: false,
        }
    }

    /// Set the scope. An empty scope means no scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = non_empty(scope.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = non_empty(body.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = non_empty(footer.into());
        self
    }

    #[must_use]
    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// The first line: `<gitmoji> <type>[(scope)][!]: <description>`.
    pub fn header(&self) -> String {
        let mut header = format!("{} {}", gitmoji_for(&self.commit_type), self.commit_type);
        if let Some(scope) = &self.scope {
            header.push('(');
            header.push_str(scope);
            header.push(')');
        }
        if self.breaking {
            header.push('!');
        }
        header.push_str(": ");
        header.push_str(&self.description);
        header
    }

    /// Render the full message: header, then body and footer separated by
    /// blank lines when present.
    pub fn format(&self) -> String {
        let mut message = self.header();
        for section in [&self.body, &self.footer].into_iter().flatten() {
            message.push_str("\n\n");
            message.push_str(section);
        }
        message
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

/// Choose the commit type for a change set.
///
/// Inferred types are ranked by priority. Without any inferred type the
/// status buckets decide: deletions only is `remove`, additions without
/// modifications is `feat`, modifications without additions is `fix`.
pub fn select_type(changes: &ChangeSet) -> CommitType {
    if let Some(ty) = changes.prioritized_type() {
        return ty;
    }

    let added = !changes.added.is_empty();
    let modified = !changes.modified.is_empty();
    let deleted = !changes.deleted.is_empty();

    match (added, modified, deleted) {
        (false, false, true) => CommitType::Remove,
        (true, false, _) => CommitType::Feat,
        (false, true, _) => CommitType::Fix,
        _ => CommitType::Feat,
    }
}

/// Generate a commit message from classified changes.
pub fn generate_commit_message(changes: &ChangeSet, description: &str, breaking: bool) -> String {
    let mut draft = CommitDraft::new(select_type(changes).as_str(), description).breaking(breaking);
    if let Some(scope) = changes.primary_scope() {
        draft = draft.scope(scope);
    }
    draft.format()
}

/// Format a commit message from explicit parts. Empty strings mean "absent".
pub fn format_commit_message(
    commit_type: &str,
    scope: &str,
    description: &str,
    body: &str,
    footer: &str,
    breaking: bool,
) -> String {
    CommitDraft::new(commit_type, description)
        .scope(scope)
        .body(body)
        .footer(footer)
        .breaking(breaking)
        .format()
}

/// Suggested type, scope and description for a change set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub commit_type: CommitType,
    pub scope: Option<String>,
    pub description: String,
}

/// Suggest commit parts for interactive use.
///
/// Unlike [`select_type`], an empty type set always suggests `feat`.
pub fn suggest(changes: &ChangeSet) -> Suggestion {
    match changes.prioritized_type() {
        Some(commit_type) => Suggestion {
            commit_type,
            scope: changes.primary_scope().map(String::from),
            description: describe_changes(changes),
        },
        None => Suggestion {
            commit_type: CommitType::Feat,
            scope: None,
            description: DEFAULT_DESCRIPTION.to_string(),
        },
    }
}

/// `"add 2 files, update 1 file"` style summary of the status buckets.
pub fn describe_changes(changes: &ChangeSet) -> String {
    let parts: Vec<String> = [
        ("add", changes.added.len()),
        ("update", changes.modified.len()),
        ("remove", changes.deleted.len()),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(verb, count)| format!("{verb} {count} {}", plural(count, "file", "files")))
    .collect();

    if parts.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        parts.join(", ")
    }
}

pub(crate) fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
