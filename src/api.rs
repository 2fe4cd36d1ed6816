//! Programmatic facade for agents and other embedding callers.
//!
//! Mirrors the CLI operations: inspect staged changes, suggest or generate a
//! message, and commit. The facade remembers the last analysis and the last
//! generated single message so `commit(None)` can reuse it.

use serde::Serialize;
use tracing::{debug, info};

use crate::commit::{
    ChangeSet, DEFAULT_DESCRIPTION, Suggestion, classify, format_commit_message,
    generate_commit_message, generate_grouped_commits, group_changes, suggest,
};
use crate::error::ApiError;
use crate::git::{
    GitExecutor, StagedChangeLine, SystemGit, create_commit, is_repository, staged_changes_or_empty,
};

/// Options for [`SatuCommit::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub description: String,
    /// Explicit type. Used only together with a non-empty description.
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub breaking: bool,
    pub group: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            commit_type: None,
            scope: None,
            breaking: false,
            group: false,
        }
    }
}

/// One message of a grouped generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedCommit {
    pub message: String,
    pub commit_type: String,
    pub files: Vec<StagedChangeLine>,
}

/// Result of [`SatuCommit::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Generated {
    Single(String),
    Grouped(Vec<GroupedCommit>),
}

/// Stateful facade over the collector, classifier and synthesizer.
#[derive(Debug)]
pub struct SatuCommit<G: GitExecutor = SystemGit> {
    git: G,
    last_analysis: Option<ChangeSet>,
    last_commit_message: Option<String>,
}

impl Default for SatuCommit<SystemGit> {
    fn default() -> Self {
        Self::new(SystemGit::from_env())
    }
}

impl<G: GitExecutor> SatuCommit<G> {
    pub fn new(git: G) -> Self {
        Self {
            git,
            last_analysis: None,
            last_commit_message: None,
        }
    }

    pub fn is_git_repo(&self) -> bool {
        is_repository(&self.git)
    }

    /// Collect and classify the staged changes, caching the analysis.
    pub fn get_staged_changes(&mut self) -> &ChangeSet {
        let lines = staged_changes_or_empty(&self.git);
        self.last_analysis.insert(classify(&lines))
    }

    /// Suggested type, scope and description for the staged changes.
    pub fn get_suggestions(&mut self) -> Suggestion {
        suggest(self.get_staged_changes())
    }

    /// The cached analysis, collecting one first if none exists.
    pub fn get_analysis(&mut self) -> &ChangeSet {
        if self.last_analysis.is_none() {
            return self.get_staged_changes();
        }
        self.last_analysis.get_or_insert_default()
    }

    /// Generate a message (or grouped messages) for the staged changes.
    ///
    /// Returns `None` when nothing is staged.
    pub fn generate(&mut self, options: &GenerateOptions) -> Option<Generated> {
        let lines = staged_changes_or_empty(&self.git);
        if lines.is_empty() {
            debug!("No staged changes, nothing to generate");
            return None;
        }

        let changes = classify(&lines);
        let scope = options.scope.as_deref().unwrap_or_default();

        if options.group {
            let commits = generate_grouped_commits(&group_changes(&lines))
                .into_iter()
                .map(|plan| GroupedCommit {
                    message: plan.message(scope),
                    commit_type: plan.commit_type.to_string(),
                    files: plan.files,
                })
                .collect();
            self.last_analysis = Some(changes);
            return Some(Generated::Grouped(commits));
        }

        let message = match options.commit_type.as_deref() {
            Some(commit_type) if !options.description.is_empty() => format_commit_message(
                commit_type,
                scope,
                &options.description,
                "",
                "",
                options.breaking,
            ),
            _ => generate_commit_message(&changes, &options.description, options.breaking),
        };

        self.last_analysis = Some(changes);
        self.last_commit_message = Some(message.clone());
        Some(Generated::Single(message))
    }

    /// Commit with `message`, or with the last generated message.
    ///
    /// Returns `Ok(false)` when git refuses the commit.
    pub fn commit(&self, message: Option<&str>) -> Result<bool, ApiError> {
        let message = message
            .filter(|m| !m.is_empty())
            .or(self.last_commit_message.as_deref())
            .ok_or(ApiError::NoMessage)?;
        info!("Committing: {}", message.lines().next().unwrap_or_default());
        Ok(create_commit(&self.git, message))
    }

    /// Generate and commit in one step.
    ///
    /// Returns `Ok(false)` when nothing is staged.
    pub fn commit_auto(&mut self, options: &GenerateOptions) -> Result<bool, ApiError> {
        match self.generate(options) {
            None => {
                info!("No staged changes to commit");
                Ok(false)
            }
            Some(Generated::Grouped(_)) => Err(ApiError::GroupedAutoCommit),
            Some(Generated::Single(message)) => self.commit(Some(&message)),
        }
    }
}
