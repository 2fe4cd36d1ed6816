//! Topic grouping for splitting staged changes into several commits.
//!
//! Each staged line lands in exactly one topic. Plans are emitted in the
//! fixed [`Topic`] order, not in input order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::commit::analysis::infer_type;
use crate::commit::message::{format_commit_message, plural};
use crate::commit::types::CommitType;
use crate::git::StagedChangeLine;

/// A topic bucket. Declaration order is the plan emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Features,
    Fixes,
    Docs,
    Tests,
    Config,
    Deps,
    Style,
    Refactor,
    Build,
    Ci,
    /// Never assigned by [`group_changes`]; callers may fill it directly.
    Chore,
}

impl Topic {
    /// Commit type used for this topic's plan.
    pub fn commit_type(&self) -> CommitType {
        match self {
            Self::Features => CommitType::Feat,
            Self::Fixes => CommitType::Fix,
            Self::Docs => CommitType::Docs,
            Self::Tests => CommitType::Test,
            Self::Config => CommitType::Config,
            Self::Deps => CommitType::Deps,
            Self::Style => CommitType::Style,
            Self::Refactor => CommitType::Refactor,
            Self::Build => CommitType::Build,
            Self::Ci => CommitType::Ci,
            Self::Chore => CommitType::Chore,
        }
    }

    /// Plan description for `count` files, e.g. `"update 2 documentation files"`.
    pub fn describe(&self, count: usize) -> String {
        let (verb, one, many) = match self {
            Self::Features => ("add", "new file", "new files"),
            Self::Fixes => ("fix", "file", "files"),
            Self::Docs => ("update", "documentation file", "documentation files"),
            Self::Tests => ("add", "test file", "test files"),
            Self::Config => ("update", "configuration file", "configuration files"),
            Self::Deps => ("update", "dependency", "dependencies"),
            Self::Style => ("update", "style file", "style files"),
            Self::Refactor => ("refactor", "file", "files"),
            Self::Build => ("update", "build file", "build files"),
            Self::Ci => ("update", "CI file", "CI files"),
            Self::Chore => ("update", "chore file", "chore files"),
        };
        format!("{verb} {count} {}", plural(count, one, many))
    }

    /// Topic for a path whose type was inferred.
    fn from_inferred(ty: CommitType) -> Option<Self> {
        match ty {
            CommitType::Test => Some(Self::Tests),
            CommitType::Docs => Some(Self::Docs),
            CommitType::Deps => Some(Self::Deps),
            CommitType::Ci => Some(Self::Ci),
            CommitType::Config => Some(Self::Config),
            CommitType::Style => Some(Self::Style),
            CommitType::Build => Some(Self::Build),
            _ => None,
        }
    }
}

/// Assign a topic to one staged line.
///
/// Path rules come first; otherwise deletions are fixes, additions are
/// features and everything else (including untracked `??`) is a refactor.
pub fn topic_for(line: &StagedChangeLine) -> Topic {
    if let Some(topic) = infer_type(&line.path).and_then(Topic::from_inferred) {
        return topic;
    }
    if line.status.starts_with('D') {
        Topic::Fixes
    } else if line.status.starts_with('A') {
        Topic::Features
    } else {
        Topic::Refactor
    }
}

/// Staged lines partitioned by topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeGroups {
    groups: BTreeMap<Topic, Vec<StagedChangeLine>>,
}

impl ChangeGroups {
    pub fn push(&mut self, topic: Topic, line: StagedChangeLine) {
        self.groups.entry(topic).or_default().push(line);
    }

    /// Lines in `topic`; empty if none.
    pub fn get(&self, topic: Topic) -> &[StagedChangeLine] {
        self.groups
            .get(&topic)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty groups in topic order.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, &[StagedChangeLine])> {
        self.groups
            .iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(topic, lines)| (*topic, lines.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Group staged lines by topic.
pub fn group_changes(lines: &[StagedChangeLine]) -> ChangeGroups {
    let mut groups = ChangeGroups::default();
    for line in lines {
        groups.push(topic_for(line), line.clone());
    }
    groups
}

/// One proposed commit for a topic group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedCommitPlan {
    pub topic: Topic,
    pub commit_type: CommitType,
    pub description: String,
    pub files: Vec<StagedChangeLine>,
}

impl GroupedCommitPlan {
    /// Render the plan as a commit message with an optional scope.
    pub fn message(&self, scope: &str) -> String {
        format_commit_message(
            self.commit_type.as_str(),
            scope,
            &self.description,
            "",
            "",
            false,
        )
    }
}

/// One plan per non-empty group, in topic order.
pub fn generate_grouped_commits(groups: &ChangeGroups) -> Vec<GroupedCommitPlan> {
    groups
        .iter()
        .map(|(topic, lines)| GroupedCommitPlan {
            topic,
            commit_type: topic.commit_type(),
            description: topic.describe(lines.len()),
            files: lines.to_vec(),
        })
        .collect()
}
