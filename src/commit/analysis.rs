//! Staged change classification.
//!
//! Buckets staged paths by status and infers commit types and scopes from
//! path strings alone. File contents are never read.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::commit::types::{CommitType, TYPE_PRIORITY, is_common_scope};
use crate::git::{FileStatus, StagedChangeLine};

/// Path predicates in evaluation order. The first rule with a matching
/// needle decides the type of a path.
const TYPE_RULES: &[(CommitType, &[&str])] = &[
    (CommitType::Test, &["test", "spec"]),
    (CommitType::Docs, &["doc"]),
    (
        CommitType::Deps,
        &["package.json", "yarn.lock", "package-lock.json"],
    ),
    (CommitType::Ci, &[".github", ".gitlab", "jenkins", "travis"]),
    (CommitType::Config, &["config", ".env"]),
    (CommitType::Style, &["style", "css", "scss", "less"]),
    (CommitType::Build, &["build", "webpack", "vite", "rollup"]),
];

/// Infer the commit type of a single path, if any rule matches.
pub fn infer_type(path: &str) -> Option<CommitType> {
    TYPE_RULES.iter().find_map(|(ty, needles)| {
        let matched = needles.iter().any(|n| path.contains(n))
            || (*ty == CommitType::Docs && path.ends_with(".md"));
        matched.then_some(*ty)
    })
}

/// Infer a scope from the first directory segment of a path.
pub fn infer_scope(path: &str) -> Option<String> {
    let mut segments = path.split('/');
    let first = segments.next()?;
    segments.next()?;

    let candidate = first.to_lowercase();
    is_common_scope(&candidate).then_some(candidate)
}

/// Classified staged changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub renamed: Vec<String>,
    /// Paths whose status code fits none of the four buckets.
    pub unclassified: Vec<String>,
    pub types: BTreeSet<CommitType>,
    /// Inferred scopes in first-seen order, without duplicates.
    pub scopes: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.modified.is_empty()
            && self.deleted.is_empty()
            && self.renamed.is_empty()
            && self.unclassified.is_empty()
    }

    /// The highest-priority inferred type, if any type was inferred.
    pub fn prioritized_type(&self) -> Option<CommitType> {
        TYPE_PRIORITY.into_iter().find(|t| self.types.contains(t))
    }

    /// The first inferred scope.
    pub fn primary_scope(&self) -> Option<&str> {
        self.scopes.first().map(String::as_str)
    }

    fn push(&mut self, status: FileStatus, path: &str) {
        let bucket = match status {
            FileStatus::Added => &mut self.added,
            FileStatus::Modified => &mut self.modified,
            FileStatus::Deleted => &mut self.deleted,
            FileStatus::Renamed => &mut self.renamed,
            FileStatus::Unclassified => &mut self.unclassified,
        };
        bucket.push(path.to_string());
    }
}

/// Classify staged change lines into a [`ChangeSet`].
pub fn classify(lines: &[StagedChangeLine]) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for line in lines {
        changes.push(line.file_status(), &line.path);

        if let Some(ty) = infer_type(&line.path) {
            changes.types.insert(ty);
        }

        if let Some(scope) = infer_scope(&line.path) {
            if !changes.scopes.contains(&scope) {
                changes.scopes.push(scope);
            }
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<StagedChangeLine> {
        raw.iter().map(|l| StagedChangeLine::parse(l)).collect()
    }

    #[test]
    fn test_infer_type_priority_order() {
        // "test" wins over "doc" because it is checked first
        assert_eq!(infer_type("docs/test-plan.md"), Some(CommitType::Test));
        assert_eq!(infer_type("spec/parser.rb"), Some(CommitType::Test));
        assert_eq!(infer_type("README.md"), Some(CommitType::Docs));
        assert_eq!(infer_type("docs/guide.txt"), Some(CommitType::Docs));
        assert_eq!(infer_type("package.json"), Some(CommitType::Deps));
        assert_eq!(infer_type("yarn.lock"), Some(CommitType::Deps));
        assert_eq!(infer_type(".github/workflows/ci.yml"), Some(CommitType::Ci));
        assert_eq!(infer_type("Jenkinsfile"), None);
        assert_eq!(
            infer_type("ops/jenkins/pipeline.groovy"),
            Some(CommitType::Ci)
        );
        assert_eq!(infer_type("app.config.ts"), Some(CommitType::Config));
        assert_eq!(infer_type(".env.local"), Some(CommitType::Config));
        assert_eq!(infer_type("src/main.scss"), Some(CommitType::Style));
        assert_eq!(infer_type("webpack.prod.js"), Some(CommitType::Build));
        assert_eq!(infer_type("src/core/foo.js"), None);
    }

    #[test]
    fn test_infer_type_is_case_sensitive() {
        assert_eq!(infer_type("CHANGELOG.MD"), None);
        assert_eq!(infer_type("TESTS/a.rs"), None);
    }

    #[test]
    fn test_infer_scope() {
        assert_eq!(infer_scope("api/routes.rs"), Some("api".to_string()));
        assert_eq!(infer_scope("API/routes.rs"), Some("api".to_string()));
        assert_eq!(infer_scope("src/api/routes.rs"), None);
        // A bare file name has no directory to infer from
        assert_eq!(infer_scope("api"), None);
    }

    #[test]
    fn test_classify_only_added() {
        let input = lines(&["A\tsrc/a.rs", "A\tsrc/b.rs", "A\tlib/c.rs"]);
        let changes = classify(&input);
        assert_eq!(changes.added, vec!["src/a.rs", "src/b.rs", "lib/c.rs"]);
        assert!(changes.modified.is_empty());
        assert!(changes.deleted.is_empty());
        assert!(changes.renamed.is_empty());
    }

    #[test]
    fn test_classify_buckets_by_status() {
        let input = lines(&[
            "A\tnew.rs",
            "??\tuntracked.rs",
            "M\tchanged.rs",
            "D\tgone.rs",
            "R100\told.rs\tnew_name.rs",
            "C50\tsource.rs\tcopy.rs",
        ]);
        let changes = classify(&input);
        assert_eq!(changes.added, vec!["new.rs", "untracked.rs"]);
        assert_eq!(changes.modified, vec!["changed.rs"]);
        assert_eq!(changes.deleted, vec!["gone.rs"]);
        assert_eq!(changes.renamed, vec!["old.rs\tnew_name.rs"]);
        assert_eq!(changes.unclassified, vec!["source.rs\tcopy.rs"]);
    }

    #[test]
    fn test_unclassified_status_still_infers_type_and_scope() {
        let changes = classify(&lines(&["T\tdocs/guide.txt"]));
        assert!(changes.added.is_empty());
        assert!(changes.types.contains(&CommitType::Docs));
        assert_eq!(changes.scopes, vec!["docs"]);
    }

    #[test]
    fn test_classify_mixed_example() {
        let changes = classify(&lines(&["A\tsrc/core/foo.js", "M\tdocs/readme.md"]));
        assert_eq!(changes.types, BTreeSet::from([CommitType::Docs]));
        assert_eq!(changes.scopes, vec!["docs"]);
    }

    #[test]
    fn test_scopes_keep_first_seen_order() {
        let changes = classify(&lines(&[
            "M\tui/button.tsx",
            "M\tapi/users.ts",
            "M\tui/modal.tsx",
        ]));
        assert_eq!(changes.scopes, vec!["ui", "api"]);
        assert_eq!(changes.primary_scope(), Some("ui"));
    }

    #[test]
    fn test_prioritized_type() {
        let mut changes = ChangeSet::default();
        assert_eq!(changes.prioritized_type(), None);
        changes.types.insert(CommitType::Docs);
        changes.types.insert(CommitType::Fix);
        assert_eq!(changes.prioritized_type(), Some(CommitType::Fix));
    }

    #[test]
    fn test_empty_input() {
        let changes = classify(&[]);
        assert!(changes.is_empty());
        assert!(changes.types.is_empty());
    }
}
