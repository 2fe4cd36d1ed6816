//! Staged change collection and commit execution.

use std::fmt;

use serde::Serialize;
use tracing::{debug, error};

use crate::error::GitError;
use crate::git::executor::GitExecutor;

/// Status bucket of a staged file, derived from its git status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    /// Copies, type changes, unmerged entries and anything else git reports.
    Unclassified,
}

impl FileStatus {
    /// Map a git status code (`A`, `M`, `D`, `R100`, `??`, ...) to its bucket.
    pub fn from_code(code: &str) -> Self {
        if code.starts_with('A') || code.starts_with("??") {
            Self::Added
        } else if code.starts_with('M') {
            Self::Modified
        } else if code.starts_with('D') {
            Self::Deleted
        } else if code.starts_with('R') {
            Self::Renamed
        } else {
            Self::Unclassified
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Added => write!(f, "Added"),
            FileStatus::Modified => write!(f, "Modified"),
            FileStatus::Deleted => write!(f, "Deleted"),
            FileStatus::Renamed => write!(f, "Renamed"),
            FileStatus::Unclassified => write!(f, "Unclassified"),
        }
    }
}

/// One line of `git diff --cached --name-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedChangeLine {
    /// Raw status code as printed by git.
    pub status: String,
    /// Path as printed by git. For renames and copies this is `old\tnew`.
    pub path: String,
}

impl StagedChangeLine {
    pub fn new(status: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            path: path.into(),
        }
    }

    /// Parse a `status<TAB>path` line.
    ///
    /// Everything after the first tab is the path, tabs included. A line
    /// without a tab yields an empty path.
    pub fn parse(line: &str) -> Self {
        match line.split_once('\t') {
            Some((status, path)) => Self::new(status, path),
            None => Self::new(line, ""),
        }
    }

    pub fn file_status(&self) -> FileStatus {
        FileStatus::from_code(&self.status)
    }
}

impl fmt::Display for StagedChangeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.status, self.path)
    }
}

/// Split command output into its non-empty lines.
fn output_lines(output: &str) -> impl Iterator<Item = &str> {
    output.trim().lines().filter(|line| !line.is_empty())
}

/// List the staged changes of the current repository.
pub fn list_staged_changes(git: &impl GitExecutor) -> Result<Vec<StagedChangeLine>, GitError> {
    let output = git.diff_cached_name_status()?;
    let lines: Vec<StagedChangeLine> = output_lines(&output)
        .map(StagedChangeLine::parse)
        .collect();
    debug!("Found {} staged changes", lines.len());
    Ok(lines)
}

/// List the staged changes, logging and swallowing any git failure.
///
/// A failed `git diff` is reported as "nothing staged".
pub fn staged_changes_or_empty(git: &impl GitExecutor) -> Vec<StagedChangeLine> {
    list_staged_changes(git).unwrap_or_else(|e| {
        error!("Error getting git diff: {}", e);
        Vec::new()
    })
}

/// Lines of `git status --short`, keeping the two-column status prefix.
pub fn status_short(git: &impl GitExecutor) -> Result<Vec<String>, GitError> {
    let output = git.status_short()?;
    Ok(output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect())
}

/// Whether the working directory is inside a git repository. Never fails.
pub fn is_repository(git: &impl GitExecutor) -> bool {
    match git.git_dir() {
        Ok(_) => true,
        Err(e) => {
            debug!("Not a git repository: {}", e);
            false
        }
    }
}

/// Commit the staged changes with `message`.
///
/// Returns `false` and logs the failure instead of propagating it.
pub fn create_commit(git: &impl GitExecutor, message: &str) -> bool {
    match git.commit(message) {
        Ok(()) => true,
        Err(e) => {
            error!("Error creating commit: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::executor::MockGitExecutor;

    #[test]
    fn test_file_status_from_code() {
        assert_eq!(FileStatus::from_code("A"), FileStatus::Added);
        assert_eq!(FileStatus::from_code("??"), FileStatus::Added);
        assert_eq!(FileStatus::from_code("M"), FileStatus::Modified);
        assert_eq!(FileStatus::from_code("MM"), FileStatus::Modified);
        assert_eq!(FileStatus::from_code("D"), FileStatus::Deleted);
        assert_eq!(FileStatus::from_code("R100"), FileStatus::Renamed);
        assert_eq!(FileStatus::from_code("C75"), FileStatus::Unclassified);
        assert_eq!(FileStatus::from_code("T"), FileStatus::Unclassified);
        assert_eq!(FileStatus::from_code("?"), FileStatus::Unclassified);
    }

    #[test]
    fn test_parse_simple_line() {
        let line = StagedChangeLine::parse("M\tsrc/main.rs");
        assert_eq!(line.status, "M");
        assert_eq!(line.path, "src/main.rs");
    }

    #[test]
    fn test_parse_rename_rejoins_paths() {
        let line = StagedChangeLine::parse("R100\tsrc/old.rs\tsrc/new.rs");
        assert_eq!(line.status, "R100");
        assert_eq!(line.path, "src/old.rs\tsrc/new.rs");
        assert_eq!(line.to_string(), "R100\tsrc/old.rs\tsrc/new.rs");
    }

    #[test]
    fn test_parse_line_without_tab() {
        let line = StagedChangeLine::parse("garbage");
        assert_eq!(line.status, "garbage");
        assert_eq!(line.path, "");
    }

    #[test]
    fn test_list_staged_changes_skips_blank_lines() {
        let mut git = MockGitExecutor::new();
        git.expect_diff_cached_name_status()
            .returning(|| Ok("A\tsrc/a.rs\n\nM\tREADME.md\n".to_string()));

        let lines = list_staged_changes(&git).unwrap();
        assert_eq!(
            lines,
            vec![
                StagedChangeLine::new("A", "src/a.rs"),
                StagedChangeLine::new("M", "README.md"),
            ]
        );
    }

    #[test]
    fn test_list_staged_changes_empty_output() {
        let mut git = MockGitExecutor::new();
        git.expect_diff_cached_name_status()
            .returning(|| Ok("\n".to_string()));
        assert!(list_staged_changes(&git).unwrap().is_empty());
    }

    #[test]
    fn test_staged_changes_or_empty_swallows_errors() {
        let mut git = MockGitExecutor::new();
        git.expect_diff_cached_name_status().returning(|| {
            Err(GitError::NonZeroExit {
                command: "diff".to_string(),
                code: Some(128),
                stderr: "fatal: bad revision".to_string(),
            })
        });
        assert!(staged_changes_or_empty(&git).is_empty());
    }

    #[test]
    fn test_status_short_lines() {
        let mut git = MockGitExecutor::new();
        git.expect_status_short()
            .returning(|| Ok(" M src/lib.rs\n?? notes.txt\n".to_string()));
        let lines = status_short(&git).unwrap();
        assert_eq!(lines, vec![" M src/lib.rs", "?? notes.txt"]);
    }

    #[test]
    fn test_is_repository_never_fails() {
        let mut git = MockGitExecutor::new();
        git.expect_git_dir().returning(|| Err(GitError::NotInstalled));
        assert!(!is_repository(&git));

        let mut git = MockGitExecutor::new();
        git.expect_git_dir().returning(|| Ok(".git\n".to_string()));
        assert!(is_repository(&git));
    }

    #[test]
    fn test_create_commit_passes_message_verbatim() {
        let mut git = MockGitExecutor::new();
        git.expect_commit()
            .withf(|message| message == "✨ feat: say \"hi\"; rm -rf $HOME")
            .times(1)
            .returning(|_| Ok(()));
        assert!(create_commit(&git, "✨ feat: say \"hi\"; rm -rf $HOME"));
    }

    #[test]
    fn test_create_commit_failure_returns_false() {
        let mut git = MockGitExecutor::new();
        git.expect_commit().returning(|_| {
            Err(GitError::NonZeroExit {
                command: "commit".to_string(),
                code: Some(1),
                stderr: "nothing to commit".to_string(),
            })
        });
        assert!(!create_commit(&git, "✨ feat: anything"));
    }
}
