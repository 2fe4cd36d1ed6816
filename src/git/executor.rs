//! Running the system `git` binary.
//!
//! All operations shell out with `std::process::Command`, inheriting the user's
//! existing git config, hooks, and credential setup. Arguments are always passed
//! as separate argv elements, never through a shell.

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::GitError;

/// Environment variable to override the git executable.
pub const GIT_BIN_ENV_VAR: &str = "SATUCOMMIT_GIT";

const DEFAULT_GIT_BIN: &str = "git";

/// The git operations satucommit needs.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitExecutor {
    /// Output of `git diff --cached --name-status`.
    fn diff_cached_name_status(&self) -> Result<String, GitError>;

    /// Output of `git status --short`.
    fn status_short(&self) -> Result<String, GitError>;

    /// Output of `git rev-parse --git-dir`.
    fn git_dir(&self) -> Result<String, GitError>;

    /// Run `git commit -m <message>`.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

/// Executor that calls the real git CLI.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    workdir: Option<PathBuf>,
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::from_env()
    }
}

impl SystemGit {
    /// Use the given git executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Resolve the executable from `SATUCOMMIT_GIT`, falling back to `git`.
    ///
    /// An empty value is ignored.
    pub fn from_env() -> Self {
        match env::var(GIT_BIN_ENV_VAR) {
            Ok(v) if !v.trim().is_empty() => Self::new(v),
            _ => Self::new(DEFAULT_GIT_BIN),
        }
    }

    /// Run every command inside `dir` instead of the process working directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Check that the configured git executable can be found.
    pub fn ensure_installed(&self) -> Result<(), GitError> {
        which::which(&self.program)
            .map(|_| ())
            .map_err(|_| GitError::NotInstalled)
    }

    /// Run git with `args` and return its stdout.
    fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        debug!("Running {} {}", self.program.display(), args.join(" "));

        let output = cmd.output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GitError::NotInstalled
            } else {
                GitError::SpawnFailed(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let command = args.first().copied().unwrap_or_default().to_string();
            debug!("git {} failed: {}", command, stderr);
            return Err(GitError::NonZeroExit {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl GitExecutor for SystemGit {
    fn diff_cached_name_status(&self) -> Result<String, GitError> {
        self.run_git(&["diff", "--cached", "--name-status"])
    }

    fn status_short(&self) -> Result<String, GitError> {
        self.run_git(&["status", "--short"])
    }

    fn git_dir(&self) -> Result<String, GitError> {
        self.run_git(&["rev-parse", "--git-dir"])
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message]).map(|_| ())
    }
}
