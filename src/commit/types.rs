//! Commit type vocabulary, gitmoji markers and common scopes.

use serde::{Deserialize, Serialize};

/// A commit type label with its gitmoji and human-readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: &'static str,
    pub gitmoji: &'static str,
    pub description: &'static str,
}

const fn info(name: &'static str, gitmoji: &'static str, description: &'static str) -> TypeInfo {
    TypeInfo {
        name,
        gitmoji,
        description,
    }
}

/// Every known commit type, in display order.
///
/// The first ten are the conventional-commit types; the rest are display labels.
pub static COMMIT_TYPES: &[TypeInfo] = &[
    info("feat", "✨", "A new feature"),
    info("fix", "🐛", "A bug fix"),
    info("docs", "📝", "Documentation only changes"),
    info("style", "💄", "Changes that do not affect the meaning of the code"),
    info("refactor", "♻️", "A code change that neither fixes a bug nor adds a feature"),
    info("perf", "⚡", "A code change that improves performance"),
    info("test", "✅", "Adding missing tests or correcting existing tests"),
    info("build", "📦", "Changes that affect the build system or external dependencies"),
    info("ci", "👷", "Changes to CI configuration files and scripts"),
    info("chore", "🧹", "Other changes that don't modify src or test files"),
    info("revert", "⏪", "Reverts a previous commit"),
    info("init", "🎉", "Initial commit"),
    info("wip", "🚧", "Work in progress"),
    info("security", "🔒", "Security fixes"),
    info("config", "🔧", "Configuration changes"),
    info("deps", "➕", "Adding dependencies"),
    info("remove", "➖", "Removing dependencies"),
    info("update", "⬆️", "Updating dependencies"),
    info("downgrade", "⬇️", "Downgrading dependencies"),
    info("branch", "🌿", "Branch operations"),
    info("merge", "🔀", "Merge operations"),
    info("tag", "🏷️", "Tag operations"),
    info("release", "🚀", "Release operations"),
    info("deploy", "🎯", "Deployment operations"),
    info("locale", "🌐", "Localization changes"),
    info("accessibility", "♿", "Accessibility improvements"),
    info("design", "🎨", "Design changes"),
    info("content", "✏️", "Content changes"),
    info("translation", "🌐", "Translation changes"),
    info("email", "📧", "Email changes"),
    info("analytics", "📊", "Analytics changes"),
    info("seo", "🔍", "SEO changes"),
    info("performance", "⚡", "Performance improvements"),
    info("hotfix", "🚑", "Hotfix"),
    info("breaking", "💥", "Breaking changes"),
    info("license", "⚖️", "License changes"),
    info("ignore", "🙈", "Ignore changes"),
    info("workflow", "📋", "Workflow changes"),
    info("infrastructure", "🏗️", "Infrastructure changes"),
    info("database", "🗄️", "Database changes"),
    info("api", "🔌", "API changes"),
    info("ui", "🖼️", "UI changes"),
    info("ux", "🎯", "UX changes"),
    info("mobile", "📱", "Mobile changes"),
    info("desktop", "💻", "Desktop changes"),
    info("server", "🖥️", "Server changes"),
    info("cloud", "☁️", "Cloud changes"),
    info("monitoring", "📈", "Monitoring changes"),
    info("logging", "📋", "Logging changes"),
    info("caching", "💾", "Caching changes"),
    info("validation", "✅", "Validation changes"),
    info("formatting", "💄", "Formatting changes"),
    info("linting", "🔍", "Linting changes"),
    info("types", "📝", "Type changes"),
    info("comments", "💬", "Comment changes"),
    info("documentation", "📚", "Documentation changes"),
    info("examples", "📖", "Example changes"),
    info("templates", "📄", "Template changes"),
    info("scaffolding", "🏗️", "Scaffolding changes"),
    info("migration", "🔄", "Migration changes"),
    info("backup", "💾", "Backup changes"),
    info("restore", "📦", "Restore changes"),
    info("export", "📤", "Export changes"),
    info("import", "📥", "Import changes"),
    info("download", "⬇️", "Download changes"),
    info("upload", "⬆️", "Upload changes"),
    info("install", "📥", "Installation changes"),
    info("uninstall", "📤", "Uninstallation changes"),
    info("upgrade", "⬆️", "Upgrade changes"),
    info("patch", "🩹", "Patch changes"),
    info("experimental", "🧪", "Experimental changes"),
    info("deprecated", "⚠️", "Deprecation changes"),
    info("removed", "🗑️", "Removal changes"),
    info("added", "➕", "Added changes"),
    info("changed", "🔄", "Changed changes"),
    info("fixed", "🐛", "Fixed changes"),
    info("improved", "⚡", "Improved changes"),
    info("optimized", "⚡", "Optimized changes"),
    info("simplified", "🧹", "Simplified changes"),
    info("refactored", "♻️", "Refactored changes"),
    info("reorganized", "📦", "Reorganized changes"),
    info("renamed", "🏷️", "Renamed changes"),
    info("moved", "📦", "Moved changes"),
    info("copied", "📋", "Copied changes"),
    info("deleted", "🗑️", "Deleted changes"),
    info("created", "✨", "Created changes"),
    info("updated", "⬆️", "Updated changes"),
    info("modified", "🔄", "Modified changes"),
    info("replaced", "🔄", "Replaced changes"),
    info("merged", "🔀", "Merged changes"),
    info("split", "✂️", "Split changes"),
    info("extracted", "📦", "Extracted changes"),
    info("inlined", "📦", "Inlined changes"),
    info("extracted_to_file", "📦", "Extracted to file changes"),
    info("inlined_from_file", "📦", "Inlined from file changes"),
    info("extracted_to_module", "📦", "Extracted to module changes"),
    info("inlined_from_module", "📦", "Inlined from module changes"),
    info("extracted_to_function", "📦", "Extracted to function changes"),
    info("inlined_from_function", "📦", "Inlined from function changes"),
];

/// Scopes recognised when inferring a scope from the first path segment.
pub static COMMON_SCOPES: &[&str] = &[
    "core",
    "ui",
    "api",
    "auth",
    "db",
    "config",
    "utils",
    "components",
    "hooks",
    "services",
    "store",
    "router",
    "middleware",
    "tests",
    "docs",
    "build",
    "deploy",
    "ci",
    "types",
    "styles",
    "assets",
    "i18n",
    "analytics",
    "monitoring",
    "logging",
    "caching",
    "validation",
    "security",
    "performance",
    "accessibility",
    "seo",
    "email",
    "notifications",
    "payments",
    "integrations",
    "webhooks",
    "scheduler",
    "queue",
    "storage",
    "backup",
    "migration",
    "database",
    "server",
    "client",
    "mobile",
    "desktop",
    "cli",
    "admin",
    "dashboard",
    "settings",
    "profile",
    "search",
    "filters",
    "pagination",
    "sorting",
    "forms",
    "modals",
    "dialogs",
    "toasts",
    "loading",
    "error",
    "success",
    "warning",
    "info",
];

/// Look up a type by name.
pub fn lookup(name: &str) -> Option<&'static TypeInfo> {
    COMMIT_TYPES.iter().find(|t| t.name == name)
}

/// Gitmoji for a type name, falling back to the `feat` marker.
pub fn gitmoji_for(name: &str) -> &'static str {
    lookup(name).map_or(CommitType::Feat.gitmoji(), |t| t.gitmoji)
}

/// Description for a type name, if the type is known.
pub fn description_for(name: &str) -> Option<&'static str> {
    lookup(name).map(|t| t.description)
}

/// Whether `scope` belongs to the common-scope vocabulary.
pub fn is_common_scope(scope: &str) -> bool {
    COMMON_SCOPES.contains(&scope)
}

/// Commit types that can be inferred from staged changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Config,
    Deps,
    Remove,
}

/// Selection order when several types were inferred.
pub const TYPE_PRIORITY: [CommitType; 12] = [
    CommitType::Fix,
    CommitType::Feat,
    CommitType::Test,
    CommitType::Docs,
    CommitType::Style,
    CommitType::Refactor,
    CommitType::Perf,
    CommitType::Build,
    CommitType::Ci,
    CommitType::Chore,
    CommitType::Config,
    CommitType::Deps,
];

impl CommitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Config => "config",
            Self::Deps => "deps",
            Self::Remove => "remove",
        }
    }

    pub fn info(&self) -> &'static TypeInfo {
        // Every variant has a row in COMMIT_TYPES.
        lookup(self.as_str()).unwrap_or(&COMMIT_TYPES[0])
    }

    pub fn gitmoji(&self) -> &'static str {
        self.info().gitmoji
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "refactor" => Ok(Self::Refactor),
            "perf" => Ok(Self::Perf),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "ci" => Ok(Self::Ci),
            "chore" => Ok(Self::Chore),
            "config" => Ok(Self::Config),
            "deps" => Ok(Self::Deps),
            "remove" => Ok(Self::Remove),
            _ => Err(format!("Unknown commit type: {}", s)),
        }
    }
}
