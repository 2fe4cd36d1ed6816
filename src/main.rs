//! satucommit - CLI entry point.

use anyhow::{Context, Result, bail};
use clap::{Args, CommandFactory, Parser, Subcommand};
use console::style;
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;

use satucommit::commit::{
    COMMIT_TYPES, COMMON_SCOPES, ChangeSet, DEFAULT_DESCRIPTION, classify, format_commit_message,
    generate_commit_message, generate_grouped_commits, group_changes, suggest,
};
use satucommit::error::GitError;
use satucommit::git::{
    StagedChangeLine, SystemGit, create_commit, is_repository, staged_changes_or_empty,
};

/// Generate semantic git commits with gitmoji from staged changes.
#[derive(Parser, Debug)]
#[command(name = "satucommit")]
#[command(about = "Generate semantic git commits with gitmoji from staged changes")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a semantic commit message based on staged changes
    Generate(GenerateArgs),

    /// Show available commit types
    Types,

    /// Show common commit scopes
    Scopes,

    /// Interactively build a commit message
    #[command(alias = "i")]
    Interactive,

    /// Quick commit with an auto-generated message
    #[command(alias = "q")]
    Quick {
        /// Commit description
        #[arg(short, long, default_value = DEFAULT_DESCRIPTION)]
        description: String,

        /// Show the commit message without committing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the classification of the staged changes
    Analyze {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Commit type (feat, fix, docs, etc.)
    #[arg(short = 't', long = "type")]
    commit_type: Option<String>,

    /// Commit scope
    #[arg(short, long)]
    scope: Option<String>,

    /// Commit description
    #[arg(short, long)]
    description: Option<String>,

    /// Commit body
    #[arg(short, long)]
    body: Option<String>,

    /// Commit footer
    #[arg(short, long)]
    footer: Option<String>,

    /// Mark as breaking change
    #[arg(long)]
    breaking: bool,

    /// Group changes and generate multiple commits
    #[arg(short, long)]
    group: bool,

    /// Show the commit message without committing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help().context("Failed to print help")?;
        return Ok(());
    };

    let git = SystemGit::from_env();

    match command {
        Command::Generate(args) => run_generate(&git, args),
        Command::Types => {
            print_types();
            Ok(())
        }
        Command::Scopes => {
            print_scopes();
            Ok(())
        }
        Command::Interactive => run_interactive(&git),
        Command::Quick {
            description,
            dry_run,
        } => run_quick(&git, &description, dry_run),
        Command::Analyze { json } => run_analyze(&git, json),
    }
}

/// Console logging to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Check the repository and collect staged lines.
///
/// Returns `Ok(None)` after telling the user how to stage when nothing is staged.
fn collect_staged(git: &SystemGit) -> Result<Option<Vec<StagedChangeLine>>> {
    git.ensure_installed()?;
    if !is_repository(git) {
        return Err(GitError::NotARepository.into());
    }

    let lines = staged_changes_or_empty(git);
    if lines.is_empty() {
        println!(
            "{}",
            style("No staged changes found. Please stage your changes first using:").yellow()
        );
        println!("{}", style("  git add <files>").cyan());
        println!("{}", style("  git add .").cyan());
        return Ok(None);
    }

    Ok(Some(lines))
}

fn print_rule() {
    println!("{}", style("─".repeat(50)).dim());
}

fn print_counts(changes: &ChangeSet, include_renamed: bool) {
    println!(
        "{}",
        style(format!("✓ Added: {}", changes.added.len())).green()
    );
    println!(
        "{}",
        style(format!("✓ Modified: {}", changes.modified.len())).yellow()
    );
    println!(
        "{}",
        style(format!("✓ Deleted: {}", changes.deleted.len())).red()
    );
    if include_renamed {
        println!(
            "{}",
            style(format!("✓ Renamed: {}", changes.renamed.len())).cyan()
        );
    }
    if !changes.unclassified.is_empty() {
        println!(
            "{}",
            style(format!("✓ Other: {}", changes.unclassified.len())).dim()
        );
    }
    print_rule();
}

/// Commit `message` unless this is a dry run.
fn commit_or_preview(git: &SystemGit, message: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!(
            "{}",
            style("\n🔍 Dry run mode - no commit was made").yellow()
        );
        return Ok(());
    }

    if !create_commit(git, message) {
        bail!("Commit failed");
    }
    println!("{}", style("\n✅ Commit successful!").green());
    Ok(())
}

fn run_generate(git: &SystemGit, args: GenerateArgs) -> Result<()> {
    let Some(lines) = collect_staged(git)? else {
        return Ok(());
    };

    println!("{}", style("📊 Analyzing staged changes...").blue());
    print_rule();

    let changes = classify(&lines);
    print_counts(&changes, true);

    if args.group {
        println!("{}", style("\n🔄 Grouping changes by similarity...").blue());
        let plans = generate_grouped_commits(&group_changes(&lines));

        if plans.is_empty() {
            println!("{}", style("No changes to commit").yellow());
            return Ok(());
        }

        println!(
            "{}",
            style(format!(
                "\n✓ Generated {} commit message{}:\n",
                plans.len(),
                if plans.len() > 1 { "s" } else { "" }
            ))
            .green()
        );

        for (index, plan) in plans.iter().enumerate() {
            println!("{}", style(format!("Commit {}:", index + 1)).cyan());
            println!("  {}", plan.message(""));
            println!("{}", style(format!("  Files: {}", plan.files.len())).dim());
        }

        if !args.dry_run {
            println!();
            print_rule();
            println!(
                "{}",
                style("⚠️  Grouped commits require manual execution.").yellow()
            );
            println!(
                "{}",
                style("Please review and commit each group separately.").cyan()
            );
        }
        return Ok(());
    }

    let message = single_message(&args, &changes);
    println!("{}", style("\n✓ Generated commit message:\n").green());
    println!("{}", message);
    println!();
    print_rule();

    commit_or_preview(git, &message, args.dry_run)
}

/// Message for a non-grouped `generate`.
///
/// An explicit type needs a non-empty description; otherwise the type is
/// inferred and an empty description means the default one.
fn single_message(args: &GenerateArgs, changes: &ChangeSet) -> String {
    let description = args.description.as_deref().filter(|d| !d.is_empty());
    match (args.commit_type.as_deref(), description) {
        (Some(commit_type), Some(description)) => format_commit_message(
            commit_type,
            args.scope.as_deref().unwrap_or_default(),
            description,
            args.body.as_deref().unwrap_or_default(),
            args.footer.as_deref().unwrap_or_default(),
            args.breaking,
        ),
        _ => generate_commit_message(
            changes,
            description.unwrap_or(DEFAULT_DESCRIPTION),
            args.breaking,
        ),
    }
}

fn print_types() {
    println!("{}", style("📋 Available Commit Types:\n").blue());
    for info in COMMIT_TYPES {
        println!(
            "{}{}",
            style(format!("{} {:<15}", info.gitmoji, info.name)).cyan(),
            style(format!(" - {}", info.description)).dim()
        );
    }
}

fn print_scopes() {
    println!("{}", style("📋 Common Commit Scopes:\n").blue());
    for scope in COMMON_SCOPES {
        println!("{}", style(format!("  • {}", scope)).cyan());
    }
}

fn run_interactive(git: &SystemGit) -> Result<()> {
    println!("{}", style("🎯 Interactive Commit Builder\n").blue());
    print_rule();

    let Some(lines) = collect_staged(git)? else {
        return Ok(());
    };

    let changes = classify(&lines);
    print_counts(&changes, false);

    let suggested = suggest(&changes).commit_type;
    println!(
        "{}",
        style(format!(
            "\n📝 Suggested type: {} ({})",
            style(suggested).cyan(),
            suggested.description()
        ))
        .blue()
    );

    let commit_type: String = Input::new()
        .with_prompt("Commit type (feat, fix, docs, etc.)")
        .default(suggested.to_string())
        .interact_text()
        .context("Failed to read commit type")?;
    let scope = prompt_optional("Scope (optional)")?;
    let description: String = Input::new()
        .with_prompt("Description")
        .interact_text()
        .context("Failed to read description")?;
    let breaking = Confirm::new()
        .with_prompt("Breaking change?")
        .default(false)
        .interact()
        .context("Failed to read breaking change answer")?;
    let body = prompt_optional("Body (optional, press Enter to skip)")?;
    let footer = prompt_optional("Footer (optional, press Enter to skip)")?;

    let message = format_commit_message(
        &commit_type,
        &scope,
        &description,
        &body,
        &footer,
        breaking,
    );

    println!();
    print_rule();
    println!("{}", style("\n✓ Generated commit message:\n").green());
    println!("{}", message);
    println!();
    print_rule();

    let confirmed = Confirm::new()
        .with_prompt("Commit with this message?")
        .default(true)
        .interact()
        .context("Failed to read confirmation")?;

    if !confirmed {
        println!("{}", style("\n⚠️  Commit cancelled").yellow());
        return Ok(());
    }

    commit_or_preview(git, &message, false)
}

fn prompt_optional(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read '{}'", prompt))
}

fn run_quick(git: &SystemGit, description: &str, dry_run: bool) -> Result<()> {
    let Some(lines) = collect_staged(git)? else {
        return Ok(());
    };

    let changes = classify(&lines);
    let message = generate_commit_message(&changes, description, false);

    println!("{}", style("✓ Generated commit message:\n").green());
    println!("{}", message);
    println!();
    print_rule();

    commit_or_preview(git, &message, dry_run)
}

fn run_analyze(git: &SystemGit, json: bool) -> Result<()> {
    let Some(lines) = collect_staged(git)? else {
        return Ok(());
    };

    let changes = classify(&lines);
    let suggestion = suggest(&changes);

    if json {
        let report = serde_json::json!({
            "changes": changes,
            "suggestion": suggestion,
            "groups": generate_grouped_commits(&group_changes(&lines)),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize analysis")?
        );
        return Ok(());
    }

    print_counts(&changes, true);
    let types: Vec<&str> = changes.types.iter().map(|t| t.as_str()).collect();
    println!("Types:  {}", display_list(&types));
    println!("Scopes: {}", display_list(&changes.scopes));
    println!(
        "Suggestion: {} {}{}: {}",
        suggestion.commit_type.gitmoji(),
        suggestion.commit_type,
        suggestion
            .scope
            .as_ref()
            .map(|s| format!("({})", s))
            .unwrap_or_default(),
        suggestion.description
    );
    Ok(())
}

fn display_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
    }
}
