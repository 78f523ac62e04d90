use anyhow::Result;
use clap::Parser;

mod categorize;
mod changelog;
mod config;
mod context;
mod error;
mod format;
mod git;
mod output;
mod source;
mod ui;

use categorize::Categorizer;
use context::ReleaseContext;
use git::{GitHistory, History};

#[derive(clap::Parser)]
#[command(
    name = "release-notes",
    about = "Generate a markdown release body from a changelog or commit history"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Changelog file path (overrides configuration)")]
    changelog: Option<String>,

    #[arg(short, long, help = "Tag to document (overrides CI environment)")]
    tag: Option<String>,

    #[arg(short, long, help = "Repository identifier, e.g. owner/name")]
    repo: Option<String>,

    #[arg(long, help = "Write to stdout even when a CI output channel is set")]
    stdout: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-notes {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(path) = args.changelog {
        config.changelog_path = path;
    }

    // Resolve the release context from the CI environment
    let mut ctx = ReleaseContext::from_env();
    if let Some(tag) = args.tag {
        ctx.set_tag(tag);
    }
    if let Some(repo) = args.repo {
        ctx.repository = repo;
    }
    if args.stdout {
        ctx.output_path = None;
    }
    ui::display_status(&format!(
        "Generating release notes for tag '{}'",
        ctx.tag
    ));

    // Git history is optional: outside a repository the changelog and the
    // static fallback still work
    let history = match GitHistory::new() {
        Ok(history) => Some(history),
        Err(e) => {
            ui::display_status(&format!(
                "Not using git history: {}. Falling back to changelog only.",
                e
            ));
            None
        }
    };

    // Prefer the tagged commit's date for the heading when it resolves
    if let Some(history) = history.as_ref() {
        if let Ok(Some(date)) = history.tag_date(&ctx.tag) {
            ctx.set_date(date);
        }
    }

    // Select a source, categorize, render
    let entries = source::collect_entries(
        &ctx,
        &config,
        history.as_ref().map(|h| h as &dyn History),
    );
    ui::display_status(&format!("Collected {} entries", entries.len()));

    let categorizer = Categorizer::new(&config.keywords);
    let buckets = categorizer.bucket(&entries);
    let document = format::render(&ctx, &entries, &buckets, &config.changelog_url);

    // Deliver to the CI output channel or stdout
    if let Err(e) = output::emit(ctx.output_path.as_deref(), &document) {
        ui::display_error(&format!("Failed to write release notes: {}", e));
        std::process::exit(1);
    }

    match ctx.output_path {
        Some(ref path) => {
            ui::display_success(&format!("Release body appended to {}", path))
        }
        None => ui::display_success("Release body written to stdout"),
    }

    Ok(())
}
