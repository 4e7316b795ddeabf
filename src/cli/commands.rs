use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::indexer::{
    SessionIndex, build_session_index, find_projects, find_sessions, load_session_summaries,
};
use crate::models::{IndexItem, ToolStats};
use crate::parsers::parse_session_file;
use crate::search::search_projects_dir;
use crate::utils::{
    format_duration, format_project_name, format_timestamp, format_token_count, get_projects_dir,
    sanitize_for_terminal, truncate_chars,
};

/// Index prompts are cut further for one-line terminal output.
const INDEX_LINE_MAX_CHARS: usize = 100;

#[derive(Parser)]
#[command(name = "claude-session-export")]
#[command(version)]
#[command(about = "Browse, search and index exported Claude chat sessions", long_about = None)]
pub struct Cli {
    /// Directory holding per-project session files [default: ~/.claude/projects]
    #[arg(long, global = true, env = "CLAUDE_PROJECTS_DIR")]
    pub projects_dir: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the most recent sessions
    List {
        /// Maximum number of sessions to show
        #[arg(short, long, default_value_t = 30)]
        limit: usize,
    },
    /// List projects with their session counts
    Projects,
    /// Search all sessions for text
    Search {
        query: String,
        /// Maximum snippets shown per session
        #[arg(short, long, default_value_t = 3)]
        max_matches: usize,
    },
    /// Show statistics for one session file
    Stats { file: PathBuf },
    /// Print the chronological prompt/commit index of one session file
    Index {
        file: PathBuf,
        /// Repository to link commits to, instead of the one found in the session
        #[arg(long)]
        repo_url: Option<String>,
        /// Emit the index as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::List { limit }) => {
            list_sessions(&get_projects_dir(cli.projects_dir.as_deref())?, *limit)?;
        }
        Some(Commands::Projects) => {
            list_projects(&get_projects_dir(cli.projects_dir.as_deref())?)?;
        }
        Some(Commands::Search { query, max_matches }) => {
            search(&get_projects_dir(cli.projects_dir.as_deref())?, query, *max_matches)?;
        }
        Some(Commands::Stats { file }) => {
            show_stats(file)?;
        }
        Some(Commands::Index { file, repo_url, json }) => {
            show_index(file, repo_url.as_deref(), *json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn list_sessions(projects_dir: &Path, limit: usize) -> Result<()> {
    let sessions = load_session_summaries(find_sessions(projects_dir, Some(limit))?);
    if sessions.is_empty() {
        println!("No sessions found in {}", projects_dir.display());
        return Ok(());
    }

    for session in &sessions {
        let summary = session.summary.as_deref().unwrap_or("(no prompt)");
        println!(
            "{:<20}  {:<24}  {:>4} prompts  {}",
            format_timestamp(Some(session.last_active())),
            format_project_name(&session.project_name),
            session.user_message_count,
            sanitize_for_terminal(summary)
        );
    }

    Ok(())
}

fn list_projects(projects_dir: &Path) -> Result<()> {
    let projects = find_projects(projects_dir)?;
    if projects.is_empty() {
        println!("No projects found in {}", projects_dir.display());
        return Ok(());
    }

    for project in &projects {
        println!(
            "{:<32}  {:>4} sessions  last active {}",
            sanitize_for_terminal(&format_project_name(&project.name)),
            project.sessions.len(),
            format_timestamp(Some(project.modified.into()))
        );
    }

    Ok(())
}

fn search(projects_dir: &Path, query: &str, max_matches: usize) -> Result<()> {
    if query.trim().is_empty() {
        bail!("Search query must not be empty");
    }

    let results = search_projects_dir(projects_dir, query)?;
    if results.is_empty() {
        println!("No sessions matching \"{}\"", sanitize_for_terminal(query));
        return Ok(());
    }

    println!("Found {} session(s) matching \"{}\"", results.len(), sanitize_for_terminal(query));
    for result in &results {
        println!();
        println!(
            "{} / {}  ({})",
            format_project_name(&result.session.project_name),
            result.session.session_id,
            format_timestamp(Some(result.session.last_active()))
        );
        for m in result.matches.iter().take(max_matches) {
            println!("  [{}] {}", m.role.as_str(), sanitize_for_terminal(&m.snippet));
        }
        if result.matches.len() > max_matches {
            println!("  ... and {} more", result.matches.len() - max_matches);
        }
    }

    Ok(())
}

fn load_index(file: &Path, repo_url: Option<&str>) -> Result<SessionIndex> {
    let session = parse_session_file(file)
        .with_context(|| format!("Failed to parse session: {}", file.display()))?;
    build_session_index(&session, repo_url)
        .with_context(|| format!("Failed to index session: {}", file.display()))
}

fn show_stats(file: &Path) -> Result<()> {
    let index = load_index(file, None)?;
    let tools = index.items.iter().fold(ToolStats::default(), |mut acc, item| {
        if let IndexItem::Prompt { stats, .. } = item {
            acc.merge(stats);
        }
        acc
    });
    let meta = &index.metadata;

    println!("Session Statistics");
    println!("==================");
    println!("Prompts:    {}", index.total_prompts);
    println!("Messages:   {}", index.total_messages);
    println!("Tool calls: {}", index.total_tool_calls);
    println!(
        "  Bash: {}  Read: {}  Write: {}  Edit: {}",
        tools.bash_count, tools.read_count, tools.write_count, tools.edit_count
    );
    println!(
        "  Glob: {}  Grep: {}  Other: {}",
        tools.glob_count, tools.grep_count, tools.other_count
    );
    println!("Commits:    {}", index.total_commits);
    println!("Pages:      {}", index.total_pages);
    println!();

    if let Some(cwd) = &meta.cwd {
        println!("Directory:  {}", sanitize_for_terminal(cwd));
    }
    if let Some(branch) = &meta.git_branch {
        println!("Branch:     {}", sanitize_for_terminal(branch));
    }
    if let Some(version) = &meta.version {
        println!("Version:    {}", sanitize_for_terminal(version));
    }
    if !meta.models.is_empty() {
        println!("Models:     {}", sanitize_for_terminal(&meta.models.join(", ")));
    }
    if let Some(repo) = &index.repo_url {
        println!("Repository: {}", sanitize_for_terminal(repo));
    }
    println!(
        "Tokens:     {} in / {} out / {} cache",
        format_token_count(meta.total_input_tokens),
        format_token_count(meta.total_output_tokens),
        format_token_count(meta.total_cache_tokens)
    );
    if meta.start_time.is_some() {
        println!("Started:    {}", format_timestamp(meta.start_time));
        println!("Ended:      {}", format_timestamp(meta.end_time));
    }
    if let Some(span) = meta.total_span() {
        println!(
            "Duration:   {} ({} active)",
            format_duration(span),
            format_duration(meta.active_time)
        );
    }

    Ok(())
}

fn show_index(file: &Path, repo_url: Option<&str>, json: bool) -> Result<()> {
    let index = load_index(file, repo_url)?;

    if json {
        let out = serde_json::to_string_pretty(&index).context("Failed to serialize index")?;
        println!("{}", out);
        return Ok(());
    }

    for item in &index.items {
        match item {
            IndexItem::Prompt { timestamp, text, page_num, message_id, stats, .. } => {
                let line = truncate_chars(&text.replace('\n', " "), INDEX_LINE_MAX_CHARS);
                println!(
                    "{:<20}  p{} #{:<7} {} ({} tools)",
                    format_timestamp(*timestamp),
                    page_num,
                    message_id,
                    sanitize_for_terminal(&line),
                    stats.total()
                );
            }
            IndexItem::Commit { timestamp, hash, message, .. } => {
                let link = item.commit_url().map(|url| format!("  {}", url)).unwrap_or_default();
                println!(
                    "{:<20}  commit {} {}{}",
                    format_timestamp(*timestamp),
                    hash,
                    sanitize_for_terminal(message),
                    link
                );
            }
        }
    }

    Ok(())
}
