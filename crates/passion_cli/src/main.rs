//! Command-line shell over `passion_core`.
//!
//! # Responsibility
//! - Drive catalog browsing, lookup and apply from a terminal.
//! - Render either human-readable text or JSON (`--json`).
//!
//! # Invariants
//! - All domain decisions stay in core; this binary only parses and prints.
//! - Failures exit with status 1 and a single `error:` line on stderr.

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::info;
use passion_core::{
    format_last_message_time, AppConfig, AppState, FilterCriteria, Project,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Browse passion projects and apply to open roles.
#[derive(Parser, Debug)]
#[command(name = "passion", author, version, about, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log level (`trace|debug|info|warn|error`); overrides `PASSION_LOG_LEVEL`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; overrides `PASSION_LOG_DIR`.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// JSON catalog to load instead of the built-in seed.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects matching the given filters.
    List {
        /// Case-insensitive substring of the address.
        #[arg(long, default_value = "")]
        location: String,
        /// Tag to match; repeat for more (any may match).
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Only remote-capable projects.
        #[arg(long)]
        remote: bool,
        /// Timeline status (`planning|active|completed`).
        #[arg(long, default_value = "")]
        status: String,
    },
    /// Show one project, ignoring filters.
    Show { id: String },
    /// Apply to an open role on a project.
    Apply { id: String, role: String },
    /// Show the demo user profile.
    Profile,
    /// List demo chat rooms.
    ChatRooms,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli);
    config.init_logging().map_err(|err| err.to_string())?;
    let mut state = AppState::from_config(&config).map_err(|err| err.to_string())?;
    info!("event=cli_start module=cli status=ok command={:?}", cli.command);

    match cli.command {
        Command::List {
            location,
            tags,
            remote,
            status,
        } => {
            state.set_filters(FilterCriteria {
                location,
                tags,
                remote,
                timeline: status,
            });
            let projects = state.filtered_projects();
            if cli.json {
                return print_json(&projects);
            }
            if projects.is_empty() {
                println!("No projects found.");
            }
            for project in projects {
                println!("{}", project_line(project));
            }
        }
        Command::Show { id } => {
            let project = state
                .project_by_id(&id)
                .ok_or_else(|| format!("project not found: {id}"))?;
            if cli.json {
                return print_json(project);
            }
            print_project(project);
        }
        Command::Apply { id, role } => {
            let notification = state
                .apply_to_project(&id, &role)
                .map_err(|err| err.to_string())?;
            if cli.json {
                return print_json(&notification);
            }
            println!("{}", notification.message);
        }
        Command::Profile => {
            let profile = state.profile().profile();
            if cli.json {
                return print_json(profile);
            }
            println!("{} ({})", profile.name, profile.location);
            println!("{}", profile.bio);
            println!(
                "joined={} created={} connections={} badges={}",
                profile.stats.projects_joined,
                profile.stats.projects_created,
                profile.stats.connections,
                profile.stats.badges
            );
            println!("skills: {}", profile.skills.join(", "));
        }
        Command::ChatRooms => {
            let rooms = state.chat().rooms();
            if cli.json {
                return print_json(rooms);
            }
            let now = Utc::now();
            for room in rooms {
                println!(
                    "[{}] {:<24} {:>8}  unread={}  {}",
                    room.id,
                    room.name,
                    format_last_message_time(room.last_message_time, now),
                    room.unread_count,
                    room.last_message
                );
            }
        }
    }
    Ok(())
}

/// Environment config with command-line overrides applied.
fn resolve_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }
    config
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}

fn project_line(project: &Project) -> String {
    let remote = if project.is_remote { " remote" } else { "" };
    format!(
        "[{}] {} | {} | {}{} | {}",
        project.id,
        project.title,
        project.location.address,
        project.timeline.status.label(),
        remote,
        project.tags.join(", ")
    )
}

fn print_project(project: &Project) {
    println!("{}", project_line(project));
    println!("{}", project.description);
    println!(
        "founder: {} ({})",
        project.founder.name, project.founder.bio
    );
    let end = project
        .timeline
        .end_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "open".to_string());
    println!("timeline: {} .. {}", project.timeline.start_date, end);
    println!("views={} applications={}", project.views, project.applications);
    for role in &project.roles {
        let marker = if role.is_open { "open" } else { "filled" };
        println!("  - {} [{}]: {}", role.title, marker, role.skills.join(", "));
    }
}
