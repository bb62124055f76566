//! gitlab-monitor CLI - poll a GitLab instance into a database.

mod config;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

use gitlab_monitor::command::{
    ArchiveTargetArg, CommandArgs, CommandContext, CommandRegistry, GlobalOptions,
};
use gitlab_monitor::command::ArchiveTarget;
use gitlab_monitor::{connect_and_migrate, GitLabClient};

#[derive(Parser)]
#[command(name = "gitlab-monitor")]
#[command(version)]
#[command(about = "Polls a GitLab instance and stores project metadata in a database")]
#[command(after_long_help = r#"ENVIRONMENT VARIABLES
    GITLAB_URL              Base URL of the GitLab instance (required)
    GITLAB_PRIVATE_TOKEN    GitLab API token (required)
    SSL_CERT_PATH           PEM root certificate for self-signed instances
    DATABASE_URL            Full database connection string
    DB_USER, DB_PASSWORD, DB_HOST, DB_PORT, DB_NAME
                            Postgres connection parts (used when DATABASE_URL is unset)
"#)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every project visible to the token
    ScanProjects {
        /// Print projects instead of persisting them
        #[arg(long = "no-database")]
        no_database: bool,

        /// Keep only projects not updated since this datetime
        /// (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long, value_parser = parse_cutoff)]
        unused_since: Option<NaiveDateTime>,

        /// Write projects as JSON under saved_datas/projects/ with this name
        #[arg(long)]
        save_in_file: Option<String>,
    },
    /// Fetch a single project by id
    ScanProject {
        /// GitLab project id
        project_id: i64,

        /// Also fetch the project's commits
        #[arg(long)]
        commit: bool,

        /// Print instead of persisting
        #[arg(long = "no-database")]
        no_database: bool,

        /// Write records as JSON under saved_datas/projects/ with this name
        #[arg(long)]
        save_in_file: Option<String>,
    },
    /// Archive a project, or every project listed in a JSON file
    ArchiveProject {
        /// Project id, or path to a JSON file of {"project_id": N} entries
        #[arg(value_parser = parse_archive_target)]
        project: ArchiveTargetArg,
    },
}

/// Accept `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS`.
fn parse_cutoff(raw: &str) -> Result<NaiveDateTime, String> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(format!(
        "{raw} is not a valid datetime (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)"
    ))
}

/// Validate the archive argument up front: numeric id or existing file.
fn parse_archive_target(raw: &str) -> Result<ArchiveTargetArg, String> {
    match ArchiveTarget::parse(raw).map_err(|e| e.to_string())? {
        ArchiveTarget::Id(id) => Ok(ArchiveTargetArg::Id(id)),
        ArchiveTarget::File(path) => Ok(ArchiveTargetArg::File(path)),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "gitlab_monitor=debug,gitlab_monitor_cli=debug"
    } else {
        "gitlab_monitor=info,gitlab_monitor_cli=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(Term::stdout().is_term())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::from_env()?;
    let gitlab = GitLabClient::new(
        &config.gitlab_url,
        &config.private_token,
        config.ssl_cert_path.as_deref(),
    )?;

    let (name, options, args) = match command {
        Commands::ScanProjects {
            no_database,
            unused_since,
            save_in_file,
        } => (
            "scan-projects",
            GlobalOptions {
                no_db: no_database,
                save_in_file,
                unused_since,
            },
            CommandArgs::None,
        ),
        Commands::ScanProject {
            project_id,
            commit,
            no_database,
            save_in_file,
        } => (
            "scan-project",
            GlobalOptions {
                no_db: no_database,
                save_in_file,
                unused_since: None,
            },
            CommandArgs::Project {
                project_id,
                with_commits: commit,
            },
        ),
        Commands::ArchiveProject { project } => (
            "archive-project",
            GlobalOptions::default(),
            CommandArgs::Archive(project),
        ),
    };

    // Only connect (and migrate) when the command will persist
    let persists = name != "archive-project" && !options.no_db && options.save_in_file.is_none();
    let db = if persists {
        Some(connect_and_migrate(&config::database_url()?).await?)
    } else {
        None
    };

    let registry = CommandRegistry::standard();
    let command = registry.create(name, CommandContext {
        gitlab,
        db,
        options,
        args,
    })?;
    command.execute().await?;

    Ok(())
}
