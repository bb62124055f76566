//! Command layer: one object per CLI action.
//!
//! The CLI resolves a command name through the [`CommandRegistry`], hands
//! the factory a [`CommandContext`] (gateway, optional database, global
//! options, parsed arguments), and executes the resulting command.

pub mod archive_project;
pub mod get_project;
pub mod get_projects;
pub mod registry;
pub mod save;

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;
use thiserror::Error;

use crate::gitlab::{GitLabClient, GitLabError};
use crate::repository::RepositoryError;

pub use archive_project::{ArchiveProjectCommand, ArchiveTarget};
pub use get_project::GetProjectCommand;
pub use get_projects::GetProjectsCommand;
pub use registry::CommandRegistry;

/// Options every command honors.
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    /// Print records instead of persisting them.
    pub no_db: bool,
    /// Write records as JSON under `saved_datas/projects/` instead of
    /// persisting them. Takes precedence over `no_db`.
    pub save_in_file: Option<String>,
    /// Keep only projects last updated strictly before this cutoff.
    pub unused_since: Option<NaiveDateTime>,
}

/// Errors that can occur in the command layer.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    GitLab(#[from] GitLabError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("This command persists to the database but no database is configured")]
    MissingDatabase,
}

/// Arguments parsed by the CLI, dispatched on by the command factories.
#[derive(Clone, Debug)]
pub enum CommandArgs {
    /// No arguments.
    None,
    /// A project id plus whether commits should be fetched too.
    Project { project_id: i64, with_commits: bool },
    /// An archive target (single id or a JSON file of ids).
    Archive(ArchiveTargetArg),
}

/// Unvalidated archive target as it comes from the CLI.
#[derive(Clone, Debug)]
pub enum ArchiveTargetArg {
    Id(i64),
    File(PathBuf),
}

/// Everything a command needs to run.
pub struct CommandContext {
    pub gitlab: GitLabClient,
    pub db: Option<DatabaseConnection>,
    pub options: GlobalOptions,
    pub args: CommandArgs,
}

impl CommandContext {
    /// The database connection, or an error for persisting commands.
    pub fn require_db(&self) -> Result<&DatabaseConnection, CommandError> {
        self.db.as_ref().ok_or(CommandError::MissingDatabase)
    }
}

/// A runnable CLI action.
#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(&self) -> Result<(), CommandError>;
}
