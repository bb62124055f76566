//! Name to command-factory resolution.

use std::collections::HashMap;

use super::archive_project::ArchiveProjectCommand;
use super::get_project::GetProjectCommand;
use super::get_projects::GetProjectsCommand;
use super::{Command, CommandContext, CommandError};

type CommandFactory = fn(CommandContext) -> Result<Box<dyn Command>, CommandError>;

/// Registry mapping command names to factories.
///
/// Built once at startup; there is no process-wide mutable state.
pub struct CommandRegistry {
    factories: HashMap<&'static str, CommandFactory>,
}

impl CommandRegistry {
    /// The registry with every command this tool ships.
    pub fn standard() -> Self {
        let mut factories: HashMap<&'static str, CommandFactory> = HashMap::new();
        factories.insert("scan-projects", |ctx| {
            Ok(Box::new(GetProjectsCommand::new(ctx)))
        });
        factories.insert("scan-project", |ctx| {
            Ok(Box::new(GetProjectCommand::new(ctx)?))
        });
        factories.insert("archive-project", |ctx| {
            Ok(Box::new(ArchiveProjectCommand::new(ctx)?))
        });
        Self { factories }
    }

    /// Instantiate the command registered under `name`.
    ///
    /// # Errors
    /// Returns `CommandError::UnknownCommand` for unregistered names.
    pub fn create(&self, name: &str, ctx: CommandContext) -> Result<Box<dyn Command>, CommandError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        factory(ctx)
    }

    /// Registered command names, for diagnostics.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
