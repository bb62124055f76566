//! Archive projects on the remote instance.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use super::{Command, CommandArgs, CommandContext, CommandError};

/// Validated archive target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArchiveTarget {
    /// Archive one project by id.
    Id(i64),
    /// Archive every project listed in a JSON file.
    File(PathBuf),
}

impl ArchiveTarget {
    /// Parse a CLI argument: a purely numeric string is an id, an existing
    /// path is a file, anything else is rejected.
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        if let Ok(id) = raw.parse::<i64>() {
            return Ok(Self::Id(id));
        }
        let path = Path::new(raw);
        if path.is_file() {
            return Ok(Self::File(path.to_path_buf()));
        }
        Err(CommandError::InvalidArgument(format!(
            "{raw} is neither a project id nor an existing file"
        )))
    }
}

/// One entry of an archive file: `[{"project_id": 42}, ...]`.
#[derive(Debug, Deserialize)]
struct ArchiveEntry {
    project_id: i64,
}

/// Archive one project by id, or a list of projects from a JSON file.
pub struct ArchiveProjectCommand {
    ctx: CommandContext,
    target: ArchiveTarget,
}

impl ArchiveProjectCommand {
    pub fn new(ctx: CommandContext) -> Result<Self, CommandError> {
        match &ctx.args {
            CommandArgs::Archive(target) => {
                let target = match target {
                    super::ArchiveTargetArg::Id(id) => ArchiveTarget::Id(*id),
                    super::ArchiveTargetArg::File(path) => ArchiveTarget::File(path.clone()),
                };
                Ok(Self { ctx, target })
            }
            other => Err(CommandError::InvalidArgument(format!(
                "expected an archive target, got {other:?}"
            ))),
        }
    }

    /// The project ids to archive, in input order.
    fn project_ids(&self) -> Result<Vec<i64>, CommandError> {
        match &self.target {
            ArchiveTarget::Id(id) => Ok(vec![*id]),
            ArchiveTarget::File(path) => {
                let content = fs::read_to_string(path)?;
                let entries: Vec<ArchiveEntry> = serde_json::from_str(&content)?;
                Ok(entries.into_iter().map(|e| e.project_id).collect())
            }
        }
    }
}

#[async_trait]
impl Command for ArchiveProjectCommand {
    async fn execute(&self) -> Result<(), CommandError> {
        let ids = self.project_ids()?;

        let mut archived = 0usize;
        for id in ids {
            match self.ctx.gitlab.get_project_by_id(id).await? {
                Some(project) => {
                    self.ctx.gitlab.archive_project(&project).await?;
                    archived += 1;
                }
                None => {
                    error!("project {id} does not exist, skipping");
                }
            }
        }

        info!("{archived} projects have been archived");
        Ok(())
    }
}
