//! Scan every project visible to the token.

use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::dto::ProjectDto;
use crate::printer::{PrettyPrint, ProjectPrinter};
use crate::repository::{ProjectRepository, Repository};

use super::save::{save_dtos, SAVE_DIR};
use super::{Command, CommandContext, CommandError};

/// Fetch all projects, then save, print, or persist them.
pub struct GetProjectsCommand {
    ctx: CommandContext,
}

impl GetProjectsCommand {
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Command for GetProjectsCommand {
    async fn execute(&self) -> Result<(), CommandError> {
        let mut projects = self.ctx.gitlab.scan_projects().await?;

        if let Some(cutoff) = self.ctx.options.unused_since {
            projects = filter_unused_since(projects, cutoff);
            info!(
                "{} projects have not been updated since {cutoff}",
                projects.len()
            );
        }

        if let Some(name) = &self.ctx.options.save_in_file {
            let path = save_dtos(Path::new(SAVE_DIR), name, &projects)?;
            info!("{} projects have been saved in {}", projects.len(), path.display());
        } else if self.ctx.options.no_db {
            ProjectPrinter.print_dto_list(&projects);
        } else {
            let repo = ProjectRepository::new(self.ctx.require_db()?);
            for project in &projects {
                repo.create(project).await?;
            }
            info!(
                "{} projects have been retrieved and saved or updated in the database",
                projects.len()
            );
        }

        Ok(())
    }
}

/// Keep projects last updated strictly before the cutoff.
fn filter_unused_since(
    projects: Vec<ProjectDto>,
    cutoff: chrono::NaiveDateTime,
) -> Vec<ProjectDto> {
    projects
        .into_iter()
        .filter(|p| p.updated_at.naive_utc() < cutoff)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use crate::command::{CommandArgs, GlobalOptions};
    use crate::db::connect_and_migrate;
    use crate::entity::visibility::Visibility;
    use crate::gitlab::GitLabClient;
    use crate::http::{HttpMethod, MockTransport};
    use crate::repository::{ProjectRepository, Repository};

    use super::*;

    const BASE: &str = "https://gitlab.example.com";

    fn project_json(id: i64, updated_at: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": format!("project-{id}"),
            "path_with_namespace": format!("group/project-{id}"),
            "description": null,
            "releases_access_level": "enabled",
            "visibility": "public",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": updated_at
        })
    }

    fn gitlab_with_two_projects() -> (MockTransport, GitLabClient) {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/api/v4/projects?page=1&per_page=100"),
            &serde_json::to_string(&vec![
                project_json(1, "2024-02-02T00:00:00Z"),
                project_json(2, "2024-04-02T00:00:00Z"),
            ])
            .unwrap(),
        );
        let gitlab = GitLabClient::from_transport(Arc::new(transport.clone()), BASE, "glpat-test")
            .expect("client should build");
        (transport, gitlab)
    }

    #[tokio::test]
    async fn scan_persists_every_project() {
        let (_, gitlab) = gitlab_with_two_projects();
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let command = GetProjectsCommand::new(CommandContext {
            gitlab,
            db: Some(db.clone()),
            options: GlobalOptions::default(),
            args: CommandArgs::None,
        });
        command.execute().await.expect("scan should succeed");

        let repo = ProjectRepository::new(&db);
        assert!(repo.get_by_id(&1).await.unwrap().is_some());
        assert!(repo.get_by_id(&2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unused_since_keeps_only_stale_projects() {
        let (_, gitlab) = gitlab_with_two_projects();
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let cutoff = Utc
            .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
            .unwrap()
            .naive_utc();
        let command = GetProjectsCommand::new(CommandContext {
            gitlab,
            db: Some(db.clone()),
            options: GlobalOptions {
                unused_since: Some(cutoff),
                ..Default::default()
            },
            args: CommandArgs::None,
        });
        command.execute().await.expect("scan should succeed");

        let repo = ProjectRepository::new(&db);
        assert!(repo.get_by_id(&1).await.unwrap().is_some());
        assert!(repo.get_by_id(&2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn persisting_without_a_database_is_an_error() {
        let (_, gitlab) = gitlab_with_two_projects();

        let command = GetProjectsCommand::new(CommandContext {
            gitlab,
            db: None,
            options: GlobalOptions::default(),
            args: CommandArgs::None,
        });

        let err = command.execute().await.expect_err("no db should error");
        assert!(matches!(err, CommandError::MissingDatabase));
    }

    #[test]
    fn filter_is_strict() {
        let cutoff = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .unwrap()
            .naive_utc();
        let at_cutoff = ProjectDto {
            project_id: 1,
            name: "boundary".to_string(),
            path: "group/boundary".to_string(),
            description: None,
            release: None,
            visibility: Visibility::Public,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };

        assert!(filter_unused_since(vec![at_cutoff], cutoff).is_empty());
    }
}
