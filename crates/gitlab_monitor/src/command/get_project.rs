//! Scan a single project, optionally with its commits.

use std::path::Path;

use async_trait::async_trait;
use tracing::{error, info};

use crate::dto::{CommitDto, ProjectDto};
use crate::gitlab::convert::commit_from_api;
use crate::printer::{CommitPrinter, PrettyPrint, ProjectPrinter};
use crate::repository::{CommitRepository, ProjectRepository, Repository};

use super::save::{save_dtos, SAVE_DIR};
use super::{Command, CommandArgs, CommandContext, CommandError};

/// Fetch one project by id, then save, print, or persist it.
pub struct GetProjectCommand {
    ctx: CommandContext,
    project_id: i64,
    with_commits: bool,
}

impl GetProjectCommand {
    pub fn new(ctx: CommandContext) -> Result<Self, CommandError> {
        match &ctx.args {
            CommandArgs::Project {
                project_id,
                with_commits,
            } => {
                let (project_id, with_commits) = (*project_id, *with_commits);
                Ok(Self {
                    ctx,
                    project_id,
                    with_commits,
                })
            }
            other => Err(CommandError::InvalidArgument(format!(
                "expected a project id, got {other:?}"
            ))),
        }
    }

    async fn handle_project(&self, project: &ProjectDto) -> Result<(), CommandError> {
        if let Some(name) = &self.ctx.options.save_in_file {
            let path = save_dtos(Path::new(SAVE_DIR), name, std::slice::from_ref(project))?;
            info!("project {} has been saved in {}", project.project_id, path.display());
        } else if self.ctx.options.no_db {
            ProjectPrinter.print_dto_list(std::slice::from_ref(project));
        } else {
            ProjectRepository::new(self.ctx.require_db()?)
                .create(project)
                .await?;
            info!(
                "project {} has been saved or updated in the database",
                project.project_id
            );
        }
        Ok(())
    }

    async fn fetch_commits(&self, project: &ProjectDto) -> Result<Vec<CommitDto>, CommandError> {
        let summaries = self.ctx.gitlab.get_project_commits(project).await?;

        let mut commits = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            let commit_id = summary
                .id
                .as_deref()
                .ok_or(crate::gitlab::GitLabError::MissingField("id"))?;
            let detail = self.ctx.gitlab.get_commit_details(project, commit_id).await?;
            commits.push(commit_from_api(summary, &detail)?);
        }
        Ok(commits)
    }

    async fn handle_commits(&self, commits: &[CommitDto]) -> Result<(), CommandError> {
        if let Some(name) = &self.ctx.options.save_in_file {
            let path = save_dtos(Path::new(SAVE_DIR), &format!("{name}_commits"), commits)?;
            info!("{} commits have been saved in {}", commits.len(), path.display());
        } else if self.ctx.options.no_db {
            CommitPrinter.print_dto_list(commits);
        } else {
            let repo = CommitRepository::new(self.ctx.require_db()?);
            for commit in commits {
                repo.create(commit).await?;
            }
            info!(
                "{} commits have been retrieved and saved or updated in the database",
                commits.len()
            );
        }
        Ok(())
    }
}

#[async_trait]
impl Command for GetProjectCommand {
    async fn execute(&self) -> Result<(), CommandError> {
        let Some(project) = self.ctx.gitlab.get_project_by_id(self.project_id).await? else {
            // A wrong id on the command line is a user mistake, not a fault
            error!("project {} does not exist, nothing to do", self.project_id);
            return Ok(());
        };

        self.handle_project(&project).await?;

        if self.with_commits {
            let commits = self.fetch_commits(&project).await?;
            self.handle_commits(&commits).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::command::GlobalOptions;
    use crate::db::connect_and_migrate;
    use crate::gitlab::GitLabClient;
    use crate::http::{HttpMethod, HttpResponse, MockTransport};

    use super::*;

    const BASE: &str = "https://gitlab.example.com";

    fn project_json(id: i64) -> String {
        serde_json::json!({
            "id": id,
            "name": format!("project-{id}"),
            "path_with_namespace": format!("group/project-{id}"),
            "visibility": "public",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z"
        })
        .to_string()
    }

    fn context(transport: &MockTransport, db: sea_orm::DatabaseConnection, args: CommandArgs) -> CommandContext {
        CommandContext {
            gitlab: GitLabClient::from_transport(Arc::new(transport.clone()), BASE, "glpat-test")
                .expect("client should build"),
            db: Some(db),
            options: GlobalOptions::default(),
            args,
        }
    }

    #[tokio::test]
    async fn persists_the_requested_project() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/api/v4/projects/42"),
            &project_json(42),
        );
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let command = GetProjectCommand::new(context(
            &transport,
            db.clone(),
            CommandArgs::Project {
                project_id: 42,
                with_commits: false,
            },
        ))
        .expect("args should match");
        command.execute().await.expect("command should succeed");

        let repo = ProjectRepository::new(&db);
        assert!(repo.get_by_id(&42).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn a_missing_project_is_not_a_failure() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            format!("{BASE}/api/v4/projects/9999"),
            HttpResponse {
                status: 404,
                body: b"{\"message\":\"404 Project Not Found\"}".to_vec(),
            },
        );
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let command = GetProjectCommand::new(context(
            &transport,
            db.clone(),
            CommandArgs::Project {
                project_id: 9999,
                with_commits: false,
            },
        ))
        .expect("args should match");

        command
            .execute()
            .await
            .expect("a 404 should not fail the command");
        assert!(ProjectRepository::new(&db)
            .get_by_id(&9999)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn with_commits_persists_each_commit_with_its_detail() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/api/v4/projects/42"),
            &project_json(42),
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/api/v4/projects/42/repository/commits?page=1&per_page=100"),
            r#"[{"id": "abc123", "title": "Fix pagination"}]"#,
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/api/v4/projects/42/repository/commits/abc123"),
            r#"{"project_id": 42, "authored_date": "2024-03-05T10:15:30Z", "author_name": "Jane Doe"}"#,
        );
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let command = GetProjectCommand::new(context(
            &transport,
            db.clone(),
            CommandArgs::Project {
                project_id: 42,
                with_commits: true,
            },
        ))
        .expect("args should match");
        command.execute().await.expect("command should succeed");

        let stored = CommitRepository::new(&db)
            .get_by_id(&"abc123".to_string())
            .await
            .unwrap()
            .expect("commit should be stored");
        assert_eq!(stored.message, "Fix pagination");
        assert_eq!(stored.author, "Jane Doe");
        assert_eq!(stored.project_id, 42);
    }

    #[tokio::test]
    async fn rejects_mismatched_arguments() {
        let transport = MockTransport::new();
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let err = GetProjectCommand::new(context(&transport, db, CommandArgs::None))
            .err()
            .expect("argument mismatch should error");
        assert!(matches!(err, CommandError::InvalidArgument(_)));
    }
}
