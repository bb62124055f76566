//! Project repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, Unchanged};
use tracing::debug;

use crate::dto::ProjectDto;
use crate::entity::prelude::{Project, ProjectActiveModel};

use super::convert::{project_from_model, project_to_active_model};
use super::errors::{RepositoryError, Result};
use super::Repository;

/// Repository for the `project` table.
pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn validate(dto: &ProjectDto) -> Result<()> {
        if dto.project_id <= 0 {
            return Err(RepositoryError::invalid_input(format!(
                "project_id must be positive, got {}",
                dto.project_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for ProjectRepository<'_> {
    type Dto = ProjectDto;
    type Id = i64;

    async fn get_by_id(&self, id: &i64) -> Result<Option<ProjectDto>> {
        let found = Project::find_by_id(*id).one(self.db).await?;
        Ok(found.as_ref().map(project_from_model))
    }

    async fn create(&self, dto: &ProjectDto) -> Result<()> {
        Self::validate(dto)?;

        if Project::find_by_id(dto.project_id)
            .one(self.db)
            .await?
            .is_some()
        {
            debug!("project {} already stored, updating", dto.project_id);
            return self.update(dto).await;
        }

        project_to_active_model(dto).insert(self.db).await?;
        Ok(())
    }

    async fn update(&self, dto: &ProjectDto) -> Result<()> {
        Self::validate(dto)?;

        let existing = Project::find_by_id(dto.project_id)
            .one(self.db)
            .await?
            .ok_or_else(|| RepositoryError::project_not_found(dto.project_id))?;

        // created_at is immutable once stored
        let model = ProjectActiveModel {
            project_id: Unchanged(existing.project_id),
            name: Set(dto.name.clone()),
            path: Set(dto.path.clone()),
            description: Set(dto.description.clone()),
            release: Set(dto.release.clone()),
            visibility: Set(dto.visibility),
            created_at: Unchanged(existing.created_at),
            updated_at: Set(dto.updated_at),
        };
        model.update(self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_and_migrate;
    use crate::entity::visibility::Visibility;
    use chrono::{TimeZone, Utc};

    fn dto(project_id: i64, name: &str) -> ProjectDto {
        ProjectDto {
            project_id,
            name: name.to_string(),
            path: format!("group/{name}"),
            description: None,
            release: None,
            visibility: Visibility::Public,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_rejects_non_positive_project_id() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        let repo = ProjectRepository::new(&db);

        let err = repo.create(&dto(0, "zero")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidInput { .. }));

        // Nothing was written
        assert_eq!(repo.get_by_id(&0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn create_twice_is_an_upsert() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        let repo = ProjectRepository::new(&db);

        repo.create(&dto(42, "monitor")).await.unwrap();

        let mut second = dto(42, "monitor-renamed");
        second.updated_at = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        repo.create(&second).await.unwrap();

        let stored = repo.get_by_id(&42).await.unwrap().unwrap();
        assert_eq!(stored.name, "monitor-renamed");
        assert_eq!(stored.updated_at, second.updated_at);
        // created_at keeps the first value
        assert_eq!(stored.created_at, dto(42, "monitor").created_at);
    }

    #[tokio::test]
    async fn update_errors_when_the_row_is_missing() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        let repo = ProjectRepository::new(&db);

        let err = repo.update(&dto(42, "monitor")).await.unwrap_err();
        match err {
            RepositoryError::NotFound { context } => assert!(context.contains("42")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
