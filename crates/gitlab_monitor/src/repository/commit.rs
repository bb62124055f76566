//! Commit repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, Unchanged};
use tracing::debug;

use crate::dto::CommitDto;
use crate::entity::prelude::{Commit, CommitActiveModel};

use super::convert::{commit_from_model, commit_to_active_model};
use super::errors::{RepositoryError, Result};
use super::Repository;

/// Repository for the `commit` table.
pub struct CommitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn validate(dto: &CommitDto) -> Result<()> {
        if dto.commit_id.is_empty() {
            return Err(RepositoryError::invalid_input("commit_id must not be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for CommitRepository<'_> {
    type Dto = CommitDto;
    type Id = String;

    async fn get_by_id(&self, id: &String) -> Result<Option<CommitDto>> {
        let found = Commit::find_by_id(id.clone()).one(self.db).await?;
        Ok(found.as_ref().map(commit_from_model))
    }

    async fn create(&self, dto: &CommitDto) -> Result<()> {
        Self::validate(dto)?;

        if Commit::find_by_id(dto.commit_id.clone())
            .one(self.db)
            .await?
            .is_some()
        {
            debug!("commit {} already stored, updating", dto.commit_id);
            return self.update(dto).await;
        }

        commit_to_active_model(dto).insert(self.db).await?;
        Ok(())
    }

    async fn update(&self, dto: &CommitDto) -> Result<()> {
        Self::validate(dto)?;

        let existing = Commit::find_by_id(dto.commit_id.clone())
            .one(self.db)
            .await?
            .ok_or_else(|| RepositoryError::commit_not_found(&dto.commit_id))?;

        let model = CommitActiveModel {
            commit_id: Unchanged(existing.commit_id),
            project_id: Set(dto.project_id),
            message: Set(dto.message.clone()),
            date: Set(dto.date),
            author: Set(dto.author.clone()),
        };
        model.update(self.db).await?;
        Ok(())
    }
}
