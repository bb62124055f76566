//! Initial migration to create the project and commit tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        self.create_project(manager).await?;
        self.create_commit(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commit::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;
        Ok(())
    }
}

impl Migration {
    async fn create_project(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Project::ProjectId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Project::Name).string().not_null())
                    .col(ColumnDef::new(Project::Path).string().not_null())
                    .col(ColumnDef::new(Project::Description).text().null())
                    .col(ColumnDef::new(Project::Release).string().null())
                    .col(ColumnDef::new(Project::Visibility).string().not_null())
                    .col(ColumnDef::new(Project::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Project::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_commit(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commit::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Commit::CommitId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Commit::ProjectId).big_integer().not_null())
                    .col(ColumnDef::new(Commit::Message).text().not_null())
                    .col(ColumnDef::new(Commit::Date).timestamp().not_null())
                    .col(ColumnDef::new(Commit::Author).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commit_project")
                            .from(Commit::Table, Commit::ProjectId)
                            .to(Project::Table, Project::ProjectId),
                    )
                    .to_owned(),
            )
            .await?;

        // Index on project_id for per-project commit lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_commit_project_id")
                    .table(Commit::Table)
                    .col(Commit::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
#[sea_orm(iden = "project")]
enum Project {
    Table,
    ProjectId,
    Name,
    Path,
    Description,
    Release,
    Visibility,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "commit")]
enum Commit {
    Table,
    CommitId,
    ProjectId,
    Message,
    Date,
    Author,
}
