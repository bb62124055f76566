//! Commit entity - one row per commit, linked to its project.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Commit model, keyed by the commit SHA.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commit")]
pub struct Model {
    /// Commit SHA (natural key).
    #[sea_orm(primary_key, auto_increment = false)]
    pub commit_id: String,

    /// GitLab project this commit belongs to.
    pub project_id: i64,

    /// Commit title.
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// Authored date.
    pub date: DateTimeUtc,
    /// Author name.
    pub author: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A commit belongs to a project.
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::ProjectId"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
