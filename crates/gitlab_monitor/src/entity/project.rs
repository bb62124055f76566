//! Project entity - one row per GitLab project.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entity::visibility::Visibility;

/// Project model, keyed by the GitLab project id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    /// GitLab project id (natural key, never generated locally).
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: i64,

    /// Project name.
    pub name: String,
    /// Full path with namespace (e.g., `group/subgroup/project`).
    pub path: String,
    /// Project description.
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Releases access level (enabled, disabled, private).
    pub release: Option<String>,
    /// Visibility level (public, internal, private).
    pub visibility: Visibility,

    /// When the project was created on the instance.
    pub created_at: DateTimeUtc,
    /// When the project was last updated.
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A project has many commits.
    #[sea_orm(has_many = "super::commit::Entity")]
    Commit,
}

impl Related<super::commit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
