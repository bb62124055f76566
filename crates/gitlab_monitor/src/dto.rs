//! Flat data-transfer records moved between the gateway, the printers,
//! and the persistence layer.
//!
//! DTOs are built once by the mapper and never mutated afterwards;
//! filtering rebuilds collections instead of editing records in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::visibility::Visibility;

/// A GitLab project as the rest of the pipeline sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    /// GitLab project id.
    pub project_id: i64,
    /// Project name.
    pub name: String,
    /// Full path with namespace (e.g., `group/subgroup/project`).
    pub path: String,
    /// Project description.
    pub description: Option<String>,
    /// Releases access level (enabled, disabled, private).
    pub release: Option<String>,
    /// Visibility level.
    pub visibility: Visibility,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A commit combined from the list and detail endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDto {
    /// Commit SHA.
    pub commit_id: String,
    /// Project the commit belongs to.
    pub project_id: i64,
    /// Commit title.
    pub message: String,
    /// Authored date.
    pub date: DateTime<Utc>,
    /// Author name.
    pub author: String,
}
