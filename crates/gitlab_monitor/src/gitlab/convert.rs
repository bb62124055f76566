//! Conversion from raw GitLab API types to internal DTOs.
//!
//! Required fields error with [`GitLabError::MissingField`] instead of
//! being defaulted; a record the API half-filled is a record we refuse
//! to persist.

use crate::dto::{CommitDto, ProjectDto};
use crate::entity::visibility::Visibility;

use super::error::GitLabError;
use super::types::{GitLabCommit, GitLabCommitDetail, GitLabProject};

fn required<T: Clone>(field: &'static str, value: &Option<T>) -> Result<T, GitLabError> {
    value
        .as_ref()
        .cloned()
        .ok_or(GitLabError::MissingField(field))
}

/// Convert a raw API project into a [`ProjectDto`].
pub fn project_from_api(project: &GitLabProject) -> Result<ProjectDto, GitLabError> {
    let visibility: Visibility = required("visibility", &project.visibility)?.parse()?;

    Ok(ProjectDto {
        project_id: required("id", &project.id)?,
        name: required("name", &project.name)?,
        path: required("path_with_namespace", &project.path_with_namespace)?,
        description: project.description.clone(),
        release: project.releases_access_level.clone(),
        visibility,
        created_at: required("created_at", &project.created_at)?,
        updated_at: required("updated_at", &project.updated_at)?,
    })
}

/// Combine a commit summary and its detail record into a [`CommitDto`].
pub fn commit_from_api(
    commit: &GitLabCommit,
    detail: &GitLabCommitDetail,
) -> Result<CommitDto, GitLabError> {
    Ok(CommitDto {
        commit_id: required("id", &commit.id)?,
        project_id: required("project_id", &detail.project_id)?,
        message: required("title", &commit.title)?,
        date: required("authored_date", &detail.authored_date)?,
        author: required("author_name", &detail.author_name)?,
    })
}
