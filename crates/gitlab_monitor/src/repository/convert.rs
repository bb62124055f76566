//! Structural conversions between DTOs and entity models.
//!
//! One explicit field list per entity; nothing is copied by name lookup.
//! Round-tripping a DTO through its model is the identity.

use sea_orm::Set;

use crate::dto::{CommitDto, ProjectDto};
use crate::entity::prelude::{
    CommitActiveModel, CommitModel, ProjectActiveModel, ProjectModel,
};

/// Build a fully-set project active model from a DTO.
pub fn project_to_active_model(dto: &ProjectDto) -> ProjectActiveModel {
    ProjectActiveModel {
        project_id: Set(dto.project_id),
        name: Set(dto.name.clone()),
        path: Set(dto.path.clone()),
        description: Set(dto.description.clone()),
        release: Set(dto.release.clone()),
        visibility: Set(dto.visibility),
        created_at: Set(dto.created_at),
        updated_at: Set(dto.updated_at),
    }
}

/// Read a project DTO back out of a stored model.
pub fn project_from_model(model: &ProjectModel) -> ProjectDto {
    ProjectDto {
        project_id: model.project_id,
        name: model.name.clone(),
        path: model.path.clone(),
        description: model.description.clone(),
        release: model.release.clone(),
        visibility: model.visibility,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Build a fully-set commit active model from a DTO.
pub fn commit_to_active_model(dto: &CommitDto) -> CommitActiveModel {
    CommitActiveModel {
        commit_id: Set(dto.commit_id.clone()),
        project_id: Set(dto.project_id),
        message: Set(dto.message.clone()),
        date: Set(dto.date),
        author: Set(dto.author.clone()),
    }
}

/// Read a commit DTO back out of a stored model.
pub fn commit_from_model(model: &CommitModel) -> CommitDto {
    CommitDto {
        commit_id: model.commit_id.clone(),
        project_id: model.project_id,
        message: model.message.clone(),
        date: model.date,
        author: model.author.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::visibility::Visibility;
    use chrono::{TimeZone, Utc};

    #[test]
    fn project_round_trip_is_identity() {
        let dto = ProjectDto {
            project_id: 42,
            name: "monitor".to_string(),
            path: "group/monitor".to_string(),
            description: Some("Polls GitLab".to_string()),
            release: None,
            visibility: Visibility::Private,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };

        let active = project_to_active_model(&dto);
        let model = ProjectModel {
            project_id: *active.project_id.as_ref(),
            name: active.name.as_ref().clone(),
            path: active.path.as_ref().clone(),
            description: active.description.as_ref().clone(),
            release: active.release.as_ref().clone(),
            visibility: *active.visibility.as_ref(),
            created_at: *active.created_at.as_ref(),
            updated_at: *active.updated_at.as_ref(),
        };

        assert_eq!(project_from_model(&model), dto);
    }

    #[test]
    fn commit_round_trip_is_identity() {
        let dto = CommitDto {
            commit_id: "abc123".to_string(),
            project_id: 42,
            message: "Fix pagination".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 5, 10, 15, 30).unwrap(),
            author: "Jane Doe".to_string(),
        };

        let active = commit_to_active_model(&dto);
        let model = CommitModel {
            commit_id: active.commit_id.as_ref().clone(),
            project_id: *active.project_id.as_ref(),
            message: active.message.as_ref().clone(),
            date: *active.date.as_ref(),
            author: active.author.as_ref().clone(),
        };

        assert_eq!(commit_from_model(&model), dto);
    }
}
