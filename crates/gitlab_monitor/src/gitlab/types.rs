//! Raw GitLab API response types.
//!
//! Every field is optional: the API omits fields depending on instance
//! version and token scope, and presence requirements belong to the
//! mapper ([`super::convert`]), not to serde defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project as returned by `GET /projects` and `GET /projects/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitLabProject {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub path_with_namespace: Option<String>,
    pub description: Option<String>,
    pub releases_access_level: Option<String>,
    pub visibility: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A commit summary as returned by `GET /projects/:id/repository/commits`.
///
/// The list endpoint omits the authored date and author name; those come
/// from the per-commit detail record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitLabCommit {
    pub id: Option<String>,
    pub title: Option<String>,
}

/// A commit detail as returned by `GET /projects/:id/repository/commits/:sha`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitLabCommitDetail {
    pub project_id: Option<i64>,
    pub authored_date: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_deserializes_with_extra_and_missing_fields() {
        let json = r#"{
            "id": 7,
            "name": "monitor",
            "path_with_namespace": "group/monitor",
            "visibility": "private",
            "star_count": 3,
            "web_url": "https://gitlab.example.com/group/monitor"
        }"#;

        let project: GitLabProject = serde_json::from_str(json).expect("project should parse");
        assert_eq!(project.id, Some(7));
        assert_eq!(project.path_with_namespace.as_deref(), Some("group/monitor"));
        assert_eq!(project.description, None);
        assert_eq!(project.created_at, None);
    }

    #[test]
    fn commit_detail_parses_authored_date() {
        let json = r#"{
            "project_id": 7,
            "authored_date": "2024-03-05T10:15:30Z",
            "author_name": "Jane Doe"
        }"#;

        let detail: GitLabCommitDetail = serde_json::from_str(json).expect("detail should parse");
        assert_eq!(detail.project_id, Some(7));
        assert_eq!(detail.author_name.as_deref(), Some("Jane Doe"));
        assert!(detail.authored_date.is_some());
    }
}
