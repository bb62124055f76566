//! GitLab API client.
//!
//! One method per endpoint the monitor consumes. All calls are sequential;
//! there is deliberately no retry or rate limiting here, a failed call is
//! surfaced to the command layer as-is.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, warn};
use url::Url;

use crate::dto::ProjectDto;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

use super::convert::project_from_api;
use super::error::GitLabError;
use super::types::{GitLabCommit, GitLabCommitDetail, GitLabProject};

/// Page size for list endpoints (GitLab's maximum).
const PER_PAGE: usize = 100;

/// Client for the GitLab REST API (v4).
#[derive(Clone)]
pub struct GitLabClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    token: String,
}

impl GitLabClient {
    /// Build a client backed by a real reqwest transport.
    ///
    /// When `ssl_cert_path` points at a PEM file, it is added as a root
    /// certificate. When it is `None`, certificate verification is disabled
    /// (self-signed instances) and a warning is logged.
    ///
    /// # Errors
    /// Returns `GitLabError::Certificate` if the PEM file cannot be read or
    /// parsed, and `GitLabError::Url` if the base URL is invalid.
    pub fn new(url: &str, token: &str, ssl_cert_path: Option<&Path>) -> Result<Self, GitLabError> {
        let mut builder = reqwest::Client::builder();

        match ssl_cert_path {
            Some(path) => {
                let pem = std::fs::read(path).map_err(|e| {
                    GitLabError::Certificate(format!("{}: {}", path.display(), e))
                })?;
                let cert = reqwest::Certificate::from_pem(&pem)
                    .map_err(|e| GitLabError::Certificate(e.to_string()))?;
                builder = builder.add_root_certificate(cert);
            }
            None => {
                warn!("no SSL certificate configured, certificate verification is disabled");
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        let client = builder
            .build()
            .map_err(|e| GitLabError::Http(e.to_string()))?;

        Self::from_transport(Arc::new(ReqwestTransport::new(client)), url, token)
    }

    /// Build a client over an arbitrary transport. Used by tests.
    pub fn from_transport(
        transport: Arc<dyn HttpTransport>,
        url: &str,
        token: &str,
    ) -> Result<Self, GitLabError> {
        // Url::join treats a base without a trailing slash as a file path
        let normalized = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| GitLabError::Url(format!("{url}: {e}")))?;

        Ok(Self {
            transport,
            base_url,
            token: token.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<String, GitLabError> {
        self.base_url
            .join(path)
            .map(Into::into)
            .map_err(|e| GitLabError::Url(e.to_string()))
    }

    async fn send(&self, method: HttpMethod, url: String) -> Result<HttpResponse, GitLabError> {
        let request = HttpRequest {
            method,
            url,
            headers: vec![("PRIVATE-TOKEN".to_string(), self.token.clone())],
        };
        Ok(self.transport.send(request).await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, GitLabError> {
        let resp = self.send(HttpMethod::Get, url).await?;
        if resp.status >= 400 {
            return Err(GitLabError::from_status(
                resp.status,
                &String::from_utf8_lossy(&resp.body),
            ));
        }
        Ok(serde_json::from_slice(&resp.body)?)
    }

    /// Fetch every page of `path`, stopping at the first short page.
    async fn get_paginated<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, GitLabError> {
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            let url = self.endpoint(&format!("{path}?page={page}&per_page={PER_PAGE}"))?;
            let batch: Vec<T> = self.get_json(url).await?;
            let short = batch.len() < PER_PAGE;
            items.extend(batch);
            if short {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    /// Fetch all projects visible to the token.
    pub async fn scan_projects(&self) -> Result<Vec<ProjectDto>, GitLabError> {
        info!("retrieving projects from {}", self.base_url);

        let raw: Vec<GitLabProject> = self.get_paginated("api/v4/projects").await?;
        raw.iter().map(project_from_api).collect()
    }

    /// Fetch a single project by id.
    ///
    /// A remote 404 is not a fault of this tool: it is logged and mapped to
    /// `Ok(None)` so the caller can continue.
    pub async fn get_project_by_id(&self, id: i64) -> Result<Option<ProjectDto>, GitLabError> {
        info!("retrieving project {id}");

        let url = self.endpoint(&format!("api/v4/projects/{id}"))?;
        let resp = self.send(HttpMethod::Get, url).await?;

        if resp.status == 404 {
            warn!("project {id} not found on the GitLab instance");
            return Ok(None);
        }
        if resp.status >= 400 {
            return Err(GitLabError::from_status(
                resp.status,
                &String::from_utf8_lossy(&resp.body),
            ));
        }

        let raw: GitLabProject = serde_json::from_slice(&resp.body)?;
        project_from_api(&raw).map(Some)
    }

    /// Fetch the commit summaries of a project.
    pub async fn get_project_commits(
        &self,
        project: &ProjectDto,
    ) -> Result<Vec<GitLabCommit>, GitLabError> {
        info!("retrieving commits of project {}", project.project_id);

        self.get_paginated(&format!(
            "api/v4/projects/{}/repository/commits",
            project.project_id
        ))
        .await
    }

    /// Fetch the detail record of one commit.
    ///
    /// The list endpoint omits the authored date and author name.
    pub async fn get_commit_details(
        &self,
        project: &ProjectDto,
        commit_id: &str,
    ) -> Result<GitLabCommitDetail, GitLabError> {
        let url = self.endpoint(&format!(
            "api/v4/projects/{}/repository/commits/{commit_id}",
            project.project_id
        ))?;
        self.get_json(url).await
    }

    /// Archive a project on the remote instance.
    pub async fn archive_project(&self, project: &ProjectDto) -> Result<(), GitLabError> {
        info!("archiving project {}", project.project_id);

        let url = self.endpoint(&format!("api/v4/projects/{}/archive", project.project_id))?;
        let resp = self.send(HttpMethod::Post, url).await?;

        if resp.status >= 400 {
            return Err(GitLabError::from_status(
                resp.status,
                &String::from_utf8_lossy(&resp.body),
            ));
        }
        Ok(())
    }
}
