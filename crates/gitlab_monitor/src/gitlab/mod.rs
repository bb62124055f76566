//! GitLab REST API gateway.

pub mod client;
pub mod convert;
pub mod error;
pub mod types;

pub use client::GitLabClient;
pub use error::GitLabError;
