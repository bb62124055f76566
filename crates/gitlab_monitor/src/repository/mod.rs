//! Persistence layer: per-entity repositories with upsert semantics.

pub mod commit;
pub mod convert;
pub mod errors;
pub mod project;

use async_trait::async_trait;

pub use commit::CommitRepository;
pub use errors::{RepositoryError, Result};
pub use project::ProjectRepository;

/// CRUD surface shared by the per-entity repositories.
///
/// `create` is an idempotent upsert: when a record with the same primary
/// key already exists, the call routes to `update`. Each operation commits
/// immediately; there is no batching.
#[async_trait]
pub trait Repository {
    type Dto;
    type Id;

    /// Fetch one record by primary key.
    async fn get_by_id(&self, id: &Self::Id) -> Result<Option<Self::Dto>>;

    /// Insert the record, or update it when it already exists.
    async fn create(&self, dto: &Self::Dto) -> Result<()>;

    /// Update an existing record.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` when the record does not exist.
    async fn update(&self, dto: &Self::Dto) -> Result<()>;
}
