//! Persistence seam for the API handlers.
//!
//! Handlers talk to a [`Store`] trait object held in the application state.
//! Two backends exist:
//!
//! - [`PgStore`]: PostgreSQL through a shared `PgPool`
//! - [`MemoryStore`]: process-local collections, for development and tests
//!
//! Operations that touch two collections (creating a species with its image,
//! deleting a species with its images) are atomic in both backends.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    image::{CreateImage, Image},
    species::{CreateSpecies, Species, UpdateSpecies},
    user::{CreateUser, User},
    video::Video,
};

/// Errors returned by store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated
    #[error("conflict: {0}")]
    Conflict(String),

    /// The underlying database failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Collection-per-entity persistence used by the HTTP layer
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait Store: Send + Sync {
    /// Verifies the backend is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Inserts a user; fails with [`StoreError::Conflict`] if the username
    /// already exists
    async fn create_user(&self, data: CreateUser) -> StoreResult<User>;

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn count_users(&self) -> StoreResult<i64>;

    /// Inserts a species and its companion image (same name, linked by ID)
    /// as one atomic unit
    async fn create_species(&self, data: CreateSpecies) -> StoreResult<(Species, Image)>;

    async fn list_species(&self) -> StoreResult<Vec<Species>>;

    /// Replaces a species' attributes; `None` if the ID is unknown
    async fn update_species(&self, id: Uuid, data: UpdateSpecies) -> StoreResult<Option<Species>>;

    /// Deletes a species and every image linked to it as one atomic unit
    ///
    /// Returns false (and deletes nothing) if the ID is unknown.
    async fn delete_species(&self, id: Uuid) -> StoreResult<bool>;

    async fn create_image(&self, data: CreateImage) -> StoreResult<Image>;

    async fn find_image(&self, id: Uuid) -> StoreResult<Option<Image>>;

    async fn list_images_for_species(&self, species_id: Uuid) -> StoreResult<Vec<Image>>;

    async fn create_video(&self, video: String) -> StoreResult<Video>;

    async fn list_videos(&self) -> StoreResult<Vec<Video>>;
}
