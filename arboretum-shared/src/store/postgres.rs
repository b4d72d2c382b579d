use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{Store, StoreError, StoreResult};
use crate::db::pool;
use crate::models::{
    image::{CreateImage, Image},
    species::{CreateSpecies, Species, UpdateSpecies},
    user::{CreateUser, User},
    video::Video,
};

/// PostgreSQL-backed [`Store`]
///
/// Cloning is cheap; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        pool::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let username = data.username.clone();

        User::create(&self.pool, data).await.map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict(format!("username '{}' already exists", username))
            }
            other => StoreError::Database(other),
        })
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(User::find_by_username(&self.pool, username).await?)
    }

    async fn count_users(&self) -> StoreResult<i64> {
        Ok(User::count(&self.pool).await?)
    }

    async fn create_species(&self, data: CreateSpecies) -> StoreResult<(Species, Image)> {
        let mut tx = self.pool.begin().await?;

        let species = Species::create(&mut *tx, &data).await?;
        let image = Image::create(
            &mut *tx,
            CreateImage {
                name: data.name,
                image: data.image,
                species_id: Some(species.id),
            },
        )
        .await?;

        tx.commit().await?;

        debug!(species_id = %species.id, image_id = %image.id, "Species and image inserted");
        Ok((species, image))
    }

    async fn list_species(&self) -> StoreResult<Vec<Species>> {
        Ok(Species::list(&self.pool).await?)
    }

    async fn update_species(&self, id: Uuid, data: UpdateSpecies) -> StoreResult<Option<Species>> {
        Ok(Species::update(&self.pool, id, data).await?)
    }

    async fn delete_species(&self, id: Uuid) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        let images = Image::delete_by_species(&mut *tx, id).await?;
        let deleted = Species::delete(&mut *tx, id).await?;

        if !deleted {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;

        debug!(species_id = %id, images_deleted = images, "Species deleted");
        Ok(true)
    }

    async fn create_image(&self, data: CreateImage) -> StoreResult<Image> {
        Ok(Image::create(&self.pool, data).await?)
    }

    async fn find_image(&self, id: Uuid) -> StoreResult<Option<Image>> {
        Ok(Image::find_by_id(&self.pool, id).await?)
    }

    async fn list_images_for_species(&self, species_id: Uuid) -> StoreResult<Vec<Image>> {
        Ok(Image::list_by_species(&self.pool, species_id).await?)
    }

    async fn create_video(&self, video: String) -> StoreResult<Video> {
        Ok(Video::create(&self.pool, video).await?)
    }

    async fn list_videos(&self) -> StoreResult<Vec<Video>> {
        Ok(Video::list(&self.pool).await?)
    }
}
