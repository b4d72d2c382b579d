/// Image model and database operations
///
/// Images hold a client-supplied string (base64 or URL). An image created
/// together with a species carries that species' ID in `species_id`; images
/// uploaded on their own have none. The foreign key cascades on delete.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE images (
///     id UUID PRIMARY KEY,
///     name TEXT NOT NULL,
///     image TEXT,
///     species_id UUID REFERENCES species (id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// A stored image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Image {
    /// Unique image ID
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Name, usually the species name
    pub name: String,

    /// Encoded image payload
    pub image: Option<String>,

    /// Linked species, if any
    #[serde(rename = "species")]
    pub species_id: Option<Uuid>,
}

/// Input for creating an image
#[derive(Debug, Clone)]
pub struct CreateImage {
    pub name: String,
    pub image: Option<String>,
    pub species_id: Option<Uuid>,
}

impl Image {
    /// Inserts a new image
    pub async fn create<'e, E>(executor: E, data: CreateImage) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Image>(
            r#"
            INSERT INTO images (id, name, image, species_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, image, species_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.name)
        .bind(data.image)
        .bind(data.species_id)
        .fetch_one(executor)
        .await
    }

    /// Finds an image by ID
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Image>("SELECT id, name, image, species_id FROM images WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Lists the images linked to a species
    pub async fn list_by_species<'e, E>(
        executor: E,
        species_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Image>(
            r#"
            SELECT id, name, image, species_id
            FROM images
            WHERE species_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(species_id)
        .fetch_all(executor)
        .await
    }

    /// Deletes every image linked to a species
    ///
    /// Returns the number of deleted rows, which may be zero.
    pub async fn delete_by_species<'e, E>(executor: E, species_id: Uuid) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM images WHERE species_id = $1")
            .bind(species_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
