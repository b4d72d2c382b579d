/// Species model and database operations
///
/// A species is a catalog entry describing a plant with a few physical
/// attributes. `last_updated` is set on creation and refreshed on every
/// update.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE species (
///     id UUID PRIMARY KEY,
///     name TEXT NOT NULL,
///     quantity DOUBLE PRECISION NOT NULL,
///     height DOUBLE PRECISION NOT NULL,
///     trunk_size DOUBLE PRECISION NOT NULL,
///     image TEXT,
///     last_updated TIMESTAMPTZ NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
/// );
/// ```
///
/// `created_at` only orders listings and is not part of the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// A plant species in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Unique species ID
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Number of plants held
    pub quantity: f64,

    /// Height
    pub height: f64,

    /// Trunk size
    pub trunk_size: f64,

    /// Inline image payload. Nothing writes it: create stores the payload on
    /// the linked [`Image`](super::image::Image) record and update ignores
    /// it, so it is always `null` for records made through the API
    pub image: Option<String>,

    /// When the record was created or last replaced
    pub last_updated: DateTime<Utc>,
}

/// Input for creating a species
///
/// `image` is not stored on the species row; the store writes it to the
/// companion image record.
#[derive(Debug, Clone)]
pub struct CreateSpecies {
    pub name: String,
    pub quantity: f64,
    pub height: f64,
    pub trunk_size: f64,
    pub image: Option<String>,
}

/// Wholesale replacement of a species' attributes
#[derive(Debug, Clone)]
pub struct UpdateSpecies {
    pub name: String,
    pub quantity: f64,
    pub height: f64,
    pub trunk_size: f64,
}

impl Species {
    /// Inserts a new species with `last_updated` set to now
    pub async fn create<'e, E>(executor: E, data: &CreateSpecies) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Species>(
            r#"
            INSERT INTO species (id, name, quantity, height, trunk_size, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, quantity, height, trunk_size, image, last_updated
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(data.quantity)
        .bind(data.height)
        .bind(data.trunk_size)
        .bind(Utc::now())
        .fetch_one(executor)
        .await
    }

    /// Lists every species in insertion order
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Species>(
            r#"
            SELECT id, name, quantity, height, trunk_size, image, last_updated
            FROM species
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(executor)
        .await
    }

    /// Replaces a species' attributes and refreshes `last_updated`
    ///
    /// Returns `None` if no species has the given ID.
    pub async fn update<'e, E>(
        executor: E,
        id: Uuid,
        data: UpdateSpecies,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Species>(
            r#"
            UPDATE species
            SET name = $2, quantity = $3, height = $4, trunk_size = $5, last_updated = $6
            WHERE id = $1
            RETURNING id, name, quantity, height, trunk_size, image, last_updated
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.quantity)
        .bind(data.height)
        .bind(data.trunk_size)
        .bind(Utc::now())
        .fetch_optional(executor)
        .await
    }

    /// Deletes a species by ID
    ///
    /// Returns true if a row was deleted.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM species WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
