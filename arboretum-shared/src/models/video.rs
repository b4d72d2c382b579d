/// Video model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE videos (
///     id UUID PRIMARY KEY,
///     video TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// An uploaded video, stored as a `data:video/...;base64,` URI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub video: String,
}

impl Video {
    /// Inserts a new video
    pub async fn create<'e, E>(executor: E, video: String) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (id, video)
            VALUES ($1, $2)
            RETURNING id, video
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(video)
        .fetch_one(executor)
        .await
    }

    /// Lists every video in upload order
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Video>("SELECT id, video FROM videos ORDER BY created_at ASC")
            .fetch_all(executor)
            .await
    }
}
