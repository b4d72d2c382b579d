/// Record types for Arboretum
///
/// Each model owns its PostgreSQL queries as associated functions that take
/// any `PgExecutor`, so the same query runs against the pool or inside a
/// transaction.
///
/// # Models
///
/// - `user`: Registered accounts with Argon2id password hashes
/// - `species`: Plant catalog entries
/// - `image`: Base64 images, optionally linked to a species
/// - `video`: Base64 video data URIs
///
/// JSON field names follow the document layout the HTTP clients expect:
/// identifiers serialize as `_id` and multi-word fields are camelCase.

pub mod image;
pub mod species;
pub mod user;
pub mod video;
