/// API route handlers, one module per component:
///
/// - `health`: Health check
/// - `auth`: Registration and login
/// - `species`: Species CRUD
/// - `images`: Standalone image upload
/// - `videos`: Video upload and listing

pub mod auth;
pub mod health;
pub mod images;
pub mod species;
pub mod videos;
