//! # Arboretum Shared Library
//!
//! This crate contains the data models, persistence layer and authentication
//! primitives used by the Arboretum API server.
//!
//! ## Module Organization
//!
//! - `models`: Record types and their PostgreSQL queries
//! - `store`: The `Store` trait with PostgreSQL and in-memory backends
//! - `db`: Connection pool and migrations
//! - `auth`: Password hashing and JWT issuance

pub mod auth;
pub mod db;
pub mod models;
pub mod store;

/// Current version of the Arboretum shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
