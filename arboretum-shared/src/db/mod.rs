/// Database layer for Arboretum
///
/// This module provides PostgreSQL connection pooling and schema migrations.
///
/// # Modules
///
/// - `pool`: Connection pool creation with a startup health check
/// - `migrations`: Embedded migration runner
///
/// # Example
///
/// ```no_run
/// use arboretum_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     arboretum_shared::db::migrations::run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
