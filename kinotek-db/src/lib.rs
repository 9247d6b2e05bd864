//! SQLite persistence layer for the media catalog.
//!
//! Records every file the organizer has processed, stores normalized movie,
//! TV show and episode metadata, and answers duplicate queries by path or by
//! content fingerprint. Backed by SQLite (via rusqlite with bundled feature).

pub mod catalog;
pub mod connection;
pub mod error;
pub mod operations;
pub mod queries;
pub mod schema;

pub use catalog::Catalog;
pub use connection::{CatalogConfig, CatalogConnection};
pub use error::CatalogError;
pub use operations::{record_file, upsert_episode, upsert_movie, upsert_tv_show};
pub use queries::{
    catalog_stats, episode_by_number, file_by_original_path, find_file_by_fingerprint,
    is_file_processed, movie_by_provider_id, recent_files, tv_show_by_provider_id, CatalogStats,
};
pub use schema::{open_database, open_memory, SchemaError};
