//! Media catalog data model types and content fingerprinting.
//!
//! This crate defines the persistent data model for the media catalog without
//! any database dependencies. Consumers can use these types directly for
//! serialization, display, or passing to `kinotek-db` for persistence.

pub mod fingerprint;
pub mod types;

pub use fingerprint::{fingerprint_file, fingerprint_reader};
pub use types::*;
