//! Catalog connection management.
//!
//! A `CatalogConnection` owns the single live handle to the catalog store,
//! opened lazily on first use. Every operation routes through `acquire()`,
//! which probes liveness and reconnects inline when the handle has gone bad
//! or was closed. There is no background retry loop; a reconnect failure
//! propagates to the caller.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use serde::Deserialize;

use crate::error::CatalogError;

/// Configuration surface consumed by the catalog subsystem.
///
/// `enabled = false` gates all catalog activity: the `Catalog` facade becomes
/// inert and callers proceed without persistence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub enabled: bool,
    /// Location of the SQLite catalog database.
    pub database_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            database_path: PathBuf::from("kinotek.db"),
        }
    }
}

/// Owner of the single live connection to the catalog store.
#[derive(Debug)]
pub struct CatalogConnection {
    path: PathBuf,
    conn: Option<Connection>,
}

impl CatalogConnection {
    /// Create a manager for the database at `path`. No connection is opened
    /// until `acquire()` is first called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
        }
    }

    /// Return a usable connection handle, opening or reopening as needed.
    ///
    /// An existing handle is probed with a trivial statement first; if the
    /// probe fails the handle is dropped and a fresh connection is opened
    /// before returning.
    pub fn acquire(&mut self) -> Result<&Connection, CatalogError> {
        let stale = matches!(&self.conn, Some(conn) if !probe(conn));
        if stale {
            log::warn!(
                "catalog connection failed liveness probe, reconnecting to {}",
                self.path.display()
            );
            self.conn = None;
        }

        match &mut self.conn {
            Some(conn) => Ok(&*conn),
            slot => {
                let conn = open_connection(&self.path)?;
                Ok(&*slot.insert(conn))
            }
        }
    }

    /// Close the connection. Any later operation lazily reconnects.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                log::warn!("error closing catalog connection: {e}");
            } else {
                log::info!("catalog connection closed");
            }
        }
    }

    /// Whether a live connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.conn.as_ref().is_some_and(probe)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_connection(path: &Path) -> Result<Connection, CatalogError> {
    let conn = Connection::open(path).map_err(CatalogError::Connection)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .map_err(CatalogError::Connection)?;
    log::info!("connected to catalog database at {}", path.display());
    Ok(conn)
}

fn probe(conn: &Connection) -> bool {
    conn.execute_batch("SELECT 1;").is_ok()
}
