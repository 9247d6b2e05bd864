//! The `Catalog` facade: single entry point for callers.
//!
//! Centralizes the `enabled` capability flag so the rest of the system never
//! special-cases "catalog absent". When the catalog is inert (disabled by
//! configuration, or startup failed and the host chose to continue), lookups
//! report not-found/not-duplicate and writes report `None`.

use kinotek_media::{
    Episode, EpisodeMetadata, FileRecord, Movie, MovieMetadata, NewFileRecord, TvShow,
    TvShowMetadata,
};

use crate::connection::{CatalogConfig, CatalogConnection};
use crate::error::CatalogError;
use crate::queries::CatalogStats;
use crate::{operations, queries, schema};

/// Handle to the media catalog, or an inert stand-in when disabled.
#[derive(Debug)]
pub struct Catalog {
    inner: Option<CatalogConnection>,
}

impl Catalog {
    /// Connect to the catalog store and provision the schema.
    ///
    /// A disabled config yields an inert catalog and touches no storage.
    /// Connection or schema failures propagate; they are surfaced once at
    /// startup and the caller decides whether to continue without the
    /// catalog (see [`Catalog::open_or_disabled`]).
    pub fn open(config: &CatalogConfig) -> Result<Self, CatalogError> {
        if !config.enabled {
            log::info!("catalog disabled by configuration");
            return Ok(Self { inner: None });
        }

        let mut inner = CatalogConnection::new(&config.database_path);
        let conn = inner.acquire()?;
        schema::create_schema(conn).map_err(CatalogError::Schema)?;
        Ok(Self { inner: Some(inner) })
    }

    /// Fail-open startup: on connection or schema failure, log the error
    /// once and return an inert catalog so the host keeps organizing files
    /// without persistence. No catalog error terminates the host process.
    pub fn open_or_disabled(config: &CatalogConfig) -> Self {
        match Self::open(config) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("catalog unavailable, continuing without persistence: {e}");
                Self::disabled()
            }
        }
    }

    /// An inert catalog. Every operation is a no-op with its documented
    /// "absent" result.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Whether catalog persistence is active.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    // ── Metadata Repository ─────────────────────────────────────────────

    /// Upsert a movie by provider id. Returns the catalog id, or `None`
    /// when the catalog is inert.
    pub fn upsert_movie(&mut self, movie: &MovieMetadata) -> Result<Option<i64>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => operations::upsert_movie(c.acquire()?, movie).map(Some),
        }
    }

    /// Upsert a TV show by provider id.
    pub fn upsert_tv_show(&mut self, show: &TvShowMetadata) -> Result<Option<i64>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => operations::upsert_tv_show(c.acquire()?, show).map(Some),
        }
    }

    /// Upsert an episode of the show with catalog id `tv_show_id`.
    pub fn upsert_episode(
        &mut self,
        tv_show_id: i64,
        episode: &EpisodeMetadata,
    ) -> Result<Option<i64>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => operations::upsert_episode(c.acquire()?, tv_show_id, episode).map(Some),
        }
    }

    pub fn movie_by_provider_id(&mut self, provider_id: i64) -> Result<Option<Movie>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => queries::movie_by_provider_id(c.acquire()?, provider_id),
        }
    }

    pub fn tv_show_by_provider_id(
        &mut self,
        provider_id: i64,
    ) -> Result<Option<TvShow>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => queries::tv_show_by_provider_id(c.acquire()?, provider_id),
        }
    }

    pub fn episode_by_number(
        &mut self,
        tv_show_id: i64,
        season_number: i64,
        episode_number: i64,
    ) -> Result<Option<Episode>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => queries::episode_by_number(
                c.acquire()?,
                tv_show_id,
                season_number,
                episode_number,
            ),
        }
    }

    // ── File Ledger ─────────────────────────────────────────────────────

    /// Whether this exact original path was already organized. Path match is
    /// authoritative; check it before the (more expensive) fingerprint.
    pub fn is_processed(&mut self, original_path: &str) -> Result<bool, CatalogError> {
        match &mut self.inner {
            None => Ok(false),
            Some(c) => queries::is_file_processed(c.acquire()?, original_path),
        }
    }

    /// The original path of the first recorded file sharing this
    /// fingerprint, if any. Advisory: the caller should skip organizing the
    /// file, but the ledger never blocks the write.
    pub fn duplicate_by_fingerprint(
        &mut self,
        fingerprint: &str,
    ) -> Result<Option<String>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => Ok(queries::find_file_by_fingerprint(c.acquire()?, fingerprint)?
                .map(|f| f.original_path)),
        }
    }

    /// Record a newly organized file, once the physical organize succeeded.
    /// Returns the ledger id, or `None` when the catalog is inert.
    pub fn record(&mut self, file: &NewFileRecord) -> Result<Option<i64>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => operations::record_file(c.acquire()?, file).map(Some),
        }
    }

    pub fn file_by_original_path(
        &mut self,
        original_path: &str,
    ) -> Result<Option<FileRecord>, CatalogError> {
        match &mut self.inner {
            None => Ok(None),
            Some(c) => queries::file_by_original_path(c.acquire()?, original_path),
        }
    }

    /// Row counts per table; all zero when the catalog is inert.
    pub fn stats(&mut self) -> Result<CatalogStats, CatalogError> {
        match &mut self.inner {
            None => Ok(CatalogStats::default()),
            Some(c) => queries::catalog_stats(c.acquire()?),
        }
    }

    /// Graceful shutdown. A later operation on an enabled catalog lazily
    /// reconnects.
    pub fn close(&mut self) {
        if let Some(c) = &mut self.inner {
            c.close();
        }
    }
}
