//! Read queries for the media catalog.
//!
//! Point lookups by provider id, duplicate checks against the file ledger,
//! and summary statistics. Missing records are `Ok(None)`, never an error.

use kinotek_media::{Episode, FileRecord, MediaKind, Movie, TvShow};
use rusqlite::{Connection, params};

use crate::error::CatalogError;

// ── Metadata Lookups ────────────────────────────────────────────────────────

/// Look up a movie by its provider id.
pub fn movie_by_provider_id(
    conn: &Connection,
    provider_id: i64,
) -> Result<Option<Movie>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT id, provider_id, title, original_title, release_date, overview,
                rating, vote_count, poster_ref, backdrop_ref, created_at, updated_at
         FROM movies WHERE provider_id = ?1",
    )?;
    let result = stmt.query_row(params![provider_id], row_to_movie);
    match result {
        Ok(m) => Ok(Some(m)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Look up a TV show by its provider id.
pub fn tv_show_by_provider_id(
    conn: &Connection,
    provider_id: i64,
) -> Result<Option<TvShow>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT id, provider_id, name, original_name, first_air_date, overview,
                rating, vote_count, poster_ref, backdrop_ref, created_at, updated_at
         FROM tv_shows WHERE provider_id = ?1",
    )?;
    let result = stmt.query_row(params![provider_id], row_to_tv_show);
    match result {
        Ok(s) => Ok(Some(s)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Look up an episode by its natural key.
pub fn episode_by_number(
    conn: &Connection,
    tv_show_id: i64,
    season_number: i64,
    episode_number: i64,
) -> Result<Option<Episode>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT id, tv_show_id, season_number, episode_number, name, air_date,
                overview, still_ref, rating, vote_count, created_at, updated_at
         FROM episodes
         WHERE tv_show_id = ?1 AND season_number = ?2 AND episode_number = ?3",
    )?;
    let result = stmt.query_row(
        params![tv_show_id, season_number, episode_number],
        row_to_episode,
    );
    match result {
        Ok(e) => Ok(Some(e)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── File Ledger Queries ─────────────────────────────────────────────────────

/// Whether a file at this exact original path has already been organized.
/// Point lookup against the unique path index.
pub fn is_file_processed(conn: &Connection, original_path: &str) -> Result<bool, CatalogError> {
    let processed: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM files WHERE original_path = ?1)",
        params![original_path],
        |row| row.get(0),
    )?;
    Ok(processed)
}

/// Find the first ledger entry sharing a content fingerprint.
///
/// Two files at different paths with identical bytes are the same logical
/// asset; this is the content-addressed duplicate signal. The ledger does
/// not block duplicate fingerprints, it only reports them.
pub fn find_file_by_fingerprint(
    conn: &Connection,
    fingerprint: &str,
) -> Result<Option<FileRecord>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT id, original_path, file_hash, file_size, destination_path,
                media_kind, movie_id, episode_id, processed_at
         FROM files WHERE file_hash = ?1 ORDER BY id LIMIT 1",
    )?;
    let result = stmt.query_row(params![fingerprint], row_to_file_record);
    match result {
        Ok(f) => Ok(Some(f)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch a ledger entry by its original path.
pub fn file_by_original_path(
    conn: &Connection,
    original_path: &str,
) -> Result<Option<FileRecord>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT id, original_path, file_hash, file_size, destination_path,
                media_kind, movie_id, episode_id, processed_at
         FROM files WHERE original_path = ?1",
    )?;
    let result = stmt.query_row(params![original_path], row_to_file_record);
    match result {
        Ok(f) => Ok(Some(f)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List the most recently organized files, newest first.
pub fn recent_files(conn: &Connection, limit: u32) -> Result<Vec<FileRecord>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT id, original_path, file_hash, file_size, destination_path,
                media_kind, movie_id, episode_id, processed_at
         FROM files ORDER BY processed_at DESC, id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], row_to_file_record)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary statistics for the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStats {
    pub movies: i64,
    pub tv_shows: i64,
    pub episodes: i64,
    pub files: i64,
}

/// Row counts per table.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, CatalogError> {
    let movies: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
    let tv_shows: i64 = conn.query_row("SELECT COUNT(*) FROM tv_shows", [], |r| r.get(0))?;
    let episodes: i64 = conn.query_row("SELECT COUNT(*) FROM episodes", [], |r| r.get(0))?;
    let files: i64 = conn.query_row("SELECT COUNT(*) FROM files", [], |r| r.get(0))?;

    Ok(CatalogStats {
        movies,
        tv_shows,
        episodes,
        files,
    })
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        provider_id: row.get(1)?,
        title: row.get(2)?,
        original_title: row.get(3)?,
        release_date: row.get(4)?,
        overview: row.get(5)?,
        rating: row.get(6)?,
        vote_count: row.get(7)?,
        poster_ref: row.get(8)?,
        backdrop_ref: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

fn row_to_tv_show(row: &rusqlite::Row<'_>) -> rusqlite::Result<TvShow> {
    Ok(TvShow {
        id: row.get(0)?,
        provider_id: row.get(1)?,
        name: row.get(2)?,
        original_name: row.get(3)?,
        first_air_date: row.get(4)?,
        overview: row.get(5)?,
        rating: row.get(6)?,
        vote_count: row.get(7)?,
        poster_ref: row.get(8)?,
        backdrop_ref: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

fn row_to_episode(row: &rusqlite::Row<'_>) -> rusqlite::Result<Episode> {
    Ok(Episode {
        id: row.get(0)?,
        tv_show_id: row.get(1)?,
        season_number: row.get(2)?,
        episode_number: row.get(3)?,
        name: row.get(4)?,
        air_date: row.get(5)?,
        overview: row.get(6)?,
        still_ref: row.get(7)?,
        rating: row.get(8)?,
        vote_count: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

fn row_to_file_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<FileRecord> {
    let kind_str: String = row.get(5)?;
    Ok(FileRecord {
        id: row.get(0)?,
        original_path: row.get(1)?,
        file_hash: row.get(2)?,
        file_size: row.get(3)?,
        destination_path: row.get(4)?,
        media_kind: MediaKind::from_str_loose(&kind_str),
        movie_id: row.get(6)?,
        episode_id: row.get(7)?,
        processed_at: row.get(8)?,
    })
}
