//! Write operations: metadata upserts and the file ledger insert.
//!
//! Every mutating statement here is a single atomic SQL statement; upserts
//! use `ON CONFLICT` on the natural key so there is no read-then-write race
//! if the catalog is ever driven by concurrent workers.

use kinotek_media::{EpisodeMetadata, MovieMetadata, NewFileRecord, TvShowMetadata};
use rusqlite::{Connection, params};

use crate::error::CatalogError;

// ── Metadata Upserts ────────────────────────────────────────────────────────

/// Insert or update a movie by provider id. Returns the catalog id.
///
/// On conflict all mutable fields are overwritten and `updated_at` advances;
/// the provider id and `created_at` are preserved.
pub fn upsert_movie(conn: &Connection, movie: &MovieMetadata) -> Result<i64, CatalogError> {
    let id = conn.query_row(
        "INSERT INTO movies (provider_id, title, original_title, release_date,
             overview, rating, vote_count, poster_ref, backdrop_ref)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(provider_id) DO UPDATE SET
             title = excluded.title,
             original_title = excluded.original_title,
             release_date = excluded.release_date,
             overview = excluded.overview,
             rating = excluded.rating,
             vote_count = excluded.vote_count,
             poster_ref = excluded.poster_ref,
             backdrop_ref = excluded.backdrop_ref,
             updated_at = datetime('now')
         RETURNING id",
        params![
            movie.provider_id,
            movie.title,
            movie.original_title,
            movie.release_date,
            movie.overview,
            movie.rating,
            movie.vote_count,
            movie.poster_ref,
            movie.backdrop_ref,
        ],
        |row| row.get(0),
    )?;
    log::debug!("upserted movie '{}' (id {id})", movie.title);
    Ok(id)
}

/// Insert or update a TV show by provider id. Returns the catalog id.
pub fn upsert_tv_show(conn: &Connection, show: &TvShowMetadata) -> Result<i64, CatalogError> {
    let id = conn.query_row(
        "INSERT INTO tv_shows (provider_id, name, original_name, first_air_date,
             overview, rating, vote_count, poster_ref, backdrop_ref)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(provider_id) DO UPDATE SET
             name = excluded.name,
             original_name = excluded.original_name,
             first_air_date = excluded.first_air_date,
             overview = excluded.overview,
             rating = excluded.rating,
             vote_count = excluded.vote_count,
             poster_ref = excluded.poster_ref,
             backdrop_ref = excluded.backdrop_ref,
             updated_at = datetime('now')
         RETURNING id",
        params![
            show.provider_id,
            show.name,
            show.original_name,
            show.first_air_date,
            show.overview,
            show.rating,
            show.vote_count,
            show.poster_ref,
            show.backdrop_ref,
        ],
        |row| row.get(0),
    )?;
    log::debug!("upserted TV show '{}' (id {id})", show.name);
    Ok(id)
}

/// Insert or update an episode of `tv_show_id`, keyed by the
/// (tv_show_id, season_number, episode_number) triple. Returns the catalog id.
///
/// Fails with `Constraint` if the owning show does not exist.
pub fn upsert_episode(
    conn: &Connection,
    tv_show_id: i64,
    episode: &EpisodeMetadata,
) -> Result<i64, CatalogError> {
    let id = conn.query_row(
        "INSERT INTO episodes (tv_show_id, season_number, episode_number,
             name, air_date, overview, still_ref, rating, vote_count)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(tv_show_id, season_number, episode_number) DO UPDATE SET
             name = excluded.name,
             air_date = excluded.air_date,
             overview = excluded.overview,
             still_ref = excluded.still_ref,
             rating = excluded.rating,
             vote_count = excluded.vote_count,
             updated_at = datetime('now')
         RETURNING id",
        params![
            tv_show_id,
            episode.season_number,
            episode.episode_number,
            episode.name,
            episode.air_date,
            episode.overview,
            episode.still_ref,
            episode.rating,
            episode.vote_count,
        ],
        |row| row.get(0),
    )?;
    log::debug!(
        "upserted episode S{:02}E{:02} of show {tv_show_id} (id {id})",
        episode.season_number,
        episode.episode_number
    );
    Ok(id)
}

// ── File Ledger ─────────────────────────────────────────────────────────────

/// Record a newly organized file. Returns the ledger id.
///
/// Create-once: a duplicate `original_path` fails with `Constraint` and
/// leaves the existing row untouched. Callers should have checked
/// `is_file_processed` first, but the ledger enforces uniqueness regardless.
/// A duplicate fingerprint is allowed; it is only a signal to the caller.
pub fn record_file(conn: &Connection, file: &NewFileRecord) -> Result<i64, CatalogError> {
    let id = conn.query_row(
        "INSERT INTO files (original_path, file_hash, file_size,
             destination_path, media_kind, movie_id, episode_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         RETURNING id",
        params![
            file.original_path,
            file.fingerprint,
            file.file_size,
            file.destination_path,
            file.link.kind().as_str(),
            file.link.movie_id(),
            file.link.episode_id(),
        ],
        |row| row.get(0),
    )?;
    log::info!(
        "recorded organized file {} -> {} (id {id})",
        file.original_path,
        file.destination_path
    );
    Ok(id)
}
