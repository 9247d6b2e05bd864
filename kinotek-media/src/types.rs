//! Data model types for the media catalog.
//!
//! These types represent the persistent catalog schema: movies, TV shows,
//! episodes, and the ledger of organized files.

use serde::{Deserialize, Serialize};

// ── Movie ───────────────────────────────────────────────────────────────────

/// A stored movie row.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: i64,
    /// Stable numeric key issued by the external metadata provider.
    pub provider_id: i64,
    pub title: String,
    pub original_title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub rating: Option<f64>,
    pub vote_count: Option<i64>,
    pub poster_ref: Option<String>,
    pub backdrop_ref: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Normalized movie metadata from the external provider, keyed by
/// `provider_id`. Input shape for upserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub provider_id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub poster_ref: Option<String>,
    #[serde(default)]
    pub backdrop_ref: Option<String>,
}

// ── TV Show ─────────────────────────────────────────────────────────────────

/// A stored TV show row.
#[derive(Debug, Clone)]
pub struct TvShow {
    pub id: i64,
    pub provider_id: i64,
    pub name: String,
    pub original_name: Option<String>,
    pub first_air_date: Option<String>,
    pub overview: Option<String>,
    pub rating: Option<f64>,
    pub vote_count: Option<i64>,
    pub poster_ref: Option<String>,
    pub backdrop_ref: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Normalized TV show metadata from the external provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShowMetadata {
    pub provider_id: i64,
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub poster_ref: Option<String>,
    #[serde(default)]
    pub backdrop_ref: Option<String>,
}

// ── Episode ─────────────────────────────────────────────────────────────────

/// A stored episode row. Belongs to exactly one TV show; the
/// (tv_show_id, season_number, episode_number) triple is unique.
#[derive(Debug, Clone)]
pub struct Episode {
    pub id: i64,
    pub tv_show_id: i64,
    pub season_number: i64,
    pub episode_number: i64,
    pub name: Option<String>,
    pub air_date: Option<String>,
    pub overview: Option<String>,
    pub still_ref: Option<String>,
    pub rating: Option<f64>,
    pub vote_count: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Normalized episode metadata. The owning show's catalog id is supplied
/// separately at upsert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeMetadata {
    pub season_number: i64,
    pub episode_number: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub still_ref: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
}

// ── File Ledger ─────────────────────────────────────────────────────────────

/// What kind of media a ledger entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Episode,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Episode => "episode",
        }
    }

    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "episode" | "tv" => Self::Episode,
            _ => Self::Movie,
        }
    }
}

/// The metadata row a new ledger entry links to. Carrying the id inside the
/// variant guarantees the kind matches the populated foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaLink {
    Movie(i64),
    Episode(i64),
}

impl MediaLink {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie(_) => MediaKind::Movie,
            Self::Episode(_) => MediaKind::Episode,
        }
    }

    pub fn movie_id(&self) -> Option<i64> {
        match self {
            Self::Movie(id) => Some(*id),
            Self::Episode(_) => None,
        }
    }

    pub fn episode_id(&self) -> Option<i64> {
        match self {
            Self::Movie(_) => None,
            Self::Episode(id) => Some(*id),
        }
    }
}

/// One physically organized file, as stored in the ledger.
///
/// `movie_id`/`episode_id` are nullable on the read side: deleting metadata
/// sets them to null without destroying the file history.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: i64,
    pub original_path: String,
    pub file_hash: String,
    pub file_size: Option<i64>,
    pub destination_path: String,
    pub media_kind: MediaKind,
    pub movie_id: Option<i64>,
    pub episode_id: Option<i64>,
    pub processed_at: String,
}

/// Input shape for recording a newly organized file.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub original_path: String,
    pub destination_path: String,
    /// Content fingerprint of the original file (lowercase hex SHA-256).
    pub fingerprint: String,
    pub file_size: Option<i64>,
    pub link: MediaLink,
}
