use kinotek_db::*;
use kinotek_media::*;

fn fight_club() -> MovieMetadata {
    MovieMetadata {
        provider_id: 550,
        title: "Fight Club".to_string(),
        original_title: Some("Fight Club".to_string()),
        release_date: Some("1999-10-15".to_string()),
        overview: Some("An insomniac office worker crosses paths with a soapmaker.".to_string()),
        rating: Some(8.4),
        vote_count: Some(26280),
        poster_ref: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
        backdrop_ref: None,
    }
}

fn the_wire() -> TvShowMetadata {
    TvShowMetadata {
        provider_id: 1438,
        name: "The Wire".to_string(),
        original_name: Some("The Wire".to_string()),
        first_air_date: Some("2002-06-02".to_string()),
        overview: Some("The Baltimore drug scene, seen through the eyes of drug dealers and law enforcement.".to_string()),
        rating: Some(8.6),
        vote_count: Some(1785),
        poster_ref: None,
        backdrop_ref: None,
    }
}

fn episode(season: i64, number: i64) -> EpisodeMetadata {
    EpisodeMetadata {
        season_number: season,
        episode_number: number,
        name: Some(format!("Episode {number}")),
        air_date: Some("2002-06-02".to_string()),
        overview: None,
        still_ref: None,
        rating: None,
        vote_count: None,
    }
}

fn file_for(path: &str, hash: &str, link: MediaLink) -> NewFileRecord {
    NewFileRecord {
        original_path: path.to_string(),
        destination_path: format!("/library{path}"),
        fingerprint: hash.to_string(),
        file_size: Some(1_500_000_000),
        link,
    }
}

#[test]
fn upsert_movie_creates_then_updates() {
    let conn = open_memory().unwrap();
    let first_id = upsert_movie(&conn, &fight_club()).unwrap();

    let created_at: String = conn
        .query_row("SELECT created_at FROM movies WHERE id = ?1", [first_id], |r| r.get(0))
        .unwrap();

    let mut updated = fight_club();
    updated.title = "Fight Club (Director's Cut)".to_string();
    let second_id = upsert_movie(&conn, &updated).unwrap();

    // Same row, new title, creation timestamp preserved
    assert_eq!(first_id, second_id);
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);

    let movie = movie_by_provider_id(&conn, 550).unwrap().unwrap();
    assert_eq!(movie.title, "Fight Club (Director's Cut)");
    assert_eq!(movie.created_at, created_at);
    assert_eq!(movie.provider_id, 550);
}

#[test]
fn upsert_tv_show_is_keyed_by_provider_id() {
    let conn = open_memory().unwrap();
    let id = upsert_tv_show(&conn, &the_wire()).unwrap();

    let mut renamed = the_wire();
    renamed.name = "The Wire (Remastered)".to_string();
    assert_eq!(upsert_tv_show(&conn, &renamed).unwrap(), id);

    let show = tv_show_by_provider_id(&conn, 1438).unwrap().unwrap();
    assert_eq!(show.name, "The Wire (Remastered)");
}

#[test]
fn upsert_episode_is_keyed_by_triple() {
    let conn = open_memory().unwrap();
    let show_id = upsert_tv_show(&conn, &the_wire()).unwrap();

    let first = upsert_episode(&conn, show_id, &episode(1, 1)).unwrap();

    let mut retitled = episode(1, 1);
    retitled.name = Some("The Target".to_string());
    let second = upsert_episode(&conn, show_id, &retitled).unwrap();
    assert_eq!(first, second);

    let ep = episode_by_number(&conn, show_id, 1, 1).unwrap().unwrap();
    assert_eq!(ep.name.as_deref(), Some("The Target"));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM episodes", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn episode_for_missing_show_is_constraint_violation() {
    let conn = open_memory().unwrap();
    let err = upsert_episode(&conn, 999, &episode(1, 1)).unwrap_err();
    assert!(err.is_constraint_violation());
}

#[test]
fn record_file_is_create_once() {
    let conn = open_memory().unwrap();
    let movie_id = upsert_movie(&conn, &fight_club()).unwrap();

    record_file(&conn, &file_for("/src/a.mkv", "H1", MediaLink::Movie(movie_id))).unwrap();

    // Same original path again: refused, existing row untouched
    let err = record_file(
        &conn,
        &file_for("/src/a.mkv", "H2", MediaLink::Movie(movie_id)),
    )
    .unwrap_err();
    assert!(err.is_constraint_violation());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM files WHERE original_path = '/src/a.mkv'", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(count, 1);

    let record = file_by_original_path(&conn, "/src/a.mkv").unwrap().unwrap();
    assert_eq!(record.file_hash, "H1");
    assert_eq!(record.media_kind, MediaKind::Movie);
    assert_eq!(record.movie_id, Some(movie_id));
    assert_eq!(record.episode_id, None);
}

#[test]
fn duplicate_fingerprint_is_allowed() {
    let conn = open_memory().unwrap();
    let movie_id = upsert_movie(&conn, &fight_club()).unwrap();

    record_file(&conn, &file_for("/src/a.mkv", "H1", MediaLink::Movie(movie_id))).unwrap();
    // Identical content at a different path: the ledger signals but never blocks
    record_file(&conn, &file_for("/src/b.mkv", "H1", MediaLink::Movie(movie_id))).unwrap();

    let dup = find_file_by_fingerprint(&conn, "H1").unwrap().unwrap();
    assert_eq!(dup.original_path, "/src/a.mkv");
}

#[test]
fn deleting_show_cascades_to_episodes_but_spares_files() {
    let conn = open_memory().unwrap();
    let show_id = upsert_tv_show(&conn, &the_wire()).unwrap();
    let episode_id = upsert_episode(&conn, show_id, &episode(1, 1)).unwrap();

    record_file(
        &conn,
        &file_for("/src/wire-s01e01.mkv", "H9", MediaLink::Episode(episode_id)),
    )
    .unwrap();

    conn.execute("DELETE FROM tv_shows WHERE id = ?1", [show_id])
        .unwrap();

    let episodes: i64 = conn
        .query_row("SELECT COUNT(*) FROM episodes", [], |r| r.get(0))
        .unwrap();
    assert_eq!(episodes, 0);

    // File history survives with the episode link nulled
    let record = file_by_original_path(&conn, "/src/wire-s01e01.mkv")
        .unwrap()
        .unwrap();
    assert_eq!(record.episode_id, None);
    assert_eq!(record.media_kind, MediaKind::Episode);
}

#[test]
fn deleting_movie_nulls_file_link() {
    let conn = open_memory().unwrap();
    let movie_id = upsert_movie(&conn, &fight_club()).unwrap();
    record_file(&conn, &file_for("/src/a.mkv", "H1", MediaLink::Movie(movie_id))).unwrap();

    conn.execute("DELETE FROM movies WHERE id = ?1", [movie_id])
        .unwrap();

    let record = file_by_original_path(&conn, "/src/a.mkv").unwrap().unwrap();
    assert_eq!(record.movie_id, None);
}
