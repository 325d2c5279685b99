mod common;

use cinesearch::storage::{FavoritesManager, JsonFileStore, KeyValueStore, FAVORITES_KEY};
use cinesearch::{initialize, Config, Intent, ViewMode};
use common::movie;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

fn open(path: &Path) -> FavoritesManager<JsonFileStore> {
    FavoritesManager::load_all(JsonFileStore::open(path.to_path_buf()).unwrap())
}

#[test]
fn favorites_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut favorites = open(&path);
    assert!(favorites.add(&movie("tt0372784", "Batman Begins")).unwrap());
    assert!(favorites.add(&movie("tt0468569", "The Dark Knight")).unwrap());
    drop(favorites);

    let favorites = open(&path);
    let ids: Vec<String> = favorites.all().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["tt0372784", "tt0468569"]);
}

#[test]
fn add_is_idempotent_and_remove_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let batman = movie("tt0372784", "Batman Begins");

    let mut favorites = open(&path);
    assert!(favorites.add(&batman).unwrap());
    assert!(!favorites.add(&batman).unwrap());
    assert_eq!(favorites.len(), 1);
    assert!(favorites.is_favorite("tt0372784"));

    assert!(favorites.remove("tt0372784").unwrap());
    assert!(!favorites.remove("tt0372784").unwrap());
    drop(favorites);

    assert!(open(&path).is_empty());
}

#[test]
fn corrupt_file_starts_empty_and_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let mut favorites = open(&path);
    assert!(favorites.is_empty());

    favorites.add(&movie("tt0372784", "Batman Begins")).unwrap();
    drop(favorites);

    assert_eq!(open(&path).len(), 1);
}

#[test]
fn malformed_entries_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let mut store = JsonFileStore::open(path.clone()).unwrap();
    store
        .set(
            FAVORITES_KEY,
            json!([
                { "id": "tt0372784", "title": "Batman Begins", "year": "2005", "poster_url": "N/A" },
                { "title": "missing id" },
                42
            ]),
        )
        .unwrap();
    drop(store);

    let favorites = open(&path);

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites.records()[0].added_at, 0);
}

#[tokio::test]
async fn initialize_tolerates_non_utf8_storage() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("storage.json"), [0xff, 0xfe, 0x00, 0x7b]).unwrap();
    let config = Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    let mut app = initialize(&config).unwrap();
    assert!(app.favorites().is_empty());

    app.handle(Intent::ToggleFavorite(movie("tt0372784", "Batman Begins")))
        .await
        .unwrap();
    drop(app);

    let app = initialize(&config).unwrap();
    assert!(app.favorites().is_favorite("tt0372784"));
}

#[tokio::test]
async fn app_favorites_persist_across_initialize() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let batman = movie("tt0372784", "Batman Begins");

    let mut app = initialize(&config).unwrap();
    app.handle(Intent::ToggleFavorite(batman.clone()))
        .await
        .unwrap();
    drop(app);

    assert!(dir.path().join("storage.json").is_file());

    let mut app = initialize(&config).unwrap();
    assert!(app.favorites().is_favorite("tt0372784"));

    app.handle(Intent::ToggleFavoritesView).await.unwrap();
    assert_eq!(app.store().snapshot().view_mode, ViewMode::Favorites);
    assert_eq!(app.visible_movies(), vec![batman]);
}
