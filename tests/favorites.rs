//! Favorites adapter over the JSON file store.

mod common;

use common::coin;
use coinranking_sdk::prelude::*;
use std::sync::Arc;
use temp_dir::TempDir;

#[test]
fn toggle_twice_restores_snapshot() {
    let dir = TempDir::new().unwrap();
    let favorites = Favorites::new(JsonFileStore::new(dir.child("favorites.json"))).unwrap();
    favorites.toggle(&coin("a", "Alpha")).unwrap();
    let before = favorites.snapshot();

    let btc = coin("Qwsogvtv82FCd", "Bitcoin");
    assert!(favorites.toggle(&btc).unwrap());
    assert!(!favorites.toggle(&btc).unwrap());

    assert_eq!(favorites.snapshot(), before);
}

#[test]
fn writes_are_visible_to_a_fresh_adapter() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("favorites.json");

    let favorites = Favorites::new(JsonFileStore::new(&path)).unwrap();
    favorites.toggle(&coin("a", "Alpha")).unwrap();
    favorites.toggle(&coin("b", "Beta")).unwrap();
    favorites.remove(&CoinId::from("a")).unwrap();

    let reopened = Favorites::new(JsonFileStore::new(&path)).unwrap();
    let names: Vec<_> = reopened.snapshot().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, ["Beta"]);
}

#[test]
fn stored_file_is_a_json_array_of_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("favorites.json");
    let favorites = Favorites::new(JsonFileStore::new(&path)).unwrap();
    favorites.toggle(&coin("Qwsogvtv82FCd", "Bitcoin")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let records: Vec<FavoriteRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        records,
        vec![FavoriteRecord {
            id: CoinId::from("Qwsogvtv82FCd"),
            symbol: "BIT".into(),
            name: "Bitcoin".into(),
            icon_url: "https://cdn.coinranking.com/Qwsogvtv82FCd.svg".into(),
        }]
    );
}

#[test]
fn identity_is_the_coin_id() {
    let favorites = Favorites::in_memory();
    favorites.toggle(&coin("x", "First name")).unwrap();

    let mut drifted = coin("x", "Second name");
    drifted.symbol = "NEW".into();
    assert!(favorites.contains(&drifted.id));

    let stored = favorites.snapshot().get(&drifted.id).cloned().unwrap();
    assert_eq!(stored.name, "First name");

    assert!(!favorites.toggle(&drifted).unwrap());
    assert!(favorites.snapshot().is_empty());
}

#[test]
fn corrupt_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("favorites.json");
    std::fs::write(&path, "[{\"id\": 1}]").unwrap();

    let err = Favorites::new(JsonFileStore::new(&path)).unwrap_err();
    assert!(matches!(err, StoreError::Serde(_)));
}

#[test]
fn client_uses_configured_favorites_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("favorites.json");
    Favorites::new(JsonFileStore::new(&path))
        .unwrap()
        .toggle(&coin("a", "Alpha"))
        .unwrap();

    let transport = common::MockTransport::new();
    let client = CoinRankingClientBuilder::new()
        .favorites_path(&path)
        .build_with_transport(transport)
        .unwrap();
    assert!(client.favorites().contains(&CoinId::from("a")));

    let shared = Arc::clone(client.favorites());
    shared.remove(&CoinId::from("a")).unwrap();
    assert!(client.coin_list().favorites().snapshot().is_empty());
}
