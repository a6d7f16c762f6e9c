//! Theme preference survives a restart when backed by redb

use std::sync::Arc;

use profilecard_core::{CardEvent, KeyValueStore, Profile, ProfileCard, Storage, Theme, THEME_KEY};
use tempfile::tempdir;

#[test]
fn test_theme_survives_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("preferences.redb");

    {
        let storage = Storage::new(&db_path).unwrap();
        let mut card = ProfileCard::new(Profile::default(), Arc::new(storage));
        assert_eq!(card.theme(), Theme::Light);
        card.toggle_theme();
    }

    let storage = Storage::new(&db_path).unwrap();
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    let card = ProfileCard::new(Profile::default(), Arc::new(storage));
    assert_eq!(card.theme(), Theme::Dark);
}

#[test]
fn test_double_toggle_restores_stored_value() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("preferences.redb")).unwrap();
    storage.set(THEME_KEY, "dark").unwrap();

    let mut card = ProfileCard::new(Profile::default(), Arc::new(storage.clone()));
    card.toggle_theme();
    card.toggle_theme();

    assert_eq!(card.theme(), Theme::Dark);
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(
        card.take_events(),
        vec![CardEvent::ThemeChanged(Theme::Light), CardEvent::ThemeChanged(Theme::Dark)]
    );
}

#[test]
fn test_unrecognised_value_reads_as_light() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("preferences.redb")).unwrap();
    storage.set(THEME_KEY, "sepia").unwrap();

    let card = ProfileCard::new(Profile::default(), Arc::new(storage));
    assert_eq!(card.theme(), Theme::Light);
}
