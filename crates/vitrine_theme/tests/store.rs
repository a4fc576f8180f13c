use std::sync::{Arc, Mutex};

use vitrine_theme::{
    AttributeMap, ColorScheme, FileStorage, MemoryStorage, PreferenceStorage, StorageError,
    StyleTokens, ThemeMode, ThemeState, ThemeStore, COLOR_SCHEME_ATTR, COLOR_SCHEME_KEY,
    THEME_MODE_ATTR, THEME_MODE_KEY,
};

/// Storage that refuses every write, like a full or disabled local store
struct ReadOnlyStorage;

impl PreferenceStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}

#[test]
fn empty_storage_starts_at_defaults() {
    let store = ThemeStore::initialize(MemoryStorage::new(), AttributeMap::new());
    assert_eq!(store.state(), ThemeState::new(ColorScheme::Cyan, ThemeMode::Dark));
}

#[test]
fn scheme_survives_reinitialization() {
    for scheme in ColorScheme::all() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ThemeStore::initialize(Arc::clone(&storage), AttributeMap::new());
        store.set_color_scheme(*scheme);
        drop(store);

        let restored = ThemeStore::initialize(Arc::clone(&storage), AttributeMap::new());
        assert_eq!(restored.color_scheme(), *scheme);
    }
}

#[test]
fn file_storage_survives_reinitialization() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    let store = ThemeStore::initialize(FileStorage::new(&path), AttributeMap::new());
    store.set_color_scheme(ColorScheme::Orange);
    store.set_theme_mode(ThemeMode::Light);

    let restored = ThemeStore::initialize(FileStorage::new(&path), AttributeMap::new());
    assert_eq!(
        restored.state(),
        ThemeState::new(ColorScheme::Orange, ThemeMode::Light)
    );
}

#[test]
fn unrecognized_stored_values_fall_back_to_defaults() {
    let storage = Arc::new(MemoryStorage::with_entries([
        (COLOR_SCHEME_KEY, "magenta"),
        (THEME_MODE_KEY, "sepia"),
    ]));
    let store = ThemeStore::initialize(Arc::clone(&storage), AttributeMap::new());

    assert_eq!(store.state(), ThemeState::default());
    // The resolved value replaces the corrupted one.
    assert_eq!(storage.get(COLOR_SCHEME_KEY).unwrap().as_deref(), Some("cyan"));
    assert_eq!(storage.get(THEME_MODE_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn valid_mode_is_kept_when_scheme_is_invalid() {
    let storage = MemoryStorage::with_entries([(COLOR_SCHEME_KEY, ""), (THEME_MODE_KEY, "light")]);
    let store = ThemeStore::initialize(storage, AttributeMap::new());
    assert_eq!(store.state(), ThemeState::new(ColorScheme::Cyan, ThemeMode::Light));
}

#[test]
fn toggle_twice_restores_mode() {
    let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Blue, ThemeMode::Light));
    store.toggle_theme_mode();
    assert_eq!(store.theme_mode(), ThemeMode::Dark);
    store.toggle_theme_mode();
    assert_eq!(store.theme_mode(), ThemeMode::Light);
}

#[test]
fn every_mutation_persists_and_mirrors_both_fields() {
    let storage = Arc::new(MemoryStorage::new());
    let root = Arc::new(AttributeMap::new());
    let store = ThemeStore::initialize(Arc::clone(&storage), Arc::clone(&root));

    store.set_color_scheme(ColorScheme::Purple);
    assert_eq!(storage.get(COLOR_SCHEME_KEY).unwrap().as_deref(), Some("purple"));
    assert_eq!(root.get(COLOR_SCHEME_ATTR).as_deref(), Some("purple"));

    store.toggle_theme_mode();
    assert_eq!(storage.get(THEME_MODE_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(root.get(THEME_MODE_ATTR).as_deref(), Some("light"));
    assert_eq!(storage.get(COLOR_SCHEME_KEY).unwrap().as_deref(), Some("purple"));
}

#[test]
fn persistence_failure_does_not_block_state_change() {
    let root = Arc::new(AttributeMap::new());
    let store = ThemeStore::initialize(ReadOnlyStorage, Arc::clone(&root));

    store.set_color_scheme(ColorScheme::Green);
    store.toggle_theme_mode();

    assert_eq!(store.state(), ThemeState::new(ColorScheme::Green, ThemeMode::Light));
    assert_eq!(root.get(COLOR_SCHEME_ATTR).as_deref(), Some("green"));
}

#[test]
fn subscribers_observe_the_new_tokens() {
    let store = Arc::new(ThemeStore::ephemeral(ThemeState::default()));
    let seen: Arc<Mutex<Vec<StyleTokens>>> = Arc::default();

    let reader = Arc::clone(&store);
    let sink = Arc::clone(&seen);
    store.subscribe(move |change| {
        assert_eq!(reader.state(), change.current);
        sink.lock().unwrap().push(reader.tokens());
    });

    store.set_color_scheme(ColorScheme::Purple);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].scheme, ColorScheme::Purple);
    assert_eq!(seen[0].effects.ripple.to_css(), "rgb(217,70,239)");
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let store = ThemeStore::ephemeral(ThemeState::default());
    let calls = Arc::new(Mutex::new(0));

    let counter = Arc::clone(&calls);
    let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);
    store.toggle_theme_mode();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle_theme_mode();

    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn shuffle_reports_and_applies_a_new_scheme() {
    let store = ThemeStore::ephemeral(ThemeState::default());
    let mut rng = rand::rng();
    for _ in 0..20 {
        let before = store.color_scheme();
        let picked = store.shuffle_color_scheme(&mut rng);
        assert_ne!(picked, before);
        assert_eq!(store.color_scheme(), picked);
    }
}

#[test]
fn unreadable_preference_file_is_replaced_on_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "colorScheme = [").unwrap();

    let store = ThemeStore::initialize(FileStorage::new(&path), AttributeMap::new());
    assert_eq!(store.state(), ThemeState::default());
    store.set_color_scheme(ColorScheme::Purple);

    let restored = ThemeStore::initialize(FileStorage::new(&path), AttributeMap::new());
    assert_eq!(restored.color_scheme(), ColorScheme::Purple);
}

#[test]
fn unrelated_entries_do_not_hide_stored_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "colorScheme = \"blue\"\nextra = 3\n").unwrap();

    let store = ThemeStore::initialize(FileStorage::new(&path), AttributeMap::new());
    assert_eq!(store.color_scheme(), ColorScheme::Blue);
    store.set_color_scheme(ColorScheme::Green);

    let restored = ThemeStore::initialize(FileStorage::new(&path), AttributeMap::new());
    assert_eq!(restored.color_scheme(), ColorScheme::Green);
    assert!(std::fs::read_to_string(&path).unwrap().contains("extra = 3"));
}

#[test]
fn concurrent_updates_leave_storage_and_root_in_sync() {
    let storage = Arc::new(MemoryStorage::new());
    let root = Arc::new(AttributeMap::new());
    let store = ThemeStore::initialize(Arc::clone(&storage), Arc::clone(&root));

    std::thread::scope(|scope| {
        for scheme in ColorScheme::all() {
            let store = &store;
            scope.spawn(move || {
                for _ in 0..50 {
                    store.set_color_scheme(*scheme);
                    store.toggle_theme_mode();
                }
            });
        }
    });

    let state = store.state();
    assert_eq!(storage.get(COLOR_SCHEME_KEY).unwrap().as_deref(), Some(state.scheme.id()));
    assert_eq!(storage.get(THEME_MODE_KEY).unwrap().as_deref(), Some(state.mode.id()));
    assert_eq!(root.get(COLOR_SCHEME_ATTR).as_deref(), Some(state.scheme.id()));
    assert_eq!(root.get(THEME_MODE_ATTR).as_deref(), Some(state.mode.id()));
}
