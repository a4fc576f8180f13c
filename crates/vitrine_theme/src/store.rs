//! Theme store
//!
//! The store is the single owner of the [`ThemeState`]. It is created once
//! by the application root and passed by reference to everything that renders
//! or changes the theme:
//!
//! - Reads (`state`, `tokens`, `effect_colors`) never cache: tokens are
//!   resolved from the current state on every call.
//! - Writes (`set_color_scheme`, `set_theme_mode`, `toggle_theme_mode`,
//!   `shuffle_color_scheme`) update the state, persist both preference keys,
//!   mirror the root attributes, start the effect-color transition and notify
//!   subscribers, all before returning.
//!
//! Persistence is best-effort. A failing backend is logged and the in-memory
//! change still happens.
//!
//! Writes are serialized: the commit, the persisted keys and the root
//! attributes always describe the same state, whichever thread wins.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::mirror::{RootAttributes, COLOR_SCHEME_ATTR, THEME_MODE_ATTR};
use crate::resolver::{resolve, EffectColors, StyleTokens};
use crate::scheme::{ColorScheme, ThemeMode, ThemeState};
use crate::storage::{PreferenceStorage, COLOR_SCHEME_KEY, THEME_MODE_KEY};
use crate::transition::PaletteTransition;

/// A completed state change, delivered to subscribers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: ThemeState,
    pub current: ThemeState,
}

impl ThemeChange {
    pub fn scheme_changed(&self) -> bool {
        self.previous.scheme != self.current.scheme
    }

    pub fn mode_changed(&self) -> bool {
        self.previous.mode != self.current.mode
    }
}

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&ThemeChange) + Send + Sync>;

/// Owner of the process-wide theme state
pub struct ThemeStore {
    state: RwLock<ThemeState>,
    /// Held across commit, persist and mirror
    commit: Mutex<()>,
    storage: Box<dyn PreferenceStorage>,
    root: Box<dyn RootAttributes>,
    subscribers: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
    transition: Mutex<Option<PaletteTransition>>,
}

impl ThemeStore {
    /// Restore the persisted preference and build the store.
    ///
    /// Missing, unreadable or unrecognized values fall back to the default
    /// ({cyan, dark}) field by field. The resolved state is mirrored onto the
    /// root and written back, so storage never keeps a stale value.
    pub fn initialize(
        storage: impl PreferenceStorage + 'static,
        root: impl RootAttributes + 'static,
    ) -> Self {
        let state = restore_state(&storage);
        debug!("ThemeStore::initialize - restored {}/{}", state.scheme, state.mode);

        let store = Self {
            state: RwLock::new(state),
            commit: Mutex::new(()),
            storage: Box::new(storage),
            root: Box::new(root),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            transition: Mutex::new(None),
        };
        store.mirror(state);
        store.persist(state);
        store
    }

    /// Store backed by in-memory storage, starting at `state`
    pub fn ephemeral(state: ThemeState) -> Self {
        use crate::mirror::AttributeMap;
        use crate::storage::MemoryStorage;

        let storage = MemoryStorage::with_entries([
            (COLOR_SCHEME_KEY, state.scheme.id()),
            (THEME_MODE_KEY, state.mode.id()),
        ]);
        Self::initialize(storage, AttributeMap::new())
    }

    // ========== Reads ==========

    pub fn state(&self) -> ThemeState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.state().scheme
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.state().mode
    }

    /// Style tokens for the current state, resolved on every call
    pub fn tokens(&self) -> StyleTokens {
        resolve(self.state())
    }

    // ========== Writes ==========

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        self.update(|s| ThemeState { scheme, ..s });
    }

    pub fn set_theme_mode(&self, mode: ThemeMode) {
        self.update(|s| ThemeState { mode, ..s });
    }

    pub fn toggle_theme_mode(&self) {
        self.update(|s| ThemeState {
            mode: s.mode.toggle(),
            ..s
        });
    }

    /// Switch to a random scheme other than the current one; returns it.
    pub fn shuffle_color_scheme<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorScheme {
        let change = self.update(|s| ThemeState {
            scheme: s.scheme.shuffle(rng),
            ..s
        });
        change.map_or_else(|| self.color_scheme(), |c| c.current.scheme)
    }

    fn update(&self, f: impl FnOnce(ThemeState) -> ThemeState) -> Option<ThemeChange> {
        let commit = self.commit.lock().unwrap_or_else(PoisonError::into_inner);
        let mut current = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(*current);
        if next == *current {
            return None;
        }
        let change = ThemeChange {
            previous: *current,
            current: next,
        };
        *current = next;
        drop(current);

        debug!(
            "ThemeStore::update - {}/{} -> {}/{}",
            change.previous.scheme, change.previous.mode, next.scheme, next.mode
        );

        self.persist(next);
        self.mirror(next);
        // Listeners may call back into the store.
        drop(commit);

        if change.scheme_changed() {
            self.start_transition(change.previous.scheme, next.scheme);
        }
        self.notify(&change);
        Some(change)
    }

    fn persist(&self, state: ThemeState) {
        for (key, value) in [
            (COLOR_SCHEME_KEY, state.scheme.id()),
            (THEME_MODE_KEY, state.mode.id()),
        ] {
            if let Err(err) = self.storage.set(key, value) {
                warn!("Failed to persist theme preference `{}`: {}", key, err);
            }
        }
    }

    fn mirror(&self, state: ThemeState) {
        self.root.set_attribute(COLOR_SCHEME_ATTR, state.scheme.id());
        self.root.set_attribute(THEME_MODE_ATTR, state.mode.id());
    }

    // ========== Subscribers ==========

    /// Register a listener called after every state change
    pub fn subscribe(&self, listener: impl Fn(&ThemeChange) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn notify(&self, change: &ThemeChange) {
        // Listeners run outside the lock so they may read the store or subscribe.
        let listeners: Vec<Listener> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(change);
        }
    }

    // ========== Effect transition ==========

    fn start_transition(&self, from: ColorScheme, to: ColorScheme) {
        let target = EffectColors::for_scheme(to);
        let mut transition = self.transition.lock().unwrap_or_else(PoisonError::into_inner);
        match transition.as_mut() {
            Some(active) => active.retarget(target),
            None => {
                *transition = Some(PaletteTransition::new(EffectColors::for_scheme(from), target))
            }
        }
    }

    /// Advance the effect-color transition.
    ///
    /// Returns true while the blend still needs frames.
    pub fn tick(&self, elapsed: Duration) -> bool {
        let mut transition = self.transition.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(active) = transition.as_mut() else {
            return false;
        };
        let running = active.advance(elapsed);
        if !running {
            *transition = None;
        }
        running
    }

    pub fn is_animating(&self) -> bool {
        self.transition
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Effect colors as currently displayed (blended while animating)
    pub fn effect_colors(&self) -> EffectColors {
        let transition = self.transition.lock().unwrap_or_else(PoisonError::into_inner);
        match transition.as_ref() {
            Some(active) => active.current(),
            None => EffectColors::for_scheme(self.color_scheme()),
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state())
            .field("is_animating", &self.is_animating())
            .finish_non_exhaustive()
    }
}

/// Read the persisted preference without touching storage.
///
/// Missing, unreadable or unrecognized values fall back to the default
/// field by field.
pub fn restore_state(storage: &dyn PreferenceStorage) -> ThemeState {
    let defaults = ThemeState::default();
    ThemeState {
        scheme: read_preference(storage, COLOR_SCHEME_KEY).unwrap_or(defaults.scheme),
        mode: read_preference(storage, THEME_MODE_KEY).unwrap_or(defaults.mode),
    }
}

fn read_preference<T>(storage: &dyn PreferenceStorage, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match storage.get(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Ignoring stored theme preference `{}`: {}", key, err);
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!("Cannot read theme preference `{}`: {}", key, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirror::AttributeMap;
    use crate::storage::MemoryStorage;

    #[test]
    fn setting_current_value_is_a_noop() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_color_scheme(ColorScheme::Cyan);
        store.set_theme_mode(ThemeMode::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!store.is_animating());
    }

    #[test]
    fn mode_change_does_not_start_transition() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        store.toggle_theme_mode();
        assert!(!store.is_animating());
        store.set_color_scheme(ColorScheme::Green);
        assert!(store.is_animating());
    }

    #[test]
    fn tick_finishes_transition() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        store.set_color_scheme(ColorScheme::Purple);

        assert_eq!(store.effect_colors(), EffectColors::for_scheme(ColorScheme::Cyan));
        assert!(store.tick(Duration::from_millis(100)));
        assert!(!store.tick(Duration::from_secs(1)));
        assert!(!store.is_animating());
        assert_eq!(store.effect_colors(), EffectColors::for_scheme(ColorScheme::Purple));
    }

    #[test]
    fn restore_state_does_not_write() {
        let storage = MemoryStorage::with_entries([(COLOR_SCHEME_KEY, "orange")]);
        let state = restore_state(&storage);

        assert_eq!(state, ThemeState::new(ColorScheme::Orange, ThemeMode::Dark));
        assert_eq!(storage.get(THEME_MODE_KEY).unwrap(), None);
    }

    #[test]
    fn initialize_mirrors_root_attributes() {
        let root = Arc::new(AttributeMap::new());
        let storage = MemoryStorage::with_entries([(THEME_MODE_KEY, "light")]);
        let store = ThemeStore::initialize(storage, Arc::clone(&root));

        assert_eq!(store.theme_mode(), ThemeMode::Light);
        assert_eq!(root.get(COLOR_SCHEME_ATTR).as_deref(), Some("cyan"));
        assert_eq!(root.get(THEME_MODE_ATTR).as_deref(), Some("light"));
    }
}
