//! Vitrine Theme Engine
//!
//! Color scheme and light/dark mode for the Vitrine portfolio site, with
//! persistence and a derived, strongly typed style-token set.
//!
//! # Overview
//!
//! - **Theme state**: one of five [`ColorScheme`]s plus a [`ThemeMode`]
//! - **Store**: [`ThemeStore`] owns the state, persists it through a
//!   [`PreferenceStorage`] backend and mirrors it onto the document root
//! - **Resolver**: [`resolve`] maps a [`ThemeState`] to [`StyleTokens`],
//!   merging the per-scheme and per-mode [`palette`] tables
//! - **Transitions**: effect colors blend across scheme changes
//!
//! # Quick Start
//!
//! ```rust
//! use vitrine_theme::{AttributeMap, ColorScheme, MemoryStorage, ThemeStore};
//!
//! let store = ThemeStore::initialize(MemoryStorage::new(), AttributeMap::new());
//! store.set_color_scheme(ColorScheme::Purple);
//!
//! let tokens = store.tokens();
//! assert_eq!(
//!     tokens.gradient.classes(),
//!     "from-purple-400 via-pink-400 to-fuchsia-400"
//! );
//! ```
//!
//! # Architecture
//!
//! There is no global theme. The application creates one [`ThemeStore`] at
//! startup and hands `&ThemeStore` to whatever renders. Tokens are never
//! stored by consumers; they are resolved from the store on each render.

mod error;
pub mod mirror;
pub mod palette;
pub mod resolver;
pub mod scheme;
pub mod storage;
pub mod store;
pub mod tokens;
pub mod transition;

pub use error::{ParseThemeError, StorageError};
pub use mirror::{AttributeMap, RootAttributes, COLOR_SCHEME_ATTR, THEME_MODE_ATTR};
pub use palette::{ModePalette, SchemePalette};
pub use resolver::{resolve, EffectColors, StyleTokens};
pub use scheme::{ColorScheme, ThemeMode, ThemeState};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage, COLOR_SCHEME_KEY, THEME_MODE_KEY};
pub use store::{restore_state, SubscriptionId, ThemeChange, ThemeStore};
pub use tokens::*;
pub use transition::{Easing, PaletteTransition};
