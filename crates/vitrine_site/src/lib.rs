//! Vitrine Site
//!
//! The portfolio page as a set of themed components rendered to static HTML.
//!
//! ```rust
//! use vitrine_site::{render_page, SiteConfig};
//! use vitrine_theme::{ColorScheme, ThemeMode, ThemeState, ThemeStore};
//!
//! let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Green, ThemeMode::Dark));
//! let html = render_page(&store, &SiteConfig::default());
//!
//! assert!(html.contains(r#"data-color-scheme="green""#));
//! assert!(html.contains("from-green-400 via-emerald-400 to-lime-400"));
//! ```

pub mod client;
pub mod components;
pub mod config;
pub mod contact;
pub mod context;
mod error;
pub mod html;
pub mod page;

pub use components::switcher::{SwitcherAction, ThemeSwitcher};
pub use config::{SiteConfig, CONFIG_FILE};
pub use contact::{ContactField, ContactForm, ContactMessage, ContactSubmitter, LogSubmitter};
pub use context::RenderCx;
pub use error::{ConfigError, SubmitError, ValidationError};
pub use page::{render_page, render_page_with, PageOptions};
