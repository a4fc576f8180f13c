//! Vitrine CLI
//!
//! Renders the portfolio page to static HTML and manages the persisted
//! color scheme / theme mode preference.

mod project;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vitrine_site::{render_page, SwitcherAction, ThemeSwitcher};
use vitrine_theme::{
    restore_state, AttributeMap, ColorScheme, FileStorage, ThemeMode, ThemeState, ThemeStore,
};

/// Default preference file, relative to the working directory
const DEFAULT_PREFS: &str = ".vitrine/preferences.toml";

/// Render the portfolio page and manage its theme
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Render the Vitrine portfolio page and manage its theme")]
#[command(version)]
struct Cli {
    /// Preference file backing the theme store
    #[arg(long, global = true, default_value = DEFAULT_PREFS)]
    prefs: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the page to HTML
    Render {
        /// Site config file or directory containing vitrine.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Render with this color scheme without changing the preference
        #[arg(long)]
        scheme: Option<ColorScheme>,

        /// Render in this mode without changing the preference
        #[arg(long)]
        mode: Option<ThemeMode>,
    },

    /// Inspect or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },

    /// Write a default vitrine.toml
    Init {
        /// Site directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Print the current scheme and mode
    Show {
        /// Print as JSON, including the resolved CSS variables
        #[arg(long)]
        json: bool,
    },

    /// Set the color scheme
    SetScheme { scheme: ColorScheme },

    /// Set the theme mode
    SetMode { mode: ThemeMode },

    /// Switch between dark and light
    Toggle,

    /// Pick a random color scheme other than the current one
    Shuffle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            config,
            out,
            scheme,
            mode,
        } => cmd_render(&cli.prefs, config.as_deref(), out.as_deref(), scheme, mode),
        Commands::Theme { action } => cmd_theme(&cli.prefs, action).map(|_| ()),
        Commands::Init { dir } => {
            let path = project::init_site(&dir)?;
            info!("Created {}", path.display());
            Ok(())
        }
    }
}

fn open_store(prefs: &Path) -> ThemeStore {
    ThemeStore::initialize(FileStorage::new(prefs), AttributeMap::new())
}

/// Render with the saved preference, overridden per field.
///
/// Only reads the preference file; rendering never creates or rewrites it.
fn cmd_render(
    prefs: &Path,
    config: Option<&Path>,
    out: Option<&Path>,
    scheme: Option<ColorScheme>,
    mode: Option<ThemeMode>,
) -> Result<()> {
    let config = project::load_config(config)?;
    let saved = restore_state(&FileStorage::new(prefs));
    let store = ThemeStore::ephemeral(ThemeState::new(
        scheme.unwrap_or(saved.scheme),
        mode.unwrap_or(saved.mode),
    ));

    let html = render_page(&store, &config);
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
            let state = store.state();
            info!("Rendered {} ({}/{})", path.display(), state.scheme, state.mode);
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn cmd_theme(prefs: &Path, action: ThemeCommand) -> Result<ThemeState> {
    let store = open_store(prefs);
    let switcher = ThemeSwitcher::new(&store);
    let mut rng = rand::rng();

    let state = match action {
        ThemeCommand::Show { json } => {
            let state = store.state();
            if json {
                let value = serde_json::json!({
                    "scheme": state.scheme,
                    "mode": state.mode,
                    "variables": store.tokens().to_css_variables(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("scheme: {}", state.scheme);
                println!("mode:   {}", state.mode);
            }
            return Ok(state);
        }
        ThemeCommand::SetScheme { scheme } => {
            switcher.apply(SwitcherAction::Select(scheme), &mut rng)
        }
        ThemeCommand::SetMode { mode } => switcher.set_mode(mode),
        ThemeCommand::Toggle => switcher.apply(SwitcherAction::ToggleMode, &mut rng),
        ThemeCommand::Shuffle => switcher.apply(SwitcherAction::Shuffle, &mut rng),
    };

    info!("Theme is now {}/{}", state.scheme, state.mode);
    Ok(state)
}
