//! Floating theme controls
//!
//! [`ThemeSwitcher`] is the only component that writes to the store. Every
//! other component receives a [`RenderCx`] and can only read tokens.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use vitrine_theme::{ColorScheme, ParseThemeError, SchemePalette, ThemeMode, ThemeState, ThemeStore};

use crate::context::RenderCx;
use crate::html::{el, icon, Element};

/// User action on the switcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitcherAction {
    ToggleMode,
    Shuffle,
    Select(ColorScheme),
}

impl fmt::Display for SwitcherAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleMode => f.write_str("toggle-mode"),
            Self::Shuffle => f.write_str("shuffle"),
            Self::Select(scheme) => write!(f, "select:{scheme}"),
        }
    }
}

impl FromStr for SwitcherAction {
    type Err = ParseThemeError;

    /// Parses the `data-action` value written by [`ThemeSwitcher::render`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle-mode" => Ok(Self::ToggleMode),
            "shuffle" => Ok(Self::Shuffle),
            other => match other.strip_prefix("select:") {
                Some(scheme) => Ok(Self::Select(scheme.parse()?)),
                None => Err(ParseThemeError::UnknownScheme(other.to_string())),
            },
        }
    }
}

/// Button titles for a page language
struct Labels {
    to_light: &'static str,
    to_dark: &'static str,
    shuffle: &'static str,
}

static EN: Labels = Labels {
    to_light: "Switch to light theme",
    to_dark: "Switch to dark theme",
    shuffle: "Shuffle color scheme",
};

static ES: Labels = Labels {
    to_light: "Cambiar a tema claro",
    to_dark: "Cambiar a tema oscuro",
    shuffle: "Cambiar color aleatorio",
};

fn labels(lang: &str) -> &'static Labels {
    match lang.split(['-', '_']).next().unwrap_or_default() {
        "es" => &ES,
        _ => &EN,
    }
}

/// Title of the mode toggle: names the mode the button switches *to*
pub fn toggle_title(mode: ThemeMode, lang: &str) -> &'static str {
    let labels = labels(lang);
    match mode {
        ThemeMode::Dark => labels.to_light,
        ThemeMode::Light => labels.to_dark,
    }
}

/// Mutating handle on the store
pub struct ThemeSwitcher<'a> {
    store: &'a ThemeStore,
}

impl<'a> ThemeSwitcher<'a> {
    pub fn new(store: &'a ThemeStore) -> Self {
        Self { store }
    }

    /// Apply an action and return the resulting state
    pub fn apply<R: Rng + ?Sized>(&self, action: SwitcherAction, rng: &mut R) -> ThemeState {
        match action {
            SwitcherAction::ToggleMode => self.store.toggle_theme_mode(),
            SwitcherAction::Shuffle => {
                self.store.shuffle_color_scheme(rng);
            }
            SwitcherAction::Select(scheme) => self.store.set_color_scheme(scheme),
        }
        self.store.state()
    }

    pub fn set_mode(&self, mode: ThemeMode) -> ThemeState {
        self.store.set_theme_mode(mode);
        self.store.state()
    }

    pub fn render(&self, cx: &RenderCx, lang: &str) -> Element {
        let t = cx.tokens();
        let labels = labels(lang);

        let button_classes = format!(
            "w-14 h-14 backdrop-blur-xl {} border-2 {} rounded-full shadow-lg hover:shadow-xl {} flex items-center justify-center {} {} transition-all duration-300 group relative overflow-hidden",
            t.surface.bg(),
            t.border_at(30).border(),
            t.shadow.alpha(40).hover_shadow(),
            t.accent.text(),
            t.border_at(60).hover_border()
        );
        let hover_wash = || {
            el("div").class(format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-20 transition-opacity",
                t.gradient
            ))
        };

        let mode_icon = match cx.mode() {
            ThemeMode::Dark => "sun",
            ThemeMode::Light => "moon",
        };
        let toggle = el("button")
            .id("theme-toggle")
            .attr("type", "button")
            .attr("data-action", SwitcherAction::ToggleMode.to_string())
            .attr("title", toggle_title(cx.mode(), lang))
            .class(button_classes.as_str())
            .child(hover_wash())
            .child(icon(mode_icon, "w-6 h-6 relative z-10"));

        let dots = ColorScheme::all().iter().map(|&scheme| {
            let current = scheme == cx.scheme();
            let color = SchemePalette::for_scheme(scheme).swatches[0];
            el("button")
                .attr("type", "button")
                .attr("data-action", SwitcherAction::Select(scheme).to_string())
                .attr("aria-label", scheme.id())
                .attr("aria-pressed", if current { "true" } else { "false" })
                .class(format!(
                    "w-1.5 h-1.5 rounded-full border border-white/50 transition-transform {}",
                    if current { "scale-100" } else { "scale-75" }
                ))
                .style(format!("background-color: {};", color.to_hex_string()))
        });

        let shuffle = el("button")
            .id("scheme-shuffle")
            .attr("type", "button")
            .attr("data-action", SwitcherAction::Shuffle.to_string())
            .attr("title", labels.shuffle)
            .class(button_classes.as_str())
            .child(hover_wash())
            .child(
                el("div")
                    .class("absolute inset-2")
                    .child(el("div").class(format!("w-full h-full rounded-full border {}", t.border_at(20).border()))),
            )
            .child(icon("shuffle", format!("w-6 h-6 {} relative z-10", t.accent.text())))
            .child(el("div").class("absolute -bottom-1 -right-1 flex gap-0.5").children(dots));

        el("div")
            .id("theme-switcher")
            .class("fixed bottom-6 right-6 z-[150] flex flex-col gap-3")
            .child(toggle)
            .child(shuffle)
    }
}
