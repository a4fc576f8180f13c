//! Color scheme, theme mode, and the combined theme state

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// One of the five fixed accent palettes
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Cyan,
    Purple,
    Blue,
    Orange,
    Green,
}

impl ColorScheme {
    /// Stable id used for storage, root attributes and the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }

    /// Full scheme list, in switcher order.
    pub fn all() -> &'static [ColorScheme] {
        const SCHEMES: [ColorScheme; 5] = [
            ColorScheme::Cyan,
            ColorScheme::Purple,
            ColorScheme::Blue,
            ColorScheme::Orange,
            ColorScheme::Green,
        ];
        &SCHEMES
    }

    /// Pick uniformly among the schemes other than `self`.
    pub fn shuffle<R: Rng + ?Sized>(self, rng: &mut R) -> ColorScheme {
        let others: Vec<ColorScheme> = Self::all()
            .iter()
            .copied()
            .filter(|s| *s != self)
            .collect();
        others[rng.random_range(0..others.len())]
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorScheme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|scheme| scheme.id() == s)
            .ok_or_else(|| ParseThemeError::UnknownScheme(s.to_string()))
    }
}

/// Light/dark base mode, independent of the color scheme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError::UnknownMode(other.to_string())),
        }
    }
}

/// The complete user-selectable theme: scheme plus mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    pub scheme: ColorScheme,
    pub mode: ThemeMode,
}

impl ThemeState {
    pub const fn new(scheme: ColorScheme, mode: ThemeMode) -> Self {
        Self { scheme, mode }
    }
}
