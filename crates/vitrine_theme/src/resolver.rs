//! Derived style resolver
//!
//! [`resolve`] merges the scheme table and the mode table into one flat
//! [`StyleTokens`] value. It is pure: the same [`ThemeState`] always produces
//! an identical token set, and every role is populated for every state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::palette::{ModePalette, SchemePalette};
use crate::scheme::{ColorScheme, ThemeMode, ThemeState};
use crate::tokens::{Color, Gradient, Swatch};

/// Opacity of the cursor glow stops
pub const GLOW_ALPHA: f32 = 0.15;

/// Opacity of the three ambient page lights
pub const AMBIENT_ALPHAS: [f32; 3] = [0.1, 0.15, 0.1];

/// Concrete colors for effects that are drawn with inline styles rather than
/// utility classes (cursor glow, click ripple, ambient page light).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EffectColors {
    pub glow: [Color; 3],
    pub ambient: [Color; 3],
    pub ripple: Color,
}

impl EffectColors {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        Self::from_palette(&SchemePalette::for_scheme(scheme))
    }

    fn from_palette(palette: &SchemePalette) -> Self {
        let stops = palette.effect_stops;
        Self {
            glow: stops.map(|c| c.with_alpha(GLOW_ALPHA)),
            ambient: [
                stops[0].with_alpha(AMBIENT_ALPHAS[0]),
                stops[1].with_alpha(AMBIENT_ALPHAS[1]),
                stops[2].with_alpha(AMBIENT_ALPHAS[2]),
            ],
            ripple: palette.ripple,
        }
    }

    /// Linear interpolation between two effect color sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mix = |a: &[Color; 3], b: &[Color; 3]| {
            [
                Color::lerp(&a[0], &b[0], t),
                Color::lerp(&a[1], &b[1], t),
                Color::lerp(&a[2], &b[2], t),
            ]
        };
        Self {
            glow: mix(&from.glow, &to.glow),
            ambient: mix(&from.ambient, &to.ambient),
            ripple: Color::lerp(&from.ripple, &to.ripple, t),
        }
    }
}

/// Complete set of style tokens for one theme state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleTokens {
    pub scheme: ColorScheme,
    pub mode: ThemeMode,

    // Scheme colors
    pub gradient: Gradient,
    pub gradient_bg: Gradient,
    pub gradient_btn: Gradient,
    /// Scheme border tint without opacity (`cyan-500`)
    pub border: Swatch,
    /// Border tint at the mode's opacity (`cyan-500/10` in dark mode)
    pub border_tint: Swatch,
    pub accent: Swatch,
    pub hover_accent: Swatch,
    pub hover_bg: Swatch,
    pub shadow: Swatch,
    pub icon: Swatch,

    // Mode colors
    pub surface: Swatch,
    pub surface_alt: Swatch,
    pub input: Swatch,
    pub text_primary: Swatch,
    pub text_secondary: Swatch,
    pub text_tertiary: Swatch,
    pub text_muted: Swatch,

    // Page
    pub page_text: Swatch,
    pub page_background: Gradient,
    pub ambient_pulse: [f32; 2],

    // Concrete colors
    pub swatches: [Color; 3],
    pub effects: EffectColors,
}

/// Resolve the style tokens for a theme state.
pub fn resolve(state: ThemeState) -> StyleTokens {
    let scheme = SchemePalette::for_scheme(state.scheme);
    let mode = ModePalette::for_mode(state.mode);

    let (tint_shade, tint_alpha) = mode.page_tint;
    let page_background = Gradient::three(
        mode.page_base,
        scheme.primary().shade(tint_shade).alpha(tint_alpha),
        mode.page_base,
    );

    StyleTokens {
        scheme: state.scheme,
        mode: state.mode,
        gradient: scheme.gradient,
        gradient_bg: scheme.gradient_bg,
        gradient_btn: scheme.gradient_btn,
        border: scheme.border,
        border_tint: scheme.border.alpha(mode.border_alpha),
        accent: scheme.accent,
        hover_accent: scheme.hover_accent,
        hover_bg: scheme.hover_bg,
        shadow: scheme.shadow,
        icon: scheme.icon,
        surface: mode.surface,
        surface_alt: mode.surface_alt,
        input: mode.input,
        text_primary: mode.text_primary,
        text_secondary: mode.text_secondary,
        text_tertiary: mode.text_tertiary,
        text_muted: mode.text_muted,
        page_text: mode.page_text,
        page_background,
        ambient_pulse: mode.ambient_pulse,
        swatches: scheme.swatches,
        effects: EffectColors::from_palette(&scheme),
    }
}

impl StyleTokens {
    /// Border tint at an explicit opacity, for accents stronger than the
    /// mode default (section underlines, focused inputs)
    pub fn border_at(&self, percent: u8) -> Swatch {
        self.border.alpha(percent)
    }

    /// Flatten the concrete colors into CSS custom properties.
    ///
    /// Keys include the leading `--`; the map is ordered so the output is
    /// stable across calls.
    pub fn to_css_variables(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        vars.insert("--vitrine-scheme".into(), self.scheme.id().into());
        vars.insert("--vitrine-mode".into(), self.mode.id().into());
        for (i, c) in self.swatches.iter().enumerate() {
            vars.insert(format!("--vitrine-swatch-{}", i + 1), c.to_hex_string());
        }
        for (i, c) in self.effects.glow.iter().enumerate() {
            vars.insert(format!("--vitrine-glow-{}", i + 1), c.to_css());
        }
        for (i, c) in self.effects.ambient.iter().enumerate() {
            vars.insert(format!("--vitrine-ambient-{}", i + 1), c.to_css());
        }
        vars.insert("--vitrine-ripple".into(), self.effects.ripple.to_css());
        vars.insert(
            "--vitrine-ambient-opacity-low".into(),
            self.ambient_pulse[0].to_string(),
        );
        vars.insert(
            "--vitrine-ambient-opacity-high".into(),
            self.ambient_pulse[1].to_string(),
        );
        vars
    }
}
