//! Palette tables
//!
//! Two independent lookups feed the resolver:
//!
//! - [`SchemePalette`]: one entry per [`ColorScheme`] (accent gradients,
//!   borders, shadows, and the concrete colors used by canvas-style effects)
//! - [`ModePalette`]: one entry per [`ThemeMode`] (surfaces and text)
//!
//! Every consumer, including the cursor glow and click ripple, reads its
//! colors from here. There is no second color map anywhere in the workspace.

use crate::scheme::{ColorScheme, ThemeMode};
use crate::tokens::{Color, Gradient, Hue, Swatch};

/// Scheme-specific tokens
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemePalette {
    /// Primary, secondary and accent hue families
    pub hues: [Hue; 3],
    /// Three-stop headline gradient (shade 400)
    pub gradient: Gradient,
    /// Translucent background tint (shade 500 at 20%)
    pub gradient_bg: Gradient,
    /// Button fill (shade 600)
    pub gradient_btn: Gradient,
    /// Border tint, before the mode-specific opacity is applied
    pub border: Swatch,
    /// Solid accent for text and icons on surfaces
    pub accent: Swatch,
    /// Accent applied on hover
    pub hover_accent: Swatch,
    /// Background wash applied on hover
    pub hover_bg: Swatch,
    pub shadow: Swatch,
    pub icon: Swatch,
    /// Swatch dots shown by the theme switcher
    pub swatches: [Color; 3],
    /// Opaque stops for glow and ambient light effects
    pub effect_stops: [Color; 3],
    /// Click ripple and particle color
    pub ripple: Color,
}

impl SchemePalette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Cyan => scheme_palette(
                [Hue::Cyan, Hue::Teal, Hue::Emerald],
                [0x22d3ee, 0x14b8a6, 0x10b981],
                [(6, 182, 212), (20, 184, 166), (16, 185, 129)],
                (34, 211, 238),
            ),
            ColorScheme::Purple => scheme_palette(
                [Hue::Purple, Hue::Pink, Hue::Fuchsia],
                [0xa855f7, 0xec4899, 0xd946ef],
                [(168, 85, 247), (236, 72, 153), (217, 70, 239)],
                (217, 70, 239),
            ),
            ColorScheme::Blue => scheme_palette(
                [Hue::Blue, Hue::Indigo, Hue::Violet],
                [0x3b82f6, 0x6366f1, 0x8b5cf6],
                [(59, 130, 246), (99, 102, 241), (139, 92, 246)],
                (139, 92, 246),
            ),
            ColorScheme::Orange => scheme_palette(
                [Hue::Orange, Hue::Red, Hue::Rose],
                [0xf97316, 0xef4444, 0xf43f5e],
                [(249, 115, 22), (239, 68, 68), (244, 63, 94)],
                (251, 146, 60),
            ),
            ColorScheme::Green => scheme_palette(
                [Hue::Green, Hue::Emerald, Hue::Lime],
                [0x22c55e, 0x10b981, 0x84cc16],
                [(34, 197, 94), (16, 185, 129), (132, 204, 22)],
                (52, 211, 153),
            ),
        }
    }

    pub fn primary(&self) -> Hue {
        self.hues[0]
    }
}

fn scheme_palette(
    hues: [Hue; 3],
    swatches: [u32; 3],
    effect_stops: [(u8, u8, u8); 3],
    ripple: (u8, u8, u8),
) -> SchemePalette {
    let [primary, secondary, accent] = hues;
    SchemePalette {
        hues,
        gradient: Gradient::three(primary.shade(400), secondary.shade(400), accent.shade(400)),
        gradient_bg: Gradient::two(
            primary.shade(500).alpha(20),
            secondary.shade(500).alpha(20),
        ),
        gradient_btn: Gradient::two(primary.shade(600), secondary.shade(600)),
        border: primary.shade(500),
        accent: primary.shade(400),
        hover_accent: primary.shade(400),
        hover_bg: primary.shade(500).alpha(10),
        shadow: primary.shade(500),
        icon: primary.shade(500),
        swatches: swatches.map(Color::from_hex),
        effect_stops: effect_stops.map(|(r, g, b)| Color::rgb8(r, g, b)),
        ripple: Color::rgb8(ripple.0, ripple.1, ripple.2),
    }
}

/// Mode-specific tokens
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModePalette {
    /// Card and panel surface
    pub surface: Swatch,
    /// Slightly more opaque surface for nested panels
    pub surface_alt: Swatch,
    pub input: Swatch,
    pub text_primary: Swatch,
    pub text_secondary: Swatch,
    pub text_tertiary: Swatch,
    pub text_muted: Swatch,
    /// Opacity percentage applied to the scheme border tint
    pub border_alpha: u8,
    /// Body text color of the page root
    pub page_text: Swatch,
    /// Outer stops of the page background gradient
    pub page_base: Swatch,
    /// Shade and opacity of the scheme-tinted middle stop
    pub page_tint: (u16, u8),
    /// Low/high opacity of the pulsing ambient light
    pub ambient_pulse: [f32; 2],
}

impl ModePalette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                surface: Hue::Slate.shade(900).alpha(30),
                surface_alt: Hue::Slate.shade(900).alpha(40),
                input: Hue::Slate.shade(800).alpha(40),
                text_primary: Swatch::white(),
                text_secondary: Hue::Slate.shade(200),
                text_tertiary: Hue::Slate.shade(300),
                text_muted: Hue::Slate.shade(400),
                border_alpha: 10,
                page_text: Hue::Gray.shade(100),
                page_base: Hue::Slate.shade(950),
                page_tint: (950, 30),
                ambient_pulse: [0.3, 0.5],
            },
            ThemeMode::Light => Self {
                surface: Swatch::white().alpha(60),
                surface_alt: Swatch::white().alpha(70),
                input: Swatch::white().alpha(80),
                text_primary: Hue::Gray.shade(900),
                text_secondary: Hue::Gray.shade(700),
                text_tertiary: Hue::Gray.shade(600),
                text_muted: Hue::Gray.shade(500),
                border_alpha: 20,
                page_text: Hue::Gray.shade(900),
                page_base: Hue::Slate.shade(50),
                page_tint: (50, 50),
                ambient_pulse: [0.2, 0.35],
            },
        }
    }
}
