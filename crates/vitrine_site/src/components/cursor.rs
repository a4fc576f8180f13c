//! Cursor glow, click ripple and ambient light
//!
//! Pointer tracking itself happens client-side. This module only emits the
//! themed layers and a `<template>` for the click ripple, all colored from
//! the current [`EffectColors`], so a scheme change recolors every effect
//! on the next render.

use vitrine_theme::EffectColors;

use crate::context::RenderCx;
use crate::html::{el, Element};

/// Particles thrown out by a click ripple
pub const RIPPLE_PARTICLES: usize = 8;

/// Distance in px the ripple particles travel
pub const RIPPLE_DISTANCE: f32 = 50.0;

/// Inline styles for the cursor layers
#[derive(Clone, Debug, PartialEq)]
pub struct CursorStyle {
    pub glow: String,
    pub core: String,
    pub ripple_ring: String,
    pub ripple_particle: String,
    pub ambient: String,
}

impl CursorStyle {
    pub fn new(effects: &EffectColors) -> Self {
        let [g0, g1, g2] = effects.glow;
        let ripple = effects.ripple;
        let [a0, a1, _] = effects.ambient;
        Self {
            glow: format!("background: radial-gradient(circle, {g0}, transparent 70%);"),
            core: format!(
                "background: radial-gradient(circle, {g1}, {g2}); box-shadow: 0 0 20px {g1}, 0 0 40px {g2};"
            ),
            ripple_ring: format!("border-color: {ripple}; box-shadow: 0 0 20px {ripple};"),
            ripple_particle: format!("background: {ripple}; box-shadow: 0 0 10px {ripple};"),
            ambient: format!(
                "background: radial-gradient(circle, {a0}, {a1} 40%, transparent 70%);"
            ),
        }
    }
}

/// Offsets (x, y) of the ripple particles, evenly spaced on a circle
pub fn particle_offsets() -> [(f32, f32); RIPPLE_PARTICLES] {
    std::array::from_fn(|i| {
        let angle = i as f32 / RIPPLE_PARTICLES as f32 * std::f32::consts::TAU;
        (angle.cos() * RIPPLE_DISTANCE, angle.sin() * RIPPLE_DISTANCE)
    })
}

pub fn cursor_overlay(cx: &RenderCx) -> Element {
    let style = CursorStyle::new(cx.effects());
    let [low, high] = cx.tokens().ambient_pulse;

    let follower = el("div")
        .id("cursor-follower")
        .class("fixed top-0 left-0 pointer-events-none z-[9999] hidden md:block")
        .child(
            el("div")
                .class("absolute -top-8 -left-8 w-16 h-16 rounded-full blur-xl animate-pulse")
                .style(style.glow.as_str()),
        )
        .child(
            el("div")
                .class("absolute -top-2 -left-2 w-4 h-4 rounded-full")
                .style(style.core.as_str()),
        );

    let particles = particle_offsets().map(|(x, y)| {
        el("span")
            .class("absolute w-2 h-2 rounded-full")
            .attr("data-x", format!("{x:.1}"))
            .attr("data-y", format!("{y:.1}"))
            .style(style.ripple_particle.as_str())
    });

    let ripple = el("template").id("cursor-ripple").child(
        el("div")
            .class("fixed pointer-events-none z-[9998]")
            .child(
                el("div")
                    .class("w-12 h-12 rounded-full border-2")
                    .style(style.ripple_ring.as_str()),
            )
            .children(particles),
    );

    el("div")
        .id("cursor-effects")
        .attr("aria-hidden", "true")
        .child(follower)
        .child(ripple)
        .child(
            el("div")
                .id("ambient-light")
                .class("fixed top-0 left-0 w-[600px] h-[600px] -ml-[300px] -mt-[300px] rounded-full blur-3xl pointer-events-none z-0")
                .attr("data-opacity", format!("{low} {high}"))
                .style(format!("{} opacity: {low};", style.ambient)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitrine_theme::{ColorScheme, ThemeMode, ThemeState, ThemeStore};

    #[test]
    fn ripple_follows_scheme() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        let cyan = CursorStyle::new(&store.effect_colors());
        assert_eq!(
            cyan.ripple_ring,
            "border-color: rgb(34,211,238); box-shadow: 0 0 20px rgb(34,211,238);"
        );

        store.set_color_scheme(ColorScheme::Purple);
        store.tick(std::time::Duration::from_secs(1));
        let purple = CursorStyle::new(&store.effect_colors());
        assert!(purple.ripple_ring.contains("rgb(217,70,239)"));
        assert!(!purple.ripple_ring.contains("rgb(34,211,238)"));
    }

    #[test]
    fn glow_uses_translucent_stops() {
        let style = CursorStyle::new(&EffectColors::for_scheme(ColorScheme::Green));
        assert_eq!(
            style.glow,
            "background: radial-gradient(circle, rgba(34,197,94,0.15), transparent 70%);"
        );
    }

    #[test]
    fn particles_sit_on_circle() {
        let offsets = particle_offsets();
        assert!((offsets[0].0 - RIPPLE_DISTANCE).abs() < 1e-4);
        assert!(offsets[0].1.abs() < 1e-4);
        for (x, y) in offsets {
            assert!(((x * x + y * y).sqrt() - RIPPLE_DISTANCE).abs() < 1e-3);
        }
    }

    #[test]
    fn ambient_pulse_depends_on_mode() {
        let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Blue, ThemeMode::Light));
        let overlay = cursor_overlay(&RenderCx::new(&store));
        let ambient = overlay.find_by_id("ambient-light").unwrap();
        assert_eq!(ambient.get_attr("data-opacity"), Some("0.2 0.35"));
    }
}
