//! Per-render context handed to every component

use vitrine_theme::{ColorScheme, EffectColors, StyleTokens, ThemeMode, ThemeStore};

/// Borrowed store plus the tokens resolved for this render pass.
///
/// A `RenderCx` lives for exactly one render. Components never keep tokens
/// beyond it, so a theme change is always picked up by the next pass.
pub struct RenderCx<'a> {
    store: &'a ThemeStore,
    tokens: StyleTokens,
    effects: EffectColors,
}

impl<'a> RenderCx<'a> {
    pub fn new(store: &'a ThemeStore) -> Self {
        Self {
            store,
            tokens: store.tokens(),
            effects: store.effect_colors(),
        }
    }

    pub fn store(&self) -> &'a ThemeStore {
        self.store
    }

    pub fn tokens(&self) -> &StyleTokens {
        &self.tokens
    }

    /// Effect colors as displayed, including an in-flight scheme transition
    pub fn effects(&self) -> &EffectColors {
        &self.effects
    }

    pub fn scheme(&self) -> ColorScheme {
        self.tokens.scheme
    }

    pub fn mode(&self) -> ThemeMode {
        self.tokens.mode
    }
}
