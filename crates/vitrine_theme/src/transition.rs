//! Scheme change transition
//!
//! Utility classes switch instantly; effect colors drawn with inline styles
//! (glow, ambient light, ripple) are blended from the old scheme to the new
//! one so the page fades rather than jumps.

use std::time::Duration;

use crate::resolver::EffectColors;

/// Default blend duration, matching the page's color transitions
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Easing curve applied to transition progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Time-driven blend between two effect color sets
#[derive(Clone, Debug)]
pub struct PaletteTransition {
    from: EffectColors,
    to: EffectColors,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl PaletteTransition {
    pub fn new(from: EffectColors, to: EffectColors) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Restart from the currently displayed colors towards a new target
    pub fn retarget(&mut self, to: EffectColors) {
        self.from = self.current();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    /// Advance the clock. Returns true while the blend is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        !self.is_finished()
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let raw = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(raw)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Colors at the current progress
    pub fn current(&self) -> EffectColors {
        if self.is_finished() {
            return self.to;
        }
        EffectColors::lerp(&self.from, &self.to, self.progress())
    }

    pub fn target(&self) -> EffectColors {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ColorScheme;

    #[test]
    fn easing_hits_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn transition_reaches_target() {
        let from = EffectColors::for_scheme(ColorScheme::Cyan);
        let to = EffectColors::for_scheme(ColorScheme::Purple);
        let mut t = PaletteTransition::new(from, to);

        assert_eq!(t.current(), from);
        assert!(t.advance(Duration::from_millis(200)));
        assert_ne!(t.current(), from);
        assert!(!t.advance(Duration::from_millis(400)));
        assert_eq!(t.current(), to);
    }

    #[test]
    fn retarget_starts_from_displayed_colors() {
        let cyan = EffectColors::for_scheme(ColorScheme::Cyan);
        let purple = EffectColors::for_scheme(ColorScheme::Purple);
        let green = EffectColors::for_scheme(ColorScheme::Green);

        let mut t = PaletteTransition::new(cyan, purple).with_easing(Easing::Linear);
        t.advance(Duration::from_millis(250));
        let midway = t.current();

        t.retarget(green);
        assert_eq!(t.current(), midway);
        assert_eq!(t.target(), green);
        assert!(!t.is_finished());
    }
}
