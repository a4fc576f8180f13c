//! Fixed backdrop behind the page content: the mode's base gradient with
//! three ambient radial lights on top

use crate::context::RenderCx;
use crate::html::{el, Element};

/// Focal points of the three ambient spots
const SPOTS: [&str; 3] = ["50% 50%", "80% 20%", "20% 80%"];

pub fn background(cx: &RenderCx) -> Element {
    let ambient = cx.effects().ambient;
    let layers = SPOTS
        .iter()
        .zip(ambient)
        .map(|(at, color)| format!("radial-gradient(circle at {at}, {color}, transparent 50%)"))
        .collect::<Vec<_>>()
        .join(", ");

    el("div")
        .id("page-background")
        .attr("aria-hidden", "true")
        .class(format!(
            "fixed inset-0 z-0 pointer-events-none bg-gradient-to-br {} transition-colors duration-500",
            cx.tokens().page_background
        ))
        .child(
            el("div")
                .id("ambient-lights")
                .class("absolute inset-0 transition-all duration-500")
                .style(format!("background: {layers};")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_theme::{ColorScheme, ThemeMode, ThemeState, ThemeStore};

    #[test]
    fn spots_use_ambient_colors() {
        let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Orange, ThemeMode::Dark));
        let e = background(&RenderCx::new(&store));
        let style = e.find_by_id("ambient-lights").unwrap().get_attr("style").unwrap();

        assert!(style.starts_with(
            "background: radial-gradient(circle at 50% 50%, rgba(249,115,22,0.1), transparent 50%)"
        ));
        assert!(style.contains("circle at 80% 20%, rgba(239,68,68,0.15)"));
        assert!(style.contains("circle at 20% 80%, rgba(244,63,94,0.1)"));
    }

    #[test]
    fn base_gradient_follows_mode() {
        let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Orange, ThemeMode::Dark));
        let dark = background(&RenderCx::new(&store));
        assert!(dark
            .class_list()
            .contains("from-slate-950 via-orange-950/30 to-slate-950"));

        store.set_theme_mode(ThemeMode::Light);
        let light = background(&RenderCx::new(&store));
        assert!(light
            .class_list()
            .contains("from-slate-50 via-orange-50/50 to-slate-50"));
    }
}
