//! Scrolling marquee under the navbar

use vitrine_theme::{Gradient, ThemeMode};

use crate::config::BannerItem;
use crate::context::RenderCx;
use crate::html::{el, icon, Element};

const PARTICLES: usize = 8;

/// Render the banner.
///
/// Items are emitted twice so the marquee can loop seamlessly; the second
/// copy is hidden from assistive technology.
pub fn banner(cx: &RenderCx, items: &[BannerItem]) -> Element {
    let t = cx.tokens();
    let hue = t.border.hue;

    let (background, fade) = match cx.mode() {
        ThemeMode::Dark => (t.gradient_bg, "from-slate-950"),
        ThemeMode::Light => (
            Gradient::three(
                hue.shade(100).alpha(30),
                hue.shade(50).alpha(20),
                hue.shade(100).alpha(30),
            ),
            "from-slate-50",
        ),
    };
    let dot = match cx.mode() {
        ThemeMode::Dark => "rgba(255,255,255,0.3)",
        ThemeMode::Light => "rgba(0,0,0,0.2)",
    };

    let particles = (0..PARTICLES).map(|i| {
        let (left, top) = particle_position(i);
        el("div")
            .class(format!(
                "absolute w-1 h-1 rounded-full {}",
                hue.shade(400).alpha(40).bg()
            ))
            .style(format!("left: {left:.1}%; top: {top:.1}%;"))
    });

    let track = el("div")
        .class("flex gap-16 whitespace-nowrap animate-marquee")
        .children(items.iter().map(|item| banner_item(cx, item, false)))
        .children(items.iter().map(|item| banner_item(cx, item, true)));

    el("div")
        .class(format!(
            "relative overflow-hidden bg-gradient-to-r {} border-y {} mt-20 transition-all duration-500",
            background,
            t.border_at(30).border()
        ))
        .child(el("div").class("absolute inset-0 opacity-10").child(
            el("div").class("absolute inset-0").style(format!(
                "background-image: radial-gradient(circle at 50% 50%, {dot} 1px, transparent 1px); background-size: 50px 50px;"
            )),
        ))
        .child(
            el("div")
                .class("absolute inset-0 overflow-hidden pointer-events-none")
                .children(particles),
        )
        .child(el("div").class("relative py-6").child(track))
        .child(el("div").class(format!(
            "absolute inset-y-0 left-0 w-32 bg-gradient-to-r {fade} to-transparent pointer-events-none"
        )))
        .child(el("div").class(format!(
            "absolute inset-y-0 right-0 w-32 bg-gradient-to-l {fade} to-transparent pointer-events-none"
        )))
}

fn banner_item(cx: &RenderCx, item: &BannerItem, duplicate: bool) -> Element {
    let t = cx.tokens();
    let mut e = el("div")
        .class("flex items-center gap-3 px-6")
        .child(icon(&item.icon, format!("w-6 h-6 {}", t.accent.text())))
        .child(
            el("span")
                .class(format!(
                    "text-xl bg-gradient-to-r {} bg-clip-text text-transparent",
                    t.gradient
                ))
                .text(item.text.as_str()),
        );
    if duplicate {
        e = e.attr("aria-hidden", "true");
    }
    e
}

/// Spread particles over the banner without a random source so the
/// rendered page is stable between runs.
fn particle_position(i: usize) -> (f32, f32) {
    const GOLDEN: f32 = 0.618_034;
    let x = (i as f32 * GOLDEN).fract() * 100.0;
    let y = ((i as f32 + 0.5) / PARTICLES as f32) * 100.0;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use vitrine_theme::{ColorScheme, ThemeState, ThemeStore};

    fn render(state: ThemeState) -> Element {
        let store = ThemeStore::ephemeral(state);
        let cx = RenderCx::new(&store);
        banner(&cx, &SiteConfig::default().banner)
    }

    #[test]
    fn dark_uses_scheme_background_gradient() {
        let e = render(ThemeState::new(ColorScheme::Purple, ThemeMode::Dark));
        assert!(e
            .class_list()
            .contains("bg-gradient-to-r from-purple-500/20 to-pink-500/20"));
        assert!(e.to_html().contains("from-slate-950 to-transparent"));
    }

    #[test]
    fn light_uses_pale_primary_wash() {
        let e = render(ThemeState::new(ColorScheme::Orange, ThemeMode::Light));
        assert!(e
            .class_list()
            .contains("from-orange-100/30 via-orange-50/20 to-orange-100/30"));
        assert!(e.to_html().contains("from-slate-50 to-transparent"));
    }

    #[test]
    fn items_are_duplicated_for_the_loop() {
        let e = render(ThemeState::default());
        let html = e.to_html();
        assert_eq!(html.matches("Quality Code").count(), 2);
        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 6);
    }

    #[test]
    fn particle_positions_stay_inside_banner() {
        for i in 0..PARTICLES {
            let (x, y) = particle_position(i);
            assert!((0.0..100.0).contains(&x));
            assert!((0.0..100.0).contains(&y));
        }
    }
}
