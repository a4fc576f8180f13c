//! Fixed navigation bar

use vitrine_theme::{Hue, Swatch, ThemeMode};

use crate::config::SiteConfig;
use crate::context::RenderCx;
use crate::html::{el, icon, Element};

/// Render the navigation bar.
///
/// `active` is the href of the highlighted link; `scrolled` selects the
/// opaque variant used once the page has scrolled past the top.
pub fn navbar(cx: &RenderCx, config: &SiteConfig, active: &str, scrolled: bool) -> Element {
    let t = cx.tokens();

    let chrome = if scrolled {
        let bg = match cx.mode() {
            ThemeMode::Dark => Hue::Slate.shade(900).alpha(80),
            ThemeMode::Light => Swatch::white().alpha(80),
        };
        format!(
            "{} backdrop-blur-2xl border-b {} shadow-lg {}",
            bg.bg(),
            t.border_at(20).border(),
            t.border_at(5).shadow()
        )
    } else {
        "bg-transparent".to_string()
    };

    let brand = el("a")
        .attr("href", "#home")
        .class("relative group")
        .child(el("div").class(format!(
            "absolute inset-0 bg-gradient-to-r {} rounded-lg blur-lg opacity-0 group-hover:opacity-100 transition-opacity duration-300",
            t.gradient_bg
        )))
        .child(
            el("span")
                .class(format!(
                    "relative text-2xl bg-gradient-to-r {} bg-clip-text text-transparent px-2",
                    t.gradient
                ))
                .text(config.site.brand.as_str()),
        );

    let links = config.nav.iter().map(|link| {
        let is_active = link.href == active;
        let color = if is_active {
            t.accent.text()
        } else {
            t.text_secondary.text()
        };
        let mut a = el("a")
            .attr("href", link.href.as_str())
            .class(format!(
                "relative px-4 py-2 rounded-lg transition-all duration-300 {color}"
            ))
            .text(link.label.as_str())
            .child(el("span").class(format!(
                "absolute bottom-0 left-0 right-0 h-0.5 bg-gradient-to-r {} scale-x-0 hover:scale-x-100 transition-transform",
                t.gradient
            )));
        if is_active {
            a = a.attr("aria-current", "page").child(el("span").class(format!(
                "absolute inset-0 bg-gradient-to-r {} rounded-lg -z-10",
                t.gradient_bg
            )));
        }
        a
    });

    let social = config.social.iter().map(|item| {
        el("a")
            .attr("href", item.href.as_str())
            .attr("title", item.label.as_str())
            .class(format!(
                "p-2.5 rounded-lg {} {} {} transition-all duration-300",
                t.text_tertiary.text(),
                t.hover_accent.hover_text(),
                t.hover_bg.hover_bg()
            ))
            .child(icon(&item.icon, "w-5 h-5"))
    });

    el("nav")
        .id("navbar")
        .class(format!(
            "fixed top-0 left-0 right-0 z-50 transition-all duration-500 {chrome}"
        ))
        .child(
            el("div").class("max-w-7xl mx-auto px-6 py-4").child(
                el("div")
                    .class("flex items-center justify-between")
                    .child(brand)
                    .child(el("div").class("hidden md:flex items-center gap-2").children(links))
                    .child(el("div").class("hidden lg:flex items-center gap-1").children(social)),
            ),
        )
}
