//! Landing section with the headline card

use crate::config::SiteConfig;
use crate::context::RenderCx;
use crate::html::{el, icon, Element};

pub fn hero(cx: &RenderCx, config: &SiteConfig) -> Element {
    let t = cx.tokens();
    let site = &config.site;

    let actions = el("div")
        .class("flex flex-wrap gap-4 justify-center")
        .child(
            el("a")
                .attr("href", "#projects")
                .class(format!(
                    "px-8 py-3 bg-gradient-to-r {} rounded-full hover:shadow-lg {} transition-all duration-300 hover:scale-105 text-white",
                    t.gradient_btn,
                    t.shadow.alpha(50).hover_shadow()
                ))
                .text("View Projects"),
        )
        .child(
            el("a")
                .attr("href", "#contact")
                .class(format!(
                    "px-8 py-3 backdrop-blur-sm {} border {} rounded-full hover:bg-opacity-80 {} transition-all duration-300 {}",
                    t.input.bg(),
                    t.border_at(30).border(),
                    t.border_at(50).hover_border(),
                    t.text_secondary.text()
                ))
                .text("Contact Me"),
        );

    let social = el("div")
        .class("flex gap-6 justify-center mt-8")
        .children(config.social.iter().take(3).map(|item| {
            el("a")
                .attr("href", item.href.as_str())
                .attr("title", item.label.as_str())
                .class(format!(
                    "{} {} transition-colors",
                    t.text_tertiary.text(),
                    t.hover_accent.hover_text()
                ))
                .child(icon(&item.icon, "w-6 h-6"))
        }));

    let card = el("div")
        .class(format!(
            "backdrop-blur-xl {} border {} rounded-3xl p-12 shadow-2xl",
            t.surface_alt.bg(),
            t.border_at(20).border()
        ))
        .child(
            el("div")
                .class(format!(
                    "inline-block px-4 py-2 bg-gradient-to-r {} backdrop-blur-sm border {} rounded-full mb-6 {}",
                    t.gradient_bg,
                    t.border_at(20).border(),
                    t.accent.text()
                ))
                .text(site.badge.as_str()),
        )
        .child(
            el("h1")
                .class(format!(
                    "mb-6 bg-gradient-to-r {} bg-clip-text text-transparent",
                    t.gradient
                ))
                .text(site.headline.as_str()),
        )
        .child(
            el("p")
                .class(format!("mb-8 {} max-w-2xl mx-auto", t.text_secondary.text()))
                .text(site.intro.as_str()),
        )
        .child(actions)
        .child(social);

    el("section")
        .id("home")
        .class("min-h-screen flex items-center justify-center px-6 pt-20")
        .child(
            el("div")
                .class("max-w-4xl mx-auto text-center relative z-10")
                .child(card)
                .child(
                    el("a")
                        .attr("href", "#projects")
                        .attr("aria-label", "Scroll to projects")
                        .class("block mt-12 animate-bounce")
                        .child(icon("chevron-down", format!("w-8 h-8 {} mx-auto", t.icon.text()))),
                ),
        )
}
