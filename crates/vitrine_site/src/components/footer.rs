//! Page footer

use crate::config::SiteConfig;
use crate::context::RenderCx;
use crate::html::{el, icon, Element};

pub fn footer(cx: &RenderCx, config: &SiteConfig, year: i32) -> Element {
    let t = cx.tokens();
    let site = &config.site;

    let about = el("div")
        .child(
            el("h3")
                .class(format!("mb-4 bg-gradient-to-r {} bg-clip-text text-transparent", t.gradient))
                .text(site.owner.as_str()),
        )
        .child(el("p").class(t.text_tertiary.text()).text(site.tagline.as_str()))
        .child(
            el("div")
                .class(format!("mt-4 h-1 bg-gradient-to-r {} rounded-full", t.gradient))
                .style("width: 60%;"),
        );

    // the hero already covers #home
    let quick_links = config.nav.iter().filter(|link| link.href != "#home").map(|link| {
        el("li").child(
            el("a")
                .attr("href", link.href.as_str())
                .class(format!(
                    "{} {} transition-colors inline-flex items-center gap-2 group",
                    t.text_tertiary.text(),
                    t.hover_accent.hover_text()
                ))
                .child(el("span").class(format!(
                    "w-0 h-0.5 bg-gradient-to-r {} group-hover:w-4 transition-all duration-300",
                    t.gradient
                )))
                .text(link.label.as_str()),
        )
    });

    let social = config.social.iter().map(|item| {
        el("a")
            .attr("href", item.href.as_str())
            .attr("title", item.label.as_str())
            .class(format!(
                "p-3 {} border {} rounded-xl {} {} transition-all {} {} group relative overflow-hidden",
                t.input.bg(),
                t.border_at(20).border(),
                t.hover_bg.hover_bg(),
                t.border_at(50).hover_border(),
                t.text_secondary.text(),
                t.hover_accent.hover_text()
            ))
            .child(el("div").class(format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-opacity",
                t.gradient
            )))
            .child(icon(&item.icon, "w-5 h-5 relative z-10"))
    });

    let heading = |text: &str| el("h3").class(format!("mb-4 {}", t.text_primary.text())).text(text);

    el("footer")
        .class(format!(
            "border-t {} backdrop-blur-xl {} transition-colors duration-500",
            t.border_at(10).border(),
            t.surface.bg()
        ))
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6 py-12")
                .child(
                    el("div")
                        .class("grid md:grid-cols-3 gap-8 mb-8")
                        .child(about)
                        .child(
                            el("div")
                                .child(heading("Quick Links"))
                                .child(el("ul").class("space-y-2").children(quick_links)),
                        )
                        .child(
                            el("div")
                                .child(heading("Follow Me"))
                                .child(el("div").class("flex gap-3").children(social)),
                        ),
                )
                .child(
                    el("div")
                        .class(format!("pt-8 border-t {}", t.border_at(10).border()))
                        .child(
                            el("div")
                                .class("flex flex-col md:flex-row justify-between items-center gap-4")
                                .child(
                                    el("p")
                                        .class(format!("{} text-center md:text-left", t.text_tertiary.text()))
                                        .text(format!("© {year} {}. All rights reserved.", site.owner)),
                                )
                                .child(
                                    el("p")
                                        .class(format!("{} flex items-center gap-2", t.text_tertiary.text()))
                                        .text("Made with")
                                        .child(
                                            el("span")
                                                .class(format!("inline-block animate-pulse {}", t.accent.text()))
                                                .text("♥"),
                                        ),
                                ),
                        ),
                ),
        )
}
