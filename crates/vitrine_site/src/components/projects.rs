//! Project grid and detail dialogs

use crate::components::section_heading;
use crate::config::Project;
use crate::context::RenderCx;
use crate::html::{el, icon, Element};

/// Tags shown on a card before collapsing into "+N"
const CARD_TAGS: usize = 3;

pub fn projects(cx: &RenderCx, projects: &[Project]) -> Element {
    el("section")
        .id("projects")
        .class("py-20 px-6")
        .child(
            el("div")
                .class("max-w-7xl mx-auto")
                .child(section_heading(
                    cx,
                    "Featured Projects",
                    "A selection of recent work, from storefronts to real-time dashboards",
                ))
                .child(
                    el("div").class("grid md:grid-cols-2 gap-8").children(
                        projects
                            .iter()
                            .enumerate()
                            .map(|(i, project)| project_card(cx, project, i)),
                    ),
                ),
        )
}

/// One card plus the dialog it opens
pub fn project_card(cx: &RenderCx, project: &Project, index: usize) -> Element {
    let t = cx.tokens();
    let dialog_id = format!("project-{index}");

    let overlay_button = |href: &str, name: &str, label: &str| {
        el("a")
            .attr("href", href)
            .attr("aria-label", label)
            .class(format!(
                "p-2.5 {} backdrop-blur-xl rounded-lg border {} {} transition-all shadow-lg",
                t.border.hue.shade(500).alpha(20).bg(),
                t.border.hue.shade(400).alpha(40).border(),
                t.border.hue.shade(500).alpha(30).hover_bg()
            ))
            .child(icon(name, format!("w-4 h-4 {}", t.accent.text())))
    };

    let mut links = el("div").class("absolute top-4 right-4 flex gap-2");
    if let Some(url) = &project.live_url {
        links = links.child(overlay_button(url.as_str(), "external-link", "Open live site"));
    }
    if let Some(url) = &project.source_url {
        links = links.child(overlay_button(url.as_str(), "github", "Open source code"));
    }

    let image = el("div")
        .class("relative h-64 overflow-hidden")
        .child(
            el("img")
                .attr("src", project.image.as_str())
                .attr("alt", project.title.as_str())
                .attr("loading", "lazy")
                .class("w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"),
        )
        .child(el("div").class("absolute inset-0 bg-gradient-to-t from-black/90 via-black/50 to-transparent"))
        .child(
            el("button")
                .attr("type", "button")
                .attr("data-open-dialog", dialog_id.as_str())
                .class(format!(
                    "absolute inset-0 m-auto h-12 w-fit px-6 py-3 bg-gradient-to-r {} backdrop-blur-xl rounded-full text-white flex items-center gap-2 shadow-lg opacity-0 group-hover:opacity-100 transition-opacity",
                    t.gradient_btn
                ))
                .child(icon("eye", "w-4 h-4"))
                .child(el("span").text("View details")),
        )
        .child(links);

    let mut tags = el("div").class("flex flex-wrap gap-2").children(
        project.tags.iter().take(CARD_TAGS).map(|tag| {
            el("span")
                .class(format!(
                    "px-3 py-1 bg-gradient-to-r {} backdrop-blur-sm border {} rounded-full {} text-sm",
                    t.gradient_bg,
                    t.border_at(20).border(),
                    t.accent.text()
                ))
                .text(tag.as_str())
        }),
    );
    if project.tags.len() > CARD_TAGS {
        tags = tags.child(
            el("span")
                .class(format!("px-3 py-1 {} text-sm", t.text_muted.text()))
                .text(format!("+{}", project.tags.len() - CARD_TAGS)),
        );
    }

    let card = el("article")
        .class(format!(
            "group relative overflow-hidden rounded-2xl backdrop-blur-xl {} border {} {} transition-all duration-500 shadow-xl hover:shadow-2xl {}",
            t.surface.bg(),
            t.border_at(10).border(),
            t.border_at(30).hover_border(),
            t.shadow.alpha(20).hover_shadow()
        ))
        .child(image)
        .child(
            el("div")
                .class("p-6")
                .child(
                    el("h3")
                        .class(format!("mb-3 {}", t.text_primary.text()))
                        .text(project.title.as_str()),
                )
                .child(
                    el("p")
                        .class(format!("{} mb-4 line-clamp-2", t.text_tertiary.text()))
                        .text(project.description.as_str()),
                )
                .child(tags),
        );

    el("div").child(card).child(project_dialog(cx, project, &dialog_id))
}

fn project_dialog(cx: &RenderCx, project: &Project, id: &str) -> Element {
    let t = cx.tokens();

    let mut actions = el("div").class("flex flex-wrap gap-4");
    if let Some(url) = &project.live_url {
        actions = actions.child(
            el("a")
                .attr("href", url.as_str())
                .class(format!(
                    "flex-1 min-w-[200px] px-6 py-3 bg-gradient-to-r {} rounded-xl hover:shadow-lg {} transition-all duration-300 flex items-center justify-center gap-2 text-white",
                    t.gradient_btn,
                    t.shadow.alpha(50).hover_shadow()
                ))
                .child(icon("external-link", "w-5 h-5"))
                .child(el("span").text("View live")),
        );
    }
    if let Some(url) = &project.source_url {
        actions = actions.child(
            el("a")
                .attr("href", url.as_str())
                .class(format!(
                    "flex-1 min-w-[200px] px-6 py-3 {} backdrop-blur-xl border {} rounded-xl {} transition-all duration-300 flex items-center justify-center gap-2 {} {}",
                    t.input.bg(),
                    t.border_at(30).border(),
                    t.border_at(50).hover_border(),
                    t.text_secondary.text(),
                    t.accent.hover_text()
                ))
                .child(icon("github", "w-5 h-5"))
                .child(el("span").text("View code")),
        );
    }

    el("dialog")
        .id(id)
        .class(format!(
            "relative max-w-5xl w-full max-h-[90vh] overflow-auto rounded-3xl {} backdrop-blur-2xl border-2 {} shadow-2xl",
            t.surface.bg(),
            t.border_at(30).border()
        ))
        .child(
            el("form").attr("method", "dialog").child(
                el("button")
                    .attr("aria-label", "Close")
                    .class(format!(
                        "absolute top-4 right-4 z-10 p-3 {} backdrop-blur-xl rounded-full border {} {} {} transition-all shadow-lg",
                        t.surface.bg(),
                        t.border_at(30).border(),
                        t.text_secondary.text(),
                        t.accent.hover_text()
                    ))
                    .child(icon("x", "w-6 h-6")),
            ),
        )
        .child(
            el("div")
                .class("relative h-96 overflow-hidden rounded-t-3xl")
                .child(
                    el("img")
                        .attr("src", project.image.as_str())
                        .attr("alt", project.title.as_str())
                        .class("w-full h-full object-cover"),
                )
                .child(el("div").class("absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent")),
        )
        .child(
            el("div")
                .class("p-8")
                .child(
                    el("h2")
                        .class(format!(
                            "mb-4 bg-gradient-to-r {} bg-clip-text text-transparent text-4xl",
                            t.gradient
                        ))
                        .text(project.title.as_str()),
                )
                .child(
                    el("p")
                        .class(format!("{} mb-6 text-lg leading-relaxed", t.text_secondary.text()))
                        .text(project.description.as_str()),
                )
                .child(
                    el("div")
                        .class("mb-8")
                        .child(
                            el("h3")
                                .class(format!("{} mb-3", t.text_primary.text()))
                                .text("Technologies"),
                        )
                        .child(el("div").class("flex flex-wrap gap-3").children(
                            project.tags.iter().map(|tag| {
                                el("span")
                                    .class(format!(
                                        "px-4 py-2 bg-gradient-to-r {} backdrop-blur-sm border {} rounded-full {}",
                                        t.gradient_bg,
                                        t.border_at(30).border(),
                                        t.accent.text()
                                    ))
                                    .text(tag.as_str())
                            }),
                        )),
                )
                .child(actions),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use vitrine_theme::{ColorScheme, ThemeMode, ThemeState, ThemeStore};

    fn sample(tags: &[&str], live: bool) -> Project {
        Project {
            title: "Engine".into(),
            description: "Analytical".into(),
            image: "engine.png".into(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            live_url: live.then(|| "https://example.com".to_string()),
            source_url: None,
        }
    }

    #[test]
    fn extra_tags_collapse_into_counter() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        let cx = RenderCx::new(&store);
        let card = project_card(&cx, &sample(&["a", "b", "c", "d", "e"], false), 0);
        let html = card.to_html();

        assert!(html.contains(">+2</span>"));
        // the dialog lists every tag
        assert!(card.find_by_id("project-0").unwrap().to_html().contains(">e</span>"));
    }

    #[test]
    fn missing_urls_render_no_links() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        let cx = RenderCx::new(&store);
        let html = project_card(&cx, &sample(&["a"], true), 1).to_html();

        assert!(html.contains("View live"));
        assert!(!html.contains("View code"));
        assert!(!html.contains(r#"data-lucide="github""#));
    }

    #[test]
    fn grid_has_one_card_per_project() {
        let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Blue, ThemeMode::Light));
        let cx = RenderCx::new(&store);
        let config = SiteConfig::default();
        let section = projects(&cx, &config.projects);

        assert_eq!(section.to_html().matches("<article").count(), config.projects.len());
        assert!(section.find_by_id("project-3").is_some());
        assert!(section.class_list().contains("py-20"));
    }
}
