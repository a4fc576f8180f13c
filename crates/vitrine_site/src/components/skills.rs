//! Skill group cards

use crate::components::section_heading;
use crate::config::SkillGroup;
use crate::context::RenderCx;
use crate::html::{el, icon, Element};

pub fn skills(cx: &RenderCx, groups: &[SkillGroup]) -> Element {
    el("section")
        .id("skills")
        .class("py-20 px-6")
        .child(
            el("div")
                .class("max-w-7xl mx-auto")
                .child(section_heading(
                    cx,
                    "Skills & Technologies",
                    "Tools and practices I rely on to ship reliable products",
                ))
                .child(
                    el("div").class("grid md:grid-cols-2 lg:grid-cols-3 gap-6").children(
                        groups
                            .iter()
                            .enumerate()
                            .map(|(i, group)| skill_card(cx, group, i)),
                    ),
                ),
        )
}

fn skill_card(cx: &RenderCx, group: &SkillGroup, index: usize) -> Element {
    let t = cx.tokens();

    let badge = el("div")
        .class(format!(
            "p-3 bg-gradient-to-br {} rounded-xl relative overflow-hidden",
            t.gradient_bg
        ))
        .child(el("div").class(format!(
            "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-20 transition-opacity",
            t.gradient
        )))
        .child(icon(&group.icon, format!("w-6 h-6 {} relative z-10", t.accent.text())));

    let items = group.items.iter().map(|item| {
        el("span")
            .class(format!(
                "px-3 py-1 {} border {} rounded-full {} {} {} transition-all duration-300 cursor-default",
                t.input.bg(),
                t.border_at(20).border(),
                t.text_secondary.text(),
                t.accent.hover_text(),
                t.border_at(40).hover_border()
            ))
            .text(item.as_str())
    });

    el("div")
        .class(format!(
            "backdrop-blur-xl {} border {} rounded-2xl p-6 {} transition-all duration-500 hover:shadow-lg {} group",
            t.surface.bg(),
            t.border_tint.border(),
            t.border_at(40).hover_border(),
            t.shadow.alpha(20).hover_shadow()
        ))
        .child(
            el("div").class("flex items-center gap-4 mb-6").child(badge).child(
                el("h3")
                    .class(format!("{} transition-all duration-300", t.text_primary.text()))
                    .text(group.title.as_str()),
            ),
        )
        .child(el("div").class("flex flex-wrap gap-2").children(items))
        .child(
            el("div")
                .class(format!("mt-4 pt-4 border-t {}", t.border_at(10).border()))
                .child(
                    el("div")
                        .class(format!("h-1.5 {} rounded-full overflow-hidden", t.input.bg()))
                        .child(
                            el("div")
                                .class(format!("h-full bg-gradient-to-r {} rounded-full", t.gradient))
                                .style(format!("width: {}%;", proficiency(index))),
                        ),
                ),
        )
}

/// Decorative bar width between 75% and 95%, fixed per card position
fn proficiency(index: usize) -> usize {
    75 + (index * 7) % 21
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use vitrine_theme::{ColorScheme, ThemeMode, ThemeState, ThemeStore};

    #[test]
    fn cards_use_mode_border_tint() {
        let config = SiteConfig::default();

        let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Green, ThemeMode::Dark));
        let html = skills(&RenderCx::new(&store), &config.skills).to_html();
        assert!(html.contains("border border-green-500/10 rounded-2xl"));

        store.set_theme_mode(ThemeMode::Light);
        let html = skills(&RenderCx::new(&store), &config.skills).to_html();
        assert!(html.contains("border border-green-500/20 rounded-2xl"));
    }

    #[test]
    fn every_item_is_rendered() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        let config = SiteConfig::default();
        let html = skills(&RenderCx::new(&store), &config.skills).to_html();

        for group in &config.skills {
            for item in &group.items {
                assert!(html.contains(&format!(">{}</span>", html_escape::encode_text(item))));
            }
        }
    }

    #[test]
    fn proficiency_stays_in_range() {
        for i in 0..50 {
            assert!((75..=95).contains(&proficiency(i)));
        }
    }
}
