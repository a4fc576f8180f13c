//! Contact section: details card and the message form

use crate::components::section_heading;
use crate::config::ContactSection;
use crate::contact::{ContactField, ContactForm};
use crate::context::RenderCx;
use crate::html::{el, icon, Element};

/// Render the contact section, pre-filling the form with `form`.
pub fn contact_section(cx: &RenderCx, section: &ContactSection, form: &ContactForm) -> Element {
    el("section")
        .id("contact")
        .class("py-20 px-6")
        .child(
            el("div")
                .class("max-w-7xl mx-auto")
                .child(section_heading(cx, "Get in Touch", &section.intro))
                .child(
                    el("div")
                        .class("grid lg:grid-cols-2 gap-8")
                        .child(details_card(cx, section))
                        .child(contact_form(cx, form)),
                ),
        )
}

fn card_classes(cx: &RenderCx) -> String {
    let t = cx.tokens();
    format!(
        "backdrop-blur-xl {} border {} rounded-2xl p-8 {} transition-all duration-500",
        t.surface.bg(),
        t.border_at(10).border(),
        t.border_at(30).hover_border()
    )
}

fn details_card(cx: &RenderCx, section: &ContactSection) -> Element {
    let t = cx.tokens();

    let details = section.details.iter().map(|detail| {
        let value: Element = match &detail.href {
            Some(href) => el("a").attr("href", href.as_str()),
            None => el("span"),
        };
        el("div")
            .class("flex items-center gap-4 group")
            .child(
                el("div")
                    .class(format!(
                        "p-3 bg-gradient-to-br {} rounded-xl relative overflow-hidden",
                        t.gradient_bg
                    ))
                    .child(el("div").class(format!(
                        "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-20 transition-opacity",
                        t.gradient
                    )))
                    .child(icon(&detail.icon, format!("w-5 h-5 {} relative z-10", t.accent.text()))),
            )
            .child(
                el("div")
                    .child(
                        el("p")
                            .class(format!("{} text-sm", t.text_muted.text()))
                            .text(detail.label.as_str()),
                    )
                    .child(
                        value
                            .class(format!("{} transition-colors", t.text_primary.text()))
                            .text(detail.value.as_str()),
                    ),
            )
    });

    el("div")
        .class(card_classes(cx))
        .child(
            el("h3")
                .class(format!("mb-6 {}", t.text_primary.text()))
                .text("Contact Information"),
        )
        .child(el("div").class("space-y-6").children(details))
        .child(
            el("div")
                .class(format!("mt-8 pt-8 border-t {}", t.border_at(20).border()))
                .child(
                    el("p")
                        .class(format!("{} text-sm", t.text_tertiary.text()))
                        .text(section.availability.as_str()),
                )
                .child(el("div").class(format!("mt-3 h-2 bg-gradient-to-r {} rounded-full", t.gradient))),
        )
}

fn contact_form(cx: &RenderCx, form: &ContactForm) -> Element {
    let t = cx.tokens();
    let input_classes = format!(
        "w-full px-4 py-3 {} border {} rounded-xl {} placeholder-{} focus:outline-none focus:{} focus:ring-2 focus:ring-{} transition-all",
        t.input.bg(),
        t.border_at(20).border(),
        t.text_primary.text(),
        t.border.hue.shade(300).alpha(50),
        t.border_at(50).border(),
        t.border_at(20)
    );

    let fields = ContactField::all().map(|field| {
        let value = form.value(field);
        let control = match field {
            ContactField::Message => el("textarea")
                .attr("rows", "5")
                .class(input_classes.as_str())
                .class("resize-none")
                .text(value),
            ContactField::Email => el("input")
                .attr("type", "email")
                .attr("value", value)
                .class(input_classes.as_str()),
            ContactField::Name => el("input")
                .attr("type", "text")
                .attr("value", value)
                .class(input_classes.as_str()),
        };
        let id = format!("contact-{}", field.name());
        el("div")
            .child(
                el("label")
                    .attr("for", id.as_str())
                    .class(format!("block {} mb-2", t.text_secondary.text()))
                    .text(field.label()),
            )
            .child(
                control
                    .id(id.as_str())
                    .attr("name", field.name())
                    .attr("placeholder", field.placeholder())
                    .attr("required", ""),
            )
    });

    el("div").class(card_classes(cx)).child(
        el("form")
            .id("contact-form")
            .attr("method", "post")
            .attr("data-submit", "contact")
            .class("space-y-6")
            .children(fields)
            .child(
                el("button")
                    .attr("type", "submit")
                    .class(format!(
                        "w-full px-6 py-3 bg-gradient-to-r {} rounded-xl hover:shadow-lg {} transition-all duration-300 flex items-center justify-center gap-2 text-white relative overflow-hidden group",
                        t.gradient_btn,
                        t.shadow.alpha(50).hover_shadow()
                    ))
                    .child(el("span").class("relative z-10").text("Send Message"))
                    .child(icon("send", "w-5 h-5 relative z-10")),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use vitrine_theme::{ColorScheme, ThemeMode, ThemeState, ThemeStore};

    #[test]
    fn inputs_follow_scheme_and_mode() {
        let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Purple, ThemeMode::Dark));
        let cx = RenderCx::new(&store);
        let section = contact_section(&cx, &SiteConfig::default().contact, &ContactForm::new());
        let input = section.find_by_id("contact-email").unwrap();

        let classes = input.class_list();
        assert!(classes.contains("bg-slate-800/40"));
        assert!(classes.contains("placeholder-purple-300/50"));
        assert!(classes.contains("focus:border-purple-500/50"));
        assert!(classes.contains("focus:ring-purple-500/20"));
        assert_eq!(input.get_attr("type"), Some("email"));
    }

    #[test]
    fn form_values_are_prefilled() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        let cx = RenderCx::new(&store);
        let mut form = ContactForm::new();
        form.update(ContactField::Name, "Ada");
        form.update(ContactField::Message, "<hi>");

        let section = contact_section(&cx, &SiteConfig::default().contact, &form);
        assert_eq!(section.find_by_id("contact-name").unwrap().get_attr("value"), Some("Ada"));
        assert!(section
            .find_by_id("contact-message")
            .unwrap()
            .to_html()
            .contains("&lt;hi&gt;</textarea>"));
    }

    #[test]
    fn details_without_href_are_plain_text() {
        let store = ThemeStore::ephemeral(ThemeState::default());
        let cx = RenderCx::new(&store);
        let html = contact_section(&cx, &SiteConfig::default().contact, &ContactForm::new()).to_html();

        assert!(html.contains(r#"href="mailto:you@example.com""#));
        assert!(html.contains("Mexico City, Mexico</span>"));
    }
}
