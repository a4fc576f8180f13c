//! Full document assembly

use chrono::Datelike;
use tracing::debug;
use vitrine_theme::{ThemeMode, ThemeStore, COLOR_SCHEME_ATTR, THEME_MODE_ATTR};

use crate::components::{
    background::background, banner::banner, contact::contact_section, cursor::cursor_overlay,
    footer::footer, hero::hero, navbar::navbar, projects::projects, skills::skills,
    switcher::ThemeSwitcher,
};
use crate::client::client_script;
use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::context::RenderCx;
use crate::html::{el, Element};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const LUCIDE_CDN: &str = "https://unpkg.com/lucide@latest";

/// Per-render knobs that are not part of the site content
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Href of the highlighted navbar link
    pub active: String,
    /// Render the navbar in its scrolled (opaque) variant
    pub scrolled: bool,
    /// Year in the footer copyright line
    pub year: i32,
    /// Values pre-filled in the contact form
    pub form: ContactForm,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            active: "#home".to_string(),
            scrolled: false,
            year: chrono::Local::now().year(),
            form: ContactForm::default(),
        }
    }
}

/// Render the whole page for the store's current theme
pub fn render_page(store: &ThemeStore, config: &SiteConfig) -> String {
    render_page_with(store, config, &PageOptions::default())
}

pub fn render_page_with(store: &ThemeStore, config: &SiteConfig, options: &PageOptions) -> String {
    let cx = RenderCx::new(store);
    debug!(scheme = %cx.scheme(), mode = %cx.mode(), "rendering page");
    format!("<!DOCTYPE html>\n{}\n", document(&cx, config, options).to_html())
}

/// The `<html>` element, with the theme mirrored onto root attributes
pub fn document(cx: &RenderCx, config: &SiteConfig, options: &PageOptions) -> Element {
    let mut html = el("html")
        .attr("lang", config.site.lang.as_str())
        .attr(COLOR_SCHEME_ATTR, cx.scheme().id())
        .attr(THEME_MODE_ATTR, cx.mode().id());
    if cx.mode() == ThemeMode::Dark {
        html = html.class("dark");
    }
    html.child(head(cx, config)).child(body(cx, config, options))
}

fn head(cx: &RenderCx, config: &SiteConfig) -> Element {
    el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text(config.site.title.as_str()))
        .child(el("script").attr("src", TAILWIND_CDN))
        .child(el("script").attr("src", LUCIDE_CDN))
        .child(el("style").raw(root_style(cx)))
}

/// `:root` block declaring the theme's CSS variables
pub fn root_style(cx: &RenderCx) -> String {
    let mut css = String::from(":root{");
    for (name, value) in cx.tokens().to_css_variables() {
        css.push_str(&name);
        css.push(':');
        css.push_str(&value);
        css.push(';');
    }
    css.push('}');
    css
}

fn body(cx: &RenderCx, config: &SiteConfig, options: &PageOptions) -> Element {
    let t = cx.tokens();
    let switcher = ThemeSwitcher::new(cx.store());

    el("body")
        .class(format!(
            "min-h-screen {} overflow-x-hidden transition-colors duration-500",
            t.page_text.text()
        ))
        .child(background(cx))
        .child(cursor_overlay(cx))
        .child(navbar(cx, config, &options.active, options.scrolled))
        .child(
            el("main")
                .class("relative z-10")
                .child(hero(cx, config))
                .child(banner(cx, &config.banner))
                .child(projects(cx, &config.projects))
                .child(skills(cx, &config.skills))
                .child(contact_section(cx, &config.contact, &options.form)),
        )
        .child(el("div").class("relative z-10").child(footer(cx, config, options.year)))
        .child(switcher.render(cx, &config.site.lang))
        .child(el("script").raw("lucide.createIcons();"))
        .child(el("script").raw(client_script()))
}
