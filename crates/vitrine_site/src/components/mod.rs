//! Presentational components
//!
//! Each component is a plain function from the render context (and its
//! content) to an [`Element`]. Components only read the theme; the
//! [`switcher::ThemeSwitcher`] is the single place that changes it.

pub mod background;
pub mod banner;
pub mod contact;
pub mod cursor;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod switcher;

use crate::context::RenderCx;
use crate::html::{el, Element};

/// Centered section title with gradient text and a subtitle
pub(crate) fn section_heading(cx: &RenderCx, title: &str, subtitle: &str) -> Element {
    let t = cx.tokens();
    el("div")
        .class("text-center mb-16")
        .child(
            el("h2")
                .class(format!(
                    "mb-6 bg-gradient-to-r {} bg-clip-text text-transparent text-5xl pb-4 border-b-4 {} inline-block",
                    t.gradient,
                    t.border_at(30).border()
                ))
                .text(title),
        )
        .child(
            el("p")
                .class(format!("{} max-w-2xl mx-auto mt-6", t.text_tertiary.text()))
                .text(subtitle),
        )
}
