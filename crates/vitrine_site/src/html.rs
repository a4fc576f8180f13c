//! Minimal HTML element builder
//!
//! ```rust
//! use vitrine_site::html::el;
//!
//! let link = el("a").attr("href", "#projects").class("px-4 py-2").text("Projects");
//! assert_eq!(link.to_html(), r##"<a href="#projects" class="px-4 py-2">Projects</a>"##);
//! ```

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

const VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta", "source"];

/// A node in the element tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup, inserted verbatim (inline `<style>` bodies)
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An HTML element with attributes, classes and children
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Node>,
}

/// Create an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        classes: Vec::new(),
        children: Vec::new(),
    }
}

/// Icon placeholder resolved client-side by the icon script
pub fn icon(name: &str, classes: impl Into<String>) -> Element {
    el("i").attr("data-lucide", name).class(classes)
}

impl Element {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Set an attribute, replacing an existing value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn style(self, style: impl Into<String>) -> Self {
        self.attr("style", style)
    }

    /// Append one or more space-separated classes; empty input is ignored
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        let trimmed = classes.trim();
        if !trimmed.is_empty() {
            self.classes.push(trimmed.to_string());
        }
        self
    }

    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    /// Depth-first search for an element by `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(e) => e.find_by_id(id),
            _ => None,
        })
    }

    /// Serialize to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, encode_double_quoted_attribute(value));
        }
        if !self.classes.is_empty() {
            let class_list = self.class_list();
            let _ = write!(out, " class=\"{}\"", encode_double_quoted_attribute(&class_list));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(t) => out.push_str(&encode_text(t)),
                Node::Raw(r) => out.push_str(r),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}
