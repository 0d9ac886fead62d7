//! HTML element builder and escaping helpers.
//!
//! Helpers never concatenate attribute values by hand. Element output goes
//! through [`HtmlElement`], and text escaping goes through maud so that the
//! escaping rules match the rest of the generated markup.

use maud::html;
use std::fmt;

/// Keys that describe sitemap metadata and must never reach HTML output.
pub const RESERVED_ATTRIBUTES: &[&str] = &["lastmod", "changefreq", "priority"];

/// Ordered attribute list for a single element.
///
/// Setting an existing name replaces its value in place, so rendering order
/// stays the order in which names were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Sets an attribute only when a value is present.
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    /// Copies custom attributes, skipping reserved sitemap keys.
    pub fn extend_custom<'a, I>(&mut self, custom: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (name, value) in custom {
            if !RESERVED_ATTRIBUTES.contains(&name.as_str()) {
                self.set(name.as_str(), value.as_str());
            }
        }
        self
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Renders an element name, attributes and pre-rendered content to HTML.
pub trait HtmlElement: Send + Sync {
    /// Builds `<element attrs>content</element>`.
    ///
    /// `content` is inserted verbatim; callers escape it beforehand.
    fn to_html(&self, element: &str, attributes: &Attributes, content: &str) -> String;
}

/// Default element builder.
///
/// Drops attributes with empty values and escapes values for double-quoted
/// attribute context.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementRenderer;

impl HtmlElement for ElementRenderer {
    fn to_html(&self, element: &str, attributes: &Attributes, content: &str) -> String {
        let mut out = String::with_capacity(element.len() * 2 + content.len() + 16);
        out.push('<');
        out.push_str(element);
        for (name, value) in attributes.iter() {
            if value.is_empty() || RESERVED_ATTRIBUTES.contains(&name) {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');
        out.push_str(content);
        out.push_str("</");
        out.push_str(element);
        out.push('>');
        out
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter().filter(|(_, v)| !v.is_empty()) {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        Ok(())
    }
}

/// Escapes text for HTML element and attribute context.
pub fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Joins class names with single spaces, skipping empty and duplicate entries.
pub fn join_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    for class in classes.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}
