//! Breadcrumb trail helper

use super::options::{BreadcrumbsOptions, ListStyle};
use super::partial::{Partial, PartialModel};
use super::{HelperContext, ViewHelper};
use crate::error::Result;
use crate::html::{Attributes, join_classes};
use crate::navigation::{Container, Navigation, Page, PageId};
use maud::{PreEscaped, html};
use std::collections::BTreeMap;
use std::fmt;

/// Renders Bootstrap breadcrumb trails
///
/// Walks from the deepest active page up to the container and emits one
/// `breadcrumb-item` per page, root first. The active page is marked with
/// `aria-current="page"`.
///
/// # Examples
///
/// ```
/// use bootnav::{Breadcrumbs, Navigation, Page};
///
/// let mut nav = Navigation::new();
/// let home = nav.add_page(Page::new("Home").with_uri("/"));
/// nav.add_child(home, Page::new("Docs").with_uri("/docs").with_active(true))?;
///
/// let html = Breadcrumbs::new().render_straight(&nav, None)?;
/// assert!(html.contains(r#"<li class="breadcrumb-item"><a href="/">Home</a></li>"#));
/// assert!(html.contains(r#"<li class="breadcrumb-item active" aria-current="page">Docs</li>"#));
/// # Ok::<(), bootnav::NavigationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Breadcrumbs {
    context: HelperContext,
    separator: String,
    link_last: bool,
    min_depth: usize,
    max_depth: Option<usize>,
    indent: String,
    indent_unit: String,
    style: ListStyle,
}

impl Default for Breadcrumbs {
    fn default() -> Self {
        Self {
            context: HelperContext::default(),
            separator: "\n".to_string(),
            link_last: false,
            min_depth: 1,
            max_depth: None,
            indent: String::new(),
            indent_unit: "    ".to_string(),
            style: ListStyle::Unordered,
        }
    }
}

impl ViewHelper for Breadcrumbs {
    fn context_mut(&mut self) -> &mut HelperContext {
        &mut self.context
    }
}

impl Breadcrumbs {
    pub fn new() -> Self {
        Self::default()
    }

    /// String placed between consecutive items.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Render the active page as a link instead of plain text.
    pub fn with_link_last(mut self, link_last: bool) -> Self {
        self.link_last = link_last;
        self
    }

    pub fn with_min_depth(mut self, min_depth: usize) -> Self {
        self.min_depth = min_depth;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_style(mut self, style: ListStyle) -> Self {
        self.style = style;
        self
    }

    /// Applies settings loaded from configuration; absent keys keep the
    /// current values.
    pub fn with_options(mut self, options: &BreadcrumbsOptions) -> Self {
        if let Some(separator) = &options.separator {
            self.separator = separator.clone();
        }
        if let Some(link_last) = options.link_last {
            self.link_last = link_last;
        }
        if let Some(min_depth) = options.min_depth {
            self.min_depth = min_depth;
        }
        if options.max_depth.is_some() {
            self.max_depth = options.max_depth;
        }
        if let Some(indent) = &options.indent {
            self.indent = indent.clone();
        }
        if let Some(style) = options.style {
            self.style = style;
        }
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn link_last(&self) -> bool {
        self.link_last
    }

    pub fn min_depth(&self) -> usize {
        self.min_depth
    }

    /// Renders with the configured partial, or straight markup otherwise.
    pub fn render(&self, nav: &Navigation, container: Option<Container>) -> Result<String> {
        if self.context.has_partial() {
            return self.render_partial(nav, container, None);
        }
        self.render_straight(nav, container)
    }

    /// Renders the breadcrumb trail as Bootstrap markup.
    ///
    /// Returns an empty string when no accepted page is active within the
    /// configured depth bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NavigationError::UnknownPage`] when the container is
    /// not part of `nav`.
    pub fn render_straight(&self, nav: &Navigation, container: Option<Container>) -> Result<String> {
        let Some(trail) = self.trail(nav, container)? else {
            return Ok(String::new());
        };

        let item_indent = format!("{}{}{}", self.indent, self.indent_unit, self.indent_unit);
        let last = trail.len() - 1;
        let mut items = Vec::with_capacity(trail.len());

        for (index, id) in trail.iter().enumerate() {
            let page = nav.page(*id)?;
            let current = index == last;
            let content = if current && !self.link_last {
                self.context.label(page, true)
            } else {
                self.htmlify(page)
            };
            items.push(format!("{}{}", item_indent, list_item(page, &content, current)));
        }

        let tag = self.style.tag();
        let outer = &self.indent;
        let inner = format!("{}{}", self.indent, self.indent_unit);
        Ok(format!(
            "{outer}<nav aria-label=\"breadcrumb\">\n{inner}<{tag} class=\"breadcrumb\">\n{}\n{inner}</{tag}>\n{outer}</nav>",
            items.join(&self.separator)
        ))
    }

    /// Renders through the partial delegate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NavigationError::PartialNotConfigured`] when neither
    /// `partial` nor a configured partial is available, and
    /// [`crate::NavigationError::MalformedPartial`] for lists without exactly
    /// two entries. Both are raised before the delegate is called.
    pub fn render_partial(
        &self,
        nav: &Navigation,
        container: Option<Container>,
        partial: Option<&Partial>,
    ) -> Result<String> {
        self.render_partial_with_params(nav, container, partial, BTreeMap::new())
    }

    /// Like [`Self::render_partial`], merging `params` into the model.
    pub fn render_partial_with_params(
        &self,
        nav: &Navigation,
        container: Option<Container>,
        partial: Option<&Partial>,
        params: BTreeMap<String, String>,
    ) -> Result<String> {
        let script = self.context.resolve_partial(partial)?;
        let container = self.context.resolve_container(nav, container)?;
        let pages = self.trail(nav, Some(container))?.unwrap_or_default();

        let model = PartialModel {
            navigation: nav,
            container,
            pages,
            params,
        };
        self.context.render_partial(script, &model)
    }

    /// Root-to-leaf trail ending at the deepest active page.
    fn trail(&self, nav: &Navigation, container: Option<Container>) -> Result<Option<Vec<PageId>>> {
        let container = self.context.resolve_container(nav, container)?;
        let filter = self.context.filter();
        let Some(active) = self.context.find_active(
            nav,
            filter.as_ref(),
            container,
            self.min_depth,
            self.max_depth,
        ) else {
            return Ok(None);
        };

        let mut trail = vec![active.page];
        let mut current = active.page;
        while let Some(parent) = nav.parent(current) {
            if container == Container::Page(parent) {
                break;
            }
            trail.push(parent);
            current = parent;
        }
        trail.reverse();
        Ok(Some(trail))
    }

    /// Link (or span without href) for one crumb.
    fn htmlify(&self, page: &Page) -> String {
        let mut attributes = Attributes::new();
        attributes
            .set_opt("id", page.id())
            .set_opt(
                "title",
                page.title().map(|t| self.context.translate(t, page)).as_deref(),
            )
            .set_opt("class", page.class());

        let element = match page.href() {
            Some(href) => {
                attributes.set("href", href).set_opt("target", page.target());
                "a"
            }
            None => "span",
        };
        attributes.extend_custom(page.attributes());

        self.context
            .element()
            .to_html(element, &attributes, &self.context.label(page, true))
    }

    /// Binds the helper to a tree for `Display` based rendering.
    pub fn bind<'a>(&'a self, nav: &'a Navigation) -> BoundBreadcrumbs<'a> {
        BoundBreadcrumbs { helper: self, nav }
    }
}

fn list_item(page: &Page, content: &str, current: bool) -> String {
    let class = join_classes([
        "breadcrumb-item",
        if current { "active" } else { "" },
        page.property("liClass").unwrap_or(""),
    ]);
    let markup = html! {
        @if current {
            li class=(class) aria-current="page" { (PreEscaped(content)) }
        } @else {
            li class=(class) { (PreEscaped(content)) }
        }
    };
    markup.into_string()
}

/// Breadcrumbs bound to a navigation tree.
///
/// `Display` never fails: rendering errors are logged and produce no
/// output.
pub struct BoundBreadcrumbs<'a> {
    helper: &'a Breadcrumbs,
    nav: &'a Navigation,
}

impl fmt::Display for BoundBreadcrumbs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.helper.render(self.nav, None) {
            Ok(html) => f.write_str(&html),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render breadcrumbs");
                Ok(())
            }
        }
    }
}
