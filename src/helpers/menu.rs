//! Nested menu helper
//!
//! Two rendering modes share the same item markup:
//!
//! - Full tree: depth-first walk emitting nested lists. Depth changes are
//!   tracked with a stack of open list levels so that every opened `<li>`
//!   and list element is closed exactly once, whatever the visiting order.
//! - Deepest active branch: a single flat list with the children (or
//!   siblings) of the deepest active page.

use super::accept::AcceptFilter;
use super::options::{MenuDefaults, MenuOptions, MenuOptionsInput, SubLink};
use super::partial::{Partial, PartialModel};
use super::{HelperContext, ViewHelper};
use crate::error::Result;
use crate::html::{Attributes, join_classes};
use crate::navigation::{Container, Navigation, PageId};
use std::collections::BTreeMap;
use std::fmt;

/// Renders Bootstrap navs and dropdown menus
///
/// # Examples
///
/// ```
/// use bootnav::{Menu, MenuOptionsInput, Navigation, Page};
///
/// let mut nav = Navigation::new();
/// nav.add_page(Page::new("Home").with_uri("/").with_active(true));
/// nav.add_page(Page::new("About").with_uri("/about"));
///
/// let html = Menu::new().render_menu(&nav, None, &MenuOptionsInput::default())?;
/// assert!(html.starts_with(r#"<ul class="nav">"#));
/// assert!(html.contains(r#"<a href="/" class="nav-link active" aria-current="page">Home</a>"#));
/// # Ok::<(), bootnav::NavigationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Menu {
    context: HelperContext,
    defaults: MenuDefaults,
}

impl ViewHelper for Menu {
    fn context_mut(&mut self) -> &mut HelperContext {
        &mut self.context
    }
}

/// Markup computed for a single menu entry.
struct RenderedItem {
    li_attributes: Attributes,
    element: String,
    details: bool,
    id: Option<String>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.defaults.indent = indent.into();
        self
    }

    /// Unit repeated per nesting step.
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.defaults.indent_unit = unit.into();
        self
    }

    pub fn with_ul_class(mut self, ul_class: impl Into<String>) -> Self {
        self.defaults.ul_class = Some(ul_class.into());
        self
    }

    pub fn with_min_depth(mut self, min_depth: usize) -> Self {
        self.defaults.min_depth = min_depth;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.defaults.max_depth = max_depth;
        self
    }

    pub fn with_only_active_branch(mut self, only_active_branch: bool) -> Self {
        self.defaults.only_active_branch = only_active_branch;
        self
    }

    pub fn with_render_parents(mut self, render_parents: bool) -> Self {
        self.defaults.render_parents = render_parents;
        self
    }

    pub fn with_add_class_to_list_item(mut self, add: bool) -> Self {
        self.defaults.add_class_to_list_item = add;
        self
    }

    pub fn with_escape_labels(mut self, escape_labels: bool) -> Self {
        self.defaults.escape_labels = escape_labels;
        self
    }

    pub fn with_li_active_class(mut self, class: impl Into<String>) -> Self {
        self.defaults.li_active_class = class.into();
        self
    }

    pub fn defaults(&self) -> &MenuDefaults {
        &self.defaults
    }

    /// Normalizes sparse options against this helper's defaults.
    pub fn normalize_options(&self, input: &MenuOptionsInput) -> MenuOptions {
        MenuOptions::normalize(input, &self.defaults)
    }

    /// Renders with the configured partial, or the default menu otherwise.
    pub fn render(&self, nav: &Navigation, container: Option<Container>) -> Result<String> {
        if self.context.has_partial() {
            return self.render_partial(nav, container, None);
        }
        self.render_menu(nav, container, &MenuOptionsInput::default())
    }

    /// Renders the menu for `container` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NavigationError::UnknownPage`] when the container
    /// is not part of `nav`.
    pub fn render_menu(
        &self,
        nav: &Navigation,
        container: Option<Container>,
        input: &MenuOptionsInput,
    ) -> Result<String> {
        let options = self.normalize_options(input);
        self.render_with(nav, container, &options)
    }

    /// Renders the active branch only, starting from the deepest active
    /// page's children (or siblings).
    ///
    /// Depth bounds set with [`Self::with_min_depth`] and
    /// [`Self::with_max_depth`] are ignored: the whole container is searched.
    pub fn render_sub_menu(
        &self,
        nav: &Navigation,
        container: Option<Container>,
        ul_class: Option<&str>,
        indent: Option<&str>,
        li_active_class: Option<&str>,
    ) -> Result<String> {
        let input = MenuOptionsInput {
            ul_class: ul_class.map(String::from),
            indent: indent.map(String::from),
            li_active_class: li_active_class.map(String::from),
            only_active_branch: Some(true),
            render_parents: Some(false),
            escape_labels: Some(true),
            add_class_to_list_item: Some(false),
            ..MenuOptionsInput::default()
        };
        let mut options = self.normalize_options(&input);
        options.min_depth = 0;
        options.max_depth = None;
        self.render_with(nav, container, &options)
    }

    /// Renders through the partial delegate with the container as model.
    ///
    /// # Errors
    ///
    /// Partial configuration errors are raised before the delegate runs.
    pub fn render_partial(
        &self,
        nav: &Navigation,
        container: Option<Container>,
        partial: Option<&Partial>,
    ) -> Result<String> {
        self.render_partial_with_params(nav, container, partial, BTreeMap::new())
    }

    pub fn render_partial_with_params(
        &self,
        nav: &Navigation,
        container: Option<Container>,
        partial: Option<&Partial>,
        params: BTreeMap<String, String>,
    ) -> Result<String> {
        let script = self.context.resolve_partial(partial)?;
        let container = self.context.resolve_container(nav, container)?;
        let model = PartialModel {
            navigation: nav,
            container,
            pages: Vec::new(),
            params,
        };
        self.context.render_partial(script, &model)
    }

    /// Renders with already normalized options.
    pub fn render_with(
        &self,
        nav: &Navigation,
        container: Option<Container>,
        options: &MenuOptions,
    ) -> Result<String> {
        let container = self.context.resolve_container(nav, container)?;
        let filter = self.context.filter();

        if options.only_active_branch && !options.render_parents {
            tracing::debug!(?container, "Rendering deepest active branch");
            self.render_deepest_menu(nav, container, options, filter.as_ref())
        } else {
            tracing::debug!(?container, "Rendering full menu");
            self.render_normal_menu(nav, container, options, filter.as_ref())
        }
    }

    fn render_normal_menu(
        &self,
        nav: &Navigation,
        container: Container,
        options: &MenuOptions,
        filter: &dyn AcceptFilter,
    ) -> Result<String> {
        let found = self.context.find_active(
            nav,
            filter,
            container,
            options.min_depth,
            options.max_depth,
        );

        let mut writer = MenuWriter::new(options);

        for (id, depth) in nav.walk(container, options.max_depth) {
            if depth < options.min_depth || !filter.accept(nav, id, true) {
                continue;
            }

            if options.only_active_branch && !nav.is_active(id, true) {
                let on_branch = found.is_some_and(|found| {
                    if nav.has_page(Container::Page(found.page), id) {
                        // direct child of the active page
                        return true;
                    }
                    // sibling, when the active page shows no children
                    nav.has_page(nav.container_of(found.page), id)
                        && (!self.has_sub_pages(nav, filter, found.page, found.depth, None)
                            || options.max_depth.is_some_and(|max| found.depth + 1 > max))
                });
                if !on_branch {
                    continue;
                }
            }

            let has_children = self.has_sub_pages(nav, filter, id, depth, options.max_depth);
            let level = writer.advance(depth - options.min_depth);
            let item = self.render_item(nav, id, level, has_children, options)?;
            writer.push_item(level, item);
        }

        Ok(writer.finish())
    }

    fn render_deepest_menu(
        &self,
        nav: &Navigation,
        container: Container,
        options: &MenuOptions,
        filter: &dyn AcceptFilter,
    ) -> Result<String> {
        let Some(found) = self.context.find_active(
            nav,
            filter,
            container,
            options.min_depth.saturating_sub(1),
            options.max_depth,
        ) else {
            return Ok(String::new());
        };

        let has_children = self.has_sub_pages(nav, filter, found.page, found.depth, None);
        let root = if found.depth < options.min_depth {
            // one level above the cutoff: only its children qualify
            if !has_children {
                return Ok(String::new());
            }
            Container::Page(found.page)
        } else if !has_children || options.max_depth.is_some_and(|max| found.depth + 1 > max) {
            nav.container_of(found.page)
        } else {
            Container::Page(found.page)
        };

        let mut writer = MenuWriter::new(options);
        for child in nav.children(root) {
            if !filter.accept(nav, *child, true) {
                continue;
            }
            let level = writer.advance(0);
            let item = self.render_item(nav, *child, level, false, options)?;
            writer.push_item(level, item);
        }

        Ok(writer.finish())
    }

    /// True when `id` has an accepted child within `max_depth`.
    fn has_sub_pages(
        &self,
        nav: &Navigation,
        filter: &dyn AcceptFilter,
        id: PageId,
        depth: usize,
        max_depth: Option<usize>,
    ) -> bool {
        max_depth.is_none_or(|max| depth < max)
            && nav
                .children(Container::Page(id))
                .iter()
                .any(|child| filter.accept(nav, *child, true))
    }

    fn render_item(
        &self,
        nav: &Navigation,
        id: PageId,
        level: usize,
        has_children: bool,
        options: &MenuOptions,
    ) -> Result<RenderedItem> {
        let page = nav.page(id)?;
        let active = nav.is_active(id, true);
        let details = has_children && options.sublink == SubLink::Details;
        let toggle = has_children && !details;

        let li_class = join_classes([
            if level == 0 { options.li_class.as_str() } else { "" },
            if has_children { options.direction.class() } else { "" },
            if active { options.li_active_class.as_str() } else { "" },
            match page.class() {
                Some(class) if options.add_class_to_list_item => class,
                _ => "",
            },
        ]);
        let mut li_attributes = Attributes::new();
        li_attributes.set("class", li_class);

        let element = match (has_children, options.sublink) {
            (true, SubLink::Details) => "summary",
            (true, SubLink::Button) => "button",
            (true, SubLink::Span) => "span",
            _ if page.href().is_none() => "span",
            _ => "a",
        };

        let mut attributes = Attributes::new();
        attributes.set_opt("id", page.id()).set_opt(
            "title",
            page.title()
                .map(|t| self.context.translate(t, page))
                .as_deref(),
        );
        if element == "a" {
            attributes
                .set_opt("href", page.href())
                .set_opt("target", page.target());
        }
        if element == "button" {
            attributes.set("type", "button");
        }
        attributes.set(
            "class",
            join_classes([
                if level == 0 { "nav-link" } else { "dropdown-item" },
                if toggle { "dropdown-toggle" } else { "" },
                if active { "active" } else { "" },
                match page.class() {
                    Some(class) if !options.add_class_to_list_item => class,
                    _ => "",
                },
            ]),
        );
        if nav.is_active(id, false) {
            attributes.set("aria-current", "page");
        }
        if toggle {
            attributes
                .set("data-bs-toggle", "dropdown")
                .set("aria-expanded", "false");
            if element != "button" {
                attributes.set("role", "button");
            }
        }
        attributes.extend_custom(page.attributes());

        let label = self.context.label(page, options.escape_labels);
        Ok(RenderedItem {
            li_attributes,
            element: self.context.element().to_html(element, &attributes, &label),
            details,
            id: page.id().map(String::from),
        })
    }

    /// Binds the helper to a tree for `Display` based rendering.
    pub fn bind<'a>(&'a self, nav: &'a Navigation) -> BoundMenu<'a> {
        BoundMenu { helper: self, nav }
    }
}

/// One open list element and whether its current item sits in `<details>`.
struct ListLevel {
    depth: usize,
    details_open: bool,
    /// Extra indent units from enclosing `<details>` wrappers.
    offset: usize,
}

/// Accumulates menu markup while keeping open tags balanced.
struct MenuWriter<'o> {
    options: &'o MenuOptions,
    html: String,
    levels: Vec<ListLevel>,
    last_item_id: Option<String>,
}

impl<'o> MenuWriter<'o> {
    fn new(options: &'o MenuOptions) -> Self {
        Self {
            options,
            html: String::new(),
            levels: Vec::new(),
            last_item_id: None,
        }
    }

    fn indent(&self, level: usize, extra: usize) -> String {
        format!(
            "{}{}",
            self.options.indent,
            self.options
                .indent_unit
                .repeat(level * 2 + extra + self.levels.get(level).map_or(0, |l| l.offset))
        )
    }

    /// Moves to `depth`, opening or closing tags as needed.
    ///
    /// Returns the nesting level the next item is rendered at.
    fn advance(&mut self, depth: usize) -> usize {
        loop {
            match self.levels.last() {
                None => {
                    self.open_list(depth);
                    break;
                }
                Some(level) if level.depth > depth => {
                    self.close_item();
                    self.close_list();
                }
                Some(level) if level.depth < depth => {
                    self.open_list(depth);
                    break;
                }
                Some(_) => {
                    self.close_item();
                    break;
                }
            }
        }
        self.levels.len() - 1
    }

    fn open_list(&mut self, depth: usize) {
        let level = self.levels.len();
        let mut attributes = Attributes::new();
        if level == 0 {
            attributes
                .set("class", self.options.ul_class.as_str())
                .set_opt("role", self.options.role.as_deref());
        } else {
            attributes.set(
                "class",
                join_classes([
                    "dropdown-menu",
                    if self.options.dark { "dropdown-menu-dark" } else { "" },
                ]),
            );
            attributes.set_opt("aria-labelledby", self.last_item_id.as_deref());
        }
        let offset = self
            .levels
            .last()
            .map_or(0, |parent| parent.offset + usize::from(parent.details_open));
        self.levels.push(ListLevel {
            depth,
            details_open: false,
            offset,
        });
        let line = format!(
            "{}<{}{}>\n",
            self.indent(level, 0),
            self.options.style.tag(),
            attributes
        );
        self.html.push_str(&line);
    }

    fn push_item(&mut self, level: usize, item: RenderedItem) {
        let li = format!("{}<li{}>\n", self.indent(level, 1), item.li_attributes);
        self.html.push_str(&li);
        if item.details {
            let open = format!("{}<details>\n", self.indent(level, 2));
            self.html.push_str(&open);
        }
        let extra = if item.details { 3 } else { 2 };
        let element = format!("{}{}\n", self.indent(level, extra), item.element);
        self.html.push_str(&element);

        if let Some(current) = self.levels.last_mut() {
            current.details_open = item.details;
        }
        self.last_item_id = item.id;
    }

    fn close_item(&mut self) {
        let Some(level) = self.levels.len().checked_sub(1) else {
            return;
        };
        if self.levels[level].details_open {
            let close = format!("{}</details>\n", self.indent(level, 2));
            self.html.push_str(&close);
            self.levels[level].details_open = false;
        }
        let close = format!("{}</li>\n", self.indent(level, 1));
        self.html.push_str(&close);
    }

    fn close_list(&mut self) {
        let Some(level) = self.levels.len().checked_sub(1) else {
            return;
        };
        let close = format!("{}</{}>\n", self.indent(level, 0), self.options.style.tag());
        self.html.push_str(&close);
        self.levels.pop();
    }

    fn finish(mut self) -> String {
        while !self.levels.is_empty() {
            self.close_item();
            self.close_list();
        }
        if self.html.ends_with('\n') {
            self.html.pop();
        }
        self.html
    }
}

/// Menu bound to a navigation tree.
///
/// `Display` never fails: rendering errors are logged and produce no
/// output.
pub struct BoundMenu<'a> {
    helper: &'a Menu,
    nav: &'a Navigation,
}

impl fmt::Display for BoundMenu<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.helper.render(self.nav, None) {
            Ok(html) => f.write_str(&html),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render menu");
                Ok(())
            }
        }
    }
}
