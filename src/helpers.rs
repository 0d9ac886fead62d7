//! Bootstrap navigation view helpers.
//!
//! [`Breadcrumbs`] and [`Menu`] share a [`HelperContext`] holding the
//! injected collaborators: acceptance filter factory, translator, element
//! builder and partial delegate. Nothing is looked up globally; every
//! collaborator is passed in through [`ViewHelper`] builder methods.

pub mod accept;
pub mod active;
mod breadcrumbs;
mod menu;
pub mod options;
pub mod partial;

pub use breadcrumbs::{BoundBreadcrumbs, Breadcrumbs};
pub use menu::{BoundMenu, Menu};

use crate::error::{NavigationError, Result};
use crate::html::{ElementRenderer, HtmlElement, escape};
use crate::navigation::{Container, Navigation, Page, PageId};
use crate::translate::Translator;
use accept::{AcceptFilter, AcceptFilterFactory, AcceptOptions, DefaultAcceptFactory};
use active::{ActivePage, FindActive};
use partial::{Partial, PartialModel, PartialRenderer};
use std::fmt;
use std::sync::Arc;

/// Collaborators and settings shared by all view helpers.
#[derive(Clone)]
pub struct HelperContext {
    container: Container,
    filter_factory: Arc<dyn AcceptFilterFactory>,
    accept_options: AcceptOptions,
    translator: Option<Arc<dyn Translator>>,
    element: Arc<dyn HtmlElement>,
    partial_renderer: Option<Arc<dyn PartialRenderer>>,
    partial: Option<Partial>,
}

impl Default for HelperContext {
    fn default() -> Self {
        Self {
            container: Container::Root,
            filter_factory: Arc::new(DefaultAcceptFactory::new()),
            accept_options: AcceptOptions::default(),
            translator: None,
            element: Arc::new(ElementRenderer),
            partial_renderer: None,
            partial: None,
        }
    }
}

impl fmt::Debug for HelperContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperContext")
            .field("container", &self.container)
            .field("accept_options", &self.accept_options)
            .field("translator", &self.translator.is_some())
            .field("partial_renderer", &self.partial_renderer.is_some())
            .field("partial", &self.partial)
            .finish()
    }
}

/// Filter used when the configured factory fails: rejects every page.
struct RejectAll;

impl AcceptFilter for RejectAll {
    fn accept(&self, _nav: &Navigation, _page: PageId, _recursive: bool) -> bool {
        false
    }
}

impl HelperContext {
    /// Explicit container, else the configured default.
    pub(crate) fn resolve_container(
        &self,
        nav: &Navigation,
        container: Option<Container>,
    ) -> Result<Container> {
        let container = container.unwrap_or(self.container);
        nav.check_container(container)?;
        Ok(container)
    }

    /// Builds the acceptance filter for one render call.
    ///
    /// Construction failures are logged and degrade to a filter that
    /// rejects every page.
    pub(crate) fn filter(&self) -> Box<dyn AcceptFilter> {
        match self.filter_factory.build(&self.accept_options) {
            Ok(filter) => filter,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build acceptance filter");
                Box::new(RejectAll)
            }
        }
    }

    pub(crate) fn find_active(
        &self,
        nav: &Navigation,
        filter: &dyn AcceptFilter,
        container: Container,
        min_depth: usize,
        max_depth: Option<usize>,
    ) -> Option<ActivePage> {
        let found = FindActive::new(filter).find(nav, container, min_depth, max_depth);
        if found.is_none() {
            tracing::debug!(min_depth, ?max_depth, "No active page found");
        }
        found
    }

    /// Translates a message in the page's text domain.
    pub(crate) fn translate(&self, message: &str, page: &Page) -> String {
        match &self.translator {
            Some(translator) => translator.translate(message, page.text_domain()),
            None => message.to_string(),
        }
    }

    /// Translated page label, escaped when requested.
    pub(crate) fn label(&self, page: &Page, escape_label: bool) -> String {
        let label = self.translate(page.label(), page);
        if escape_label { escape(&label) } else { label }
    }

    pub(crate) fn element(&self) -> &dyn HtmlElement {
        self.element.as_ref()
    }

    /// Resolves the partial script, preferring an explicit argument.
    pub(crate) fn resolve_partial<'a>(&'a self, partial: Option<&'a Partial>) -> Result<&'a str> {
        partial
            .or(self.partial.as_ref())
            .ok_or(NavigationError::PartialNotConfigured)?
            .script()
    }

    pub(crate) fn has_partial(&self) -> bool {
        self.partial.is_some()
    }

    pub(crate) fn render_partial(&self, script: &str, model: &PartialModel<'_>) -> Result<String> {
        let renderer = self.partial_renderer.as_ref().ok_or_else(|| {
            NavigationError::Template(format!("no partial renderer for '{}'", script))
        })?;
        tracing::debug!(script, pages = model.pages.len(), "Rendering partial");
        renderer.render(script, model)
    }
}

/// Builder methods shared by view helpers.
pub trait ViewHelper: Sized {
    fn context_mut(&mut self) -> &mut HelperContext;

    /// Default container used when a render call does not pass one.
    fn with_container(mut self, container: Container) -> Self {
        self.context_mut().container = container;
        self
    }

    fn with_filter_factory(mut self, factory: Arc<dyn AcceptFilterFactory>) -> Self {
        self.context_mut().filter_factory = factory;
        self
    }

    /// Role checked against page resources by the acceptance filter.
    fn with_role(mut self, role: impl Into<String>) -> Self {
        self.context_mut().accept_options.role = Some(role.into());
        self
    }

    fn with_render_invisible(mut self, render_invisible: bool) -> Self {
        self.context_mut().accept_options.render_invisible = render_invisible;
        self
    }

    fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.context_mut().translator = Some(translator);
        self
    }

    fn with_element(mut self, element: Arc<dyn HtmlElement>) -> Self {
        self.context_mut().element = element;
        self
    }

    fn with_partial_renderer(mut self, renderer: Arc<dyn PartialRenderer>) -> Self {
        self.context_mut().partial_renderer = Some(renderer);
        self
    }

    /// Partial used by `render` and by `render_partial` without argument.
    fn with_partial(mut self, partial: impl Into<Partial>) -> Self {
        self.context_mut().partial = Some(partial.into());
        self
    }
}
