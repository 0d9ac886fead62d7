//! Bootstrap navigation helpers: breadcrumb trails and nested menus
//! rendered from a hierarchical page tree.

mod config;
mod error;
pub mod helpers;
mod html;
pub mod navigation;
mod translate;

pub use config::{Config, Mode, TreeFile};
pub use error::{NavigationError, Result};
pub use helpers::accept::{
    AcceptFilter, AcceptFilterFactory, AcceptHelper, AcceptOptions, Authorization,
    DefaultAcceptFactory,
};
pub use helpers::active::{ActivePage, FindActive};
pub use helpers::options::{
    BreadcrumbsOptions, Direction, ListStyle, MenuDefaults, MenuOptions, MenuOptionsInput, SubLink,
};
pub use helpers::partial::{Partial, PartialModel, PartialRenderer};
pub use helpers::{BoundBreadcrumbs, BoundMenu, Breadcrumbs, HelperContext, Menu, ViewHelper};
pub use html::{Attributes, ElementRenderer, HtmlElement, RESERVED_ATTRIBUTES, escape, join_classes};
pub use navigation::{Container, Navigation, NavigationDocument, Page, PageDocument, PageId, Walk};
pub use translate::{Catalog, DEFAULT_TEXT_DOMAIN, Translator};
