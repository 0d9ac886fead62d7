//! Hierarchical navigation model.
//!
//! Pages live in an arena owned by [`Navigation`] and are addressed through
//! [`PageId`] handles. Parent links are plain handles, so the tree can be
//! walked upwards (breadcrumbs) and downwards (menus) without reference
//! counting.

mod loader;
mod page;
mod tree;

pub use loader::{NavigationDocument, PageDocument};
pub use page::Page;
pub use tree::{Container, Navigation, PageId, Walk};
