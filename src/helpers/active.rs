//! Deepest active page lookup.

use super::accept::AcceptFilter;
use crate::navigation::{Container, Navigation, PageId};

/// Result of an active page lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePage {
    pub page: PageId,
    /// Depth relative to the searched container (children at 0).
    pub depth: usize,
}

/// Finds the deepest accepted page whose own active flag is set.
pub struct FindActive<'a> {
    filter: &'a dyn AcceptFilter,
}

impl<'a> FindActive<'a> {
    pub fn new(filter: &'a dyn AcceptFilter) -> Self {
        Self { filter }
    }

    /// Searches `container` for the deepest active page in
    /// `[min_depth, max_depth]`.
    ///
    /// Among pages at equal depth the first in document order wins.
    pub fn find(
        &self,
        nav: &Navigation,
        container: Container,
        min_depth: usize,
        max_depth: Option<usize>,
    ) -> Option<ActivePage> {
        let mut found: Option<ActivePage> = None;
        for (page, depth) in nav.walk(container, max_depth) {
            if depth < min_depth || !self.filter.accept(nav, page, true) {
                continue;
            }
            if !nav.is_active(page, false) {
                continue;
            }
            if found.is_none_or(|f| depth > f.depth) {
                found = Some(ActivePage { page, depth });
            }
        }
        found
    }
}
