//! Arena-backed navigation tree with parent back-references.
//!
//! Provides O(1) parent and child lookups and depth-first walks bounded by
//! an optional maximum depth.

use super::Page;
use crate::error::{NavigationError, Result};
use std::fmt;

/// Stable handle to a page inside a [`Navigation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(usize);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Subtree a helper renders from.
///
/// Children of the container are at depth 0. The container itself is never
/// rendered, neither as a menu item nor as a crumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Container {
    /// Whole navigation; top-level pages are at depth 0.
    #[default]
    Root,
    /// Sub-root page; its children are at depth 0.
    Page(PageId),
}

#[derive(Debug, Clone)]
struct Slot {
    page: Page,
    parent: Option<PageId>,
    children: Vec<PageId>,
    sort_key: i64,
}

/// In-memory navigation tree.
///
/// # Performance
///
/// - Insert: O(siblings) to keep children sorted
/// - Parent, children, page lookup: O(1)
/// - Walk: O(visited pages)
///
/// # Examples
///
/// ```
/// use bootnav::{Container, Navigation, Page};
///
/// let mut nav = Navigation::new();
/// let home = nav.add_page(Page::new("Home").with_uri("/"));
/// let docs = nav.add_child(home, Page::new("Docs").with_uri("/docs"))?;
///
/// assert_eq!(nav.parent(docs), Some(home));
/// assert_eq!(nav.children(Container::Page(home)), &[docs]);
/// # Ok::<(), bootnav::NavigationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    slots: Vec<Slot>,
    roots: Vec<PageId>,
}

impl Navigation {
    /// Creates an empty navigation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level page.
    pub fn add_page(&mut self, page: Page) -> PageId {
        let id = self.allocate(page, None);
        let key = self.slots[id.0].sort_key;
        Self::insert_sorted(&self.slots, &mut self.roots, id, key);
        id
    }

    /// Adds a page under an existing parent.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownPage`] if `parent` is not part of
    /// this tree.
    pub fn add_child(&mut self, parent: PageId, page: Page) -> Result<PageId> {
        self.check(parent)?;
        let id = self.allocate(page, Some(parent));
        let key = self.slots[id.0].sort_key;
        let mut children = std::mem::take(&mut self.slots[parent.0].children);
        Self::insert_sorted(&self.slots, &mut children, id, key);
        self.slots[parent.0].children = children;
        Ok(id)
    }

    fn allocate(&mut self, page: Page, parent: Option<PageId>) -> PageId {
        let sibling_count = match parent {
            Some(p) => self.slots[p.0].children.len(),
            None => self.roots.len(),
        };
        let sort_key = page.order().unwrap_or(sibling_count as i64);
        let id = PageId(self.slots.len());
        self.slots.push(Slot {
            page,
            parent,
            children: Vec::new(),
            sort_key,
        });
        id
    }

    // Stable: equal keys keep insertion order.
    fn insert_sorted(slots: &[Slot], list: &mut Vec<PageId>, id: PageId, key: i64) {
        let pos = list.partition_point(|other| slots[other.0].sort_key <= key);
        list.insert(pos, id);
    }

    /// Number of pages in the tree.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true when the handle belongs to this tree.
    pub fn contains(&self, id: PageId) -> bool {
        id.0 < self.slots.len()
    }

    /// Returns the page behind a handle.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownPage`] for foreign handles.
    pub fn page(&self, id: PageId) -> Result<&Page> {
        self.slots
            .get(id.0)
            .map(|slot| &slot.page)
            .ok_or(NavigationError::UnknownPage(id))
    }

    /// Mutable access to a page.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownPage`] for foreign handles.
    pub fn page_mut(&mut self, id: PageId) -> Result<&mut Page> {
        self.slots
            .get_mut(id.0)
            .map(|slot| &mut slot.page)
            .ok_or(NavigationError::UnknownPage(id))
    }

    /// Parent page, or `None` for top-level pages and foreign handles.
    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    /// Ordered children of a container.
    ///
    /// Foreign handles yield an empty slice.
    pub fn children(&self, container: Container) -> &[PageId] {
        match container {
            Container::Root => &self.roots,
            Container::Page(id) => self
                .slots
                .get(id.0)
                .map(|slot| slot.children.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Container whose child list holds `id`.
    pub fn container_of(&self, id: PageId) -> Container {
        match self.parent(id) {
            Some(parent) => Container::Page(parent),
            None => Container::Root,
        }
    }

    /// Returns true if `child` is a direct child of `container`.
    pub fn has_page(&self, container: Container, child: PageId) -> bool {
        self.contains(child) && self.container_of(child) == container
    }

    /// Active state of a page.
    ///
    /// With `recursive`, a page is also active when any descendant is.
    pub fn is_active(&self, id: PageId, recursive: bool) -> bool {
        let Some(slot) = self.slots.get(id.0) else {
            return false;
        };
        if slot.page.is_active() {
            return true;
        }
        recursive
            && slot
                .children
                .iter()
                .any(|child| self.is_active(*child, true))
    }

    /// Sets the active flag of a page.
    ///
    /// Must not be called while the same tree is being rendered.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownPage`] for foreign handles.
    pub fn set_active(&mut self, id: PageId, active: bool) -> Result<()> {
        self.page_mut(id)?.set_active(active);
        Ok(())
    }

    /// Clears every active flag.
    pub fn clear_active(&mut self) {
        for slot in &mut self.slots {
            slot.page.set_active(false);
        }
    }

    /// Finds the first page (document order) whose `id` attribute matches.
    pub fn find_by_id(&self, page_id: &str) -> Option<PageId> {
        self.walk(Container::Root, None)
            .map(|(id, _)| id)
            .find(|id| self.slots[id.0].page.id() == Some(page_id))
    }

    /// Finds the first page (document order) with the given label.
    pub fn find_by_label(&self, label: &str) -> Option<PageId> {
        self.walk(Container::Root, None)
            .map(|(id, _)| id)
            .find(|id| self.slots[id.0].page.label() == label)
    }

    /// Validates a container handle.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownPage`] for sub-roots that are not
    /// part of this tree.
    pub fn check_container(&self, container: Container) -> Result<()> {
        match container {
            Container::Root => Ok(()),
            Container::Page(id) => self.check(id),
        }
    }

    fn check(&self, id: PageId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(NavigationError::UnknownPage(id))
        }
    }

    /// Depth-first, self-first walk over a container.
    ///
    /// Yields `(page, depth)` with the container's children at depth 0 and
    /// does not descend past `max_depth`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bootnav::{Container, Navigation, Page};
    ///
    /// let mut nav = Navigation::new();
    /// let a = nav.add_page(Page::new("A"));
    /// let b = nav.add_child(a, Page::new("B"))?;
    /// let c = nav.add_page(Page::new("C"));
    ///
    /// let visited: Vec<_> = nav.walk(Container::Root, None).collect();
    /// assert_eq!(visited, vec![(a, 0), (b, 1), (c, 0)]);
    ///
    /// let shallow: Vec<_> = nav.walk(Container::Root, Some(0)).collect();
    /// assert_eq!(shallow, vec![(a, 0), (c, 0)]);
    /// # Ok::<(), bootnav::NavigationError>(())
    /// ```
    pub fn walk(&self, container: Container, max_depth: Option<usize>) -> Walk<'_> {
        let stack = self
            .children(container)
            .iter()
            .rev()
            .map(|id| (*id, 0))
            .collect();
        Walk {
            nav: self,
            stack,
            max_depth,
        }
    }
}

/// Iterator returned by [`Navigation::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    nav: &'a Navigation,
    stack: Vec<(PageId, usize)>,
    max_depth: Option<usize>,
}

impl Iterator for Walk<'_> {
    type Item = (PageId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        if self.max_depth.is_none_or(|max| depth < max) {
            let children = &self.nav.slots[id.0].children;
            self.stack
                .extend(children.iter().rev().map(|child| (*child, depth + 1)));
        }
        Some((id, depth))
    }
}
