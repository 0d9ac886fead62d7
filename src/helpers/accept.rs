//! Page acceptance: visibility and authorization.

use crate::error::{NavigationError, Result};
use crate::navigation::{Navigation, PageId};
use std::fmt;
use std::sync::Arc;

/// Decides whether a role may access a resource.
pub trait Authorization: Send + Sync {
    fn is_allowed(&self, role: &str, resource: &str, privilege: Option<&str>) -> bool;
}

/// Decides whether a page takes part in rendering.
pub trait AcceptFilter {
    /// With `recursive`, every ancestor must be accepted as well.
    fn accept(&self, nav: &Navigation, page: PageId, recursive: bool) -> bool;
}

/// Settings a filter is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptOptions {
    /// Include pages whose visible flag is off.
    pub render_invisible: bool,
    /// Role checked against page resources.
    pub role: Option<String>,
}

/// Builds acceptance filters; construction may fail.
pub trait AcceptFilterFactory: Send + Sync {
    fn build(&self, options: &AcceptOptions) -> Result<Box<dyn AcceptFilter>>;
}

/// Visibility plus optional role-based authorization.
pub struct AcceptHelper {
    render_invisible: bool,
    authorization: Option<(Arc<dyn Authorization>, String)>,
}

impl AcceptHelper {
    /// Filter that only checks visibility.
    pub fn visibility(render_invisible: bool) -> Self {
        Self {
            render_invisible,
            authorization: None,
        }
    }

    fn allowed(&self, nav: &Navigation, page: PageId) -> bool {
        let Ok(page) = nav.page(page) else {
            return false;
        };
        if !page.is_visible() && !self.render_invisible {
            return false;
        }
        match (&self.authorization, page.resource()) {
            (Some((acl, role)), Some(resource)) => acl.is_allowed(role, resource, page.privilege()),
            _ => true,
        }
    }
}

impl fmt::Debug for AcceptHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptHelper")
            .field("render_invisible", &self.render_invisible)
            .field(
                "role",
                &self.authorization.as_ref().map(|(_, role)| role.as_str()),
            )
            .finish()
    }
}

impl AcceptFilter for AcceptHelper {
    fn accept(&self, nav: &Navigation, page: PageId, recursive: bool) -> bool {
        if !self.allowed(nav, page) {
            return false;
        }
        match nav.parent(page) {
            Some(parent) if recursive => self.accept(nav, parent, true),
            _ => true,
        }
    }
}

/// Default factory producing [`AcceptHelper`] filters.
///
/// Building fails when a role is configured but no authorization service
/// was supplied.
#[derive(Clone, Default)]
pub struct DefaultAcceptFactory {
    authorization: Option<Arc<dyn Authorization>>,
}

impl DefaultAcceptFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authorization(authorization: Arc<dyn Authorization>) -> Self {
        Self {
            authorization: Some(authorization),
        }
    }
}

impl fmt::Debug for DefaultAcceptFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultAcceptFactory")
            .field("authorization", &self.authorization.is_some())
            .finish()
    }
}

impl AcceptFilterFactory for DefaultAcceptFactory {
    fn build(&self, options: &AcceptOptions) -> Result<Box<dyn AcceptFilter>> {
        let authorization = match (&options.role, &self.authorization) {
            (Some(role), Some(acl)) => Some((Arc::clone(acl), role.clone())),
            (Some(role), None) => {
                return Err(NavigationError::FilterUnavailable(format!(
                    "role '{}' configured without an authorization service",
                    role
                )));
            }
            (None, _) => None,
        };
        Ok(Box::new(AcceptHelper {
            render_invisible: options.render_invisible,
            authorization,
        }))
    }
}
