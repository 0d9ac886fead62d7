//! Partial template delegation.

use crate::error::{NavigationError, Result};
use crate::navigation::{Container, Navigation, PageId};
use std::collections::BTreeMap;

/// Partial view script reference.
///
/// The list form mirrors `[script, module]` pairs; only the script name is
/// used, and any other length is a configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partial {
    Script(String),
    List(Vec<String>),
}

impl Partial {
    /// Resolves the script name.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::MalformedPartial`] for lists that do not
    /// hold exactly two entries and [`NavigationError::PartialNotConfigured`]
    /// for an empty script name.
    pub fn script(&self) -> Result<&str> {
        let script = match self {
            Partial::Script(script) => script.as_str(),
            Partial::List(parts) if parts.len() == 2 => parts[0].as_str(),
            Partial::List(parts) => {
                return Err(NavigationError::MalformedPartial { len: parts.len() });
            }
        };
        if script.is_empty() {
            return Err(NavigationError::PartialNotConfigured);
        }
        Ok(script)
    }
}

impl From<&str> for Partial {
    fn from(script: &str) -> Self {
        Partial::Script(script.to_string())
    }
}

impl From<String> for Partial {
    fn from(script: String) -> Self {
        Partial::Script(script)
    }
}

impl<S: Into<String>> From<Vec<S>> for Partial {
    fn from(parts: Vec<S>) -> Self {
        Partial::List(parts.into_iter().map(Into::into).collect())
    }
}

/// Model handed to the partial delegate.
#[derive(Debug, Clone)]
pub struct PartialModel<'a> {
    pub navigation: &'a Navigation,
    pub container: Container,
    /// Breadcrumb trail, root to leaf. Empty for menus.
    pub pages: Vec<PageId>,
    /// Extra caller supplied parameters.
    pub params: BTreeMap<String, String>,
}

/// External template engine rendering partial scripts.
pub trait PartialRenderer: Send + Sync {
    fn render(&self, script: &str, model: &PartialModel<'_>) -> Result<String>;
}
