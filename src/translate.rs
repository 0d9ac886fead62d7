//! Label translation hook.

use std::collections::HashMap;

/// Text domain used when a page does not declare one.
pub const DEFAULT_TEXT_DOMAIN: &str = "default";

/// Translates page labels before they are escaped and rendered.
pub trait Translator: Send + Sync {
    /// Returns the translation of `message`, or `message` itself.
    fn translate(&self, message: &str, text_domain: Option<&str>) -> String;
}

/// In-memory message catalog keyed by text domain.
///
/// # Examples
///
/// ```
/// use bootnav::{Catalog, Translator};
///
/// let catalog = Catalog::new().with_message("default", "Home", "Startseite");
/// assert_eq!(catalog.translate("Home", None), "Startseite");
/// assert_eq!(catalog.translate("Docs", None), "Docs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    domains: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translated message to a domain.
    pub fn with_message(
        mut self,
        domain: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(message.into(), translation.into());
        self
    }
}

impl Translator for Catalog {
    fn translate(&self, message: &str, text_domain: Option<&str>) -> String {
        let domain = text_domain.unwrap_or(DEFAULT_TEXT_DOMAIN);
        self.domains
            .get(domain)
            .and_then(|messages| messages.get(message))
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_domain_lookup() {
        // Arrange
        let catalog = Catalog::new()
            .with_message("default", "Home", "Accueil")
            .with_message("admin", "Home", "Tableau de bord");

        // Act & Assert
        assert_eq!(catalog.translate("Home", None), "Accueil");
        assert_eq!(catalog.translate("Home", Some("admin")), "Tableau de bord");
        assert_eq!(catalog.translate("Home", Some("shop")), "Home");
    }
}
