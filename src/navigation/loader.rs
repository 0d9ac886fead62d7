//! Loading navigation trees from YAML or JSON documents.

use super::{Navigation, Page, PageId};
use crate::error::{NavigationError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Serialized form of a single page and its children.
///
/// ```yaml
/// label: Docs
/// uri: /docs
/// pages:
///   - label: Guide
///     uri: /docs/guide
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDocument {
    pub label: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "href")]
    pub uri: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default, alias = "textDomain")]
    pub text_domain: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub privilege: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub pages: Vec<PageDocument>,
}

fn default_visible() -> bool {
    true
}

/// Top-level navigation document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationDocument {
    #[serde(default)]
    pub pages: Vec<PageDocument>,
}

impl PageDocument {
    fn to_page(&self) -> Page {
        let mut page = Page::new(self.label.as_str())
            .with_visible(self.visible)
            .with_active(self.active);
        if let Some(id) = &self.id {
            page = page.with_id(id.as_str());
        }
        if let Some(uri) = &self.uri {
            page = page.with_uri(uri.as_str());
        }
        if let Some(target) = &self.target {
            page = page.with_target(target.as_str());
        }
        if let Some(title) = &self.title {
            page = page.with_title(title.as_str());
        }
        if let Some(class) = &self.class {
            page = page.with_class(class.as_str());
        }
        if let Some(domain) = &self.text_domain {
            page = page.with_text_domain(domain.as_str());
        }
        if let Some(order) = self.order {
            page = page.with_order(order);
        }
        if let Some(resource) = &self.resource {
            page = page.with_resource(resource.as_str(), self.privilege.as_deref());
        }
        for (name, value) in &self.attributes {
            page = page.with_attribute(name.as_str(), value.as_str());
        }
        for (name, value) in &self.properties {
            page = page.with_property(name.as_str(), value.as_str());
        }
        page
    }
}

impl Navigation {
    /// Builds a tree from page documents, preserving nesting.
    pub fn from_documents(pages: &[PageDocument]) -> Self {
        let mut nav = Navigation::new();
        for doc in pages {
            let id = nav.add_page(doc.to_page());
            nav.attach_children(id, &doc.pages);
        }
        nav
    }

    fn attach_children(&mut self, parent: PageId, docs: &[PageDocument]) {
        for doc in docs {
            // Parent was just allocated by this tree.
            if let Ok(id) = self.add_child(parent, doc.to_page()) {
                self.attach_children(id, &doc.pages);
            }
        }
    }

    /// Parses a YAML navigation document.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Load`] when the document is malformed.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let doc: NavigationDocument =
            serde_yaml::from_str(source).map_err(|e| NavigationError::Load(e.to_string()))?;
        Ok(Self::from_documents(&doc.pages))
    }

    /// Parses a JSON navigation document.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Load`] when the document is malformed.
    pub fn from_json(source: &str) -> Result<Self> {
        let doc: NavigationDocument =
            serde_json::from_str(source).map_err(|e| NavigationError::Load(e.to_string()))?;
        Ok(Self::from_documents(&doc.pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Container;

    #[test]
    fn test_from_yaml_nested() {
        // Arrange
        let source = r#"
pages:
  - label: Home
    uri: /
    id: home
    pages:
      - label: Docs
        href: /docs
        active: true
        properties:
          liClass: featured
  - label: Hidden
    visible: false
"#;

        // Act
        let nav = Navigation::from_yaml(source).expect("Valid YAML should load");

        // Assert
        assert_eq!(nav.len(), 3);
        let home = nav.find_by_id("home").expect("Home should exist");
        let docs = nav.children(Container::Page(home))[0];
        let docs_page = nav.page(docs).unwrap();
        assert_eq!(docs_page.href(), Some("/docs"), "href alias should map to uri");
        assert!(docs_page.is_active());
        assert_eq!(docs_page.property("liClass"), Some("featured"));
        let hidden = nav.find_by_label("Hidden").unwrap();
        assert!(!nav.page(hidden).unwrap().is_visible());
    }

    #[test]
    fn test_from_json() {
        // Arrange
        let source = r#"{"pages": [{"label": "A", "order": 2}, {"label": "B", "order": 1}]}"#;

        // Act
        let nav = Navigation::from_json(source).expect("Valid JSON should load");

        // Assert
        let labels: Vec<&str> = nav
            .children(Container::Root)
            .iter()
            .map(|id| nav.page(*id).unwrap().label())
            .collect();
        assert_eq!(labels, vec!["B", "A"], "Pages should sort by order");
    }

    #[test]
    fn test_from_yaml_text_domain_spellings() {
        // Arrange
        let source = "pages:\n  - label: A\n    text_domain: site\n  - label: B\n    textDomain: blog\n";

        // Act
        let nav = Navigation::from_yaml(source).expect("Both spellings should load");

        // Assert
        let domains: Vec<Option<&str>> = nav
            .children(Container::Root)
            .iter()
            .map(|id| nav.page(*id).unwrap().text_domain())
            .collect();
        assert_eq!(domains, vec![Some("site"), Some("blog")]);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        // Arrange
        let source = "pages:\n  - label: A\n    colour: red\n";

        // Act
        let result = Navigation::from_yaml(source);

        // Assert
        assert!(matches!(result, Err(NavigationError::Load(_))));
    }
}
