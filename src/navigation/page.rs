//! Single navigation entry.

use std::collections::BTreeMap;

/// One navigation entry.
///
/// Structural data (parent, children) is kept by [`super::Navigation`];
/// a `Page` only carries what is rendered or checked by helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    label: String,
    text_domain: Option<String>,
    uri: Option<String>,
    target: Option<String>,
    title: Option<String>,
    id: Option<String>,
    class: Option<String>,
    visible: bool,
    active: bool,
    order: Option<i64>,
    resource: Option<String>,
    privilege: Option<String>,
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
}

impl Page {
    /// Creates a visible, inactive page with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text_domain: None,
            uri: None,
            target: None,
            title: None,
            id: None,
            class: None,
            visible: true,
            active: false,
            order: None,
            resource: None,
            privilege: None,
            attributes: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_text_domain(mut self, domain: impl Into<String>) -> Self {
        self.text_domain = Some(domain.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets sort position among siblings.
    ///
    /// Siblings without an order sort by their insertion index.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets authorization resource and optional privilege.
    pub fn with_resource(mut self, resource: impl Into<String>, privilege: Option<&str>) -> Self {
        self.resource = Some(resource.into());
        self.privilege = privilege.map(String::from);
        self
    }

    /// Adds a custom HTML attribute rendered on the link element.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Adds a custom property (e.g. `liClass`).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text_domain(&self) -> Option<&str> {
        self.text_domain.as_deref()
    }

    /// Link target; `None` renders the page as a non-link element.
    pub fn href(&self) -> Option<&str> {
        self.uri.as_deref().filter(|u| !u.is_empty())
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Own active flag, ignoring descendants.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn order(&self) -> Option<i64> {
        self.order
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn privilege(&self) -> Option<&str> {
        self.privilege.as_deref()
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
