//! Shared test utilities for integration tests.
//!
//! Provides fixture navigation trees and recording collaborators used
//! across multiple test files.

#![allow(dead_code)]

use bootnav::{
    Authorization, Navigation, NavigationError, Page, PageId, PartialModel, PartialRenderer,
};
use std::sync::Mutex;

/// Handles into the site fixture returned by [`site`].
pub struct Site {
    pub nav: Navigation,
    pub home: PageId,
    pub docs: PageId,
    pub guide: PageId,
    pub api: PageId,
    pub blog: PageId,
    pub admin: PageId,
}

/// Builds a small site tree.
///
/// ```text
/// Home /
/// ├── Docs /docs
/// │   ├── Guide /docs/guide
/// │   └── API /docs/api
/// ├── Blog /blog
/// └── Admin /admin (resource "admin")
/// ```
///
/// # Returns
///
/// Tree with no active page
pub fn site() -> Site {
    let mut nav = Navigation::new();
    let home = nav.add_page(Page::new("Home").with_uri("/").with_id("home"));
    let docs = nav
        .add_child(home, Page::new("Docs").with_uri("/docs").with_id("docs"))
        .unwrap();
    let guide = nav
        .add_child(docs, Page::new("Guide").with_uri("/docs/guide"))
        .unwrap();
    let api = nav
        .add_child(docs, Page::new("API").with_uri("/docs/api"))
        .unwrap();
    let blog = nav
        .add_child(home, Page::new("Blog").with_uri("/blog"))
        .unwrap();
    let admin = nav
        .add_child(
            home,
            Page::new("Admin")
                .with_uri("/admin")
                .with_resource("admin", None),
        )
        .unwrap();

    Site {
        nav,
        home,
        docs,
        guide,
        api,
        blog,
        admin,
    }
}

/// Builds a flat two-level menu fixture.
///
/// ```text
/// Home /
/// Products /products
/// ├── Phones
/// └── Laptops
/// Support /support
/// ├── FAQ
/// └── Contact
/// ```
pub fn two_level() -> Navigation {
    let mut nav = Navigation::new();
    nav.add_page(Page::new("Home").with_uri("/"));
    let products = nav.add_page(Page::new("Products").with_uri("/products"));
    nav.add_child(products, Page::new("Phones").with_uri("/products/phones"))
        .unwrap();
    nav.add_child(products, Page::new("Laptops").with_uri("/products/laptops"))
        .unwrap();
    let support = nav.add_page(Page::new("Support").with_uri("/support"));
    nav.add_child(support, Page::new("FAQ").with_uri("/support/faq"))
        .unwrap();
    nav.add_child(support, Page::new("Contact").with_uri("/support/contact"))
        .unwrap();
    nav
}

/// Call captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub script: String,
    pub labels: Vec<String>,
    pub params: Vec<(String, String)>,
}

/// Partial delegate recording every call and returning a fixed body.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PartialRenderer for RecordingRenderer {
    fn render(&self, script: &str, model: &PartialModel<'_>) -> Result<String, NavigationError> {
        let labels = model
            .pages
            .iter()
            .map(|id| model.navigation.page(*id).map(|p| p.label().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        self.calls.lock().unwrap().push(RecordedCall {
            script: script.to_string(),
            labels: labels.clone(),
            params: model
                .params
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        });
        Ok(format!("{}:{}", script, labels.join(">")))
    }
}

/// Partial delegate that always fails.
pub struct FailingRenderer;

impl PartialRenderer for FailingRenderer {
    fn render(&self, script: &str, _model: &PartialModel<'_>) -> Result<String, NavigationError> {
        Err(NavigationError::Template(format!("{} exploded", script)))
    }
}

/// Authorization allowing `role` on every resource except `admin`,
/// which only the `admin` role may access.
pub struct AdminOnly;

impl Authorization for AdminOnly {
    fn is_allowed(&self, role: &str, resource: &str, _privilege: Option<&str>) -> bool {
        resource != "admin" || role == "admin"
    }
}

/// Asserts every `<li>` and list element in `html` is closed.
pub fn assert_balanced(html: &str) {
    assert_eq!(
        html.matches("<li").count(),
        html.matches("</li>").count(),
        "Unbalanced list items in:\n{}",
        html
    );
    for tag in ["ul", "ol", "details"] {
        assert_eq!(
            html.matches(&format!("<{}", tag)).count(),
            html.matches(&format!("</{}>", tag)).count(),
            "Unbalanced <{}> in:\n{}",
            tag,
            html
        );
    }
}
