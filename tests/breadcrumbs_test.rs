//! Integration tests for the breadcrumb helper.
//!
//! Tests trail construction, filtering, partial delegation and Display
//! based rendering.

mod common;

use anyhow::Result;
use bootnav::{
    Breadcrumbs, Container, DefaultAcceptFactory, Navigation, NavigationError, Page, Partial,
    ViewHelper,
};
use common::{AdminOnly, FailingRenderer, RecordingRenderer, site};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Leaf labels in rendered order, extracted from crumb lines.
fn crumb_labels(html: &str) -> Vec<String> {
    html.lines()
        .filter(|line| line.contains("breadcrumb-item"))
        .map(|line| {
            let inner = line.trim().trim_end_matches("</li>");
            let without_tags = inner.rsplit_once("\">").map_or(inner, |(_, rest)| rest);
            without_tags
                .trim_end_matches("</a>")
                .trim_end_matches("</span>")
                .to_string()
        })
        .collect()
}

/// Tests output is empty exactly when no accepted page is active.
#[test]
fn test_empty_iff_no_active_accepted_page() -> Result<()> {
    // Arrange
    let mut fixture = site();
    let helper = Breadcrumbs::new().with_min_depth(0);

    // Act & Assert
    assert_eq!(helper.render_straight(&fixture.nav, None)?, "");

    fixture.nav.set_active(fixture.home, true)?;
    assert!(!helper.render_straight(&fixture.nav, None)?.is_empty());

    fixture.nav.clear_active();
    fixture.nav.set_active(fixture.admin, true)?;
    let restricted = Breadcrumbs::new()
        .with_min_depth(0)
        .with_filter_factory(Arc::new(DefaultAcceptFactory::with_authorization(Arc::new(
            AdminOnly,
        ))))
        .with_role("guest");
    assert_eq!(restricted.render_straight(&fixture.nav, None)?, "");

    Ok(())
}

/// Tests trail is ordered root to leaf.
#[test]
fn test_trail_order_root_to_leaf() -> Result<()> {
    // Arrange
    let mut fixture = site();
    fixture.nav.set_active(fixture.guide, true)?;

    // Act
    let html = Breadcrumbs::new().render_straight(&fixture.nav, None)?;

    // Assert
    assert_eq!(crumb_labels(&html), vec!["Home", "Docs", "Guide"]);

    Ok(())
}

/// Tests link_last only changes the element of the final crumb.
#[test]
fn test_link_last_changes_only_leaf() -> Result<()> {
    // Arrange
    let mut fixture = site();
    fixture.nav.set_active(fixture.api, true)?;

    // Act
    let plain = Breadcrumbs::new().render_straight(&fixture.nav, None)?;
    let linked = Breadcrumbs::new()
        .with_link_last(true)
        .render_straight(&fixture.nav, None)?;

    // Assert
    let plain_lines: Vec<&str> = plain.lines().collect();
    let linked_lines: Vec<&str> = linked.lines().collect();
    assert_eq!(plain_lines.len(), linked_lines.len());
    assert_eq!(crumb_labels(&plain), crumb_labels(&linked));

    let differing: Vec<usize> = (0..plain_lines.len())
        .filter(|i| plain_lines[*i] != linked_lines[*i])
        .collect();
    assert_eq!(differing.len(), 1, "Only the leaf crumb should change");
    assert!(linked_lines[differing[0]].contains(r#"<a href="/docs/api">API</a>"#));
    assert!(plain_lines[differing[0]].contains(r#"aria-current="page">API</li>"#));

    Ok(())
}

/// Tests single crumb output when the active page's only child is hidden.
#[test]
fn test_single_crumb_with_hidden_child() -> Result<()> {
    // Arrange
    let mut nav = Navigation::new();
    let root = nav.add_page(Page::new("Root").with_uri("/"));
    let a = nav.add_child(root, Page::new("A & B").with_uri("/a").with_active(true))?;
    nav.add_child(a, Page::new("Hidden").with_uri("/a/hidden").with_visible(false))?;

    // Act
    let html = Breadcrumbs::new()
        .with_min_depth(0)
        .with_max_depth(Some(0))
        .with_separator(" | ")
        .render_straight(&nav, Some(Container::Page(root)))?;

    // Assert
    let expected = [
        r#"<nav aria-label="breadcrumb">"#,
        r#"    <ul class="breadcrumb">"#,
        r#"        <li class="breadcrumb-item active" aria-current="page">A &amp; B</li>"#,
        r#"    </ul>"#,
        r#"</nav>"#,
    ]
    .join("\n");
    assert_eq!(html, expected);
    assert!(!html.contains(" | "));

    Ok(())
}

/// Tests hidden active page yields no trail unless invisible pages render.
#[test]
fn test_hidden_active_page() -> Result<()> {
    // Arrange
    let mut nav = Navigation::new();
    let home = nav.add_page(Page::new("Home").with_uri("/"));
    nav.add_child(
        home,
        Page::new("Draft")
            .with_uri("/draft")
            .with_visible(false)
            .with_active(true),
    )?;

    // Act
    let hidden = Breadcrumbs::new().render_straight(&nav, None)?;
    let shown = Breadcrumbs::new()
        .with_render_invisible(true)
        .render_straight(&nav, None)?;

    // Assert
    assert_eq!(hidden, "");
    assert!(shown.contains("Draft"));

    Ok(())
}

/// Tests partial delegate receives the script and ordered pages.
#[test]
fn test_partial_pair_calls_delegate() -> Result<()> {
    // Arrange
    let mut fixture = site();
    fixture.nav.set_active(fixture.guide, true)?;
    let renderer = Arc::new(RecordingRenderer::default());
    let helper = Breadcrumbs::new()
        .with_partial_renderer(renderer.clone())
        .with_partial(vec!["x.tpl", "y"]);

    // Act
    let html = helper.render(&fixture.nav, None)?;

    // Assert
    assert_eq!(html, "x.tpl:Home>Docs>Guide");
    let calls = renderer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].script, "x.tpl");
    assert_eq!(calls[0].labels, vec!["Home", "Docs", "Guide"]);

    Ok(())
}

/// Tests malformed partial fails before the delegate runs.
#[test]
fn test_partial_three_elements_is_error() {
    // Arrange
    let mut fixture = site();
    fixture.nav.set_active(fixture.guide, true).unwrap();
    let renderer = Arc::new(RecordingRenderer::default());
    let helper = Breadcrumbs::new().with_partial_renderer(renderer.clone());
    let partial = Partial::from(vec!["a", "b", "c"]);

    // Act
    let result = helper.render_partial(&fixture.nav, None, Some(&partial));

    // Assert
    assert_eq!(result, Err(NavigationError::MalformedPartial { len: 3 }));
    assert!(renderer.calls().is_empty(), "Delegate must not be called");
}

/// Tests missing partial is reported distinctly.
#[test]
fn test_partial_not_configured() {
    // Arrange
    let fixture = site();

    // Act
    let result = Breadcrumbs::new().render_partial(&fixture.nav, None, None);

    // Assert
    assert_eq!(result, Err(NavigationError::PartialNotConfigured));
}

/// Tests params reach the partial model.
#[test]
fn test_partial_params() -> Result<()> {
    // Arrange
    let mut fixture = site();
    fixture.nav.set_active(fixture.blog, true)?;
    let renderer = Arc::new(RecordingRenderer::default());
    let helper = Breadcrumbs::new().with_partial_renderer(renderer.clone());
    let params = BTreeMap::from([("theme".to_string(), "dark".to_string())]);

    // Act
    helper.render_partial_with_params(
        &fixture.nav,
        None,
        Some(&Partial::from("crumbs.tpl")),
        params,
    )?;

    // Assert
    let calls = renderer.calls();
    assert_eq!(calls[0].labels, vec!["Home", "Blog"]);
    assert_eq!(calls[0].params, vec![("theme".to_string(), "dark".to_string())]);

    Ok(())
}

/// Tests Display swallows delegate failures.
#[test]
fn test_display_logs_and_writes_nothing_on_error() {
    // Arrange
    let mut fixture = site();
    fixture.nav.set_active(fixture.guide, true).unwrap();
    let helper = Breadcrumbs::new()
        .with_partial_renderer(Arc::new(FailingRenderer))
        .with_partial("broken.tpl");

    // Act
    let html = helper.bind(&fixture.nav).to_string();

    // Assert
    assert_eq!(html, "");
}

/// Tests Display renders straight markup without a partial.
#[test]
fn test_display_renders_markup() {
    // Arrange
    let mut fixture = site();
    fixture.nav.set_active(fixture.docs, true).unwrap();
    let helper = Breadcrumbs::new();

    // Act
    let html = format!("{}", helper.bind(&fixture.nav));

    // Assert
    assert!(html.starts_with(r#"<nav aria-label="breadcrumb">"#));
    assert!(html.contains(r#"aria-current="page">Docs</li>"#));
}

/// Tests unknown container is rejected.
#[test]
fn test_unknown_container() {
    // Arrange
    let fixture = site();
    let other = {
        let mut nav = Navigation::new();
        for i in 0..20 {
            nav.add_page(Page::new(format!("P{}", i)));
        }
        nav.find_by_label("P19").unwrap()
    };

    // Act
    let result = Breadcrumbs::new().render_straight(&fixture.nav, Some(Container::Page(other)));

    // Assert
    assert_eq!(result, Err(NavigationError::UnknownPage(other)));
}
