use anyhow::{Context, Result};
use bootnav::{Breadcrumbs, Config, Menu, Mode, TreeFile};
use std::fs;
use tracing_subscriber::EnvFilter;

/// Renders the helper selected by `config` for a loaded tree file.
///
/// # Arguments
///
/// * `config`: Parsed command line configuration
/// * `tree`: Tree file with pages and file level options
///
/// # Returns
///
/// Rendered HTML fragment, empty when nothing qualifies
///
/// # Errors
///
/// Returns error if the active page id is unknown or rendering fails.
fn render(config: &Config, tree: &TreeFile) -> Result<String> {
    let mut nav = tree.navigation();

    if let Some(active) = &config.active {
        let id = nav
            .find_by_id(active)
            .with_context(|| format!("No page with id '{}'", active))?;
        nav.set_active(id, true)?;
    }

    let html = match config.mode {
        Mode::Menu => {
            let options = config.menu_options(&tree.options);
            Menu::new().render_menu(&nav, None, &options)?
        }
        Mode::SubMenu => {
            let ul_class = config.ul_class.as_deref().or(tree.options.ul_class.as_deref());
            Menu::new().render_sub_menu(&nav, None, ul_class, None, None)?
        }
        Mode::Breadcrumbs => {
            let options = config.breadcrumbs_options(&tree.breadcrumbs);
            Breadcrumbs::new()
                .with_options(&options)
                .render_straight(&nav, None)?
        }
    };

    Ok(html)
}

fn main() -> Result<()> {
    let config = Config::parse();

    // --verbose enables DEBUG, otherwise RUST_LOG or the default WARN
    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    config.validate().context("Invalid configuration")?;

    let tree = TreeFile::load(&config.tree).context("Failed to load navigation tree")?;
    tracing::debug!(pages = tree.pages.len(), mode = ?config.mode, "Loaded navigation tree");

    let html = render(&config, &tree).context("Failed to render navigation")?;

    match &config.output {
        Some(path) => fs::write(path, format!("{}\n", html))
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => println!("{}", html),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootnav::PageDocument;
    use clap::Parser;

    fn tree() -> TreeFile {
        let yaml = "
pages:
  - label: Home
    id: home
    uri: /
    pages:
      - label: Docs
        id: docs
        uri: /docs
        pages:
          - label: Guide
            id: guide
            uri: /docs/guide
  - label: Blog
    id: blog
    uri: /blog
";
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_render_menu_mode() {
        // Arrange
        let config = Config::parse_from(["bootnav", "nav.yaml", "--max-depth", "0"]);

        // Act
        let html = render(&config, &tree()).unwrap();

        // Assert
        assert!(html.starts_with(r#"<ul class="nav">"#));
        assert!(html.contains(">Blog</a>"));
        assert!(!html.contains("Docs"), "Max depth hides nested pages");
    }

    #[test]
    fn test_render_breadcrumbs_mode() {
        // Arrange
        let config = Config::parse_from([
            "bootnav",
            "nav.yaml",
            "--mode",
            "breadcrumbs",
            "--active",
            "guide",
            "--separator",
            "",
        ]);

        // Act
        let html = render(&config, &tree()).unwrap();

        // Assert
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/docs">Docs</a>"#));
        assert!(html.contains(r#"aria-current="page">Guide</li>"#));
    }

    #[test]
    fn test_render_sub_menu_mode() {
        // Arrange
        let config = Config::parse_from(["bootnav", "nav.yaml", "--mode", "sub-menu", "--active", "docs"]);

        // Act
        let html = render(&config, &tree()).unwrap();

        // Assert
        assert!(html.contains(">Guide</a>"));
        assert!(!html.contains("Blog"));
    }

    #[test]
    fn test_render_unknown_active_page() {
        // Arrange
        let config = Config::parse_from(["bootnav", "nav.yaml", "--active", "missing"]);

        // Act
        let result = render(&config, &tree());

        // Assert
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("missing"));
    }

    #[test]
    fn test_render_empty_tree() {
        // Arrange
        let config = Config::parse_from(["bootnav", "nav.yaml"]);
        let tree = TreeFile {
            pages: Vec::<PageDocument>::new(),
            ..Default::default()
        };

        // Act
        let html = render(&config, &tree).unwrap();

        // Assert
        assert_eq!(html, "");
    }
}
