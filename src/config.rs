//! Command line configuration.

use crate::helpers::options::{BreadcrumbsOptions, MenuOptionsInput, SubLink};
use crate::navigation::{Navigation, PageDocument};
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Helper rendered by the command line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Menu,
    Breadcrumbs,
    /// Deepest active branch only.
    SubMenu,
}

/// Command line configuration for bootnav.
#[derive(Debug, Clone, Parser)]
#[command(name = "bootnav", version, about, long_about = None)]
pub struct Config {
    /// Navigation tree file (YAML, or JSON with a .json extension)
    pub tree: PathBuf,

    /// Helper to render
    #[arg(long, value_enum, default_value_t = Mode::Menu)]
    pub mode: Mode,

    /// Id of the page to mark active
    #[arg(long)]
    pub active: Option<String>,

    /// Minimum depth rendered
    #[arg(long)]
    pub min_depth: Option<usize>,

    /// Maximum depth rendered
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Render only the active branch
    #[arg(long)]
    pub only_active_branch: bool,

    /// Render parents of the active page with --only-active-branch
    #[arg(long)]
    pub render_parents: Option<bool>,

    /// Class of the top level list
    #[arg(long)]
    pub ul_class: Option<String>,

    /// Element used for items that own a dropdown
    #[arg(long, value_enum)]
    pub sublink: Option<SubLink>,

    /// Render the last breadcrumb as a link
    #[arg(long)]
    pub link_last: bool,

    /// Separator placed between breadcrumbs
    #[arg(long)]
    pub separator: Option<String>,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Navigation tree file with optional render settings.
///
/// ```yaml
/// options:
///   ul_class: navbar-nav
/// pages:
///   - label: Home
///     uri: /
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeFile {
    pub pages: Vec<PageDocument>,
    #[serde(default)]
    pub options: MenuOptionsInput,
    #[serde(default)]
    pub breadcrumbs: BreadcrumbsOptions,
}

impl TreeFile {
    /// Reads a tree file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tree file: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&source)
                .with_context(|| format!("Invalid JSON tree file: {}", path.display()))
        } else {
            serde_yaml::from_str(&source)
                .with_context(|| format!("Invalid YAML tree file: {}", path.display()))
        }
    }

    pub fn navigation(&self) -> Navigation {
        Navigation::from_documents(&self.pages)
    }
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the tree file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.tree.is_file() {
            bail!("Tree file does not exist: {}", self.tree.display());
        }

        Ok(())
    }

    /// Menu options from the tree file, overridden by command line flags.
    pub fn menu_options(&self, file: &MenuOptionsInput) -> MenuOptionsInput {
        let mut options = file.clone();
        if self.min_depth.is_some() {
            options.min_depth = self.min_depth;
        }
        if self.max_depth.is_some() {
            options.max_depth = self.max_depth;
        }
        if self.only_active_branch {
            options.only_active_branch = Some(true);
        }
        if self.render_parents.is_some() {
            options.render_parents = self.render_parents;
        }
        if let Some(ul_class) = &self.ul_class {
            options.ul_class = Some(ul_class.clone());
        }
        if self.sublink.is_some() {
            options.sublink = self.sublink;
        }
        options
    }

    /// Breadcrumb settings from the tree file, overridden by command line flags.
    pub fn breadcrumbs_options(&self, file: &BreadcrumbsOptions) -> BreadcrumbsOptions {
        let mut options = file.clone();
        if self.min_depth.is_some() {
            options.min_depth = self.min_depth;
        }
        if self.max_depth.is_some() {
            options.max_depth = self.max_depth;
        }
        if self.link_last {
            options.link_last = Some(true);
        }
        if let Some(separator) = &self.separator {
            options.separator = Some(separator.clone());
        }
        options
    }
}
