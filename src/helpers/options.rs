//! Render options and their normalization.

use crate::html::join_classes;
use serde::Deserialize;
use std::iter;

/// Element used for items that own a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SubLink {
    /// Regular `<a>` toggle.
    #[default]
    Link,
    Span,
    Button,
    /// Collapsible `<details><summary>` wrapper.
    Details,
}

/// Dropdown opening direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Down,
    Up,
    Start,
    End,
}

impl Direction {
    /// Bootstrap class placed on the `<li>` owning a dropdown.
    pub fn class(self) -> &'static str {
        match self {
            Direction::Down => "dropdown",
            Direction::Up => "dropup",
            Direction::Start => "dropstart",
            Direction::End => "dropend",
        }
    }
}

/// List element used for containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ListStyle {
    #[default]
    #[serde(rename = "ul")]
    Unordered,
    #[serde(rename = "ol")]
    Ordered,
}

impl ListStyle {
    pub fn tag(self) -> &'static str {
        match self {
            ListStyle::Unordered => "ul",
            ListStyle::Ordered => "ol",
        }
    }
}

/// Sparse menu options as supplied by callers.
///
/// Absent keys fall back to [`MenuDefaults`]. The boolean convenience flags
/// only contribute classes to `ul_class`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuOptionsInput {
    pub indent: Option<String>,
    pub indent_unit: Option<String>,
    pub ul_class: Option<String>,
    pub li_class: Option<String>,
    pub li_active_class: Option<String>,
    pub min_depth: Option<usize>,
    pub max_depth: Option<usize>,
    pub only_active_branch: Option<bool>,
    pub render_parents: Option<bool>,
    pub add_class_to_list_item: Option<bool>,
    pub escape_labels: Option<bool>,
    pub dark: Option<bool>,
    pub sublink: Option<SubLink>,
    pub direction: Option<Direction>,
    pub style: Option<ListStyle>,
    pub role: Option<String>,
    pub tabs: bool,
    pub pills: bool,
    pub fill: bool,
    pub justified: bool,
    pub centered: bool,
    pub right_aligned: bool,
    pub vertical: bool,
    pub in_navbar: bool,
}

/// Helper-level defaults applied during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDefaults {
    pub indent: String,
    pub indent_unit: String,
    pub ul_class: Option<String>,
    pub min_depth: usize,
    pub max_depth: Option<usize>,
    pub only_active_branch: bool,
    pub render_parents: bool,
    pub add_class_to_list_item: bool,
    pub escape_labels: bool,
    pub li_active_class: String,
}

impl Default for MenuDefaults {
    fn default() -> Self {
        Self {
            indent: String::new(),
            indent_unit: "    ".to_string(),
            ul_class: None,
            min_depth: 0,
            max_depth: None,
            only_active_branch: false,
            render_parents: true,
            add_class_to_list_item: false,
            escape_labels: true,
            li_active_class: "active".to_string(),
        }
    }
}

/// Fully populated menu options for one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub indent: String,
    pub indent_unit: String,
    pub ul_class: String,
    pub li_class: String,
    pub li_active_class: String,
    pub min_depth: usize,
    pub max_depth: Option<usize>,
    pub only_active_branch: bool,
    pub render_parents: bool,
    pub add_class_to_list_item: bool,
    pub escape_labels: bool,
    pub dark: bool,
    pub sublink: SubLink,
    pub direction: Direction,
    pub style: ListStyle,
    pub role: Option<String>,
}

impl MenuOptions {
    /// Fills absent keys from `defaults` and folds convenience flags into
    /// `ul_class`.
    ///
    /// Normalizing the sparse form of an already normalized value yields
    /// the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bootnav::{MenuDefaults, MenuOptions, MenuOptionsInput};
    ///
    /// let input = MenuOptionsInput { pills: true, vertical: true, ..Default::default() };
    /// let options = MenuOptions::normalize(&input, &MenuDefaults::default());
    /// assert_eq!(options.ul_class, "nav nav-pills flex-column");
    ///
    /// let again = MenuOptions::normalize(&MenuOptionsInput::from(&options), &MenuDefaults::default());
    /// assert_eq!(again, options);
    /// ```
    pub fn normalize(input: &MenuOptionsInput, defaults: &MenuDefaults) -> Self {
        let base = input
            .ul_class
            .as_deref()
            .or(defaults.ul_class.as_deref())
            .unwrap_or(if input.in_navbar { "navbar-nav" } else { "nav" });

        let flags = [
            (input.tabs, "nav-tabs"),
            (input.pills, "nav-pills"),
            (input.fill, "nav-fill"),
            (input.justified, "nav-justified"),
            (input.centered, "justify-content-center"),
            (input.right_aligned, "justify-content-end"),
            (input.vertical, "flex-column"),
        ];
        let ul_class = join_classes(
            iter::once(base).chain(flags.iter().filter(|(on, _)| *on).map(|(_, class)| *class)),
        );

        Self {
            indent: input.indent.clone().unwrap_or_else(|| defaults.indent.clone()),
            indent_unit: input
                .indent_unit
                .clone()
                .unwrap_or_else(|| defaults.indent_unit.clone()),
            ul_class,
            li_class: input
                .li_class
                .clone()
                .unwrap_or_else(|| "nav-item".to_string()),
            li_active_class: input
                .li_active_class
                .clone()
                .unwrap_or_else(|| defaults.li_active_class.clone()),
            min_depth: input.min_depth.unwrap_or(defaults.min_depth),
            max_depth: input.max_depth.or(defaults.max_depth),
            only_active_branch: input
                .only_active_branch
                .unwrap_or(defaults.only_active_branch),
            render_parents: input.render_parents.unwrap_or(defaults.render_parents),
            add_class_to_list_item: input
                .add_class_to_list_item
                .unwrap_or(defaults.add_class_to_list_item),
            escape_labels: input.escape_labels.unwrap_or(defaults.escape_labels),
            dark: input.dark.unwrap_or(false),
            sublink: input.sublink.unwrap_or_default(),
            direction: input.direction.unwrap_or_default(),
            style: input.style.unwrap_or_default(),
            role: input.role.clone(),
        }
    }
}

impl From<&MenuOptions> for MenuOptionsInput {
    fn from(options: &MenuOptions) -> Self {
        Self {
            indent: Some(options.indent.clone()),
            indent_unit: Some(options.indent_unit.clone()),
            ul_class: Some(options.ul_class.clone()),
            li_class: Some(options.li_class.clone()),
            li_active_class: Some(options.li_active_class.clone()),
            min_depth: Some(options.min_depth),
            max_depth: options.max_depth,
            only_active_branch: Some(options.only_active_branch),
            render_parents: Some(options.render_parents),
            add_class_to_list_item: Some(options.add_class_to_list_item),
            escape_labels: Some(options.escape_labels),
            dark: Some(options.dark),
            sublink: Some(options.sublink),
            direction: Some(options.direction),
            style: Some(options.style),
            role: options.role.clone(),
            ..Self::default()
        }
    }
}

/// Breadcrumb settings loadable from configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbsOptions {
    pub separator: Option<String>,
    pub link_last: Option<bool>,
    pub min_depth: Option<usize>,
    pub max_depth: Option<usize>,
    pub indent: Option<String>,
    pub style: Option<ListStyle>,
}
