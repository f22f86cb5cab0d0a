//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and resolves the
//! requested category into a [`Scope`] using the `clap` crate.

use clap::Parser;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use crate::listing::ListFormat;
use devref_core::catalog::Catalog;
use devref_core::config::ALL_TAB_LABEL;
use devref_core::error::{Error, Result};
use devref_core::view::Scope;

/// Command-line arguments for the devref CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use devref_cli::cli_args::Args;
///
/// let args = Args::parse_from(["devref", "--list", "docker"]);
/// assert!(args.list);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Initial search text.
    ///
    /// Matches commands and descriptions, ignoring case.
    pub query: Option<String>,

    /// Category tab to start on, or to restrict the listing to.
    ///
    /// Case-insensitive. `All` selects every category.
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Print matching commands instead of opening the interactive browser.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// Output format used with `--list`.
    #[arg(long, short = 'f', value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,

    /// Copy the first matching command to the clipboard.
    #[arg(long, short = 'y', action, requires = "list")]
    pub copy: bool,

    /// Print the category names and exit.
    #[arg(long, action)]
    pub categories: bool,
}

impl Args {
    /// The query, or an empty string when none was given.
    pub fn query_text(&self) -> String {
        self.query.clone().unwrap_or_default()
    }

    /// Whether this run opens the full-screen browser.
    pub fn is_interactive(&self) -> bool {
        !self.list && !self.categories
    }

    /// Resolves `--category` against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCategory`] if no category has that name, with
    /// the closest fuzzy match as a suggestion.
    pub fn scope(&self, catalog: &Catalog) -> Result<Scope> {
        let Some(name) = &self.category else {
            return Ok(Scope::All);
        };

        if name.trim().eq_ignore_ascii_case(ALL_TAB_LABEL) {
            return Ok(Scope::All);
        }

        match catalog.find_category(name) {
            Some(category) => {
                debug!("Category `{}` resolved to `{}`", name, category);
                Ok(Scope::Category(category.to_string()))
            }
            None => Err(Error::unknown_category(
                name.clone(),
                suggest_category(catalog, name),
            )),
        }
    }
}

/// The category closest to `name`, if any fuzzy-matches it.
fn suggest_category(catalog: &Catalog, name: &str) -> Option<String> {
    let matcher = SkimMatcherV2::default();

    catalog
        .categories()
        .filter_map(|category| {
            matcher
                .fuzzy_match(category, name.trim())
                .map(|score| (score, category))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, category)| category.to_string())
}

/// Position of `scope` among the browser's tabs.
pub fn tab_index(catalog: &Catalog, scope: &Scope) -> usize {
    Scope::tabs(catalog)
        .iter()
        .position(|tab| tab == scope)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["devref"]);

        assert!(args.query.is_none());
        assert!(args.category.is_none());
        assert!(!args.list);
        assert_eq!(args.format, ListFormat::Text);
        assert!(!args.copy);
        assert!(!args.categories);
        assert_eq!(args.query_text(), "");
    }

    #[test]
    fn test_args_all_options() {
        let args = Args::parse_from([
            "devref", "-c", "docker", "-l", "-f", "yaml", "-y", "build",
        ]);

        assert_eq!(args.query, Some("build".to_string()));
        assert_eq!(args.category, Some("docker".to_string()));
        assert!(args.list);
        assert_eq!(args.format, ListFormat::Yaml);
        assert!(args.copy);
    }

    #[test]
    fn test_copy_requires_list() {
        let result = Args::try_parse_from(["devref", "--copy", "git"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_interactive() {
        assert!(Args::parse_from(["devref"]).is_interactive());
        assert!(Args::parse_from(["devref", "-c", "sql", "select"]).is_interactive());
        assert!(!Args::parse_from(["devref", "--list"]).is_interactive());
        assert!(!Args::parse_from(["devref", "--categories"]).is_interactive());
    }

    #[test]
    fn test_scope_defaults_to_all() {
        let args = Args::parse_from(["devref"]);
        assert_eq!(args.scope(&Catalog::builtin()).unwrap(), Scope::All);
    }

    #[test]
    fn test_scope_all_label() {
        let args = Args::parse_from(["devref", "-c", "all"]);
        assert_eq!(args.scope(&Catalog::builtin()).unwrap(), Scope::All);
    }

    #[test]
    fn test_scope_resolves_case_insensitively() {
        let args = Args::parse_from(["devref", "-c", "rest api"]);
        assert_eq!(
            args.scope(&Catalog::builtin()).unwrap(),
            Scope::Category("REST API".to_string())
        );
    }

    #[test]
    fn test_unknown_category_suggests_closest() {
        let args = Args::parse_from(["devref", "-c", "dock"]);

        match args.scope(&Catalog::builtin()) {
            Err(Error::UnknownCategory { name, suggestion }) => {
                assert_eq!(name, "dock");
                assert_eq!(suggestion, Some("Docker".to_string()));
            }
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_without_suggestion() {
        let args = Args::parse_from(["devref", "-c", "zzz"]);

        match args.scope(&Catalog::builtin()) {
            Err(Error::UnknownCategory { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_tab_index() {
        let catalog = Catalog::builtin();
        assert_eq!(tab_index(&catalog, &Scope::All), 0);
        assert_eq!(
            tab_index(&catalog, &Scope::Category("Git & GitHub".to_string())),
            1
        );
        assert_eq!(
            tab_index(&catalog, &Scope::Category("Streamlit".to_string())),
            11
        );
    }
}
