//! Non-interactive output of a filtered view.

use clap::ValueEnum;
use itertools::Itertools;
use log::warn;
use serde::Serialize;

use devref_core::catalog::{Catalog, CommandEntry};
use devref_core::clipboard::{copy_command, Clipboard};
use devref_core::error::Result;
use devref_core::view::{Scope, ScopeView};

/// Output format for `--list`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Yaml,
}

#[derive(Serialize, Debug)]
struct ListedCategory<'a> {
    category: &'a str,
    commands: Vec<&'a CommandEntry>,
}

/// Groups the view's entries under their categories, in view order.
fn group_by_category<'a>(view: &ScopeView<'a>) -> Vec<ListedCategory<'a>> {
    view.entries
        .iter()
        .copied()
        .chunk_by(|entry| entry.category.clone())
        .into_iter()
        .map(|(_, group)| {
            let commands: Vec<&'a CommandEntry> = group.collect();
            let first = commands[0];
            ListedCategory {
                category: first.category.as_str(),
                commands,
            }
        })
        .collect()
}

/// Renders the entries of `scope` matching `query`.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn render_listing(
    catalog: &Catalog,
    scope: &Scope,
    query: &str,
    format: ListFormat,
) -> Result<String> {
    let view = ScopeView::build(catalog, scope, query);
    let groups = group_by_category(&view);

    match format {
        ListFormat::Yaml => Ok(serde_yaml::to_string(&groups)?),
        ListFormat::Text => {
            if view.is_empty() {
                return Ok(format!("{}\n", view.empty_message()));
            }

            let mut output = String::new();
            for group in &groups {
                output.push_str(&format!("{}\n", group.category));
                for entry in &group.commands {
                    output.push_str(&format!("  {}\n      {}\n", entry.command, entry.description));
                }
            }
            Ok(output)
        }
    }
}

/// Copies the first entry of `scope` matching `query`.
///
/// Returns the message to show the user: the copy confirmation, the clipboard
/// notice, or the empty-result message. Clipboard failures are not errors.
pub fn copy_first_match(
    catalog: &Catalog,
    scope: &Scope,
    query: &str,
    clipboard: &mut dyn Clipboard,
) -> String {
    let view = ScopeView::build(catalog, scope, query);

    let Some(entry) = view.entries.first() else {
        warn!("Nothing to copy for query `{}` in `{}`", query, scope);
        return view.empty_message();
    };

    match copy_command(clipboard, entry) {
        Ok(message) => message,
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devref_core::clipboard::MemoryClipboard;

    fn create_test_catalog() -> Catalog {
        Catalog::from_groups([
            ("Git", [("git init", "Init repo"), ("git push", "Push")].as_slice()),
            ("Npm", [("npm init", "Init project")].as_slice()),
            ("Docker", [("docker ps", "List containers")].as_slice()),
        ])
    }

    #[test]
    fn test_text_listing_groups_by_category() {
        let output =
            render_listing(&create_test_catalog(), &Scope::All, "init", ListFormat::Text).unwrap();

        assert_eq!(
            output,
            "Git\n  git init\n      Init repo\nNpm\n  npm init\n      Init project\n"
        );
    }

    #[test]
    fn test_text_listing_for_category() {
        let scope = Scope::Category("Git".to_string());
        let output = render_listing(&create_test_catalog(), &scope, "", ListFormat::Text).unwrap();

        assert!(output.starts_with("Git\n"));
        assert!(output.contains("git push"));
        assert!(!output.contains("npm init"));
    }

    #[test]
    fn test_text_listing_empty_messages() {
        let catalog = create_test_catalog();

        let all = render_listing(&catalog, &Scope::All, "zzz_nomatch", ListFormat::Text).unwrap();
        assert_eq!(all, "No commands found for the search term.\n");

        let scope = Scope::Category("Docker".to_string());
        let docker = render_listing(&catalog, &scope, "zzz_nomatch", ListFormat::Text).unwrap();
        assert_eq!(docker, "No commands found in the category Docker.\n");
    }

    #[test]
    fn test_yaml_listing() {
        let output =
            render_listing(&create_test_catalog(), &Scope::All, "docker", ListFormat::Yaml).unwrap();

        let listed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        let groups = listed.as_sequence().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["category"].as_str(), Some("Docker"));
        assert_eq!(groups[0]["commands"][0]["command"].as_str(), Some("docker ps"));
        assert_eq!(
            groups[0]["commands"][0]["description"].as_str(),
            Some("List containers")
        );
        assert!(groups[0]["commands"][0].get("category").is_none());
    }

    #[test]
    fn test_yaml_listing_empty() {
        let output =
            render_listing(&create_test_catalog(), &Scope::All, "zzz_nomatch", ListFormat::Yaml)
                .unwrap();
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_copy_first_match() {
        let mut clipboard = MemoryClipboard::new();

        let message = copy_first_match(&create_test_catalog(), &Scope::All, "init", &mut clipboard);

        assert_eq!(clipboard.copied(), ["git init"]);
        assert_eq!(message, "Command copied: git init");
    }

    #[test]
    fn test_copy_first_match_without_matches() {
        let mut clipboard = MemoryClipboard::new();

        let message =
            copy_first_match(&create_test_catalog(), &Scope::All, "zzz_nomatch", &mut clipboard);

        assert!(clipboard.copied().is_empty());
        assert_eq!(message, "No commands found for the search term.");
    }

    #[test]
    fn test_copy_first_match_with_unavailable_clipboard() {
        let mut clipboard = MemoryClipboard::unavailable();

        let message = copy_first_match(&create_test_catalog(), &Scope::All, "ls", &mut clipboard);
        assert_eq!(message, "No commands found for the search term.");

        let message = copy_first_match(&create_test_catalog(), &Scope::All, "git", &mut clipboard);
        assert_eq!(message, "Clipboard unavailable: no display");
    }
}
