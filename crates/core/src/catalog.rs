//! The static command catalog.
//!
//! A [`Catalog`] holds every [`CommandEntry`] grouped by category, keeping the
//! order categories and commands were declared in. It is built once at
//! startup and never mutated afterwards.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Serialize;

use crate::builtin::BUILTIN_COMMANDS;

/// One command in the catalog.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub command: String,
    pub description: String,
    #[serde(skip)]
    pub category: String,
}

impl CommandEntry {
    pub fn new(command: &str, description: &str, category: &str) -> Self {
        Self {
            command: command.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

impl Display for CommandEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.command, self.description)
    }
}

/// Commands grouped by category, in declared order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: IndexMap<String, Vec<CommandEntry>>,
}

impl Catalog {
    /// Returns the catalog compiled into the program.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_groups(BUILTIN_COMMANDS.iter().copied())
    }

    /// Builds a catalog from `(category, [(command, description)])` groups.
    ///
    /// A category listed twice keeps its first position and gains the second
    /// group's commands after its own.
    pub fn from_groups<'a, G, C>(groups: G) -> Self
    where
        G: IntoIterator<Item = (&'a str, C)>,
        C: IntoIterator<Item = &'a (&'a str, &'a str)>,
    {
        let mut catalog = Self::default();

        for (category, commands) in groups {
            let entries = catalog.groups.entry(category.to_string()).or_default();
            entries.extend(
                commands
                    .into_iter()
                    .map(|(command, description)| CommandEntry::new(command, description, category)),
            );
        }

        catalog
    }

    /// Category labels in declared order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// The commands of one category, or an empty slice for an unknown label.
    pub fn entries_in(&self, category: &str) -> &[CommandEntry] {
        self.groups
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every command, category by category.
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.groups.values().flatten()
    }

    /// Resolves a category label ignoring case.
    pub fn find_category(&self, name: &str) -> Option<&str> {
        let name = name.trim().to_lowercase();
        self.categories()
            .find(|category| category.to_lowercase() == name)
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
