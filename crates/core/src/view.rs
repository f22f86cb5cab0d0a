//! Filtered views over the catalog, one per tab.

use std::fmt::{Display, Formatter};

use crate::catalog::{Catalog, CommandEntry};
use crate::config::{no_commands_in_category, ALL_TAB_LABEL, NO_COMMANDS_FOUND};
use crate::filter::filter_entries;

/// The part of the catalog a tab shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    All,
    Category(String),
}

impl Scope {
    /// "All" followed by every category, in declared order.
    pub fn tabs(catalog: &Catalog) -> Vec<Scope> {
        std::iter::once(Scope::All)
            .chain(
                catalog
                    .categories()
                    .map(|category| Scope::Category(category.to_string())),
            )
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            Scope::All => ALL_TAB_LABEL,
            Scope::Category(category) => category,
        }
    }

    /// The message rendered when nothing in this scope matches.
    pub fn empty_message(&self) -> String {
        match self {
            Scope::All => NO_COMMANDS_FOUND.to_string(),
            Scope::Category(category) => no_commands_in_category(category),
        }
    }
}

impl Display for Scope {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label())
    }
}

/// The entries of one scope matching one query.
#[derive(Debug, Clone)]
pub struct ScopeView<'a> {
    pub scope: Scope,
    pub entries: Vec<&'a CommandEntry>,
}

impl<'a> ScopeView<'a> {
    pub fn build(catalog: &'a Catalog, scope: &Scope, query: &str) -> Self {
        let entries = match scope {
            Scope::All => filter_entries(query, catalog.entries()),
            Scope::Category(category) => filter_entries(query, catalog.entries_in(category)),
        };

        Self {
            scope: scope.clone(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn empty_message(&self) -> String {
        self.scope.empty_message()
    }
}

/// Number of entries matching `query` on every tab, in tab order.
pub fn tab_counts(catalog: &Catalog, query: &str) -> Vec<(Scope, usize)> {
    Scope::tabs(catalog)
        .into_iter()
        .map(|scope| {
            let count = ScopeView::build(catalog, &scope, query).len();
            (scope, count)
        })
        .collect()
}
