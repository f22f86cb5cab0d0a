//! Query matching over catalog entries.
//!
//! The query is a literal, case-insensitive substring of either the command
//! or the description. Characters such as `.`, `*` or `[` have no special
//! meaning.

use crate::catalog::CommandEntry;

/// Returns true if `query` appears in the entry's command or description,
/// ignoring case. An empty query matches every entry.
#[must_use]
pub fn matches(entry: &CommandEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    contains_lowercase(&entry.command, &query) || contains_lowercase(&entry.description, &query)
}

fn contains_lowercase(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Keeps the entries matching `query`, in their input order.
pub fn filter_entries<'a, I>(query: &str, entries: I) -> Vec<&'a CommandEntry>
where
    I: IntoIterator<Item = &'a CommandEntry>,
{
    if query.is_empty() {
        return entries.into_iter().collect();
    }

    let query = query.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| {
            contains_lowercase(&entry.command, &query)
                || contains_lowercase(&entry.description, &query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(command: &str, description: &str) -> CommandEntry {
        CommandEntry::new(command, description, "Test")
    }

    fn commands<'a>(entries: &[&'a CommandEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.command.as_str()).collect()
    }

    #[test]
    fn test_matches_command_substring() {
        let e = entry("git init", "Initiera ett nytt Git-repository");
        assert!(matches(&e, "init"));
        assert!(matches(&e, "t in"));
    }

    #[test]
    fn test_matches_description_ignoring_case() {
        let e = entry("docker ps", "Lista körande containers");
        assert!(matches(&e, "CONTAINERS"));
        assert!(matches(&e, "Körande"));
    }

    #[test]
    fn test_matches_non_ascii_case() {
        let e = entry("Ctrl+P", "Öppna snabbsökning");
        assert!(matches(&e, "öppna"));
        assert!(matches(&e, "SNABBSÖKNING"));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(matches(&entry("ls", "Lista filer"), ""));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches(&entry("ls", "Lista filer"), "zzz_nomatch"));
    }

    #[test]
    fn test_query_is_literal() {
        let e = entry("docker build -t [image-name] .", "Bygg en image");
        assert!(matches(&e, "[image-name]"));
        assert!(matches(&e, " ."));
        assert!(!matches(&e, "d.*r"));
        assert!(!matches(&entry("ls", "Lista"), "."));
        assert!(!matches(&entry("ls", "Lista"), "^ls$"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let entries = vec![
            entry("npm init", "Init"),
            entry("git push", "Push"),
            entry("git init", "Init"),
        ];
        let filtered = filter_entries("init", &entries);
        assert_eq!(commands(&filtered), vec!["npm init", "git init"]);
    }

    #[test]
    fn test_filter_empty_query_returns_everything() {
        let entries = vec![entry("ls", "Lista"), entry("cd", "Byt katalog")];
        let filtered = filter_entries("", &entries);
        assert_eq!(commands(&filtered), vec!["ls", "cd"]);
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let entries = vec![entry("npm start", "Starta"), entry("npm start", "Starta")];
        assert_eq!(filter_entries("start", &entries).len(), 2);
    }

    #[test]
    fn test_filter_with_no_matches() {
        let entries = vec![entry("ls", "Lista")];
        assert!(filter_entries("zzz_nomatch", &entries).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let entries = vec![
            entry("git init", "Init"),
            entry("git push", "Push"),
            entry("npm init", "Init"),
        ];
        let once = filter_entries("INIT", &entries);
        let twice = filter_entries("INIT", once.iter().copied());
        assert_eq!(once, twice);
    }
}
