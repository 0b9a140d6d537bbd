//! Case-insensitive filtering over loaded commands.
//!
//! A command matches when the term occurs in its collection name directly
//! followed by its command name (`"git"` + `"log"` is searched as
//! `"gitlog"`), or in any of its tags. Matching is a plain substring test
//! after lower-casing both sides. The term is used as given: only the empty
//! string matches everything, and surrounding whitespace is significant.
//! Results keep the input order.

use crate::Command;

/// Whether `command` matches the already lower-cased `needle`.
fn matches_lowered(command: &Command, needle: &str) -> bool {
    let haystack = format!("{}{}", command.collection, command.name).to_lowercase();
    haystack.contains(needle)
        || command
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Whether `command` matches `term`.
#[must_use]
pub fn matches(command: &Command, term: &str) -> bool {
    term.is_empty() || matches_lowered(command, &term.to_lowercase())
}

/// Filter `commands` by `term`, preserving order.
#[must_use]
pub fn search<'a>(commands: &'a [Command], term: &str) -> Vec<&'a Command> {
    if term.is_empty() {
        return commands.iter().collect();
    }
    let needle = term.to_lowercase();
    commands
        .iter()
        .filter(|command| matches_lowered(command, &needle))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn command(collection: &str, name: &str, tags: &[&str]) -> Command {
        Command {
            name: name.to_string(),
            description: String::new(),
            template: "true".to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            parameters: vec![],
            collection: collection.to_string(),
        }
    }

    fn sample() -> Vec<Command> {
        vec![
            command("git", "Log graph", &["history"]),
            command("docker", "Prune images", &["cleanup", "Disk"]),
            command("default", "List ports", &["network"]),
        ]
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let commands = sample();
        let found = search(&commands, "PRUNE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Prune images");
    }

    #[test]
    fn test_search_matches_collection_name() {
        let commands = sample();
        let found = search(&commands, "git");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].collection, "git");
    }

    #[test]
    fn test_search_spans_collection_and_name() {
        // Given: A term crossing the collection/name boundary
        let commands = sample();

        // When: Searching across the join of "git" and "Log graph"
        let found = search(&commands, "GITLOG");

        // Then: The joined haystack matches
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Log graph");
    }

    #[test]
    fn test_search_matches_any_tag() {
        let commands = sample();
        let found = search(&commands, "disk");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].collection, "docker");
    }

    #[test]
    fn test_search_empty_term_returns_everything() {
        let commands = sample();
        assert_eq!(search(&commands, "").len(), 3);
        assert!(matches(&commands[0], ""));
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        // Given: One name with " log" inside it and one without the space
        let commands = vec![
            command("x", "catalog", &[]),
            command("y", "a log", &[]),
        ];

        // When: The term starts with a space
        let found = search(&commands, " log");

        // Then: The space is part of the needle
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "a log");

        // And: A whitespace-only term is an ordinary needle, not "everything"
        assert!(search(&commands, "   ").is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let commands = sample();
        assert!(search(&commands, "kubernetes").is_empty());
    }

    #[test]
    fn test_search_does_not_look_at_description_or_template() {
        let mut commands = sample();
        commands[0].description = "secret words".to_string();
        commands[0].template = "echo hidden".to_string();
        assert!(search(&commands, "secret").is_empty());
        assert!(search(&commands, "hidden").is_empty());
    }

    proptest! {
        #[test]
        fn prop_search_is_an_order_preserving_subset(
            names in prop::collection::vec("[a-zA-Z ]{1,12}", 0..12),
            term in "[a-zA-Z]{0,3}",
        ) {
            let commands: Vec<Command> = names
                .iter()
                .map(|n| command("c", n, &[]))
                .collect();
            let found = search(&commands, &term);

            // Every result is a member and appears in input order
            let mut last = 0usize;
            for hit in &found {
                let pos = commands
                    .iter()
                    .enumerate()
                    .skip(last)
                    .find(|(_, c)| std::ptr::eq(*c, *hit))
                    .map(|(i, _)| i);
                prop_assert!(pos.is_some());
                last = pos.unwrap() + 1;
            }

            let expected = commands.iter().filter(|c| matches(c, &term)).count();
            prop_assert_eq!(found.len(), expected);
        }
    }
}
