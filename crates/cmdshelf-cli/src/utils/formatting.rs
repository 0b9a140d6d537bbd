//! Formatting utilities

use colored::{ColoredString, Colorize};
use std::collections::HashMap;

/// Color cycle for collection names. Red is reserved for errors.
const COLLECTION_COLORS: &[fn(&str) -> ColoredString] = &[
    |s| s.blue(),
    |s| s.cyan(),
    |s| s.green(),
    |s| s.yellow(),
    |s| s.magenta(),
];

/// Get a color for a collection based on its index
pub fn get_collection_color(name: &str, index: usize) -> ColoredString {
    let color_fn = COLLECTION_COLORS[index % COLLECTION_COLORS.len()];
    color_fn(name)
}

/// Assigns each collection a color the first time it is seen.
#[derive(Debug, Default)]
pub struct CollectionPalette {
    assigned: HashMap<String, usize>,
}

impl CollectionPalette {
    /// Colored collection name, stable for the lifetime of the palette
    pub fn paint(&mut self, name: &str) -> ColoredString {
        let next = self.assigned.len();
        let index = *self.assigned.entry(name.to_string()).or_insert(next);
        get_collection_color(name, index)
    }
}

/// Tags as a dimmed, comma-separated list
pub fn format_tags(tags: &[String]) -> ColoredString {
    tags.join(", ").bright_black()
}
