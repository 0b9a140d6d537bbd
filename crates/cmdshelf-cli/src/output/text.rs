//! Text output formatting

use cmdshelf_core::Command;
use colored::Colorize;
use std::fmt::Write as _;

use crate::utils::formatting::{CollectionPalette, format_tags, get_collection_color};

pub struct TextFormatter;

impl TextFormatter {
    /// Print commands as a bulleted list, one color per collection
    pub fn format_commands(commands: &[&Command], heading: Option<&str>) {
        if commands.is_empty() {
            println!("{}", "No commands found.".yellow());
            return;
        }

        if let Some(heading) = heading {
            println!("{} {heading}\n", "•".bold());
        }

        let mut palette = CollectionPalette::default();
        for cmd in commands {
            println!(
                "{} {}: {}",
                "•".bold(),
                palette.paint(&cmd.collection),
                cmd.name.green()
            );
            if !cmd.description.is_empty() {
                println!("   {}", cmd.description);
            }
            if !cmd.tags.is_empty() {
                println!("   {}", format_tags(&cmd.tags));
            }
            println!();
        }
    }

    /// Print collection names, marking the default one
    pub fn format_collections(names: &[String], default: &str) {
        if names.is_empty() {
            println!("{}", "No collections found.".yellow());
            return;
        }

        println!("{} Available collections:\n", "•".bold());
        for (idx, name) in names.iter().enumerate() {
            let colored = get_collection_color(name, idx);
            if name == default {
                println!("  {colored} {}", "(default)".bright_black());
            } else {
                println!("  {colored}");
            }
        }
    }
}

/// One-line label used by the interactive picker: `collection: name [tags]`.
pub fn picker_label(cmd: &Command) -> String {
    if cmd.tags.is_empty() {
        cmd.label()
    } else {
        format!("{} [{}]", cmd.label(), cmd.tags.join(", "))
    }
}

/// Multi-line description of a command for the details view.
pub fn format_details(cmd: &Command) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Description:".bold());
    let _ = write!(out, "   {} {}", cmd.collection, cmd.name.yellow());
    if !cmd.description.is_empty() {
        let _ = write!(out, "\n   {}", cmd.description);
    }
    if !cmd.tags.is_empty() {
        let _ = write!(out, "\n   [{}]", cmd.tags.join(", "));
    }

    let _ = write!(out, "\n\n{}\n   {}", "Command:".bold(), cmd.template.cyan());

    if !cmd.parameters.is_empty() {
        let _ = write!(out, "\n\n{}", "Parameters:".bold());
        for param in &cmd.parameters {
            let mut notes = Vec::new();
            if param.optional {
                notes.push("optional".to_string());
            } else if param.needs_value() {
                notes.push("required".to_string());
            }
            if !param.default_value.is_empty() {
                notes.push(format!("default: {}", param.default_value));
            }

            let _ = write!(out, "\n   {}: {}", param.name, param.description);
            if !notes.is_empty() {
                let _ = write!(out, " {}", format!("({})", notes.join(", ")).bright_black());
            }
        }
    }

    out
}
