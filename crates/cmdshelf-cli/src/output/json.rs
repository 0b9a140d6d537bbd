//! JSON output formatting

use anyhow::Result;
use cmdshelf_core::Command;
use serde::Serialize;
use serde_json::{Value, json};

pub struct JsonFormatter;

/// One entry of `cmdshelf collections --format json`
#[derive(Debug, Serialize)]
struct CollectionEntry<'a> {
    name: &'a str,
    default: bool,
}

impl JsonFormatter {
    /// Print commands as a pretty JSON array
    pub fn format_commands(commands: &[&Command]) -> Result<()> {
        let values: Vec<Value> = commands.iter().map(|cmd| command_to_json(cmd)).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        Ok(())
    }

    /// Print collections as a pretty JSON array
    pub fn format_collections(names: &[String], default: &str) -> Result<()> {
        let entries: Vec<CollectionEntry<'_>> = names
            .iter()
            .map(|name| CollectionEntry {
                name,
                default: name == default,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        Ok(())
    }
}

pub fn command_to_json(cmd: &Command) -> Value {
    let parameters: Vec<Value> = cmd
        .parameters
        .iter()
        .map(|param| {
            json!({
                "name": param.name,
                "description": param.description,
                "defaultValue": param.default_value,
                "optional": param.optional,
            })
        })
        .collect();

    json!({
        "collection": cmd.collection,
        "name": cmd.name,
        "slug": cmd.slug(),
        "description": cmd.description,
        "command": cmd.template,
        "tags": cmd.tags,
        "parameters": parameters,
    })
}
