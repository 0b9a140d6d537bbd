//! Commands and their parameters as stored in collection files.

use serde::{Deserialize, Serialize};

/// One placeholder declared by a command, written `{{name}}` in the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Placeholder name, unique within a command.
    pub name: String,
    /// Prompt text shown when asking for a value.
    #[serde(default)]
    pub description: String,
    /// Value used when none is supplied.
    #[serde(default)]
    pub default_value: String,
    /// Optional parameters control `{? … ?}` blocks instead of failing when empty.
    #[serde(default)]
    pub optional: bool,
}

impl Parameter {
    /// A required parameter without a default must be supplied by the caller.
    #[must_use]
    pub fn needs_value(&self) -> bool {
        !self.optional && self.default_value.is_empty()
    }
}

/// A stored shell command template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Display name; its slug identifies the entry within a collection.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Shell text with placeholders, stored under the `command` key.
    #[serde(rename = "command")]
    pub template: String,
    /// Extra search keywords.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Declared parameters, in prompt and expansion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Stamped by the store from the file the command was read from.
    #[serde(skip)]
    pub collection: String,
}

impl Command {
    /// Filesystem-safe identifier used to match entries on save.
    ///
    /// Lower-cased, with spaces and path separators replaced by `-`.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Label shown in pickers and plain listings: `collection: name`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {}", self.collection, self.name)
    }
}

pub(crate) fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '-',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_replaces_separators() {
        let cmd = Command {
            name: "Git Log/Pretty\\Graph".to_string(),
            description: String::new(),
            template: "git log".to_string(),
            tags: vec![],
            parameters: vec![],
            collection: String::new(),
        };
        assert_eq!(cmd.slug(), "git-log-pretty-graph");
    }

    #[test]
    fn test_parameter_defaults_when_fields_missing() -> Result<(), toml::de::Error> {
        let param: Parameter = toml::from_str(r#"name = "dir""#)?;
        assert_eq!(param.name, "dir");
        assert!(param.description.is_empty());
        assert!(param.default_value.is_empty());
        assert!(!param.optional);
        assert!(param.needs_value());
        Ok(())
    }

    #[test]
    fn test_command_uses_command_key_for_template() -> Result<(), toml::de::Error> {
        let cmd: Command = toml::from_str(
            r#"
            name = "Archive"
            command = "tar -c {?-C {{dir}}?} -f out.tar ."
            tags = ["tar"]

            [[parameters]]
            name = "dir"
            defaultValue = "."
            optional = true
            "#,
        )?;
        assert_eq!(cmd.template, "tar -c {?-C {{dir}}?} -f out.tar .");
        assert_eq!(cmd.parameters[0].default_value, ".");
        assert!(cmd.parameters[0].optional);
        assert!(cmd.collection.is_empty());
        Ok(())
    }
}
