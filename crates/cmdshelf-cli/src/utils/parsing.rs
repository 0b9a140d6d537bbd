//! # Input Parsing Utilities
//!
//! Parsing for the `--param` specification accepted by `cmdshelf add`.
//!
//! A specification has the form `name[?][:description][=default]`:
//!
//! | Spec | Meaning |
//! |------|---------|
//! | `host` | required, no default |
//! | `port=22` | required, defaults to `22` |
//! | `dir?:Change to directory` | optional, with a prompt description |
//! | `user:Login name=root` | required, described, defaults to `root` |
//!
//! The description ends at the first `=`, so it cannot itself contain one.

use cmdshelf_core::Parameter;

/// Parse a `--param` specification into a [`Parameter`].
///
/// Used as a clap `value_parser`, hence the `String` error.
pub fn parse_param_spec(spec: &str) -> Result<Parameter, String> {
    let spec = spec.trim();
    let name_end = spec.find([':', '=']).unwrap_or(spec.len());
    let (raw_name, rest) = spec.split_at(name_end);

    let (name, optional) = match raw_name.strip_suffix('?') {
        Some(name) => (name, true),
        None => (raw_name, false),
    };

    if name.is_empty() {
        return Err(format!("parameter spec '{spec}' has no name"));
    }
    if name.contains(|c: char| c.is_whitespace() || matches!(c, '{' | '}' | '?')) {
        return Err(format!(
            "parameter name '{name}' cannot contain whitespace, braces or '?'"
        ));
    }

    let (description, default_value) = match rest.strip_prefix(':') {
        Some(described) => match described.split_once('=') {
            Some((description, default)) => (description, default),
            None => (described, ""),
        },
        None => ("", rest.strip_prefix('=').unwrap_or("")),
    };

    Ok(Parameter {
        name: name.to_string(),
        description: description.trim().to_string(),
        default_value: default_value.to_string(),
        optional,
    })
}
