//! Parameter substitution for command templates.
//!
//! A template is plain shell text with two kinds of markup:
//!
//! - `{{name}}` is a placeholder, replaced by the value of parameter `name`.
//! - `{? … ?}` is an optional block. It belongs to the first optional
//!   parameter (in declared order) whose placeholder appears inside it. When
//!   that parameter has no value the whole block disappears; otherwise the
//!   delimiters are dropped and the surrounding text is kept.
//!
//! ```rust
//! use cmdshelf_core::{Parameter, template};
//! use std::collections::HashMap;
//!
//! let params = vec![Parameter {
//!     name: "dir".into(),
//!     description: String::new(),
//!     default_value: String::new(),
//!     optional: true,
//! }];
//! let mut values = HashMap::new();
//!
//! let line = template::expand("tar -c {?-C {{dir}}?} file.tar items", &params, &values)?;
//! assert_eq!(line, "tar -c  file.tar items");
//!
//! values.insert("dir".to_string(), "/tmp".to_string());
//! let line = template::expand("tar -c {?-C {{dir}}?} file.tar items", &params, &values)?;
//! assert_eq!(line, "tar -c -C /tmp file.tar items");
//! # Ok::<(), cmdshelf_core::Error>(())
//! ```
//!
//! ## Scanning rules
//!
//! The template is scanned once, before any value is substituted, so values
//! are never re-interpreted as markup. Outside a block the scanner looks for
//! `{?`; inside a block it looks for the next `?}`.
//!
//! - A `{?` inside an open block is rejected as a nested block.
//! - A `{?` with no closing `?}` and a stray `?}` are literal text.
//! - A `{{` with no matching `}}` is literal text.
//! - Placeholders with no declared parameter are left as written.

use crate::{Error, Parameter, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

const BLOCK_OPEN: &str = "{?";
const BLOCK_CLOSE: &str = "?}";
const PLACEHOLDER_OPEN: &str = "{{";
const PLACEHOLDER_CLOSE: &str = "}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inline<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node<'a> {
    Inline(Inline<'a>),
    Block(Vec<Inline<'a>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Pending,
    Removed,
    Unwrapped,
}

/// A scanned command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    nodes: Vec<Node<'a>>,
}

impl<'a> Template<'a> {
    /// Scan `source` into text, placeholders and optional blocks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] when an optional block opens inside another one.
    pub fn parse(source: &'a str) -> Result<Self> {
        let mut nodes = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        loop {
            let Some(open) = rest.find(BLOCK_OPEN) else {
                nodes.extend(scan_inline(rest).into_iter().map(Node::Inline));
                break;
            };

            let body_start = open + BLOCK_OPEN.len();
            let Some(close) = rest[body_start..].find(BLOCK_CLOSE) else {
                // Unterminated block: the remainder is literal
                nodes.extend(scan_inline(rest).into_iter().map(Node::Inline));
                break;
            };

            let body = &rest[body_start..body_start + close];
            if let Some(nested) = body.find(BLOCK_OPEN) {
                return Err(Error::Template(format!(
                    "nested optional block at byte {} (nested blocks are not supported)",
                    offset + body_start + nested
                )));
            }

            nodes.extend(scan_inline(&rest[..open]).into_iter().map(Node::Inline));
            nodes.push(Node::Block(scan_inline(body)));

            let consumed = body_start + close + BLOCK_CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        Ok(Self { source, nodes })
    }

    /// Distinct placeholder names in order of first appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = Vec::new();
        for inline in self.inlines() {
            if let Inline::Placeholder(name) = inline {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Whether some optional block contains a placeholder for `name`.
    #[must_use]
    pub fn has_block_for(&self, name: &str) -> bool {
        self.nodes.iter().any(|node| match node {
            Node::Block(inlines) => contains_placeholder(inlines, name),
            Node::Inline(_) => false,
        })
    }

    fn inlines(&self) -> impl Iterator<Item = Inline<'a>> + '_ {
        self.nodes.iter().flat_map(|node| match node {
            Node::Inline(inline) => std::slice::from_ref(inline).iter().copied(),
            Node::Block(inlines) => inlines.iter().copied(),
        })
    }

    /// Expand the template with `values`, processing `parameters` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedInput`] for a required parameter that has
    /// neither a supplied value nor a default.
    pub fn render(
        &self,
        parameters: &[Parameter],
        values: &HashMap<String, String>,
    ) -> Result<String> {
        let mut states = vec![BlockState::Pending; self.nodes.len()];
        let mut bindings: HashMap<&str, &str> = HashMap::new();

        for param in parameters {
            let supplied = values.get(&param.name).map_or("", String::as_str);

            if param.optional {
                let mut claimed = 0usize;
                for (idx, node) in self.nodes.iter().enumerate() {
                    if let Node::Block(inlines) = node {
                        if states[idx] == BlockState::Pending
                            && contains_placeholder(inlines, &param.name)
                        {
                            states[idx] = if supplied.is_empty() {
                                BlockState::Removed
                            } else {
                                BlockState::Unwrapped
                            };
                            claimed += 1;
                        }
                    }
                }
                if claimed == 0 {
                    debug!(
                        parameter = %param.name,
                        "optional parameter has no enclosing block; substituting inline"
                    );
                }
                let value = if supplied.is_empty() {
                    param.default_value.as_str()
                } else {
                    supplied
                };
                bindings.insert(param.name.as_str(), value);
            } else {
                let value = if !supplied.is_empty() {
                    supplied
                } else if !param.default_value.is_empty() {
                    param.default_value.as_str()
                } else {
                    return Err(Error::UnresolvedInput {
                        parameter: param.name.clone(),
                    });
                };
                bindings.insert(param.name.as_str(), value);
            }
        }

        let mut out = String::with_capacity(self.source.len());
        for (node, state) in self.nodes.iter().zip(&states) {
            match node {
                Node::Inline(inline) => push_inline(&mut out, *inline, &bindings),
                Node::Block(inlines) => match state {
                    BlockState::Removed => {},
                    BlockState::Unwrapped => {
                        for inline in inlines {
                            push_inline(&mut out, *inline, &bindings);
                        }
                    },
                    BlockState::Pending => {
                        out.push_str(BLOCK_OPEN);
                        for inline in inlines {
                            push_inline(&mut out, *inline, &bindings);
                        }
                        out.push_str(BLOCK_CLOSE);
                    },
                },
            }
        }
        Ok(out)
    }
}

fn scan_inline(text: &str) -> Vec<Inline<'_>> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        let name_start = start + PLACEHOLDER_OPEN.len();
        let name_len = rest[name_start..]
            .find(PLACEHOLDER_CLOSE)
            .filter(|&len| is_placeholder_name(&rest[name_start..name_start + len]));

        if let Some(len) = name_len {
            if start > 0 {
                out.push(Inline::Text(&rest[..start]));
            }
            out.push(Inline::Placeholder(&rest[name_start..name_start + len]));
            rest = &rest[name_start + len + PLACEHOLDER_CLOSE.len()..];
        } else {
            // Not a placeholder: keep one brace and rescan from the next one
            out.push(Inline::Text(&rest[..=start]));
            rest = &rest[start + 1..];
        }
    }

    if !rest.is_empty() {
        out.push(Inline::Text(rest));
    }
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['{', '}', '\n'])
}

fn contains_placeholder(inlines: &[Inline<'_>], name: &str) -> bool {
    inlines
        .iter()
        .any(|inline| matches!(inline, Inline::Placeholder(p) if *p == name))
}

fn push_inline(out: &mut String, inline: Inline<'_>, bindings: &HashMap<&str, &str>) {
    match inline {
        Inline::Text(text) => out.push_str(text),
        Inline::Placeholder(name) => match bindings.get(name) {
            Some(value) => out.push_str(value),
            None => {
                out.push_str(PLACEHOLDER_OPEN);
                out.push_str(name);
                out.push_str(PLACEHOLDER_CLOSE);
            },
        },
    }
}

/// Expand `template` against `values`, processing `parameters` in declared order.
///
/// Convenience wrapper around [`Template::parse`] and [`Template::render`].
pub fn expand(
    template: &str,
    parameters: &[Parameter],
    values: &HashMap<String, String>,
) -> Result<String> {
    Template::parse(template)?.render(parameters, values)
}

/// A mismatch between a template and its declared parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateIssue {
    /// Placeholder with no declared parameter; it will be left as written.
    UnknownPlaceholder(String),
    /// Declared parameter that the template never references.
    UnusedParameter(String),
    /// Optional parameter that is not inside any `{? … ?}` block.
    OptionalWithoutBlock(String),
    /// Parameter declared more than once.
    DuplicateParameter(String),
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlaceholder(name) => {
                write!(f, "placeholder '{{{{{name}}}}}' has no declared parameter")
            },
            Self::UnusedParameter(name) => {
                write!(f, "parameter '{name}' is not used by the template")
            },
            Self::OptionalWithoutBlock(name) => write!(
                f,
                "optional parameter '{name}' is not inside a {{? … ?}} block and will be substituted inline"
            ),
            Self::DuplicateParameter(name) => {
                write!(f, "parameter '{name}' is declared more than once")
            },
        }
    }
}

/// Check a template against its declared parameters.
///
/// # Errors
///
/// Returns [`Error::Template`] when the template cannot be scanned.
pub fn lint(template: &str, parameters: &[Parameter]) -> Result<Vec<TemplateIssue>> {
    let scanned = Template::parse(template)?;
    let used = scanned.placeholders();
    let mut issues = Vec::new();

    let mut seen: Vec<&str> = Vec::new();
    for param in parameters {
        if seen.contains(&param.name.as_str()) {
            issues.push(TemplateIssue::DuplicateParameter(param.name.clone()));
            continue;
        }
        seen.push(&param.name);

        if !used.contains(&param.name.as_str()) {
            issues.push(TemplateIssue::UnusedParameter(param.name.clone()));
        } else if param.optional && !scanned.has_block_for(&param.name) {
            issues.push(TemplateIssue::OptionalWithoutBlock(param.name.clone()));
        }
    }

    for name in used {
        if !seen.contains(&name) {
            issues.push(TemplateIssue::UnknownPlaceholder(name.to_string()));
        }
    }

    Ok(issues)
}
