//! Atoms Template
//!
//! The mini mustache dialect the atoms use for caption and tooltip markup:
//!
//! - `{{name}}` - HTML-escaped interpolation
//! - `{{{name}}}` / `{{&name}}` - raw interpolation
//! - `{{!note}}` - comment, renders nothing
//! - `{{>name}}` - partial: the value under `name` is itself a template,
//!   rendered against the current context
//! - `{{#name}}...{{/name}}` - section: arrays iterate, objects and truthy
//!   scalars render once, falsy values skip
//! - `{{^name}}...{{/name}}` - inverted section: renders when the value is
//!   falsy or an empty array
//!
//! Dotted paths (`{{seat.name}}`) resolve through the context stack, child
//! context shadowing parent; `{{.}}` is the current value. Missing paths
//! render empty. Lambda sections have no `serde_json::Value`
//! representation and are not supported.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let out = atoms_template::render(
//!     "{{#seats}}<li>{{name}}: {{margin}}</li>{{/seats}}",
//!     &json!({"seats": [
//!         {"name": "Kooyong", "margin": "6.4%"},
//!         {"name": "Higgins", "margin": "2.4%"},
//!     ]}),
//! ).unwrap();
//! assert_eq!(out, "<li>Kooyong: 6.4%</li><li>Higgins: 2.4%</li>");
//! ```

use serde_json::Value;
use thiserror::Error;

/// Errors raised while parsing a template
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{#section}}` or `{{^section}}` was never closed
    #[error("unclosed section: {0}")]
    UnclosedSection(String),

    /// A `{{/section}}` with no matching opener
    #[error("unexpected section close: {0}")]
    UnexpectedClose(String),

    /// A `{{` with no matching `}}`
    #[error("unterminated tag")]
    UnterminatedTag,
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Render a template against a JSON context
pub fn render(template: &str, data: &Value) -> Result<String> {
    let nodes = parse(template)?;
    let stack = vec![data];
    Ok(render_nodes(&nodes, &stack))
}

// ============================================================================
// Parsing
// ============================================================================

#[derive(Debug, Clone)]
enum Node {
    Text(String),
    /// Interpolation; `raw` skips HTML escaping
    Var { path: String, raw: bool },
    Partial(String),
    Section {
        path: String,
        inverted: bool,
        children: Vec<Node>,
    },
}

fn parse(template: &str) -> Result<Vec<Node>> {
    let mut root = Vec::new();
    // Open sections: (path, inverted, children-in-progress)
    let mut stack: Vec<(String, bool, Vec<Node>)> = Vec::new();
    let mut rest = template;

    loop {
        let Some(open) = rest.find("{{") else {
            push_text(&mut stack, &mut root, rest);
            break;
        };

        push_text(&mut stack, &mut root, &rest[..open]);
        rest = &rest[open..];

        let (tag, consumed) = read_tag(rest)?;
        rest = &rest[consumed..];

        match classify(tag) {
            Tag::Comment => {}
            Tag::Var { path, raw } => push_node(
                &mut stack,
                &mut root,
                Node::Var {
                    path: path.to_string(),
                    raw,
                },
            ),
            Tag::Partial(path) => {
                push_node(&mut stack, &mut root, Node::Partial(path.to_string()))
            }
            Tag::Open { path, inverted } => {
                stack.push((path.to_string(), inverted, Vec::new()));
            }
            Tag::Close(path) => {
                let Some((open_path, inverted, children)) = stack.pop() else {
                    return Err(TemplateError::UnexpectedClose(path.to_string()));
                };
                // Any close tag ends the innermost open section, even when
                // the names mismatch.
                let _ = path;
                push_node(
                    &mut stack,
                    &mut root,
                    Node::Section {
                        path: open_path,
                        inverted,
                        children,
                    },
                );
            }
        }
    }

    if let Some((path, _, _)) = stack.pop() {
        return Err(TemplateError::UnclosedSection(path));
    }
    Ok(root)
}

/// Read one `{{...}}` (or `{{{...}}}`) tag at the start of `input`
///
/// Returns the inner text and the byte length consumed.
fn read_tag(input: &str) -> Result<(&str, usize)> {
    if let Some(body) = input.strip_prefix("{{{") {
        let end = body.find("}}}").ok_or(TemplateError::UnterminatedTag)?;
        // Keep one brace on each side so classify sees the raw form
        return Ok((&input[2..end + 4], end + 6));
    }
    let body = &input[2..];
    let end = body.find("}}").ok_or(TemplateError::UnterminatedTag)?;
    Ok((&input[2..end + 2], end + 4))
}

enum Tag<'a> {
    Var { path: &'a str, raw: bool },
    Partial(&'a str),
    Open { path: &'a str, inverted: bool },
    Close(&'a str),
    Comment,
}

fn classify(tag: &str) -> Tag<'_> {
    let tag = tag.trim();
    if let Some(inner) = tag.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        return Tag::Var {
            path: inner.trim(),
            raw: true,
        };
    }
    match tag.as_bytes().first() {
        Some(b'!') => Tag::Comment,
        Some(b'&') => Tag::Var {
            path: tag[1..].trim(),
            raw: true,
        },
        Some(b'>') => Tag::Partial(tag[1..].trim()),
        Some(b'#') => Tag::Open {
            path: tag[1..].trim(),
            inverted: false,
        },
        Some(b'^') => Tag::Open {
            path: tag[1..].trim(),
            inverted: true,
        },
        Some(b'/') => Tag::Close(tag[1..].trim()),
        _ => Tag::Var { path: tag, raw: false },
    }
}

fn push_text(stack: &mut Vec<(String, bool, Vec<Node>)>, root: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        push_node(stack, root, Node::Text(text.to_string()));
    }
}

fn push_node(stack: &mut Vec<(String, bool, Vec<Node>)>, root: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some((_, _, children)) => children.push(node),
        None => root.push(node),
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render_nodes(nodes: &[Node], stack: &[&Value]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var { path, raw } => {
                let text = lookup(stack, path).map(value_text).unwrap_or_default();
                if *raw {
                    out.push_str(&text);
                } else {
                    out.push_str(&escape_html(&text));
                }
            }
            Node::Partial(path) => {
                let Some(partial) = lookup(stack, path).and_then(Value::as_str) else {
                    continue;
                };
                // A partial that fails to parse renders nothing
                if let Ok(nodes) = parse(partial) {
                    out.push_str(&render_nodes(&nodes, stack));
                }
            }
            Node::Section {
                path,
                inverted,
                children,
            } => {
                let value = lookup(stack, path);
                if *inverted {
                    if !is_truthy(value) {
                        out.push_str(&render_nodes(children, stack));
                    }
                    continue;
                }
                match value {
                    Some(Value::Array(items)) => {
                        for item in items {
                            let mut child_stack = stack.to_vec();
                            child_stack.push(item);
                            out.push_str(&render_nodes(children, &child_stack));
                        }
                    }
                    Some(value) if is_truthy(Some(value)) => {
                        let mut child_stack = stack.to_vec();
                        child_stack.push(value);
                        out.push_str(&render_nodes(children, &child_stack));
                    }
                    _ => {}
                }
            }
        }
    }
    out
}

/// Resolve a dotted path through the context stack, innermost first
fn lookup<'a>(stack: &[&'a Value], path: &str) -> Option<&'a Value> {
    if path == "." {
        return stack.last().copied();
    }
    for frame in stack.iter().rev() {
        let mut current = *frame;
        let mut found = true;
        for segment in path.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if found {
            return Some(current);
        }
    }
    None
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
