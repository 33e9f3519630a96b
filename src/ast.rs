//! Intermediate representation of template directives.
//!
//! A template is ordinary JSON with directive tokens in value positions.
//! The scanner disguises those tokens as strings; after the JSON parse the
//! expander turns string leaves back into the structures below.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};
use std::fmt;

/// `@name`, `@namespace.method` or `@namespace.method(args)`. Never contains `+`.
pub const TOKEN_PATTERN: &str =
    r"@[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)?(?:\([^)]*\))?";

static TOKEN_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}", TOKEN_PATTERN)).expect("valid token pattern"));

static TOKEN_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}$", TOKEN_PATTERN)).expect("valid token pattern"));

static TOKEN_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^@([A-Za-z_][A-Za-z0-9_]*)(?:\.([A-Za-z_][A-Za-z0-9_]*))?\s*(?:\(([^)]*)\))?$",
    )
    .expect("valid token pattern")
});

/// Length in bytes of the directive token starting at the beginning of `text`, if any.
pub fn token_len(text: &str) -> Option<usize> {
    TOKEN_PREFIX.find(text).map(|m| m.end())
}

/// True if `text` is exactly one directive token.
pub fn is_directive_token(text: &str) -> bool {
    TOKEN_EXACT.is_match(text)
}

/// A single directive reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Namespace for `@ns.method`, or the bare name for `@name`.
    pub name: String,
    pub method: Option<String>,
    /// Arguments, each coerced to a number when fully numeric.
    pub args: Vec<Value>,
}

impl Directive {
    /// Parse a directive token. Returns `None` if `text` is not a well-formed token.
    pub fn parse(text: &str) -> Option<Directive> {
        let caps = TOKEN_PARTS.captures(text.trim())?;
        let args = caps
            .get(3)
            .map(|m| parse_args(m.as_str()))
            .unwrap_or_default();
        Some(Directive {
            name: caps[1].to_string(),
            method: caps.get(2).map(|m| m.as_str().to_string()),
            args,
        })
    }

    /// A bare reference with no method or arguments. Used for `@`-prefixed
    /// text that does not form a valid token, so it still takes the
    /// bare-name fallback path.
    pub fn bare(name: impl Into<String>) -> Directive {
        Directive {
            name: name.into(),
            method: None,
            args: Vec::new(),
        }
    }

    /// `namespace.method`, or just the name for bare references.
    pub fn path(&self) -> String {
        match &self.method {
            Some(method) => format!("{}.{}", self.name, method),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.path())?;
        if !self.args.is_empty() {
            let args: Vec<String> = self
                .args
                .iter()
                .map(|a| match a {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            write!(f, "({})", args.join(", "))?;
        }
        Ok(())
    }
}

fn parse_args(inner: &str) -> Vec<Value> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(coerce_arg).collect()
}

/// Trim an argument and turn it into a number if it parses fully as one.
pub fn coerce_arg(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(trimmed.to_string())
}

/// One piece of a concatenation expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A quoted string literal, already unquoted.
    Literal(String),
    /// Unquoted text that is not a directive; contributes itself verbatim.
    Raw(String),
    Directive(Directive),
}

/// Segments joined by `+`, evaluated left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub segments: Vec<Segment>,
}

impl Expression {
    /// Split `text` on top-level `+` (outside double quotes and parentheses) and
    /// classify each part.
    pub fn parse(text: &str) -> Expression {
        let segments = split_top_level(text)
            .into_iter()
            .map(|part| parse_segment(part.trim()))
            .collect();
        Expression { segments }
    }

    pub fn is_concatenation(&self) -> bool {
        self.segments.len() > 1
    }
}

fn parse_segment(part: &str) -> Segment {
    if let Some(rest) = part.strip_prefix('@') {
        return Segment::Directive(Directive::parse(part).unwrap_or_else(|| Directive::bare(rest)));
    }
    if part.len() >= 2 && part.starts_with('"') && part.ends_with('"') {
        // Decode JSON escapes when the literal is valid JSON; otherwise keep it verbatim.
        let literal = serde_json::from_str::<String>(part)
            .unwrap_or_else(|_| part[1..part.len() - 1].to_string());
        return Segment::Literal(literal);
    }
    if part.len() >= 2 && part.starts_with('\'') && part.ends_with('\'') {
        return Segment::Literal(part[1..part.len() - 1].to_string());
    }
    Segment::Raw(part.to_string())
}

fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut depth = 0usize;

    for (i, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// A `[...] @repeat(n)` block recorded by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatBlock {
    /// The raw array literal text, brackets included.
    pub template: String,
    pub count: usize,
}
