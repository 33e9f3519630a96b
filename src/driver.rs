use crate::error::{Diagnostic, TemplateError};
use crate::expander::Expander;
use crate::provider::ValueProvider;
use crate::registry::PlaceholderRegistry;
use crate::scanner;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static ROOT_REPEAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@repeat\((\d+)\)").expect("valid repeat pattern"));

/// Which delimiter opens the template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootKind {
    Array,
    Object,
}

/// What the driver will do with a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan<'a> {
    /// Expand the span once.
    Single { kind: RootKind, span: &'a str },
    /// Expand the base array span `count` times, independently.
    RootRepeat { base: &'a str, count: usize },
}

/// Locate the root delimiter: whichever of `{` and `[` occurs first.
pub fn detect_root(text: &str) -> Result<(RootKind, usize), TemplateError> {
    match (text.find('{'), text.find('[')) {
        (Some(brace), Some(bracket)) if bracket < brace => Ok((RootKind::Array, bracket)),
        (Some(brace), _) => Ok((RootKind::Object, brace)),
        (None, Some(bracket)) => Ok((RootKind::Array, bracket)),
        (None, None) => Err(TemplateError::MalformedTemplate),
    }
}

/// End (exclusive) of the root span: just past the last closing delimiter.
/// Without one after `start` the span runs to the end of input, leaving the
/// JSON parse to report the imbalance.
fn span_end(text: &str, kind: RootKind, start: usize) -> usize {
    let close = match kind {
        RootKind::Array => ']',
        RootKind::Object => '}',
    };
    match text.rfind(close) {
        Some(end) if end > start => end + 1,
        _ => text.len(),
    }
}

/// Parse `@repeat(n)` at the start of the (trimmed) text after the root span.
fn trailing_repeat(rest: &str) -> Option<(usize, usize)> {
    let trimmed = rest.trim_start();
    let caps = ROOT_REPEAT.captures(trimmed)?;
    let count = caps[1].parse::<usize>().ok()?;
    let len = caps.get(0)?.end();
    Some((count, rest.len() - trimmed.len() + len))
}

/// Decide how to expand `text`. A root `@repeat(n)` is honoured only after
/// an array root; after an object root it is ignored.
pub fn plan(text: &str) -> Result<Plan<'_>, TemplateError> {
    let (kind, start) = detect_root(text)?;
    let end = span_end(text, kind, start);
    let span = &text[start..end];
    debug!(?kind, start, end, "detected template root");

    if kind == RootKind::Array {
        if let Some((count, _)) = trailing_repeat(&text[end..]) {
            debug!(count, "root-level repeat");
            return Ok(Plan::RootRepeat { base: span, count });
        }
    }
    Ok(Plan::Single { kind, span })
}

/// Run a plan to completion, returning the value and every diagnostic.
pub fn run(
    plan: &Plan<'_>,
    provider: &dyn ValueProvider,
) -> Result<(Value, Vec<Diagnostic>), TemplateError> {
    match plan {
        Plan::Single { span, .. } => {
            let mut expander = Expander::new(provider);
            let value = expander.expand_text(span)?;
            Ok((value, expander.into_diagnostics()))
        }
        Plan::RootRepeat { base, count } => {
            // Syntax errors in the base must surface even when count is 0.
            let mut registry = PlaceholderRegistry::new();
            serde_json::from_str::<Value>(&scanner::scan(base, &mut registry))?;

            let mut items = Vec::new();
            let mut diagnostics = Vec::new();
            for _ in 0..*count {
                let mut expander = Expander::new(provider);
                match expander.expand_text(base)? {
                    Value::Array(run_items) => items.extend(run_items),
                    other => items.push(other),
                }
                diagnostics.extend(expander.into_diagnostics());
            }
            Ok((Value::Array(items), diagnostics))
        }
    }
}

/// The template region as written, including a trailing `@repeat(n)` after
/// either kind of root. Used for display only.
pub fn template_span(text: &str) -> Option<&str> {
    let (kind, start) = detect_root(text).ok()?;
    let end = span_end(text, kind, start);
    let end = match trailing_repeat(&text[end..]) {
        Some((_, len)) => end + len,
        None => end,
    };
    Some(&text[start..end])
}
