use crate::ast::{self, Directive, Expression, RepeatBlock, Segment};
use crate::error::{Diagnostic, TemplateError};
use crate::provider::ValueProvider;
use crate::registry::{self, PlaceholderRegistry};
use crate::resolver::Resolver;
use crate::scanner;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static METHOD_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("valid call pattern"));

static NAMESPACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[A-Za-z_]").expect("valid namespace pattern"));

/// One single-pass expansion: scanner, JSON parse, placeholder restoration
/// and tree walk, with repeat blocks expanded as the walk reaches them.
///
/// The registry is scoped to this expander; repeat iterations re-scan
/// their block text through it so nested placeholders stay resolvable.
pub struct Expander<'p> {
    resolver: Resolver<'p>,
    registry: PlaceholderRegistry,
}

impl<'p> Expander<'p> {
    pub fn new(provider: &'p dyn ValueProvider) -> Self {
        Expander {
            resolver: Resolver::new(provider),
            registry: PlaceholderRegistry::new(),
        }
    }

    pub fn into_diagnostics(mut self) -> Vec<Diagnostic> {
        self.resolver.take_diagnostics()
    }

    /// Expand a JSON template span (no root-level `@repeat`).
    pub fn expand_text(&mut self, text: &str) -> Result<Value, TemplateError> {
        let disguised = scanner::scan(text, &mut self.registry);
        let mut value: Value = serde_json::from_str(&disguised)?;
        self.registry.restore(&mut value);
        Ok(self.walk(value))
    }

    /// Replace every string leaf with its resolved value, preserving key and
    /// element order.
    pub fn walk(&mut self, value: Value) -> Value {
        match value {
            Value::String(s) => self.expand_leaf(s),
            Value::Array(items) => Value::Array(items.into_iter().map(|v| self.walk(v)).collect()),
            Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, self.walk(v))).collect())
            }
            other => other,
        }
    }

    fn expand_leaf(&mut self, s: String) -> Value {
        if let Some(id) = registry::repeat_id(&s) {
            if let Some(block) = self.registry.block(id).cloned() {
                return self.expand_repeat(id, &block);
            }
        }
        if ast::is_directive_token(&s) {
            if let Some(directive) = Directive::parse(&s) {
                return self.resolver.resolve(&directive);
            }
        }
        if is_expression(&s) {
            return self.evaluate(&s);
        }
        Value::String(s)
    }

    /// Evaluate a concatenation left to right. Text without a top-level `+`
    /// resolves as a single directive when it is one, otherwise it is
    /// returned unchanged.
    pub fn evaluate(&mut self, text: &str) -> Value {
        let expression = Expression::parse(text);
        if !expression.is_concatenation() {
            return match expression.segments.first() {
                Some(Segment::Directive(directive)) => self.resolver.resolve(directive),
                _ => Value::String(text.to_string()),
            };
        }

        let mut out = String::new();
        for segment in &expression.segments {
            match segment {
                Segment::Literal(s) | Segment::Raw(s) => out.push_str(s),
                Segment::Directive(directive) => {
                    let value = self.resolver.resolve(directive);
                    out.push_str(&stringify(&value));
                }
            }
        }
        Value::String(out)
    }

    /// Produce `count` independently expanded copies of the block's first
    /// element. Each copy re-scans and re-parses the original block text.
    fn expand_repeat(&mut self, id: &str, block: &RepeatBlock) -> Value {
        let mut items = Vec::new();
        for _ in 0..block.count {
            match self.expand_repeat_unit(&block.template) {
                Ok(Some(item)) => items.push(item),
                Ok(None) => break,
                Err(err) => {
                    self.resolver.report(Diagnostic::repeat_block_failure(
                        id,
                        format!("Could not parse repeat block: {}", err),
                    ));
                    return Value::Array(Vec::new());
                }
            }
        }
        Value::Array(items)
    }

    fn expand_repeat_unit(&mut self, template: &str) -> Result<Option<Value>, TemplateError> {
        let disguised = scanner::scan(template, &mut self.registry);
        let mut parsed: Value = serde_json::from_str(&disguised)?;
        self.registry.restore(&mut parsed);
        let unit = match parsed {
            Value::Array(items) => items.into_iter().next(),
            _ => None,
        };
        Ok(unit.map(|unit| self.walk(unit)))
    }
}

/// A leaf is evaluated as an expression when it mentions `@` alongside a
/// `+`, a call with parentheses, or a `.name` member.
fn is_expression(s: &str) -> bool {
    s.contains('@') && (s.contains('+') || METHOD_CALL.is_match(s) || NAMESPACED.is_match(s))
}

/// String form of a resolved value for concatenation.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
