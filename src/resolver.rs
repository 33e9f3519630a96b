use crate::ast::Directive;
use crate::error::Diagnostic;
use crate::provider::{ProviderError, ValueProvider};
use chrono::DateTime;
use serde_json::{json, Map, Value};
use tracing::warn;

/// Bare `@name` directives that map onto a zero-argument provider method.
const BARE_GENERATORS: &[(&str, &str, &str)] = &[("boolean", "datatype", "boolean")];

/// Used for unknown bare names.
const FALLBACK_GENERATOR: (&str, &str) = ("lorem", "word");

/// How arguments are adapted for a method, keyed by method name alone.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MethodShape {
    /// `{min, max}` with defaults for omitted bounds. With `when_bare`, the
    /// defaults are also passed when the directive has no arguments.
    Range { min: i64, max: i64, when_bare: bool },
    /// `{length}`.
    Length { default: i64 },
    /// Always `{abbreviated: true}`.
    Abbreviated,
    /// `{days}`; the result is a timestamp normalized to `YYYY-MM-DD`.
    RelativeDate { default_days: i64 },
    /// `{min, max, mode: "age"}`; the result is normalized to `YYYY-MM-DD`.
    AgeRange { min: i64, max: i64 },
    /// Positional first, then `{min, max}` built from the first two arguments.
    Positional,
}

fn shape_of(method: &str) -> MethodShape {
    match method {
        "int" | "float" => MethodShape::Range {
            min: 1,
            max: 100,
            when_bare: false,
        },
        "price" => MethodShape::Range {
            min: 1,
            max: 1000,
            when_bare: true,
        },
        "password" => MethodShape::Length { default: 15 },
        "state" => MethodShape::Abbreviated,
        "recent" | "future" | "past" | "soon" => MethodShape::RelativeDate { default_days: 30 },
        "birthdate" => MethodShape::AgeRange { min: 18, max: 80 },
        _ => MethodShape::Positional,
    }
}

/// Resolves single directives against a provider. Never fails: unknown
/// directives and provider errors degrade to a fallback value and a
/// recorded [`Diagnostic`].
pub struct Resolver<'p> {
    provider: &'p dyn ValueProvider,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> Resolver<'p> {
    pub fn new(provider: &'p dyn ValueProvider) -> Self {
        Resolver {
            provider,
            diagnostics: Vec::new(),
        }
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Record a diagnostic produced outside directive resolution.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!(code = diagnostic.code, directive = %diagnostic.directive, "{}", diagnostic.message);
        self.diagnostics.push(diagnostic);
    }

    /// Resolve a directive to a fresh value. Every call goes to the
    /// provider; identical directives are expected to yield different values.
    pub fn resolve(&mut self, directive: &Directive) -> Value {
        match &directive.method {
            Some(method) => self.resolve_method(&directive.name, method, &directive.args),
            None => self.resolve_bare(&directive.name),
        }
    }

    fn resolve_bare(&mut self, name: &str) -> Value {
        if let Some((_, namespace, method)) = BARE_GENERATORS.iter().find(|(n, _, _)| *n == name) {
            return match self.provider.call(namespace, method, &[]) {
                Ok(value) => value,
                Err(err) => {
                    self.report(Diagnostic::provider_failure(
                        name,
                        format!("Error calling {}.{}: {}", namespace, method, err),
                    ));
                    Value::String(name.to_string())
                }
            };
        }

        let (namespace, method) = FALLBACK_GENERATOR;
        self.report(Diagnostic::unknown_variable(
            name,
            format!("Unknown variable: {}, using {}.{}", name, namespace, method),
        ));
        self.provider
            .call(namespace, method, &[])
            .unwrap_or_else(|_| Value::String(name.to_string()))
    }

    fn resolve_method(&mut self, namespace: &str, method: &str, args: &[Value]) -> Value {
        let path = format!("{}.{}", namespace, method);
        if !self.provider.has(namespace, method) {
            self.report(Diagnostic::unknown_directive(
                path.as_str(),
                format!("Unknown method: {}", path),
            ));
            return Value::String(path);
        }

        match self.invoke(namespace, method, args) {
            Ok(value) => value,
            Err(err) => {
                self.report(Diagnostic::provider_failure(
                    path.as_str(),
                    format!("Error calling {}: {}", path, err),
                ));
                Value::String(path)
            }
        }
    }

    fn invoke(&self, namespace: &str, method: &str, args: &[Value]) -> Result<Value, ProviderError> {
        let call = |args: &[Value]| self.provider.call(namespace, method, args);

        match shape_of(method) {
            MethodShape::Range { min, max, when_bare } => {
                if args.is_empty() && !when_bare {
                    call(&[])
                } else {
                    call(&[range_options(
                        Some(arg_or(args, 0, min)),
                        Some(arg_or(args, 1, max)),
                    )])
                }
            }
            MethodShape::Length { default } => {
                if args.is_empty() {
                    call(&[])
                } else {
                    call(&[json!({ "length": arg_or(args, 0, default) })])
                }
            }
            MethodShape::Abbreviated => call(&[json!({ "abbreviated": true })]),
            MethodShape::RelativeDate { default_days } => {
                let value = if args.is_empty() {
                    call(&[])?
                } else {
                    call(&[json!({ "days": arg_or(args, 0, default_days) })])?
                };
                Ok(normalize_date(value))
            }
            MethodShape::AgeRange { min, max } => {
                let mut options = range_options(
                    Some(arg_or(args, 0, min)),
                    Some(arg_or(args, 1, max)),
                );
                if let Value::Object(map) = &mut options {
                    map.insert("mode".to_string(), Value::from("age"));
                }
                Ok(normalize_date(call(&[options])?))
            }
            MethodShape::Positional => match call(args) {
                Ok(value) => Ok(value),
                Err(_) if !args.is_empty() => {
                    call(&[range_options(args.first().cloned(), args.get(1).cloned())])
                }
                Err(err) => Err(err),
            },
        }
    }
}

fn arg_or(args: &[Value], index: usize, default: i64) -> Value {
    args.get(index).cloned().unwrap_or_else(|| Value::from(default))
}

fn range_options(min: Option<Value>, max: Option<Value>) -> Value {
    let mut map = Map::new();
    if let Some(min) = min {
        map.insert("min".to_string(), min);
    }
    if let Some(max) = max {
        map.insert("max".to_string(), max);
    }
    Value::Object(map)
}

/// Reduce an RFC 3339 timestamp to its `YYYY-MM-DD` date. Other values pass through.
pub fn normalize_date(value: Value) -> Value {
    match value {
        Value::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
                return Value::String(dt.format("%Y-%m-%d").to_string());
            }
            match s.split_once('T') {
                Some((date, _)) => Value::String(date.to_string()),
                None => Value::String(s),
            }
        }
        other => other,
    }
}
