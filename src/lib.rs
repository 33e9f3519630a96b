pub mod ast;
pub mod driver;
pub mod error;
pub mod expander;
pub mod fake;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod scanner;
mod words;

use error::{Diagnostic, TemplateError};
use serde_json::Value;

pub use driver::template_span;
pub use fake::FakeProvider;
pub use provider::{ProviderError, ValueProvider};

// ── Core API ───────────────────────────────────────────────────────

/// The result of expanding a template.
#[derive(Debug)]
pub struct TemplateResult {
    pub value: Value,
    /// Recovered directive-level problems. None of these abort expansion.
    pub diagnostics: Vec<Diagnostic>,
}

/// Expand a template into a concrete JSON value using a freshly seeded
/// [`FakeProvider`].
///
/// Every directive occurrence is resolved independently; nothing is cached
/// within or across calls.
pub fn parse(template: &str) -> Result<Value, TemplateError> {
    let provider = FakeProvider::new();
    parse_with(template, &provider).map(|result| result.value)
}

/// Expand a template against the given provider.
///
/// Fails only when no JSON root can be found or the disguised text is not
/// valid JSON.
pub fn parse_with(
    template: &str,
    provider: &dyn ValueProvider,
) -> Result<TemplateResult, TemplateError> {
    let plan = driver::plan(template)?;
    let (value, diagnostics) = driver::run(&plan, provider)?;
    Ok(TemplateResult { value, diagnostics })
}
