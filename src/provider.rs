use serde_json::Value;

/// Why a provider call failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("unknown method {namespace}.{method}")]
    UnknownMethod { namespace: String, method: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// The source of generated values behind each directive.
///
/// Namespaces and methods are provider-defined. Arguments follow the
/// convention the resolver's policy produces: no arguments, a single
/// options object such as `{"min": 1, "max": 10}`, or positional scalars.
/// Calls are expected to be non-deterministic; callers never cache results.
pub trait ValueProvider {
    fn has(&self, namespace: &str, method: &str) -> bool;

    fn call(&self, namespace: &str, method: &str, args: &[Value]) -> Result<Value, ProviderError>;
}
