use std::fmt;

/// A 1-based position in the disguised template text, as reported by the
/// JSON parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A fatal template error. Only root-structural problems end up here;
/// directive-level problems are reported as [`Diagnostic`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("No valid JSON template found: expected '{{' or '['")]
    MalformedTemplate,

    #[error("{position}: {message}")]
    Syntax { message: String, position: Position },
}

impl TemplateError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::MalformedTemplate => "malformed-template",
            TemplateError::Syntax { .. } => "template-syntax-error",
        }
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        let position = Position {
            line: err.line(),
            column: err.column(),
        };
        // serde_json appends " at line X column Y"; the position carries that.
        let message = err.to_string();
        let message = match message.rfind(" at line ") {
            Some(idx) => message[..idx].to_string(),
            None => message,
        };
        TemplateError::Syntax { message, position }
    }
}

/// A recovered, non-fatal problem found while resolving directives.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Machine-readable code, e.g. `unknown-directive`.
    pub code: &'static str,
    pub message: String,
    /// The directive text (or repeat block id) the problem was found in.
    pub directive: String,
}

impl Diagnostic {
    pub fn unknown_directive(directive: impl Into<String>, message: String) -> Self {
        Diagnostic {
            code: "unknown-directive",
            message,
            directive: directive.into(),
        }
    }

    pub fn unknown_variable(directive: impl Into<String>, message: String) -> Self {
        Diagnostic {
            code: "unknown-variable",
            message,
            directive: directive.into(),
        }
    }

    pub fn provider_failure(directive: impl Into<String>, message: String) -> Self {
        Diagnostic {
            code: "provider-failure",
            message,
            directive: directive.into(),
        }
    }

    pub fn repeat_block_failure(directive: impl Into<String>, message: String) -> Self {
        Diagnostic {
            code: "repeat-block-failure",
            message,
            directive: directive.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.directive, self.message, self.code)
    }
}
