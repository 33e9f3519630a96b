use crate::ast::RepeatBlock;
use serde_json::Value;
use std::collections::HashMap;

const EXPR_PREFIX: &str = "__EXPR_";
const REPEAT_PREFIX: &str = "__REPEAT_";
const SUFFIX: &str = "__";

/// Maps placeholder tokens back to the directive text they stand in for.
///
/// One registry lives for exactly one top-level `parse` call. Ids are
/// allocated from call-wide counters, so text re-scanned during repeat
/// expansion never collides with placeholders from an earlier scan.
#[derive(Debug, Default)]
pub struct PlaceholderRegistry {
    expressions: HashMap<String, String>,
    blocks: HashMap<String, RepeatBlock>,
    next_expr: usize,
    next_block: usize,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expression and return its placeholder (`__EXPR_<n>__`, unquoted).
    pub fn add_expression(&mut self, text: &str) -> String {
        let placeholder = format!("{}{}{}", EXPR_PREFIX, self.next_expr, SUFFIX);
        self.next_expr += 1;
        self.expressions
            .insert(placeholder.clone(), text.trim().to_string());
        placeholder
    }

    /// Record a repeat block and return its placeholder (`__REPEAT_<id>__`, unquoted).
    pub fn add_block(&mut self, block: RepeatBlock) -> String {
        let id = format!("ARRAY_{}", self.next_block);
        self.next_block += 1;
        self.blocks.insert(id.clone(), block);
        format!("{}{}{}", REPEAT_PREFIX, id, SUFFIX)
    }

    pub fn expression(&self, placeholder: &str) -> Option<&str> {
        self.expressions.get(placeholder).map(String::as_str)
    }

    pub fn block(&self, id: &str) -> Option<&RepeatBlock> {
        self.blocks.get(id)
    }

    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Replace every expression placeholder in the tree with its original
    /// text. Each placeholder occurs once in the parsed tree, so entries are
    /// dropped as they are restored. Repeat placeholders are left in place
    /// for the expander.
    pub fn restore(&mut self, value: &mut Value) {
        match value {
            Value::String(s) => {
                if let Some(text) = self.expressions.remove(s.as_str()) {
                    *s = text;
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.restore(item);
                }
            }
            Value::Object(map) => {
                for (_, item) in map.iter_mut() {
                    self.restore(item);
                }
            }
            _ => {}
        }
    }
}

/// If `s` is a repeat placeholder, return the block id inside it.
pub fn repeat_id(s: &str) -> Option<&str> {
    s.strip_prefix(REPEAT_PREFIX)?.strip_suffix(SUFFIX)
}
