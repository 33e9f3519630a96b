use crate::ast::{self, RepeatBlock};
use crate::registry::PlaceholderRegistry;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static REPEAT_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@repeat\((\d+)\)").expect("valid repeat pattern"));

/// Disguise every directive region of `input` so the result is plain JSON
/// syntax, recording what each placeholder stands for in `registry`.
///
/// Repeat blocks are extracted first so the expressions inside them survive
/// verbatim until the block itself is expanded.
pub fn scan(input: &str, registry: &mut PlaceholderRegistry) -> String {
    let text = extract_repeat_blocks(input, registry);
    disguise(&text, registry)
}

/// Replace each `[...] @repeat(n)` span with a quoted `__REPEAT_<id>__`
/// placeholder. Stops at the first `@repeat(n)` that does not directly
/// follow an array, leaving it in the text to fail the JSON parse.
pub fn extract_repeat_blocks(input: &str, registry: &mut PlaceholderRegistry) -> String {
    let mut current = input.to_string();

    while let Some(caps) = REPEAT_DIRECTIVE.captures(&current) {
        let Some(directive) = caps.get(0) else {
            break;
        };
        let Ok(count) = caps[1].parse::<usize>() else {
            debug!(offset = directive.start(), "repeat count out of range");
            break;
        };
        let Some((open, close)) = find_array_before(&current, directive.start()) else {
            debug!(
                offset = directive.start(),
                "@repeat does not follow an array literal"
            );
            break;
        };

        let template = current[open..=close].to_string();
        let placeholder = registry.add_block(RepeatBlock { template, count });
        debug!(%placeholder, count, "recorded repeat block");
        current = format!(
            "{}\"{}\"{}",
            &current[..open],
            placeholder,
            &current[directive.end()..]
        );
    }

    current
}

/// Find the `[`..`]` span whose closing bracket is the last non-whitespace
/// byte before `pos`.
fn find_array_before(text: &str, pos: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut close = pos;
    loop {
        if close == 0 {
            return None;
        }
        close -= 1;
        if !bytes[close].is_ascii_whitespace() {
            break;
        }
    }
    if bytes[close] != b']' {
        return None;
    }

    let mut depth = 1usize;
    let mut i = close;
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b']' => depth += 1,
            b'[' => {
                depth -= 1;
                if depth == 0 {
                    return Some((i, close));
                }
            }
            _ => {}
        }
    }
    None
}

/// Replace concatenation expressions with `"__EXPR_<n>__"` placeholders and
/// quote bare directive tokens. String literals are copied through untouched,
/// so a directive already inside quotes is never quoted twice.
pub fn disguise(input: &str, registry: &mut PlaceholderRegistry) -> String {
    let mut scanner = Scanner {
        input,
        pos: 0,
        out: String::with_capacity(input.len()),
        registry,
    };
    scanner.run();
    scanner.out
}

/// Scanner state: tracks position in the input and the disguised output.
struct Scanner<'a, 'r> {
    input: &'a str,
    pos: usize,
    out: String,
    registry: &'r mut PlaceholderRegistry,
}

/// What a single expression segment turned out to be.
#[derive(Clone, Copy, PartialEq)]
enum SegmentKind {
    Literal,
    Directive,
}

impl<'a, 'r> Scanner<'a, 'r> {
    // ── Helpers ──────────────────────────────────────────────────────

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn eat_char(&mut self, ch: char) -> bool {
        if self.peek_char() == Some(ch) {
            self.advance(ch.len_utf8());
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.advance(1);
            } else {
                break;
            }
        }
    }

    // ── Main loop ───────────────────────────────────────────────────

    fn run(&mut self) {
        while let Some(ch) = self.peek_char() {
            let starts_run = ch == '"' || (ch == '@' && ast::token_len(self.remaining()).is_some());
            if starts_run {
                self.scan_run();
            } else {
                self.out.push(ch);
                self.advance(ch.len_utf8());
            }
        }
    }

    /// Consume a maximal run of segments joined by `+` and emit it either
    /// as an expression placeholder, a quoted directive, or verbatim text.
    fn scan_run(&mut self) {
        let start = self.pos;
        let mut segments = 0;
        let mut directives = 0;

        match self.scan_segment() {
            Some(kind) => {
                segments += 1;
                if kind == SegmentKind::Directive {
                    directives += 1;
                }
            }
            None => return,
        }

        loop {
            let saved = self.pos;
            self.skip_ws();
            if !self.eat_char('+') {
                self.pos = saved;
                break;
            }
            self.skip_ws();
            match self.scan_segment() {
                Some(kind) => {
                    segments += 1;
                    if kind == SegmentKind::Directive {
                        directives += 1;
                    }
                }
                None => {
                    self.pos = saved;
                    break;
                }
            }
        }

        let text = &self.input[start..self.pos];
        if segments > 1 && directives > 0 {
            let placeholder = self.registry.add_expression(text);
            self.out.push('"');
            self.out.push_str(&placeholder);
            self.out.push('"');
        } else if directives > 0 {
            // Directive arguments may hold quotes, so go through a JSON string encoder.
            self.out
                .push_str(&Value::String(text.to_string()).to_string());
        } else {
            self.out.push_str(text);
        }
    }

    fn scan_segment(&mut self) -> Option<SegmentKind> {
        match self.peek_char() {
            Some('"') => {
                self.skip_string_literal();
                Some(SegmentKind::Literal)
            }
            Some('@') => {
                let len = ast::token_len(self.remaining())?;
                self.advance(len);
                Some(SegmentKind::Directive)
            }
            _ => None,
        }
    }

    /// Skip a double-quoted literal, honouring backslash escapes. An
    /// unterminated literal runs to the end of input.
    fn skip_string_literal(&mut self) {
        self.advance(1);
        let mut escaped = false;
        while let Some(ch) = self.peek_char() {
            self.advance(ch.len_utf8());
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                return;
            }
        }
    }
}
