//! Inline run splitting for `**bold**`, `*italic*` and `` `code` `` spans.

use regex::Regex;

use crate::model::{RunEmphasis, StyleId, StyledRun};

/// Character style ids a splitter call resolves runs against.
///
/// Bold and italic deliberately resolve to the binding-level ids the
/// caller supplies, not to the base id of the element being split, so
/// emphasis renders with one face regardless of element type. Code is
/// exclusive and always resolves to the fixed code id.
#[derive(Debug, Clone, Copy)]
pub struct RunStyleIds {
    /// Base character style of the element
    pub base: StyleId,
    /// Character style for `**bold**` spans
    pub bold: StyleId,
    /// Character style for `*italic*` spans
    pub italic: StyleId,
    /// Character style for `` `code` `` spans
    pub code: StyleId,
}

/// Splits one line's visible text into an ordered run sequence.
pub struct RunSplitter {
    span_re: Regex,
}

impl RunSplitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        // Alternation order encodes span priority at equal start
        // positions: double-asterisk bold, then backtick code, then
        // single-asterisk italic. All three match non-greedily, so the
        // outer pair of `**a*b*c**` consumes the whole span as one
        // flat bold run; nesting is not supported.
        Self {
            span_re: Regex::new(r"\*\*(.+?)\*\*|`(.+?)`|\*(.+?)\*").unwrap(),
        }
    }

    /// Split `text` into styled runs.
    ///
    /// Never returns an empty sequence: text with no recognized span
    /// (including the empty string) yields a single plain run carrying
    /// the input unchanged. Concatenating the run texts reproduces the
    /// input with the consumed delimiters removed.
    pub fn split(&self, text: &str, ids: &RunStyleIds) -> Vec<StyledRun> {
        let mut runs = Vec::new();
        let mut pos = 0;

        for caps in self.span_re.captures_iter(text) {
            let m = caps.get(0).expect("whole-match group always present");
            if m.start() > pos {
                runs.push(StyledRun::plain(&text[pos..m.start()], ids.base));
            }

            let (fragment, emphasis, style) = if let Some(bold) = caps.get(1) {
                (bold.as_str(), RunEmphasis::Bold, ids.bold)
            } else if let Some(code) = caps.get(2) {
                (code.as_str(), RunEmphasis::Code, ids.code)
            } else {
                let italic = caps.get(3).expect("one capture group per alternative");
                (italic.as_str(), RunEmphasis::Italic, ids.italic)
            };
            runs.push(StyledRun::styled(fragment, emphasis, style));

            pos = m.end();
        }

        if pos < text.len() {
            runs.push(StyledRun::plain(&text[pos..], ids.base));
        }

        if runs.is_empty() {
            runs.push(StyledRun::plain(text, ids.base));
        }

        runs
    }
}

impl Default for RunSplitter {
    fn default() -> Self {
        Self::new()
    }
}
