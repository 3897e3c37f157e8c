//! Line-by-line annotation pass
//!
//! Drives the matcher over a file's lines, tracks the grouped-block
//! state, and inserts synthesized comments above declarations that
//! lack one. The pass is idempotent: comments it inserted satisfy its
//! own presence check on the next run.

use crate::matcher::{DeclKind, Matcher};
use crate::synthesizer;

/// Comment marker recognized and emitted (Go line comments)
pub const COMMENT_MARKER: &str = "//";

/// Tracks whether the scanner is inside a grouped declaration block.
///
/// Flat blocks only: a redundant open while already inside is a no-op,
/// matching the grammar's actual shape. No nesting counter.
#[derive(Debug, Clone, Copy, Default)]
struct BlockState {
    inside: bool,
}

impl BlockState {
    fn apply(&mut self, kind: DeclKind) {
        match kind {
            DeclKind::GroupedBlockOpen => self.inside = true,
            DeclKind::GroupedBlockClose => self.inside = false,
            _ => {}
        }
    }
}

/// Outcome of annotating one file's lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    /// The rewritten line sequence
    pub lines: Vec<String>,
    /// Whether any comment was inserted
    pub changed: bool,
}

/// Decision about one declaration's doc comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDecision {
    /// A qualifying comment already precedes the declaration
    pub already_present: bool,
    /// Canonical comment text; computed unconditionally, emitted only
    /// when `already_present` is false
    pub synthesized: String,
}

/// Decide whether the line preceding a declaration already carries a
/// qualifying comment.
///
/// The check is a prefix heuristic, not content equality: any comment
/// whose text starts with the symbol name is accepted and preserved
/// verbatim. A comment like `// FooXYZ is weird` therefore satisfies
/// the check for `Foo`; this matches the convention's tolerance for
/// hand-written comments.
#[must_use]
pub fn decide(previous: Option<&str>, symbol: &str, kind: DeclKind) -> CommentDecision {
    let synthesized = synthesizer::synthesize(symbol, kind);
    let already_present = previous.is_some_and(|line| {
        line.trim_start()
            .strip_prefix(COMMENT_MARKER)
            .is_some_and(|rest| rest.trim_start().starts_with(symbol))
    });
    CommentDecision {
        already_present,
        synthesized,
    }
}

/// Inserts missing doc comments into a line sequence
pub struct Annotator {
    matcher: Matcher,
}

impl Annotator {
    /// Create an annotator using the given matcher
    #[must_use]
    pub const fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    /// Annotate a sequence of lines
    ///
    /// Every input line is copied through in order; synthesized
    /// comments are inserted immediately before uncommented
    /// declarations, carrying the declaration's indentation. The
    /// presence check inspects the previously emitted line, so a
    /// declaration on the file's first line counts as uncommented.
    #[must_use]
    pub fn annotate(&self, lines: &[&str]) -> Annotated {
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut state = BlockState::default();
        let mut changed = false;

        for line in lines {
            let matched = self.matcher.classify(line, state.inside);
            state.apply(matched.kind);

            if matches!(matched.kind, DeclKind::TypeDecl | DeclKind::MethodDecl) {
                if let Some(symbol) = matched.symbol.as_deref() {
                    let decision = decide(out.last().map(String::as_str), symbol, matched.kind);
                    if !decision.already_present {
                        out.push(format!(
                            "{}{} {}",
                            matched.indent, COMMENT_MARKER, decision.synthesized
                        ));
                        changed = true;
                    }
                }
            }

            out.push((*line).to_string());
        }

        Annotated { lines: out, changed }
    }

    /// Annotate full file text
    ///
    /// Returns the rewritten text (always with a single trailing
    /// newline) and whether the line sequence changed.
    #[must_use]
    pub fn annotate_text(&self, text: &str) -> (String, bool) {
        let lines: Vec<&str> = text.lines().collect();
        let annotated = self.annotate(&lines);
        let mut output = annotated.lines.join("\n");
        output.push('\n');
        (output, annotated.changed)
    }
}
