//! Line-shape recognition for Go declarations
//!
//! This is deliberately not a Go parser. The model files follow a small
//! number of fixed declaration shapes, so each line is classified with
//! anchored patterns:
//! - `type (` opening a grouped declaration block
//! - a lone `)` closing it
//! - `Name struct {` members inside a grouped block
//! - `type Name struct {` standalone declarations
//! - `func (x *Receiver) Name(` methods on the designated receiver
//!
//! Declarations split across multiple lines are not recognized.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Kind of declaration recognized on a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `type (` opening a grouped declaration block
    GroupedBlockOpen,
    /// Lone `)` closing a grouped declaration block
    GroupedBlockClose,
    /// An exported struct type declaration (grouped or standalone)
    TypeDecl,
    /// An exported method on the designated receiver type
    MethodDecl,
    /// Anything else; copied through untouched
    Other,
}

/// Result of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationMatch {
    /// What the line was recognized as
    pub kind: DeclKind,
    /// Declared symbol name, for `TypeDecl` and `MethodDecl`
    pub symbol: Option<String>,
    /// Leading whitespace of the line, preserved verbatim
    pub indent: String,
}

impl DeclarationMatch {
    fn bare(kind: DeclKind) -> Self {
        Self {
            kind,
            symbol: None,
            indent: String::new(),
        }
    }

    fn named(kind: DeclKind, indent: &str, symbol: &str) -> Self {
        Self {
            kind,
            symbol: Some(symbol.to_string()),
            indent: indent.to_string(),
        }
    }
}

// Exported identifiers start with an ASCII uppercase letter; lowercase
// names are never annotated.
static GROUP_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*type\s*\(\s*$").unwrap());
static GROUP_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\)\s*$").unwrap());
static GROUPED_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([A-Z][A-Za-z0-9_]*)\s+struct\s*\{").unwrap());
static STANDALONE_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)type\s+([A-Z][A-Za-z0-9_]*)\s+struct\s*\{").unwrap());

/// Classifies single lines against the declaration shapes
pub struct Matcher {
    method: Regex,
}

impl Matcher {
    /// Create a matcher targeting methods on the given receiver type
    ///
    /// # Errors
    ///
    /// Returns an error if the receiver-specific pattern fails to
    /// compile.
    pub fn new(receiver: &str) -> Result<Self> {
        let pattern = format!(
            r"^(\s*)func\s+\([A-Za-z_][A-Za-z0-9_]*\s+\*{}\)\s+([A-Z][A-Za-z0-9_]*)\(",
            regex::escape(receiver)
        );
        let method = Regex::new(&pattern)?;
        Ok(Self { method })
    }

    /// Classify a single line
    ///
    /// Rules are evaluated in priority order. `inside_block` selects
    /// between the grouped member shape (no `type` keyword) and the
    /// standalone shape.
    #[must_use]
    pub fn classify(&self, line: &str, inside_block: bool) -> DeclarationMatch {
        if GROUP_OPEN.is_match(line) {
            return DeclarationMatch::bare(DeclKind::GroupedBlockOpen);
        }
        if GROUP_CLOSE.is_match(line) {
            return DeclarationMatch::bare(DeclKind::GroupedBlockClose);
        }

        let type_decl = if inside_block {
            GROUPED_TYPE.captures(line)
        } else {
            STANDALONE_TYPE.captures(line)
        };
        if let Some(caps) = type_decl {
            return DeclarationMatch::named(DeclKind::TypeDecl, &caps[1], &caps[2]);
        }

        if let Some(caps) = self.method.captures(line) {
            return DeclarationMatch::named(DeclKind::MethodDecl, &caps[1], &caps[2]);
        }

        DeclarationMatch::bare(DeclKind::Other)
    }
}
