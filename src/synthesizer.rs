//! Convention-driven comment synthesis
//!
//! Comment text is a pure function of the symbol name and declaration
//! kind. The synthesizer never looks at field lists or method bodies,
//! and never includes the `//` marker; the annotator prefixes marker
//! and indentation.

use crate::matcher::DeclKind;

/// Produce the canonical doc-comment text for a declaration
#[must_use]
pub fn synthesize(symbol: &str, kind: DeclKind) -> String {
    match kind {
        DeclKind::MethodDecl => format!(
            "{symbol} returns {symbol} for the current branch or organization where applicable."
        ),
        _ => synthesize_type(symbol),
    }
}

fn synthesize_type(symbol: &str) -> String {
    if let Some(base) = symbol.strip_suffix("Response") {
        format!("{symbol} represents the response structure for {base}.")
    } else if let Some(base) = symbol.strip_suffix("Request") {
        format!("{symbol} represents the request structure for {base}.")
    } else {
        format!("{symbol} represents the {symbol} model.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_suffix() {
        assert_eq!(
            synthesize("WidgetResponse", DeclKind::TypeDecl),
            "WidgetResponse represents the response structure for Widget."
        );
    }

    #[test]
    fn test_request_suffix() {
        assert_eq!(
            synthesize("WidgetRequest", DeclKind::TypeDecl),
            "WidgetRequest represents the request structure for Widget."
        );
    }

    #[test]
    fn test_plain_model() {
        assert_eq!(
            synthesize("Widget", DeclKind::TypeDecl),
            "Widget represents the Widget model."
        );
    }

    #[test]
    fn test_response_checked_before_request() {
        // "Response" wins for names carrying both words
        assert_eq!(
            synthesize("PaymentRequestResponse", DeclKind::TypeDecl),
            "PaymentRequestResponse represents the response structure for PaymentRequest."
        );
    }

    #[test]
    fn test_method_template() {
        assert_eq!(
            synthesize("CompanyCurrentBranch", DeclKind::MethodDecl),
            "CompanyCurrentBranch returns CompanyCurrentBranch for the current branch or organization where applicable."
        );
    }
}
