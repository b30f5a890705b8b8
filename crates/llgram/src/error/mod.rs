//! Error types for grammar ingestion and analysis.
//!
//! LL(1) conflicts are deliberately *not* errors: the analyzer records them
//! and keeps going, so a conflicted grammar still yields sets and a table.

use thiserror::Error;

/// Errors produced by the text front end while building a grammar.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: u32, message: String },

    #[error("grammar contains no productions")]
    EmptyGrammar,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GrammarError {
    pub(crate) fn syntax(line: u32, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// Precondition violations detected at analysis entry.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("grammar contains no productions")]
    EmptyGrammar,

    #[error("symbol `{name}` was never classified as terminal or nonterminal")]
    UnclassifiedSymbol { name: String },
}
