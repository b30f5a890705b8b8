//! Tokenizer for the line-oriented grammar notation.
//!
//! A line holds at most one production: `LHS -> SYM1 SYM2 …`. Symbols are
//! whitespace-separated words; `->` is the production arrow; a double-quoted
//! word is a literal terminal; `#` starts a comment running to end of line.
//!
//! Interning happens here: every word and literal lands in the symbol table
//! as it is scanned, and quoted literals are promoted to terminals on sight.

use crate::error::GrammarError;
use crate::grammar::{SymbolId, SymbolTable, keyword};
use compact_str::CompactString;

/// What a scanned token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare symbol name.
    Word(SymbolId),
    /// A double-quoted literal terminal.
    Literal(SymbolId),
    /// The production arrow `->`.
    Arrow,
}

/// A token scanned from one grammar line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: CompactString,
    pub line: u32,
}

/// Tokenizes a single line, interning symbols into `symbols`.
///
/// Comment-only and blank lines yield an empty token list.
///
/// # Errors
///
/// Returns [`GrammarError::Syntax`] for unterminated or empty literals.
pub fn tokenize_line(
    line_no: u32,
    line: &str,
    symbols: &mut SymbolTable,
) -> Result<Vec<Token>, GrammarError> {
    let mut tokens = Vec::new();
    let bytes = line.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let rest = &line[pos..];
        let ch = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };

        if ch == '#' {
            break;
        }
        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        if ch == '"' {
            let body = &rest[1..];
            let Some(end) = body.find('"') else {
                return Err(GrammarError::syntax(line_no, "unterminated literal"));
            };
            let word = &body[..end];
            if word.is_empty() {
                return Err(GrammarError::syntax(line_no, "empty literal"));
            }
            let id = symbols.intern(word);
            symbols.mark_literal(id);
            tokens.push(Token {
                kind: TokenKind::Literal(id),
                text: CompactString::new(word),
                line: line_no,
            });
            pos += 1 + end + 1;
            continue;
        }

        let end = rest
            .find(|c: char| c.is_whitespace() || c == '"' || c == '#')
            .unwrap_or(rest.len());
        let word = &rest[..end];
        let kind = if word == keyword::ARROW {
            TokenKind::Arrow
        } else {
            TokenKind::Word(symbols.intern(word))
        };
        tokens.push(Token {
            kind,
            text: CompactString::new(word),
            line: line_no,
        });
        pos += end;
    }

    Ok(tokens)
}
