//! Parser for the grammar notation: turns lines of `LHS -> SYM …` into a
//! [`GrammarContext`].
//!
//! Productions keep declaration order and the first one is the start
//! production. Left-hand sides are promoted to nonterminals as they are
//! seen; once every line is read, any symbol still unclassified becomes a
//! plain terminal.

use crate::error::GrammarError;
use crate::grammar::{GrammarContext, Production, ProductionId, ProductionTable, SymbolTable};
use crate::lexer::{self, TokenKind};
use smallvec::SmallVec;

/// Parses grammar text into a context.
///
/// # Errors
///
/// Returns [`GrammarError::Syntax`] for malformed lines and
/// [`GrammarError::EmptyGrammar`] when no production survives.
pub fn parse_grammar(text: &str) -> Result<GrammarContext, GrammarError> {
    let mut symbols = SymbolTable::new();
    let mut productions: Vec<Production> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let tokens = lexer::tokenize_line(line, raw, &mut symbols)?;
        if tokens.is_empty() {
            continue;
        }

        let lhs = match tokens[0].kind {
            TokenKind::Word(id) => id,
            TokenKind::Literal(_) => {
                return Err(GrammarError::syntax(
                    line,
                    format!("literal `{}` cannot appear as a left-hand side", tokens[0].text),
                ));
            }
            TokenKind::Arrow => {
                return Err(GrammarError::syntax(line, "production is missing its left-hand side"));
            }
        };
        if !symbols.mark_nonterminal(lhs) {
            return Err(GrammarError::syntax(
                line,
                format!("terminal `{}` cannot appear as a left-hand side", tokens[0].text),
            ));
        }

        match tokens.get(1) {
            Some(token) if token.kind == TokenKind::Arrow => {}
            _ => {
                return Err(GrammarError::syntax(
                    line,
                    format!("expected `->` after `{}`", tokens[0].text),
                ));
            }
        }

        let mut rhs: SmallVec<[_; 8]> = SmallVec::new();
        for token in &tokens[2..] {
            match token.kind {
                TokenKind::Word(id) | TokenKind::Literal(id) => rhs.push(id),
                TokenKind::Arrow => {
                    return Err(GrammarError::syntax(line, "unexpected `->` in right-hand side"));
                }
            }
        }
        if rhs.is_empty() {
            return Err(GrammarError::syntax(
                line,
                "empty right-hand side; write `epsilon` to derive the empty string",
            ));
        }

        productions.push(Production {
            id: ProductionId::new(productions.len()),
            lhs,
            rhs,
        });
    }

    if productions.is_empty() {
        return Err(GrammarError::EmptyGrammar);
    }
    symbols.classify_unknowns();

    Ok(GrammarContext::new(
        symbols,
        ProductionTable::new(productions),
    ))
}
