//! The grammar aggregate handed to the analyzer.

use crate::error::GrammarError;
use crate::grammar::{Production, ProductionTable, SymbolTable};
use crate::parser;
use std::io;
use std::str::FromStr;

/// A grammar: symbol table, production table, and the implicit start
/// production (id 0). Owns both tables for the duration of the analysis.
#[derive(Debug)]
pub struct GrammarContext {
    symbols: SymbolTable,
    productions: ProductionTable,
}

impl GrammarContext {
    #[must_use]
    pub fn new(symbols: SymbolTable, productions: ProductionTable) -> Self {
        Self {
            symbols,
            productions,
        }
    }

    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(crate) const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    #[must_use]
    pub const fn productions(&self) -> &ProductionTable {
        &self.productions
    }

    /// The start production.
    ///
    /// # Panics
    ///
    /// Panics if the production table is empty; the front end rejects empty
    /// grammars before a context can be built from text.
    #[must_use]
    pub fn start(&self) -> &Production {
        self.productions.get(crate::grammar::ProductionId::new(0))
    }

    /// Reads grammar text from `reader` and parses it.
    ///
    /// # Errors
    ///
    /// Read failures surface as [`GrammarError::Io`]; malformed text as the
    /// usual syntax errors.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self, GrammarError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parser::parse_grammar(&text)
    }
}

impl FromStr for GrammarContext {
    type Err = GrammarError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parser::parse_grammar(text)
    }
}
