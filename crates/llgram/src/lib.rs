//! # llgram
//!
//! LL(1) analysis for context-free grammars written in a small line-oriented
//! notation: per-symbol FIRST and FOLLOW sets, per-production PREDICT sets,
//! an LL(1) parsing table, and a verdict on whether one-token lookahead
//! suffices to pick a production.
//!
//! ## Quick Start
//!
//! ```rust
//! use llgram::{Analyzer, GrammarContext};
//!
//! let grammar = "\
//! E  -> T E'
//! E' -> + T E'
//! E' -> epsilon
//! T  -> id
//! ";
//!
//! let ctx: GrammarContext = grammar.parse()?;
//! let mut analyzer = Analyzer::new(ctx);
//! analyzer.analyze()?;
//!
//! assert!(analyzer.is_ll1());
//! let e = analyzer.symbols().get("E").unwrap();
//! assert_eq!(analyzer.first(e).names(analyzer.symbols()), vec!["id"]);
//!
//! let table = analyzer.ll1_table();
//! assert_eq!(table.rows().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`grammar`] - symbols, productions, and the grammar context
//! - [`lexer`] / [`parser`] - the textual front end
//! - [`analysis`] - the analysis pipeline and the LL(1) table
//! - [`error`] - error types

pub mod analysis;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use analysis::{Analyzer, Ll1Conflict, Ll1Table, Stage, TermSet};
pub use error::{AnalyzeError, GrammarError};
pub use grammar::{
    GrammarContext, Production, ProductionId, ProductionTable, SymbolId, SymbolKind, SymbolTable,
};
