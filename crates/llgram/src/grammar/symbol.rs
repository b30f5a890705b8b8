//! Symbol interning and classification.
//!
//! Every symbol name is interned exactly once; identity is the interned key,
//! so comparisons and set membership are integer operations. A symbol's kind
//! is settled in three phases: it is created as [`SymbolKind::Unknown`],
//! quoted literals are promoted to a terminal variant by the lexer, and the
//! parser promotes every left-hand side to [`SymbolKind::Nonterminal`] before
//! turning the remaining unknowns into plain terminals.

use crate::grammar::keyword;
use lasso::{Key, Rodeo, Spur};
use std::fmt;

/// A lightweight handle to an interned symbol.
///
/// Ordering follows interning order, which the front end visits in grammar
/// declaration order, so ordered sets of ids iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(Spur);

impl SymbolId {
    /// Dense index of this symbol, usable for side tables.
    pub(crate) fn index(self) -> usize {
        self.0.into_usize()
    }
}

/// Classification of an interned symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Interned but not yet classified.
    Unknown,
    /// Appears as the left-hand side of at least one production.
    Nonterminal,
    /// A plain input token.
    Terminal,
    /// The end-of-input terminal `$`.
    TerminalEof,
    /// The empty-string terminal `epsilon`.
    TerminalEpsilon,
}

impl SymbolKind {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Terminal | Self::TerminalEof | Self::TerminalEpsilon
        )
    }

    #[must_use]
    pub const fn is_nonterminal(self) -> bool {
        matches!(self, Self::Nonterminal)
    }

    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::TerminalEof)
    }

    #[must_use]
    pub const fn is_epsilon(self) -> bool {
        matches!(self, Self::TerminalEpsilon)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Nonterminal => "nonterminal",
            Self::Terminal => "terminal",
            Self::TerminalEof => "terminal(eof)",
            Self::TerminalEpsilon => "terminal(epsilon)",
        }
    }
}

/// Interns symbol names and tracks their classification.
#[derive(Debug)]
pub struct SymbolTable {
    names: Rodeo,
    kinds: Vec<SymbolKind>,
    alien: SymbolId,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        let mut names = Rodeo::new();
        let alien = SymbolId(names.get_or_intern_static(keyword::ALIEN));
        Self {
            names,
            kinds: vec![SymbolKind::Terminal],
            alien,
        }
    }

    /// Returns the unique symbol for `name`, creating it on first sight.
    ///
    /// Fresh symbols start as [`SymbolKind::Unknown`], except the reserved
    /// names `epsilon` and `$`, which are terminal from birth.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        assert!(!name.is_empty(), "symbol names must be non-empty");
        let id = SymbolId(self.names.get_or_intern(name));
        if id.index() == self.kinds.len() {
            self.kinds.push(match name {
                keyword::EPSILON => SymbolKind::TerminalEpsilon,
                keyword::EOF => SymbolKind::TerminalEof,
                _ => SymbolKind::Unknown,
            });
        }
        id
    }

    /// Looks up an already-interned symbol.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.names.get(name).map(SymbolId)
    }

    /// Resolves a symbol back to its name.
    #[must_use]
    pub fn resolve(&self, id: SymbolId) -> &str {
        self.names.resolve(&id.0)
    }

    #[must_use]
    pub fn kind(&self, id: SymbolId) -> SymbolKind {
        self.kinds[id.index()]
    }

    /// Promotes a quoted literal to a terminal. Reserved terminals keep their
    /// more specific kind; symbols already classified are left untouched.
    pub fn mark_literal(&mut self, id: SymbolId) {
        if self.kinds[id.index()] == SymbolKind::Unknown {
            self.kinds[id.index()] = SymbolKind::Terminal;
        }
    }

    /// Promotes a production's left-hand side to a nonterminal.
    ///
    /// Returns `false` when the symbol is already a terminal, which the
    /// caller reports as a syntax error.
    pub fn mark_nonterminal(&mut self, id: SymbolId) -> bool {
        match self.kinds[id.index()] {
            SymbolKind::Unknown | SymbolKind::Nonterminal => {
                self.kinds[id.index()] = SymbolKind::Nonterminal;
                true
            }
            _ => false,
        }
    }

    /// Turns every remaining unknown into a plain terminal. Runs once, after
    /// all productions have been ingested.
    pub fn classify_unknowns(&mut self) {
        for kind in &mut self.kinds {
            if *kind == SymbolKind::Unknown {
                *kind = SymbolKind::Terminal;
            }
        }
    }

    /// First symbol still unclassified, if any.
    #[must_use]
    pub fn unclassified(&self) -> Option<SymbolId> {
        self.ids()
            .find(|&id| self.kinds[id.index()] == SymbolKind::Unknown)
    }

    /// The sentinel terminal that belongs to no grammar.
    ///
    /// Its FIRST set is `{alien}`; it must never appear in exported output.
    #[must_use]
    pub const fn alien(&self) -> SymbolId {
        self.alien
    }

    /// Number of interned symbols, sentinel included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All symbol ids in interning order, sentinel included.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.names.iter().map(|(key, _)| SymbolId(key))
    }

    /// Deterministic by-name traversal for reporting; the sentinel is hidden.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        let alien = self.alien;
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(key, name)| (SymbolId(key), name))
            .filter(|&(id, _)| id != alien)
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1));
        entries.into_iter()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .iter()
            .map(|(_, name)| name.len())
            .max()
            .unwrap_or(0);
        for (id, name) in self.iter() {
            writeln!(f, "{name:width$}  {}", self.kind(id).label())?;
        }
        Ok(())
    }
}
