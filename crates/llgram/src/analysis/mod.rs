//! # Predictive Analysis
//!
//! The LL(1) analysis pipeline over a [`GrammarContext`]: nullability, FIRST,
//! FOLLOW, PREDICT, LL(1) validation, and projection into a parsing table.
//!
//! The passes interlock: FOLLOW consumes FIRST, PREDICT consumes both, and
//! the LL(1) test and the table consume PREDICT. Each fixpoint is monotone
//! (sets only grow, flags only flip to true), so every loop terminates.
//!
//! ## Usage
//!
//! ```rust
//! use llgram::{Analyzer, GrammarContext};
//!
//! let ctx: GrammarContext = "S -> ( S ) S\nS -> epsilon\n".parse()?;
//! let mut analyzer = Analyzer::new(ctx);
//! analyzer.analyze()?;
//!
//! assert!(analyzer.is_ll1());
//! let s = analyzer.symbols().get("S").unwrap();
//! assert!(analyzer.nullable(s));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod first;
pub mod follow;
pub mod nullable;
pub mod predict;
pub mod sets;
pub mod table;
pub mod validate;

pub use sets::TermSet;
pub use table::Ll1Table;
pub use validate::Ll1Conflict;

use crate::error::AnalyzeError;
use crate::grammar::{GrammarContext, ProductionId, ProductionTable, SymbolId, SymbolTable, keyword};

/// Progress of the analysis pipeline. Stages only advance; re-entering a
/// completed stage is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Built,
    NullabilityDone,
    FirstDone,
    FollowDone,
    PredictDone,
    ValidatedOnly,
    TableReady,
}

/// Computed facts for one symbol.
#[derive(Debug, Clone, Default)]
pub(crate) struct SymbolFacts {
    pub nullable: bool,
    pub first: TermSet,
    pub follow: TermSet,
}

/// Computed facts for one production's right-hand side.
#[derive(Debug, Clone, Default)]
pub(crate) struct RhsFacts {
    pub nullable: bool,
    pub first: TermSet,
    pub predict: TermSet,
}

/// Side tables the engines fill in, keyed by symbol and production index.
pub(crate) struct AnalysisState {
    pub symbols: Vec<SymbolFacts>,
    pub rhs: Vec<RhsFacts>,
}

/// `true` when `sym` can derive the empty string: a nullable nonterminal or
/// the `epsilon` terminal itself, so a mid-rhs `epsilon` never blocks a walk.
pub(crate) fn nullable_or_epsilon(
    ctx: &GrammarContext,
    state: &AnalysisState,
    sym: SymbolId,
) -> bool {
    state.symbols[sym.index()].nullable || ctx.symbols().kind(sym).is_epsilon()
}

/// Runs the analysis pipeline over an owned grammar and serves the results.
///
/// The analyzer is total: any well-formed grammar yields sets and a table,
/// LL(1) or not. Conflicts are recorded, never raised.
pub struct Analyzer {
    ctx: GrammarContext,
    state: AnalysisState,
    stage: Stage,
    conflict: Option<Ll1Conflict>,
    table: Option<Ll1Table>,
    eof: SymbolId,
    epsilon: SymbolId,
}

impl Analyzer {
    /// Wraps a grammar for analysis. The reserved `$` and `epsilon`
    /// terminals are interned here if the grammar text never spelled them.
    #[must_use]
    pub fn new(mut ctx: GrammarContext) -> Self {
        let eof = ctx.symbols_mut().intern(keyword::EOF);
        let epsilon = ctx.symbols_mut().intern(keyword::EPSILON);
        let state = AnalysisState {
            symbols: vec![SymbolFacts::default(); ctx.symbols().len()],
            rhs: vec![RhsFacts::default(); ctx.productions().len()],
        };
        Self {
            ctx,
            state,
            stage: Stage::Built,
            conflict: None,
            table: None,
            eof,
            epsilon,
        }
    }

    /// Runs nullability, FIRST, FOLLOW, PREDICT, the epsilon purge, and
    /// LL(1) validation, in that order. Idempotent: a second call is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::EmptyGrammar`] for a grammar without
    /// productions and [`AnalyzeError::UnclassifiedSymbol`] when a symbol is
    /// still unclassified, which a correct front end never produces.
    pub fn analyze(&mut self) -> Result<(), AnalyzeError> {
        if self.ctx.productions().is_empty() {
            return Err(AnalyzeError::EmptyGrammar);
        }
        if let Some(id) = self.ctx.symbols().unclassified() {
            return Err(AnalyzeError::UnclassifiedSymbol {
                name: self.ctx.symbols().resolve(id).to_string(),
            });
        }
        if self.stage >= Stage::ValidatedOnly {
            return Ok(());
        }

        if self.stage < Stage::NullabilityDone {
            nullable::compute(&self.ctx, &mut self.state);
            self.stage = Stage::NullabilityDone;
        }
        if self.stage < Stage::FirstDone {
            first::compute(&self.ctx, &mut self.state);
            self.stage = Stage::FirstDone;
        }
        if self.stage < Stage::FollowDone {
            follow::compute(&self.ctx, &mut self.state, self.eof);
            self.stage = Stage::FollowDone;
        }
        if self.stage < Stage::PredictDone {
            predict::compute(&self.ctx, &mut self.state);
            self.stage = Stage::PredictDone;
        }

        self.purge_epsilon();
        self.conflict = validate::first_conflict(&self.ctx, &self.state);
        self.stage = Stage::ValidatedOnly;
        Ok(())
    }

    // Downstream consumers only ever see real terminals.
    fn purge_epsilon(&mut self) {
        for facts in &mut self.state.symbols {
            facts.first.remove(self.epsilon);
            facts.follow.remove(self.epsilon);
        }
        for facts in &mut self.state.rhs {
            facts.first.remove(self.epsilon);
            facts.predict.remove(self.epsilon);
        }
    }

    /// Whether all PREDICT sets within each lhs group are pairwise disjoint.
    /// Meaningful only after [`analyze`](Self::analyze) has run.
    #[must_use]
    pub fn is_ll1(&self) -> bool {
        self.stage >= Stage::ValidatedOnly && self.conflict.is_none()
    }

    /// The first recorded PREDICT overlap, if any.
    #[must_use]
    pub const fn conflict(&self) -> Option<&Ll1Conflict> {
        self.conflict.as_ref()
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn nullable(&self, sym: SymbolId) -> bool {
        self.state.symbols[sym.index()].nullable
    }

    #[must_use]
    pub fn first(&self, sym: SymbolId) -> &TermSet {
        &self.state.symbols[sym.index()].first
    }

    #[must_use]
    pub fn follow(&self, sym: SymbolId) -> &TermSet {
        &self.state.symbols[sym.index()].follow
    }

    #[must_use]
    pub fn rhs_first(&self, id: ProductionId) -> &TermSet {
        &self.state.rhs[id.index()].first
    }

    #[must_use]
    pub fn predict(&self, id: ProductionId) -> &TermSet {
        &self.state.rhs[id.index()].predict
    }

    #[must_use]
    pub fn rhs_nullable(&self, id: ProductionId) -> bool {
        self.state.rhs[id.index()].nullable
    }

    /// Projects (and caches) the LL(1) table. Call after
    /// [`analyze`](Self::analyze).
    pub fn ll1_table(&mut self) -> &Ll1Table {
        debug_assert!(
            self.stage >= Stage::ValidatedOnly,
            "analyze() must run before table projection",
        );
        if self.stage < Stage::TableReady {
            self.stage = Stage::TableReady;
        }
        let (ctx, state) = (&self.ctx, &self.state);
        self.table.get_or_insert_with(|| Ll1Table::project(ctx, state))
    }

    /// The cached table, if [`ll1_table`](Self::ll1_table) has run.
    #[must_use]
    pub const fn table(&self) -> Option<&Ll1Table> {
        self.table.as_ref()
    }

    #[must_use]
    pub const fn context(&self) -> &GrammarContext {
        &self.ctx
    }

    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        self.ctx.symbols()
    }

    #[must_use]
    pub const fn productions(&self) -> &ProductionTable {
        self.ctx.productions()
    }
}
