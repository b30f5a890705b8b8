//! Projection of PREDICT sets into the two-dimensional LL(1) table.

use crate::analysis::AnalysisState;
use crate::grammar::{GrammarContext, ProductionId, SymbolId, keyword};
use hashbrown::HashMap;
use std::collections::BTreeSet;

/// The `(nonterminal, terminal) -> {production ids}` table.
///
/// Rows are nonterminals in first-occurrence order over the lhs scan.
/// Columns are terminals in first-occurrence order over the rhs scan, with
/// the EOF terminal moved to the last column. A cell with more than one
/// production id is an LL(1) conflict.
#[derive(Debug, Clone, PartialEq)]
pub struct Ll1Table {
    rows: Vec<SymbolId>,
    cols: Vec<SymbolId>,
    cells: HashMap<(usize, usize), BTreeSet<ProductionId>, ahash::RandomState>,
}

impl Ll1Table {
    pub(crate) fn project(ctx: &GrammarContext, state: &AnalysisState) -> Self {
        let symbols = ctx.symbols();

        let mut cols = Vec::new();
        let mut col_index: HashMap<SymbolId, usize, ahash::RandomState> =
            HashMap::with_hasher(ahash::RandomState::new());
        for production in ctx.productions() {
            for &sym in &production.rhs {
                let kind = symbols.kind(sym);
                if kind.is_nonterminal() || kind.is_epsilon() {
                    continue;
                }
                col_index.entry(sym).or_insert_with(|| {
                    cols.push(sym);
                    cols.len() - 1
                });
            }
        }

        // EOF earns a column through FOLLOW seeding even when no rhs ever
        // spells `$`; either way it ends up rightmost.
        if let Some(eof) = symbols.get(keyword::EOF) {
            let predicted = ctx
                .productions()
                .iter()
                .any(|p| state.rhs[p.id.index()].predict.contains(eof));
            if predicted && !col_index.contains_key(&eof) {
                col_index.insert(eof, cols.len());
                cols.push(eof);
            }
            if let Some(&pos) = col_index.get(&eof) {
                let last = cols.len() - 1;
                if pos != last {
                    cols.swap(pos, last);
                    col_index.insert(cols[pos], pos);
                    col_index.insert(eof, last);
                }
            }
        }

        let mut rows = Vec::new();
        let mut row_index: HashMap<SymbolId, usize, ahash::RandomState> =
            HashMap::with_hasher(ahash::RandomState::new());
        for production in ctx.productions() {
            row_index.entry(production.lhs).or_insert_with(|| {
                rows.push(production.lhs);
                rows.len() - 1
            });
        }

        let mut cells: HashMap<(usize, usize), BTreeSet<ProductionId>, ahash::RandomState> =
            HashMap::with_hasher(ahash::RandomState::new());
        for production in ctx.productions() {
            let row = row_index[&production.lhs];
            for term in state.rhs[production.id.index()].predict.iter() {
                if let Some(&col) = col_index.get(&term) {
                    cells.entry((row, col)).or_default().insert(production.id);
                }
            }
        }

        Self { rows, cols, cells }
    }

    /// Row headers: nonterminals in first-occurrence order.
    #[must_use]
    pub fn rows(&self) -> &[SymbolId] {
        &self.rows
    }

    /// Column headers: terminals in first-occurrence order, EOF last.
    #[must_use]
    pub fn cols(&self) -> &[SymbolId] {
        &self.cols
    }

    /// Productions selected at `(row, col)`; `None` for an empty cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&BTreeSet<ProductionId>> {
        self.cells.get(&(row, col))
    }

    /// Whether any cell holds more than one production.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        self.cells.values().any(|ids| ids.len() > 1)
    }
}
