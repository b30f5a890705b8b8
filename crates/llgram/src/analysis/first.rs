//! FIRST sets over symbols and production right-hand sides.

use crate::analysis::{AnalysisState, nullable_or_epsilon, sets::TermSet};
use crate::grammar::{GrammarContext, SymbolId};
use log::debug;

/// Computes FIRST for every symbol.
///
/// Terminals are seeded with themselves; nonterminals start empty and grow
/// until a full pass over the productions adds nothing. The `epsilon`
/// terminal participates like any other here and is purged after PREDICT.
pub(crate) fn compute(ctx: &GrammarContext, state: &mut AnalysisState) {
    for id in ctx.symbols().ids() {
        let facts = &mut state.symbols[id.index()];
        facts.first.clear();
        if ctx.symbols().kind(id).is_terminal() {
            facts.first.insert(id);
        }
    }

    let mut passes = 0u32;
    loop {
        passes += 1;
        let mut grew = false;
        for production in ctx.productions() {
            let rhs_first = sequence_first(ctx, state, &production.rhs);
            grew |= state.symbols[production.lhs.index()]
                .first
                .union_into(&rhs_first);
        }
        if !grew {
            break;
        }
    }
    debug!("FIRST converged after {passes} passes");
}

/// FIRST of a symbol sequence: union symbol FIRSTs left to right, stopping
/// after the first symbol that cannot derive the empty string.
pub(crate) fn sequence_first(
    ctx: &GrammarContext,
    state: &AnalysisState,
    sequence: &[SymbolId],
) -> TermSet {
    let mut acc = TermSet::new();
    for &sym in sequence {
        acc.union_into(&state.symbols[sym.index()].first);
        if !nullable_or_epsilon(ctx, state, sym) {
            break;
        }
    }
    acc
}
