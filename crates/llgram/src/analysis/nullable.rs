//! Nullability: which nonterminals derive the empty string.

use crate::analysis::{AnalysisState, nullable_or_epsilon};
use crate::grammar::{GrammarContext, SymbolId};
use log::debug;

/// Marks every nullable nonterminal and records per-production rhs
/// nullability.
///
/// A nonterminal is nullable iff some production's rhs consists solely of
/// nullable symbols or the `epsilon` terminal. Flags only flip from false to
/// true, so the pass count is bounded by the number of nonterminals.
pub(crate) fn compute(ctx: &GrammarContext, state: &mut AnalysisState) {
    let mut passes = 0u32;
    loop {
        passes += 1;
        let mut changed = false;
        for production in ctx.productions() {
            if rhs_nullable(ctx, state, &production.rhs) {
                let facts = &mut state.symbols[production.lhs.index()];
                if !facts.nullable {
                    facts.nullable = true;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    for production in ctx.productions() {
        state.rhs[production.id.index()].nullable = rhs_nullable(ctx, state, &production.rhs);
    }
    debug!("nullability converged after {passes} passes");
}

fn rhs_nullable(ctx: &GrammarContext, state: &AnalysisState, rhs: &[SymbolId]) -> bool {
    rhs.iter()
        .all(|&sym| nullable_or_epsilon(ctx, state, sym))
}
