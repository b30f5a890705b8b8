//! FOLLOW sets over nonterminals.

use crate::analysis::{AnalysisState, first, nullable_or_epsilon};
use crate::grammar::{GrammarContext, SymbolId};
use log::debug;

/// Computes FOLLOW for every nonterminal.
///
/// FOLLOW of the start production's lhs is seeded with `$` before the
/// fixpoint. Each pass propagates, per production `A -> X1 … Xn`:
///
/// - FIRST of the suffix after each nonterminal position into that
///   nonterminal's FOLLOW;
/// - FOLLOW(A) into every nonterminal of the tail-nullable suffix, walking
///   right to left and stopping at the first symbol that cannot derive the
///   empty string.
pub(crate) fn compute(ctx: &GrammarContext, state: &mut AnalysisState, eof: SymbolId) {
    let start_lhs = ctx.start().lhs;
    state.symbols[start_lhs.index()].follow.insert(eof);

    let mut passes = 0u32;
    loop {
        passes += 1;
        let mut grew = false;
        for production in ctx.productions() {
            let rhs = &production.rhs;
            for (i, &sym) in rhs.iter().enumerate().take(rhs.len().saturating_sub(1)) {
                if !ctx.symbols().kind(sym).is_nonterminal() {
                    continue;
                }
                let suffix_first = first::sequence_first(ctx, state, &rhs[i + 1..]);
                grew |= state.symbols[sym.index()].follow.union_into(&suffix_first);
            }

            let lhs_follow = state.symbols[production.lhs.index()].follow.clone();
            for &sym in rhs.iter().rev() {
                if ctx.symbols().kind(sym).is_nonterminal() {
                    grew |= state.symbols[sym.index()].follow.union_into(&lhs_follow);
                }
                if !nullable_or_epsilon(ctx, state, sym) {
                    break;
                }
            }
        }
        if !grew {
            break;
        }
    }
    debug!("FOLLOW converged after {passes} passes");
}
