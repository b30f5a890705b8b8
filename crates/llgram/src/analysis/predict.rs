//! PREDICT sets per production. Single pass, no fixpoint.

use crate::analysis::{AnalysisState, first};
use crate::grammar::GrammarContext;

/// `PREDICT(A -> α) = FIRST(α) ∪ (FOLLOW(A) if α derives the empty string)`.
pub(crate) fn compute(ctx: &GrammarContext, state: &mut AnalysisState) {
    for production in ctx.productions() {
        let rhs_first = first::sequence_first(ctx, state, &production.rhs);
        let mut predict = rhs_first.clone();
        if state.rhs[production.id.index()].nullable {
            predict.union_into(&state.symbols[production.lhs.index()].follow);
        }

        let facts = &mut state.rhs[production.id.index()];
        facts.first = rhs_first;
        facts.predict = predict;
    }
}
