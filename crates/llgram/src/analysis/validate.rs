//! LL(1) validation: PREDICT-set disjointness across productions sharing a
//! left-hand side.

use crate::analysis::{AnalysisState, sets::TermSet};
use crate::grammar::{GrammarContext, ProductionId, SymbolId};
use hashbrown::HashMap;
use log::warn;

/// A PREDICT-set overlap between two productions of the same nonterminal.
#[derive(Debug, Clone)]
pub struct Ll1Conflict {
    /// The nonterminal whose alternatives collide.
    pub lhs: SymbolId,
    /// The later of the two colliding productions, in declaration order.
    pub production: ProductionId,
    /// The terminals both PREDICT sets claim.
    pub overlap: TermSet,
}

/// Scans productions in id order and reports the first PREDICT overlap
/// within an lhs group. `None` means the grammar is LL(1).
pub(crate) fn first_conflict(
    ctx: &GrammarContext,
    state: &AnalysisState,
) -> Option<Ll1Conflict> {
    let mut claimed: HashMap<SymbolId, TermSet, ahash::RandomState> =
        HashMap::with_hasher(ahash::RandomState::new());

    for production in ctx.productions() {
        let predict = &state.rhs[production.id.index()].predict;
        let group = claimed.entry(production.lhs).or_default();
        if group.intersects(predict) {
            let overlap = group.intersection(predict);
            warn!(
                "production {} overlaps an earlier alternative of `{}` on {:?}; grammar is not LL(1)",
                production.id,
                ctx.symbols().resolve(production.lhs),
                overlap.names(ctx.symbols()),
            );
            return Some(Ll1Conflict {
                lhs: production.lhs,
                production: production.id,
                overlap,
            });
        }
        group.union_into(predict);
    }

    None
}
