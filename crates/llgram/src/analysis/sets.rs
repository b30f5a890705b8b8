//! Ordered sets of terminal ids and the two operations that drive every
//! fixpoint loop: a union that reports growth, and a removal that reports
//! whether anything was removed.

use crate::grammar::{SymbolId, SymbolTable};
use std::collections::BTreeSet;

/// A set of terminal symbol ids.
///
/// Iteration follows id order, i.e. interning order, so the same grammar
/// text always yields the same traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    items: BTreeSet<SymbolId>,
}

impl TermSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one element; `true` if the set grew.
    pub fn insert(&mut self, id: SymbolId) -> bool {
        self.items.insert(id)
    }

    /// Removes one element; `true` if it was present.
    pub fn remove(&mut self, id: SymbolId) -> bool {
        self.items.remove(&id)
    }

    /// Inserts every element of `src`; `true` iff this set gained at least
    /// one element. Fixpoint loops terminate when a full pass reports no
    /// growth anywhere.
    pub fn union_into(&mut self, src: &Self) -> bool {
        let mut grew = false;
        for &id in &src.items {
            grew |= self.items.insert(id);
        }
        grew
    }

    #[must_use]
    pub fn contains(&self, id: SymbolId) -> bool {
        self.items.contains(&id)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.items.intersection(&other.items).next().is_some()
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            items: self.items.intersection(&other.items).copied().collect(),
        }
    }

    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.items.is_superset(&other.items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.items.iter().copied()
    }

    /// Resolves every member to its name, in id order.
    #[must_use]
    pub fn names<'a>(&self, symbols: &'a SymbolTable) -> Vec<&'a str> {
        self.items.iter().map(|&id| symbols.resolve(id)).collect()
    }
}

impl FromIterator<SymbolId> for TermSet {
    fn from_iter<I: IntoIterator<Item = SymbolId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
