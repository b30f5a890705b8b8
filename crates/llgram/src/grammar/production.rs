//! Productions and the ordered production table.

use crate::grammar::{SymbolId, SymbolTable};
use smallvec::SmallVec;
use std::fmt;

/// Identifier of a production. Ids are dense, assigned in declaration order
/// starting at 0; the first production is the start production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductionId(u32);

impl ProductionId {
    /// Builds the id for the production at `index` in declaration order.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rewrite rule `A -> X1 X2 … Xn`.
///
/// The right-hand side may contain the `epsilon` terminal; an rhs consisting
/// solely of `epsilon` derives the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub id: ProductionId,
    pub lhs: SymbolId,
    pub rhs: SmallVec<[SymbolId; 8]>,
}

/// Ordered sequence of productions with dense, stable ids.
#[derive(Debug)]
pub struct ProductionTable {
    productions: Vec<Production>,
}

impl ProductionTable {
    /// Builds the table from productions in declaration order.
    ///
    /// Ids must already be dense and match their position.
    #[must_use]
    pub fn new(productions: Vec<Production>) -> Self {
        debug_assert!(
            productions
                .iter()
                .enumerate()
                .all(|(i, p)| p.id.index() == i),
            "production ids must be dense and match declaration order",
        );
        Self { productions }
    }

    #[must_use]
    pub fn get(&self, id: ProductionId) -> &Production {
        &self.productions[id.index()]
    }

    /// Iterates productions in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Production> {
        self.productions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.productions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Width of the widest left-hand-side name, for aligned listings.
    #[must_use]
    pub fn max_lhs_width(&self, symbols: &SymbolTable) -> usize {
        self.productions
            .iter()
            .map(|p| symbols.resolve(p.lhs).len())
            .max()
            .unwrap_or(0)
    }

    /// Renders a production as `A -> X Y Z`, optionally padding the
    /// left-hand side so the arrows of a listing line up.
    #[must_use]
    pub fn production_text(
        &self,
        production: &Production,
        symbols: &SymbolTable,
        align: bool,
    ) -> String {
        let lhs = symbols.resolve(production.lhs);
        let width = if align {
            self.max_lhs_width(symbols)
        } else {
            lhs.len()
        };
        let mut text = format!("{lhs:width$} ->");
        for &sym in &production.rhs {
            text.push(' ');
            text.push_str(symbols.resolve(sym));
        }
        text
    }
}

impl<'a> IntoIterator for &'a ProductionTable {
    type Item = &'a Production;
    type IntoIter = std::slice::Iter<'a, Production>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn sample() -> (SymbolTable, ProductionTable) {
        let mut symbols = SymbolTable::new();
        let expr = symbols.intern("Expr");
        let t = symbols.intern("T");
        let plus = symbols.intern("+");
        symbols.mark_nonterminal(expr);
        symbols.mark_nonterminal(t);
        symbols.classify_unknowns();

        let table = ProductionTable::new(vec![
            Production {
                id: ProductionId::new(0),
                lhs: expr,
                rhs: smallvec![t, plus, t],
            },
            Production {
                id: ProductionId::new(1),
                lhs: t,
                rhs: smallvec![plus],
            },
        ]);
        (symbols, table)
    }

    #[test]
    fn ids_match_iteration_order() {
        let (_, table) = sample();
        for (i, p) in table.iter().enumerate() {
            assert_eq!(p.id.index(), i);
        }
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn production_text_aligns_to_widest_lhs() {
        let (symbols, table) = sample();
        let first = table.production_text(table.get(ProductionId::new(0)), &symbols, true);
        let second = table.production_text(table.get(ProductionId::new(1)), &symbols, true);

        assert_eq!(first, "Expr -> T + T");
        assert_eq!(second, "T    -> +");
    }

    #[test]
    fn production_text_unaligned() {
        let (symbols, table) = sample();
        let second = table.production_text(table.get(ProductionId::new(1)), &symbols, false);
        assert_eq!(second, "T -> +");
    }
}
