//! End-to-end tests for the analysis pipeline over small grammars.

use llgram::{Analyzer, GrammarContext, SymbolId};

fn analyzed(text: &str) -> Analyzer {
    let ctx: GrammarContext = text.parse().expect("grammar should parse");
    let mut analyzer = Analyzer::new(ctx);
    analyzer.analyze().expect("analysis should succeed");
    analyzer
}

fn sym(analyzer: &Analyzer, name: &str) -> SymbolId {
    analyzer
        .symbols()
        .get(name)
        .unwrap_or_else(|| panic!("symbol `{name}` should exist"))
}

fn sorted_first(analyzer: &Analyzer, name: &str) -> Vec<String> {
    sorted(analyzer.first(sym(analyzer, name)).names(analyzer.symbols()))
}

fn sorted_follow(analyzer: &Analyzer, name: &str) -> Vec<String> {
    sorted(analyzer.follow(sym(analyzer, name)).names(analyzer.symbols()))
}

fn sorted_predict(analyzer: &Analyzer, id: usize) -> Vec<String> {
    let production = analyzer.productions().iter().as_slice()[id].id;
    sorted(analyzer.predict(production).names(analyzer.symbols()))
}

fn sorted(mut names: Vec<&str>) -> Vec<String> {
    names.sort_unstable();
    names.into_iter().map(str::to_owned).collect()
}

#[test]
fn balanced_parentheses() {
    let analyzer = analyzed("S -> ( S ) S\nS -> epsilon\n");

    assert!(analyzer.nullable(sym(&analyzer, "S")));
    assert_eq!(sorted_first(&analyzer, "S"), ["("]);
    assert_eq!(sorted_follow(&analyzer, "S"), ["$", ")"]);
    assert_eq!(sorted_predict(&analyzer, 0), ["("]);
    assert_eq!(sorted_predict(&analyzer, 1), ["$", ")"]);
    assert!(analyzer.is_ll1());
}

const ARITHMETIC: &str = "\
E  -> T E'
E' -> + T E'
E' -> epsilon
T  -> F T'
T' -> * F T'
T' -> epsilon
F  -> ( E )
F  -> id
";

#[test]
fn arithmetic_first_sets() {
    let analyzer = analyzed(ARITHMETIC);

    for nt in ["E", "T", "F"] {
        assert_eq!(sorted_first(&analyzer, nt), ["(", "id"], "FIRST({nt})");
    }
    assert_eq!(sorted_first(&analyzer, "E'"), ["+"]);
    assert_eq!(sorted_first(&analyzer, "T'"), ["*"]);
}

#[test]
fn arithmetic_follow_sets() {
    let analyzer = analyzed(ARITHMETIC);

    assert_eq!(sorted_follow(&analyzer, "E"), ["$", ")"]);
    assert_eq!(sorted_follow(&analyzer, "E'"), ["$", ")"]);
    assert_eq!(sorted_follow(&analyzer, "T"), ["$", ")", "+"]);
    assert_eq!(sorted_follow(&analyzer, "T'"), ["$", ")", "+"]);
    assert_eq!(sorted_follow(&analyzer, "F"), ["$", ")", "*", "+"]);
}

#[test]
fn arithmetic_predict_sets_and_verdict() {
    let analyzer = analyzed(ARITHMETIC);

    assert_eq!(sorted_predict(&analyzer, 1), ["+"]);
    assert_eq!(sorted_predict(&analyzer, 2), ["$", ")"]);
    assert_eq!(sorted_predict(&analyzer, 5), ["$", ")", "+"]);
    assert!(analyzer.is_ll1());
    assert!(analyzer.conflict().is_none());
}

#[test]
fn dangling_alternatives_conflict() {
    let analyzer = analyzed("S -> a B\nB -> b\nB -> b c\n");

    assert!(!analyzer.is_ll1());
    let conflict = analyzer.conflict().expect("a conflict should be recorded");
    assert_eq!(conflict.production.index(), 2);
    assert_eq!(analyzer.symbols().resolve(conflict.lhs), "B");
    assert_eq!(sorted(conflict.overlap.names(analyzer.symbols())), ["b"]);
}

#[test]
fn deep_nullability_chain() {
    let analyzer = analyzed("A -> B C D\nB -> epsilon\nC -> epsilon\nD -> epsilon\n");

    for nt in ["A", "B", "C", "D"] {
        assert!(analyzer.nullable(sym(&analyzer, nt)), "nullable({nt})");
    }
    assert_eq!(sorted_follow(&analyzer, "A"), ["$"]);
    assert!(sorted_predict(&analyzer, 0).contains(&"$".to_string()));
}

#[test]
fn epsilon_never_survives_into_exported_sets() {
    let analyzer = analyzed(ARITHMETIC);
    let epsilon = sym(&analyzer, "epsilon");

    for id in analyzer.symbols().ids() {
        assert!(!analyzer.first(id).contains(epsilon));
        assert!(!analyzer.follow(id).contains(epsilon));
    }
    for production in analyzer.productions() {
        assert!(!analyzer.rhs_first(production.id).contains(epsilon));
        assert!(!analyzer.predict(production.id).contains(epsilon));
    }
}

#[test]
fn first_of_a_terminal_is_itself() {
    let analyzer = analyzed(ARITHMETIC);
    for (id, _) in analyzer.symbols().iter() {
        let kind = analyzer.symbols().kind(id);
        if kind.is_terminal() && !kind.is_epsilon() {
            let first = analyzer.first(id);
            assert_eq!(first.len(), 1);
            assert!(first.contains(id));
        }
    }
}

#[test]
fn predict_extends_rhs_first() {
    let analyzer = analyzed(ARITHMETIC);
    for production in analyzer.productions() {
        let predict = analyzer.predict(production.id);
        assert!(predict.is_superset(analyzer.rhs_first(production.id)));
        if analyzer.rhs_nullable(production.id) {
            assert!(predict.is_superset(analyzer.follow(production.lhs)));
        }
    }
}

#[test]
fn analyze_is_idempotent() {
    let mut analyzer = analyzed(ARITHMETIC);
    let before: Vec<_> = analyzer
        .productions()
        .iter()
        .map(|p| analyzer.predict(p.id).clone())
        .collect();

    analyzer.analyze().expect("re-analysis should succeed");

    let after: Vec<_> = analyzer
        .productions()
        .iter()
        .map(|p| analyzer.predict(p.id).clone())
        .collect();
    assert_eq!(before, after);
    assert!(analyzer.is_ll1());
}

#[test]
fn duplicate_productions_conflict_with_each_other() {
    let analyzer = analyzed("S -> a\nS -> a\n");

    assert!(!analyzer.is_ll1());
    let conflict = analyzer.conflict().expect("duplicates should conflict");
    assert_eq!(conflict.production.index(), 1);
}

#[test]
fn mid_rhs_epsilon_is_semantically_ignored() {
    let with = analyzed("A -> x epsilon y\n");
    let without = analyzed("A -> x y\n");
    assert_eq!(sorted_first(&with, "A"), sorted_first(&without, "A"));
    assert!(!with.rhs_nullable(with.productions().iter().as_slice()[0].id));

    // A leading epsilon must not hide the symbols behind it.
    let leading = analyzed("A -> epsilon y\n");
    assert_eq!(sorted_first(&leading, "A"), ["y"]);
    assert!(!leading.rhs_nullable(leading.productions().iter().as_slice()[0].id));
}
