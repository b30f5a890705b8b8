//! Tests for the HTML report.

use llgram::{Analyzer, GrammarContext};
use llgram_tools::render::render_html;

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

fn report(text: &str) -> String {
    let ctx: GrammarContext = text.parse().expect("grammar should parse");
    let mut analyzer = Analyzer::new(ctx);
    analyzer.analyze().expect("analysis should succeed");
    let table = analyzer.ll1_table().clone();
    render_html(&analyzer, &table)
}

#[test]
fn report_contains_both_tables() {
    let html = report(ARITHMETIC);

    assert!(html.contains("<h2>Production Table</h2>"));
    assert!(html.contains("<h2>LL(1) Table</h2>"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn production_ids_are_displayed_one_based() {
    let html = report("S -> a\n");
    assert!(html.contains("<td class=\"num\">1</td>"));
    assert!(!html.contains("<td class=\"num\">0</td>"));
}

#[test]
fn markup_in_symbol_names_is_escaped() {
    let html = report("S -> < x >\n");
    assert!(html.contains("&lt;"));
    assert!(html.contains("&gt;"));
    assert!(!html.contains("<th><</th>"));
}

#[test]
fn eof_is_the_last_terminal_column() {
    let html = report(ARITHMETIC);
    let header_row: Vec<&str> = html
        .lines()
        .filter(|line| line.starts_with("<th>") && !line.contains("Nonterminal") && !line.contains("Terminal") && !line.contains("Set") && !line.contains("Id") && !line.contains("Production") && !line.contains("IsNullable"))
        .collect();
    assert_eq!(header_row.last(), Some(&"<th>$</th>"));
}

#[test]
fn identical_input_renders_byte_identical_reports() {
    assert_eq!(report(ARITHMETIC), report(ARITHMETIC));
}

#[test]
fn conflicted_cell_lists_every_production() {
    let html = report("S -> a B\nB -> b\nB -> b c\n");
    // productions 2 and 3 (displayed 1-based) share the cell under `b`
    assert!(html.contains("<td>2&nbsp;3</td>"));
}
