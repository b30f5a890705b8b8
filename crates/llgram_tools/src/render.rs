//! HTML rendering of analysis results.
//!
//! Produces a single self-contained document with two tables: the production
//! table (FIRST/FOLLOW/PREDICT per production) and the LL(1) table. Output is
//! byte-deterministic for a given grammar: row and column order come from the
//! analyzer's first-occurrence ordering, and set contents render in symbol-id
//! order. Production ids are displayed 1-based.

use llgram::{Analyzer, Ll1Table, TermSet};
use std::fmt::Write;

const STYLE: &str = r#"    <style>
        table {
            border-collapse: collapse;
            margin-bottom: 1.5em;
        }
        th, td {
            border: 1px solid #bbb;
            font-family: monospace;
            font-size: 14px;
            padding: 3px 8px;
            text-align: left;
        }
        th {
            background-color: #9de0ad;
        }
        td {
            background-color: #e0ffeb;
        }
        td.num {
            text-align: center;
        }
    </style>
"#;

/// Renders the full report. The LL(1) table must already be projected
/// (see [`Analyzer::ll1_table`]).
#[must_use]
pub fn render_html(analyzer: &Analyzer, table: &Ll1Table) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    push_production_table(&mut html, analyzer);
    push_ll1_table(&mut html, analyzer, table);
    html.push_str("</body>\n</html>\n");
    html
}

/// Escapes cell text for HTML, keeping interior spacing visible.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn set_text(set: &TermSet, analyzer: &Analyzer) -> String {
    set.names(analyzer.symbols()).join(" ")
}

fn push_production_table(html: &mut String, analyzer: &Analyzer) {
    html.push_str("<h2>Production Table</h2>\n<table>\n<thead>\n<tr>\n");
    for header in [
        "Id",
        "Production(A -&gt; XYZ)",
        "FirstSet(XYZ)",
        "FollowSet(A)",
        "PredictSet(XYZ)",
        "IsNullable(XYZ)",
    ] {
        let _ = writeln!(html, "<th>{header}</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    let productions = analyzer.productions();
    for production in productions {
        let id = production.id;
        html.push_str("<tr>\n");
        let _ = writeln!(html, "<td class=\"num\">{}</td>", id.index() + 1);
        let _ = writeln!(
            html,
            "<td>{}</td>",
            escape(&productions.production_text(production, analyzer.symbols(), true)),
        );
        let _ = writeln!(
            html,
            "<td>{}</td>",
            escape(&set_text(analyzer.rhs_first(id), analyzer)),
        );
        let _ = writeln!(
            html,
            "<td>{}</td>",
            escape(&set_text(analyzer.follow(production.lhs), analyzer)),
        );
        let _ = writeln!(
            html,
            "<td>{}</td>",
            escape(&set_text(analyzer.predict(id), analyzer)),
        );
        let _ = writeln!(
            html,
            "<td class=\"num\">{}</td>",
            if analyzer.rhs_nullable(id) { "yes" } else { "no" },
        );
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

fn push_ll1_table(html: &mut String, analyzer: &Analyzer, table: &Ll1Table) {
    html.push_str("<h2>LL(1) Table</h2>\n<table>\n<thead>\n<tr>\n");
    let _ = writeln!(html, "<th rowspan=\"2\">Nonterminal</th>");
    let _ = writeln!(html, "<th colspan=\"{}\">Terminal</th>", table.cols().len());
    html.push_str("</tr>\n<tr>\n");
    for &col in table.cols() {
        let _ = writeln!(html, "<th>{}</th>", escape(analyzer.symbols().resolve(col)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for (row, &nt) in table.rows().iter().enumerate() {
        html.push_str("<tr>\n");
        let _ = writeln!(
            html,
            "<td class=\"num\">{}</td>",
            escape(analyzer.symbols().resolve(nt)),
        );
        for col in 0..table.cols().len() {
            let text = table.cell(row, col).map_or_else(String::new, |ids| {
                ids.iter()
                    .map(|id| (id.index() + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            });
            let _ = writeln!(html, "<td>{}</td>", escape(&text));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape("a < b"), "a&nbsp;&lt;&nbsp;b");
        assert_eq!(escape("\"x\" & 'y'"), "&quot;x&quot;&nbsp;&amp;&nbsp;&apos;y&apos;");
    }
}
