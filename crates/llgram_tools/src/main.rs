//! Grammar analyzer CLI: reads a grammar, runs the LL(1) analysis, and
//! writes the HTML report.

use anyhow::Context;
use clap::Parser;
use llgram::{Analyzer, GrammarContext};
use llgram_tools::cli::{Cli, ensure_html_suffix};
use llgram_tools::render;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read file `{}`", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read standard input")?;
            buffer
        }
    };

    let ctx: GrammarContext = text.parse()?;
    log::debug!("symbols:\n{}", ctx.symbols());
    let mut analyzer = Analyzer::new(ctx);
    analyzer.analyze()?;
    if let Some(conflict) = analyzer.conflict() {
        log::warn!(
            "grammar is not LL(1): production {} conflicts",
            conflict.production
        );
    }

    let table = analyzer.ll1_table().clone();
    let html = render::render_html(&analyzer, &table);

    match &cli.out {
        Some(path) => {
            let path = ensure_html_suffix(path);
            fs::write(&path, html)
                .with_context(|| format!("cannot write file `{}`", path.display()))?;
        }
        None => print!("{html}"),
    }
    Ok(())
}
