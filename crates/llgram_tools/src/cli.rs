//! CLI interface for the grammar analyzer.

use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "llgram")]
#[command(about = "Analyze a context-free grammar and emit its LL(1) tables as HTML")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Grammar file to analyze; reads standard input when omitted
    pub input: Option<PathBuf>,

    /// Write the HTML report here (`.html` is appended if missing);
    /// writes to standard output when omitted
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

/// Appends `.html` unless the path already carries that extension.
#[must_use]
pub fn ensure_html_suffix(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".html");
            PathBuf::from(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn html_suffix_is_appended_once() {
        assert_eq!(
            ensure_html_suffix(Path::new("report")),
            PathBuf::from("report.html")
        );
        assert_eq!(
            ensure_html_suffix(Path::new("report.html")),
            PathBuf::from("report.html")
        );
        assert_eq!(
            ensure_html_suffix(Path::new("report.txt")),
            PathBuf::from("report.txt.html")
        );
    }
}
