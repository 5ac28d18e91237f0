//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{DictrieArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::{DictionaryStats, LookupResult};

/// Result structure for a single query.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub query: String,
    #[serde(flatten)]
    pub result: LookupResult,
}

impl LookupReport {
    /// Create a new report.
    pub fn new<S: Into<String>>(query: S, result: LookupResult) -> Self {
        LookupReport {
            query: query.into(),
            result,
        }
    }
}

/// Write a lookup report in the requested format.
pub fn write_lookup_report<W: Write>(
    out: &mut W,
    report: &LookupReport,
    args: &DictrieArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_lookup_human(out, report),
        OutputFormat::Json => write_json(out, report, args),
    }
}

/// Write dictionary statistics in the requested format.
pub fn write_stats<W: Write>(out: &mut W, stats: &DictionaryStats, args: &DictrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            writeln!(out, "Dictionary Statistics:")?;
            writeln!(out, "══════════════════════")?;
            writeln!(out, "Words: {}", stats.word_count)?;
            writeln!(out, "Trie nodes: {}", stats.node_count)?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, stats, args),
    }
}

fn write_lookup_human<W: Write>(out: &mut W, report: &LookupReport) -> Result<()> {
    match &report.result {
        LookupResult::Exact { word } => {
            writeln!(out, "Exact match found: {word}")?;
        }
        LookupResult::Similar { suggestions } => {
            writeln!(out, "No exact match for '{}'. Similar words:", report.query)?;
            for suggestion in suggestions {
                writeln!(
                    out,
                    "  {} (distance: {}, score: {:.2})",
                    suggestion.word, suggestion.distance, suggestion.score
                )?;
            }
        }
        LookupResult::NotFound => {
            writeln!(
                out,
                "No exact match for '{}'. No similar words found.",
                report.query
            )?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &DictrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::Suggestion;
    use clap::Parser;

    fn args(format: &str) -> DictrieArgs {
        DictrieArgs::try_parse_from(["dictrie", "--format", format, "stats", "words.txt"]).unwrap()
    }

    fn render(report: &LookupReport, format: &str) -> String {
        let mut buf = Vec::new();
        write_lookup_report(&mut buf, report, &args(format)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_exact() {
        let report = LookupReport::new(
            "cat",
            LookupResult::Exact {
                word: "cat".to_string(),
            },
        );
        assert_eq!(render(&report, "human"), "Exact match found: cat\n");
    }

    #[test]
    fn test_human_similar() {
        let report = LookupReport::new(
            "caat",
            LookupResult::Similar {
                suggestions: vec![Suggestion::new("cat".to_string(), 0.75, 1)],
            },
        );
        assert_eq!(
            render(&report, "human"),
            "No exact match for 'caat'. Similar words:\n  cat (distance: 1, score: 0.75)\n"
        );
    }

    #[test]
    fn test_human_not_found() {
        let report = LookupReport::new("zzz", LookupResult::NotFound);
        assert_eq!(
            render(&report, "human"),
            "No exact match for 'zzz'. No similar words found.\n"
        );
    }

    #[test]
    fn test_json_report() {
        let report = LookupReport::new(
            "caat",
            LookupResult::Similar {
                suggestions: vec![Suggestion::new("cat".to_string(), 0.75, 1)],
            },
        );
        let output = render(&report, "json");
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();

        assert_eq!(value["query"], "caat");
        assert_eq!(value["kind"], "similar");
        assert_eq!(value["suggestions"][0]["word"], "cat");
        assert_eq!(value["suggestions"][0]["distance"], 1);
    }

    #[test]
    fn test_stats_output() {
        let stats = DictionaryStats {
            word_count: 4,
            node_count: 9,
        };

        let mut buf = Vec::new();
        write_stats(&mut buf, &stats, &args("human")).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Words: 4"));
        assert!(text.contains("Trie nodes: 9"));

        let mut buf = Vec::new();
        write_stats(&mut buf, &stats, &args("json")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["word_count"], 4);
    }
}
