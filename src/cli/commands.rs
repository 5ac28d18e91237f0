//! Command implementations for the dictrie CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::{TrieDictionary, normalize_word};
use crate::error::Result;
use crate::spelling::{LookupEngine, SuggestionConfig};

const PROMPT: &str = "Enter a word to search: ";

/// Execute a CLI command.
pub fn execute_command(args: DictrieArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup_words(lookup_args, &args),
        Command::Interactive(interactive_args) => interactive(interactive_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Look up every query given on the command line.
fn lookup_words(args: &LookupArgs, cli_args: &DictrieArgs) -> Result<()> {
    let config = args.suggestion.to_config()?;
    let engine = build_engine(&args.wordlist, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for query in &args.queries {
        let report = run_query(&engine, query);
        write_lookup_report(&mut out, &report, cli_args)?;
    }
    Ok(())
}

/// Prompt for words on stdin until EOF or an empty line.
fn interactive(args: &InteractiveArgs, cli_args: &DictrieArgs) -> Result<()> {
    let config = args.suggestion.to_config()?;
    let engine = build_engine(&args.wordlist, config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_prompt_loop(&engine, stdin.lock(), &mut stdout.lock(), cli_args)
}

/// Show word list statistics.
fn show_stats(args: &StatsArgs, cli_args: &DictrieArgs) -> Result<()> {
    let dictionary = TrieDictionary::load_from_file(&args.wordlist)?;
    let engine = LookupEngine::new(dictionary);

    let stdout = io::stdout();
    write_stats(&mut stdout.lock(), &engine.stats(), cli_args)
}

/// Load a word list and wrap it in a lookup engine.
pub fn build_engine(wordlist: &Path, config: SuggestionConfig) -> Result<LookupEngine> {
    let start_time = Instant::now();
    let dictionary = TrieDictionary::load_from_file(wordlist)?;
    info!(
        "Built dictionary of {} words in {}ms",
        dictionary.len(),
        start_time.elapsed().as_millis()
    );

    LookupEngine::try_with_config(dictionary, config)
}

/// Normalize a raw query and look it up.
pub fn run_query(engine: &LookupEngine, raw_query: &str) -> LookupReport {
    let query = normalize_word(raw_query);
    let result = engine.lookup(&query);
    LookupReport::new(query, result)
}

/// Read queries from `input`, writing one report per query to `output`.
///
/// The prompt is only shown in human mode. The loop ends at EOF or on an
/// empty line.
pub fn run_prompt_loop<R: BufRead, W: Write>(
    engine: &LookupEngine,
    input: R,
    output: &mut W,
    cli_args: &DictrieArgs,
) -> Result<()> {
    let show_prompt = cli_args.output_format == OutputFormat::Human;
    let mut lines = input.lines();

    loop {
        if show_prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let report = run_query(engine, &line);
        write_lookup_report(output, &report, cli_args)?;
    }

    if show_prompt {
        writeln!(output)?;
    }
    Ok(())
}
