// ABOUTME: CLI driver for the jobdesc description extractor.
// ABOUTME: Reads saved HTML pages from files or stdin and prints text or the JSON envelope.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use jobdesc_extract::{DescriptionExtractor, ExtractResponse, RuleSet};
use scraper::Html;
use tracing_subscriber::EnvFilter;

/// Extract the job-description passage from saved HTML pages.
#[derive(Parser, Debug)]
#[command(name = "jobdesc")]
#[command(about = "Extract the job description from HTML pages", long_about = None)]
struct Args {
    /// HTML file path(s). Use "-" to read one page from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// JSON rule set file replacing the builtin catalog and keywords.
    #[arg(long = "rules")]
    rules: Option<PathBuf>,

    /// Output the {success, text?, error?} envelope as JSON.
    #[arg(long = "json")]
    json_output: bool,

    /// Output file path (default: stdout).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print elapsed time in ms to stderr.
    #[arg(long = "timing")]
    timing: bool,
}

fn build_extractor(rules_path: Option<&PathBuf>) -> Result<DescriptionExtractor> {
    match rules_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading rules file {:?}", path))?;
            let rules = RuleSet::from_json(&json)
                .with_context(|| format!("parsing rules file {:?}", path))?;
            Ok(DescriptionExtractor::new(rules))
        }
        None => Ok(DescriptionExtractor::builtin()),
    }
}

fn load_html(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading HTML from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(target).with_context(|| format!("reading file {:?}", target))
    }
}

/// Format output: JSON envelope(s) or plain text content.
fn format_output(responses: &[ExtractResponse], json_output: bool) -> String {
    if json_output {
        if responses.len() == 1 {
            serde_json::to_string_pretty(&responses[0]).unwrap()
        } else {
            serde_json::to_string_pretty(responses).unwrap()
        }
    } else {
        responses
            .iter()
            .filter_map(|r| r.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn run(args: &Args) -> Result<(Vec<ExtractResponse>, bool)> {
    if args.targets.iter().filter(|t| t.as_str() == "-").count() > 1 {
        bail!("stdin (\"-\") may only be given once");
    }

    let extractor = build_extractor(args.rules.as_ref())?;

    let mut responses = Vec::new();
    let mut had_miss = false;
    for target in &args.targets {
        let html = load_html(target)?;
        let doc = Html::parse_document(&html);
        let response = ExtractResponse::from_outcome(extractor.extract(&doc));
        if !response.success {
            had_miss = true;
            if !args.json_output {
                let msg = response.error.as_deref().unwrap_or("extraction failed");
                eprintln!("{}: {}", target, msg);
            }
        }
        responses.push(response);
    }
    Ok((responses, had_miss))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let start = Instant::now();

    let (responses, had_miss) = match run(&args) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    let output_str = format_output(&responses, args.json_output);
    if !output_str.is_empty() {
        if let Some(output_path) = &args.output {
            if let Err(e) = fs::write(output_path, &output_str) {
                eprintln!("error writing to {:?}: {}", output_path, e);
                return ExitCode::from(1);
            }
        } else {
            println!("{}", output_str);
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", start.elapsed().as_millis());
    }

    // In envelope mode misses are reported in-band; in plain mode they are
    // an error exit so scripts can tell "no description detected" apart.
    if had_miss && !args.json_output {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
