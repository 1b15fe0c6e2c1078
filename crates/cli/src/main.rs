mod echo;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use sentira_core::{
    AnalyzerConfig, FetchConfig, Lexicon, PolarityScorer, ReadabilityConfig, analyze_html, fetch_file, fetch_stdin,
    fetch_url,
};

use echo::{format_size, print_banner, print_info, print_step};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Words probed against the lexicon in the report header.
const SAMPLE_WORDS: &[&str] = &["good", "bad", "happy", "sad", "terrible", "excellent"];

/// Classify the sentence-level sentiment of a web article
#[derive(Parser, Debug)]
#[command(name = "sentira")]
#[command(author = "Sentira Contributors")]
#[command(version = VERSION)]
#[command(about = "Classify the sentence-level sentiment of a web article", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Compound score at or above which a sentence is positive
    #[arg(long, default_value = "0.05", value_name = "NUM", allow_negative_numbers = true)]
    pos_threshold: f64,

    /// Compound score at or below which a sentence is negative
    #[arg(long, default_value = "-0.05", value_name = "NUM", allow_negative_numbers = true)]
    neg_threshold: f64,

    /// Minimum readability score for the top candidate
    #[arg(long, default_value = "10", value_name = "NUM")]
    min_score: f64,

    /// Directory holding (or receiving) the lexicon file
    #[arg(long, value_name = "DIR")]
    lexicon_dir: Option<PathBuf>,

    /// Emit the full per-sentence report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    if args.verbose {
        print_step(1, 4, "Preparing lexicon");
    }

    let lexicon = match &args.lexicon_dir {
        Some(dir) => Lexicon::ensure_at(dir).context("Failed to prepare lexicon")?,
        None => Lexicon::ensure_default().context("Failed to prepare lexicon")?,
    };
    let lexicon_path = lexicon
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<embedded>".to_string());
    let entries = lexicon.len();

    let scorer = PolarityScorer::new(lexicon).context("Failed to build polarity scorer")?;

    if args.verbose {
        eprintln!("  {} {}", "Entries:".dimmed(), entries.to_string().bright_white());
        eprintln!();
    }

    let (html, size) = if args.input == "-" {
        if args.verbose {
            print_step(2, 4, "Reading from stdin");
        }
        let content = fetch_stdin().context("Failed to read from stdin")?;
        let len = content.len();
        (content, len)
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            print_step(
                2,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }

        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .unwrap_or_else(|| "Mozilla/5.0 (compatible; Sentira/1.0)".to_string()),
            ..Default::default()
        };

        let content = fetch_url(&args.input, &config).await.context("Failed to fetch URL")?;
        let len = content.len();
        (content, len)
    } else {
        if args.verbose {
            print_step(2, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        let content = fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;
        let len = content.len();
        (content, len)
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(size).bright_white());
        eprintln!();
        print_step(3, 4, "Extracting and classifying sentences");
    }

    let mut config = AnalyzerConfig {
        pos_threshold: args.pos_threshold,
        neg_threshold: args.neg_threshold,
        ..Default::default()
    };
    config.extract.readability = ReadabilityConfig { min_score_threshold: args.min_score, ..Default::default() };

    let report = analyze_html(&html, &scorer, &config).context("Failed to analyze article")?;

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Sentences:".dimmed(),
            report.sentences.len().to_string().bright_white()
        );
        eprintln!();
        print_step(4, 4, "Writing report");
        eprintln!();
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
        return Ok(());
    }

    println!("[Lexicon] Using valence lexicon at: {}", lexicon_path);
    println!("[Lexicon] Sample entries (word -> valence):");
    for word in SAMPLE_WORDS {
        match scorer.lexicon().get(word) {
            Some(valence) => println!("  {}: {}", word, valence),
            None => println!("  {}: (absent)", word),
        }
    }

    println!("\n[Info] Extracted main text length: {} characters", report.text_chars());

    println!("\n=== Sentence-level counts ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&report.summary.counts).context("Failed to serialize counts")?
    );

    println!("\n=== Sentence-level ratios ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&report.summary.ratios).context("Failed to serialize ratios")?
    );

    println!(
        "\nOverall article label (by sentence majority): {}",
        report.summary.overall
    );

    Ok(())
}
