//! End-to-end analysis pipeline.
//!
//! Orchestrates extract → segment → score → label → aggregate. Each
//! stage consumes immutable input and produces new immutable output;
//! failures propagate unchanged, so a report is only produced when every
//! sentence was classified.

use serde::Serialize;

use crate::aggregate::{AggregateResult, SentenceRecord, aggregate};
use crate::extract::{ExtractConfig, extract_main_text};
use crate::segment::segment;
use crate::sentiment::{DEFAULT_NEG_THRESHOLD, DEFAULT_POS_THRESHOLD, PolarityScorer, SentimentLabel};
use crate::Result;

/// Configuration for a full analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Main-text extraction settings.
    pub extract: ExtractConfig,
    /// Compound threshold at or above which a sentence is positive.
    pub pos_threshold: f64,
    /// Compound threshold at or below which a sentence is negative.
    pub neg_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            extract: ExtractConfig::default(),
            pos_threshold: DEFAULT_POS_THRESHOLD,
            neg_threshold: DEFAULT_NEG_THRESHOLD,
        }
    }
}

/// The complete result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Extracted main text the sentences were drawn from.
    pub text: String,
    /// Per-sentence records, ordered by `idx`.
    pub sentences: Vec<SentenceRecord>,
    /// Article-level counts, ratios, and overall label.
    pub summary: AggregateResult,
}

impl AnalysisReport {
    /// Length of the extracted text in characters.
    pub fn text_chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// Analyze already-extracted plain text.
///
/// Segments the text, scores and labels every sentence, and aggregates.
/// A scoring failure on any sentence aborts the run; no partial report
/// is produced.
pub fn analyze_text(text: &str, scorer: &PolarityScorer, config: &AnalyzerConfig) -> Result<AnalysisReport> {
    let mut records = Vec::new();

    for sentence in segment(text) {
        let score = scorer.polarity_scores(&sentence.text)?;
        let label = SentimentLabel::from_compound_with(score.compound, config.pos_threshold, config.neg_threshold);

        records.push(SentenceRecord {
            idx: sentence.idx,
            label,
            compound: score.compound,
            neg: score.neg,
            neu: score.neu,
            pos: score.pos,
            sentence: sentence.text,
        });
    }

    let summary = aggregate(&records);

    Ok(AnalysisReport { text: text.to_string(), sentences: records, summary })
}

/// Analyze raw article HTML: extract the main text, then analyze it.
pub fn analyze_html(html: &str, scorer: &PolarityScorer, config: &AnalyzerConfig) -> Result<AnalysisReport> {
    let text = extract_main_text(html, &config.extract)?;
    analyze_text(&text, scorer, config)
}

/// Fetch a URL and analyze the returned page.
#[cfg(feature = "fetch")]
pub async fn fetch_and_analyze(
    url: &str, scorer: &PolarityScorer, fetch_config: &crate::fetch::FetchConfig, config: &AnalyzerConfig,
) -> Result<AnalysisReport> {
    let html = crate::fetch::fetch_url(url, fetch_config).await?;
    analyze_html(&html, scorer, config)
}
