//! Heuristic reduction of a full page to its article fragment.
//!
//! This is the "readability" step of the pipeline: given a parsed page,
//! return a smaller HTML fragment biased toward the article body. It is
//! best-effort by contract; the fragment may include stray markup, which
//! the extractor cleans up afterwards.

use crate::parse::{Document, Element};
use crate::scoring::{ScoreConfig, calculate_score};
use crate::Result;

/// Configuration for the readability reduction step.
#[derive(Debug, Clone)]
pub struct ReadabilityConfig {
    /// Minimum score for a candidate to be accepted as main content.
    pub min_score_threshold: f64,
    /// Candidates shorter than this many characters are not scored,
    /// unless they are semantic containers (article/main/section).
    pub char_threshold: usize,
    /// Maximum elements to scan (0 = unlimited).
    pub max_elements: usize,
    /// Scoring heuristics.
    pub score: ScoreConfig,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            min_score_threshold: 10.0,
            char_threshold: 250,
            max_elements: 1000,
            score: ScoreConfig::default(),
        }
    }
}

/// Tags that are considered potential content containers
const CANDIDATE_TAGS: &[&str] = &["article", "main", "section", "div", "td", "pre", "blockquote"];

/// Reduce a parsed page to an HTML fragment holding its main content.
///
/// Scores every candidate container and returns the outer HTML of the
/// highest-scoring one. When no candidate clears `min_score_threshold`
/// the whole `<body>` is returned as a best-effort fallback; a document
/// without a body yields an empty fragment, which is valid (downstream
/// segmentation simply produces zero sentences).
pub fn reduce_to_fragment(doc: &Document, config: &ReadabilityConfig) -> Result<String> {
    let best = top_candidate(doc, config)?;

    match best {
        Some((element, score)) if score >= config.min_score_threshold => Ok(element.outer_html()),
        _ => Ok(doc.body_html().unwrap_or_default()),
    }
}

/// Find the highest-scoring candidate element, if any.
///
/// Ties resolve to the earlier candidate in scan order, which walks
/// `CANDIDATE_TAGS` from most to least semantic.
fn top_candidate<'a>(doc: &'a Document, config: &ReadabilityConfig) -> Result<Option<(Element<'a>, f64)>> {
    let max_elements = if config.max_elements == 0 { usize::MAX } else { config.max_elements };
    let mut scanned = 0usize;
    let mut best: Option<(Element<'a>, f64)> = None;

    for tag in CANDIDATE_TAGS {
        for element in doc.select(tag)? {
            if scanned >= max_elements {
                return Ok(best);
            }
            scanned += 1;

            let tag_name = element.tag_name();
            if !matches!(tag_name.as_str(), "article" | "main" | "section")
                && element.text().chars().count() < config.char_threshold / 10
            {
                continue;
            }

            let score = calculate_score(&element, &config.score);
            if best.as_ref().is_none_or(|(_, top)| score > *top) {
                best = Some((element, score));
            }
        }
    }

    Ok(best)
}
