pub mod aggregate;
pub mod clean;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod lexicon;
pub mod parse;
pub mod pipeline;
pub mod readability;
pub mod scoring;
pub mod segment;
pub mod sentiment;

pub use aggregate::{AggregateResult, LabelCounts, LabelRatios, SentenceRecord, aggregate};
pub use clean::{clean_text, collapse_blank_lines};
pub use error::{Result, SentiraError};
pub use extract::{ExtractConfig, extract_main_text};
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use lexicon::Lexicon;
pub use parse::Document;
#[cfg(feature = "fetch")]
pub use pipeline::fetch_and_analyze;
pub use pipeline::{AnalysisReport, AnalyzerConfig, analyze_html, analyze_text};
pub use readability::{ReadabilityConfig, reduce_to_fragment};
#[doc(hidden)]
pub use scoring::{ScoreConfig, base_tag_score, calculate_score, class_id_weight, content_density_score, link_density};
pub use segment::{Sentence, segment};
pub use sentiment::{
    DEFAULT_NEG_THRESHOLD, DEFAULT_POS_THRESHOLD, PolarityScore, PolarityScorer, SentimentLabel,
};
