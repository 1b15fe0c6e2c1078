//! Candidate scoring for main-content detection.
//!
//! Scores DOM elements by how likely they are to contain the article body:
//! tag type, class/id naming patterns, prose density, and link density.

use crate::parse::Element;
use regex::Regex;

/// Configuration for the content scoring heuristics.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Weight for positive class/ID patterns
    pub positive_weight: f64,
    /// Weight for negative class/ID patterns
    pub negative_weight: f64,
    /// Maximum content density score from character count
    pub max_char_density_score: f64,
    /// Maximum content density score from comma count
    pub max_comma_density_score: f64,
    /// Characters per point for content density scoring
    pub chars_per_point: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            positive_weight: 25.0,
            negative_weight: -25.0,
            max_char_density_score: 3.0,
            max_comma_density_score: 3.0,
            chars_per_point: 100,
        }
    }
}

/// Calculate the base score for an element based on its tag name.
///
/// Scores are assigned based on how likely a tag is to contain main content:
/// - ARTICLE: +10 (primary content container)
/// - MAIN, SECTION: +8 (content section)
/// - DIV: +5 (generic container)
/// - TD, BLOCKQUOTE, PRE: +3 (content elements)
/// - FORM, OL, UL, DL, LI: -3 (form/list elements)
/// - H1-H6, HEADER, FOOTER, NAV, ASIDE: -5 (chrome elements)
pub fn base_tag_score(element: &Element<'_>) -> f64 {
    match element.tag_name().as_str() {
        "article" => 10.0,
        "main" | "section" => 8.0,
        "div" => 5.0,
        "td" | "blockquote" | "pre" => 3.0,
        "form" | "ol" | "ul" | "dl" | "li" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "header" | "footer" | "nav" | "aside" => -5.0,
        _ => 0.0,
    }
}

/// Positive patterns that suggest an element contains main content
const POSITIVE_PATTERNS: &str = r"(?i)(article|body|content|entry|main|page|post|text|blog|story)";

/// Negative patterns that suggest an element does NOT contain main content
const NEGATIVE_PATTERNS: &str =
    r"(?i)(banner|breadcrumbs?|comment|community|extra|foot|header|menu|related|rss|share|sidebar|sponsor|ad-break|pagination|pager|popup|promo|social)";

/// Calculate the class/ID weight adjustment for an element.
///
/// Returns +positive_weight if the element's class or ID matches positive
/// patterns, or negative_weight if it matches negative patterns (but not
/// positive).
pub fn class_id_weight(element: &Element<'_>, config: &ScoreConfig) -> f64 {
    let positive_regex = Regex::new(POSITIVE_PATTERNS).unwrap();
    let negative_regex = Regex::new(NEGATIVE_PATTERNS).unwrap();

    if let Some(id) = element.attr("id") {
        if positive_regex.is_match(id) {
            return config.positive_weight;
        }
        if negative_regex.is_match(id) {
            return config.negative_weight;
        }
    }

    if let Some(class) = element.attr("class") {
        for class_name in class.split_whitespace() {
            if positive_regex.is_match(class_name) {
                return config.positive_weight;
            }
            if negative_regex.is_match(class_name) {
                return config.negative_weight;
            }
        }
    }

    0.0
}

/// Calculate content density score based on text length and comma count.
///
/// Gives higher scores to elements with more text (up to
/// `max_char_density_score`) and more commas, a cheap prose indicator
/// (up to `max_comma_density_score`).
pub fn content_density_score(element: &Element<'_>, config: &ScoreConfig) -> f64 {
    let text = element.text();
    let char_score = ((text.chars().count() / config.chars_per_point) as f64).min(config.max_char_density_score);
    let comma_count = text.matches(',').count();
    let comma_score = (comma_count as f64).min(config.max_comma_density_score);

    char_score + comma_score
}

/// Calculate the link density of an element.
///
/// Link density is the ratio of link text characters to total text
/// characters, from 0.0 (no links) to 1.0 (all text is in links).
pub fn link_density(element: &Element<'_>) -> f64 {
    let text = element.text();
    let text_length = text.chars().count();

    if text_length == 0 {
        return 0.0;
    }

    let link_text_length = element
        .select("a")
        .unwrap_or_default()
        .iter()
        .map(|link| link.text().chars().count())
        .sum::<usize>();

    link_text_length as f64 / text_length as f64
}

/// Calculate the final score for an element.
///
/// The final score combines base tag score, class/ID weight, and content
/// density, then multiplies by a link-density penalty. The penalty is
/// halved for elements with positive class/ID patterns or long prose.
pub fn calculate_score(element: &Element<'_>, config: &ScoreConfig) -> f64 {
    let base_score = base_tag_score(element);
    let class_weight = class_id_weight(element, config);
    let content_density = content_density_score(element, config);
    let ld = link_density(element);
    let raw_score = base_score + class_weight + content_density;

    let has_positive_pattern = class_weight > 0.0;
    let is_content_rich = element.text().chars().count() > 500;

    let link_penalty = if has_positive_pattern || is_content_rich { 1.0 - (ld * 0.5) } else { 1.0 - ld };

    raw_score * link_penalty
}
