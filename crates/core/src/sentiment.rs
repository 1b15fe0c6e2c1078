//! Lexicon-based polarity scoring and label thresholding.
//!
//! The scorer implements a VADER-style rule set over the valence lexicon.
//! The exact rules are pinned here because changing them changes every
//! observable result downstream: booster adjustment ±0.293 with distance
//! decay, negation flip ×−0.74 within a three-token window, ALL-CAPS
//! emphasis +0.733, "but" clause re-weighting (×0.5 before, ×1.5 after),
//! exclamation/question-mark amplification, and compound normalization
//! `sum / sqrt(sum² + 15)`.

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::{Result, SentiraError};

/// Default compound threshold at or above which a sentence is positive.
pub const DEFAULT_POS_THRESHOLD: f64 = 0.05;
/// Default compound threshold at or below which a sentence is negative.
pub const DEFAULT_NEG_THRESHOLD: f64 = -0.05;

const BOOST_SCALAR: f64 = 0.293;
const CAPS_SCALAR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Four-component polarity score for one sentence.
///
/// `compound` is in [-1, 1]; `neg`, `neu`, and `pos` are proportions in
/// [0, 1]. Produced once per sentence and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Discrete sentiment label derived from a compound score.
///
/// The enumeration order Negative, Neutral, Positive is significant: it
/// is the iteration order used for aggregate tie-breaking, so ties
/// resolve to the earlier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// All labels in enumeration (tie-break) order.
    pub const ALL: [SentimentLabel; 3] = [SentimentLabel::Negative, SentimentLabel::Neutral, SentimentLabel::Positive];

    /// Map a compound score to a label with explicit thresholds.
    ///
    /// Order-sensitive on ties: `compound >= pos_threshold` wins first,
    /// then `compound <= neg_threshold`, else neutral. Boundary values are
    /// inclusive of the non-neutral label.
    pub fn from_compound_with(compound: f64, pos_threshold: f64, neg_threshold: f64) -> Self {
        if compound >= pos_threshold {
            SentimentLabel::Positive
        } else if compound <= neg_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Map a compound score to a label with the default ±0.05 thresholds.
    pub fn from_compound(compound: f64) -> Self {
        Self::from_compound_with(compound, DEFAULT_POS_THRESHOLD, DEFAULT_NEG_THRESHOLD)
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Positive => "positive",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentence-level polarity scorer over a valence lexicon.
///
/// # Example
///
/// ```rust
/// use sentira_core::lexicon::Lexicon;
/// use sentira_core::sentiment::{PolarityScorer, SentimentLabel};
///
/// let scorer = PolarityScorer::new(Lexicon::embedded()).unwrap();
/// let score = scorer.polarity_scores("Good news today.").unwrap();
/// assert_eq!(SentimentLabel::from_compound(score.compound), SentimentLabel::Positive);
/// ```
#[derive(Debug, Clone)]
pub struct PolarityScorer {
    lexicon: Lexicon,
}

impl PolarityScorer {
    /// Build a scorer over a lexicon.
    ///
    /// # Errors
    ///
    /// Fails with [`SentiraError::ScoringError`] when the lexicon is
    /// empty, since every score would degenerate to neutral.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        if lexicon.is_empty() {
            return Err(SentiraError::ScoringError("lexicon has no entries".to_string()));
        }
        Ok(Self { lexicon })
    }

    /// The lexicon backing this scorer.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score one sentence.
    ///
    /// # Errors
    ///
    /// Fails with [`SentiraError::ScoringError`] if the scorer has become
    /// unusable; the error is never converted to a default label.
    pub fn polarity_scores(&self, sentence: &str) -> Result<PolarityScore> {
        if self.lexicon.is_empty() {
            return Err(SentiraError::ScoringError("lexicon has no entries".to_string()));
        }

        let tokens = tokenize(sentence);
        let caps_differential = tokens.iter().any(|t| t.caps) && !tokens.iter().all(|t| t.caps);

        let mut sentiments: Vec<f64> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            // Boosters contribute through the words they modify, not on
            // their own.
            if booster_scalar(&token.lower).is_some() {
                sentiments.push(0.0);
                continue;
            }

            let mut valence = self.lexicon.get(&token.lower).unwrap_or(0.0);

            if valence != 0.0 {
                if token.caps && caps_differential {
                    valence += CAPS_SCALAR * valence.signum();
                }

                let mut negated = false;
                for dist in 1..=3usize {
                    if i < dist {
                        break;
                    }
                    let prev = &tokens[i - dist];
                    if let Some(scalar) = booster_scalar(&prev.lower) {
                        let decay = match dist {
                            1 => 1.0,
                            2 => 0.95,
                            _ => 0.9,
                        };
                        valence += scalar * decay * valence.signum();
                    } else if is_negation(&prev.lower) {
                        negated = true;
                    }
                }
                if negated {
                    valence *= NEGATION_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        if let Some(but_idx) = tokens.iter().position(|t| t.lower == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < but_idx {
                    *s *= 0.5;
                } else if i > but_idx {
                    *s *= 1.5;
                }
            }
        }

        Ok(score_valence(&sentiments, sentence))
    }
}

struct Token {
    lower: String,
    caps: bool,
}

fn tokenize(sentence: &str) -> Vec<Token> {
    sentence
        .split_whitespace()
        .filter_map(|raw| {
            let stripped = raw.trim_matches(|c: char| !(c.is_alphanumeric() || c == '\''));
            if stripped.is_empty() {
                return None;
            }

            let has_alpha = stripped.chars().any(|c| c.is_alphabetic());
            let caps = has_alpha
                && stripped.chars().count() > 1
                && stripped.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase());

            Some(Token { lower: stripped.to_lowercase(), caps })
        })
        .collect()
}

/// Degree modifiers: +0.293 for intensifiers, -0.293 for dampeners.
fn booster_scalar(word: &str) -> Option<f64> {
    match word {
        "absolutely" | "completely" | "considerably" | "decidedly" | "deeply" | "enormously" | "entirely"
        | "especially" | "exceptionally" | "extremely" | "greatly" | "highly" | "hugely" | "incredibly"
        | "intensely" | "particularly" | "purely" | "quite" | "really" | "remarkably" | "so" | "substantially"
        | "thoroughly" | "totally" | "tremendously" | "unusually" | "utterly" | "very" => Some(BOOST_SCALAR),
        "almost" | "barely" | "hardly" | "kinda" | "less" | "little" | "marginally" | "occasionally" | "partly"
        | "scarcely" | "slightly" | "somewhat" => Some(-BOOST_SCALAR),
        _ => None,
    }
}

fn is_negation(word: &str) -> bool {
    matches!(
        word,
        "not" | "no" | "never" | "none" | "nobody" | "nothing" | "neither" | "nor" | "nowhere" | "cannot"
            | "without" | "rarely" | "seldom" | "despite"
    ) || word.ends_with("n't")
}

/// Combine token valences into the four-component score.
fn score_valence(sentiments: &[f64], raw_sentence: &str) -> PolarityScore {
    if sentiments.is_empty() {
        return PolarityScore { neg: 0.0, neu: 0.0, pos: 0.0, compound: 0.0 };
    }

    let punct = punctuation_emphasis(raw_sentence);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }

    let compound = round_to(sum / (sum * sum + NORMALIZATION_ALPHA).sqrt(), 4).clamp(-1.0, 1.0);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &v in sentiments {
        if v > 0.0 {
            // +1 keeps single weak hits from vanishing in the proportions.
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScore {
        neg: round_to(neg_sum.abs() / total, 3),
        neu: round_to(neu_count / total, 3),
        pos: round_to(pos_sum / total, 3),
        compound,
    }
}

/// Emphasis from terminal punctuation: up to four exclamation marks add
/// 0.292 each; two or three question marks add 0.18 each, more add 0.96.
fn punctuation_emphasis(sentence: &str) -> f64 {
    let ep_count = sentence.matches('!').count().min(4);
    let ep = ep_count as f64 * 0.292;

    let qm_count = sentence.matches('?').count();
    let qm = if qm_count > 3 {
        0.96
    } else if qm_count > 1 {
        qm_count as f64 * 0.18
    } else {
        0.0
    };

    ep + qm
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scorer() -> PolarityScorer {
        PolarityScorer::new(Lexicon::embedded()).unwrap()
    }

    #[rstest]
    #[case(0.05, SentimentLabel::Positive)]
    #[case(-0.05, SentimentLabel::Negative)]
    #[case(0.0, SentimentLabel::Neutral)]
    #[case(0.049999, SentimentLabel::Neutral)]
    #[case(-0.049999, SentimentLabel::Neutral)]
    #[case(0.8, SentimentLabel::Positive)]
    #[case(-0.8, SentimentLabel::Negative)]
    fn test_label_thresholds(#[case] compound: f64, #[case] expected: SentimentLabel) {
        assert_eq!(SentimentLabel::from_compound(compound), expected);
    }

    #[test]
    fn test_label_custom_thresholds() {
        assert_eq!(
            SentimentLabel::from_compound_with(0.2, 0.2, -0.2),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_compound_with(0.19, 0.2, -0.2),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_label_enumeration_order() {
        assert_eq!(
            SentimentLabel::ALL,
            [SentimentLabel::Negative, SentimentLabel::Neutral, SentimentLabel::Positive]
        );
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let empty = Lexicon::parse("").unwrap();
        assert!(matches!(
            PolarityScorer::new(empty),
            Err(SentiraError::ScoringError(_))
        ));
    }

    #[test]
    fn test_positive_sentence() {
        let score = scorer().polarity_scores("Good news today.").unwrap();
        assert!(score.compound >= DEFAULT_POS_THRESHOLD);
        assert!(score.pos > score.neg);
    }

    #[test]
    fn test_negative_sentence() {
        let score = scorer().polarity_scores("Terrible accident reported.").unwrap();
        assert!(score.compound <= DEFAULT_NEG_THRESHOLD);
        assert!(score.neg > score.pos);
    }

    #[test]
    fn test_neutral_sentence() {
        let score = scorer().polarity_scores("It was a normal day.").unwrap();
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.pos, 0.0);
        assert_eq!(score.neg, 0.0);
        assert_eq!(score.neu, 1.0);
    }

    #[test]
    fn test_score_components_in_range() {
        let score = scorer()
            .polarity_scores("The brilliant rescue was a relief, but the damage was devastating.")
            .unwrap();
        assert!((-1.0..=1.0).contains(&score.compound));
        for part in [score.neg, score.neu, score.pos] {
            assert!((0.0..=1.0).contains(&part));
        }
        assert!((score.neg + score.neu + score.pos - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let s = scorer();
        let plain = s.polarity_scores("The plan was good.").unwrap();
        let negated = s.polarity_scores("The plan was not good.").unwrap();
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_booster_intensifies() {
        let s = scorer();
        let plain = s.polarity_scores("The result was good.").unwrap();
        let boosted = s.polarity_scores("The result was very good.").unwrap();
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn test_dampener_weakens() {
        let s = scorer();
        let plain = s.polarity_scores("The result was good.").unwrap();
        let damped = s.polarity_scores("The result was slightly good.").unwrap();
        assert!(damped.compound < plain.compound);
    }

    #[test]
    fn test_caps_emphasis() {
        let s = scorer();
        let plain = s.polarity_scores("The news is good today.").unwrap();
        let shouted = s.polarity_scores("The news is GOOD today.").unwrap();
        assert!(shouted.compound > plain.compound);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        let score = scorer()
            .polarity_scores("The food was good, but the service was terrible.")
            .unwrap();
        assert!(score.compound < 0.0);
    }

    #[test]
    fn test_exclamation_amplifies() {
        let s = scorer();
        let plain = s.polarity_scores("The team won").unwrap();
        let excited = s.polarity_scores("The team won!!!").unwrap();
        assert!(excited.compound > plain.compound);
    }

    #[test]
    fn test_empty_sentence_scores_zero() {
        let score = scorer().polarity_scores("").unwrap();
        assert_eq!(score, PolarityScore { neg: 0.0, neu: 0.0, pos: 0.0, compound: 0.0 });
    }

    #[test]
    fn test_scores_are_deterministic() {
        let s = scorer();
        let a = s.polarity_scores("Hope and fear in equal measure.").unwrap();
        let b = s.polarity_scores("Hope and fear in equal measure.").unwrap();
        assert_eq!(a, b);
    }
}
