//! Tallying sentence labels into article-level results.

use serde::Serialize;

use crate::sentiment::SentimentLabel;

/// One classified sentence: the durable output unit of the pipeline.
///
/// Records are ordered by `idx`, which carries the sentence's original
/// position through to the report.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceRecord {
    pub idx: usize,
    pub label: SentimentLabel,
    pub compound: f64,
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub sentence: String,
}

/// Per-label sentence counts.
///
/// All three fields are always present (and serialized), even when zero,
/// in the label enumeration order negative, neutral, positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
}

impl LabelCounts {
    /// Count for one label.
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Positive => self.positive,
        }
    }

    fn bump(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Positive => self.positive += 1,
        }
    }

    /// Total sentences counted.
    pub fn total(&self) -> usize {
        self.negative + self.neutral + self.positive
    }
}

/// Per-label fractions of the sentence total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LabelRatios {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl LabelRatios {
    /// Ratio for one label.
    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Positive => self.positive,
        }
    }
}

/// Article-level aggregation of sentence labels.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub counts: LabelCounts,
    pub ratios: LabelRatios,
    pub overall: SentimentLabel,
}

/// Tally sentence records into counts, ratios, and the overall label.
///
/// The total is treated as 1 when zero so an empty article yields
/// all-zero ratios instead of dividing by zero. `overall` is the label
/// with the strictly maximum ratio; ties resolve to the first label in
/// enumeration order (negative, neutral, positive), including the
/// degenerate all-zero case, which yields negative.
pub fn aggregate(records: &[SentenceRecord]) -> AggregateResult {
    let mut counts = LabelCounts::default();
    for record in records {
        counts.bump(record.label);
    }

    let total = counts.total().max(1) as f64;
    let ratios = LabelRatios {
        negative: counts.negative as f64 / total,
        neutral: counts.neutral as f64 / total,
        positive: counts.positive as f64 / total,
    };

    let mut overall = SentimentLabel::ALL[0];
    for label in SentimentLabel::ALL {
        if ratios.get(label) > ratios.get(overall) {
            overall = label;
        }
    }

    AggregateResult { counts, ratios, overall }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(idx: usize, compound: f64) -> SentenceRecord {
        SentenceRecord {
            idx,
            label: SentimentLabel::from_compound(compound),
            compound,
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            sentence: format!("sentence {}", idx),
        }
    }

    #[test]
    fn test_counts_have_all_three_keys_when_empty() {
        let result = aggregate(&[]);
        assert_eq!(result.counts, LabelCounts { negative: 0, neutral: 0, positive: 0 });

        let json = serde_json::to_value(result.counts).unwrap();
        for key in ["negative", "neutral", "positive"] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_empty_records_yield_zero_ratios_and_negative_overall() {
        let result = aggregate(&[]);
        assert_eq!(result.ratios, LabelRatios::default());
        // Degenerate tie at zero resolves to the first label in
        // enumeration order.
        assert_eq!(result.overall, SentimentLabel::Negative);
    }

    #[test]
    fn test_ratios_sum_to_one() {
        let records = vec![record(1, 0.6), record(2, -0.5), record(3, 0.0), record(4, 0.3)];
        let result = aggregate(&records);

        let sum = result.ratios.negative + result.ratios.neutral + result.ratios.positive;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_way_tie_resolves_to_negative() {
        // One sentence of each label: all ratios are 1/3, and the first
        // label in enumeration order wins.
        let records = vec![record(1, 0.6), record(2, -0.5), record(3, 0.0)];
        let result = aggregate(&records);

        assert_eq!(result.counts, LabelCounts { negative: 1, neutral: 1, positive: 1 });
        assert!((result.ratios.positive - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.overall, SentimentLabel::Negative);
    }

    #[test]
    fn test_majority_wins() {
        let records = vec![record(1, 0.6), record(2, 0.7), record(3, -0.5)];
        let result = aggregate(&records);

        assert_eq!(result.counts.positive, 2);
        assert_eq!(result.overall, SentimentLabel::Positive);
    }

    #[test]
    fn test_two_way_tie_prefers_earlier_label() {
        let records = vec![record(1, 0.6), record(2, -0.5)];
        let result = aggregate(&records);
        // negative and positive tie at 0.5; negative comes first.
        assert_eq!(result.overall, SentimentLabel::Negative);
    }

    #[test]
    fn test_counts_serialize_in_label_order() {
        let json = serde_json::to_string(&LabelCounts { negative: 1, neutral: 2, positive: 3 }).unwrap();
        assert_eq!(json, r#"{"negative":1,"neutral":2,"positive":3}"#);
    }
}
