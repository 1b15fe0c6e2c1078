//! Sentence boundary detection and segmentation.
//!
//! Splits extracted article text into ordered, cleaned sentences. The
//! boundary rules are pinned here for reproducibility: terminal `.`,
//! `!`, or `?` runs end a sentence when followed by whitespace and an
//! uppercase letter, digit, or opening quote, with guards for common
//! abbreviations, single-letter initials, and trailing closing quotes.
//! Newlines are whitespace, not boundaries, so text segments split by
//! inline markup do not produce spurious sentences.

use crate::clean::clean_text;

/// A cleaned, non-empty sentence with its 1-based position in the text.
///
/// The ordinal `idx` reflects the sentence's order within the extracted
/// text and is preserved through scoring and aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// 1-based position within the sentence sequence.
    pub idx: usize,
    /// Whitespace-normalized sentence text, never empty.
    pub text: String,
}

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "rep", "gov", "sgt", "col", "capt", "lt", "st", "jr",
    "sr", "vs", "etc", "inc", "ltd", "co", "corp", "dept", "univ", "est", "fig", "vol", "al", "eg", "ie",
    "approx", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sept", "sep", "oct", "nov", "dec", "u.s", "u.k",
    "u.n", "a.m", "p.m", "d.c", "e.g", "i.e",
];

/// Split text into cleaned sentences with contiguous 1-based indices.
///
/// Raw sentences that clean to the empty string are dropped before
/// indices are assigned, so `idx` values are always exactly `1..=N`
/// in original order. Pure function of its input.
///
/// # Example
///
/// ```rust
/// use sentira_core::segment::segment;
///
/// let sentences = segment("Good news today. It was calm.");
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].idx, 1);
/// assert_eq!(sentences[1].text, "It was calm.");
/// ```
pub fn segment(text: &str) -> Vec<Sentence> {
    split_sentences(text)
        .into_iter()
        .map(|raw| clean_text(&raw))
        .filter(|cleaned| !cleaned.is_empty())
        .enumerate()
        .map(|(i, text)| Sentence { idx: i + 1, text })
        .collect()
}

/// Split text into raw sentence strings, preserving original order.
///
/// The raw strings keep their internal whitespace; [`segment`] cleans
/// them afterwards.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if !is_terminal(chars[i]) {
            i += 1;
            continue;
        }

        // Absorb the full punctuation run ("...", "?!").
        let mut end = i;
        while end + 1 < chars.len() && is_terminal(chars[end + 1]) {
            end += 1;
        }

        // Closing quotes and brackets belong to the current sentence.
        let mut close = end;
        while close + 1 < chars.len() && is_closing(chars[close + 1]) {
            close += 1;
        }

        if is_boundary(&chars, i, end, close) {
            sentences.push(chars[start..=close].iter().collect());
            start = close + 1;
            i = start;
        } else {
            i = end + 1;
        }
    }

    if start < chars.len() {
        let tail: String = chars[start..].iter().collect();
        if !tail.trim().is_empty() {
            sentences.push(tail);
        }
    }

    sentences
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')' | ']')
}

/// Decide whether the punctuation run `first..=last` (with trailing
/// closers up to `close`) ends a sentence.
fn is_boundary(chars: &[char], first: usize, last: usize, close: usize) -> bool {
    // End of text is always a boundary.
    if close + 1 >= chars.len() {
        return true;
    }

    // A boundary requires whitespace right after the run.
    if !chars[close + 1].is_whitespace() {
        return false;
    }

    // The next sentence must open with an uppercase letter, digit, or quote.
    let next = chars[close + 1..].iter().find(|c| !c.is_whitespace());
    let opens_sentence = match next {
        Some(c) => c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '\u{201c}' | '\u{2018}' | '('),
        None => return true,
    };
    if !opens_sentence {
        return false;
    }

    // Abbreviation and initial guards only apply to a lone period.
    if first == last && chars[first] == '.' {
        let word = preceding_word(chars, first);
        if word.chars().count() == 1 && word.chars().all(|c| c.is_alphabetic()) {
            return false;
        }
        if ABBREVIATIONS.contains(&word.to_lowercase().as_str()) {
            return false;
        }
    }

    true
}

/// The word immediately before position `pos`, including internal periods
/// so dotted abbreviations like "U.S" survive the lookup.
fn preceding_word(chars: &[char], pos: usize) -> String {
    let mut begin = pos;
    while begin > 0 {
        let c = chars[begin - 1];
        if c.is_alphanumeric() || c == '.' {
            begin -= 1;
        } else {
            break;
        }
    }
    chars[begin..pos].iter().collect()
}
