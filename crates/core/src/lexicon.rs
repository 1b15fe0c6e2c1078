//! Valence lexicon loading and one-time resource setup.
//!
//! The scorer reads word valences from a tab-separated lexicon file. A
//! copy of the lexicon ships embedded in the binary; [`Lexicon::ensure_at`]
//! materializes it to disk once (idempotent "ensure resource present"
//! semantics) and loads it from that path, so the reported lexicon
//! location is a real file rather than hidden global state.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, SentiraError};

/// Lexicon file name used for the on-disk copy.
const LEXICON_FILE: &str = "vader_lexicon.txt";

/// Embedded copy of the valence lexicon.
const EMBEDDED_LEXICON: &str = include_str!("../data/vader_lexicon.txt");

/// A word-to-valence lexicon on the VADER scale of [-4, 4].
///
/// Lookups are case-insensitive. The lexicon is immutable after loading.
///
/// # Example
///
/// ```rust
/// use sentira_core::lexicon::Lexicon;
///
/// let lexicon = Lexicon::embedded();
/// assert!(lexicon.get("good").unwrap() > 0.0);
/// assert!(lexicon.get("terrible").unwrap() < 0.0);
/// assert!(lexicon.get("the").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    path: Option<PathBuf>,
}

impl Lexicon {
    /// Parse a lexicon from tab-separated `word<TAB>valence` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. Lines that
    /// do not parse fail with [`SentiraError::LexiconError`] rather than
    /// being silently dropped.
    pub fn parse(data: &str) -> Result<Self> {
        let mut words = HashMap::new();

        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let word = fields
                .next()
                .ok_or_else(|| SentiraError::LexiconError(format!("line {}: missing word", lineno + 1)))?;
            let valence: f64 = fields
                .next()
                .ok_or_else(|| SentiraError::LexiconError(format!("line {}: missing valence", lineno + 1)))?
                .parse()
                .map_err(|e| SentiraError::LexiconError(format!("line {}: {}", lineno + 1, e)))?;

            words.insert(word.to_lowercase(), valence);
        }

        Ok(Self { words, path: None })
    }

    /// The embedded lexicon, without touching the filesystem.
    ///
    /// The embedded data is validated by tests, so parsing cannot fail
    /// at runtime.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_LEXICON).expect("embedded lexicon is well-formed")
    }

    /// Load a lexicon from a file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SentiraError::FileNotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let mut lexicon = Self::parse(&data)?;
        lexicon.path = Some(path.to_path_buf());
        Ok(lexicon)
    }

    /// Ensure the lexicon file exists under `dir`, then load it.
    ///
    /// Writes the embedded copy only when the file is missing, so repeated
    /// calls are idempotent and a user-customized lexicon is never
    /// overwritten.
    pub fn ensure_at(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LEXICON_FILE);

        if !path.exists() {
            fs::write(&path, EMBEDDED_LEXICON)?;
        }

        Self::load(&path)
    }

    /// Ensure the lexicon under the user data directory and load it.
    ///
    /// Uses `<data_dir>/sentira/vader_lexicon.txt`.
    pub fn ensure_default() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| SentiraError::LexiconError("no user data directory available".to_string()))?;
        Self::ensure_at(&base.join("sentira"))
    }

    /// The resolved on-disk path, when the lexicon was loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Valence for a word, case-insensitive. `None` when absent.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon holds no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let lexicon = Lexicon::parse("# header\n\ngood\t1.9\nbad\t-2.5\n").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("bad"), Some(-2.5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = Lexicon::parse("good\tnot-a-number\n");
        assert!(matches!(result, Err(SentiraError::LexiconError(_))));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = Lexicon::embedded();
        assert_eq!(lexicon.get("GOOD"), lexicon.get("good"));
    }

    #[test]
    fn test_embedded_has_probe_words() {
        let lexicon = Lexicon::embedded();
        for word in ["good", "bad", "happy", "sad", "terrible", "excellent"] {
            assert!(lexicon.get(word).is_some(), "missing probe word {}", word);
        }
    }

    #[test]
    fn test_ensure_at_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();

        let first = Lexicon::ensure_at(tmp.path()).unwrap();
        let path = first.path().unwrap().to_path_buf();
        assert!(path.exists());

        // A second ensure must not rewrite the existing file.
        std::fs::write(&path, "custom\t1.0\n").unwrap();
        let second = Lexicon::ensure_at(tmp.path()).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second.get("custom"), Some(1.0));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Lexicon::load(Path::new("/nonexistent/lexicon.txt"));
        assert!(matches!(result, Err(SentiraError::FileNotFound(_))));
    }
}
