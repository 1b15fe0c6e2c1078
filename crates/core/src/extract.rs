//! Main-text extraction from raw article HTML.
//!
//! Composes the readability reduction with visible-text extraction:
//! reduce the page to its article fragment, drop `script`/`style`/
//! `noscript` content, join the remaining text segments with newlines,
//! and collapse blank-line runs.

use crate::clean::collapse_blank_lines;
use crate::parse::Document;
use crate::readability::{ReadabilityConfig, reduce_to_fragment};
use crate::Result;

/// Configuration for main-text extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// Readability reduction settings.
    pub readability: ReadabilityConfig,
}

/// Extract the readable main text of an HTML page.
///
/// The result is trimmed plain text with single newlines between text
/// segments and no script/style/noscript content. An empty result is
/// valid: it means no main content was identifiable, and downstream
/// segmentation will produce zero sentences.
///
/// # Errors
///
/// Propagates [`crate::SentiraError::HtmlParseError`] from the
/// readability step unchanged.
///
/// # Example
///
/// ```rust
/// use sentira_core::{ExtractConfig, extract_main_text};
///
/// let html = "<html><body><script>alert(1)</script><p>Real content.</p></body></html>";
/// let text = extract_main_text(html, &ExtractConfig::default()).unwrap();
/// assert_eq!(text, "Real content.");
/// ```
pub fn extract_main_text(html: &str, config: &ExtractConfig) -> Result<String> {
    let doc = Document::parse(html);
    let fragment = reduce_to_fragment(&doc, &config.readability)?;

    if fragment.trim().is_empty() {
        return Ok(String::new());
    }

    let reduced = Document::parse(&fragment);
    let text = reduced.text_segments().join("\n");

    Ok(collapse_blank_lines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_script_content() {
        let html = r#"<html><body><script>alert(1)</script><p>Real content.</p></body></html>"#;
        let text = extract_main_text(html, &ExtractConfig::default()).unwrap();
        assert_eq!(text, "Real content.");
    }

    #[test]
    fn test_extract_strips_style_and_noscript() {
        let html = r#"<body><style>p { color: red }</style><noscript>enable js</noscript><p>Kept.</p></body>"#;
        let text = extract_main_text(html, &ExtractConfig::default()).unwrap();
        assert_eq!(text, "Kept.");
    }

    #[test]
    fn test_extract_joins_blocks_with_single_newlines() {
        let html = r#"
            <body>
                <article class="post-content">
                    <h1>Title line</h1>
                    <p>First paragraph with enough words, commas, and general prose density
                    to be selected as the top readability candidate for this document.</p>
                    <p>Second paragraph follows.</p>
                </article>
            </body>
        "#;
        let text = extract_main_text(html, &ExtractConfig::default()).unwrap();

        assert!(text.contains("Title line\nFirst paragraph"));
        assert!(!text.contains("\n\n"));
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_extract_empty_page_yields_empty_text() {
        let text = extract_main_text("<html><body></body></html>", &ExtractConfig::default()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_extract_keeps_sidebar_out() {
        let html = r#"
            <body>
                <div class="sidebar"><a href="/a">Nav one</a><a href="/b">Nav two</a></div>
                <article class="story-body">
                    <p>The measured main body of the article, with commas, clauses, and a
                    sustained run of prose long enough to dominate candidate scoring.</p>
                </article>
            </body>
        "#;
        let text = extract_main_text(html, &ExtractConfig::default()).unwrap();

        assert!(text.contains("measured main body"));
        assert!(!text.contains("Nav one"));
    }
}
