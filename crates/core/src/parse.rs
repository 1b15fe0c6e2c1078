//! HTML parsing and DOM traversal.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and navigating the DOM tree using CSS selectors, plus visible-text
//! extraction that structurally skips `script`, `style`, and `noscript`
//! subtrees.
//!
//! # Example
//!
//! ```rust
//! use sentira_core::parse::Document;
//!
//! let html = "<html><body><p class=\"content\">Paragraph</p></body></html>";
//! let doc = Document::parse(html);
//! let paragraphs = doc.select("p.content").unwrap();
//! assert_eq!(paragraphs[0].text(), "Paragraph");
//! ```

use scraper::{Html, Selector};

use crate::{Result, SentiraError};

/// Tags whose contents are never part of the readable text.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript"];

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and extracting its visible text.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// The underlying parser is lenient and recovers from malformed markup,
    /// so this never fails; selector errors surface later from [`select`].
    ///
    /// [`select`]: Document::select
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SentiraError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| SentiraError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets the document `<body>` markup, if any.
    ///
    /// Used as the best-effort fallback fragment when no scored candidate
    /// qualifies as main content.
    pub fn body_html(&self) -> Option<String> {
        let selector = Selector::parse("body").ok()?;
        self.html.select(&selector).next().map(|el| el.html())
    }

    /// Collects the visible text segments of the document in DOM order.
    ///
    /// `script`, `style`, and `noscript` subtrees are skipped entirely,
    /// equivalent to deleting those elements before extraction. Each
    /// returned segment is trimmed and non-empty.
    pub fn text_segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        collect_visible_text(&Element { element: self.html.root_element() }, &mut segments);
        segments
    }
}

fn collect_visible_text(element: &Element<'_>, out: &mut Vec<String>) {
    if INVISIBLE_TAGS.contains(&element.tag_name().as_str()) {
        return;
    }

    for child in element.element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        } else if let Some(child_el) = scraper::ElementRef::wrap(child) {
            collect_visible_text(&Element { element: child_el }, out);
        }
    }
}

/// A wrapper around scraper's ElementRef for easier DOM inspection.
///
/// Element represents a single node in the HTML document tree and provides
/// methods for accessing its attributes, text content, and children.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the outer HTML of this element.
    ///
    /// Returns the HTML content including this element's own tags.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase tag name (e.g., "div", "a", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects child elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SentiraError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| SentiraError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}
