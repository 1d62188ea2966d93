//! Queryable views over parsed HTML
//!
//! Rules never touch the parser directly; they ask a [`DocumentView`] for
//! text, attribute values and element counts by CSS selector. The scraper
//! backed [`HtmlDocument`] is the production view; tests substitute a fake
//! with canned answers.

use scraper::{Html, Selector};

/// Read-only queries the rule table needs from a document
///
/// Implementations must be lenient: an element that cannot be found (or a
/// selector that cannot be parsed) is reported as absent, never as an error.
pub trait DocumentView {
    /// Trimmed text content of the first element matching `selector`
    fn first_text(&self, selector: &str) -> Option<String>;

    /// Value of `attr` on the first element matching `selector`
    fn first_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// Number of elements matching `selector`
    fn count(&self, selector: &str) -> usize;
}

/// A best-effort parse of an HTML body
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses an HTML body
    ///
    /// html5ever recovers from any markup, so this cannot fail; garbage in
    /// simply yields a document with few or no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use site_audit::analysis::{DocumentView, HtmlDocument};
    ///
    /// let doc = HtmlDocument::parse("<title> Home </title><h1>Hi</h1>");
    /// assert_eq!(doc.first_text("title"), Some("Home".to_string()));
    /// assert_eq!(doc.count("h1"), 1);
    /// ```
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    fn selector(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Ignoring invalid selector '{}': {:?}", selector, e);
                None
            }
        }
    }
}

impl DocumentView for HtmlDocument {
    fn first_text(&self, selector: &str) -> Option<String> {
        let selector = Self::selector(selector)?;

        self.html
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }

    fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Self::selector(selector)?;

        self.html
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(str::to_string)
    }

    fn count(&self, selector: &str) -> usize {
        match Self::selector(selector) {
            Some(selector) => self.html.select(&selector).count(),
            None => 0,
        }
    }
}
