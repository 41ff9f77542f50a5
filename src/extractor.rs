use crate::error::IndexerError;
use scraper::{Html, Selector};

/// Trait for pulling the interesting text runs out of a fetched document
/// A selector that matches nothing yields an empty vector, not an error
pub trait TextExtractor: Send + Sync + 'static {
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Extracts text runs with a CSS selector parsed once at construction
pub struct SelectorExtractor {
    selector: Selector,
}

impl SelectorExtractor {
    pub fn new(selector: &str) -> Result<Self, IndexerError> {
        let selector = Selector::parse(selector)
            .map_err(|e| IndexerError::Config(format!("invalid selector '{}': {}", selector, e)))?;
        Ok(Self { selector })
    }
}

impl TextExtractor for SelectorExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .map(|element| element.text().collect::<Vec<_>>().join(" "))
            .collect()
    }
}
