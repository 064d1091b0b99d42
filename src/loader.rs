// JSON offer-feed parsing
use crate::model::{LoadError, Offer};
use std::fs;
use std::path::Path;

pub trait Parser {
    fn parse(&self, raw: &str) -> Result<Vec<Offer>, LoadError>;
}

pub struct OfferFeedParser;

impl OfferFeedParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for OfferFeedParser {
    fn parse(&self, raw: &str) -> Result<Vec<Offer>, LoadError> {
        let offers: Vec<Offer> = serde_json::from_str(raw)?;
        Ok(offers)
    }
}

/// Reads and parses the offer feed at `path`.
pub fn read_offers(path: impl AsRef<Path>) -> Result<Vec<Offer>, LoadError> {
    let raw = fs::read_to_string(path)?;
    OfferFeedParser::new().parse(&raw)
}
