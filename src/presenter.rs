// Console presentation of the selected offers.
use crate::model::OfferFormat;
use tracing::warn;

/// Prints the selection as a pretty JSON array on stdout.
pub fn print_offers(offers: &[OfferFormat]) {
    match serde_json::to_string_pretty(offers) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("Failed to serialize selection: {:?}", e),
    }
}

/// One-line summary for log output.
pub fn summarize(offer: &OfferFormat) -> String {
    format!("{} #{}: {}", offer.category, offer.id, offer.title)
}
