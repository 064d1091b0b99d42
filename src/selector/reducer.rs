use crate::model::{Category, Offer, OfferFormat, ScoredOffer, SelectError};

/// Walks the ranked offers and keeps the best offer of the leading category,
/// then the best offer of the first category that differs from it, stopping
/// right there. The result therefore holds 0, 1 or 2 entries, never more,
/// no matter how many distinct categories the batch contains.
pub fn take_best(ranked: &[ScoredOffer]) -> Result<Vec<OfferFormat>, SelectError> {
    let mut best = Vec::new();
    let mut current_category: Option<u8> = None;

    for scored in ranked {
        match current_category {
            None => {
                best.push(format_offer(&scored.offer)?);
                current_category = Some(scored.offer.category);
            }
            Some(category) if category != scored.offer.category => {
                best.push(format_offer(&scored.offer)?);
                break;
            }
            Some(_) => {}
        }
    }

    Ok(best)
}

/// Projects an offer into its category-specific public shape. A category
/// outside the recognized set can only get here by bypassing the eligibility
/// filter, so it aborts the batch instead of producing a partial result.
pub fn format_offer(offer: &Offer) -> Result<OfferFormat, SelectError> {
    let category =
        Category::from_wire(offer.category).ok_or(SelectError::UnexpectedCategory {
            offer_id: offer.id,
            wire: offer.category,
        })?;

    let formatted = match category {
        Category::Restaurant => OfferFormat {
            id: offer.id,
            title: offer.title.clone(),
            description: Some(offer.description.clone()),
            valid_to: None,
            category: category.label(),
        },
        Category::Retail => OfferFormat {
            id: offer.id,
            title: offer.title.clone(),
            description: None,
            valid_to: None,
            category: category.label(),
        },
        Category::Activity => OfferFormat {
            id: offer.id,
            title: offer.title.clone(),
            description: None,
            valid_to: Some(offer.valid_to),
            category: category.label(),
        },
    };

    Ok(formatted)
}
