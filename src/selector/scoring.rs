use crate::model::{AgeGroup, GenderGroup, Merchant, Offer, ScoredOffer, SelectError};

/// Relative weight of the age axis in the combined score.
const AGE_WEIGHT: f64 = 1.25;
/// Relative weight of the gender axis in the combined score.
const GENDER_WEIGHT: f64 = 1.5;

/// Computes the personalized relevance score for an offer and resolves its
/// nearest merchant. An offer without merchants violates the feed contract
/// and aborts the batch.
pub fn score_offer(
    offer: Offer,
    age_group: AgeGroup,
    gender_group: GenderGroup,
) -> Result<ScoredOffer, SelectError> {
    let nearest_merchant = nearest_merchant(&offer.merchants)
        .cloned()
        .ok_or(SelectError::NoMerchants { offer_id: offer.id })?;

    let total_score = offer.age_scores.weight(age_group) * AGE_WEIGHT
        + offer.gender_scores.weight(gender_group) * GENDER_WEIGHT;

    Ok(ScoredOffer {
        offer,
        total_score,
        nearest_merchant,
    })
}

/// First merchant with the smallest distance; on equal distances the earliest
/// entry wins (later merchants only replace it on strictly smaller distance).
fn nearest_merchant(merchants: &[Merchant]) -> Option<&Merchant> {
    merchants.iter().reduce(|min, current| {
        if current.distance < min.distance {
            current
        } else {
            min
        }
    })
}
