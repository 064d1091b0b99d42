// Selector module: aggregates the pipeline stages picking the best offers.

pub mod eligibility;
pub mod ranking;
pub mod reducer;
pub mod scoring;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::{AgeGroup, GenderGroup, Offer, OfferFormat, SelectError};

/// Runs the full selection pipeline over one batch of offers: eligibility
/// filter, personalized scoring, distance-then-score ranking and the
/// per-category best-pick reduction. Pure apart from debug logging; the same
/// inputs always produce the same picks.
pub fn select_best_offers(
    checkin: DateTime<Utc>,
    offers: Vec<Offer>,
    age_group: AgeGroup,
    gender_group: GenderGroup,
) -> Result<Vec<OfferFormat>, SelectError> {
    let eligible: Vec<Offer> = offers
        .into_iter()
        .filter(|offer| eligibility::is_eligible(offer, checkin))
        .collect();
    debug!("{} offers eligible", eligible.len());

    let mut scored = eligible
        .into_iter()
        .map(|offer| scoring::score_offer(offer, age_group, gender_group))
        .collect::<Result<Vec<_>, _>>()?;

    // stable sort, so residual ties keep their feed order
    scored.sort_by(ranking::by_distance_then_score);

    reducer::take_best(&scored)
}
