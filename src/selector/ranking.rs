use crate::model::ScoredOffer;
use std::cmp::Ordering;

/// Orders scored offers by ascending nearest-merchant distance; on exactly
/// equal distances the higher total score ranks first. Remaining ties keep
/// their input order when used with a stable sort.
pub fn by_distance_then_score(a: &ScoredOffer, b: &ScoredOffer) -> Ordering {
    a.nearest_merchant
        .distance
        .partial_cmp(&b.nearest_merchant.distance)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        })
}
