use crate::model::{Category, Offer};
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days between check-in and offer expiry, rounded toward negative
/// infinity. An offer that expired before check-in comes out negative.
fn day_difference(valid_to: DateTime<Utc>, checkin: DateTime<Utc>) -> i64 {
    (valid_to - checkin)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// An offer is eligible when it stays valid strictly longer than its
/// category's minimum lead time, counted from the check-in date. Offers with
/// an unrecognized category are dropped here without an error.
pub fn is_eligible(offer: &Offer, checkin: DateTime<Utc>) -> bool {
    match Category::from_wire(offer.category) {
        Some(category) => day_difference(offer.valid_to, checkin) > category.min_lead_days(),
        None => false,
    }
}
