// Core structs: Offer, Merchant, score tables and the formatted output shape
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A promotional offer as it arrives from the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Offer {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Raw category value from the feed; see [`Category::from_wire`].
    pub category: u8,
    pub merchants: Vec<Merchant>,
    pub age_scores: AgeScore,
    pub gender_scores: GenderScore,
    #[serde(deserialize_with = "crate::utils::deserialize_date")]
    pub valid_to: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Merchant {
    pub id: u64,
    pub name: String,
    /// Distance to the traveler in caller-supplied units, smaller = closer.
    pub distance: f64,
}

/// Per-age-bracket relevance weights attached to an offer.
#[derive(Debug, Clone, Deserialize)]
pub struct AgeScore {
    pub adults: f64,
    pub seniors: f64,
    pub young_adults: f64,
    pub teens: f64,
}

impl AgeScore {
    pub fn weight(&self, group: AgeGroup) -> f64 {
        match group {
            AgeGroup::Adults => self.adults,
            AgeGroup::Seniors => self.seniors,
            AgeGroup::YoungAdults => self.young_adults,
            AgeGroup::Teens => self.teens,
        }
    }
}

/// Per-gender relevance weights attached to an offer.
#[derive(Debug, Clone, Deserialize)]
pub struct GenderScore {
    pub male: f64,
    pub female: f64,
    pub non_binary: f64,
}

impl GenderScore {
    pub fn weight(&self, group: GenderGroup) -> f64 {
        match group {
            GenderGroup::Male => self.male,
            GenderGroup::Female => self.female,
            GenderGroup::NonBinary => self.non_binary,
        }
    }
}

/// Age bracket the selection is personalized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Adults,
    Seniors,
    YoungAdults,
    Teens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderGroup {
    Male,
    Female,
    NonBinary,
}

/// Recognized offer categories and their wire values from the feed.
/// Value 3 is reserved and treated like any other unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Restaurant,
    Retail,
    Activity,
}

impl Category {
    pub fn from_wire(value: u8) -> Option<Category> {
        match value {
            1 => Some(Category::Restaurant),
            2 => Some(Category::Retail),
            4 => Some(Category::Activity),
            _ => None,
        }
    }

    pub fn wire(&self) -> u8 {
        match self {
            Category::Restaurant => 1,
            Category::Retail => 2,
            Category::Activity => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Restaurant => "Restaurant",
            Category::Retail => "Retail",
            Category::Activity => "Activity",
        }
    }

    /// Minimum whole days between check-in and expiry for the offer to be
    /// shown at all. The comparison is strict: exactly this many days is
    /// still ineligible.
    pub fn min_lead_days(&self) -> i64 {
        match self {
            Category::Restaurant => 3,
            Category::Retail => 5,
            Category::Activity => 7,
        }
    }
}

/// An offer annotated by the scoring stage. Ranking and reduction only ever
/// see offers in this form, so an unscored offer cannot reach them.
#[derive(Debug, Clone)]
pub struct ScoredOffer {
    pub offer: Offer,
    pub total_score: f64,
    pub nearest_merchant: Merchant,
}

/// Public projection of a selected offer. Which optional fields are present
/// depends on the category, see `selector::reducer::format_offer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferFormat {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
    pub category: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read offer feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed offer feed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("offer {offer_id} has no merchants")]
    NoMerchants { offer_id: u64 },

    #[error("unexpected category {wire} on offer {offer_id}, expected 1, 2 or 4")]
    UnexpectedCategory { offer_id: u64, wire: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_mapping() {
        assert_eq!(Category::from_wire(1), Some(Category::Restaurant));
        assert_eq!(Category::from_wire(2), Some(Category::Retail));
        assert_eq!(Category::from_wire(4), Some(Category::Activity));
        assert_eq!(Category::from_wire(3), None);
        assert_eq!(Category::from_wire(0), None);
        assert_eq!(Category::from_wire(255), None);
    }

    #[test]
    fn category_round_trip_and_labels() {
        for category in [Category::Restaurant, Category::Retail, Category::Activity] {
            assert_eq!(Category::from_wire(category.wire()), Some(category));
        }
        assert_eq!(Category::Restaurant.label(), "Restaurant");
        assert_eq!(Category::Retail.label(), "Retail");
        assert_eq!(Category::Activity.label(), "Activity");
    }

    #[test]
    fn lead_times_per_category() {
        assert_eq!(Category::Restaurant.min_lead_days(), 3);
        assert_eq!(Category::Retail.min_lead_days(), 5);
        assert_eq!(Category::Activity.min_lead_days(), 7);
    }

    #[test]
    fn score_tables_select_the_right_weight() {
        let ages = AgeScore {
            adults: 0.1,
            seniors: 0.2,
            young_adults: 0.3,
            teens: 0.4,
        };
        assert_eq!(ages.weight(AgeGroup::Adults), 0.1);
        assert_eq!(ages.weight(AgeGroup::Seniors), 0.2);
        assert_eq!(ages.weight(AgeGroup::YoungAdults), 0.3);
        assert_eq!(ages.weight(AgeGroup::Teens), 0.4);

        let genders = GenderScore {
            male: 0.5,
            female: 0.6,
            non_binary: 0.7,
        };
        assert_eq!(genders.weight(GenderGroup::Male), 0.5);
        assert_eq!(genders.weight(GenderGroup::Female), 0.6);
        assert_eq!(genders.weight(GenderGroup::NonBinary), 0.7);
    }

    #[test]
    fn group_keys_parse_from_snake_case() {
        let age: AgeGroup = serde_json::from_str("\"young_adults\"").unwrap();
        assert_eq!(age, AgeGroup::YoungAdults);
        let gender: GenderGroup = serde_json::from_str("\"non_binary\"").unwrap();
        assert_eq!(gender, GenderGroup::NonBinary);
        assert!(serde_json::from_str::<AgeGroup>("\"toddlers\"").is_err());
    }
}
