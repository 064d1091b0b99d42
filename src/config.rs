use serde::Deserialize;
use std::fs;

use crate::model::{AgeGroup, GenderGroup};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub offers_path: String,
    /// Check-in date as an ISO-8601 string, parsed at startup.
    pub checkin: String,
    pub age_group: AgeGroup,
    pub gender_group: GenderGroup,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
