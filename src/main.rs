mod config;
mod loader;
mod model;
mod presenter;
mod selector;
mod utils;

use config::load_config;
use tracing::{error, info};
use tracing_subscriber;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load run configuration from file
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let Some(checkin) = utils::parse_date(&config.checkin) else {
        error!("Invalid check-in date: {}", config.checkin);
        return;
    };

    info!("Loading offer feed from {}...", config.offers_path);
    let offers = match loader::read_offers(&config.offers_path) {
        Ok(offers) => offers,
        Err(e) => {
            error!("Offer feed error: {}", e);
            return;
        }
    };
    info!("Loaded {} offers", offers.len());

    info!(
        "Selecting best offers for check-in {} ({:?}/{:?})...",
        config.checkin, config.age_group, config.gender_group
    );
    match selector::select_best_offers(checkin, offers, config.age_group, config.gender_group) {
        Ok(best) => {
            info!("Selected {} offers", best.len());
            for offer in &best {
                info!("Picked: {}", presenter::summarize(offer));
            }
            presenter::print_offers(&best);
        }
        Err(e) => {
            error!("Selection aborted: {}", e);
        }
    }
}
