use std::path::Path;

pub mod algorithm;
pub mod component;
pub mod planner;
pub mod utils;

use component::City;
use utils::error::Error;
use utils::{json, yaml};

/// Loads cities from a `.json` file, or from yaml otherwise.
pub fn read_cities_from_file(file_name: &str) -> Result<Vec<City>, Error> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str());
    match extension {
        Some("json") => json::load_cities(file_name),
        _            => yaml::load_cities(file_name),
    }
}
