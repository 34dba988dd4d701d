use std::fs;
use serde::Deserialize;
use super::error::Error;
use crate::component::{City, Solution};


#[derive(Deserialize)]
struct CitiesJson {
    cities: Vec<City>,
}


pub fn load_cities(path: &str) -> Result<Vec<City>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))?;
    let json: CitiesJson = serde_json::from_str(&text)?;
    Ok(json.cities)
}

pub fn dump_solution(path: &str, solution: &Solution) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(solution)?;
    fs::write(path, text)
        .map_err(|err| Error::Io(path.to_owned(), err))
}
