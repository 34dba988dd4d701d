use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::Error;
use crate::component::City;

#[derive(Deserialize)]
struct CitiesYaml {
    cities: Vec<City>,
}

pub fn load_cities(path: &str) -> Result<Vec<City>, Error> {
    let text = read(path)?;
    parse_cities(&text)
}

pub fn parse_cities(text: &str) -> Result<Vec<City>, Error> {
    let yaml: CitiesYaml = serde_yaml::from_str(text)?;
    Ok(yaml.cities)
}

pub fn load_config(path: &str) -> Result<Config, Error> {
    let text = read(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config, Error> {
    Ok(serde_yaml::from_str(text)?)
}

fn read(path: &str) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))
}
