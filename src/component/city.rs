use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use crate::utils::error::Error;


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(name: &str, x: f64, y: f64) -> Self {
        City { name: name.to_owned(), x, y }
    }
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}


/// Maps city names back to their indices; names must be unique.
#[derive(Clone, Debug, Default)]
pub struct Atlas {
    index: HashMap<String, usize>,
}

impl Atlas {
    pub fn new(cities: &[City]) -> Result<Self, Error> {
        let mut index = HashMap::with_capacity(cities.len());
        for (i, city) in cities.iter().enumerate() {
            if index.insert(city.name.clone(), i).is_some() {
                return Err(Error::DuplicateCity(city.name.clone()));
            }
        }
        Ok(Atlas { index })
    }
    pub fn lookup(&self, name: &str) -> Result<usize, Error> {
        self.index.get(name)
            .copied()
            .ok_or_else(|| Error::UnknownCity(name.to_owned()))
    }
    pub fn len(&self) -> usize {
        self.index.len()
    }
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
