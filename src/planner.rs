use crate::algorithm::{Algorithm, AlgorithmEnum, AntColony, ColonyConfig, NearestNeighbor};
use crate::component::{Atlas, City, Solution};
use crate::utils::config::Config;
use crate::utils::error::Error;
use std::fmt::Write;
use std::time::{Duration, Instant};


pub struct Planner {
    pub algorithm: AlgorithmEnum,
    pub cities: Vec<City>,
    pub config: Config,
}


impl Planner {
    pub fn new(cities: Vec<City>, config: Config) -> Result<Self, Error> {
        let atlas = Atlas::new(&cities)?;
        let start = match &config.start {
            Some(name) => atlas.lookup(name)?,
            None => 0,
        };
        let algorithm: AlgorithmEnum = match config.algorithm.as_str() {
            "aco" => {
                let colony = ColonyConfig::new(&config.parameters, start);
                let cities = cities.clone();
                let colony = match config.seed {
                    Some(seed) => AntColony::with_seed(cities, colony, seed)?,
                    None       => AntColony::new(cities, colony)?,
                };
                colony.into()
            }
            "nn"  => NearestNeighbor::new(&cities, start)?.into(),
            other => return Err(Error::UnknownAlgorithm(other.to_owned())),
        };
        Ok(Planner { algorithm, cities, config })
    }
    /// Returns the solution and the computing time in microseconds.
    pub fn configure(&mut self) -> Result<(Solution, u128), Error> {
        let deadline = match self.config.timeout {
            0       => None,
            timeout => Some(Instant::now() + Duration::from_micros(timeout)),
        };
        let start = Instant::now();
        let solution = self.algorithm.solve(self.config.iterations, deadline)?;
        let elapsed = start.elapsed().as_micros();
        Ok((solution, elapsed))
    }
    pub fn route(&self, solution: &Solution) -> Vec<&str> {
        solution.best_tour.iter()
            .map(|&city| self.cities[city].name.as_str())
            .collect()
    }
    pub fn render(&self, solution: &Solution) -> String {
        let mut msg = String::new();
        writeln!(msg, "{} on {} cities ({})",
                 self.algorithm.name(), self.cities.len(), self.config.name).unwrap();
        for record in solution.history.iter() {
            if let Some((_, local)) = record.local_best() {
                writeln!(msg, "- iteration #{:02} best {:.4}, overall {:.4}",
                         record.iteration, local, record.best_length).unwrap();
            }
        }
        writeln!(msg, "the best tour {} has length {:.4}",
                 self.route(solution).join(" -> "), solution.best_length).unwrap();
        msg
    }
    pub fn show_results(&self, solution: &Solution) {
        print!("{}", self.render(solution));
    }
}
