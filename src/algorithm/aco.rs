use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};
use crate::component::{City, DistanceMatrix, IterationRecord, Solution, Tour};
use crate::utils::config::Parameters;
use crate::utils::error::Error;
use super::Algorithm;
use super::base::ants::{Ant, Influence};
use super::base::pheromone::PheromoneMatrix;


#[derive(Clone, Debug, PartialEq)]
pub struct ColonyConfig {
    pub ants: usize,
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub q: f64,
    pub start: usize,
}

impl ColonyConfig {
    pub fn new(parameters: &Parameters, start: usize) -> Self {
        let Parameters { ants, alpha, beta, rho, q } = *parameters;
        ColonyConfig { ants, alpha, beta, rho, q, start }
    }
    pub fn validate(&self, city_count: usize) -> Result<(), Error> {
        if city_count == 0 {
            return Err(Error::EmptyCities);
        }
        if self.start >= city_count {
            return Err(Error::StartOutOfRange(self.start, city_count));
        }
        if self.ants == 0 {
            return Err(Error::NoAnts);
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(Error::EvaporationOutOfRange(self.rho));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(Error::InvalidParameter("alpha", self.alpha, "not below zero"));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(Error::InvalidParameter("beta", self.beta, "not below zero"));
        }
        if !(self.q.is_finite() && self.q > 0.0) {
            return Err(Error::InvalidParameter("q", self.q, "above zero"));
        }
        Ok(())
    }
    fn influence(&self) -> Influence {
        Influence { alpha: self.alpha, beta: self.beta }
    }
}


/// Ant system over a fixed set of cities. Only the pheromone matrix changes
/// during a run, and only between iterations.
pub struct AntColony<R = ChaChaRng> {
    cities: Vec<City>,
    config: ColonyConfig,
    distance: DistanceMatrix,
    pheromone: PheromoneMatrix,
    rng: R,
}

impl AntColony<ChaChaRng> {
    pub fn new(cities: Vec<City>, config: ColonyConfig) -> Result<Self, Error> {
        Self::with_rng(cities, config, ChaChaRng::from_entropy())
    }
    pub fn with_seed(cities: Vec<City>, config: ColonyConfig, seed: u64) -> Result<Self, Error> {
        Self::with_rng(cities, config, ChaChaRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> AntColony<R> {
    pub fn with_rng(cities: Vec<City>, config: ColonyConfig, rng: R) -> Result<Self, Error> {
        config.validate(cities.len())?;
        let distance = DistanceMatrix::new(&cities);
        let pheromone = PheromoneMatrix::new(cities.len());
        Ok(AntColony { cities, config, distance, pheromone, rng })
    }
    pub fn cities(&self) -> &[City] {
        &self.cities
    }
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }
    pub fn distance(&self) -> &DistanceMatrix {
        &self.distance
    }
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        self.distance.length_along(tour)
    }
    pub fn run(&mut self, iterations: usize) -> Result<Solution, Error> {
        self.run_while(iterations, |_| true)
    }
    /// Like `run`, but stops after the first iteration whose record makes
    /// `keep_going` return false.
    pub fn run_while<F>(&mut self, iterations: usize, mut keep_going: F) -> Result<Solution, Error>
    where
        F: FnMut(&IterationRecord) -> bool,
    {
        if iterations == 0 {
            return Err(Error::NoIterations);
        }
        let ColonyConfig { rho, q, .. } = self.config;
        let mut best = Solution::new(vec![], f64::INFINITY);
        for iteration in 1..=iterations {
            let tours = self.construct_tours();
            let lengths: Vec<f64> = tours.iter()
                .map(|tour| self.tour_length(tour))
                .collect();
            for (tour, &length) in tours.iter().zip(lengths.iter()) {
                if best.best_tour.is_empty() || length < best.best_length {
                    best.best_tour = tour.clone();
                    best.best_length = length;
                }
            }
            self.pheromone.update(&tours, &self.distance, rho, q);

            let record = IterationRecord { iteration, tours, lengths, best_length: best.best_length };
            if let Some((_, local)) = record.local_best() {
                debug!(iteration = iteration, local = local, global = best.best_length, "iteration done");
            }
            let proceed = keep_going(&record);
            best.history.push(record);
            if !proceed {
                info!(iteration = iteration, "colony stopped early");
                break;
            }
        }
        info!(iterations = best.iterations(), length = best.best_length, "colony finished");
        Ok(best)
    }
    /// Seeds are drawn in ant order before the parallel section, so results
    /// do not depend on thread scheduling.
    fn construct_tours(&mut self) -> Vec<Tour> {
        let seeds: Vec<u64> = (0..self.config.ants)
            .map(|_| self.rng.next_u64())
            .collect();
        let distance = &self.distance;
        let pheromone = &self.pheromone;
        let influence = self.config.influence();
        let start = self.config.start;
        seeds.into_par_iter()
            .map(|seed| {
                let mut rng = ChaChaRng::seed_from_u64(seed);
                Ant::new(distance, pheromone, influence).construct(start, &mut rng)
            })
            .collect()
    }
}

impl<R: RngCore> Algorithm for AntColony<R> {
    fn name(&self) -> &'static str {
        "aco"
    }
    fn solve(&mut self, iterations: usize, deadline: Option<Instant>) -> Result<Solution, Error> {
        self.run_while(iterations, |_| deadline.map_or(true, |deadline| Instant::now() < deadline))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 0.0, 1.0),
            City::new("C", 1.0, 1.0),
            City::new("D", 1.0, 0.0),
        ]
    }

    fn config(ants: usize) -> ColonyConfig {
        ColonyConfig { ants, alpha: 1.0, beta: 2.0, rho: 0.5, q: 1.0, start: 0 }
    }

    fn crossing() -> f64 {
        2.0 + 2.0 * 2f64.sqrt()
    }

    #[test]
    fn it_rejects_bad_config() {
        let check = |cities: Vec<City>, config: ColonyConfig| AntColony::with_seed(cities, config, 0).err();
        assert!(matches!(check(vec![], config(1)), Some(Error::EmptyCities)));
        assert!(matches!(check(square(), ColonyConfig { start: 4, ..config(1) }),
                         Some(Error::StartOutOfRange(4, 4))));
        assert!(matches!(check(square(), config(0)), Some(Error::NoAnts)));
        assert!(matches!(check(square(), ColonyConfig { rho: 1.5, ..config(1) }),
                         Some(Error::EvaporationOutOfRange(_))));
        assert!(matches!(check(square(), ColonyConfig { rho: -0.1, ..config(1) }),
                         Some(Error::EvaporationOutOfRange(_))));
        assert!(matches!(check(square(), ColonyConfig { alpha: -1.0, ..config(1) }),
                         Some(Error::InvalidParameter("alpha", _, _))));
        assert!(matches!(check(square(), ColonyConfig { beta: f64::NAN, ..config(1) }),
                         Some(Error::InvalidParameter("beta", _, _))));
        assert!(matches!(check(square(), ColonyConfig { q: 0.0, ..config(1) }),
                         Some(Error::InvalidParameter("q", _, _))));
    }

    #[test]
    fn it_rejects_zero_iterations() {
        let mut colony = AntColony::with_seed(square(), config(1), 0).unwrap();
        assert!(matches!(colony.run(0), Err(Error::NoIterations)));
        assert!(colony.pheromone().iter().all(|&p| p == 1.0 / 16.0));
    }

    #[test]
    fn it_runs_a_single_ant_on_the_square() {
        let mut colony = AntColony::with_seed(square(), config(1), 420).unwrap();
        let solution = colony.run(1).unwrap();
        assert_eq!(solution.best_tour.len(), 5);
        assert_eq!(solution.best_tour[0], 0);
        assert_eq!(solution.best_tour[4], 0);
        let length = solution.best_length;
        assert!(length == 4.0 || (length - crossing()).abs() < 1e-9);
        assert_eq!(solution.history.len(), 1);
        assert_eq!(solution.history[0].iteration, 1);
        assert_eq!(solution.history[0].tours, vec![solution.best_tour.clone()]);
    }

    #[test]
    fn it_never_loses_the_best_on_the_square() {
        let mut colony = AntColony::with_seed(square(), config(5), 420).unwrap();
        let solution = colony.run(20).unwrap();
        assert_eq!(solution.history.len(), 20);
        let bests: Vec<f64> = solution.history.iter().map(|record| record.best_length).collect();
        assert!(bests.windows(2).all(|pair| pair[1] <= pair[0]));
        let mut found = false;
        for record in solution.history.iter() {
            assert_eq!(record.tours.len(), 5);
            assert_eq!(record.lengths.len(), 5);
            found |= record.lengths.contains(&4.0);
            if found {
                assert_eq!(record.best_length, 4.0);
            }
        }
        let length = solution.best_length;
        assert!(length == 4.0 || (length - crossing()).abs() < 1e-9);
    }

    #[test]
    fn it_finds_the_perimeter() {
        let mut colony = AntColony::with_seed(square(), config(10), 420).unwrap();
        let solution = colony.run(20).unwrap();
        assert_eq!(solution.best_length, 4.0);
        let perimeter = [vec![0, 1, 2, 3, 0], vec![0, 3, 2, 1, 0]];
        assert!(perimeter.contains(&solution.best_tour));
    }

    #[test]
    fn it_keeps_the_earliest_of_equal_tours() {
        let mut colony = AntColony::with_seed(square(), config(5), 3).unwrap();
        let solution = colony.run(10).unwrap();
        let first = solution.history.iter()
            .flat_map(|record| record.tours.iter().zip(record.lengths.iter()))
            .find(|(_, length)| **length == solution.best_length)
            .map(|(tour, _)| tour.clone())
            .unwrap();
        assert_eq!(solution.best_tour, first);
    }

    #[test]
    fn it_is_deterministic_with_a_seed() {
        let run = |seed| {
            let cities = vec![
                City::new("A", 0.0, 0.0),
                City::new("B", 4.0, 7.0),
                City::new("C", 8.0, 13.0),
                City::new("D", 1.0, 8.0),
                City::new("E", 6.0, 4.0),
                City::new("F", 2.0, 10.0),
                City::new("G", 3.0, 3.0),
            ];
            let config = ColonyConfig { start: 1, ..config(8) };
            AntColony::with_seed(cities, config, seed).unwrap().run(15).unwrap()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn it_walks_two_cities() {
        let cities = vec![City::new("A", 0.0, 0.0), City::new("B", 3.0, 4.0)];
        let config = ColonyConfig { start: 1, ..config(1) };
        let solution = AntColony::with_seed(cities, config, 0).unwrap().run(3).unwrap();
        assert_eq!(solution.best_tour, vec![1, 0, 1]);
        assert_eq!(solution.best_length, 10.0);
    }

    #[test]
    fn it_stops_between_iterations() {
        let mut colony = AntColony::with_seed(square(), config(2), 5).unwrap();
        let solution = colony.run_while(50, |record| record.iteration < 3).unwrap();
        assert_eq!(solution.history.len(), 3);
    }

    #[test]
    fn it_keeps_pheromone_non_negative() {
        for &rho in &[0.0, 0.3, 1.0] {
            let config = ColonyConfig { rho, ..config(4) };
            let mut colony = AntColony::with_seed(square(), config, 11).unwrap();
            colony.run(10).unwrap();
            assert!(colony.pheromone().iter().all(|&p| p >= 0.0));
        }
    }

    #[test]
    fn it_updates_pheromone_once_per_iteration() {
        let mut colony = AntColony::with_seed(square(), config(3), 7).unwrap();
        let solution = colony.run(2).unwrap();
        let mut expected = PheromoneMatrix::new(4);
        expected.update(&solution.history[0].tours, colony.distance(), 0.5, 1.0);
        let after_first = expected.clone();
        expected.update(&solution.history[1].tours, colony.distance(), 0.5, 1.0);
        assert_ne!(&after_first, colony.pheromone());
        assert_eq!(&expected, colony.pheromone());
    }

    #[test]
    fn it_solves_through_the_algorithm_trait() {
        let mut colony = AntColony::with_seed(square(), config(3), 8).unwrap();
        assert_eq!(colony.name(), "aco");
        let past = Instant::now();
        let solution = colony.solve(10, Some(past)).unwrap();
        assert_eq!(solution.history.len(), 1);
        let solution = colony.solve(4, None).unwrap();
        assert_eq!(solution.history.len(), 4);
    }
}
