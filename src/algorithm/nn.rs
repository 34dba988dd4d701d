use ordered_float::OrderedFloat;
use std::time::Instant;
use crate::component::{City, DistanceMatrix, Solution};
use crate::utils::error::Error;
use super::Algorithm;


/// Greedy tour that always moves to the closest unvisited city.
pub struct NearestNeighbor {
    distance: DistanceMatrix,
    start: usize,
}

impl NearestNeighbor {
    pub fn new(cities: &[City], start: usize) -> Result<Self, Error> {
        if !cities.is_empty() && start >= cities.len() {
            return Err(Error::StartOutOfRange(start, cities.len()));
        }
        let distance = DistanceMatrix::new(cities);
        Ok(NearestNeighbor { distance, start })
    }
    pub fn tour(&self) -> Vec<usize> {
        let n = self.distance.len();
        if n == 0 {
            return vec![];
        }
        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n + 1);
        let mut current = self.start;
        visited[current] = true;
        tour.push(current);
        // ties go to the lowest index
        while let Some(next) = (0..n)
            .filter(|&city| !visited[city])
            .min_by_key(|&city| OrderedFloat(self.distance.get(current, city)))
        {
            visited[next] = true;
            tour.push(next);
            current = next;
        }
        tour.push(self.start);
        tour
    }
}

impl Algorithm for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nn"
    }
    fn solve(&mut self, _iterations: usize, _deadline: Option<Instant>) -> Result<Solution, Error> {
        let tour = self.tour();
        let length = self.distance.length_along(&tour);
        Ok(Solution::new(tour, length))
    }
}
