use rand::Rng;
use tracing::trace;
use crate::component::{DistanceMatrix, Tour};
use super::pheromone::PheromoneMatrix;


/// Exponents steering the proportional choice of the next city.
#[derive(Clone, Copy, Debug)]
pub struct Influence {
    pub alpha: f64,
    pub beta: f64,
}


/// One ant with private buffers, so ants of an iteration never share state.
pub struct Ant<'a> {
    distance: &'a DistanceMatrix,
    pheromone: &'a PheromoneMatrix,
    influence: Influence,
    visited: Vec<bool>,
    candidates: Vec<usize>,
    weights: Vec<f64>,
}

impl<'a> Ant<'a> {
    pub fn new(distance: &'a DistanceMatrix, pheromone: &'a PheromoneMatrix, influence: Influence) -> Self {
        debug_assert_eq!(distance.len(), pheromone.len());
        let n = distance.len();
        Ant {
            distance,
            pheromone,
            influence,
            visited: vec![false; n],
            candidates: Vec::with_capacity(n),
            weights: Vec::with_capacity(n),
        }
    }
    pub fn construct<R: Rng>(mut self, start: usize, rng: &mut R) -> Tour {
        let n = self.distance.len();
        debug_assert!(start < n);
        let mut tour = Vec::with_capacity(n + 1);
        tour.push(start);
        self.visited[start] = true;
        let mut current = start;
        for _ in 1..n {
            let next = self.select_next(current, rng);
            self.visited[next] = true;
            tour.push(next);
            current = next;
        }
        tour.push(start);
        tour
    }
    fn weight(&self, from: usize, to: usize) -> f64 {
        let Influence { alpha, beta } = self.influence;
        self.pheromone.get(from, to).powf(alpha) * self.distance.visibility(from, to).powf(beta)
    }
    fn select_next<R: Rng>(&mut self, current: usize, rng: &mut R) -> usize {
        self.candidates.clear();
        self.weights.clear();
        for city in 0..self.visited.len() {
            if !self.visited[city] {
                let weight = self.weight(current, city);
                self.candidates.push(city);
                self.weights.push(weight);
            }
        }
        debug_assert!(!self.candidates.is_empty());
        if self.candidates.len() == 1 {
            return self.candidates[0];
        }
        let sum: f64 = self.weights.iter().sum();
        if !(sum.is_finite() && sum > 0.0) {
            trace!(current = current, sum = sum, "degenerate weights, choosing uniformly");
            let nth = rng.gen_range(0..self.candidates.len());
            return self.candidates[nth];
        }
        // roulette wheel
        let rand_f = rng.gen_range(0.0..sum);
        let mut accumulation = 0.0;
        for (&city, &weight) in self.candidates.iter().zip(self.weights.iter()) {
            accumulation += weight;
            if accumulation >= rand_f {
                return city;
            }
        }
        self.candidates[self.candidates.len() - 1]
    }
}
