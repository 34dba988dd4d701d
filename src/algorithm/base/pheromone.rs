use crate::component::{DistanceMatrix, Tour};


/// Desirability of every directed edge, `n × n`, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    inner: Vec<f64>,
}

impl PheromoneMatrix {
    pub fn new(n: usize) -> Self {
        let tao0 = match n {
            0 => 0.0,
            n => 1.0 / (n * n) as f64,
        };
        PheromoneMatrix { n, inner: vec![tao0; n * n] }
    }
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.n && to < self.n);
        self.inner[from * self.n + to]
    }
    pub fn iter(&self) -> impl Iterator<Item=&f64> + '_ {
        self.inner.iter()
    }
    /// Evaporates every edge, then lays `q / length` on each edge of each tour.
    pub fn update(&mut self, tours: &[Tour], distance: &DistanceMatrix, rho: f64, q: f64) {
        debug_assert!((0.0..=1.0).contains(&rho));
        debug_assert_eq!(distance.len(), self.n);
        let deposit = self.accumulate(tours, distance, q);
        let persistence = 1.0 - rho;
        for (pheromone, deposit) in self.inner.iter_mut().zip(deposit) {
            *pheromone = persistence * *pheromone + deposit;
        }
    }
    fn accumulate(&self, tours: &[Tour], distance: &DistanceMatrix, q: f64) -> Vec<f64> {
        let mut deposit = vec![0.0; self.n * self.n];
        for tour in tours {
            let length = distance.length_along(tour);
            // degenerate tours lay nothing, keeping the matrix finite
            if !(length.is_finite() && length > 0.0) {
                continue;
            }
            let amount = q / length;
            for ends in tour.windows(2) {
                deposit[ends[0] * self.n + ends[1]] += amount;
            }
        }
        deposit
    }
}
