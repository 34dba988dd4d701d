use itertools::Itertools;
use super::City;


/// Visibility used in place of `1 / 0` for cities sharing a coordinate.
pub const VISIBILITY_CAP: f64 = 1e6;


/// Pairwise euclidean distances, computed once and never mutated.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    n: usize,
    inner: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(cities: &[City]) -> Self {
        let n = cities.len();
        let mut inner = vec![0.0; n * n];
        for ((i, a), (j, b)) in cities.iter().enumerate().tuple_combinations() {
            let distance = a.distance_to(b);
            inner[i * n + j] = distance;
            inner[j * n + i] = distance;
        }
        DistanceMatrix { n, inner }
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
    #[inline]
    pub fn visibility(&self, from: usize, to: usize) -> f64 {
        let distance = self.get(from, to);
        if distance == 0.0 {
            VISIBILITY_CAP
        } else {
            1.0 / distance
        }
    }
    /// Sum of consecutive edges; an open tour is closed back to its first city.
    pub fn length_along(&self, tour: &[usize]) -> f64 {
        let length = tour.windows(2)
            .map(|ends| self.get(ends[0], ends[1]))
            .sum::<f64>();
        match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) if first != last => length + self.get(last, first),
            _ => length,
        }
    }
}
