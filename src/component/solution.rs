use serde::Serialize;


/// Closed visiting order: `tour[0] == tour[n] == start`.
pub type Tour = Vec<usize>;


/// Tours produced by every ant in one iteration, kept for reporting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub tours: Vec<Tour>,
    pub lengths: Vec<f64>,
    /// Global best length after this iteration.
    pub best_length: f64,
}

impl IterationRecord {
    pub fn local_best(&self) -> Option<(&Tour, f64)> {
        self.tours.iter()
            .zip(self.lengths.iter().copied())
            .fold(None, |best, (tour, length)| match best {
                Some((_, min)) if min <= length => best,
                _ => Some((tour, length)),
            })
    }
}


#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    pub best_tour: Tour,
    pub best_length: f64,
    pub history: Vec<IterationRecord>,
}

impl Solution {
    pub fn new(best_tour: Tour, best_length: f64) -> Self {
        Solution { best_tour, best_length, history: vec![] }
    }
    pub fn iterations(&self) -> usize {
        self.history.len()
    }
}
