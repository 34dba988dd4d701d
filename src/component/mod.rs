mod city;
mod distance;
mod solution;

pub use city::{Atlas, City};
pub use distance::{DistanceMatrix, VISIBILITY_CAP};
pub use solution::{IterationRecord, Solution, Tour};
