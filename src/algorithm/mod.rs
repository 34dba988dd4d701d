mod base;
mod aco;
mod nn;
mod algorithm;

pub use algorithm::{Algorithm, AlgorithmEnum};
pub use aco::{AntColony, ColonyConfig};
pub use base::ants::{Ant, Influence};
pub use base::pheromone::PheromoneMatrix;
pub use nn::NearestNeighbor;
