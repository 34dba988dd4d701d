pub mod ants;
pub mod pheromone;
