use std::time::Instant;
use enum_dispatch::enum_dispatch;
use super::aco::AntColony;
use super::nn::NearestNeighbor;
use crate::component::Solution;
use crate::utils::error::Error;


#[enum_dispatch]
pub enum AlgorithmEnum {
    AntColony,
    NearestNeighbor,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    fn name(&self) -> &'static str;
    /// Runs at most `iterations` rounds, stopping at the first round boundary past `deadline`.
    fn solve(&mut self, iterations: usize, deadline: Option<Instant>) -> Result<Solution, Error>;
}
