use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no cities were given")]
    EmptyCities,
    #[error("start index {0} is out of range for {1} cities")]
    StartOutOfRange(usize, usize),
    #[error("colony needs at least one ant")]
    NoAnts,
    #[error("run needs at least one iteration")]
    NoIterations,
    #[error("evaporation rate {0} is outside [0, 1]")]
    EvaporationOutOfRange(f64),
    #[error("parameter {0} = {1} must be a finite value {2}")]
    InvalidParameter(&'static str, f64, &'static str),
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("unknown city `{0}`")]
    UnknownCity(String),
    #[error("city `{0}` is defined more than once")]
    DuplicateCity(String),
    #[error("failed to read {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("failed to parse yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),
}
