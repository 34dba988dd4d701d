use serde::Deserialize;
use argh::FromArgs;

/// Approximate a short round trip through a set of cities with an ant colony
#[derive(FromArgs)]
pub struct Arguments {
    /// path to cities file (yaml or json)
    #[argh(positional)]
    pub cities: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override algorithm used to build the tour (aco or nn)
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override random seed for ACO algorithm
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of ants
    #[argh(option, short='n')]
    pub ants: Option<usize>,
    /// override number of iterations
    #[argh(option, short='i')]
    pub iterations: Option<usize>,
    /// override evaporation rate, must lie in [0, 1]
    #[argh(option, short='r')]
    pub rho: Option<f64>,
    /// override name of the city to start from
    #[argh(option, short='b')]
    pub start: Option<String>,
    /// write the solution as json to this path
    #[argh(option, short='o')]
    pub output: Option<String>,
    /// log every iteration
    #[argh(switch, short='v')]
    pub verbose: bool,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub name: String,
    pub algorithm: String,
    pub iterations: usize,
    /// microseconds; zero runs every iteration
    #[serde(default)]
    pub timeout: u64,
    pub seed: Option<u64>,
    #[serde(default)]
    pub start: Option<String>,
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub ants: usize,
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub q: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters { ants: 10, alpha: 1.0, beta: 2.0, rho: 0.5, q: 1.0 }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(algorithm) = &args.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(ants) = args.ants {
            self.parameters.ants = ants;
        }
        if let Some(iterations) = args.iterations {
            self.iterations = iterations;
        }
        if let Some(rho) = args.rho {
            self.parameters.rho = rho;
        }
        if let Some(start) = &args.start {
            self.start = Some(start.clone());
        }
    }
}
