use ant_tour::planner::Planner;
use ant_tour::read_cities_from_file;
use ant_tour::utils::config::Arguments;
use ant_tour::utils::error::Error;
use ant_tour::utils::{json, yaml};
use std::process;
use tracing::Level;

fn main() {
    let args: Arguments = argh::from_env();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<(), Error> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    let cities = read_cities_from_file(&args.cities)?;

    let mut planner = Planner::new(cities, config)?;
    let (solution, time) = planner.configure()?;
    planner.show_results(&solution);
    println!("--- computing time: {} μs ---", time);

    if let Some(output) = &args.output {
        json::dump_solution(output, &solution)?;
    }
    Ok(())
}
