#![warn(clippy::all)]

use clap::{value_parser, Arg, Command};
use conway_grid::Config;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(Config::LOG_FILTER))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()?;

    let config = parse_args();
    debug!(?config, "starting");

    let mut grid = config.build_grid()?;
    info!(generation = 0, population = grid.total_alive(), "seeded");
    for _ in 0..config.generations {
        grid.step();
        info!(
            generation = grid.generation(),
            population = grid.total_alive(),
            "stepped"
        );
    }
    Ok(())
}

fn parse_args() -> Config {
    let matches = Command::new("conway_grid")
        .about("Runs Conway's Game of Life on a bounded field")
        .arg(
            Arg::new("width")
                .long("width")
                .value_parser(value_parser!(usize))
                .help("number of columns"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(value_parser!(usize))
                .help("number of rows"),
        )
        .arg(
            Arg::new("lives")
                .long("lives")
                .value_parser(value_parser!(usize))
                .help("live cells seeded at random before the first generation"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("seed of the random generator (random if omitted)"),
        )
        .arg(
            Arg::new("generations")
                .long("generations")
                .value_parser(value_parser!(u64))
                .help("number of generations to run"),
        )
        .get_matches();

    let defaults = Config::default();
    Config {
        width: matches.get_one::<usize>("width").copied().unwrap_or(defaults.width),
        height: matches.get_one::<usize>("height").copied().unwrap_or(defaults.height),
        initial_lives: matches
            .get_one::<usize>("lives")
            .copied()
            .unwrap_or(defaults.initial_lives),
        seed: matches.get_one::<u64>("seed").copied(),
        generations: matches
            .get_one::<u64>("generations")
            .copied()
            .unwrap_or(defaults.generations),
    }
}
