use clap::{Parser, ValueEnum};
use wildfire_ca_core::{LandCoverCatalog, Scenario, Simulation, Wind, WindDirection};

/// Wildfire cellular automaton demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "wildfire-demo")]
#[command(about = "Headless wildfire spread simulation", long_about = None)]
struct Args {
    /// Number of generations to simulate (one generation = one hour)
    #[arg(short, long, default_value_t = 100)]
    generations: u32,

    /// Wind direction
    #[arg(short = 'd', long, value_enum, default_value_t = Direction::South)]
    wind_direction: Direction,

    /// Wind speed in [0, 1]
    #[arg(short = 'w', long, default_value_t = 0.3)]
    wind_speed: f32,

    /// RNG seed for a reproducible run
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Report interval in generations
    #[arg(short, long, default_value_t = 10)]
    report_interval: u32,

    /// Scenario file (JSON); defaults to the built-in landscape
    #[arg(long)]
    scenario: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl From<Direction> for WindDirection {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => WindDirection::North,
            Direction::East => WindDirection::East,
            Direction::South => WindDirection::South,
            Direction::West => WindDirection::West,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let scenario = if let Some(path) = &args.scenario {
        Scenario::load(path).unwrap_or_else(|e| {
            eprintln!("cannot load scenario {}: {e}", path.display());
            std::process::exit(1);
        })
    } else {
        Scenario::classic_landscape()
    };

    let wind = Wind::new(args.wind_direction.into(), args.wind_speed);
    let mut sim = Simulation::from_scenario(
        &scenario,
        wind,
        LandCoverCatalog::standard(),
        args.seed,
    );

    println!(
        "Wildfire simulation: {}x{} grid, wind {:?} at {:.2}, seed {}",
        scenario.width, scenario.height, wind.direction, wind.speed, args.seed
    );
    println!("{:>10} {:>8} {:>8} {:>8}", "generation", "alive", "burning", "burnt");

    let counts = sim.counts();
    println!(
        "{:>10} {:>8} {:>8} {:>8}",
        sim.generation(),
        counts.alive,
        counts.burning,
        counts.burnt
    );

    let mut remaining = args.generations;
    let interval = args.report_interval.max(1);
    while remaining > 0 {
        let chunk = interval.min(remaining);
        sim.run(chunk);
        remaining -= chunk;

        let counts = sim.counts();
        println!(
            "{:>10} {:>8} {:>8} {:>8}",
            sim.generation(),
            counts.alive,
            counts.burning,
            counts.burnt
        );
    }

    let counts = sim.counts();
    let total = counts.alive + counts.burning + counts.burnt;
    println!(
        "\nFinal state after {} generation(s): {:.1}% of the landscape burnt, {} cell(s) still alight",
        sim.generation(),
        100.0 * counts.burnt as f64 / total as f64,
        counts.burning
    );
}
