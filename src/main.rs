use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tsp_ga::ga::{GaConfig, GaRunner, TracingSink};
use tsp_ga::{City, CityTable};

/// Evolve a short closed tour through a set of cities.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// population size
    #[arg(long, default_value_t = 50)]
    population_size: usize,

    /// number of generations
    #[arg(long, default_value_t = 200)]
    generations: usize,

    /// per-position swap probability
    #[arg(long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// tournament size
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// report progress every N generations
    #[arg(long, default_value_t = 20)]
    report_interval: usize,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// build offspring on worker threads (needs the `parallel` feature)
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// city as LABEL:X,Y; repeat for each city (defaults to an 8-city demo)
    #[arg(long = "city", value_name = "LABEL:X,Y")]
    cities: Vec<City>,
}

fn demo_cities() -> Vec<City> {
    vec![
        City::new("A", 0.0, 0.0),
        City::new("B", 1.0, 5.0),
        City::new("C", 2.0, 3.0),
        City::new("D", 5.0, 2.0),
        City::new("E", 6.0, 6.0),
        City::new("F", 7.0, 1.0),
        City::new("G", 8.0, 4.0),
        City::new("H", 9.0, 9.0),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let cities = if args.cities.is_empty() {
        demo_cities()
    } else {
        args.cities
    };
    let table = CityTable::new(cities).context("invalid city table")?;

    let mut config = GaConfig::default()
        .with_population_size(args.population_size)
        .with_generations(args.generations)
        .with_mutation_rate(args.mutation_rate)
        .with_tournament_size(args.tournament_size)
        .with_report_interval(args.report_interval)
        .with_parallel(args.parallel);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let result = GaRunner::run(&table, &config, &mut TracingSink).context("GA run failed")?;

    println!();
    println!("Best route: {}", result.best.labels(&table)?.join(" -> "));
    println!("Total distance: {:.2}", result.best_length);
    Ok(())
}
