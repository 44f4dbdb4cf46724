use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use route_optimizer::config::AppConfig;
use route_optimizer::geocoding::NominatimClient;
use route_optimizer::models::{Algorithm, GeneticParams, OptimizationResult, Waypoint};
use route_optimizer::navigation::directions_url;
use route_optimizer::{proxy, Optimizer};
use tracing::info;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Order the waypoints of a JSON file into a short route
    Optimize {
        /// JSON array of waypoints ({"id", "label", "coordinate"?, "isStart"?})
        #[arg(short, long)]
        input: PathBuf,

        /// "nearest" or "genetic"
        #[arg(short, long, default_value = "nearest")]
        algorithm: Algorithm,

        #[arg(long)]
        population_size: Option<usize>,

        #[arg(long)]
        generations: Option<usize>,

        #[arg(long)]
        mutation_rate: Option<f64>,

        #[arg(long)]
        elitism_rate: Option<f64>,

        /// Seed for reproducible genetic runs
        #[arg(long)]
        seed: Option<u64>,

        /// Look up coordinates for waypoints that have none
        #[arg(short, long)]
        geocode: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a single address
    Geocode { address: String },
    /// Run the geocoding proxy
    Serve {
        /// Listen address, e.g. 127.0.0.1:3000
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut config = AppConfig::from_env()?;

    match cli.command {
        Commands::Optimize {
            input,
            algorithm,
            population_size,
            generations,
            mutation_rate,
            elitism_rate,
            seed,
            geocode,
            json,
        } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let mut waypoints: Vec<Waypoint> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing waypoints from {}", input.display()))?;

            if geocode {
                let client = NominatimClient::new(config.geocoder_params());
                client.resolve_all(&mut waypoints).await;
                for waypoint in waypoints.iter().filter(|w| w.error().is_some()) {
                    info!(
                        id = waypoint.id(),
                        label = waypoint.label(),
                        error = waypoint.error().unwrap_or_default(),
                        "waypoint excluded"
                    );
                }
            }

            let defaults = GeneticParams::default();
            let params = GeneticParams::new(
                population_size.unwrap_or(defaults.population_size()),
                generations.unwrap_or(defaults.generations()),
                mutation_rate.unwrap_or(defaults.mutation_rate()),
                elitism_rate.unwrap_or(defaults.elitism_rate()),
            );

            let mut optimizer = Optimizer::new(algorithm).with_genetic_params(params);
            if let Some(seed) = seed {
                optimizer = optimizer.with_seed(seed);
            }
            let result = optimizer.optimize(&waypoints)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }
        Commands::Geocode { address } => {
            let client = NominatimClient::new(config.geocoder_params());
            match client.find_coordinates(&address).await? {
                Some(coordinate) => println!("{:.6}, {:.6}", coordinate.lat(), coordinate.lon()),
                None => println!("not found"),
            }
        }
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            proxy::serve(&config).await?;
        }
    }

    Ok(())
}

fn print_result(result: &OptimizationResult) {
    if result.is_empty() {
        println!("Nothing to optimize: need a located start and at least one other located waypoint.");
        return;
    }

    let algorithm = result.algorithm().map(|a| a.to_string()).unwrap_or_default();
    println!("Optimized route ({algorithm}):");
    let legs = result.route().legs();
    for (i, waypoint) in result.route().waypoints().iter().enumerate() {
        let position = waypoint
            .coordinate()
            .map(|c| format!(" ({:.4}, {:.4})", c.lat(), c.lon()))
            .unwrap_or_default();
        match legs.get(i) {
            Some(leg) => println!(
                "  {:>2}. {}{}  -> {} m",
                i + 1,
                waypoint.label(),
                position,
                leg.distance.round()
            ),
            None => println!("  {:>2}. {}{}", i + 1, waypoint.label(), position),
        }
    }
    println!("Total distance: {} m", result.total_distance().round());

    if let Some(url) = directions_url(result.route()) {
        println!("Navigation: {url}");
    }
}
