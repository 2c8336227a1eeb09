//! Computes a route between two coordinates over a .graph road network.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use route_core::prelude::*;

#[derive(Parser)]
#[command(version, about = "Find the shortest route between two coordinates", long_about = None)]
struct Cli {
    /// Path to the .graph file
    graph_file: PathBuf,

    /// Start latitude
    start_lat: f64,
    /// Start longitude
    start_lon: f64,
    /// End latitude
    end_lat: f64,
    /// End longitude
    end_lon: f64,

    /// Print every point of the route, not just the summary
    #[arg(long)]
    full_route: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let g = Graph::from_graph_file(&cli.graph_file)?;

    let start = *g.nearest(&Point::new(cli.start_lat, cli.start_lon))?;
    let end = *g.nearest(&Point::new(cli.end_lat, cli.end_lon))?;

    println!("Snapped start to {start}");
    println!("Snapped end to {end}");

    if !connected(&g, &start, &end)? {
        anyhow::bail!("no route: {start} and {end} lie in different components");
    }

    let mut dijkstra = Dijkstra::new(&g);
    let route = dijkstra.route(&start, &end)?;

    if cli.full_route {
        for point in &route.points {
            println!("{point}");
        }
    }
    println!(
        "Route with {} points, {:.2} miles total",
        route.points.len(),
        route.distance
    );
    println!("{}", dijkstra.stats);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
