mod demos;
mod network;
mod server;
mod shortest_path;
mod tracks;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    network::{Station, WeightedGraph},
    shortest_path::shortest_path,
};

#[derive(Parser)]
#[command(version, about = "Railway network data-structure demonstrations")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every data-structure demonstration
    Demo,
    /// Print the shortest distance between two stations
    Route {
        /// Track file: JSON array or FROM,TO,DISTANCE lines
        #[arg(long)]
        tracks: PathBuf,
        from: Station,
        to: Station,
    },
    /// Serve shortest-distance queries over HTTP
    Serve {
        #[arg(long)]
        tracks: PathBuf,
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => log_filter(&cli.log_level)?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::Demo => demos::run(),
        Command::Route { tracks, from, to } => {
            let graph = load_graph(&tracks)?;
            for station in [&from, &to].into_iter().filter(|s| !graph.contains(s)) {
                warn!("{station} does not appear in {}", tracks.display());
            }

            let now = std::time::Instant::now();
            let distance = shortest_path(&graph, &from, &to);
            info!("Query done in {:?}", now.elapsed());

            match distance {
                Some(distance) => println!("Shortest path {from} to {to}: {distance}"),
                None => println!("{to} is unreachable from {from}"),
            }
        }
        Command::Serve { tracks, addr } => {
            let graph = load_graph(&tracks)?;
            tokio::runtime::Runtime::new()?.block_on(server::serve(graph, addr))?;
        }
    }

    Ok(())
}

fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid --log-level: {level}"))
}

fn load_graph(path: &Path) -> Result<WeightedGraph> {
    let now = std::time::Instant::now();
    info!("Reading tracks from {}", path.display());
    let graph = WeightedGraph::from_records(tracks::read_tracks(path)?);
    info!(
        stations = graph.station_count(),
        tracks = graph.track_count(),
        "Done in {:?}",
        now.elapsed()
    );
    Ok(graph)
}
