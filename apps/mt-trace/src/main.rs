//! mt-trace — build an ns-2/ns-3 mobility trace from a SUMO road network.
//!
//! Pipeline: load the `.net.xml`, pick a target road (longest by default),
//! generate a jittered fixed-rate departure schedule, write it as a SUMO
//! route file, read that file back, resample every route along its lane
//! geometry and export the waypoints as an ns-2 mobility trace.
//!
//! ```text
//! mt-trace --net city.net.xml --rate 200 --trace-out city.tcl
//! mt-trace --net city.net.xml --list 20
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mt_core::{PipelineConfig, SimRng};
use mt_demand::{ArrivalProcess, Direction, VehicleType, load_routes_file, write_routes_file};
use mt_mobility::{GeometryIndex, Resampler};
use mt_network::{RoadNetwork, RoadSelector, load_network_file};
use mt_output::{CsvTrajectoryWriter, Ns2TraceWriter, TraceOptions, TrajectoryWriter, max_node_id};

/// Roads shown in the report when `--list` is not given.
const TOP_ROADS: usize = 5;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SUMO network file (`.net.xml`).
    #[arg(long)]
    net: PathBuf,

    /// Target road id; defaults to the longest road.
    #[arg(long)]
    edge: Option<String>,

    #[arg(long, default_value = "routes.rou.xml")]
    routes_out: PathBuf,

    #[arg(long, default_value = "mobility.tcl")]
    trace_out: PathBuf,

    /// Also write every waypoint to this CSV file.
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// TOML file with `PipelineConfig` fields; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Vehicles per hour.
    #[arg(long)]
    rate: Option<f64>,

    /// Generation horizon, seconds.
    #[arg(long)]
    horizon: Option<f64>,

    /// Print the `n` longest roads and exit.
    #[arg(long, value_name = "N")]
    list: Option<usize>,

    /// Debug-level logging (unless `RUST_LOG` is set).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .init();

    let config = build_config(&args)?;
    let t0 = Instant::now();

    println!("=== mt-trace — SUMO → ns-3 mobility ===");
    println!(
        "Rate: {} veh/h  |  Horizon: {} s  |  Seed: {}",
        config.rate_per_hour, config.horizon_secs, config.seed
    );
    println!();

    // 1. Network.
    if !args.net.is_file() {
        bail!("network file {} does not exist", args.net.display());
    }
    let network = load_network_file(&args.net, &config)
        .with_context(|| format!("loading network {}", args.net.display()))?;
    let summary = network.summary();
    println!(
        "Network <{}>: {} junctions, {} edges ({} roads, {} skipped)",
        summary.root_tag,
        summary.junction_elements,
        summary.edge_elements,
        network.len(),
        summary.skipped_edges
    );

    if let Some(n) = args.list {
        print_roads(&network, n);
        return Ok(());
    }
    print_roads(&network, TOP_ROADS);

    // 2. Departures → route file.
    let mut rng = SimRng::new(config.seed);
    let selector = RoadSelector::from_option(args.edge.clone());
    let events = ArrivalProcess::from_config(&config)
        .context("arrival configuration")?
        .generate_for(&network, &selector, &mut rng)
        .context("generating departures")?;
    write_routes_file(&args.routes_out, &events, &VehicleType::default())
        .with_context(|| format!("writing routes {}", args.routes_out.display()))?;

    let reverse = events.iter().filter(|e| e.direction == Direction::Reverse).count();
    println!(
        "Departures: {} ({} forward, {} reverse) on {}",
        events.len(),
        events.len() - reverse,
        reverse,
        events.first().map_or("-", |e| e.edge.as_str())
    );

    // 3. Route file → trajectories.
    let routes = load_routes_file(&args.routes_out)
        .with_context(|| format!("reading routes {}", args.routes_out.display()))?;
    let index = GeometryIndex::from_network(&network, config.min_points_per_edge);
    let trajectories = Resampler::from_config(&config)
        .context("resampling configuration")?
        .resample_all(&index, &routes, &mut rng)
        .context("resampling routes")?;

    // 4. Export.
    Ns2TraceWriter::new(&args.trace_out, TraceOptions::from_config(&config))
        .write_trajectories(&trajectories)
        .with_context(|| format!("writing trace {}", args.trace_out.display()))?;
    if let Some(csv_out) = &args.csv_out {
        CsvTrajectoryWriter::new(csv_out)
            .write_trajectories(&trajectories)
            .with_context(|| format!("writing waypoints {}", csv_out.display()))?;
    }

    // 5. Report.
    let moves: usize = trajectories.iter().map(|t| t.moves().len()).sum();
    println!();
    println!("Done in {:.3} s", t0.elapsed().as_secs_f64());
    println!("  {:<28} {} vehicles", display(&args.routes_out), routes.len());
    println!("  {:<28} {} nodes, {} movements", display(&args.trace_out), trajectories.len(), moves);
    if let Some(max_id) = max_node_id(&trajectories) {
        println!("  highest node id {max_id}: the ns-3 scenario needs numNodes >= {}", u64::from(max_id) + 1);
    }
    if let Some(csv_out) = &args.csv_out {
        println!("  {:<28} {} rows", display(csv_out), moves + trajectories.len());
    }

    Ok(())
}

/// Defaults, then the `--config` file, then individual flags.
fn build_config(args: &Args) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<PipelineConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PipelineConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(rate) = args.rate {
        config.rate_per_hour = rate;
    }
    if let Some(horizon) = args.horizon {
        config.horizon_secs = horizon;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn print_roads(network: &RoadNetwork, n: usize) {
    println!();
    println!("{:<4} {:<24} {:>10}  {:<9} {}", "#", "Road", "Length m", "Source", "From → To");
    println!("{}", "-".repeat(72));
    for (i, road) in network.top(n).iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>10.2}  {:<9} {} → {}",
            i + 1,
            road.id,
            road.length_m,
            format!("{:?}", road.length_source),
            road.from,
            road.to
        );
    }
    println!();
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
