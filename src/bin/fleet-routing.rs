use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleet_routing::constructive::ConstructionStrategy;
use fleet_routing::distance::DEFAULT_SCALE;
use fleet_routing::models::{Customer, Instance, InstanceData, VehicleType};
use fleet_routing::planner::{plan, PlannerConfig};

/// Build depot round-trip routes for a fleet of vehicle types.
#[derive(Debug, Parser)]
#[command(name = "fleet-routing", version, about)]
struct Args {
    /// JSON instance file (depot, customers, vehicle_types). Uses the
    /// built-in demo instance when omitted.
    #[arg(short, long)]
    instance: Option<PathBuf>,

    /// Construction strategy.
    #[arg(short, long, value_enum, default_value_t = ConstructionStrategy::FirstFitDecreasing)]
    strategy: ConstructionStrategy,

    /// Degrees to distance-unit multiplier.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    /// Print the plan as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let instance = match &args.instance {
        Some(path) => load_instance(path)?,
        None => demo_instance()?,
    };
    info!(
        customers = instance.num_customers(),
        vehicle_types = instance.vehicle_types().len(),
        "instance loaded"
    );

    let config = PlannerConfig::default()
        .with_strategy(args.strategy)
        .with_distance_scale(args.scale);
    let plan = plan(&instance, &config).context("no feasible plan")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{plan}");
    }
    Ok(())
}

fn load_instance(path: &Path) -> Result<Instance> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading instance {}", path.display()))?;
    let data: InstanceData = serde_json::from_str(&raw)
        .with_context(|| format!("parsing instance {}", path.display()))?;
    Ok(Instance::try_from(data)?)
}

fn demo_instance() -> Result<Instance> {
    let customers = [
        (1, 4.3555, 113.9777, 5),
        (2, 4.3976, 114.0049, 8),
        (3, 4.3163, 114.0764, 3),
        (4, 4.3184, 113.9932, 6),
        (5, 4.4024, 113.9896, 5),
        (6, 4.4142, 114.0127, 8),
        (7, 4.4804, 114.0734, 3),
        (8, 4.3818, 114.2034, 6),
        (9, 4.4935, 114.1828, 5),
        (10, 4.4932, 114.1322, 8),
    ]
    .into_iter()
    .map(|(id, lat, lon, demand)| Customer::new(id, lat, lon, demand))
    .collect();

    let instance = Instance::new(
        Customer::depot(0, 4.4184, 114.0932),
        customers,
        vec![
            VehicleType::new("Type A", 25, 1.2),
            VehicleType::new("Type B", 30, 1.5),
        ],
    )?;
    Ok(instance)
}
