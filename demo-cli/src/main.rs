//! Land-use benefit calculator demo
//!
//! Command-line stand-in for the map UI: takes the category selections and
//! the measured area as arguments, runs one calculation, and renders the
//! result record as text. All rounding and phrasing happens here; the
//! library returns raw values.

use clap::Parser;
use land_benefit_core::{
    BenefitCalculator, BenefitConfig, BenefitResult, CategoryId, CurrentValues, Hectares,
    MetricChange, SquareMeters,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Estimate the environmental impact of changing a parcel's land use
#[derive(Parser, Debug)]
#[command(name = "land-benefit")]
#[command(about = "Land-use change benefit calculator", long_about = None)]
struct Args {
    /// Current land-use category
    #[arg(short, long)]
    current: String,

    /// Future land-use category (not needed with --quantify)
    #[arg(short, long)]
    future: Option<String>,

    /// Parcel area in hectares
    #[arg(short, long, conflicts_with = "area_m2")]
    area: Option<f64>,

    /// Parcel area in square meters, as measured on the map
    #[arg(long)]
    area_m2: Option<f64>,

    /// Built-in profile (carbon-water-habitat, hydrology)
    #[arg(short, long, default_value = "carbon-water-habitat")]
    profile: String,

    /// JSON configuration document (overrides --profile)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report the current category's standing value instead of a transition
    #[arg(short, long)]
    quantify: bool,

    /// Print the active configuration as JSON and exit
    #[arg(long)]
    emit_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(args)?;

    if args.emit_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let calc = BenefitCalculator::new(config)?;
    let current: CategoryId = args.current.parse()?;
    let area = parse_area(args)?;

    if args.quantify {
        let values = calc.quantify_current(&current, area)?;
        print_current_values(&current, &values);
        return Ok(());
    }

    let future: CategoryId = args
        .future
        .as_deref()
        .ok_or("a future category is required (or pass --quantify)")?
        .parse()?;
    let result = calc.compute_benefits(&current, &future, area)?;
    print_transition(&current, &future, &result);
    Ok(())
}

fn load_config(args: &Args) -> Result<BenefitConfig, Box<dyn Error>> {
    if let Some(path) = &args.config {
        let doc = std::fs::read_to_string(path)?;
        return Ok(BenefitConfig::from_json_str(&doc)?);
    }
    match args.profile.as_str() {
        "carbon-water-habitat" => Ok(BenefitConfig::carbon_water_habitat()),
        "hydrology" => Ok(BenefitConfig::hydrology()),
        other => Err(format!("unknown profile: {other}").into()),
    }
}

fn parse_area(args: &Args) -> Result<Hectares, Box<dyn Error>> {
    match (args.area, args.area_m2) {
        (Some(ha), None) => Ok(Hectares::new(ha)),
        (None, Some(m2)) => Ok(SquareMeters::new(m2).into()),
        // clap's conflicts_with already rejects passing both
        _ => Err("an area is required (--area or --area-m2)".into()),
    }
}

fn print_transition(current: &CategoryId, future: &CategoryId, result: &BenefitResult) {
    println!("Environmental change: {current} → {future}");
    println!("Area of the selected site: {:.2} hectares", *result.area);
    for metric in &result.metrics {
        println!();
        println!("{}:", metric.metric);
        println!("  Current: {:.2} {}", metric.current, metric.unit);
        println!("  Future:  {:.2} {}", metric.future, metric.unit);
        let direction = if metric.delta >= 0.0 {
            "will be gained"
        } else {
            "will be lost"
        };
        println!(
            "  Difference: {:.2} {} {}",
            metric.delta.abs(),
            metric.unit,
            direction
        );
        for note in partial_notes(metric, current, future) {
            println!("  note: {note}");
        }
    }
}

fn print_current_values(current: &CategoryId, values: &CurrentValues) {
    println!("Current land-use values: {current}");
    println!("Area of the selected site: {:.2} hectares", *values.area);
    for metric in &values.metrics {
        println!("  {}: {:.2} {}", metric.metric, metric.value, metric.unit);
        if metric.rate_missing {
            println!("    note: no {} rate for {current}; treated as 0", metric.metric);
        }
    }
}

fn partial_notes(metric: &MetricChange, current: &CategoryId, future: &CategoryId) -> Vec<String> {
    let mut notes = Vec::new();
    if metric.current_rate_missing {
        notes.push(format!("no {} rate for {current}; treated as 0", metric.metric));
    }
    if metric.future_rate_missing {
        notes.push(format!("no {} rate for {future}; treated as 0", metric.metric));
    }
    notes
}
