//! # Axxiom BOM CLI
//!
//! Terminal front end for the mounting BOM engine. Reads an installation
//! document (`{ "panel": ..., "roof": ... }`) from a file or stdin and prints
//! the bill of materials as a table or as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bom_core::catalog::{standard_catalog, Part, PartCategory, PartKey};
use bom_core::config::{
    Color, HookType, Installation, MountingFamily, Orientation, PanelConfig, ProfileType, RoofConfig,
    RoofingType, SlantedRoofOptions,
};
use bom_core::units::Millimeters;
use bom_core::{compute_bom, BomResult};

/// Solar panel mounting bill of materials
#[derive(Parser, Debug)]
#[command(name = "bom_cli", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the bill of materials of an installation document.
    Calculate(CalculateArgs),

    /// List the parts of the standard catalog.
    Catalog(CatalogArgs),

    /// Print the reference slanted-roof installation document.
    Example,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Installation document; read from stdin when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Only list parts of this category (e.g. "clamps", "hardware").
    #[arg(long)]
    category: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Calculate(args) => run_calculate(&args),
        Commands::Catalog(args) => run_catalog(&args),
        Commands::Example => run_example(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run_calculate(args: &CalculateArgs) -> Result<()> {
    let installation = read_installation(args.config.as_ref())?;
    tracing::info!(
        roof_type = %installation.roof.roof_type(),
        rows = installation.panel.rows,
        columns = installation.panel.columns,
        "calculating"
    );

    let result = match compute_bom(&installation.panel, &installation.roof) {
        Ok(result) => result,
        Err(e) => {
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return Err(e).context("BOM calculation failed");
        }
    };

    if args.json {
        println!("{}", result.to_json()?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let category = args
        .category
        .as_deref()
        .map(PartCategory::from_str_flexible)
        .transpose()?;

    let catalog = standard_catalog();
    let parts: Box<dyn Iterator<Item = (PartKey, &Part)>> = match category {
        Some(category) => Box::new(catalog.in_category(category)),
        None => Box::new(catalog.iter()),
    };

    println!("{:<12}  {:<40}  {:>6}  {}", "Code", "Description", "Pack", "Category");
    println!("{}", "─".repeat(80));
    for (_, part) in parts {
        println!(
            "{:<12}  {:<40}  {:>6}  {}",
            part.code, part.description, part.packaging_unit, part.category
        );
    }
    Ok(())
}

fn run_example() -> Result<()> {
    println!("{}", reference_installation().to_json()?);
    Ok(())
}

fn read_installation(path: Option<&PathBuf>) -> Result<Installation> {
    let text = match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };
    parse_installation(&text)
}

fn parse_installation(text: &str) -> Result<Installation> {
    Ok(Installation::from_json(text)?)
}

/// 35 black-framed panels on a tiled roof with feather profiles
fn reference_installation() -> Installation {
    Installation {
        panel: PanelConfig {
            height: Millimeters(1722),
            width: Millimeters(1134),
            thickness: Millimeters(35),
            orientation: Orientation::Landscape,
            rows: 5,
            columns: 7,
        },
        roof: RoofConfig::new(
            MountingFamily::SlantedRoof(SlantedRoofOptions {
                roofing_type: Some(RoofingType::Tiled),
                hook_type: Some(HookType::Normal),
                profile_type: Some(ProfileType::Feather),
            }),
            Color::Black,
            Color::Black,
        ),
    }
}

fn print_report(result: &BomResult) {
    let panel = &result.config.panel;
    let roof = &result.config.roof;

    println!("═══════════════════════════════════════════════════════════════════════════");
    println!("  AXXIOM MOUNTING BOM                                          {}", chrono::Local::now().format("%Y-%m-%d"));
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!();
    println!("Configuration:");
    println!("  Panels:       {} x {} = {} ({})", panel.rows, panel.columns, result.total_panels, panel.orientation);
    println!("  Panel size:   {} x {} x {}", panel.height, panel.width, panel.thickness);
    println!("  Roof type:    {}", roof.roof_type());
    if let Some(angle) = roof.angle() {
        println!("  Angle:        {}", angle);
    }
    println!("  Colors:       profiles {}, clamps {}", roof.profile_color, roof.clamp_color);
    println!();

    if !result.has_items() {
        println!("No parts required.");
        return;
    }

    println!("{:<12}  {:<40}  {:>8}  {:>5}  {:>8}", "Code", "Description", "Required", "Pack", "To order");
    println!("{}", "─".repeat(79));
    for item in &result.items {
        println!(
            "{:<12}  {:<40}  {:>8}  {:>5}  {:>8}",
            item.product_code, item.description, item.required, item.packaged, item.to_order
        );
    }
    println!("{}", "─".repeat(79));
    println!("{:<12}  {:<40}  {:>8}  {:>5}  {:>8}", "", "Total pieces", "", "", result.total_to_order());
}
