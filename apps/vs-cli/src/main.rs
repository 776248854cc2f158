mod scenario;

use clap::{Parser, Subcommand};
use scenario::Scenario;
use std::path::{Path, PathBuf};
use vs_solubility::SolubilityResult;

#[derive(Parser)]
#[command(name = "vs-cli")]
#[command(about = "volsol CLI - Volatile solubility in silicate melts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Gas fugacities in equilibrium with the scenario's melt contents
    Fugacity {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Melt contents in equilibrium with the scenario's gas mole fractions
    Melt {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
}

fn main() -> SolubilityResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Fugacity { scenario_path } => cmd_fugacity(&scenario_path),
        Commands::Melt { scenario_path } => cmd_melt(&scenario_path),
    }
}

fn cmd_validate(scenario_path: &Path) -> SolubilityResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = Scenario::load(scenario_path)?;
    let cond = scenario.conditions.resolve()?;
    vs_melt::SilicateMelt::from_def(&scenario.melt)?;
    println!("✓ Scenario is valid");
    println!(
        "  T = {} K, P = {} bar, fO2 = {:.4e} bar",
        cond.t_kelvin(),
        cond.p_bar(),
        cond.fo2
    );
    Ok(())
}

fn cmd_fugacity(scenario_path: &Path) -> SolubilityResult<()> {
    let scenario = Scenario::load(scenario_path)?;
    let report = scenario.fugacities()?;

    if report.rows.is_empty() {
        println!("No melt contents in scenario");
        return Ok(());
    }

    println!("{:<8} {:>14} {:>14}", "species", "f [bar]", "mole frac");
    for row in &report.rows {
        println!(
            "{:<8} {:>14.6e} {:>14.6e}",
            row.species.to_string(),
            row.fugacity_bar,
            row.mole_fraction
        );
    }
    if let Some(saturated) = report.graphite_saturated {
        if saturated {
            println!("CO2 capped at graphite saturation");
        } else {
            println!("CO2 below graphite saturation");
        }
    }
    if let Some(ratio) = report.sulfate_sulfide {
        println!("S6+/S2- = {:.4e}", ratio);
    }
    Ok(())
}

fn cmd_melt(scenario_path: &Path) -> SolubilityResult<()> {
    let scenario = Scenario::load(scenario_path)?;
    let report = scenario.melt_contents()?;

    if report.rows.is_empty() {
        println!("No gas mole fractions in scenario");
        return Ok(());
    }

    println!("{:<8} {:>14} {:>14}", "species", "wt frac", "mol/g");
    for row in &report.rows {
        println!(
            "{:<8} {:>14.6e} {:>14.6e}",
            row.species.to_string(),
            row.weight_fraction,
            row.moles_per_gram
        );
    }
    if let Some(split) = report.sulfur {
        println!(
            "S as sulfide {:.6e}, as sulfate {:.6e}",
            split.sulfide, split.sulfate
        );
    }
    Ok(())
}
