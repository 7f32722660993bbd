use clap::{Parser, Subcommand};
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use rf_app::{
    AppResult, RunOptions, RunRequest, compile_scenario, ensure_run, extract_series, get_scenario,
    get_run_summary, list_coil_ids, list_runs, list_scenarios, load_run, load_scenarios,
    trace_rms_volts, validate_scenarios,
};

const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rf-cli")]
#[command(about = "Rotorflux CLI - Generator flux and voltage trace tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
    },
    /// List scenarios in a file
    Scenarios {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
    },
    /// Show derived geometry for a scenario
    Info {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
        /// Scenario ID to inspect
        scenario_id: String,
    },
    /// Compute voltage traces for a scenario
    Run {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
        /// Scenario ID to run
        scenario_id: String,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs for a scenario
    Runs {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
        /// Scenario ID to list runs for
        scenario_id: String,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export one variable of one coil's trace as CSV
    ExportSeries {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Coil ID (e.g. c0)
        coil_id: String,
        /// Variable name: flux or voltage
        variable: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a coil's full trace (time, flux, voltage) as CSV
    ExportTrace {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Coil ID (e.g. c0)
        coil_id: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Scenarios { scenario_path } => cmd_scenarios(&scenario_path),
        Commands::Info {
            scenario_path,
            scenario_id,
        } => cmd_info(&scenario_path, &scenario_id),
        Commands::Run {
            scenario_path,
            scenario_id,
            no_cache,
        } => cmd_run(&scenario_path, &scenario_id, !no_cache),
        Commands::Runs {
            scenario_path,
            scenario_id,
        } => cmd_runs(&scenario_path, &scenario_id),
        Commands::ShowRun {
            scenario_path,
            run_id,
        } => cmd_show_run(&scenario_path, &run_id),
        Commands::ExportSeries {
            scenario_path,
            run_id,
            coil_id,
            variable,
            output,
        } => cmd_export_series(
            &scenario_path,
            &run_id,
            &coil_id,
            &variable,
            output.as_deref(),
        ),
        Commands::ExportTrace {
            scenario_path,
            run_id,
            coil_id,
            output,
        } => cmd_export_trace(&scenario_path, &run_id, &coil_id, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario file: {}", scenario_path.display());
    let file = load_scenarios(scenario_path)?;
    validate_scenarios(&file)?;
    println!("✓ Scenario file is valid");
    Ok(())
}

fn cmd_scenarios(scenario_path: &Path) -> AppResult<()> {
    let file = load_scenarios(scenario_path)?;
    let scenarios = list_scenarios(&file);

    if scenarios.is_empty() {
        println!("No scenarios found in file");
    } else {
        println!("Scenarios in file:");
        for scenario in scenarios {
            println!(
                "  {} - {} ({} magnets, {} coils)",
                scenario.id, scenario.name, scenario.magnet_count, scenario.coil_count
            );
        }
    }
    Ok(())
}

fn cmd_info(scenario_path: &Path, scenario_id: &str) -> AppResult<()> {
    let file = load_scenarios(scenario_path)?;
    let scenario = get_scenario(&file, scenario_id)?;
    let compiled = compile_scenario(scenario)?;

    let rotor = compiled.engine.rotor();
    let half_width_rad = compiled.engine.influence_half_width().value;

    println!("Scenario: {} ({})", scenario.id, scenario.name);
    println!("  Window:            {}", compiled.engine.window_name());
    println!(
        "  Influence width:   ±{:.4} rad (±{:.1}°)",
        half_width_rad,
        half_width_rad * 180.0 / PI
    );
    println!("  Peak flux:         {:.4} Wb", compiled.engine.peak_flux().value);
    println!("  Magnet pitch:      {:.4} rad", rotor.pitch_rad());
    println!(
        "  Max magnets:       {} (configured {})",
        rotor.max_magnet_fit(),
        rotor.magnet_count
    );
    match rotor.rotation_period() {
        Some(period) => println!("  Rotation period:   {:.3} s", period.value),
        None => println!("  Rotation period:   - (stationary rotor)"),
    }
    println!("  Coils:             {}", compiled.coils.len());
    println!(
        "  Grid:              {} samples over {:.3} s",
        compiled.grid.len(),
        scenario.trace.t_end_s
    );

    Ok(())
}

fn cmd_run(scenario_path: &Path, scenario_id: &str, use_cache: bool) -> AppResult<()> {
    println!("Computing traces for scenario: {}", scenario_id);

    let request = RunRequest {
        scenario_path,
        scenario_id,
        options: RunOptions {
            use_cache,
            engine_version: ENGINE_VERSION.to_string(),
        },
    };

    let response = ensure_run(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Trace run completed: {}", response.run_id);
    }

    // Load results and show brief summary
    let (_manifest, traces) = load_run(scenario_path, &response.run_id)?;
    let summary = get_run_summary(&traces)?;
    println!("  Samples per coil: {}", summary.sample_count);
    println!(
        "  Time range: {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );
    for trace in &traces {
        println!("  {}: RMS {:.4} V", trace.coil_id, trace_rms_volts(trace));
    }

    Ok(())
}

fn cmd_runs(scenario_path: &Path, scenario_id: &str) -> AppResult<()> {
    let runs = list_runs(scenario_path, scenario_id)?;

    if runs.is_empty() {
        println!("No cached runs found for scenario: {}", scenario_id);
    } else {
        println!("Cached runs for scenario '{}':", scenario_id);
        for manifest in runs {
            println!("  {} ({})", manifest.run_id, manifest.timestamp);
        }
    }
    Ok(())
}

fn cmd_show_run(scenario_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, traces) = load_run(scenario_path, run_id)?;
    let summary = get_run_summary(&traces)?;

    println!("\nRun Summary:");
    println!("  Scenario: {}", manifest.scenario_id);
    println!("  Timestamp: {}", manifest.timestamp);
    println!("  Samples per coil: {}", summary.sample_count);
    println!(
        "  Time range: {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );

    println!("\nCoils:");
    for coil_id in list_coil_ids(&traces) {
        println!("  {}", coil_id);
    }

    Ok(())
}

fn cmd_export_series(
    scenario_path: &Path,
    run_id: &str,
    coil_id: &str,
    variable: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, traces) = load_run(scenario_path, run_id)?;
    let series = extract_series(&traces, coil_id, variable)?;

    // Build CSV
    let mut csv = String::from("time_s,value\n");
    for (t, val) in &series {
        csv.push_str(&format!("{},{}\n", t, val));
    }

    write_csv(&csv, series.len(), output)
}

fn cmd_export_trace(
    scenario_path: &Path,
    run_id: &str,
    coil_id: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, traces) = load_run(scenario_path, run_id)?;
    let trace = traces
        .iter()
        .find(|trace| trace.coil_id == coil_id)
        .ok_or_else(|| rf_app::AppError::InvalidInput(format!("Unknown coil: {}", coil_id)))?;

    let csv = rf_results::trace_to_csv(trace);
    write_csv(&csv, trace.samples.len(), output)
}

fn write_csv(csv: &str, rows: usize, output: Option<&Path>) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} data points to {}", rows, path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}
