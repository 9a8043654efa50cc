// logdiff - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Optional config file loading
// 3. Logging initialisation (debug mode support)
// 4. Save prompt, run, report output, and exports

use clap::Parser;
use logdiff::app::driver::{self, RunConfig, RunOutcome};
use logdiff::app::prompt;
use logdiff::core::export;
use logdiff::platform::config::{self, AppConfig};
use logdiff::util;
use logdiff::util::error::{ExportError, LogDiffError};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// logdiff - compare two snapshots of per-host log files.
///
/// Reports, per host, the warnings and criticals that are new in the newer
/// snapshot and those that were already present in the older one.
#[derive(Parser, Debug)]
#[command(
    name = "logdiff",
    version,
    about,
    after_help = "Example: logdiff 20241101 20241201"
)]
struct Cli {
    /// Directory holding the older log snapshot.
    older_dir: PathBuf,

    /// Directory holding the newer log snapshot.
    newer_dir: PathBuf,

    /// Save the report into the newer directory without asking.
    #[arg(long, conflicts_with = "no_save")]
    save: bool,

    /// Do not save the report and do not ask.
    #[arg(long = "no-save")]
    no_save: bool,

    /// Read settings from this TOML config file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Also export the report as JSON to this path.
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Also export the report as CSV to this path.
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Load the config file named on the command line, or defaults.
fn load_app_config(path: Option<&Path>) -> Result<(AppConfig, Vec<String>), LogDiffError> {
    match path {
        Some(path) => Ok(config::load_config(path)?),
        None => Ok((AppConfig::default(), Vec::new())),
    }
}

/// Decide whether to save: explicit flags win, otherwise ask on the terminal.
fn resolve_save(cli: &Cli) -> Result<bool, LogDiffError> {
    if cli.save {
        return Ok(true);
    }
    if cli.no_save {
        return Ok(false);
    }
    prompt::ask_save(io::stdin().lock(), io::stdout()).map_err(|e| LogDiffError::Io {
        path: PathBuf::from("<stdin>"),
        operation: "read save answer",
        source: e,
    })
}

fn create_export(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write the optional JSON/CSV exports.
fn write_exports(cli: &Cli, outcome: &RunOutcome) -> Result<(), LogDiffError> {
    if let Some(ref path) = cli.json {
        let count = export::export_json(&outcome.report, create_export(path)?, path)?;
        tracing::info!(path = %path.display(), lines = count, "JSON export written");
    }
    if let Some(ref path) = cli.csv {
        let count = export::export_csv(&outcome.report, create_export(path)?, path)?;
        tracing::info!(path = %path.display(), lines = count, "CSV export written");
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), LogDiffError> {
    let (app_config, config_warnings) = load_app_config(cli.config.as_deref())?;

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "logdiff starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    let save_output = resolve_save(cli)?;

    let run_config = RunConfig {
        older_dir: cli.older_dir.clone(),
        newer_dir: cli.newer_dir.clone(),
        save_output,
        pairing: app_config.pairing,
        output_file_name: app_config.output_file_name,
    };
    let outcome = driver::run(&run_config)?;

    for warning in &outcome.warnings {
        tracing::debug!(warning = %warning, "Directory walk warning");
    }

    println!("{}", outcome.text);
    if let Some(path) = driver::save_report(&run_config, &outcome.text)? {
        println!("Output saved to {}", path.display());
    }

    write_exports(cli, &outcome)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
