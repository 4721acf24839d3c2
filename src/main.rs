use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use grindmatch::config::AppConfig;
use grindmatch::core::{micron_table, range_overview, ConversionReport, RecordLoader};
use grindmatch::engine::{categorize_grind, read_setting, ValidationError};
use grindmatch::sources::DirectorySource;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

/// Width of the bars drawn by `ranges`
const RANGE_BAR_WIDTH: usize = 40;

/// grindmatch - convert grinder settings by matching median particle size
#[derive(Parser, Debug)]
#[command(name = "grindmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the manifest and grinder records
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available grinders
    List,

    /// Convert a setting from one grinder to another
    Convert {
        /// Setting on the source grinder
        #[arg(value_name = "SETTING", allow_hyphen_values = true)]
        setting: String,

        /// Source grinder (file name, file stem or grinder id)
        #[arg(short = 'f', long = "from", value_name = "GRINDER")]
        from: Option<String>,

        /// Target grinder (file name, file stem or grinder id)
        #[arg(short = 't', long = "to", value_name = "GRINDER")]
        to: Option<String>,
    },

    /// Show the setting on every grinder for a particle size
    Table {
        /// Median particle size in micrometers
        #[arg(value_name = "MICRONS")]
        microns: f64,
    },

    /// Show the calibrated particle size range of every grinder
    Ranges,

    /// Show or update the saved configuration
    Config {
        /// Store this directory as the default data directory
        #[arg(long = "set-data-dir", value_name = "DIR")]
        set_data_dir: Option<PathBuf>,

        /// Store a default source grinder
        #[arg(long = "set-from", value_name = "GRINDER")]
        set_from: Option<String>,

        /// Store a default target grinder
        #[arg(long = "set-to", value_name = "GRINDER")]
        set_to: Option<String>,
    },
}

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting grindmatch v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli);

    match cli.command {
        Command::List => list(&loader(&cli, &config)?),
        Command::Convert { ref setting, ref from, ref to } => {
            let from = from
                .clone()
                .or_else(|| config.default_from.clone())
                .ok_or_else(|| anyhow!("No source grinder given (use --from or set a default)"))?;
            let to = to
                .clone()
                .or_else(|| config.default_to.clone())
                .ok_or_else(|| anyhow!("No target grinder given (use --to or set a default)"))?;
            convert(&loader(&cli, &config)?, &from, &to, setting)
        }
        Command::Table { microns } => table(&loader(&cli, &config)?, microns),
        Command::Ranges => ranges(&loader(&cli, &config)?),
        Command::Config {
            ref set_data_dir,
            ref set_from,
            ref set_to,
        } => update_config(&cli, config, set_data_dir, set_from, set_to),
    }
}

/// Load configuration - from --config if specified, otherwise from the default location
fn load_config(cli: &Cli) -> AppConfig {
    if let Some(ref path) = cli.config {
        match AppConfig::load_from_path(path) {
            Ok(config) => {
                info!("Loaded config from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config file '{}': {:#}", path.display(), e);
                AppConfig::default()
            }
        }
    } else {
        match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config, using defaults: {:#}", e);
                AppConfig::default()
            }
        }
    }
}

fn loader(cli: &Cli, config: &AppConfig) -> Result<RecordLoader<DirectorySource>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.resolve_data_dir()?,
    };
    debug!("Reading grinder records from {}", data_dir.display());
    Ok(RecordLoader::new(DirectorySource::with_manifest(
        data_dir,
        config.manifest_file.clone(),
    )))
}

fn list(loader: &RecordLoader<DirectorySource>) -> Result<ExitCode> {
    let grinders = loader.load_all()?;
    println!("Available grinders ({}):", grinders.len());
    println!();

    for loaded in &grinders {
        let grinder = &loaded.grinder;
        let c = grinder.constraints();
        println!("  {} - {}", loaded.file_name.trim_end_matches(".json"), grinder.display_name());
        println!(
            "      Settings: {} ({}), {} to {} in steps of {}",
            grinder.setting_type(),
            grinder.setting_format(),
            c.min,
            c.max,
            c.step
        );
        match grinder.micrometer_range() {
            Some((min, max)) => println!(
                "      Calibration: {} points, {:.0} - {:.0} µm",
                grinder.pairs().len(),
                min,
                max
            ),
            None => println!("      Calibration: none"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn convert(
    loader: &RecordLoader<DirectorySource>,
    from: &str,
    to: &str,
    setting_text: &str,
) -> Result<ExitCode> {
    let source = loader.find(from)?;
    let target = loader.find(to)?;

    let setting = match read_setting(setting_text, &source.grinder) {
        Ok(Some(setting)) => setting,
        Ok(None) => {
            let c = source.grinder.constraints();
            eprintln!(
                "Enter a setting for {} ({} – {}).",
                source.grinder.display_name(),
                c.min,
                c.max
            );
            return Ok(ExitCode::FAILURE);
        }
        Err(e @ ValidationError::Unparseable) => {
            eprintln!("{}: {:?}", e, setting_text);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = ConversionReport::build(&source.grinder, &target.grinder, setting)?;
    if report.clamped {
        warn!(
            "{} at {} is outside the calibrated range of {}",
            source.grinder.display_name(),
            setting,
            target.grinder.display_name()
        );
    }
    println!("{}", report);
    Ok(ExitCode::SUCCESS)
}

fn table(loader: &RecordLoader<DirectorySource>, microns: f64) -> Result<ExitCode> {
    if !microns.is_finite() {
        eprintln!("Invalid particle size: {}", microns);
        return Ok(ExitCode::FAILURE);
    }

    let grinders = loader.load_all()?;
    let rows = micron_table(grinders.iter().map(|g| g.grinder.as_ref()), microns);
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);

    println!("{} µm ({})", microns, categorize_grind(microns));
    println!();
    for row in rows {
        let note = if row.clamped { "  (clamped)" } else { "" };
        println!("  {:<width$}  {}{}", row.name, row.setting, note, width = name_width);
    }
    Ok(ExitCode::SUCCESS)
}

fn ranges(loader: &RecordLoader<DirectorySource>) -> Result<ExitCode> {
    let grinders = loader.load_all()?;
    let overview = range_overview(grinders.iter().map(|g| g.grinder.as_ref()));
    let name_width = overview
        .ranges
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    for range in &overview.ranges {
        let (left, width) = overview.position(range);
        let start = (left * RANGE_BAR_WIDTH as f64).round() as usize;
        let len = ((width * RANGE_BAR_WIDTH as f64).round() as usize).max(1);
        let start = start.min(RANGE_BAR_WIDTH - 1);
        let len = len.min(RANGE_BAR_WIDTH - start);
        let bar = format!(
            "{}{}{}",
            " ".repeat(start),
            "#".repeat(len),
            " ".repeat(RANGE_BAR_WIDTH - start - len)
        );
        println!(
            "  {:<width$}  |{}|  {:.0} - {:.0} µm",
            range.name,
            bar,
            range.min,
            range.max,
            width = name_width
        );
    }

    let scale = format!(
        "{} µm{:^mid$}{} µm",
        overview.chart_min,
        format!("{} µm", overview.chart_mid()),
        overview.chart_max,
        mid = RANGE_BAR_WIDTH.saturating_sub(12)
    );
    println!("  {:<width$}   {}", "", scale, width = name_width);
    Ok(ExitCode::SUCCESS)
}

fn update_config(
    cli: &Cli,
    mut config: AppConfig,
    set_data_dir: &Option<PathBuf>,
    set_from: &Option<String>,
    set_to: &Option<String>,
) -> Result<ExitCode> {
    let changed = set_data_dir.is_some() || set_from.is_some() || set_to.is_some();
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(from) = set_from {
        config.default_from = Some(from.clone());
    }
    if let Some(to) = set_to {
        config.default_to = Some(to.clone());
    }

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::config_path()?,
    };
    if changed {
        config.save_to_path(&path)?;
        info!("Saved configuration to {}", path.display());
    }

    println!("Config file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(ExitCode::SUCCESS)
}
