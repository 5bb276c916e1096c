//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use modcatalog_core::{ProgressReporter, ReportRunResult, load_tables, run_report};
use modcatalog_shared::{AppConfig, RepoEntry, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// modcatalog — module catalog ownership reports.
#[derive(Parser)]
#[command(
    name = "modcatalog",
    version,
    about = "Aggregate module metadata and report product ownership, freshness, and tag recommendations.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Scan the configured repositories and write the report sheets.
    Report {
        /// Output directory for the sheets (overrides config).
        #[arg(short, long)]
        out: Option<String>,

        /// Config file to use instead of ~/.modcatalog/modcatalog.toml.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Repository path(s) to scan, replacing the configured list.
        #[arg(long)]
        repo: Vec<String>,
    },

    /// Print a loaded lookup table.
    Dump {
        /// Which table to print.
        table: DumpTable,

        /// Config file to use instead of ~/.modcatalog/modcatalog.toml.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Lookup tables available for `dump`.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum DumpTable {
    Taxonomy,
    Ownership,
    Approvers,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "modcatalog=info",
        1 => "modcatalog=debug",
        _ => "modcatalog=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Report { out, config, repo } => cmd_report(out.as_deref(), config.as_deref(), &repo),
        Command::Dump { table, config } => cmd_dump(table, config.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn resolve_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    Ok(match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    })
}

fn cmd_report(
    out: Option<&str>,
    config_path: Option<&std::path::Path>,
    repos: &[String],
) -> Result<()> {
    let mut config = resolve_config(config_path)?;

    if let Some(out) = out {
        config.report.output_dir = out.to_string();
    }
    if !repos.is_empty() {
        config.repos = repos
            .iter()
            .map(|path| RepoEntry {
                name: String::new(),
                path: path.clone(),
            })
            .collect();
    }

    info!(
        repos = config.repos.len(),
        out = %config.report.output_dir,
        "starting report run"
    );

    let reporter = CliProgress::new();
    let result = run_report(&config, &reporter)?;

    println!();
    println!("  Report written!");
    println!("  Modules:         {}", result.module_count);
    println!("  Recommendations: {}", result.recommendation_count);
    println!("  Sheets:");
    for path in &result.sheet_paths {
        println!("    {}", path.display());
    }
    println!("  Time:            {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_dump(table: DumpTable, config_path: Option<&std::path::Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let tables = load_tables(&config.inputs)?;

    let lines = match table {
        DumpTable::Taxonomy => tables.taxonomy.dump(),
        DumpTable::Ownership => tables.ownership.dump(),
        DumpTable::Approvers => tables.approvers.dump(),
    };
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn repo_scanned(&self, repo: &str, module_count: usize) {
        self.spinner
            .set_message(format!("Scanned {repo} ({module_count} modules)"));
    }

    fn done(&self, _result: &ReportRunResult) {
        self.spinner.finish_and_clear();
    }
}
