use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "vdwp - gas-hydrate structure stability surfaces from LJD cell potentials and van der Waals-Platteeuw theory.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the CS1 - CS2 chemical-potential difference over a ternary composition grid.
    Surface(SurfaceArgs),
    /// Print the Langmuir constants of the three guests in every cage type.
    Langmuir(LangmuirArgs),
    /// List the guest species known to the interaction table.
    Species(SpeciesArgs),
}

/// Inputs shared by every command that evaluates the model.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// First guest species (pure at the triangle's origin).
    #[arg(long, value_name = "NAME")]
    pub gas_a: Option<String>,

    /// Second guest species.
    #[arg(long, value_name = "NAME")]
    pub gas_b: Option<String>,

    /// Third guest species (pure at the triangle's apex).
    #[arg(long, value_name = "NAME")]
    pub gas_c: Option<String>,

    /// Total pressure in bar.
    #[arg(short = 'P', long, value_name = "BAR")]
    pub pressure: Option<f64>,

    /// Temperature in kelvin.
    #[arg(short = 'T', long, value_name = "K")]
    pub temperature: Option<f64>,

    /// Structure whose chemical potential is the minuend.
    #[arg(long, value_name = "TAG")]
    pub structure_a: Option<String>,

    /// Structure whose chemical potential is the subtrahend.
    #[arg(long, value_name = "TAG")]
    pub structure_b: Option<String>,

    /// Replace the built-in species table (lines of `name sigma eps/k`).
    #[arg(long, value_name = "PATH")]
    pub gas_table: Option<PathBuf>,

    /// Replace the built-in crystal dataset with a TOML file.
    #[arg(long, value_name = "PATH")]
    pub crystals: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S conditions.temperature-k=280
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Matrix and flat forms, absent cells as null.
    #[default]
    Json,
    /// One row per valid grid point.
    Csv,
}

/// Arguments for the `surface` subcommand.
#[derive(Args, Debug)]
pub struct SurfaceArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of grid intervals along each edge of the composition triangle.
    #[arg(short = 'n', long, value_name = "INT")]
    pub resolution: Option<usize>,

    /// Output file; the surface is written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Indent JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `langmuir` subcommand.
#[derive(Args, Debug)]
pub struct LangmuirArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for the `species` subcommand.
#[derive(Args, Debug)]
pub struct SpeciesArgs {
    /// Replace the built-in species table (lines of `name sigma eps/k`).
    #[arg(long, value_name = "PATH")]
    pub gas_table: Option<PathBuf>,
}
