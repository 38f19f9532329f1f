use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "SLFsim Developers",
    version,
    about = "SLFsim CLI - Simulate separated-local-field (SLF) NMR spectra from Sparky peak lists and build peak lists from per-residue shift/coupling tables.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for rendering.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate an SLF spectrum from a peak list and write it as a Sparky UCSF file.
    Simulate(SimulateArgs),
    /// Convert a residue table (name, id, shift, coupling) into a Sparky peak list.
    Convert(ConvertArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    // --- Core Arguments ---
    /// Path to the input peak list (Assignment, w1 = coupling, w2 = 15N shift).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output spectrum (Sparky UCSF).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- 15N (chemical-shift) dimension ---
    /// Spectral width of the 15N dimension, in Hz.
    #[arg(long, value_name = "HZ")]
    pub sw_n: Option<f64>,

    /// Number of points along the 15N dimension.
    #[arg(long, value_name = "INT")]
    pub size_n: Option<usize>,

    /// Linewidth (FWHM) along the 15N dimension, in Hz.
    #[arg(long, value_name = "HZ")]
    pub lw_n: Option<f64>,

    /// 15N observe frequency, in MHz.
    #[arg(long, value_name = "MHZ")]
    pub freq_n: Option<f64>,

    /// 15N carrier offset, in Hz.
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    pub carr_n: Option<f64>,

    // --- Dipolar (NH) dimension ---
    /// Spectral width of the dipolar dimension, in Hz.
    #[arg(long, value_name = "HZ")]
    pub sw_nh: Option<f64>,

    /// Number of points along the dipolar dimension.
    #[arg(long, value_name = "INT")]
    pub size_nh: Option<usize>,

    /// Linewidth (FWHM) along the dipolar dimension, in Hz.
    #[arg(long, value_name = "HZ")]
    pub lw_nh: Option<f64>,

    // --- Lineshape ---
    /// Peak height.
    #[arg(long, value_name = "FLOAT")]
    pub amplitude: Option<f64>,

    /// Evaluate every peak over the whole grid instead of a window around its centre.
    #[arg(long)]
    pub full_grid: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S dipolar.observe-frequency=950
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input residue table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output peak list.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Write every dipolar coupling as a negative value.
    #[arg(short, long)]
    pub negative: bool,

    /// Add OFFSET to every residue number.
    #[arg(short, long, value_name = "OFFSET", allow_negative_numbers = true)]
    pub renumber: Option<i64>,
}
