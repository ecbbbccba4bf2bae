//! eyeadapt - HDR eye adaptation driver
//!
//! Runs the exposure adapter outside a renderer: single steps, replay of
//! recorded frame logs, and synthetic step responses.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "eyeadapt")]
#[command(author, version, about = "HDR eye adaptation driver")]
#[command(long_about = "
Drives the automatic exposure adapter used by HDR renderers.

Examples:
  eyeadapt once --rgb 1,1,1 --dt 0.5              # One step from exposure 1.0
  eyeadapt once --current 2 --next 3 --rgb 0,0,0 --dt 0.1
  eyeadapt simulate frames.yaml                   # Replay a recorded frame log
  eyeadapt simulate frames.yaml --json --clamp-dt
  eyeadapt step --from 0.18 --to 8 --at 30        # Walk out of a tunnel
  eyeadapt -c adapt.yaml --speed 3 step --frames 600
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Adaptation parameters file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single adaptation step from an explicit state
    Once(OnceArgs),

    /// Replay a YAML frame log through the adapter
    #[command(visible_alias = "sim")]
    Simulate(SimulateArgs),

    /// Step response: scene luminance jumps from one level to another
    Step(StepArgs),
}

/// Overrides applied on top of the config file.
#[derive(Args, Default)]
struct ParamArgs {
    /// Target luminance
    #[arg(long, global = true)]
    target: Option<f32>,

    /// Adjustment speed
    #[arg(long, global = true)]
    speed: Option<f32>,

    /// Minimum exposure
    #[arg(long, global = true)]
    min: Option<f32>,

    /// Maximum exposure
    #[arg(long, global = true)]
    max: Option<f32>,

    /// Luminance weights
    #[arg(long, global = true, value_enum)]
    luma: Option<LumaArg>,

    /// Black frame policy
    #[arg(long, global = true, value_enum)]
    black_frame: Option<BlackFrameArg>,

    /// Let dt * speed above 1 overshoot the target
    #[arg(long, global = true)]
    extrapolate: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LumaArg {
    Rec601,
    Rec709,
}

#[derive(Clone, Copy, ValueEnum)]
enum BlackFrameArg {
    MaxExposure,
    Hold,
}

#[derive(Args)]
struct OnceArgs {
    /// Exposure read this frame before rotation
    #[arg(long, default_value = "1.0")]
    current: f32,

    /// Exposure produced by the previous frame
    #[arg(long, default_value = "1.0")]
    next: f32,

    /// Frame sample as r,g,b
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    rgb: Vec<f32>,

    /// Seconds since the previous frame
    #[arg(long)]
    dt: f32,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SimulateArgs {
    /// Frame log: YAML list of `{ rgb: [r, g, b], dt: seconds }`
    input: PathBuf,

    /// Initial exposure for both slots
    #[arg(long, default_value = "1.0")]
    initial: f32,

    /// Clamp frame times to the adapter's accepted range
    #[arg(long)]
    clamp_dt: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StepArgs {
    /// Scene luminance before the step
    #[arg(long, default_value = "0.18")]
    from: f32,

    /// Scene luminance after the step
    #[arg(long, default_value = "4.0")]
    to: f32,

    /// Frame at which the scene changes
    #[arg(long, default_value = "30")]
    at: u64,

    /// Number of frames to run
    #[arg(long, default_value = "240")]
    frames: u64,

    /// Frame rate
    #[arg(long, default_value = "60")]
    fps: f32,

    /// Print every Nth frame
    #[arg(long, default_value = "10")]
    every: u64,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the tracing subscriber; keep the guard alive until exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let name = path
                .file_name()
                .with_context(|| format!("Log path has no file name: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let params = commands::load_params(cli.config.as_deref(), &cli.params)?;

    match cli.command {
        Commands::Once(args) => commands::once::run(args, &params),
        Commands::Simulate(args) => commands::simulate::run(args, &params),
        Commands::Step(args) => commands::step::run(args, &params),
    }
}
