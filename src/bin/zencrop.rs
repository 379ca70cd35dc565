use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use zencrop::BmpPermissiveness;

#[derive(Parser)]
#[command(name = "zencrop")]
#[command(about = "Crop an 8-bit BMP to the smallest rectangle holding its content", long_about = None)]
#[command(version)]
struct Args {
    /// Input 8-bit BMP file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output BMP file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// How strictly to validate the input headers
    #[arg(long, value_enum, default_value_t = StrictnessArg::Standard)]
    strictness: StrictnessArg,

    /// Verbose output
    #[arg(short, long, default_value_t)]
    verbose: bool,

    /// Quiet mode (no progress messages)
    #[arg(short, long, default_value_t)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StrictnessArg {
    Strict,
    Standard,
    Permissive,
}

impl From<StrictnessArg> for BmpPermissiveness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Strict => BmpPermissiveness::Strict,
            StrictnessArg::Standard => BmpPermissiveness::Standard,
            StrictnessArg::Permissive => BmpPermissiveness::Permissive,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors go to stderr; --help and --version to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    setup_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let image = zencrop::load_with(&args.input, args.strictness.into())
        .with_context(|| format!("Failed to read `{}`", args.input.display()))?;
    log::info!("File read");

    let cropped = image.crop().context("Failed to crop image")?;
    log::info!("Image cropped");

    zencrop::save(&cropped, &args.output)
        .with_context(|| format!("Failed to write `{}`", args.output.display()))?;
    log::info!("File created");

    if !args.quiet {
        println!("Cropped image saved as: {}", args.output.display());
    }
    Ok(())
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
