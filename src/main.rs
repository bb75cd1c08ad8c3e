//! Generate every icon of an asset directory in one go.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use iconsmith::{run_batch, AssetLayout, FailurePolicy, GeneratorConfig, IconGenerator};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Composite random base-texture samples through shape masks to produce
/// blue, red and traveler icons.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Asset root holding `masks/<color>/`, `bases/blue.png` and
    /// `bases/red.png`. Icons are written to `generated/` below it.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Write icons here instead of `<root>/generated`. Emptied first.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file. Command line flags override its values.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed of the random stream.
    #[arg(long)]
    seed: Option<u64>,

    /// Side length of the generated icons.
    #[arg(long, value_name = "PX")]
    output_size: Option<u32>,

    /// Side length of the texture sample.
    #[arg(long, value_name = "PX")]
    sample_size: Option<u32>,

    /// Skip masks that fail instead of stopping the batch.
    #[arg(long)]
    keep_going: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// More output (repeat for debug output).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn generator_config(&self) -> iconsmith::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(size) = self.output_size {
            config = config.with_output_size(size);
        }
        if let Some(size) = self.sample_size {
            config = config.with_sample_size(size);
        }
        if self.keep_going {
            config = config.with_failure_policy(FailurePolicy::Continue);
        }
        Ok(config)
    }

    fn layout(&self) -> AssetLayout {
        let mut layout = AssetLayout::from_root(&self.root);
        if let Some(output) = &self.output {
            layout.output_dir = output.clone();
        }
        layout
    }
}

fn run(args: &Args) -> iconsmith::Result<bool> {
    let config = args.generator_config()?;
    if args.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(true);
    }

    let layout = args.layout();
    let mut generator = IconGenerator::from_layout(config, &layout)?;
    let report = run_batch(&mut generator, &layout)?;

    log::info!(
        "{} icons written to {}",
        report.generated.len(),
        layout.output_dir.display()
    );
    if !report.is_success() {
        log::error!("{} masks failed", report.failures.len());
    }
    Ok(report.is_success())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    if let Err(e) = TermLogger::init(
        args.log_level(),
        log_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
