//! Command-line plumbing shared by the `four_bug` and `fixed_prey` binaries.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use nb_core::{DEFAULT_DT, DEFAULT_STEPS, Point, SimConfig, Step};
use nb_output::{AsciiPlot, CsvWriter, DEFAULT_MARGIN, Scrubber, Viewport, export_trajectory};
use nb_sim::{SimBuilder, TracingObserver, Trajectory};
use nb_source::{
    ArgsSource, CsvFileSource, PositionSource, PromptSource, ScatterSource, SourceError,
};

/// Spread below which the formation counts as captured in the summary.
const CAPTURE_EPS: f64 = 1.0;

/// Steps between progress lines at `RUST_LOG=debug`.
const LOG_INTERVAL: usize = 100;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SourceKind {
    /// Ask for each bug on the terminal
    #[default]
    Prompt,
    /// Take one `--pos "x y"` per bug
    Args,
    /// Read a CSV file with columns agent_id,x,y
    File,
    /// Seeded random formation
    Scatter,
}

#[derive(Parser, Debug)]
pub struct Args {
    /// Where the initial positions come from.
    #[arg(long, value_enum, default_value_t = SourceKind::Prompt)]
    pub source: SourceKind,

    /// Initial position "x y" of one bug (repeat per bug; with --source args).
    #[arg(long = "pos", value_name = "X Y", allow_hyphen_values = true)]
    pub positions: Vec<String>,

    /// CSV file of initial positions (with --source file).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// RNG seed (with --source scatter).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Half-width of the scatter square (with --source scatter).
    #[arg(long, default_value_t = 10.0)]
    pub extent: f64,

    /// Rows in the trajectory buffer, including the initial one.
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    pub steps: usize,

    /// Time increment per step.
    #[arg(long, default_value_t = DEFAULT_DT)]
    pub dt: f64,

    /// Speed of every moving bug.
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Step to plot (defaults to the final step; clamped to the run).
    #[arg(long)]
    pub frame: Option<usize>,

    /// Directory to write trajectory.csv into.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Run configuration for `n` bugs at the requested speed.
    pub fn sim_config(&self, n: usize) -> SimConfig {
        SimConfig::uniform(n, self.speed)
            .with_steps(self.steps)
            .with_dt(self.dt)
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Source of the `defaults.len()` user-placed bugs.
pub fn build_source(
    args:     &Args,
    defaults: Vec<Point>,
    title:    &str,
) -> Result<Box<dyn PositionSource>> {
    let n = defaults.len();
    let source: Box<dyn PositionSource> = match args.source {
        SourceKind::Prompt => Box::new(PromptSource::stdio(defaults).title(title)),
        SourceKind::Args => Box::new(ArgsSource::new(args.positions.iter().cloned(), n)),
        SourceKind::File => match &args.file {
            Some(path) => Box::new(CsvFileSource::new(path, n)),
            None => bail!("--source file needs --file <PATH>"),
        },
        SourceKind::Scatter => Box::new(ScatterSource::new(n, args.seed, args.extent)),
    };
    Ok(source)
}

/// Acquire positions; `None` if the user cancelled the prompt.
pub fn acquire(source: &mut dyn PositionSource) -> Result<Option<Vec<Point>>> {
    match source.acquire() {
        Ok(positions) => Ok(Some(positions)),
        Err(SourceError::Cancelled) => Ok(None),
        Err(e) => bail!("invalid initial positions: {e}"),
    }
}

// ── Run + report ──────────────────────────────────────────────────────────────

/// Validate, integrate, and print the summary, plot and optional CSV.
pub fn simulate(args: &Args, builder: SimBuilder, heading: &str) -> Result<Trajectory> {
    let sim = builder.build()?;
    let config = sim.config().clone();

    println!("=== {heading} ===");
    println!(
        "Bugs: {}  |  Steps: {}  |  dt: {}  |  Speeds: {:?}",
        sim.initial_positions().len(),
        config.steps,
        config.dt,
        config.speeds
    );
    println!();

    let t0 = Instant::now();
    let trajectory = sim.run(&mut TracingObserver::new(LOG_INTERVAL));
    println!("Simulation complete in {:.3} ms", t0.elapsed().as_secs_f64() * 1e3);

    match trajectory.first_step_within(CAPTURE_EPS) {
        Some(step) => println!(
            "Bugs within {CAPTURE_EPS} of each other from {step} (t = {:.2})",
            trajectory.time_at(step)
        ),
        None => println!("Bugs never came within {CAPTURE_EPS} of each other"),
    }
    println!();

    print_positions(&trajectory);
    print_plot(args, &trajectory);

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)?;
        let mut writer = CsvWriter::new(dir)?;
        export_trajectory(&trajectory, &mut writer)?;
        println!("Trajectory written to {}", dir.join(nb_output::TRAJECTORY_FILE).display());
    }

    Ok(trajectory)
}

fn print_positions(trajectory: &Trajectory) {
    println!("{:<6} {:<22} {:<22}", "Bug", "Start", "Final");
    println!("{}", "-".repeat(50));
    for (i, (start, end)) in trajectory
        .initial()
        .iter()
        .zip(trajectory.last())
        .enumerate()
    {
        println!("{:<6} {:<22} {:<22}", i + 1, start.to_string(), end.to_string());
    }
    println!();
}

fn print_plot(args: &Args, trajectory: &Trajectory) {
    let viewport = Viewport::fit(trajectory.initial(), DEFAULT_MARGIN);
    let mut scrubber = Scrubber::new(trajectory);
    let step = args.frame.map_or(scrubber.max_step(), Step);
    let frame = scrubber.seek(step);
    println!("{}", AsciiPlot::default().render(&frame, &viewport));
}
