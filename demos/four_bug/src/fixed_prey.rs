//! fixed_prey — asymmetric pursuit with a stationary fourth bug.
//!
//! Bugs 1–3 are placed by the user and chase their successors at unit
//! speed; bug 4 is pinned at (18, 2) with speed zero, so bug 3 hunts a
//! stationary target and the chain collapses onto it.

mod cli;

use anyhow::Result;
use clap::Parser;

use nb_core::{AgentId, Point};
use nb_sim::SimBuilder;
use nb_source::PositionSourceExt;

use cli::Args;

const PREY: AgentId = AgentId(3);
const PREY_POSITION: Point = Point::new(18.0, 2.0);

fn pursuer_defaults() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 20.0),
        Point::new(20.0, 20.0),
    ]
}

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Args::parse();

    let pursuers = cli::build_source(&args, pursuer_defaults(), "Enter initial positions for bugs 1-3")?;
    let mut source = pursuers.with_fixed(vec![PREY_POSITION]);
    let Some(positions) = cli::acquire(&mut source)? else {
        println!("No positions entered; nothing to simulate.");
        return Ok(());
    };

    let n = positions.len();
    let builder = SimBuilder::new(args.sim_config(n), positions).stationary(PREY);
    cli::simulate(&args, builder, "4-bug problem with a fixed prey")?;
    Ok(())
}
