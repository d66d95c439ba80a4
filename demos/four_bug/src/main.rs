//! four_bug — the classic symmetric pursuit.
//!
//! Four bugs, each chasing the next at the same speed.  Started on the
//! corners of a square they spiral into its centre.
//!
//! ```text
//! four_bug                                   # prompt, square defaults
//! four_bug --source args --pos "0 0" --pos "0 20" --pos "20 20" --pos "20 0"
//! four_bug --source file --file demos/four_bug/data/square.csv
//! four_bug --source scatter --seed 7 --output output/four_bug
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;

use nb_core::Point;
use nb_sim::SimBuilder;

use cli::Args;

const BUG_COUNT: usize = 4;

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 20.0),
        Point::new(20.0, 20.0),
        Point::new(20.0, 0.0),
    ]
}

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Args::parse();

    let mut source = cli::build_source(&args, square(), "Enter initial positions for 4 bugs")?;
    let Some(positions) = cli::acquire(source.as_mut())? else {
        println!("No positions entered; nothing to simulate.");
        return Ok(());
    };

    let builder = SimBuilder::new(args.sim_config(BUG_COUNT), positions);
    cli::simulate(&args, builder, "4-bug problem")?;
    Ok(())
}
