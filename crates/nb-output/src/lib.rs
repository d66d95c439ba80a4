//! `nb-output` — consumers of a finished pursuit trajectory.
//!
//! Nothing here computes; every type reads the immutable
//! [`nb_sim::Trajectory`] (or the rows handed to a `SimObserver`).
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`scrubber`]  | `Scrubber::seek`, `Frame`, `Viewport`                  |
//! | [`plot`]      | `AsciiPlot` — terminal rendering of a frame            |
//! | [`csv`]       | `CsvWriter` — `trajectory.csv`                         |
//! | [`observer`]  | `TrajectoryOutputObserver`, `export_trajectory`        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use nb_output::{AsciiPlot, Scrubber, Viewport, DEFAULT_MARGIN};
//!
//! let trajectory = nb_sim::run(positions, &config)?;
//! let viewport = Viewport::fit(trajectory.initial(), DEFAULT_MARGIN);
//! let mut scrubber = Scrubber::new(&trajectory);
//! let frame = scrubber.seek(Step(250));
//! println!("{}", AsciiPlot::default().render(&frame, &viewport));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod plot;
pub mod row;
pub mod scrubber;
pub mod writer;


pub use crate::csv::{CsvWriter, TRAJECTORY_FILE};
pub use error::{OutputError, OutputResult};
pub use observer::{TrajectoryOutputObserver, export_trajectory};
pub use plot::AsciiPlot;
pub use row::PositionRow;
pub use scrubber::{DEFAULT_MARGIN, Frame, Scrubber, Viewport};
pub use writer::TrajectoryWriter;
