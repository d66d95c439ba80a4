//! `nb-sim` — discrete-time pursuit integrator for the n-bug problem.
//!
//! # Step loop
//!
//! ```text
//! row 0 = initial positions
//! for k in 1..config.steps:
//!   for every agent j (all from row k-1, written into row k):
//!     target    = row[k-1][(j + 1) mod n]
//!     row[k][j] = row[k-1][j] + speed[j] · dt · unit(target − row[k-1][j])
//! ```
//!
//! A zero-length direction stalls the agent for that step instead of
//! dividing by zero.  Configuration errors (bad `dt`, negative speed, zero
//! steps, non-finite start) are rejected by [`SimBuilder::build`] before any
//! buffer is allocated.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Advances the agents of each step on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nb_core::{Point, SimConfig};
//!
//! let square = vec![
//!     Point::new(0.0, 0.0), Point::new(0.0, 20.0),
//!     Point::new(20.0, 20.0), Point::new(20.0, 0.0),
//! ];
//! let trajectory = nb_sim::run(square, &SimConfig::default())?;
//! assert!(trajectory.spread(trajectory.final_step()).unwrap() < 1.0);
//! ```

pub mod builder;
pub mod error;
pub mod integrator;
pub mod observer;
pub mod sim;
pub mod trajectory;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::{Sim, run};
pub use trajectory::{Trajectory, formation_spread};
