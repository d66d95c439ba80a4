//! `nb-source` — initial-position acquisition for the n-bug pursuit simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`source`]   | `PositionSource` trait, `WithFixed` adapter                |
//! | [`parse`]    | `parse_point` — the `"x y"` entry format                   |
//! | [`prompt`]   | `PromptSource` — interactive, re-asks on bad input         |
//! | [`args`]     | `ArgsSource` — one `"x y"` string per agent                |
//! | [`loader`]   | `load_positions_csv`, `load_positions_reader`, `CsvFileSource` |
//! | [`scatter`]  | `ScatterSource` — seeded uniform random formation          |
//! | [`error`]    | `SourceError`, `SourceResult<T>`                           |
//!
//! All validation happens here: a source either returns one finite point per
//! agent or a [`SourceError`] fit to show the user.

pub mod args;
pub mod error;
pub mod loader;
pub mod parse;
pub mod prompt;
pub mod scatter;
pub mod source;

#[cfg(test)]
mod tests;

pub use args::ArgsSource;
pub use error::{SourceError, SourceResult};
pub use loader::{CsvFileSource, load_positions_csv, load_positions_reader};
pub use parse::parse_point;
pub use prompt::PromptSource;
pub use scatter::ScatterSource;
pub use source::{PositionSource, PositionSourceExt, WithFixed};
