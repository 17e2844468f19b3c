//! The cleaning pipeline stages, in execution order.
//!
//! Each stage takes the table by `&mut` and records what it did into the
//! [`CleanReport`](crate::report::CleanReport). Per-cell parse failures are
//! recovered by substitution, never propagated; only the final projection
//! can fail.

pub mod headers;
pub mod impute;
pub mod dates;
pub mod numeric;
pub mod dedup;
pub mod derive;
pub mod text;
pub mod finalize;
