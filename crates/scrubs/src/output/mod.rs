//! Output writers for the cleaned table.

mod writer;

pub use writer::{write_csv, write_xlsx};
