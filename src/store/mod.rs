//! Finished verdict tables: queries, export and snapshots.

pub mod export;
pub mod results;

pub use export::{write_csv, ExportRow, HEADER};
pub use results::ResultStore;
