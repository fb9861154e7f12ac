//! Batch summarizers and certification tables for bound-run logs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod table;
