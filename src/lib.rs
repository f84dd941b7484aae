// Core library for the logstat log statistics tool

pub mod cli;
pub mod colors;
pub mod config;
pub mod decompression;
pub mod error;
pub mod formatters;
pub mod parallel;
pub mod parsers;
pub mod platform;
pub mod readers;
pub mod stats;
pub mod tty;

pub use config::LogstatConfig;
pub use error::LogstatError;
pub use parallel::{ParallelConfig, ParallelProcessor};
pub use stats::{FinalStats, PartialStats};

/// Aggregate in-memory lines with the given worker count
///
/// Convenience wrapper around [`ParallelProcessor`] for callers that do not
/// need a reusable processor.
pub fn analyze_lines<S>(lines: &[S], num_workers: usize) -> Result<FinalStats, LogstatError>
where
    S: AsRef<str> + Sync,
{
    ParallelProcessor::new(ParallelConfig { num_workers }).process(lines)
}
