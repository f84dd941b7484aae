//! Parallel processing module for logstat
//!
//! Splits the input lines into contiguous chunks, aggregates every chunk on
//! its own thread and merges the partial results into one summary.
//!
//! # Module Structure
//!
//! - `types`: Configuration, chunk ranges and worker messages
//! - `partition`: Contiguous chunk planning
//! - `worker`: Chunk aggregation and the worker thread body
//! - `reducer`: Deterministic merge of partial statistics
//! - `processor`: Main ParallelProcessor orchestration

mod partition;
mod processor;
mod reducer;
mod types;
mod worker;

// Re-export public types
pub use partition::plan_chunks;
pub use processor::ParallelProcessor;
pub use reducer::merge_partials;
pub use types::{ChunkRange, ParallelConfig, DEFAULT_WORKERS};
pub use worker::aggregate_chunk;
