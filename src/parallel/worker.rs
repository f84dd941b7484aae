//! Worker side of the parallel pipeline
//!
//! Each worker owns one chunk, builds its own `PartialStats` with no shared
//! state and reports it over the result channel.

use crossbeam_channel::Sender;

use crate::error::LogstatError;
use crate::parsers::parse_line;
use crate::stats::PartialStats;

use super::types::{ChunkRange, ChunkResult};

/// Aggregate a contiguous slice of lines into partial statistics
pub fn aggregate_chunk<S: AsRef<str>>(lines: &[S]) -> PartialStats {
    let mut stats = PartialStats::new();
    for line in lines {
        stats.record(&parse_line(line.as_ref()));
    }
    stats
}

/// Worker thread: aggregates its chunk and sends the result to the collector
pub(crate) fn worker_thread<S: AsRef<str>>(
    chunk: ChunkRange,
    lines: &[S],
    result_sender: Sender<ChunkResult>,
) -> Result<(), LogstatError> {
    let stats = aggregate_chunk(lines);

    result_sender
        .send(ChunkResult {
            chunk_id: chunk.id,
            stats,
        })
        .map_err(|_| LogstatError::WorkerDisconnected {
            worker_id: chunk.id,
        })
}
