//! Chunk planning
//!
//! Every chunk but the last gets `total / workers` lines; the last chunk
//! absorbs the remainder. With fewer lines than workers the early chunks are
//! empty and the last one holds the whole input.

use crate::error::LogstatError;

use super::types::ChunkRange;

/// Plan `num_workers` contiguous ranges covering `[0, total_lines)` exactly once
pub fn plan_chunks(
    total_lines: usize,
    num_workers: usize,
) -> Result<Vec<ChunkRange>, LogstatError> {
    if num_workers == 0 {
        return Err(LogstatError::InvalidWorkerCount(num_workers));
    }

    let chunk_size = total_lines / num_workers;
    let last = num_workers - 1;

    let chunks = (0..num_workers)
        .map(|id| {
            let start = id * chunk_size;
            let end = if id == last {
                total_lines
            } else {
                (id + 1) * chunk_size
            };
            ChunkRange { id, start, end }
        })
        .collect();

    Ok(chunks)
}
