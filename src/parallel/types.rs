//! Type definitions for parallel processing
//!
//! Contains configuration, chunk descriptors and worker result messages.

use std::ops::Range;

use crate::stats::PartialStats;

/// Worker count used when none is configured
pub const DEFAULT_WORKERS: usize = 4;

/// Configuration for parallel processing
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: DEFAULT_WORKERS,
        }
    }
}

/// A contiguous, half-open range of line indices assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub id: usize,
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Result of aggregating one chunk, tagged so the collector can restore order
#[derive(Debug)]
pub(crate) struct ChunkResult {
    pub chunk_id: usize,
    pub stats: PartialStats,
}
