//! Main parallel processor
//!
//! Contains the ParallelProcessor struct that fans chunks out to scoped
//! worker threads and fans the partial results back in.

use crossbeam_channel::bounded;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::LogstatError;
use crate::stats::{FinalStats, PartialStats};

use super::partition::plan_chunks;
use super::reducer::merge_partials;
use super::types::{ChunkRange, ParallelConfig};
use super::worker::worker_thread;

/// Main parallel processor
pub struct ParallelProcessor {
    config: ParallelConfig,
}

impl ParallelProcessor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    pub fn num_workers(&self) -> usize {
        self.config.num_workers
    }

    /// Chunk layout this processor would use for `total_lines` lines
    pub fn plan(&self, total_lines: usize) -> Result<Vec<ChunkRange>, LogstatError> {
        plan_chunks(total_lines, self.config.num_workers)
    }

    /// Aggregate all lines, one worker per chunk, and merge the results
    ///
    /// Timing starts just before partitioning and stops once the last partial
    /// result has been collected.
    pub fn process<S>(&self, lines: &[S]) -> Result<FinalStats, LogstatError>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let chunks = self.plan(lines.len())?;
        let (partials, elapsed) = Self::run_workers(lines, &chunks, start)?;
        Ok(merge_partials(partials, elapsed))
    }

    /// Returns partial results in chunk order, whatever order workers finish in
    fn run_workers<S>(
        lines: &[S],
        chunks: &[ChunkRange],
        start: Instant,
    ) -> Result<(Vec<PartialStats>, Duration), LogstatError>
    where
        S: AsRef<str> + Sync,
    {
        let (result_sender, result_receiver) = bounded(chunks.len());

        // The scope joins every worker before returning, including on error paths
        thread::scope(|scope| -> Result<(Vec<PartialStats>, Duration), LogstatError> {
            let mut worker_handles = Vec::with_capacity(chunks.len());

            for chunk in chunks.iter().copied() {
                let result_sender = result_sender.clone();
                let chunk_lines = &lines[chunk.range()];
                let handle = scope.spawn(move || worker_thread(chunk, chunk_lines, result_sender));
                worker_handles.push((chunk.id, handle));
            }

            // Drop the original sender so the receiver ends once all workers are done
            drop(result_sender);

            let mut slots: Vec<Option<PartialStats>> = (0..chunks.len()).map(|_| None).collect();
            for result in result_receiver.iter() {
                slots[result.chunk_id] = Some(result.stats);
            }
            let elapsed = start.elapsed();

            // Join every handle explicitly; an unjoined panicked worker would re-panic the scope
            let mut first_failure = None;
            for (worker_id, handle) in worker_handles {
                let failure = match handle.join() {
                    Ok(Ok(())) => None,
                    Ok(Err(e)) => Some(e),
                    Err(_) => Some(LogstatError::WorkerPanicked { worker_id }),
                };
                if first_failure.is_none() {
                    first_failure = failure;
                }
            }
            if let Some(e) = first_failure {
                return Err(e);
            }

            let partials = slots
                .into_iter()
                .enumerate()
                .map(|(worker_id, slot)| slot.ok_or(LogstatError::WorkerDisconnected { worker_id }))
                .collect::<Result<Vec<_>, _>>()?;

            Ok((partials, elapsed))
        })
    }
}
