//! Typed failures of the statistics pipeline
//!
//! Parsing never fails, so every variant here is fatal to the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogstatError {
    /// Worker count outside the accepted range (it must be at least one)
    #[error("invalid worker count {0}: at least one worker is required")]
    InvalidWorkerCount(usize),

    /// The input file is missing, unreadable or not valid text
    #[error("cannot read log file '{}'", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("worker {worker_id} panicked while aggregating its chunk")]
    WorkerPanicked { worker_id: usize },

    #[error("worker {worker_id} finished without reporting a result")]
    WorkerDisconnected { worker_id: usize },
}

impl LogstatError {
    /// Configuration problems are usage errors; everything else is a runtime failure
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, LogstatError::InvalidWorkerCount(_))
    }
}
