use anyhow::Result;
use std::io::{self, Write};
use std::process;

/// Standard Unix exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidUsage = 2,
    SignalPipe = 141, // 128 + SIGPIPE (13)
}

impl ExitCode {
    pub fn exit(self) -> ! {
        process::exit(self as i32)
    }
}

/// Safe wrapper for writing to stdout that handles broken pipes and other I/O errors
pub struct SafeStdout {
    stdout: io::Stdout,
}

impl SafeStdout {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Write a line to stdout, exiting quietly on a broken pipe
    pub fn writeln(&mut self, data: &str) -> Result<()> {
        match writeln!(self.stdout, "{}", data) {
            Ok(()) => Ok(()),
            Err(e) if is_broken_pipe(&e) => ExitCode::SignalPipe.exit(),
            Err(e) => Err(anyhow::anyhow!("Failed to write to stdout: {}", e)),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        match self.stdout.flush() {
            Ok(()) => Ok(()),
            Err(e) if is_broken_pipe(&e) => ExitCode::SignalPipe.exit(),
            Err(e) => Err(anyhow::anyhow!("Failed to flush stdout: {}", e)),
        }
    }
}

impl Default for SafeStdout {
    fn default() -> Self {
        Self::new()
    }
}

/// Safe wrapper for writing to stderr
pub struct SafeStderr {
    stderr: io::Stderr,
}

impl SafeStderr {
    pub fn new() -> Self {
        Self {
            stderr: io::stderr(),
        }
    }

    /// Write a line to stderr; if even that fails there is nothing left to report to
    pub fn writeln(&mut self, data: &str) {
        if writeln!(self.stderr, "{}", data).is_err() {
            ExitCode::GeneralError.exit();
        }
    }
}

impl Default for SafeStderr {
    fn default() -> Self {
        Self::new()
    }
}

/// Cross-platform broken pipe detection
fn is_broken_pipe(e: &io::Error) -> bool {
    #[cfg(unix)]
    {
        e.kind() == io::ErrorKind::BrokenPipe
    }
    #[cfg(windows)]
    {
        e.kind() == io::ErrorKind::BrokenPipe
            || e.raw_os_error() == Some(232) // ERROR_NO_DATA "The pipe is being closed"
            || e.raw_os_error() == Some(109) // ERROR_BROKEN_PIPE "The pipe has been ended"
    }
}
