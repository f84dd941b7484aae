use clap::ValueEnum;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::colors::ColorScheme;
use crate::error::LogstatError;
use crate::parallel::{ParallelConfig, DEFAULT_WORKERS};

/// Log file read when no path is given
pub const DEFAULT_INPUT_FILE: &str = "sample.log";

/// Main configuration struct for logstat
#[derive(Debug, Clone)]
pub struct LogstatConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub performance: PerformanceConfig,
}

/// Input configuration
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub file: PathBuf,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the processing summary line on stderr
    pub stats: bool,
    pub verbose: u8,
    pub quiet: bool,
    pub color: ColorMode,
    pub no_emoji: bool,
}

/// Performance configuration
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    pub threads: usize,
}

/// Report format
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Color output mode
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl LogstatConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input: InputConfig {
                file: cli.file.clone(),
            },
            output: OutputConfig {
                format: cli.output_format.clone(),
                stats: cli.stats,
                verbose: cli.verbose,
                quiet: cli.quiet,
                color: cli.color.clone(),
                no_emoji: cli.no_emoji,
            },
            performance: PerformanceConfig {
                threads: cli.threads,
            },
        }
    }

    /// Reject unusable settings before any file is touched
    pub fn validate(&self) -> Result<(), LogstatError> {
        if self.performance.threads == 0 {
            return Err(LogstatError::InvalidWorkerCount(self.performance.threads));
        }
        Ok(())
    }

    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig {
            num_workers: self.performance.threads,
        }
    }

    /// Informational diagnostics are shown unless --quiet was given
    pub fn should_report_info(&self) -> bool {
        !self.output.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.output.verbose > 0 && !self.output.quiet
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::new(crate::tty::should_use_colors_with_mode(&self.output.color))
    }

    pub fn format_error_message(&self, message: &str) -> String {
        let colors = self.color_scheme();
        if self.output.no_emoji {
            format!("{}logstat: Error: {}{}", colors.error, message, colors.reset)
        } else {
            format!("{}⚠️  {}{}", colors.error, message, colors.reset)
        }
    }

    pub fn format_info_message(&self, message: &str) -> String {
        let colors = self.color_scheme();
        let prefix = if self.output.no_emoji { "logstat:" } else { "🔹" };
        format!("{}{} {}{}", colors.info, prefix, message, colors.reset)
    }

    pub fn format_stats_message(&self, message: &str) -> String {
        let colors = self.color_scheme();
        format!("{}{}{}", colors.stats, message, colors.reset)
    }
}

impl Default for LogstatConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                file: PathBuf::from(DEFAULT_INPUT_FILE),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                stats: false,
                verbose: 0,
                quiet: false,
                color: ColorMode::Auto,
                no_emoji: false,
            },
            performance: PerformanceConfig {
                threads: DEFAULT_WORKERS,
            },
        }
    }
}
