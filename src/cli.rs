// Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ColorMode, OutputFormat, DEFAULT_INPUT_FILE};
use crate::parallel::DEFAULT_WORKERS;

#[derive(Parser, Debug)]
#[command(name = "logstat")]
#[command(about = "Parallel log file statistics")]
#[command(
    long_about = "Parallel log file statistics\n\nCounts [ERROR] and [WARNING] lines, unique client addresses (first field)\nand status codes (last field). The file is split into one contiguous chunk\nper worker and the partial results are merged.\n\nEXAMPLES:\n  logstat access.log\n  logstat -t 8 --stats access.log.gz\n  logstat -F json access.log"
)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Log file to analyse (gzip and zstd compressed files are detected automatically)
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    pub file: PathBuf,

    /// Number of worker threads, one chunk each
    #[arg(short = 't', long = "threads", default_value_t = DEFAULT_WORKERS, help_heading = "Performance Options")]
    pub threads: usize,

    /// Report format
    #[arg(short = 'F', long = "output-format", value_enum, default_value = "text", help_heading = "Output Options")]
    pub output_format: OutputFormat,

    /// Print a processing summary to stderr
    #[arg(short = 's', long = "stats", help_heading = "Output Options")]
    pub stats: bool,

    /// Colorize stderr diagnostics
    #[arg(long = "color", value_enum, default_value = "auto", help_heading = "Display Options")]
    pub color: ColorMode,

    /// Use plain text prefixes instead of emoji in diagnostics
    #[arg(long = "no-emoji", help_heading = "Display Options")]
    pub no_emoji: bool,

    /// Show diagnostic messages (repeat for chunk details)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, help_heading = "Error Handling")]
    pub verbose: u8,

    /// Suppress diagnostics; errors are still reported
    #[arg(short = 'q', long = "quiet", help_heading = "Error Handling")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "logstat", "-t", "8", "-F", "json", "-s", "-vv", "--no-emoji", "--color", "never",
            "access.log",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("access.log"));
        assert_eq!(cli.threads, 8);
        assert_eq!(cli.output_format, OutputFormat::Json);
        assert!(cli.stats);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_emoji);
        assert_eq!(cli.color, ColorMode::Never);
    }

    #[test]
    fn test_negative_threads_rejected() {
        assert!(Cli::try_parse_from(["logstat", "--threads", "-1"]).is_err());
    }
}
