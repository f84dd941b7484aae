use anyhow::Result;
use clap::Parser;

use logstat::cli::Cli;
use logstat::config::LogstatConfig;
use logstat::decompression::Compression;
use logstat::error::LogstatError;
use logstat::formatters::create_formatter;
use logstat::parallel::ParallelProcessor;
use logstat::platform::{ExitCode, SafeStderr, SafeStdout};
use logstat::readers::read_log_file;

fn main() -> Result<()> {
    let mut stderr = SafeStderr::new();

    let cli = Cli::parse();
    let config = LogstatConfig::from_cli(&cli);

    // Configuration errors must surface before the input file is opened
    if let Err(e) = config.validate() {
        stderr.writeln(&config.format_error_message(&e.to_string()));
        ExitCode::InvalidUsage.exit();
    }

    if let Err(e) = run(&config, &mut stderr) {
        stderr.writeln(&config.format_error_message(&format!("{:#}", e)));
        exit_code_for(&e).exit();
    }

    Ok(())
}

fn run(config: &LogstatConfig, stderr: &mut SafeStderr) -> Result<()> {
    let input = read_log_file(&config.input.file)?;

    if config.is_verbose() {
        let compression = match input.compression {
            Compression::Gzip => " (gzip)",
            Compression::Zstd => " (zstd)",
            Compression::Plain => "",
        };
        stderr.writeln(&config.format_info_message(&format!(
            "read {} lines from '{}'{}",
            input.lines.len(),
            config.input.file.display(),
            compression
        )));
    }

    let processor = ParallelProcessor::new(config.parallel_config());

    if config.is_verbose() && config.output.verbose > 1 {
        for chunk in processor.plan(input.lines.len())? {
            stderr.writeln(&config.format_info_message(&format!(
                "worker {}: lines {}..{} ({} lines)",
                chunk.id,
                chunk.start,
                chunk.end,
                chunk.len()
            )));
        }
    }

    let stats = processor.process(&input.lines)?;

    let formatter = create_formatter(&config.output.format);
    let mut stdout = SafeStdout::new();
    stdout.writeln(&formatter.format(&stats))?;
    stdout.flush()?;

    if config.output.stats && config.should_report_info() {
        stderr.writeln(&config.format_stats_message(
            &stats.format_stats(processor.num_workers()),
        ));
    }

    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<LogstatError>() {
        Some(e) if e.is_invalid_configuration() => ExitCode::InvalidUsage,
        _ => ExitCode::GeneralError,
    }
}
