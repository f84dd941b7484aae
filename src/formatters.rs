use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::OutputFormat;
use crate::stats::FinalStats;

/// Render a final statistics record for stdout
pub trait ReportFormatter: Send + Sync {
    fn format(&self, stats: &FinalStats) -> String;
}

pub fn create_formatter(format: &OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// Render status counts as `{200=2, 500=1}`, keys ascending
pub fn format_status_codes(counts: &BTreeMap<String, usize>) -> String {
    let pairs: Vec<String> = counts
        .iter()
        .map(|(status, count)| format!("{}={}", status, count))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

// Fixed five-line report
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, stats: &FinalStats) -> String {
        [
            format!("Errors: {}", stats.error_count),
            format!("Warnings: {}", stats.warning_count),
            format!("Unique IPs: {}", stats.unique_address_count()),
            format!(
                "Status Codes: {}",
                format_status_codes(&stats.status_code_counts)
            ),
            format!("Processing Time (ms): {}", stats.elapsed_ms()),
        ]
        .join("\n")
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    errors: usize,
    warnings: usize,
    unique_ips: usize,
    status_codes: &'a BTreeMap<String, usize>,
    processing_time_ms: u64,
}

// Single-object JSON report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, stats: &FinalStats) -> String {
        let report = JsonReport {
            errors: stats.error_count,
            warnings: stats.warning_count,
            unique_ips: stats.unique_address_count(),
            status_codes: &stats.status_code_counts,
            processing_time_ms: u64::try_from(stats.elapsed_ms()).unwrap_or(u64::MAX),
        };

        serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_stats() -> FinalStats {
        let mut stats = FinalStats {
            error_count: 1,
            warning_count: 1,
            elapsed: Duration::from_millis(12),
            ..Default::default()
        };
        stats.unique_addresses.insert("10.0.0.1".to_string());
        stats.unique_addresses.insert("10.0.0.2".to_string());
        stats.status_code_counts.insert("500".to_string(), 1);
        stats.status_code_counts.insert("200".to_string(), 2);
        stats
    }

    #[test]
    fn test_status_code_rendering() {
        let stats = sample_stats();
        assert_eq!(format_status_codes(&stats.status_code_counts), "{200=2, 500=1}");
        assert_eq!(format_status_codes(&BTreeMap::new()), "{}");
    }

    #[test]
    fn test_text_report_layout() {
        let output = TextFormatter::new().format(&sample_stats());
        assert_eq!(
            output,
            "Errors: 1\nWarnings: 1\nUnique IPs: 2\nStatus Codes: {200=2, 500=1}\nProcessing Time (ms): 12"
        );
    }

    #[test]
    fn test_json_report() {
        let output = JsonFormatter::new().format(&sample_stats());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["errors"], 1);
        assert_eq!(parsed["warnings"], 1);
        assert_eq!(parsed["unique_ips"], 2);
        assert_eq!(parsed["status_codes"]["200"], 2);
        assert_eq!(parsed["status_codes"]["500"], 1);
        assert_eq!(parsed["processing_time_ms"], 12);
    }

    #[test]
    fn test_create_formatter_dispatch() {
        let stats = FinalStats::default();
        assert!(create_formatter(&OutputFormat::Text)
            .format(&stats)
            .starts_with("Errors: 0"));
        assert!(create_formatter(&OutputFormat::Json)
            .format(&stats)
            .starts_with('{'));
    }
}
