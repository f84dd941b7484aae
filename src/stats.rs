use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use crate::parsers::ParsedFields;

/// Statistics for one chunk, built by a single worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialStats {
    pub error_count: usize,
    pub warning_count: usize,
    pub unique_addresses: HashSet<String>,
    pub status_code_counts: BTreeMap<String, usize>,
    pub lines_scanned: usize,
}

impl PartialStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the fields of one parsed line
    pub fn record(&mut self, fields: &ParsedFields<'_>) {
        self.lines_scanned += 1;

        if fields.has_error_marker {
            self.error_count += 1;
        }
        if fields.has_warning_marker {
            self.warning_count += 1;
        }

        if let Some(address) = fields.source_address {
            if !self.unique_addresses.contains(address) {
                self.unique_addresses.insert(address.to_string());
            }
        }

        if let Some(status) = fields.status_code {
            match self.status_code_counts.get_mut(status) {
                Some(count) => *count += 1,
                None => {
                    self.status_code_counts.insert(status.to_string(), 1);
                }
            }
        }
    }
}

/// Run-wide statistics merged from every chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalStats {
    pub error_count: usize,
    pub warning_count: usize,
    pub unique_addresses: HashSet<String>,
    pub status_code_counts: BTreeMap<String, usize>,
    /// Partition plus parallel aggregation time; file reading is excluded
    pub elapsed: Duration,
    pub lines_processed: usize,
    pub chunk_count: usize,
}

impl FinalStats {
    pub fn unique_address_count(&self) -> usize {
        self.unique_addresses.len()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Compare the aggregate values only, ignoring wall-clock timing
    pub fn same_aggregates(&self, other: &FinalStats) -> bool {
        self.error_count == other.error_count
            && self.warning_count == other.warning_count
            && self.unique_addresses == other.unique_addresses
            && self.status_code_counts == other.status_code_counts
            && self.lines_processed == other.lines_processed
    }

    /// One-line processing summary for stderr
    pub fn format_stats(&self, num_workers: usize) -> String {
        let mut output = format!(
            "Lines processed: {} total, {} chunks, {} workers",
            self.lines_processed, self.chunk_count, num_workers
        );

        let processing_time_ms = self.elapsed_ms();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.lines_processed > 0 {
            let lines_per_sec =
                (self.lines_processed as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} lines/s)", lines_per_sec));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_line;

    #[test]
    fn test_record_counts_markers_and_fields() {
        let mut stats = PartialStats::new();
        stats.record(&parse_line("10.0.0.1 GET /x [ERROR] 500"));
        stats.record(&parse_line("10.0.0.1 GET /y [ERROR] [WARNING] 500"));

        assert_eq!(stats.error_count, 2);
        assert_eq!(stats.warning_count, 1);
        assert_eq!(stats.unique_addresses.len(), 1);
        assert_eq!(stats.status_code_counts.get("500"), Some(&2));
        assert_eq!(stats.lines_scanned, 2);
    }

    #[test]
    fn test_record_blank_line_only_scans() {
        let mut stats = PartialStats::new();
        stats.record(&parse_line("   "));

        assert_eq!(stats.lines_scanned, 1);
        assert!(stats.unique_addresses.is_empty());
        assert!(stats.status_code_counts.is_empty());
    }

    #[test]
    fn test_format_stats_without_throughput() {
        let stats = FinalStats {
            lines_processed: 12,
            chunk_count: 4,
            ..Default::default()
        };
        assert_eq!(
            stats.format_stats(4),
            "Lines processed: 12 total, 4 chunks, 4 workers in 0ms"
        );
    }

    #[test]
    fn test_format_stats_with_throughput() {
        let stats = FinalStats {
            lines_processed: 5000,
            chunk_count: 2,
            elapsed: Duration::from_millis(500),
            ..Default::default()
        };
        let summary = stats.format_stats(2);
        assert!(summary.ends_with("in 500ms (10000 lines/s)"), "{}", summary);
    }

    #[test]
    fn test_same_aggregates_ignores_timing() {
        let a = FinalStats {
            error_count: 1,
            elapsed: Duration::from_millis(3),
            chunk_count: 1,
            ..Default::default()
        };
        let b = FinalStats {
            error_count: 1,
            elapsed: Duration::from_millis(9),
            chunk_count: 7,
            ..Default::default()
        };
        assert!(a.same_aggregates(&b));
    }
}
