//! Merge of per-chunk statistics
//!
//! Counts are summed, address sets unioned and status maps unioned with
//! summed counts. All three are commutative and associative, so the result
//! does not depend on how the input was partitioned.

use std::time::Duration;

use crate::stats::{FinalStats, PartialStats};

/// Merge partial records into the final run-wide record
pub fn merge_partials<I>(partials: I, elapsed: Duration) -> FinalStats
where
    I: IntoIterator<Item = PartialStats>,
{
    let mut merged = FinalStats {
        elapsed,
        ..Default::default()
    };

    for partial in partials {
        merged.chunk_count += 1;
        merged.lines_processed += partial.lines_scanned;
        merged.error_count += partial.error_count;
        merged.warning_count += partial.warning_count;
        merged.unique_addresses.extend(partial.unique_addresses);

        for (status, count) in partial.status_code_counts {
            *merged.status_code_counts.entry(status).or_insert(0) += count;
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::aggregate_chunk;

    #[test]
    fn test_merge_sums_and_unions() {
        let first = aggregate_chunk(&["10.0.0.1 GET /x [ERROR] 500", "10.0.0.2 GET /y 200"]);
        let second = aggregate_chunk(&["10.0.0.1 GET /z [WARNING] 200"]);

        let merged = merge_partials(vec![first, second], Duration::from_millis(7));

        assert_eq!(merged.error_count, 1);
        assert_eq!(merged.warning_count, 1);
        assert_eq!(merged.unique_address_count(), 2);
        assert_eq!(merged.status_code_counts.get("500"), Some(&1));
        assert_eq!(merged.status_code_counts.get("200"), Some(&2));
        assert_eq!(merged.lines_processed, 3);
        assert_eq!(merged.chunk_count, 2);
        assert_eq!(merged.elapsed, Duration::from_millis(7));
    }

    #[test]
    fn test_merge_of_nothing() {
        let merged = merge_partials(Vec::new(), Duration::ZERO);
        assert_eq!(merged, FinalStats::default());
    }

    #[test]
    fn test_merge_empty_partials() {
        let merged = merge_partials(vec![PartialStats::new(); 4], Duration::ZERO);
        assert_eq!(merged.chunk_count, 4);
        assert_eq!(merged.error_count, 0);
        assert!(merged.unique_addresses.is_empty());
        assert!(merged.status_code_counts.is_empty());
    }

    #[test]
    fn test_merge_order_does_not_matter() {
        let a = aggregate_chunk(&["1.1.1.1 [ERROR] 500", "2.2.2.2 301"]);
        let b = aggregate_chunk(&["3.3.3.3 [WARNING] 500", "1.1.1.1 200"]);
        let c = aggregate_chunk(&["onlytoken"]);

        let forward = merge_partials(vec![a.clone(), b.clone(), c.clone()], Duration::ZERO);
        let backward = merge_partials(vec![c, a, b], Duration::ZERO);
        assert_eq!(forward, backward);
    }
}
