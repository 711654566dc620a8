//! Configuration constants for bidindex.

/// Default number of buckets in a [`BidTable`](crate::index::BidTable).
///
/// Sized comfortably above the largest known export (~17,000 rows in the
/// full-year sales file), so default-sized tables keep chains short.
///
/// # Load Factor
/// With 20,000 buckets and the full-year file loaded:
/// - Load factor: ~0.85 records per bucket
/// - Expected chain length on a successful lookup: ~1
///
/// The table never resizes; callers with much larger inputs should size the
/// table explicitly via `BidTable::with_capacity`.
pub const DEFAULT_TABLE_CAPACITY: usize = 20_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_nonzero() {
        // with_capacity asserts on zero, so the default must always be safe
        assert!(DEFAULT_TABLE_CAPACITY > 0);
        assert_eq!(DEFAULT_TABLE_CAPACITY, 20_000);
    }
}
