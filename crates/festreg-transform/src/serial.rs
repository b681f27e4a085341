//! Display row numbering.

/// A 1..=N serial index over the final row count.
///
/// Always covers every row actually present, regardless of how many rows
/// earlier stages dropped.
pub fn serial_index(row_count: usize) -> Vec<u32> {
    (1..=row_count as u32).collect()
}
