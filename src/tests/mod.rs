mod test_shared;

/// Cycle of small sample payloads, matching the fixture blocks used
/// throughout the scenario tests.
pub(crate) fn sample_blocks(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| match i % 4 {
            0 => b"Hello".to_vec(),
            1 => b"World".to_vec(),
            2 => b"Test".to_vec(),
            _ => b"Data".to_vec(),
        })
        .collect()
}

/// Number of interior levels a tree over `leaf_count` leaves must have.
pub(crate) fn expected_depth(leaf_count: usize, branching_factor: usize) -> usize {
    let mut levels = 0;
    let mut remaining = leaf_count;
    while remaining > 1 {
        remaining = remaining.div_ceil(branching_factor);
        levels += 1;
    }
    levels
}
