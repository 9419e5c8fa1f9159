#![cfg(feature = "parallel-shuffle")]

use chart_gallery::core::{RngSource, shuffle_batch_seeded, shuffle_in_place};

#[test]
fn batch_shuffle_matches_sequential_per_seed() {
    let base: Vec<u32> = (0..64).collect();
    let mut batches = vec![base.clone(); 16];

    shuffle_batch_seeded(&mut batches, 1000).expect("batch shuffle");

    for (index, batch) in batches.iter().enumerate() {
        let mut expected = base.clone();
        shuffle_in_place(&mut expected, &mut RngSource::seeded(1000 + index as u64))
            .expect("sequential shuffle");
        assert_eq!(batch, &expected, "batch {index} diverged");
    }
}

#[test]
fn batch_shuffle_keeps_elements_and_handles_empty_batches() {
    let mut batches = vec![Vec::new(), vec![7u8], (0..10).collect::<Vec<u8>>()];

    shuffle_batch_seeded(&mut batches, u64::MAX).expect("batch shuffle");

    assert!(batches[0].is_empty());
    assert_eq!(batches[1], [7]);
    let mut last = batches[2].clone();
    last.sort_unstable();
    assert_eq!(last, (0..10).collect::<Vec<u8>>());
}
