use tracing::trace;

use crate::core::random_source::UniformSource;
use crate::error::{ChartError, ChartResult};

/// One exchange performed by the shuffle: positions `i` and `j`, `j <= i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStep {
    pub i: usize,
    pub j: usize,
}

/// Shuffles `items` in place with the backward Fisher-Yates pass.
///
/// Every ordering is equally likely when `source` is uniform on `[0, 1)`.
/// Draws `items.len() - 1` samples; empty and single-element slices draw
/// none. The slice is returned for chaining. Errors from `source` propagate
/// unchanged; a failure part-way leaves a reordering of the original
/// elements.
pub fn shuffle_in_place<'a, T, S>(items: &'a mut [T], source: &mut S) -> ChartResult<&'a mut [T]>
where
    S: UniformSource + ?Sized,
{
    shuffle_in_place_traced(items, source, |_| {})
}

/// Same as [`shuffle_in_place`], reporting every swap before it happens.
pub fn shuffle_in_place_traced<'a, T, S, F>(
    items: &'a mut [T],
    source: &mut S,
    mut on_swap: F,
) -> ChartResult<&'a mut [T]>
where
    S: UniformSource + ?Sized,
    F: FnMut(SwapStep),
{
    let mut remaining = items.len();
    // The last unshuffled slot can only swap with itself.
    while remaining > 1 {
        let j = sample_index(source.next_unit()?, remaining)?;
        remaining -= 1;
        let step = SwapStep { i: remaining, j };
        on_swap(step);
        items.swap(step.i, step.j);
    }
    trace!(len = items.len(), "shuffled sequence in place");
    Ok(items)
}

/// Maps a unit sample onto `[0, upper)` as `floor(sample * upper)`.
pub fn sample_index(sample: f64, upper: usize) -> ChartResult<usize> {
    if upper == 0 {
        return Err(ChartError::InvalidArgument(
            "index range must not be empty".to_owned(),
        ));
    }
    if !sample.is_finite() || !(0.0..1.0).contains(&sample) {
        return Err(ChartError::InvalidArgument(format!(
            "random sample must lie in [0, 1), got {sample}"
        )));
    }
    let scaled = (sample * upper as f64).floor() as usize;
    Ok(scaled.min(upper - 1))
}

/// Shuffles each sequence on the rayon pool with its own seeded source.
///
/// Sequence `k` uses seed `base_seed + k`, so results do not depend on
/// scheduling.
#[cfg(feature = "parallel-shuffle")]
pub fn shuffle_batch_seeded<T: Send>(batches: &mut [Vec<T>], base_seed: u64) -> ChartResult<()> {
    use rayon::prelude::*;

    use crate::core::random_source::RngSource;

    batches
        .par_iter_mut()
        .enumerate()
        .try_for_each(|(index, batch)| {
            let mut source = RngSource::seeded(base_seed.wrapping_add(index as u64));
            shuffle_in_place(batch.as_mut_slice(), &mut source).map(|_| ())
        })
}
