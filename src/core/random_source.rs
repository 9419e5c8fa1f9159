use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::{ChartError, ChartResult};

/// Source of uniform samples in `[0, 1)`.
///
/// Consumers take the source as a parameter instead of reaching for a global
/// generator, so every randomized path can be replayed in tests.
pub trait UniformSource {
    /// Returns the next sample in `[0, 1)`.
    fn next_unit(&mut self) -> ChartResult<f64>;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_unit(&mut self) -> ChartResult<f64> {
        (**self).next_unit()
    }
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl RngSource<ThreadRng> {
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_unit(&mut self) -> ChartResult<f64> {
        // `StandardUniform` for f64 samples the half-open interval [0, 1).
        Ok(self.rng.random::<f64>())
    }
}

/// Replays a fixed list of samples, failing once they run out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Number of samples handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> ChartResult<f64> {
        let sample = self
            .samples
            .get(self.cursor)
            .copied()
            .ok_or(ChartError::RandomSourceExhausted { drawn: self.cursor })?;
        self.cursor += 1;
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_replays_then_reports_exhaustion() {
        let mut source = ScriptedSource::new([0.25, 0.5]);
        assert_eq!(source.next_unit().expect("first"), 0.25);
        assert_eq!(source.next_unit().expect("second"), 0.5);
        assert_eq!(source.remaining(), 0);

        let err = source.next_unit().expect_err("exhausted");
        assert!(matches!(
            err,
            ChartError::RandomSourceExhausted { drawn: 2 }
        ));
    }

    #[test]
    fn seeded_sources_agree_and_stay_in_unit_interval() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..1_000 {
            let left = a.next_unit().expect("sample a");
            let right = b.next_unit().expect("sample b");
            assert_eq!(left, right);
            assert!((0.0..1.0).contains(&left));
        }
    }

    #[test]
    fn mutable_reference_forwards_to_source() {
        fn draw(mut source: impl UniformSource) -> f64 {
            source.next_unit().expect("sample")
        }

        let mut source = ScriptedSource::new([0.75, 0.125]);
        assert_eq!(draw(&mut source), 0.75);
        assert_eq!(source.drawn(), 1);
    }
}
