use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::permutation::shuffle_in_place;
use crate::core::random_source::UniformSource;
use crate::error::{ChartError, ChartResult};

/// Rank history per entry, in the order entries were supplied.
pub type RankingTable = IndexMap<String, Vec<u32>>;

/// Draws one random ranking per period for every name.
///
/// For each period the ranks `1..=names.len()` are shuffled and handed out
/// positionally, so every period column is a permutation of those ranks.
pub fn generate_ranking_table<N, S>(
    names: &[N],
    periods: usize,
    source: &mut S,
) -> ChartResult<RankingTable>
where
    N: AsRef<str>,
    S: UniformSource + ?Sized,
{
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_ref()) {
            return Err(ChartError::InvalidArgument(format!(
                "duplicate ranking entry `{}`",
                name.as_ref()
            )));
        }
    }
    let entry_count = u32::try_from(names.len()).map_err(|_| {
        ChartError::InvalidArgument(format!("too many ranking entries: {}", names.len()))
    })?;

    let mut table: RankingTable = names
        .iter()
        .map(|name| (name.as_ref().to_owned(), Vec::with_capacity(periods)))
        .collect();
    let default_ranking: Vec<u32> = (1..=entry_count).collect();

    for _ in 0..periods {
        let mut ranking = default_ranking.clone();
        shuffle_in_place(ranking.as_mut_slice(), source)?;
        for (history, rank) in table.values_mut().zip(ranking) {
            history.push(rank);
        }
    }

    debug!(entries = table.len(), periods, "generated ranking table");
    Ok(table)
}

/// Ranks held by every entry in one period, in entry order.
#[must_use]
pub fn period_column(table: &RankingTable, period: usize) -> Option<Vec<u32>> {
    table
        .values()
        .map(|history| history.get(period).copied())
        .collect()
}
