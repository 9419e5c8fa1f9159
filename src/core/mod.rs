pub mod permutation;
pub mod random_source;
pub mod ranking;
pub mod types;

#[cfg(feature = "parallel-shuffle")]
pub use permutation::shuffle_batch_seeded;
pub use permutation::{SwapStep, sample_index, shuffle_in_place, shuffle_in_place_traced};
pub use random_source::{RngSource, ScriptedSource, UniformSource};
pub use ranking::{RankingTable, generate_ranking_table, period_column};
pub use types::{ContainerStyle, Extent, Viewport};
