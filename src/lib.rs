//! chart-gallery: chart demos behind a typed option model.
//!
//! The crate builds chart options for a gallery of demos, manages the
//! lifetime of the chart handles they are mounted into, and provides the
//! injectable Fisher-Yates shuffle that drives the randomized demo data.

pub mod api;
pub mod core;
pub mod error;
pub mod gallery;
pub mod lifecycle;
pub mod option;
pub mod telemetry;

pub use api::{ChartGallery, GalleryConfig};
pub use crate::core::{UniformSource, shuffle_in_place};
pub use error::{ChartError, ChartResult};
