//! Demo charts of the gallery.
//!
//! Each demo pairs a container style with an option builder. Only the bump
//! chart consumes randomness.

mod area_pieces;
mod basic_bar;
mod bump_chart;
mod stacked_area;
mod stacked_line;
mod temperature_change;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ContainerStyle, Extent, UniformSource};
use crate::error::{ChartError, ChartResult};
use crate::option::ChartOption;

pub use area_pieces::{area_pieces_option, dated_categories};
pub use basic_bar::basic_bar_option;
pub use bump_chart::{BumpChartSettings, bump_chart_option};
pub use stacked_area::stacked_area_option;
pub use stacked_line::stacked_line_option;
pub use temperature_change::temperature_change_option;

pub(crate) const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoChart {
    BasicBar,
    StackedLine,
    StackedArea,
    TemperatureChange,
    AreaPieces,
    DataTransformFilter,
    BumpChart,
}

impl DemoChart {
    pub const ALL: [Self; 7] = [
        Self::BasicBar,
        Self::StackedLine,
        Self::StackedArea,
        Self::TemperatureChange,
        Self::AreaPieces,
        Self::DataTransformFilter,
        Self::BumpChart,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::BasicBar => "basic-bar",
            Self::StackedLine => "stacked-line",
            Self::StackedArea => "stacked-area",
            Self::TemperatureChange => "temperature-change",
            Self::AreaPieces => "area-pieces",
            Self::DataTransformFilter => "data-transform-filter",
            Self::BumpChart => "bump-chart",
        }
    }

    #[must_use]
    pub fn container(self) -> ContainerStyle {
        match self {
            Self::BasicBar | Self::AreaPieces | Self::DataTransformFilter => {
                ContainerStyle::fixed(800, 500)
            }
            Self::StackedLine | Self::StackedArea => ContainerStyle::fixed(800, 600),
            Self::TemperatureChange => ContainerStyle::fluid(600).with_max_width(Extent::Px(1200)),
            Self::BumpChart => ContainerStyle::fluid(600),
        }
    }

    /// Builds a fresh option for this demo.
    pub fn build_option<S>(
        self,
        bump: &BumpChartSettings,
        source: &mut S,
    ) -> ChartResult<ChartOption>
    where
        S: UniformSource + ?Sized,
    {
        match self {
            Self::BasicBar => Ok(basic_bar_option()),
            Self::StackedLine => Ok(stacked_line_option()),
            Self::StackedArea => Ok(stacked_area_option()),
            Self::TemperatureChange => Ok(temperature_change_option()),
            Self::AreaPieces | Self::DataTransformFilter => area_pieces_option(),
            Self::BumpChart => bump_chart_option(bump, source),
        }
    }
}

impl fmt::Display for DemoChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DemoChart {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.id() == s)
            .ok_or_else(|| ChartError::InvalidArgument(format!("unknown demo chart `{s}`")))
    }
}
