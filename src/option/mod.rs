//! Typed chart option model.
//!
//! Types serialize to the option vocabulary the external charting library
//! consumes (`xAxis`, `series`, `visualMap`, ...). Unset fields are omitted
//! so the library applies its own defaults.

mod axis;
mod components;
mod json_contract;
mod marks;
mod series;
mod style;
mod visual_map;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub use axis::{Axis, AxisKind, AxisLabel, AxisTick, BoundaryGap, SplitLine};
pub use components::{
    AxisPointer, AxisPointerKind, AxisPointerLabel, DataViewFeature, DataZoomFeature, Enabled,
    Grid, Legend, MagicTypeFeature, Title, Toolbox, ToolboxFeatures, Tooltip, TooltipTrigger,
};
pub use json_contract::{CHART_OPTION_JSON_SCHEMA_V1, ChartOptionJsonContractV1};
pub use marks::{
    AxisCoord, LabelPosition, MarkAnchor, MarkLabel, MarkLine, MarkLineEntry, MarkPoint,
    MarkStatistic,
};
pub use series::{
    DataValue, Emphasis, EndLabel, FocusScope, Series, SeriesKind, SeriesLabel, Smooth,
};
pub use style::{AreaStyle, ColorStop, Fill, GradientKind, Length, LineStyle, LinearGradient};
pub use visual_map::{VisualMap, VisualMapKind, VisualPiece};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    /// Palette cycled through by series without an explicit color.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbox: Option<Toolbox>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x_axis: Vec<Axis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y_axis: Vec<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_map: Option<VisualMap>,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl ChartOption {
    /// Series names in declaration order, skipping unnamed series.
    #[must_use]
    pub fn series_names(&self) -> Vec<&str> {
        self.series
            .iter()
            .filter_map(|series| series.name.as_deref())
            .collect()
    }

    #[must_use]
    pub fn find_series(&self, name: &str) -> Option<&Series> {
        self.series
            .iter()
            .find(|series| series.name.as_deref() == Some(name))
    }

    /// Checks the option for inconsistencies the charting library would
    /// silently render wrong.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.series.is_empty() && (self.x_axis.is_empty() || self.y_axis.is_empty()) {
            return Err(ChartError::InvalidData(
                "cartesian series need at least one x axis and one y axis".to_owned(),
            ));
        }

        if let Some(grid) = &self.grid {
            for (field, length) in grid.lengths() {
                length.validate(field)?;
            }
        }

        for axis in self.x_axis.iter().chain(&self.y_axis) {
            for (field, bound) in [
                ("min", axis.min),
                ("max", axis.max),
                ("interval", axis.interval),
            ] {
                if bound.is_some_and(|value| !value.is_finite()) {
                    return Err(ChartError::InvalidData(format!(
                        "axis `{field}` must be finite"
                    )));
                }
            }
            if let (Some(min), Some(max)) = (axis.min, axis.max) {
                if min > max {
                    return Err(ChartError::InvalidData(format!(
                        "axis range is inverted: min={min}, max={max}"
                    )));
                }
            }
            if axis.interval.is_some_and(|interval| interval <= 0.0) {
                return Err(ChartError::InvalidData(
                    "axis interval must be > 0".to_owned(),
                ));
            }
        }

        let category_len = self
            .x_axis
            .first()
            .filter(|axis| axis.is_category() && !axis.data.is_empty())
            .map(|axis| axis.data.len());
        let mut stack_lengths: HashMap<&str, usize> = HashMap::new();

        for (index, series) in self.series.iter().enumerate() {
            self.validate_series(index, series, category_len)?;
            if let Some(stack) = series.stack.as_deref() {
                let expected = *stack_lengths.entry(stack).or_insert(series.data.len());
                if expected != series.data.len() {
                    return Err(ChartError::InvalidData(format!(
                        "series in stack `{stack}` have different lengths: {expected} vs {}",
                        series.data.len()
                    )));
                }
            }
        }

        if let Some(visual_map) = &self.visual_map {
            if visual_map.series_index >= self.series.len() {
                return Err(ChartError::InvalidData(format!(
                    "visual map targets series {} but only {} exist",
                    visual_map.series_index,
                    self.series.len()
                )));
            }
            for piece in &visual_map.pieces {
                piece.validate()?;
            }
        }

        Ok(())
    }

    fn validate_series(
        &self,
        index: usize,
        series: &Series,
        category_len: Option<usize>,
    ) -> ChartResult<()> {
        if series.data.iter().any(|item| !item.value().is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series {index} contains non-finite values"
            )));
        }
        if let Some(expected) = category_len {
            if series.data.len() != expected {
                return Err(ChartError::InvalidData(format!(
                    "series {index} has {} values for {expected} categories",
                    series.data.len()
                )));
            }
        }
        if let Some(Smooth::Factor(factor)) = series.smooth {
            if !(0.0..=1.0).contains(&factor) {
                return Err(ChartError::InvalidData(format!(
                    "series {index} smooth factor must be in [0, 1]"
                )));
            }
        }
        if let Some(width) = &series.bar_width {
            width.validate("barWidth")?;
        }
        let area_fill = series
            .area_style
            .as_ref()
            .and_then(|style| style.color.as_ref());
        if let Some(Fill::Gradient(gradient)) = area_fill {
            gradient.validate()?;
        }
        if let Some(mark_line) = &series.mark_line {
            mark_line.validate()?;
        }
        if let Some(mark_point) = &series.mark_point {
            mark_point.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday_option() -> ChartOption {
        ChartOption {
            x_axis: vec![Axis::category(["Mon", "Tue", "Wed"])],
            y_axis: vec![Axis::value()],
            series: vec![Series::line().with_name("a").with_data([1.0, 2.0, 3.0])],
            ..ChartOption::default()
        }
    }

    #[test]
    fn serializes_with_library_field_names() {
        let value = serde_json::to_value(weekday_option()).expect("serialize");
        assert_eq!(value["xAxis"][0]["type"], "category");
        assert_eq!(value["series"][0]["type"], "line");
        assert!(value.get("visualMap").is_none());
        assert!(value.get("color").is_none());
    }

    #[test]
    fn category_length_mismatch_is_rejected() {
        let mut option = weekday_option();
        option.series[0].data.pop();
        assert!(matches!(option.validate(), Err(ChartError::InvalidData(_))));
    }

    #[test]
    fn series_without_axes_are_rejected() {
        let mut option = weekday_option();
        option.y_axis.clear();
        assert!(option.validate().is_err());
    }

    #[test]
    fn visual_map_must_target_existing_series() {
        let mut option = weekday_option();
        option.visual_map = Some(VisualMap::hidden_x_pieces(
            3,
            vec![VisualPiece::open(0.0, 1.0, "red")],
        ));
        assert!(option.validate().is_err());
        option.visual_map.as_mut().expect("visual map").series_index = 0;
        assert!(option.validate().is_ok());
    }

    #[test]
    fn uneven_stack_is_rejected() {
        let mut option = weekday_option();
        option.x_axis = vec![Axis::category(Vec::<String>::new())];
        option.series = vec![
            Series::line().with_stack("Total").with_data([1.0, 2.0]),
            Series::line().with_stack("Total").with_data([1.0]),
        ];
        assert!(option.validate().is_err());
    }
}
