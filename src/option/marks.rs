use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::style::Length;

/// Statistic the chart library derives from a series' values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkStatistic {
    Max,
    Min,
    Average,
}

impl MarkStatistic {
    /// Evaluates the statistic over finite values; `None` when there are none.
    #[must_use]
    pub fn resolve(self, values: &[f64]) -> Option<f64> {
        let mut finite = values.iter().copied().filter(|value| value.is_finite());
        let first = finite.next()?;
        Some(match self {
            Self::Max => finite.fold(first, f64::max),
            Self::Min => finite.fold(first, f64::min),
            Self::Average => {
                let (sum, count) = finite.fold((first, 1usize), |(sum, count), value| {
                    (sum + value, count + 1)
                });
                sum / count as f64
            }
        })
    }
}

/// Coordinate on an axis: a literal value or a statistic of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisCoord {
    Value(f64),
    Statistic(MarkStatistic),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Start,
    Middle,
    End,
    Top,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

impl MarkLabel {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show: Some(false),
            ..Self::default()
        }
    }
}

/// Anchor of a mark point or one end of a mark line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAnchor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub statistic: Option<MarkStatistic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisCoord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisCoord>,
    /// Position relative to the grid, e.g. `"90%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<MarkLabel>,
}

impl MarkAnchor {
    #[must_use]
    pub fn statistic(statistic: MarkStatistic, name: impl Into<String>) -> Self {
        Self {
            statistic: Some(statistic),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Vertical line through an x-axis value.
    #[must_use]
    pub fn at_x(value: f64) -> Self {
        Self {
            x_axis: Some(AxisCoord::Value(value)),
            ..Self::default()
        }
    }

    fn is_placed(&self) -> bool {
        self.statistic.is_some()
            || self.x_axis.is_some()
            || self.y_axis.is_some()
            || self.x.is_some()
    }

    fn validate(&self) -> ChartResult<()> {
        if !self.is_placed() {
            return Err(ChartError::InvalidData(
                "mark anchor needs a statistic or a coordinate".to_owned(),
            ));
        }
        for coord in [self.x_axis, self.y_axis].into_iter().flatten() {
            if let AxisCoord::Value(value) = coord {
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(
                        "mark anchor coordinate must be finite".to_owned(),
                    ));
                }
            }
        }
        if let Some(value) = self.value {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "mark anchor value must be finite".to_owned(),
                ));
            }
        }
        if let Some(x) = &self.x {
            x.validate("markAnchor.x")?;
        }
        Ok(())
    }
}

/// Mark-line entry: a single anchor or an explicit start/end segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkLineEntry {
    Segment([MarkAnchor; 2]),
    Anchor(MarkAnchor),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkLine {
    /// Symbols drawn at the start and end of each line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<[String; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<MarkLabel>,
    pub data: Vec<MarkLineEntry>,
}

impl MarkLine {
    pub fn validate(&self) -> ChartResult<()> {
        for entry in &self.data {
            match entry {
                MarkLineEntry::Anchor(anchor) => anchor.validate()?,
                MarkLineEntry::Segment([start, end]) => {
                    start.validate()?;
                    end.validate()?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkPoint {
    pub data: Vec<MarkAnchor>,
}

impl MarkPoint {
    pub fn validate(&self) -> ChartResult<()> {
        self.data.iter().try_for_each(MarkAnchor::validate)
    }
}
