use serde::{Deserialize, Serialize};

use super::style::Length;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

/// Padding at both ends of an axis.
///
/// Category axes take a flag; value axes take a `[min, max]` extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundaryGap {
    Flag(bool),
    Range([Length; 2]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    pub align_with_label: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Template where `{value}` stands for the tick value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

impl AxisLabel {
    #[must_use]
    pub fn formatter(template: impl Into<String>) -> Self {
        Self {
            formatter: Some(template.into()),
            ..Self::default()
        }
    }

    /// Expands the template for one tick value.
    #[must_use]
    pub fn format_value(&self, value: &str) -> String {
        match &self.formatter {
            Some(template) => template.replace("{value}", value),
            None => value.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLine {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<BoundaryGap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<AxisTick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Axis {
    #[must_use]
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            data: Vec::new(),
            boundary_gap: None,
            axis_tick: None,
            axis_label: None,
            split_line: None,
            inverse: None,
            interval: None,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn value() -> Self {
        Self::new(AxisKind::Value)
    }

    #[must_use]
    pub fn category<I, T>(labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut axis = Self::new(AxisKind::Category);
        axis.data = labels.into_iter().map(Into::into).collect();
        axis
    }

    #[must_use]
    pub fn with_boundary_gap(mut self, gap: BoundaryGap) -> Self {
        self.boundary_gap = Some(gap);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: AxisLabel) -> Self {
        self.axis_label = Some(label);
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn is_category(&self) -> bool {
        self.kind == AxisKind::Category
    }
}
