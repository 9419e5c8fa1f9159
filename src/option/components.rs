use serde::{Deserialize, Serialize};

use super::series::SeriesKind;
use super::style::Length;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPointerKind {
    Line,
    Shadow,
    Cross,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPointerLabel {
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: AxisPointerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<AxisPointerLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: TooltipTrigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
}

impl Tooltip {
    #[must_use]
    pub fn new(trigger: TooltipTrigger) -> Self {
        Self {
            trigger,
            axis_pointer: None,
        }
    }

    #[must_use]
    pub fn with_axis_pointer(mut self, kind: AxisPointerKind) -> Self {
        self.axis_pointer = Some(AxisPointer { kind, label: None });
        self
    }

    /// Crosshair pointer whose value labels use `background_color`.
    #[must_use]
    pub fn with_cross_pointer(mut self, background_color: impl Into<String>) -> Self {
        self.axis_pointer = Some(AxisPointer {
            kind: AxisPointerKind::Cross,
            label: Some(AxisPointerLabel {
                background_color: background_color.into(),
            }),
        });
        self
    }
}

/// Legend entries; empty means the library lists every named series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

impl Legend {
    #[must_use]
    pub fn entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            data: entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contain_label: Option<bool>,
}

impl Grid {
    /// Percentage margins with axis labels kept inside the grid.
    #[must_use]
    pub fn percent_margins(left: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: Some(Length::percent(left)),
            right: Some(Length::percent(right)),
            top: None,
            bottom: Some(Length::percent(bottom)),
            contain_label: Some(true),
        }
    }

    #[must_use]
    pub fn px_margins(left: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: Some(Length::px(left)),
            right: Some(Length::px(right)),
            top: None,
            bottom: Some(Length::px(bottom)),
            contain_label: Some(true),
        }
    }

    pub(super) fn lengths(&self) -> impl Iterator<Item = (&'static str, &Length)> {
        [
            ("grid.left", self.left.as_ref()),
            ("grid.right", self.right.as_ref()),
            ("grid.top", self.top.as_ref()),
            ("grid.bottom", self.bottom.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, length)| length.map(|length| (name, length)))
    }
}

/// Feature that takes no settings; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enabled {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoomFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewFeature {
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicTypeFeature {
    #[serde(rename = "type")]
    pub kinds: Vec<SeriesKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<DataZoomFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_view: Option<DataViewFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_type: Option<MagicTypeFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore: Option<Enabled>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_as_image: Option<Enabled>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Toolbox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    pub feature: ToolboxFeatures,
}

impl Toolbox {
    /// Toolbox offering only the save-as-image button.
    #[must_use]
    pub fn save_as_image() -> Self {
        Self {
            show: None,
            feature: ToolboxFeatures {
                save_as_image: Some(Enabled {}),
                ..ToolboxFeatures::default()
            },
        }
    }
}
