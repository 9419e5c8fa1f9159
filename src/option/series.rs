use serde::{Deserialize, Serialize};

use super::marks::{LabelPosition, MarkLine, MarkPoint};
use super::style::{AreaStyle, Length, LineStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Bar,
}

/// Line smoothing: on/off or a strength in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Smooth {
    Flag(bool),
    Factor(f64),
}

/// A data item: a bare value or a `[category, value]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Pair(String, f64),
}

impl DataValue {
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(value) | Self::Pair(_, value) => *value,
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for DataValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<S: Into<String>> From<(S, f64)> for DataValue {
    fn from((category, value): (S, f64)) -> Self {
        Self::Pair(category.into(), value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusScope {
    Series,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emphasis {
    pub focus: FocusScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesLabel {
    pub show: bool,
    pub position: LabelPosition,
}

/// Label drawn after the last point of a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndLabel {
    pub show: bool,
    /// `{a}` series name, `{b}` item name, `{c}` value.
    pub formatter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smooth: Option<Smooth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SeriesLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_label: Option<EndLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark_point: Option<MarkPoint>,
    pub data: Vec<DataValue>,
}

impl Series {
    #[must_use]
    pub fn new(kind: SeriesKind) -> Self {
        Self {
            kind,
            name: None,
            stack: None,
            smooth: None,
            symbol: None,
            symbol_size: None,
            show_symbol: None,
            bar_width: None,
            line_style: None,
            area_style: None,
            label: None,
            end_label: None,
            emphasis: None,
            mark_line: None,
            mark_point: None,
            data: Vec::new(),
        }
    }

    #[must_use]
    pub fn line() -> Self {
        Self::new(SeriesKind::Line)
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(SeriesKind::Bar)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_data<I, T>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<DataValue>,
    {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_emphasis_on_series(mut self) -> Self {
        self.emphasis = Some(Emphasis {
            focus: FocusScope::Series,
        });
        self
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(DataValue::value).collect()
    }
}
