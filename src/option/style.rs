use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Option-level length: a plain number of pixels or a `"NN%"` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Px(f64),
    Relative(String),
}

impl Length {
    #[must_use]
    pub fn px(value: f64) -> Self {
        Self::Px(value)
    }

    #[must_use]
    pub fn percent(value: f64) -> Self {
        Self::Relative(format!("{value}%"))
    }

    pub fn validate(&self, field: &str) -> ChartResult<()> {
        match self {
            Self::Px(value) if value.is_finite() => Ok(()),
            Self::Relative(text)
                if text
                    .strip_suffix('%')
                    .and_then(|number| number.parse::<f64>().ok())
                    .is_some_and(f64::is_finite) =>
            {
                Ok(())
            }
            _ => Err(ChartError::InvalidData(format!(
                "`{field}` must be a finite pixel value or percentage"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl LineStyle {
    #[must_use]
    pub fn width(width: f64) -> Self {
        Self {
            color: None,
            width: Some(width),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Fill under a line series; the default renders with the series color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Fill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    Gradient(LinearGradient),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
}

/// Gradient between `(x, y)` and `(x2, y2)` in bounding-box fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
    pub color_stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Top-to-bottom gradient between two colors.
    #[must_use]
    pub fn vertical(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            kind: GradientKind::Linear,
            x: 0.0,
            y: 0.0,
            x2: 0.0,
            y2: 1.0,
            color_stops: vec![ColorStop::new(0.0, top), ColorStop::new(1.0, bottom)],
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let coordinates = [
            ("x", self.x),
            ("y", self.y),
            ("x2", self.x2),
            ("y2", self.y2),
        ];
        for (name, value) in coordinates {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "gradient coordinate `{name}` must be finite"
                )));
            }
        }
        if self.color_stops.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient needs at least one color stop".to_owned(),
            ));
        }
        let mut previous = 0.0;
        for stop in &self.color_stops {
            if !(0.0..=1.0).contains(&stop.offset) || stop.offset < previous {
                return Err(ChartError::InvalidData(
                    "gradient stop offsets must be ascending within [0, 1]".to_owned(),
                ));
            }
            previous = stop.offset;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

impl ColorStop {
    #[must_use]
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_length_serializes_as_css_string() {
        let json = serde_json::to_string(&Length::percent(3.0)).expect("serialize");
        assert_eq!(json, "\"3%\"");
        assert!(Length::percent(60.0).validate("barWidth").is_ok());
        let relative = Length::Relative("wide".to_owned());
        assert!(relative.validate("barWidth").is_err());
    }

    #[test]
    fn gradient_uses_chart_library_shape() {
        let gradient = LinearGradient::vertical("rgb(128, 255, 165)", "rgb(1, 191, 236)");
        let value = serde_json::to_value(&gradient).expect("serialize");
        assert_eq!(value["type"], "linear");
        assert_eq!(value["y2"], 1.0);
        assert_eq!(value["colorStops"][1]["color"], "rgb(1, 191, 236)");
        assert!(gradient.validate().is_ok());
    }

    #[test]
    fn gradient_rejects_descending_stops() {
        let mut gradient = LinearGradient::vertical("red", "blue");
        gradient.color_stops.reverse();
        assert!(gradient.validate().is_err());
    }
}
