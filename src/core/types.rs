use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Container length, either absolute or relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    Px(u32),
    Percent(f64),
}

impl Extent {
    /// Resolves against the parent length, rounding to the nearest pixel.
    #[must_use]
    pub fn resolve(self, parent_px: u32) -> u32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(percent) => {
                let resolved = (f64::from(parent_px) * percent / 100.0).round();
                if resolved.is_finite() && resolved > 0.0 {
                    resolved.min(f64::from(u32::MAX)) as u32
                } else {
                    0
                }
            }
        }
    }
}

/// Size constraints of the element a chart is mounted into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub width: Extent,
    pub height: Extent,
    #[serde(default)]
    pub max_width: Option<Extent>,
}

impl ContainerStyle {
    #[must_use]
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self {
            width: Extent::Px(width),
            height: Extent::Px(height),
            max_width: None,
        }
    }

    /// Full parent width with a fixed height.
    #[must_use]
    pub const fn fluid(height: u32) -> Self {
        Self {
            width: Extent::Percent(100.0),
            height: Extent::Px(height),
            max_width: None,
        }
    }

    #[must_use]
    pub const fn with_max_width(mut self, max_width: Extent) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Computes the pixel size of the container inside `window`.
    #[must_use]
    pub fn resolve(self, window: Viewport) -> Viewport {
        let mut width = self.width.resolve(window.width);
        if let Some(max_width) = self.max_width {
            width = width.min(max_width.resolve(window.width));
        }
        Viewport::new(width, self.height.resolve(window.height))
    }
}
