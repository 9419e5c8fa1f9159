use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::gallery::{BumpChartSettings, DemoChart};

/// Public gallery bootstrap configuration.
///
/// This type is serializable so hosts can persist/load a gallery setup
/// without inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_window")]
    pub window: Viewport,
    /// Seed for demo randomness; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_enabled_demos")]
    pub enabled_demos: Vec<DemoChart>,
    #[serde(default)]
    pub bump_chart: BumpChartSettings,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            seed: None,
            enabled_demos: default_enabled_demos(),
            bump_chart: BumpChartSettings::default(),
        }
    }
}

impl GalleryConfig {
    /// Creates a config with every demo enabled for the given window.
    #[must_use]
    pub fn new(window: Viewport) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Makes demo randomness reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Restricts the gallery to `demos`, in the given order.
    #[must_use]
    pub fn with_enabled_demos(mut self, demos: impl IntoIterator<Item = DemoChart>) -> Self {
        self.enabled_demos = demos.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_bump_chart(mut self, settings: BumpChartSettings) -> Self {
        self.bump_chart = settings;
        self
    }

    #[must_use]
    pub fn is_enabled(&self, demo: DemoChart) -> bool {
        self.enabled_demos.contains(&demo)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.window.validate()?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = self.enabled_demos.iter().find(|demo| !seen.insert(**demo)) {
            return Err(ChartError::InvalidArgument(format!(
                "demo `{duplicate}` is enabled twice"
            )));
        }

        if self.is_enabled(DemoChart::BumpChart) {
            self.bump_chart.validate()?;
        }
        Ok(())
    }
}

fn default_window() -> Viewport {
    Viewport::new(1280, 800)
}

fn default_enabled_demos() -> Vec<DemoChart> {
    DemoChart::ALL.to_vec()
}
