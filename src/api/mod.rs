mod gallery_config;
mod json_contract;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use tracing::debug;

use crate::core::{RngSource, UniformSource, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::gallery::DemoChart;
use crate::lifecycle::{ChartInstance, ChartMount, ResizeEvents};
use crate::option::ChartOption;

pub use gallery_config::GalleryConfig;
pub use json_contract::{GALLERY_CONFIG_JSON_SCHEMA_V1, GalleryConfigJsonContractV1};

/// Entry point tying demos, randomness and the window resize registry together.
pub struct ChartGallery<S = RngSource<StdRng>> {
    config: GalleryConfig,
    source: S,
    events: ResizeEvents,
}

impl ChartGallery<RngSource<StdRng>> {
    /// Builds a gallery seeded from `config.seed`, or from OS entropy.
    pub fn new(config: GalleryConfig) -> ChartResult<Self> {
        let source = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_os_rng(),
        };
        Self::with_source(config, source)
    }
}

impl<S: UniformSource> ChartGallery<S> {
    pub fn with_source(config: GalleryConfig, source: S) -> ChartResult<Self> {
        config.validate()?;
        let events = ResizeEvents::new(config.window);
        debug!(
            demos = config.enabled_demos.len(),
            seeded = config.seed.is_some(),
            "chart gallery created"
        );
        Ok(Self {
            config,
            source,
            events,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[must_use]
    pub fn events(&self) -> &ResizeEvents {
        &self.events
    }

    #[must_use]
    pub fn enabled_demos(&self) -> &[DemoChart] {
        &self.config.enabled_demos
    }

    /// Builds a fresh option for an enabled demo.
    pub fn option_for(&mut self, demo: DemoChart) -> ChartResult<ChartOption> {
        if !self.config.is_enabled(demo) {
            return Err(ChartError::InvalidArgument(format!(
                "demo `{demo}` is not enabled"
            )));
        }
        demo.build_option(&self.config.bump_chart, &mut self.source)
    }

    /// Options for every enabled demo, in configured order.
    pub fn options(&mut self) -> ChartResult<IndexMap<DemoChart, ChartOption>> {
        let demos = self.config.enabled_demos.clone();
        demos
            .into_iter()
            .map(|demo| self.option_for(demo).map(|option| (demo, option)))
            .collect()
    }

    /// Mounts `chart` as `demo` into its container.
    ///
    /// The chart is disposed if the option cannot be built or applied.
    pub fn mount<C>(&mut self, demo: DemoChart, mut chart: C) -> ChartResult<ChartMount<C>>
    where
        C: ChartInstance + 'static,
    {
        let option = match self.option_for(demo) {
            Ok(option) => option,
            Err(err) => {
                chart.dispose();
                return Err(err);
            }
        };
        let mount = ChartMount::mount(chart, demo.container(), &option, &self.events)?;
        debug!(demo = demo.id(), "demo mounted");
        Ok(mount)
    }

    /// Broadcasts a window resize; returns how many charts were notified.
    pub fn resize_window(&self, window: Viewport) -> ChartResult<usize> {
        window.validate()?;
        Ok(self.events.emit(window))
    }
}
