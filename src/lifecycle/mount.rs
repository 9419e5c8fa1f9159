use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::ContainerStyle;
use crate::error::{ChartError, ChartResult};
use crate::lifecycle::{ChartInstance, ResizeEvents, ResizeSubscription};
use crate::option::ChartOption;

/// A chart attached to its container for the lifetime of the mount.
///
/// Unmounting (explicitly or on drop) removes the resize listener and
/// disposes the chart exactly once.
pub struct ChartMount<C: ChartInstance> {
    chart: Rc<RefCell<C>>,
    container: ContainerStyle,
    subscription: Option<ResizeSubscription>,
    mounted: bool,
}

impl<C: ChartInstance + 'static> ChartMount<C> {
    /// Sizes `chart` to its container, applies `option` and starts following
    /// window resizes. The chart is disposed if any step fails.
    pub fn mount(
        mut chart: C,
        container: ContainerStyle,
        option: &ChartOption,
        events: &ResizeEvents,
    ) -> ChartResult<Self> {
        if chart.is_disposed() {
            return Err(ChartError::Disposed);
        }

        let viewport = container.resolve(events.window());
        if let Err(err) = chart
            .resize(viewport)
            .and_then(|()| chart.configure(option))
        {
            chart.dispose();
            return Err(err);
        }

        let chart = Rc::new(RefCell::new(chart));
        let weak_chart = Rc::downgrade(&chart);
        let subscription = events.subscribe(move |window| {
            let Some(chart) = weak_chart.upgrade() else {
                return;
            };
            let viewport = container.resolve(window);
            // The chart may be busy in `update` or `with_chart*` when a
            // resize is emitted from inside it.
            let Ok(mut chart) = chart.try_borrow_mut() else {
                warn!(
                    width = viewport.width,
                    height = viewport.height,
                    "skipping chart resize while chart is busy"
                );
                return;
            };
            if let Err(err) = chart.resize(viewport) {
                warn!(
                    error = %err,
                    width = viewport.width,
                    height = viewport.height,
                    "skipping chart resize"
                );
            }
        });

        debug!(
            width = viewport.width,
            height = viewport.height,
            series = option.series.len(),
            "chart mounted"
        );
        Ok(Self {
            chart,
            container,
            subscription: Some(subscription),
            mounted: true,
        })
    }
}

impl<C: ChartInstance> ChartMount<C> {
    /// Applies a new option to the mounted chart.
    pub fn update(&mut self, option: &ChartOption) -> ChartResult<()> {
        if !self.mounted {
            return Err(ChartError::Disposed);
        }
        self.chart.borrow_mut().configure(option)?;
        debug!(series = option.series.len(), "chart option updated");
        Ok(())
    }

    /// Stops listening for resizes and disposes the chart.
    ///
    /// Only the first call has an effect; dispose is skipped when the chart
    /// was already disposed elsewhere.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;

        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        let mut chart = self.chart.borrow_mut();
        if chart.is_disposed() {
            debug!("chart already disposed at unmount");
        } else {
            chart.dispose();
            debug!("chart unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn container(&self) -> ContainerStyle {
        self.container
    }

    /// Runs `f` against the chart handle.
    pub fn with_chart<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.chart.borrow())
    }

    /// Runs `f` against the chart handle mutably.
    pub fn with_chart_mut<R>(&mut self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.chart.borrow_mut())
    }
}

impl<C: ChartInstance> Drop for ChartMount<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
