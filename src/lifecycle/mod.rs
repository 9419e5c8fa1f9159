//! Chart handle lifecycle: mount, resize, unmount.
//!
//! The charting library itself is an external collaborator reached through
//! [`ChartInstance`]. Everything here is single-threaded and event-driven.

mod headless;
mod mount;
mod resize;

pub use headless::{HeadlessChart, HeadlessRecorder};
pub use mount::ChartMount;
pub use resize::{ResizeEvents, ResizeSubscription};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::option::ChartOption;

/// Handle to one chart living inside a container.
///
/// `configure` and `resize` fail with `ChartError::Disposed` after
/// `dispose`; `dispose` itself may be called any number of times.
pub trait ChartInstance {
    fn configure(&mut self, option: &ChartOption) -> ChartResult<()>;
    fn resize(&mut self, viewport: Viewport) -> ChartResult<()>;
    fn dispose(&mut self);
    fn is_disposed(&self) -> bool;
}

impl<C: ChartInstance + ?Sized> ChartInstance for Box<C> {
    fn configure(&mut self, option: &ChartOption) -> ChartResult<()> {
        (**self).configure(option)
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        (**self).resize(viewport)
    }

    fn dispose(&mut self) {
        (**self).dispose();
    }

    fn is_disposed(&self) -> bool {
        (**self).is_disposed()
    }
}
