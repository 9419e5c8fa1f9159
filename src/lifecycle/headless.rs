use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::lifecycle::ChartInstance;
use crate::option::ChartOption;

#[derive(Debug, Default)]
struct HeadlessState {
    configure_count: usize,
    resize_count: usize,
    dispose_calls: usize,
    releases: usize,
    disposed: bool,
    last_viewport: Option<Viewport>,
    last_option: Option<ChartOption>,
}

/// Chart that draws nothing, used by tests and headless hosts.
///
/// It still validates every option and viewport it receives so invalid
/// configurations surface without a real charting backend.
#[derive(Debug, Default)]
pub struct HeadlessChart {
    state: Rc<RefCell<HeadlessState>>,
}

/// Read-only view of a [`HeadlessChart`] that outlives the chart.
#[derive(Debug, Clone)]
pub struct HeadlessRecorder {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_recorder() -> (Self, HeadlessRecorder) {
        let chart = Self::new();
        let recorder = chart.recorder();
        (chart, recorder)
    }

    #[must_use]
    pub fn recorder(&self) -> HeadlessRecorder {
        HeadlessRecorder {
            state: Rc::clone(&self.state),
        }
    }
}

impl ChartInstance for HeadlessChart {
    fn configure(&mut self, option: &ChartOption) -> ChartResult<()> {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            return Err(ChartError::Disposed);
        }
        option.validate()?;
        state.configure_count += 1;
        state.last_option = Some(option.clone());
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            return Err(ChartError::Disposed);
        }
        viewport.validate()?;
        state.resize_count += 1;
        state.last_viewport = Some(viewport);
        Ok(())
    }

    fn dispose(&mut self) {
        let mut state = self.state.borrow_mut();
        state.dispose_calls += 1;
        if !state.disposed {
            state.disposed = true;
            state.releases += 1;
        }
    }

    fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }
}

impl HeadlessRecorder {
    #[must_use]
    pub fn configure_count(&self) -> usize {
        self.state.borrow().configure_count
    }

    #[must_use]
    pub fn resize_count(&self) -> usize {
        self.state.borrow().resize_count
    }

    /// Calls to `dispose`, including repeated ones.
    #[must_use]
    pub fn dispose_calls(&self) -> usize {
        self.state.borrow().dispose_calls
    }

    /// Times resources were actually released; never exceeds one.
    #[must_use]
    pub fn releases(&self) -> usize {
        self.state.borrow().releases
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    #[must_use]
    pub fn last_viewport(&self) -> Option<Viewport> {
        self.state.borrow().last_viewport
    }

    #[must_use]
    pub fn last_option(&self) -> Option<ChartOption> {
        self.state.borrow().last_option.clone()
    }
}
