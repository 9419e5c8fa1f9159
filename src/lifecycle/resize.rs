use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use tracing::trace;

use crate::core::Viewport;

type ResizeHandler = Box<dyn FnMut(Viewport)>;

struct ListenerTable {
    next_id: u64,
    window: Viewport,
    listeners: IndexMap<u64, ResizeHandler>,
    dispatching: bool,
    parked_count: usize,
    removed_while_dispatching: Vec<u64>,
}

impl ListenerTable {
    fn remove(&mut self, id: u64) -> bool {
        if self.listeners.shift_remove(&id).is_some() {
            return true;
        }
        // While dispatching, listeners are parked outside the table.
        if self.dispatching && !self.removed_while_dispatching.contains(&id) {
            self.removed_while_dispatching.push(id);
            return true;
        }
        false
    }
}

/// Window resize notifications, delivered in subscription order.
///
/// Clones share the same listener set.
#[derive(Clone)]
pub struct ResizeEvents {
    table: Rc<RefCell<ListenerTable>>,
}

impl ResizeEvents {
    #[must_use]
    pub fn new(window: Viewport) -> Self {
        Self {
            table: Rc::new(RefCell::new(ListenerTable {
                next_id: 0,
                window,
                listeners: IndexMap::new(),
                dispatching: false,
                parked_count: 0,
                removed_while_dispatching: Vec::new(),
            })),
        }
    }

    /// Latest window size seen by this registry.
    #[must_use]
    pub fn window(&self) -> Viewport {
        self.table.borrow().window
    }

    /// Subscribed listeners, including the ones an ongoing emit is notifying.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let table = self.table.borrow();
        let parked = table
            .parked_count
            .saturating_sub(table.removed_while_dispatching.len());
        table.listeners.len() + parked
    }

    /// Registers `handler`; it stays registered until the returned
    /// subscription is unsubscribed or dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, handler: F) -> ResizeSubscription
    where
        F: FnMut(Viewport) + 'static,
    {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.listeners.insert(id, Box::new(handler));
        trace!(listener = id, "resize listener subscribed");

        ResizeSubscription {
            id,
            table: Rc::downgrade(&self.table),
            active: true,
        }
    }

    /// Records the new window size and notifies every listener.
    ///
    /// Returns the number of listeners notified. Listeners may unsubscribe
    /// (themselves or others) or subscribe new listeners while being
    /// notified; new listeners first hear the next emit. A nested emit only
    /// records the window size.
    pub fn emit(&self, window: Viewport) -> usize {
        let mut dispatch = {
            let mut table = self.table.borrow_mut();
            table.window = window;
            if table.dispatching {
                trace!("nested resize emit ignored");
                return 0;
            }
            table.dispatching = true;
            let parked = std::mem::take(&mut table.listeners);
            table.parked_count = parked.len();
            Dispatch {
                table: &self.table,
                parked,
            }
        };

        let mut notified = 0;
        for (id, handler) in &mut dispatch.parked {
            if self.table.borrow().removed_while_dispatching.contains(id) {
                continue;
            }
            handler(window);
            notified += 1;
        }
        drop(dispatch);

        trace!(
            width = window.width,
            height = window.height,
            notified,
            "resize emitted"
        );
        notified
    }
}

/// Listeners parked for one emit. Dropping it puts them back, also when a
/// listener panics.
struct Dispatch<'a> {
    table: &'a RefCell<ListenerTable>,
    parked: IndexMap<u64, ResizeHandler>,
}

impl Drop for Dispatch<'_> {
    fn drop(&mut self) {
        let Ok(mut table) = self.table.try_borrow_mut() else {
            return;
        };
        let removed = std::mem::take(&mut table.removed_while_dispatching);
        let mut parked = std::mem::take(&mut self.parked);
        parked.retain(|id, _| !removed.contains(id));
        let added = std::mem::replace(&mut table.listeners, parked);
        table.listeners.extend(added);
        table.parked_count = 0;
        table.dispatching = false;
    }
}

impl fmt::Debug for ResizeEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.borrow();
        f.debug_struct("ResizeEvents")
            .field("window", &table.window)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration handle returned by [`ResizeEvents::subscribe`].
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
    active: bool,
}

impl ResizeSubscription {
    /// Removes the listener. Returns `true` only for the call that actually
    /// unsubscribed.
    pub fn unsubscribe(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().remove(self.id);
        }
        trace!(listener = self.id, "resize listener unsubscribed");
        true
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
