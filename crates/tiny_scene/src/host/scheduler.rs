//! Frame scheduling primitives
//!
//! A [`FrameScheduler`] is the host's "call me before the next frame"
//! service. Sessions request one callback per tick and cancel the
//! outstanding one when they stop.

use std::cell::{Cell, RefCell};

/// Callback run once when its frame comes up
pub type FrameCallback = Box<dyn FnOnce()>;

/// Identifier returned by [`FrameScheduler::request_frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host per-frame callback service
///
/// Single-threaded: methods take `&self` and implementations use interior
/// mutability. An implementation must not hold internal borrows while a
/// callback runs, since callbacks request their successor from inside.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Drop a queued callback; unknown or already-run handles are ignored
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Scheduler driven explicitly by its owner
///
/// Callbacks queue up until [`ManualScheduler::run_frame`] is called. A
/// callback requested while a frame is running lands in the next frame.
/// Every requested and cancelled handle is recorded for inspection.
#[derive(Default)]
pub struct ManualScheduler {
    next_handle: Cell<u64>,
    pending: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    requested: RefCell<Vec<FrameHandle>>,
    cancelled: RefCell<Vec<FrameHandle>>,
}

impl ManualScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every callback that was pending when the call started
    ///
    /// Returns the number of callbacks invoked.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let mut invoked = 0;
        for (handle, callback) in batch {
            // A callback earlier in this batch may have cancelled a later one
            if self.cancelled.borrow().contains(&handle) {
                continue;
            }
            callback();
            invoked += 1;
        }
        invoked
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// All handles handed out, in order
    pub fn requested(&self) -> Vec<FrameHandle> {
        self.requested.borrow().clone()
    }

    /// Most recently handed-out handle
    pub fn last_requested(&self) -> Option<FrameHandle> {
        self.requested.borrow().last().copied()
    }

    /// All handles passed to `cancel_frame`, in order
    pub fn cancelled(&self) -> Vec<FrameHandle> {
        self.cancelled.borrow().clone()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_handle.get() + 1);
        self.next_handle.set(handle.0);
        self.pending.borrow_mut().push((handle, callback));
        self.requested.borrow_mut().push(handle);
        log::trace!("Frame {:?} requested", handle);
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().retain(|(pending, _)| *pending != handle);
        self.cancelled.borrow_mut().push(handle);
        log::trace!("Frame {:?} cancelled", handle);
    }
}
