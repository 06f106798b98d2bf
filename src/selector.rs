//! The selector boundary.
//!
//! A monitor does not poll anything itself. It programs a watch into
//! an event loop owned by a selector, and the selector feeds observed
//! readiness back through [`Monitor::deliver`]. This module defines
//! that boundary:
//!
//! - [`Watch`]: the registration record the loop holds for one
//!   descriptor,
//! - [`EventLoop`]: the loop surface the monitor programs against,
//! - [`Selector`]: the owner of the loop and of its own
//!   descriptor-to-monitor bookkeeping.
//!
//! The poll/wait loop itself, its timer handling, and the selector's
//! monitor table are out of scope for this crate; any reactor with
//! register/deregister watch primitives can implement these traits.
//!
//! [`Monitor::deliver`]: crate::Monitor::deliver

use crate::interest::Interest;

use std::os::fd::RawFd;

/// The loop-side registration record for one descriptor.
///
/// A watch pairs a descriptor with the interest mask currently
/// registered for it. The monitor keeps this record in sync with its
/// own interests; the two only diverge transiently inside an interest
/// update, while the watch is deregistered.
///
/// The descriptor is the watch's identity: it never changes after
/// construction, and the loop uses it to route readiness back to the
/// owning monitor.
#[derive(Debug, Clone, Copy)]
pub struct Watch {
    fd: RawFd,
    interest: Interest,
}

impl Watch {
    pub(crate) fn new(fd: RawFd, interest: Interest) -> Self {
        Self { fd, interest }
    }

    /// The watched descriptor.
    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// The interest mask registered with the loop.
    pub fn interest(&self) -> Interest {
        self.interest
    }

    /// Re-pairs the watch with a new interest mask.
    ///
    /// Only called while the watch is not registered with the loop;
    /// loops may not tolerate an active watch changing its mask.
    pub(crate) fn set_interest(&mut self, interest: Interest) {
        self.interest = interest;
    }
}

/// The event-loop surface a monitor programs its watch against.
///
/// Implementations wrap whatever backend drives readiness
/// (epoll, kqueue, a test double). Both operations are infallible at
/// this boundary: a loop that cannot honor a registration is expected
/// to surface that through its own poll step, not here.
pub trait EventLoop {
    /// Adds the watch's descriptor/interest pairing to the loop.
    ///
    /// The loop must report observed readiness for this descriptor on
    /// every subsequent poll pass until it is deregistered.
    fn register(&mut self, watch: &Watch);

    /// Removes the descriptor from the loop.
    ///
    /// After this returns the loop must no longer report readiness
    /// for the descriptor.
    fn deregister(&mut self, fd: RawFd);
}

/// The owner of an event loop and of the monitors watching through it.
///
/// A monitor holds a shared reference to its selector while open and
/// reaches the loop only through [`Selector::event_loop`]. Selectors
/// additionally keep their own descriptor-to-monitor table — dropped
/// through [`Selector::deregister`] on monitor close — and are
/// responsible for calling [`Monitor::deliver`] for every watch that
/// reported activity during a poll pass.
///
/// [`Monitor::deliver`]: crate::Monitor::deliver
pub trait Selector {
    /// The loop backend this selector drives.
    type Loop: EventLoop;

    /// The live event loop, or `None` once the selector as a whole
    /// has shut down.
    ///
    /// Monitors check this before every watch start/stop so that a
    /// monitor outliving its selector's loop never programs a dead
    /// backend.
    fn event_loop(&mut self) -> Option<&mut Self::Loop>;

    /// Drops the selector's own bookkeeping entry for a descriptor.
    ///
    /// Distinct from [`EventLoop::deregister`]: this removes the
    /// descriptor-to-monitor association, not the OS-level watch.
    fn deregister(&mut self, fd: RawFd);
}
