//! The readiness monitor.
//!
//! A [`Monitor`] binds one file descriptor to the event loop of an
//! owning [`Selector`], tracks which interests it is watching for,
//! and records which of them became ready on the most recent poll
//! pass.
//!
//! Lifecycle:
//! - creation extracts the descriptor from an [`AsRawFd`] handle,
//!   builds the watch, and registers it with the selector's loop —
//!   the only path that adds a watch,
//! - interest mutations re-program the watch in place while the loop
//!   may be running,
//! - [`close`](Monitor::close) tears the watch down and unlinks the
//!   monitor from its selector; a closed monitor only answers
//!   readiness and closed-state queries.
//!
//! All operations run on the execution context that drives the
//! selector's poll cycle. The monitor performs no locking of its own;
//! readiness delivery happens synchronously inside the poll step, so
//! no call here ever races with it.

use crate::error::{Error, Result};
use crate::interest::Interest;
use crate::selector::{EventLoop, Selector, Watch};
use crate::sys::platform::sys_check_fd;

use std::any::Any;
use std::cell::RefCell;
use std::mem;
use std::os::fd::{AsRawFd, RawFd};
use std::rc::Rc;

/// Link to the owning selector.
///
/// `Closed` is the single source of truth for "this monitor is no
/// longer usable"; every entry point matches on it rather than on a
/// nullable field.
enum Link<S> {
    Open(Rc<RefCell<S>>),
    Closed,
}

/// One watch registration for one descriptor.
///
/// See the [module docs](self) for the lifecycle. The type parameter
/// is the owning selector; monitors hold it through a shared
/// single-threaded reference valid while open.
pub struct Monitor<S: Selector> {
    fd: RawFd,
    watch: Watch,
    interest: Option<Interest>,
    revents: Option<Interest>,
    link: Link<S>,
    value: Option<Box<dyn Any>>,
}

impl<S: Selector> Monitor<S> {
    /// Creates a monitor for `io`'s descriptor and registers it with
    /// the selector's event loop.
    ///
    /// `interest` is non-empty by construction — parse failures for
    /// unknown symbols happen in [`Interest::from_str`] before this
    /// call, and the empty set is not expressible at creation.
    ///
    /// # Errors
    ///
    /// [`Error::Descriptor`] when the handle's descriptor is closed
    /// or otherwise invalid. Nothing is registered in that case.
    ///
    /// [`Interest::from_str`]: std::str::FromStr::from_str
    pub fn new(io: &impl AsRawFd, interest: Interest, selector: Rc<RefCell<S>>) -> Result<Self> {
        let fd = io.as_raw_fd();
        sys_check_fd(fd).map_err(Error::Descriptor)?;

        let watch = Watch::new(fd, interest);
        if let Some(event_loop) = selector.borrow_mut().event_loop() {
            event_loop.register(&watch);
        }

        Ok(Self {
            fd,
            watch,
            interest: Some(interest),
            revents: None,
            link: Link::Open(selector),
            value: None,
        })
    }

    /// The watched descriptor. Fixed at creation.
    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// The interests currently registered with the loop, or `None`
    /// when watching has been disabled.
    pub fn interests(&self) -> Option<Interest> {
        self.interest
    }

    /// Records observed readiness.
    ///
    /// This is the delivery path the selector drives during its poll
    /// step, once per watch that reported activity, with the observed
    /// subset of the watched interests. The previous value is
    /// overwritten wholesale; the monitor never mutates it itself.
    pub fn deliver(&mut self, readiness: Interest) {
        self.revents = Some(readiness);
    }

    /// Readiness observed on the most recent poll pass, or `None` if
    /// none has been delivered yet.
    ///
    /// Stale between polls; still answers (with the last delivered
    /// value) after close.
    pub fn readiness(&self) -> Option<Interest> {
        self.revents
    }

    /// True if the last delivered readiness included the read bit.
    pub fn is_readable(&self) -> bool {
        self.revents.is_some_and(Interest::is_readable)
    }

    /// True if the last delivered readiness included the write bit.
    pub fn is_writable(&self) -> bool {
        self.revents.is_some_and(Interest::is_writable)
    }

    /// Replaces the watched interests wholesale.
    ///
    /// `None` disables watching: the watch is stopped and nothing is
    /// re-registered until a later mutation supplies a non-empty set.
    ///
    /// # Errors
    ///
    /// [`Error::Closed`] if the monitor has been closed. The call
    /// leaves no observable state change in that case.
    pub fn set_interests(&mut self, interest: Option<Interest>) -> Result<()> {
        self.update(interest.map_or(0, Interest::bits))
    }

    /// Adds `interest` to the watched set (bitwise union).
    ///
    /// # Errors
    ///
    /// [`Error::Closed`] if the monitor has been closed.
    pub fn add_interest(&mut self, interest: Interest) -> Result<()> {
        self.update(self.current_bits() | interest.bits())
    }

    /// Removes `interest` from the watched set (bitwise subtraction).
    ///
    /// Removing every active interest stops the watch, as with
    /// [`set_interests(None)`](Monitor::set_interests).
    ///
    /// # Errors
    ///
    /// [`Error::Closed`] if the monitor has been closed.
    pub fn remove_interest(&mut self, interest: Interest) -> Result<()> {
        self.update(self.current_bits() & !interest.bits())
    }

    /// Closes the monitor.
    ///
    /// Stops the watch (when interests are non-empty and the
    /// selector's loop is still alive), unlinks the monitor from its
    /// selector, and — unless `deregister` is `Some(false)` — asks
    /// the selector to drop its own bookkeeping entry for this
    /// descriptor. `None` defaults to deregistering.
    ///
    /// Idempotent: closing an already-closed monitor does nothing,
    /// including no second bookkeeping call.
    pub fn close(&mut self, deregister: Option<bool>) {
        let link = mem::replace(&mut self.link, Link::Closed);
        let Link::Open(selector) = link else {
            return;
        };

        let mut selector = selector.borrow_mut();
        if self.interest.is_some() {
            // The loop may already be gone after a whole-selector
            // shutdown; stopping a watch on a dead loop is not ours
            // to attempt.
            if let Some(event_loop) = selector.event_loop() {
                event_loop.deregister(self.fd);
            }
        }

        if deregister.unwrap_or(true) {
            selector.deregister(self.fd);
        }
    }

    /// True once the monitor has been closed.
    pub fn is_closed(&self) -> bool {
        matches!(self.link, Link::Closed)
    }

    /// The user-attached payload, if any.
    pub fn value(&self) -> Option<&dyn Any> {
        self.value.as_deref()
    }

    /// Attaches an arbitrary payload, replacing any previous one.
    /// Opaque to the monitor.
    pub fn set_value(&mut self, value: Box<dyn Any>) {
        self.value = Some(value);
    }

    /// Detaches and returns the payload.
    pub fn take_value(&mut self) -> Option<Box<dyn Any>> {
        self.value.take()
    }

    fn current_bits(&self) -> u8 {
        self.interest.map_or(0, Interest::bits)
    }

    /// The single interest-update routine behind every mutation.
    ///
    /// Ordering matters: the watch must be inactive while its
    /// registered mask changes, so a non-empty current mask is
    /// deregistered before the watch is re-paired, and the watch is
    /// only re-registered once it carries the new mask.
    fn update(&mut self, bits: u8) -> Result<()> {
        let selector = match &self.link {
            Link::Open(selector) => Rc::clone(selector),
            Link::Closed => return Err(Error::Closed),
        };

        // Validate before touching the loop or any state.
        let new = Interest::from_bits(bits)?;
        if new == self.interest {
            return Ok(());
        }

        let mut selector = selector.borrow_mut();
        if self.interest.is_some() {
            if let Some(event_loop) = selector.event_loop() {
                event_loop.deregister(self.fd);
            }
        }

        self.interest = new;
        if let Some(interest) = new {
            self.watch.set_interest(interest);
            if let Some(event_loop) = selector.event_loop() {
                event_loop.register(&self.watch);
            }
        }

        Ok(())
    }
}

impl<S: Selector> std::fmt::Debug for Monitor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("fd", &self.fd)
            .field("interest", &self.interest)
            .field("revents", &self.revents)
            .field("closed", &self.is_closed())
            .finish()
    }
}
