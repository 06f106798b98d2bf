//! # Vigilis
//!
//! **Vigilis** is a single-descriptor I/O readiness monitor: the
//! building block a selector-based event loop hands out for each
//! stream or socket it watches.
//!
//! A [`Monitor`] binds one file descriptor to its selector's loop,
//! tracks which interests (readable, writable, or both) it is
//! watching for, and records which of them became ready on the most
//! recent poll pass. The crate owns the monitor's lifecycle and
//! interest-mutation protocol; the loop itself stays on the other
//! side of the [`Selector`] and [`EventLoop`] traits, so any reactor
//! with register/deregister watch primitives can drive it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vigilis::{Interest, Monitor};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let selector = Rc::new(RefCell::new(my_selector));
//! let socket = std::net::TcpStream::connect("127.0.0.1:4000")?;
//!
//! // Watch for readability, later widen to both directions.
//! let mut monitor = Monitor::new(&socket, "r".parse()?, selector)?;
//! monitor.add_interest(Interest::WRITABLE)?;
//!
//! // After the selector's poll pass delivered readiness:
//! if monitor.is_readable() {
//!     // read from the socket...
//! }
//!
//! monitor.close(None);
//! ```
//!
//! ## Modules
//!
//! - [`Interest`] — the readable/writable interest mask and its
//!   symbolic `"r"` / `"w"` / `"rw"` forms
//! - [`Monitor`] — one watch registration: creation, interest
//!   mutation, readiness queries, close
//! - [`selector`] — the [`Selector`] / [`EventLoop`] boundary and the
//!   [`Watch`] registration record
//! - [`Error`] — the crate's error kinds

mod monitor;
mod sys;

pub mod error;
pub mod interest;
pub mod selector;

pub use error::{Error, Result};
pub use interest::Interest;
pub use monitor::Monitor;
pub use selector::{EventLoop, Selector, Watch};
