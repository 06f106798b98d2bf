//! Interest masks for descriptor watches.
//!
//! An [`Interest`] describes which readiness conditions a watch cares
//! about: readable, writable, or both. The mask is also the shape in
//! which readiness is reported back, so every path in the crate —
//! creation, mutation, delivery, queries — shares this one
//! representation.
//!
//! The public type is never empty. "No interests" and "no readiness"
//! are expressed as `Option<Interest>::None` by the APIs that can
//! reach that state; the empty mask itself only exists transiently
//! inside interest arithmetic.

use crate::error::Error;

use std::fmt;
use std::str::FromStr;

const READ_BIT: u8 = 0b01;
const WRITE_BIT: u8 = 0b10;

/// A non-empty set of readiness conditions.
///
/// The three values are [`Interest::READABLE`], [`Interest::WRITABLE`],
/// and [`Interest::BOTH`], written symbolically as `"r"`, `"w"`, and
/// `"rw"`. Parsing accepts exactly those three symbols.
///
/// # Examples
///
/// ```rust,ignore
/// let interest: Interest = "rw".parse()?;
/// assert!(interest.is_readable() && interest.is_writable());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interest(u8);

impl Interest {
    /// Interest in read readiness only.
    pub const READABLE: Interest = Interest(READ_BIT);

    /// Interest in write readiness only.
    pub const WRITABLE: Interest = Interest(WRITE_BIT);

    /// Interest in both read and write readiness.
    pub const BOTH: Interest = Interest(READ_BIT | WRITE_BIT);

    /// Returns true if the mask contains the read bit.
    pub fn is_readable(self) -> bool {
        self.0 & READ_BIT != 0
    }

    /// Returns true if the mask contains the write bit.
    pub fn is_writable(self) -> bool {
        self.0 & WRITE_BIT != 0
    }

    /// Union with another mask. Never empty, so never `None`.
    pub fn add(self, other: Interest) -> Interest {
        Interest(self.0 | other.0)
    }

    /// Subtracts `other` from this mask.
    ///
    /// Returns `None` when every bit was removed.
    pub fn remove(self, other: Interest) -> Option<Interest> {
        match self.0 & !other.0 {
            0 => None,
            bits => Some(Interest(bits)),
        }
    }

    /// Raw bit pattern of the mask.
    pub(crate) fn bits(self) -> u8 {
        self.0
    }

    /// Rebuilds a mask from a computed bit pattern.
    ///
    /// `Ok(None)` is the empty mask. Any pattern outside the four
    /// legal combinations is a logic fault in the caller and surfaces
    /// as [`Error::InterestOutOfRange`]; bitwise arithmetic on valid
    /// masks can never produce one.
    pub(crate) fn from_bits(bits: u8) -> Result<Option<Interest>, Error> {
        match bits {
            0 => Ok(None),
            b if b <= (READ_BIT | WRITE_BIT) => Ok(Some(Interest(b))),
            b => Err(Error::InterestOutOfRange(b)),
        }
    }

    fn symbol(self) -> &'static str {
        match (self.is_readable(), self.is_writable()) {
            (true, false) => "r",
            (false, true) => "w",
            (true, true) => "rw",
            // Unreachable for the public type; kept total for Debug.
            (false, false) => "none",
        }
    }
}

impl FromStr for Interest {
    type Err = Error;

    /// Parses one of the three symbolic forms `"r"`, `"w"`, `"rw"`.
    ///
    /// Any other symbol fails with [`Error::InvalidInterest`] naming
    /// the rejected value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Interest::READABLE),
            "w" => Ok(Interest::WRITABLE),
            "rw" => Ok(Interest::BOTH),
            other => Err(Error::InvalidInterest(other.to_string())),
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Debug for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Interest").field(&self.symbol()).finish()
    }
}
