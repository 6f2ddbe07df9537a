//! Per-signal observer identifiers.

use std::fmt;
use std::num::NonZeroU64;

/// Identifier of one registration inside one signal.
///
/// Ids are issued by pre-incrementing a per-signal counter: the first observer gets `1`,
/// ids strictly increase, and an id is never reissued by the same signal even after the
/// observer it named was disconnected. Ids from different signals are unrelated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(NonZeroU64);

impl ObserverId {
    /// Id for the observer registered after `issued` earlier ones.
    pub(crate) const fn after(issued: u64) -> Self {
        Self(NonZeroU64::MIN.saturating_add(issued))
    }

    /// Returns the numeric value (always `>= 1`).
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
