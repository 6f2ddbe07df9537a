//! # Connection - a weak, clonable handle to one registration.
//!
//! A [`Connection`] is what [`Signal::connect`](crate::Signal::connect) returns. It holds
//! the observer id and a `Weak` reference to the signal's registry, nothing else.
//!
//! ## Rules
//! - A connection **never** keeps the signal alive.
//! - Every access to the registry is a `Weak::upgrade`; when the signal is gone the
//!   operation is a no-op, never an error and never a dangling access.
//! - Any disconnect attempt clears the connection, so later calls do nothing.
//! - Clones refer to the same registration. The first disconnect wins; the others find
//!   the id missing, which [`Connection::disconnect`] ignores and
//!   [`Connection::try_disconnect`] reports.
//!
//! ## Example
//! ```rust
//! use sigslot::{Connection, Signal};
//!
//! let mut conn: Connection;
//! {
//!     let sig: Signal<i32> = Signal::new();
//!     conn = sig.connect(|_| {});
//!     assert!(conn.is_connected());
//! } // signal dropped here
//!
//! assert!(!conn.is_connected());
//! conn.disconnect(); // no-op
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::debug;

use crate::connections::Slot;
use crate::core::{Detach, ObserverId};
use crate::error::SignalError;

/// Id plus non-owning registry reference.
#[derive(Clone)]
struct Link {
    id: ObserverId,
    registry: Weak<dyn Detach>,
}

/// Handle to one observer registration.
///
/// Cheap to clone. The default value is an empty connection that refers to nothing.
#[derive(Clone, Default)]
pub struct Connection {
    link: Option<Link>,
}

impl Connection {
    pub(crate) fn new(id: ObserverId, registry: Weak<dyn Detach>) -> Self {
        Self {
            link: Some(Link { id, registry }),
        }
    }

    /// Returns the observer id, or `None` once the connection was cleared.
    pub fn id(&self) -> Option<ObserverId> {
        self.link.as_ref().map(|link| link.id)
    }

    /// Returns true if the signal is alive and still has this observer.
    pub fn is_connected(&self) -> bool {
        self.link.as_ref().is_some_and(|link| {
            link.registry
                .upgrade()
                .is_some_and(|registry| registry.contains(link.id))
        })
    }

    /// Removes the observer from its signal. Never fails.
    ///
    /// - Empty connection or dropped signal: nothing happens.
    /// - Observer already removed (e.g. through a clone): ignored.
    ///
    /// The connection is empty afterwards.
    pub fn disconnect(&mut self) {
        if let Err(err) = self.try_disconnect() {
            debug!(error = %err, label = err.as_label(), "ignoring repeated disconnect");
        }
    }

    /// Removes the observer from its signal, reporting a missing observer.
    ///
    /// Returns:
    /// - `Ok(true)` - the observer was removed;
    /// - `Ok(false)` - nothing to do (empty connection, or the signal was dropped);
    /// - `Err(SignalError::NotFound)` - the signal is alive but no longer has the
    ///   observer, e.g. a clone of this connection disconnected first.
    ///
    /// The connection is empty afterwards in every case.
    ///
    /// # Example
    /// ```
    /// use sigslot::{Signal, SignalError};
    ///
    /// let sig: Signal<()> = Signal::new();
    /// let mut a = sig.connect(|_| {});
    /// let mut b = a.clone();
    ///
    /// assert_eq!(a.try_disconnect(), Ok(true));
    /// assert!(matches!(b.try_disconnect(), Err(SignalError::NotFound { .. })));
    /// assert_eq!(b.try_disconnect(), Ok(false));
    /// ```
    pub fn try_disconnect(&mut self) -> Result<bool, SignalError> {
        let Some(link) = self.link.take() else {
            return Ok(false);
        };
        let Some(registry) = link.registry.upgrade() else {
            debug!(id = %link.id, "signal already dropped; nothing to disconnect");
            return Ok(false);
        };
        registry.detach(link.id).map(|()| true)
    }

    /// Wraps the connection in a [`Slot`] that disconnects on drop.
    #[must_use = "dropping the returned Slot disconnects immediately"]
    pub fn scoped(self) -> Slot {
        Slot::from(self)
    }

    /// Upgraded registry and id, if both still exist.
    pub(crate) fn resolve(&self) -> Option<(ObserverId, Arc<dyn Detach>)> {
        let link = self.link.as_ref()?;
        link.registry.upgrade().map(|registry| (link.id, registry))
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.link {
            Some(link) => {
                let signal = link.registry.upgrade();
                f.debug_struct("Connection")
                    .field("id", &link.id)
                    .field("signal", &signal.as_ref().map(|r| r.label()))
                    .finish()
            }
            None => f.write_str("Connection(empty)"),
        }
    }
}
