//! # Slot - scoped ownership of one connection.
//!
//! A [`Slot`] owns a [`Connection`] and disconnects it when the slot is dropped or
//! overwritten. Store it next to the state the observer touches and the observer goes
//! away together with that state, in whatever order the signal itself is dropped.
//!
//! ## Rules
//! - A slot is move-only (`Clone` is not implemented): exactly one slot is responsible
//!   for a given connection.
//! - Drop, [`Slot::disconnect`], [`Slot::replace`] and plain assignment all funnel into
//!   [`Connection::disconnect`]: idempotent, never fails, safe after the signal is gone.
//! - Moving a slot moves the responsibility; the moved-from binding is gone, so nothing
//!   is disconnected twice.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use sigslot::{Signal, Slot};
//!
//! let sig: Signal = Signal::new();
//! let hits = Arc::new(AtomicU32::new(0));
//!
//! {
//!     let h = Arc::clone(&hits);
//!     let _slot: Slot = sig.connect(move |_| { h.fetch_add(1, Ordering::Relaxed); }).into();
//!     sig.emit(());
//! } // slot dropped: observer removed
//!
//! assert_eq!(sig.emit(()), 0);
//! assert_eq!(hits.load(Ordering::Relaxed), 1);
//! ```

use std::fmt;

use crate::connections::Connection;

/// Move-only owner of a [`Connection`] that disconnects on drop.
#[derive(Default)]
#[must_use = "dropping a Slot disconnects its observer immediately"]
pub struct Slot {
    connection: Connection,
}

impl Slot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the owned connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Returns true if the slot holds a live registration.
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Disconnects now instead of at drop. Safe to call any number of times.
    pub fn disconnect(&mut self) {
        self.connection.disconnect();
    }

    /// Disconnects the current connection, then takes ownership of `connection`.
    pub fn replace(&mut self, connection: Connection) {
        self.connection.disconnect();
        self.connection = connection;
    }

    /// Gives up ownership without disconnecting.
    ///
    /// # Example
    /// ```
    /// use sigslot::{Signal, Slot};
    ///
    /// let sig: Signal<u8> = Signal::new();
    /// let slot = Slot::from(sig.connect(|_| {}));
    /// let conn = slot.release();
    ///
    /// assert!(conn.is_connected());
    /// assert_eq!(sig.emit(1), 1);
    /// ```
    pub fn release(mut self) -> Connection {
        std::mem::take(&mut self.connection)
    }
}

impl From<Connection> for Slot {
    fn from(connection: Connection) -> Self {
        Self { connection }
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.connection.disconnect();
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.connection).finish()
    }
}
