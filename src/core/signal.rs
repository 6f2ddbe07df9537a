//! # Signal: the user-facing emitter handle.
//!
//! A [`Signal<A>`] owns (by `Arc`) one registry of observers taking `&A`. Several
//! arguments are passed as a tuple, none as `()` (the default).
//!
//! ## High-level architecture
//! ```text
//! connect(f)      ──► Registry::insert      ──► Connection { id, Weak<Registry> }
//! try_connect(cb) ──► Registry::connect     ──► Err(EmptyCallback) | Connection
//! disconnect(&c)  ──► owner check           ──► Registry::disconnect (strict)
//! emit(args)      ──► Registry::emit(&args) ──► observers in id order ──► count
//!
//! drop(Signal)    ──► last Arc released ──► registry + observers dropped
//!                     (connections/slots referencing it turn inert)
//! ```
//!
//! ## Rules
//! - `Signal` is not `Clone`. Moving it keeps ids and order untouched.
//! - [`Signal::disconnect`] is the **strict** path: a foreign connection is
//!   [`SignalError::Mismatched`], a missing id is [`SignalError::NotFound`].
//!   Use [`Connection::disconnect`] or a [`Slot`](crate::Slot) for the forgiving path.
//! - Observers run on the emitting thread. With the default
//!   [`DispatchMode::Locked`](crate::DispatchMode::Locked) they must not call back
//!   into the same signal.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use sigslot::Signal;
//!
//! let sig: Signal<(String, i32)> = Signal::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let s = Arc::clone(&seen);
//! let mut conn = sig.connect(move |(text, n)| s.lock().unwrap().push(format!("{text}={n}")));
//!
//! assert_eq!(sig.emit(("answer".to_string(), 42)), 1);
//! conn.disconnect();
//! assert_eq!(sig.emit(("ignored".to_string(), 0)), 0);
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["answer=42".to_string()]);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::debug;

use crate::callbacks::{Callback, ObserverFn};
use crate::connections::Connection;
use crate::core::registry::{Detach, Registry};
use crate::core::SignalConfig;
use crate::error::SignalError;

/// Thread-safe multicast emitter.
///
/// `Signal<A>` is `Send + Sync`; share it by reference or inside an `Arc` of the
/// enclosing type. Observers are `Fn(&A) + Send + Sync + 'static`.
pub struct Signal<A = ()> {
    registry: Arc<Registry<A>>,
}

impl<A: 'static> Signal<A> {
    /// Creates a signal with the default [`SignalConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SignalConfig::default())
    }

    /// Creates a signal with an explicit configuration.
    #[must_use]
    pub fn with_config(config: SignalConfig) -> Self {
        Self {
            registry: Arc::new(Registry::new(config)),
        }
    }

    /// Returns the configuration the signal was created with.
    pub fn config(&self) -> &SignalConfig {
        self.registry.config()
    }

    /// Registers a closure and returns its [`Connection`].
    ///
    /// Closures are never "unset", so this cannot fail.
    pub fn connect<F>(&self, f: F) -> Connection
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        let f: Arc<ObserverFn<A>> = Arc::new(f);
        let id = self.registry.insert(f);
        Connection::new(id, self.downgrade())
    }

    /// Registers a [`Callback`] and returns its [`Connection`].
    ///
    /// Fails with [`SignalError::EmptyCallback`] if the callback is unset.
    pub fn try_connect(&self, callback: Callback<A>) -> Result<Connection, SignalError> {
        let id = self.registry.connect(callback)?;
        Ok(Connection::new(id, self.downgrade()))
    }

    /// Removes the observer behind `connection` (strict path).
    ///
    /// - Empty connection, or its signal was dropped: `Ok(())`, nothing happens.
    /// - Connection issued by another signal: [`SignalError::Mismatched`].
    /// - Observer no longer registered here: [`SignalError::NotFound`].
    ///
    /// The passed connection is left untouched.
    ///
    /// # Example
    /// ```
    /// use sigslot::{Signal, SignalError};
    ///
    /// let sig: Signal = Signal::new();
    /// let conn = sig.connect(|_| {});
    ///
    /// sig.disconnect(&conn).unwrap();
    /// assert!(matches!(sig.disconnect(&conn), Err(SignalError::NotFound { .. })));
    /// ```
    pub fn disconnect(&self, connection: &Connection) -> Result<(), SignalError> {
        let Some((id, registry)) = connection.resolve() else {
            debug!(signal = %self.config().label(), "disconnect of inert connection ignored");
            return Ok(());
        };
        if !std::ptr::addr_eq(Arc::as_ptr(&registry), Arc::as_ptr(&self.registry)) {
            return Err(SignalError::Mismatched { id });
        }
        self.registry.disconnect(id)
    }

    /// Invokes every observer with `&args`, in registration order.
    ///
    /// Returns the number of observers invoked. Never fails; a panicking observer
    /// unwinds through this call.
    pub fn emit(&self, args: A) -> usize {
        self.registry.emit(&args)
    }

    /// Same as [`emit`](Self::emit) for callers that only hold a reference.
    pub fn emit_ref(&self, args: &A) -> usize {
        self.registry.emit(args)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observer_count() == 0
    }

    /// Removes every observer; returns how many were removed.
    ///
    /// Outstanding connections and slots become no-ops.
    pub fn disconnect_all(&self) -> usize {
        self.registry.clear()
    }

    fn downgrade(&self) -> Weak<dyn Detach> {
        let weak: Weak<Registry<A>> = Arc::downgrade(&self.registry);
        weak
    }
}

impl<A: 'static> Default for Signal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Signal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.registry.config().label())
            .field("dispatch", &self.registry.config().dispatch)
            .field("observers", &self.registry.len())
            .finish()
    }
}
