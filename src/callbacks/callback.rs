//! # Callback handle (`Callback`)
//!
//! [`Callback`] wraps an `Arc<dyn Fn(&A) + Send + Sync>` that may also be **unset**.
//! Closures can never be empty, so [`Signal::connect`](crate::Signal::connect) takes
//! them directly; `Callback` is for code that stores an observer in a field, a config,
//! or a builder, where "no callback yet" is a real state. Handing an unset callback to
//! [`Signal::try_connect`](crate::Signal::try_connect) fails with
//! [`SignalError::EmptyCallback`](crate::SignalError::EmptyCallback).
//!
//! ## Example
//! ```rust
//! use sigslot::{Callback, Signal, SignalError};
//!
//! let sig: Signal<i32> = Signal::new();
//!
//! let unset: Callback<i32> = Callback::default();
//! assert_eq!(sig.try_connect(unset).unwrap_err(), SignalError::EmptyCallback);
//!
//! let set = Callback::new(|v: &i32| assert_eq!(*v, 7));
//! sig.try_connect(set).unwrap();
//! assert_eq!(sig.emit(7), 1);
//! ```

use std::fmt;
use std::sync::Arc;

/// Observer function as stored in a registry.
pub(crate) type ObserverFn<A> = dyn Fn(&A) + Send + Sync;

/// A possibly-empty, cheaply clonable observer function.
///
/// Clones share the same function (`Arc`).
pub struct Callback<A> {
    f: Option<Arc<ObserverFn<A>>>,
}

impl<A> Callback<A> {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self {
            f: Some(Arc::new(f)),
        }
    }

    /// Returns an unset callback.
    pub fn empty() -> Self {
        Self { f: None }
    }

    /// Returns true if a function is set.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.f.is_some()
    }

    /// Invokes the function if set; returns whether it ran.
    ///
    /// # Example
    /// ```
    /// use sigslot::Callback;
    ///
    /// let cb = Callback::new(|v: &u8| assert_eq!(*v, 1));
    /// assert!(cb.call(&1));
    /// assert!(!Callback::<u8>::empty().call(&1));
    /// ```
    pub fn call(&self, args: &A) -> bool {
        match &self.f {
            Some(f) => {
                f(args);
                true
            }
            None => false,
        }
    }

    pub(crate) fn into_inner(self) -> Option<Arc<ObserverFn<A>>> {
        self.f
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<A> Default for Callback<A> {
    /// Returns an unset callback.
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_set())
            .finish()
    }
}
