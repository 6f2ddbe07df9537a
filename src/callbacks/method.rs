//! # Method-backed callbacks.
//!
//! [`bind_method`] adapts a receiver plus one of its methods into a [`Callback`].
//! This is a pure value transform: the signal knows nothing about the receiver.
//!
//! ## Lifetime semantics
//! - [`bind_method`] moves an `Arc<R>` into the callback: the receiver lives at least as
//!   long as the observer stays connected.
//! - [`bind_weak`] stores a `Weak<R>`: once the receiver is dropped the callback becomes
//!   a silent no-op (it still counts as invoked by `emit`). Pair it with a
//!   [`Slot`](crate::Slot) held by the receiver to also remove the observer.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use sigslot::{Signal, bind_method};
//!
//! #[derive(Default)]
//! struct Counter {
//!     count: AtomicU32,
//! }
//!
//! impl Counter {
//!     fn increment(&self, _: &()) {
//!         self.count.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = Arc::new(Counter::default());
//! let sig: Signal = Signal::new();
//! sig.try_connect(bind_method(Arc::clone(&counter), Counter::increment)).unwrap();
//!
//! sig.emit(());
//! assert_eq!(counter.count.load(Ordering::Relaxed), 1);
//! ```

use std::sync::{Arc, Weak};

use crate::callbacks::Callback;

/// Binds `method` to a shared `receiver`.
///
/// The returned callback owns a strong reference to the receiver.
pub fn bind_method<R, A>(receiver: Arc<R>, method: fn(&R, &A)) -> Callback<A>
where
    R: Send + Sync + 'static,
    A: 'static,
{
    Callback::new(move |args: &A| method(&receiver, args))
}

/// Binds `method` to a receiver without keeping it alive.
///
/// Calls made after the receiver was dropped are skipped.
pub fn bind_weak<R, A>(receiver: &Arc<R>, method: fn(&R, &A)) -> Callback<A>
where
    R: Send + Sync + 'static,
    A: 'static,
{
    let receiver: Weak<R> = Arc::downgrade(receiver);
    Callback::new(move |args: &A| {
        if let Some(receiver) = receiver.upgrade() {
            method(&receiver, args);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[derive(Default)]
    struct Accumulator {
        total: AtomicI64,
    }

    impl Accumulator {
        fn add(&self, v: &i64) {
            self.total.fetch_add(*v, Ordering::SeqCst);
        }

        fn sub(&self, v: &i64) {
            self.total.fetch_sub(*v, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_bound_method_is_invoked() {
        let acc = Arc::new(Accumulator::default());
        let add = bind_method(Arc::clone(&acc), Accumulator::add);
        let sub = bind_method(Arc::clone(&acc), Accumulator::sub);

        add.call(&10);
        sub.call(&3);
        assert_eq!(acc.total.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_bind_method_keeps_receiver_alive() {
        let acc = Arc::new(Accumulator::default());
        let cb = bind_method(Arc::clone(&acc), Accumulator::add);
        assert_eq!(Arc::strong_count(&acc), 2);
        drop(cb);
        assert_eq!(Arc::strong_count(&acc), 1);
    }

    #[test]
    fn test_bind_weak_skips_dropped_receiver() {
        let acc = Arc::new(Accumulator::default());
        let cb = bind_weak(&acc, Accumulator::add);
        assert_eq!(Arc::strong_count(&acc), 1);

        cb.call(&5);
        assert_eq!(acc.total.load(Ordering::SeqCst), 5);

        drop(acc);
        // Still callable, does nothing.
        assert!(cb.call(&5));
    }
}
