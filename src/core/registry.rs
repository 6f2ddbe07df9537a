//! # Observer registry - the shared state behind every signal.
//!
//! [`Registry`] owns the ordered observer map and the only lock of a signal.
//! A [`Signal`](crate::Signal) holds it by `Arc`; connections reach it through a
//! `Weak<dyn Detach>` so they never keep it alive.
//!
//! ## Architecture
//! ```text
//! Signal<A> ──Arc──► Registry<A> ◄──Weak<dyn Detach>── Connection (any number of copies)
//!                      │
//!                      └─ Mutex<Entries<A>>
//!                           ├─ issued: u64                       (pre-increment counter)
//!                           └─ observers: BTreeMap<ObserverId, Arc<ObserverFn<A>>>
//! ```
//!
//! ## Rules
//! - Ids are strictly increasing and never reused; map order == registration order.
//! - connect / disconnect / emit all take the same mutex.
//! - Under [`DispatchMode::Locked`](crate::DispatchMode::Locked) the mutex stays held
//!   while observers run; under [`DispatchMode::Snapshot`](crate::DispatchMode::Snapshot)
//!   it is released before the first call.
//! - The lock is a `parking_lot::Mutex`: a panicking observer unwinds through `emit`
//!   without poisoning the registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::callbacks::{Callback, ObserverFn};
use crate::core::{ObserverId, SignalConfig};
use crate::error::SignalError;

/// Type-erased view of a registry, as seen by [`Connection`](crate::Connection).
///
/// Connections are not generic over the signal's argument type, so they talk to the
/// registry only through this trait.
pub(crate) trait Detach: Send + Sync {
    /// Removes observer `id`; `NotFound` if it is not registered.
    fn detach(&self, id: ObserverId) -> Result<(), SignalError>;

    /// Returns true if observer `id` is currently registered.
    fn contains(&self, id: ObserverId) -> bool;

    /// Label of the owning signal, for logs.
    fn label(&self) -> &str;
}

/// Mutable part of the registry, guarded by its mutex.
struct Entries<A> {
    /// Number of ids handed out so far.
    issued: u64,
    /// Live observers keyed by id.
    observers: BTreeMap<ObserverId, Arc<ObserverFn<A>>>,
}

impl<A> Entries<A> {
    fn next_id(&mut self) -> ObserverId {
        let id = ObserverId::after(self.issued);
        self.issued += 1;
        id
    }
}

/// Ordered, lock-protected map of observers.
pub(crate) struct Registry<A> {
    entries: Mutex<Entries<A>>,
    config: SignalConfig,
}

impl<A> Registry<A> {
    /// Creates an empty registry.
    pub(crate) fn new(config: SignalConfig) -> Self {
        Self {
            entries: Mutex::new(Entries {
                issued: 0,
                observers: BTreeMap::new(),
            }),
            config,
        }
    }

    /// Configuration the registry was created with.
    pub(crate) fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Registers a callback and returns its new id.
    ///
    /// Fails with [`SignalError::EmptyCallback`] when the callback is unset.
    pub(crate) fn connect(&self, callback: Callback<A>) -> Result<ObserverId, SignalError> {
        let f = callback.into_inner().ok_or(SignalError::EmptyCallback)?;
        Ok(self.insert(f))
    }

    /// Registers an already-validated observer function.
    pub(crate) fn insert(&self, f: Arc<ObserverFn<A>>) -> ObserverId {
        let mut entries = self.entries.lock();
        let id = entries.next_id();
        entries.observers.insert(id, f);
        drop(entries);

        trace!(signal = %self.config.label(), %id, "observer connected");
        id
    }

    /// Removes observer `id`.
    pub(crate) fn disconnect(&self, id: ObserverId) -> Result<(), SignalError> {
        let removed = self.entries.lock().observers.remove(&id);
        match removed {
            Some(_f) => {
                trace!(signal = %self.config.label(), %id, "observer disconnected");
                Ok(())
            }
            None => Err(SignalError::NotFound { id }),
        }
    }

    /// Invokes every observer in id order and returns how many ran.
    pub(crate) fn emit(&self, args: &A) -> usize {
        let count = if self.config.dispatch.holds_lock() {
            let entries = self.entries.lock();
            for f in entries.observers.values() {
                f(args);
            }
            entries.observers.len()
        } else {
            let snapshot: Vec<Arc<ObserverFn<A>>> =
                self.entries.lock().observers.values().cloned().collect();
            for f in &snapshot {
                f(args);
            }
            snapshot.len()
        };

        trace!(signal = %self.config.label(), count, "signal emitted");
        count
    }

    /// Number of registered observers.
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().observers.len()
    }

    /// Removes every observer and returns how many were removed.
    ///
    /// The id counter is kept, so ids are still never reused.
    pub(crate) fn clear(&self) -> usize {
        // Observers are dropped after the lock is released.
        let drained = std::mem::take(&mut self.entries.lock().observers);
        trace!(signal = %self.config.label(), count = drained.len(), "observers cleared");
        drained.len()
    }
}

impl<A: 'static> Detach for Registry<A> {
    fn detach(&self, id: ObserverId) -> Result<(), SignalError> {
        self.disconnect(id)
    }

    fn contains(&self, id: ObserverId) -> bool {
        self.entries.lock().observers.contains_key(&id)
    }

    fn label(&self) -> &str {
        self.config.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DispatchMode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(hits: &Arc<AtomicUsize>) -> Callback<u32> {
        let hits = Arc::clone(hits);
        Callback::new(move |_: &u32| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_ids_increase_and_are_not_reused() {
        let reg: Registry<u32> = Registry::new(SignalConfig::default());
        let hits = Arc::new(AtomicUsize::new(0));

        let a = reg.connect(counting(&hits)).unwrap();
        let b = reg.connect(counting(&hits)).unwrap();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);

        reg.disconnect(b).unwrap();
        let c = reg.connect(counting(&hits)).unwrap();
        assert_eq!(c.get(), 3);
    }

    #[test]
    fn test_empty_callback_is_rejected() {
        let reg: Registry<u32> = Registry::new(SignalConfig::default());
        assert_eq!(
            reg.connect(Callback::empty()),
            Err(SignalError::EmptyCallback)
        );
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn test_disconnect_missing_id_is_not_found() {
        let reg: Registry<u32> = Registry::new(SignalConfig::default());
        let id = ObserverId::after(0);
        assert_eq!(reg.disconnect(id), Err(SignalError::NotFound { id }));
    }

    #[test]
    fn test_emit_counts_and_orders() {
        let reg: Registry<u32> = Registry::new(SignalConfig::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ['a', 'b', 'c'] {
            let seen = Arc::clone(&seen);
            reg.connect(Callback::new(move |v: &u32| seen.lock().push((tag, *v))))
                .unwrap();
        }

        assert_eq!(reg.emit(&5), 3);
        assert_eq!(*seen.lock(), vec![('a', 5), ('b', 5), ('c', 5)]);
    }

    #[test]
    fn test_emit_on_empty_registry_returns_zero() {
        let reg: Registry<()> = Registry::new(SignalConfig::default());
        assert_eq!(reg.emit(&()), 0);
    }

    #[test]
    fn test_clear_keeps_counter() {
        let reg: Registry<u32> = Registry::new(SignalConfig::default());
        let hits = Arc::new(AtomicUsize::new(0));
        reg.connect(counting(&hits)).unwrap();
        reg.connect(counting(&hits)).unwrap();

        assert_eq!(reg.clear(), 2);
        assert_eq!(reg.emit(&0), 0);
        assert_eq!(reg.connect(counting(&hits)).unwrap().get(), 3);
    }

    #[test]
    fn test_detach_view_matches_registry() {
        let reg: Registry<u32> = Registry::new(SignalConfig {
            name: Some("clicks".into()),
            ..SignalConfig::default()
        });
        let hits = Arc::new(AtomicUsize::new(0));
        let id = reg.connect(counting(&hits)).unwrap();

        let view: &dyn Detach = &reg;
        assert_eq!(view.label(), "clicks");
        assert!(view.contains(id));
        view.detach(id).unwrap();
        assert!(!view.contains(id));
        assert_eq!(view.detach(id), Err(SignalError::NotFound { id }));
    }

    #[test]
    fn test_snapshot_dispatch_allows_reentry() {
        let reg = Arc::new(Registry::<u32>::new(SignalConfig {
            dispatch: DispatchMode::Snapshot,
            ..SignalConfig::default()
        }));
        let inner = Arc::downgrade(&reg);
        reg.connect(Callback::new(move |_: &u32| {
            // Would deadlock under DispatchMode::Locked.
            if let Some(reg) = inner.upgrade() {
                assert_eq!(reg.len(), 1);
            }
        }))
        .unwrap();

        assert_eq!(reg.emit(&1), 1);
    }
}
