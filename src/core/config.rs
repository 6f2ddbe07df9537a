//! # Per-signal configuration.
//!
//! Provides [`SignalConfig`] settings fixed when a [`Signal`](crate::Signal) is created,
//! and [`DispatchMode`] which selects how `emit` treats the registry lock.
//!
//! Config is used in two ways:
//! 1. **Direct construction**: `Signal::with_config(config)`
//! 2. **Builder**: [`SignalBuilder`](crate::SignalBuilder) fills the same fields
//!
//! ## Choosing a dispatch mode
//! ```text
//! DispatchMode::Locked    → lock held for the whole emit (default)
//!                           observers see a frozen list; re-entry deadlocks
//! DispatchMode::Snapshot  → observers cloned out under the lock, called unlocked
//!                           re-entry allowed; concurrent disconnect may miss one emit
//! ```

use std::borrow::Cow;

/// Strategy used by `emit` to invoke observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DispatchMode {
    /// Hold the registry mutex while every observer runs (default).
    ///
    /// No connect/disconnect can interleave with an emission, so each emission sees
    /// one consistent observer list. The cost:
    ///   - a slow observer blocks every other operation on the signal;
    ///   - an observer that calls back into the **same** signal deadlocks.
    #[default]
    Locked,
    /// Clone the observer list under the mutex, release it, then invoke.
    ///
    /// Observers may connect, disconnect or emit on the same signal. An observer
    /// disconnected while an emission is in flight can still run once in that emission.
    Snapshot,
}

impl DispatchMode {
    /// Returns `true` when observers run while the registry lock is held.
    #[inline]
    pub fn holds_lock(self) -> bool {
        matches!(self, DispatchMode::Locked)
    }
}

/// Configuration of a single signal.
///
/// ## Field semantics
/// - `name`: Optional label attached to log records (`None` = `"signal"`)
/// - `dispatch`: Emission strategy, see [`DispatchMode`]
///
/// ## Notes
/// All fields are public. Prefer [`SignalConfig::label`] over matching on `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignalConfig {
    /// Human-readable name used in tracing fields.
    pub name: Option<Cow<'static, str>>,

    /// How `emit` invokes observers.
    pub dispatch: DispatchMode,
}

impl SignalConfig {
    /// Label used when a signal has no explicit name.
    pub const DEFAULT_LABEL: &'static str = "signal";

    /// Returns the configured name, or [`Self::DEFAULT_LABEL`].
    ///
    /// # Example
    /// ```
    /// use sigslot::SignalConfig;
    ///
    /// let mut cfg = SignalConfig::default();
    /// assert_eq!(cfg.label(), "signal");
    ///
    /// cfg.name = Some("mouse_moved".into());
    /// assert_eq!(cfg.label(), "mouse_moved");
    /// ```
    #[inline]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(Self::DEFAULT_LABEL)
    }
}
