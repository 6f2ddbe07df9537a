use std::borrow::Cow;

use crate::core::{DispatchMode, Signal, SignalConfig};

/// Builder for constructing a [`Signal`] with a custom [`SignalConfig`].
///
/// # Example
/// ```
/// use sigslot::{DispatchMode, Signal, SignalBuilder};
///
/// let sig: Signal<u32> = SignalBuilder::new()
///     .name("frame_ready")
///     .dispatch(DispatchMode::Snapshot)
///     .build();
///
/// assert_eq!(sig.config().label(), "frame_ready");
/// assert_eq!(sig.config().dispatch, DispatchMode::Snapshot);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SignalBuilder {
    cfg: SignalConfig,
}

impl SignalBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(cfg: SignalConfig) -> Self {
        Self { cfg }
    }

    /// Sets the name reported in log records.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.cfg.name = Some(name.into());
        self
    }

    /// Sets the dispatch mode used by `emit`.
    pub fn dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.cfg.dispatch = dispatch;
        self
    }

    /// Builds the signal. The builder can be cloned to create several alike.
    pub fn build<A: 'static>(self) -> Signal<A> {
        Signal::with_config(self.cfg)
    }
}
