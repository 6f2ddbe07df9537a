//! Signal core: registry, emitter handle and configuration.
//!
//! The public API from this module is [`Signal`], [`SignalBuilder`], [`SignalConfig`],
//! [`DispatchMode`] and [`ObserverId`].
//!
//! Internal modules:
//! - [`registry`]: ordered observer map behind a single mutex; type-erased as `Detach`;
//! - [`signal`]: the emitter handle owning the registry;
//! - [`config`]: per-signal settings and dispatch strategy;
//! - [`builder`]: fluent construction of a configured signal;
//! - [`observer_id`]: monotonically issued observer ids.

mod builder;
mod config;
mod observer_id;
mod registry;
mod signal;

pub use builder::SignalBuilder;
pub use config::{DispatchMode, SignalConfig};
pub use observer_id::ObserverId;
pub(crate) use registry::Detach;
pub use signal::Signal;
