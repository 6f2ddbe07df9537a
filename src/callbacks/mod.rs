//! # Observer callbacks.
//!
//! This module provides the callback-related types:
//! - [`Callback`] - a shareable observer function that may be unset
//! - [`bind_method`] - turns a receiver and a method into a [`Callback`]
//! - [`bind_weak`] - same, but without keeping the receiver alive

mod callback;
mod method;

pub use callback::Callback;
pub(crate) use callback::ObserverFn;
pub use method::{bind_method, bind_weak};
