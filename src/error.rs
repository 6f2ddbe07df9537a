//! Error types returned by signals and connections.
//!
//! There is a single enum, [`SignalError`]. It only surfaces on the **strict** paths:
//!
//! - [`Signal::try_connect`](crate::Signal::try_connect) with an unset [`Callback`](crate::Callback);
//! - [`Signal::disconnect`](crate::Signal::disconnect) with a raw connection;
//! - [`Connection::try_disconnect`](crate::Connection::try_disconnect).
//!
//! The forgiving paths ([`Connection::disconnect`](crate::Connection::disconnect),
//! [`Slot`](crate::Slot) drop) never return errors. A connection whose signal is gone
//! is not an error anywhere.
//!
//! Like the rest of the crate the enum offers `as_label` / `as_message` helpers for logs.

use thiserror::Error;

use crate::core::ObserverId;

/// # Errors produced by signal operations.
///
/// All variants are local, synchronous and recoverable by the caller.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// An unset callback was passed to `try_connect` (invalid argument).
    #[error("signal observer is invalid: callback is not set")]
    EmptyCallback,

    /// The observer id is not registered (already removed, or never existed).
    #[error("no observer with id {id}")]
    NotFound {
        /// The id that was looked up.
        id: ObserverId,
    },

    /// The connection was issued by a different signal (invalid argument).
    #[error("connection {id} does not belong to this signal")]
    Mismatched {
        /// The id carried by the foreign connection.
        id: ObserverId,
    },
}

impl SignalError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use sigslot::SignalError;
    ///
    /// assert_eq!(SignalError::EmptyCallback.as_label(), "signal_empty_callback");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SignalError::EmptyCallback => "signal_empty_callback",
            SignalError::NotFound { .. } => "signal_observer_not_found",
            SignalError::Mismatched { .. } => "signal_mismatched_connection",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SignalError::EmptyCallback => "empty callback".to_string(),
            SignalError::NotFound { id } => format!("not found: observer={id}"),
            SignalError::Mismatched { id } => format!("mismatched: observer={id}"),
        }
    }

    /// Indicates whether the error reports a caller passing a bad argument.
    ///
    /// `EmptyCallback` and `Mismatched` are argument errors; `NotFound` is a
    /// state error (the observer is simply gone).
    ///
    /// # Example
    /// ```
    /// use sigslot::SignalError;
    ///
    /// assert!(SignalError::EmptyCallback.is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SignalError::EmptyCallback | SignalError::Mismatched { .. }
        )
    }
}
