//! # Connections and scoped slots.
//!
//! - [`Connection`] - clonable, non-owning handle to one registration
//! - [`Slot`] - move-only owner of a connection that disconnects on drop
//!
//! ## Ownership
//! ```text
//! Signal ──Arc──► Registry ◄──Weak── Connection ◄──owns── Slot
//!                                       ▲
//!                                       └── clones (same registration)
//! ```

mod connection;
mod slot;

pub use connection::Connection;
pub use slot::Slot;
