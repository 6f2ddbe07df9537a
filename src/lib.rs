//! # sigslot
//!
//! **sigslot** is a thread-safe signal/slot library for Rust.
//!
//! A [`Signal`] keeps an ordered list of observers; any thread may connect, disconnect
//! or emit at any time. Emission is synchronous: observers run on the caller's thread,
//! in registration order, and `emit` returns how many ran.
//!
//! The part that matters is **lifetime safety**. The [`Connection`] returned by
//! `connect` only holds a weak reference to the signal, so it can be disconnected or
//! dropped before or after the signal without any ordering rules. A [`Slot`] owns a
//! connection and disconnects it when it goes out of scope.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌───────────────────┐  owns (Arc)  ┌───────────────────────────────────────┐
//!   │   Signal<A>       │─────────────►│  Registry<A>                          │
//!   │  (not Clone)      │              │  - Mutex (connect/disconnect/emit)    │
//!   └───────────────────┘              │  - issued: u64 (ids never reused)     │
//!                                      │  - BTreeMap<ObserverId, Fn(&A)>       │
//!                                      └───────────────────────────────────────┘
//!                                                  ▲            ▲
//!                                       Weak (upgrade or no-op) │
//!                                                  │            │
//!                                      ┌───────────┴──┐  ┌──────┴───────┐
//!                                      │  Connection  │  │  Connection  │  (clones)
//!                                      └──────────────┘  └──────▲───────┘
//!                                                               │ owns
//!                                                        ┌──────┴───────┐
//!                                                        │     Slot     │ disconnect on drop
//!                                                        └──────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! Signal::new() ──► connect(f) ──► Connection ──(optional)──► Slot
//!
//! emit(args):
//!   ├─► lock registry
//!   ├─► for each observer in id order: f(&args)
//!   └─► return count
//!
//! teardown (any order):
//!   ├─ drop(Slot) / Connection::disconnect()
//!   │     ├─ signal alive → remove observer (missing id ignored)
//!   │     └─ signal gone  → no-op
//!   └─ drop(Signal) → registry and observers dropped; connections turn inert
//! ```
//!
//! ## Features
//! | Area              | Description                                                     | Key types / functions                   |
//! |-------------------|-----------------------------------------------------------------|-----------------------------------------|
//! | **Emitter**       | Register observers, emit synchronously, count invocations.      | [`Signal`]                              |
//! | **Connections**   | Weak handles; strict and forgiving disconnect.                  | [`Connection`], [`ObserverId`]          |
//! | **Scoped slots**  | RAII disconnect on drop / reassignment.                         | [`Slot`]                                |
//! | **Callbacks**     | Optional observers and method binding.                          | [`Callback`], [`bind_method`]           |
//! | **Configuration** | Signal name for logs, locked vs snapshot dispatch.              | [`SignalConfig`], [`SignalBuilder`]     |
//! | **Errors**        | Typed errors for the strict paths.                              | [`SignalError`]                         |
//!
//! ## Logging
//! The crate logs through [`tracing`] (`trace` for connect/disconnect/emit, `debug` for
//! ignored disconnects). Install any subscriber to see it.
//!
//! ## Reentrancy
//! With the default [`DispatchMode::Locked`] an observer must not connect, disconnect
//! or emit on its own signal: the registry mutex is not reentrant and the call
//! deadlocks. Build the signal with [`DispatchMode::Snapshot`] when observers need to.
//!
//! ## Example
//! ```rust
//! use sigslot::Signal;
//!
//! let moved: Signal<(i32, i32)> = Signal::new();
//! {
//!     let _slot = moved.connect(|(x, y)| println!("moved to ({x}, {y})")).scoped();
//!     assert_eq!(moved.emit((-1, 1)), 1);
//! } // slot dropped: observer disconnected
//!
//! assert_eq!(moved.emit((1, 1)), 0);
//! ```
//!
//! A threaded version (an emitter thread plus a controller owning a [`Slot`]) lives in
//! `demos/mouse.rs`: `cargo run --example mouse`.
mod callbacks;
mod connections;
mod core;
mod error;

// ---- Public re-exports ----

pub use callbacks::{Callback, bind_method, bind_weak};
pub use connections::{Connection, Slot};
pub use crate::core::{DispatchMode, ObserverId, Signal, SignalBuilder, SignalConfig};
pub use error::SignalError;
