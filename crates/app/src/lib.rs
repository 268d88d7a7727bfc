//! # sensorpanel-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `ReadingSource` — fetch one slot's reading from the host device
//! - Provide the in-process **display store** (shared display state with
//!   change notification)
//! - Provide the **poller**: one tick per interval, four independent
//!   fire-and-forget fetches per tick
//!
//! ## Dependency rule
//! Depends on `sensorpanel-domain` only (plus `tokio` for tasks, timers and
//! channels). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod display_store;
pub mod ports;
pub mod poller;
