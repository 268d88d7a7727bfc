//! # sensorpanel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **sensor panel page**: a fixed layout with three sensor boxes
//!   and a "Latest Calculations" block, rendered server-side from the
//!   current display state
//! - Serve the four **relay endpoints** (`/readTemperature`, …) the page's
//!   script polls, answered from the display state as plain text
//! - Serve a **JSON snapshot** of the display for programmatic clients
//!
//! ## Dependency rule
//! Depends on `sensorpanel-app` (for the display store) and
//! `sensorpanel-domain` (for slot metadata). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod page;
pub mod readings;
pub mod router;
pub mod state;
