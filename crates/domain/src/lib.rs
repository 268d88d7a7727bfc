//! # sensorpanel-domain
//!
//! Pure domain model for the sensorpanel display.
//!
//! ## Responsibilities
//! - Define the four **Slots** (temperature, humidity, heat index,
//!   calculation results) with their endpoint names, element ids and
//!   placeholders
//! - Define **Readings** (opaque display text, never parsed)
//! - Define the **Display** state object and the **SlotUpdate** message
//!   that mutates it
//! - Define the single "update unavailable" error category
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod display;
pub mod reading;
pub mod slot;
pub mod update;
