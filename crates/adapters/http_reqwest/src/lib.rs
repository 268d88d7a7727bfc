//! # sensorpanel-adapter-http-reqwest
//!
//! Driven adapter implementing [`ReadingSource`](sensorpanel_app::ports::ReadingSource)
//! over plain HTTP with [reqwest](https://docs.rs/reqwest).
//!
//! ## Wire contract
//!
//! | Slot | Request |
//! |------|---------|
//! | temperature | `GET {base_url}readTemperature` |
//! | humidity | `GET {base_url}readHumidity` |
//! | heat index | `GET {base_url}readHeatIndex` |
//! | calculation results | `GET {base_url}readCalculationResults` |
//!
//! Requests carry no query, no custom headers and no body. Only `200 OK`
//! produces a reading; the body text is kept verbatim.
//!
//! ## Dependency rule
//!
//! Depends on `sensorpanel-app` (port traits) and `sensorpanel-domain` only.

pub mod config;
pub mod error;
pub mod source;

pub use config::HttpSourceConfig;
pub use error::HttpSourceError;
pub use source::HttpReadingSource;
