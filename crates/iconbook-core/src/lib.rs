// Public fallible APIs in this crate share one concrete error contract (`IconbookError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod naming;
pub mod search;
pub mod store;
pub mod svg;
pub mod tags;
pub mod unicode;

pub use catalog::{PreparedCatalog, build_catalog, prepare_catalog};
pub use config::{PathOverrides, PrepareConfig};
pub use error::{IconbookError, Result};
pub use models::{IconCatalog, IconRecord, TagMap};
pub use search::{SearchIndex, search};
pub use tags::generate_tags;
