//! Domain logic for the TaskFlow dashboard.
//!
//! This crate has zero internal dependencies so it can be used by the HTTP
//! client, the dashboard binary, and any future CLI or worker tooling. It
//! covers the full table-state pipeline: synthetic project generation,
//! the in-memory store, filtering, pagination, selection, stat cards, and
//! theme mode. Nothing in here performs I/O.

pub mod error;
pub mod filter;
pub mod generate;
pub mod model;
pub mod pagination;
pub mod palette;
pub mod selection;
pub mod stats;
pub mod store;
pub mod theme;
pub mod types;
