//! Composition root for the TaskFlow dashboard.
//!
//! Wires the core pipeline (store, filter, pagination, selection) into a
//! single dashboard state machine, loads configuration and the persisted
//! theme preference, and renders the result as a plain-text table.

pub mod cli;
pub mod config;
pub mod prefs;
pub mod render;
pub mod state;
