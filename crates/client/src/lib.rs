//! HTTP client for the public placeholder API.
//!
//! [`PlaceholderClient`] performs the two read-only GET requests the
//! dashboard needs at startup (`/users` and `/posts`) and joins them
//! all-or-nothing: if either request fails, the load as a whole fails and
//! the caller degrades to an empty store.

pub mod client;
pub mod error;

pub use client::{PlaceholderClient, DEFAULT_BASE_URL};
pub use error::ClientError;
