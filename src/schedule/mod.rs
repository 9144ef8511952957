//! Node.js release schedule cache
//!
//! This module provides the core functionality for fetching, parsing, and
//! querying the Node.js release schedule.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│    Store    │◀──── queries (sync)
//! │  (fetch)    │     │  (cache)    │
//! └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   reqwest   │     │   Compare   │
//! │ (transport) │     │(version cmp)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: populate-once schedule cache with the preload/query protocol
//! - [`source`]: source trait for fetching the raw schedule document
//! - [`compare`]: chronological ordering of version identifiers
//! - [`error`]: error types for fetch and query operations
//! - [`types`]: schedule entry and raw wire types

pub mod compare;
pub mod error;
pub mod source;
pub mod store;
pub mod types;
