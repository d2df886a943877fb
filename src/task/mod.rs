//! Task list management.
//!
//! Users create, complete, edit, remove, and reorder short text tasks; every
//! mutation can be undone and the whole list persists as one JSON array. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
