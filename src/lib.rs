//! A personal task list core.
//!
//! This crate provides the in-memory task collection behind a to-do list
//! application, undoable mutations, task-added notifications, ordering
//! strategies, and persistence of the list as a single JSON array.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and remote services
//! - **Adapters**: Concrete implementations of ports (memory, files, boards)
//!
//! # Modules
//!
//! - [`task`]: Task model, repository, command history, and service facade

pub mod task;
