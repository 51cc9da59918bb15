//! Database layer for the shiftlog application.
//!
//! A SQLite persistence layer with a versioned migration system. The core
//! aggregation code never touches this layer directly; commands load entries
//! here and hand them to the pure aggregation functions.

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Task record CRUD operations.
pub mod tasks;
