//! Read-only SQLite query runner.
//!
//! # Intention
//!
//! - Open an existing SQLite file, run an ordered list of `SELECT` statements
//!   against it and print every result set as a table.
//! - Keep the workload as data (`Vec<SqlQuery>`) driven by one loop.
//!
//! # Architectural Boundaries
//!
//! - Only reads the store. No schema creation, no writes, no transactions.
//! - SQLite specifics live in [`sqlite`]; output formatting in [`render`].

pub mod error;
pub mod queries;
pub mod render;
pub mod runner;
pub mod sqlite;

pub use error::{Error, Result};
pub use queries::{load_query_set, pets_queries};
pub use runner::{run, run_to, RunnerConfig};
pub use sqlite::{Params, ResultSet, SqlQuery, Store, Value};
