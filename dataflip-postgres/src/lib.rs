//! PostgreSQL connector for Dataflip.
//!
//! Parameters are read from `information_schema`. Trial executions run
//! inside a transaction that is always rolled back, so a procedure's side
//! effects never persist. Procedure names may be schema qualified
//! (`billing.close_invoice`); unqualified names are looked up on the
//! connection's search path.

mod connector;
mod sql;

pub use connector::PostgresConnector;
