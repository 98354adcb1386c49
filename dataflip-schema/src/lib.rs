//! Schema resolution for declared procedures.
//!
//! Parameters are always discovered by introspecting the remote procedure.
//! Result shape is discovered empirically: the procedure is executed with
//! caller-supplied sample arguments and the columns it actually returns are
//! classified into a [`ReturnShape`](dataflip_ir::ReturnShape).
//!
//! The remote system sits behind the [`Connector`] and [`Session`] traits so
//! the resolver can be driven by a live database or by the scripted
//! [`testing::MockConnector`].
//!
//! # Module Organization
//!
//! - [`connector`] - The remote system seam (Connector, Session, ScopedSession)
//! - [`trial`] - Trial argument expressions and literal conversion
//! - [`resolver`] - The SchemaResolver itself
//! - [`testing`] - Scripted in-memory connector (feature-gated)

pub mod connector;
mod error;
pub mod resolver;
pub mod trial;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use connector::{
    Connector, ConnectorError, ConnectorErrorKind, ResultSetSchema, ScopedSession, Session,
    WireColumn,
};
pub use error::{Error, Result};
pub use resolver::SchemaResolver;
pub use trial::{TrialArgument, TrialBinding, TrialValue};
