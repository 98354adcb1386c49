//! The seam between the resolver and the remote system.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use dataflip_core::Dialect;

use crate::{Error, TrialBinding};

/// A `(name, wire type)` pair as reported by the remote system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireColumn {
    pub name: String,
    pub wire_type: String,
}

impl WireColumn {
    pub fn new(name: impl Into<String>, wire_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wire_type: wire_type.into(),
        }
    }
}

/// The ordered column schema of one result set returned by an execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSetSchema {
    pub columns: Vec<WireColumn>,
}

impl ResultSetSchema {
    pub fn new(columns: Vec<WireColumn>) -> Self {
        Self { columns }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorErrorKind {
    Connect,
    NotFound,
    Query,
}

/// A failure reported by a [`Connector`] or [`Session`].
///
/// Connectors do not know which procedure they are serving; the resolver
/// attaches it when converting into [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorError {
    pub kind: ConnectorErrorKind,
    pub message: String,
}

impl ConnectorError {
    pub fn connect(message: impl Into<String>) -> Self {
        Self {
            kind: ConnectorErrorKind::Connect,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ConnectorErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self {
            kind: ConnectorErrorKind::Query,
            message: message.into(),
        }
    }

    pub(crate) fn into_introspection_error(self, procedure: &str) -> Error {
        let procedure = procedure.to_string();
        match self.kind {
            ConnectorErrorKind::Connect => Error::Connection {
                procedure,
                message: self.message,
            },
            ConnectorErrorKind::NotFound => Error::ProcedureNotFound { procedure },
            ConnectorErrorKind::Query => Error::Introspection {
                procedure,
                message: self.message,
            },
        }
    }

    pub(crate) fn into_trial_error(self, procedure: &str) -> Error {
        let procedure = procedure.to_string();
        match self.kind {
            ConnectorErrorKind::Connect => Error::Connection {
                procedure,
                message: self.message,
            },
            ConnectorErrorKind::NotFound => Error::ProcedureNotFound { procedure },
            ConnectorErrorKind::Query => Error::TrialExecution {
                procedure,
                message: self.message,
            },
        }
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConnectorError {}

/// A remote system that procedures can be resolved against.
pub trait Connector {
    /// The dialect wire type names are reported in.
    fn dialect(&self) -> Dialect;

    /// Open a new session. Each resolution call opens its own.
    fn connect(&self) -> Result<Box<dyn Session + '_>, ConnectorError>;
}

/// One open connection to the remote system.
pub trait Session {
    /// Declared input parameters of `procedure`, in declaration order.
    fn introspect_parameters(&mut self, procedure: &str)
    -> Result<Vec<WireColumn>, ConnectorError>;

    /// Execute `procedure` with `arguments` and report the schema of every
    /// result set it returned, in order.
    fn execute(
        &mut self,
        procedure: &str,
        arguments: &[TrialBinding],
    ) -> Result<Vec<ResultSetSchema>, ConnectorError>;

    /// Release the session. Called exactly once, by [`ScopedSession`].
    fn close(&mut self);
}

/// Owns a [`Session`] and closes it when dropped, on every exit path.
pub struct ScopedSession<'c> {
    inner: Box<dyn Session + 'c>,
}

impl<'c> ScopedSession<'c> {
    pub fn open(connector: &'c dyn Connector) -> Result<Self, ConnectorError> {
        let inner = connector.connect()?;
        Ok(Self { inner })
    }
}

impl<'c> Deref for ScopedSession<'c> {
    type Target = dyn Session + 'c;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl DerefMut for ScopedSession<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_mut()
    }
}

impl Drop for ScopedSession<'_> {
    fn drop(&mut self) {
        self.inner.close();
    }
}
