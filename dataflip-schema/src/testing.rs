//! Scripted in-memory remote system for tests.
//!
//! [`MockConnector`] serves procedures registered up front and records every
//! session it opens and closes, so tests can assert that resolution always
//! releases what it acquired.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dataflip_core::Dialect;

use crate::{
    Connector, ConnectorError, ResultSetSchema, Session, TrialBinding, WireColumn,
};

/// A procedure known to a [`MockConnector`].
#[derive(Debug, Clone, Default)]
pub struct MockProcedure {
    parameters: Vec<WireColumn>,
    result_sets: Vec<ResultSetSchema>,
    failure: Option<String>,
}

impl MockProcedure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declared parameter.
    pub fn parameter(mut self, name: &str, wire_type: &str) -> Self {
        self.parameters.push(WireColumn::new(name, wire_type));
        self
    }

    /// Add a result set returned on execution.
    pub fn result_set(mut self, columns: &[(&str, &str)]) -> Self {
        self.result_sets.push(ResultSetSchema::new(
            columns
                .iter()
                .map(|(name, ty)| WireColumn::new(*name, *ty))
                .collect(),
        ));
        self
    }

    /// Make execution fail with `message`.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[derive(Debug, Default)]
struct MockState {
    opened: usize,
    closed: usize,
    executions: Vec<(String, Vec<TrialBinding>)>,
}

/// A [`Connector`] backed by registered [`MockProcedure`]s.
#[derive(Debug, Clone)]
pub struct MockConnector {
    dialect: Dialect,
    procedures: HashMap<String, MockProcedure>,
    connect_failure: Option<String>,
    state: Rc<RefCell<MockState>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// An empty PostgreSQL-dialect connector.
    pub fn new() -> Self {
        Self {
            dialect: Dialect::Postgres,
            procedures: HashMap::new(),
            connect_failure: None,
            state: Rc::default(),
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_procedure(mut self, name: &str, procedure: MockProcedure) -> Self {
        self.procedures.insert(name.to_string(), procedure);
        self
    }

    /// Make every connection attempt fail with `message`.
    pub fn failing_connect(mut self, message: &str) -> Self {
        self.connect_failure = Some(message.to_string());
        self
    }

    /// Number of sessions opened so far.
    pub fn opened(&self) -> usize {
        self.state.borrow().opened
    }

    /// Number of sessions closed so far.
    pub fn closed(&self) -> usize {
        self.state.borrow().closed
    }

    /// Every execution performed, with its bound arguments.
    pub fn executions(&self) -> Vec<(String, Vec<TrialBinding>)> {
        self.state.borrow().executions.clone()
    }
}

impl Connector for MockConnector {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn connect(&self) -> Result<Box<dyn Session + '_>, ConnectorError> {
        if let Some(message) = &self.connect_failure {
            return Err(ConnectorError::connect(message.clone()));
        }
        self.state.borrow_mut().opened += 1;
        Ok(Box::new(MockSession {
            connector: self,
            closed: false,
        }))
    }
}

struct MockSession<'a> {
    connector: &'a MockConnector,
    closed: bool,
}

impl MockSession<'_> {
    fn procedure(&self, name: &str) -> Result<&MockProcedure, ConnectorError> {
        self.connector
            .procedures
            .get(name)
            .ok_or_else(|| ConnectorError::not_found(format!("no procedure named '{}'", name)))
    }
}

impl Session for MockSession<'_> {
    fn introspect_parameters(
        &mut self,
        procedure: &str,
    ) -> Result<Vec<WireColumn>, ConnectorError> {
        Ok(self.procedure(procedure)?.parameters.clone())
    }

    fn execute(
        &mut self,
        procedure: &str,
        arguments: &[TrialBinding],
    ) -> Result<Vec<ResultSetSchema>, ConnectorError> {
        let found = self.procedure(procedure)?;
        self.connector
            .state
            .borrow_mut()
            .executions
            .push((procedure.to_string(), arguments.to_vec()));
        match &found.failure {
            Some(message) => Err(ConnectorError::query(message.clone())),
            None => Ok(found.result_sets.clone()),
        }
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.connector.state.borrow_mut().closed += 1;
        }
    }
}
