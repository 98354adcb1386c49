//! Parameter and result shape resolution.

use dataflip_ir::{Parameter, ResultColumn, ReturnShape};
use tracing::{debug, trace};

use crate::{Connector, Error, Result, ScopedSession, TrialBinding, WireColumn, trial};

/// Resolves declared procedures against a [`Connector`].
///
/// Each call opens its own session and releases it before returning,
/// whether resolution succeeded or not.
pub struct SchemaResolver<'c> {
    connector: &'c dyn Connector,
}

impl<'c> SchemaResolver<'c> {
    pub fn new(connector: &'c dyn Connector) -> Self {
        Self { connector }
    }

    /// Discover the declared parameters of `procedure`, in the order the
    /// remote system reports them.
    pub fn resolve_parameters_by_introspection(&self, procedure: &str) -> Result<Vec<Parameter>> {
        debug!(procedure, "introspecting parameters");
        let mut session = ScopedSession::open(self.connector)
            .map_err(|e| e.into_introspection_error(procedure))?;

        let rows = session
            .introspect_parameters(procedure)
            .map_err(|e| e.into_introspection_error(procedure))?;

        let parameters = rows
            .into_iter()
            .map(|row| {
                let ty = self.host_type(procedure, &row)?;
                trace!(procedure, parameter = %row.name, wire_type = %row.wire_type, ?ty, "parameter");
                Ok(Parameter::new(row.name, ty))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(procedure, count = parameters.len(), "parameters resolved");
        Ok(parameters)
    }

    /// Parse `sample_args`, execute `procedure` with them and classify what
    /// comes back.
    ///
    /// Only the first result set is inspected. No result set, or one with no
    /// columns, is an affected-count call.
    pub fn resolve_shape_by_trial(
        &self,
        procedure: &str,
        sample_args: &[String],
    ) -> Result<ReturnShape> {
        let bindings = trial::bind_all(procedure, sample_args)?;
        self.resolve_shape_with_bindings(procedure, &bindings)
    }

    /// Like [`resolve_shape_by_trial`](Self::resolve_shape_by_trial) for
    /// arguments that were already parsed and converted.
    pub fn resolve_shape_with_bindings(
        &self,
        procedure: &str,
        bindings: &[TrialBinding],
    ) -> Result<ReturnShape> {
        debug!(procedure, arguments = bindings.len(), "executing trial");
        let mut session =
            ScopedSession::open(self.connector).map_err(|e| e.into_trial_error(procedure))?;

        let result_sets = session
            .execute(procedure, bindings)
            .map_err(|e| e.into_trial_error(procedure))?;
        if result_sets.len() > 1 {
            debug!(
                procedure,
                result_sets = result_sets.len(),
                "ignoring result sets after the first"
            );
        }

        let columns = result_sets
            .into_iter()
            .next()
            .map(|set| set.columns)
            .unwrap_or_default();

        let shape = match columns.as_slice() {
            [] => ReturnShape::AffectedCount,
            [single] => ReturnShape::Scalar(self.host_type(procedure, single)?),
            many => ReturnShape::RowSequence(
                many.iter()
                    .map(|column| {
                        Ok(ResultColumn::new(
                            column.name.clone(),
                            self.host_type(procedure, column)?,
                        ))
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
        };

        debug!(procedure, shape = %shape.kind(), "trial shape resolved");
        Ok(shape)
    }

    fn host_type(&self, procedure: &str, column: &WireColumn) -> Result<dataflip_core::HostType> {
        self.connector
            .dialect()
            .host_type(&column.wire_type)
            .map_err(|source| Error::TypeMapping {
                procedure: procedure.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use dataflip_core::{Dialect, HostType};
    use dataflip_ir::ShapeKind;

    use super::*;
    use crate::testing::{MockConnector, MockProcedure};

    fn users_connector() -> MockConnector {
        MockConnector::new().with_procedure(
            "GetUsers",
            MockProcedure::new()
                .parameter("@Name", "text")
                .result_set(&[("Id", "integer"), ("Name", "text")]),
        )
    }

    #[test]
    fn test_introspection_preserves_order() {
        let connector = MockConnector::new().with_procedure(
            "Search",
            MockProcedure::new()
                .parameter("@Zeta", "text")
                .parameter("@Alpha", "integer")
                .parameter("@Mid", "boolean"),
        );
        let resolver = SchemaResolver::new(&connector);

        let params = resolver.resolve_parameters_by_introspection("Search").unwrap();
        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["@Zeta", "@Alpha", "@Mid"]);
        assert_eq!(params[1].ty, HostType::Int32);
        assert_eq!(connector.opened(), 1);
        assert_eq!(connector.closed(), 1);
    }

    #[test]
    fn test_trial_row_sequence() {
        let connector = users_connector();
        let resolver = SchemaResolver::new(&connector);

        let shape = resolver
            .resolve_shape_by_trial("GetUsers", &["name: \"Bob\"".to_string()])
            .unwrap();

        assert_eq!(
            shape,
            ReturnShape::RowSequence(vec![
                ResultColumn::new("Id", HostType::Int32),
                ResultColumn::new("Name", HostType::String),
            ])
        );
        let executions = connector.executions();
        assert_eq!(executions.len(), 1);
        assert_eq!(executions[0].0, "GetUsers");
        assert_eq!(executions[0].1[0].name, "name");
    }

    #[test]
    fn test_trial_scalar_and_affected_count() {
        let connector = MockConnector::new()
            .with_procedure("CountUsers", MockProcedure::new().result_set(&[("count", "bigint")]))
            .with_procedure("Touch", MockProcedure::new());
        let resolver = SchemaResolver::new(&connector);

        let shape = resolver.resolve_shape_by_trial("CountUsers", &[]).unwrap();
        assert_eq!(shape, ReturnShape::Scalar(HostType::Int64));

        let shape = resolver.resolve_shape_by_trial("Touch", &[]).unwrap();
        assert_eq!(shape.kind(), ShapeKind::AffectedCount);
    }

    #[test]
    fn test_trial_is_idempotent() {
        let connector = users_connector();
        let resolver = SchemaResolver::new(&connector);
        let args = ["name: \"Bob\"".to_string()];

        let first = resolver.resolve_shape_by_trial("GetUsers", &args).unwrap();
        let second = resolver.resolve_shape_by_trial("GetUsers", &args).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_first_result_set_is_inspected() {
        let connector = MockConnector::new().with_procedure(
            "Report",
            MockProcedure::new()
                .result_set(&[("total", "numeric")])
                .result_set(&[("a", "text"), ("b", "text")]),
        );
        let resolver = SchemaResolver::new(&connector);

        let shape = resolver.resolve_shape_by_trial("Report", &[]).unwrap();
        assert_eq!(shape, ReturnShape::Scalar(HostType::Decimal));
    }

    #[test]
    fn test_observed_types_use_connector_dialect() {
        let connector = MockConnector::new().with_dialect(Dialect::SqlServer).with_procedure(
            "Versions",
            MockProcedure::new().result_set(&[("Id", "int"), ("Version", "timestamp")]),
        );
        let resolver = SchemaResolver::new(&connector);

        let shape = resolver.resolve_shape_by_trial("Versions", &[]).unwrap();
        match shape {
            ReturnShape::RowSequence(columns) => assert_eq!(columns[1].ty, HostType::Binary),
            other => panic!("expected row sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_wire_type_fails_and_releases_session() {
        let connector = MockConnector::new().with_procedure(
            "Weird",
            MockProcedure::new().parameter("@Shape", "geometry"),
        );
        let resolver = SchemaResolver::new(&connector);

        let err = resolver.resolve_parameters_by_introspection("Weird").unwrap_err();
        assert!(matches!(err, Error::TypeMapping { .. }));
        assert!(err.to_string().contains("geometry"));
        assert_eq!(connector.opened(), connector.closed());
    }

    #[test]
    fn test_missing_procedure() {
        let connector = MockConnector::new();
        let resolver = SchemaResolver::new(&connector);

        let err = resolver.resolve_parameters_by_introspection("Nope").unwrap_err();
        assert!(matches!(err, Error::ProcedureNotFound { .. }));
        let err = resolver.resolve_shape_by_trial("Nope", &[]).unwrap_err();
        assert!(matches!(err, Error::ProcedureNotFound { .. }));
        assert_eq!(connector.opened(), 2);
        assert_eq!(connector.closed(), 2);
    }

    #[test]
    fn test_trial_failure_releases_session() {
        let connector = MockConnector::new()
            .with_procedure("Explode", MockProcedure::new().failing("division by zero"));
        let resolver = SchemaResolver::new(&connector);

        let err = resolver.resolve_shape_by_trial("Explode", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "trial execution of 'Explode' failed: division by zero"
        );
        assert_eq!(connector.opened(), 1);
        assert_eq!(connector.closed(), 1);
    }

    #[test]
    fn test_malformed_argument_never_connects() {
        let connector = users_connector();
        let resolver = SchemaResolver::new(&connector);

        let err = resolver
            .resolve_shape_by_trial("GetUsers", &["garbage".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTrialArgument { .. }));
        assert_eq!(connector.opened(), 0);
    }

    #[test]
    fn test_connect_failure() {
        let connector = users_connector().failing_connect("connection refused");
        let resolver = SchemaResolver::new(&connector);

        let err = resolver.resolve_parameters_by_introspection("GetUsers").unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
        assert_eq!(connector.closed(), 0);
    }
}
