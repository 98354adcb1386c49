use std::time::Duration;

use dataflip_core::Dialect;
use dataflip_schema::{
    Connector, ConnectorError, ResultSetSchema, Session, TrialBinding, WireColumn,
};
use tokio::{runtime::Runtime, task::JoinHandle, time::timeout};
use tokio_postgres::{
    Client, NoTls, Row,
    types::{FromSql, ToSql},
};
use tracing::{debug, trace, warn};

use crate::sql::{self, RoutineKind};

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves procedures against a live PostgreSQL database.
#[derive(Debug, Clone)]
pub struct PostgresConnector {
    url: String,
}

impl PostgresConnector {
    /// Create a connector for a libpq-style connection string or URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Connector for PostgresConnector {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn connect(&self) -> Result<Box<dyn Session + '_>, ConnectorError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConnectorError::connect(format!("failed to start runtime: {e}")))?;

        let (client, connection) = runtime
            .block_on(tokio_postgres::connect(&self.url, NoTls))
            .map_err(|e| ConnectorError::connect(e.to_string()))?;

        let task = runtime.spawn(async move {
            if let Err(e) = connection.await {
                warn!("postgres connection error: {}", e);
            }
        });
        debug!("postgres session opened");

        Ok(Box::new(PostgresSession {
            runtime,
            client: Some(client),
            task: Some(task),
        }))
    }
}

/// The routine a procedure name resolved to.
struct Routine {
    specific_schema: String,
    specific_name: String,
    kind: RoutineKind,
}

struct PostgresSession {
    runtime: Runtime,
    client: Option<Client>,
    task: Option<JoinHandle<()>>,
}

impl PostgresSession {
    fn client(&self) -> Result<&Client, ConnectorError> {
        self.client
            .as_ref()
            .ok_or_else(|| ConnectorError::query("session is closed"))
    }
}

async fn find_routine(client: &Client, procedure: &str) -> Result<Routine, ConnectorError> {
    let (schema, name) = sql::split_name(procedure);
    let row = client
        .query_opt(sql::FIND_ROUTINE, &[&name, &schema])
        .await
        .map_err(|e| ConnectorError::query(e.to_string()))?
        .ok_or_else(|| ConnectorError::not_found(format!("no routine named '{}'", procedure)))?;

    let routine_type: Option<String> = column(&row, 2)?;
    let kind = RoutineKind::from_routine_type(routine_type.as_deref()).ok_or_else(|| {
        ConnectorError::not_found(format!("'{}' is not a function or procedure", procedure))
    })?;
    Ok(Routine {
        specific_schema: column(&row, 0)?,
        specific_name: column(&row, 1)?,
        kind,
    })
}

/// Read a catalog column, reporting NULLs and type mismatches as errors.
fn column<'r, T: FromSql<'r>>(row: &'r Row, index: usize) -> Result<T, ConnectorError> {
    row.try_get(index)
        .map_err(|e| ConnectorError::query(format!("unexpected catalog row: {e}")))
}

impl Session for PostgresSession {
    fn introspect_parameters(
        &mut self,
        procedure: &str,
    ) -> Result<Vec<WireColumn>, ConnectorError> {
        let client = self.client()?;
        self.runtime.block_on(async {
            let routine = find_routine(client, procedure).await?;
            let rows = client
                .query(
                    sql::ROUTINE_PARAMETERS,
                    &[&routine.specific_schema, &routine.specific_name],
                )
                .await
                .map_err(|e| ConnectorError::query(e.to_string()))?;

            rows.iter()
                .map(|row| -> Result<WireColumn, ConnectorError> {
                    let parameter = sql::parameter_column(
                        column(row, 0)?,
                        column(row, 1)?,
                        column(row, 2)?,
                        column(row, 3)?,
                    )
                    .map_err(ConnectorError::query)?;
                    trace!(
                        name = %parameter.name,
                        wire_type = %parameter.wire_type,
                        "parameter row"
                    );
                    Ok(parameter)
                })
                .collect::<Result<Vec<_>, _>>()
        })
    }

    fn execute(
        &mut self,
        procedure: &str,
        arguments: &[TrialBinding],
    ) -> Result<Vec<ResultSetSchema>, ConnectorError> {
        let client = self.client()?;
        let values: Vec<String> = arguments.iter().map(|a| a.value.to_string()).collect();
        let params: Vec<&(dyn ToSql + Sync)> =
            values.iter().map(|v| v as &(dyn ToSql + Sync)).collect();

        self.runtime.block_on(async {
            let routine = find_routine(client, procedure).await?;
            let (schema, name) = sql::split_name(procedure);
            let statement = sql::call_statement(schema, name, routine.kind, arguments);
            debug!(%statement, "trial statement");

            client
                .batch_execute("BEGIN")
                .await
                .map_err(|e| ConnectorError::query(e.to_string()))?;

            let outcome = async {
                let prepared = client.prepare(&statement).await?;
                client.query(&prepared, &params).await?;
                Ok::<_, tokio_postgres::Error>(prepared)
            }
            .await;

            if let Err(e) = client.batch_execute("ROLLBACK").await {
                warn!("failed to roll back trial of '{}': {}", procedure, e);
            }

            let prepared = outcome.map_err(|e| ConnectorError::query(e.to_string()))?;
            let columns: Vec<WireColumn> = prepared
                .columns()
                .iter()
                .map(|c| WireColumn::new(c.name(), c.type_().name()))
                .collect();
            Ok(sql::result_sets(columns))
        })
    }

    fn close(&mut self) {
        drop(self.client.take());
        if let Some(task) = self.task.take() {
            self.runtime.block_on(async {
                if timeout(SHUTDOWN_TIMEOUT, task).await.is_err() {
                    warn!("timed out waiting for postgres connection to shut down");
                }
            });
        }
        debug!("postgres session closed");
    }
}
