use thiserror::Error;

/// An IR node violated one of its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("method '{method}' returns rows but only {columns} result column(s) were given")]
    TooFewColumns { method: String, columns: usize },

    #[error("method name must not be empty (procedure '{procedure}')")]
    EmptyMethodName { procedure: String },

    #[error("procedure name must not be empty (method '{method}')")]
    EmptyProcedureName { method: String },
}
