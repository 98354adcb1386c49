//! Method-level IR nodes.

use dataflip_core::{HostType, strip_prefix_markers};
use serde::Serialize;

use crate::Error;

/// A remote procedure parameter resolved by introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Name exactly as declared remotely, prefix markers included (`@UserId`).
    pub name: String,
    pub ty: HostType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: HostType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Name with remote prefix markers removed, for generated identifiers.
    pub fn field_name(&self) -> String {
        strip_prefix_markers(&self.name)
    }
}

/// A result-set column observed during trial execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultColumn {
    pub name: String,
    pub ty: HostType,
}

impl ResultColumn {
    pub fn new(name: impl Into<String>, ty: HostType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// What a method hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnShape {
    /// A sequence of rows, one field per column (two or more columns).
    RowSequence(Vec<ResultColumn>),
    /// A single value.
    Scalar(HostType),
    /// The number of affected rows; the procedure is a pure side effect.
    AffectedCount,
}

/// The discriminant of a [`ReturnShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    RowSequence,
    Scalar,
    AffectedCount,
}

impl ReturnShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ReturnShape::RowSequence(_) => ShapeKind::RowSequence,
            ReturnShape::Scalar(_) => ShapeKind::Scalar,
            ReturnShape::AffectedCount => ShapeKind::AffectedCount,
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::RowSequence => write!(f, "row sequence"),
            ShapeKind::Scalar => write!(f, "scalar"),
            ShapeKind::AffectedCount => write!(f, "affected count"),
        }
    }
}

/// One generated callable, bound to one remote procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    name: String,
    procedure: String,
    parameters: Vec<Parameter>,
    shape: ReturnShape,
    doc: Option<String>,
}

impl Method {
    /// Create a method without parameters.
    ///
    /// Fails if either name is empty or a row sequence has fewer than two
    /// columns.
    pub fn new(
        name: impl Into<String>,
        procedure: impl Into<String>,
        shape: ReturnShape,
    ) -> Result<Self, Error> {
        let name = name.into();
        let procedure = procedure.into();

        if name.is_empty() {
            return Err(Error::EmptyMethodName { procedure });
        }
        if procedure.is_empty() {
            return Err(Error::EmptyProcedureName { method: name });
        }
        if let ReturnShape::RowSequence(columns) = &shape {
            if columns.len() < 2 {
                return Err(Error::TooFewColumns {
                    method: name,
                    columns: columns.len(),
                });
            }
        }

        Ok(Self {
            name,
            procedure,
            parameters: Vec::new(),
            shape,
            doc: None,
        })
    }

    /// Set the resolved parameters, in introspection order.
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the doc comment.
    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Generated method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal remote procedure name passed at call time.
    pub fn procedure(&self) -> &str {
        &self.procedure
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn shape(&self) -> &ReturnShape {
        &self.shape
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// The scalar return type, set only for [`ReturnShape::Scalar`].
    pub fn scalar_type(&self) -> Option<HostType> {
        match &self.shape {
            ReturnShape::Scalar(ty) => Some(*ty),
            _ => None,
        }
    }

    /// Result columns, non-empty only for [`ReturnShape::RowSequence`].
    pub fn result_columns(&self) -> &[ResultColumn] {
        match &self.shape {
            ReturnShape::RowSequence(columns) => columns,
            _ => &[],
        }
    }
}
