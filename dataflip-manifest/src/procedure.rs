use serde::Deserialize;

/// A `[[contexts.procedures]]` entry.
///
/// Declarations with a non-empty `trial` list have their result shape
/// resolved by executing the procedure; all others rely on `returns`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcedureDeclaration {
    /// Remote procedure name, optionally schema qualified
    pub name: String,

    /// Generated method name. Defaults to `name`.
    pub method: Option<String>,

    /// Scalar return type token for non-trial procedures
    pub returns: Option<String>,

    /// Documentation attached to the generated method
    pub comments: Option<String>,

    /// Trial expressions, e.g. `@Id: "5":int`
    #[serde(default)]
    pub trial: Vec<String>,
}

impl ProcedureDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn with_trial(mut self, expression: impl Into<String>) -> Self {
        self.trial.push(expression.into());
        self
    }

    /// Name of the generated method.
    pub fn method_name(&self) -> &str {
        self.method.as_deref().unwrap_or(&self.name)
    }

    /// Whether the result shape is resolved by a trial execution.
    pub fn is_trial(&self) -> bool {
        !self.trial.is_empty()
    }

    /// Comments with surrounding whitespace removed, `None` when blank.
    pub fn doc(&self) -> Option<&str> {
        self.comments
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
