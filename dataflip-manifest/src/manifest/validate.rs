//! Validation utilities for C# identifiers

use miette::SourceSpan;

use crate::{Result, SourceContext};

/// Parsing and validation context that carries source information.
///
/// Carries the raw source alongside the path of the table currently being
/// validated so errors can point back into `dataflip.toml`.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "dataflip.toml");
/// let ctx = ctx.push("CoolContext");
/// ctx.validate_name("GetUsers", "method", "method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source.clone(),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "method in 'CoolContext'" or just "context" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the n-th (zero based) `key = "value"` assignment in the source.
    pub fn find_value_span(&self, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
        find_value_span(self.src(), key, value, nth)
    }

    /// Validate that `name`, assigned to `key` in the source, is a usable
    /// C# identifier.
    pub fn validate_name(&self, name: &str, key: &str, kind: &str) -> Result<()> {
        let span = self.find_value_span(key, name, 0);

        if is_csharp_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate a dotted namespace such as `Hello.World`.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        let span = self.find_value_span("namespace", namespace, 0);
        for segment in namespace.split('.') {
            if is_csharp_keyword(segment) {
                return Err(self.source.reserved_keyword_error(
                    segment,
                    self.context_for("namespace"),
                    span,
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    namespace,
                    self.context_for("namespace"),
                    reason,
                    span,
                ));
            }
        }
        Ok(())
    }
}

/// C# reserved keywords that cannot be used as identifiers without '@'
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Find the span of the value in the n-th `key = "value"` assignment.
///
/// Both basic and literal strings are recognised, with or without spaces
/// around `=`. The span covers the value only, not the quotes.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{}=\"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}='{}'", key, value),
    ];

    let mut hits: Vec<usize> = patterns
        .iter()
        .flat_map(|pattern| {
            src.match_indices(pattern.as_str())
                .filter(|(pos, _)| is_key_start(src, *pos))
                .map(move |(pos, matched)| pos + matched.len() - value.len() - 1)
        })
        .collect();
    hits.sort_unstable();

    hits.get(nth)
        .map(|start| SourceSpan::from((*start, value.len())))
}

/// A key only counts when it is not the tail of a longer key.
fn is_key_start(src: &str, pos: usize) -> bool {
    src[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// Validate that a name is a valid C# identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
