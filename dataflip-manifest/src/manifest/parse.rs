//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{ConnectionSource, ContextConfig, Error, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "dataflip.toml")
    }
}

impl Manifest {
    /// Parse a dataflip.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a dataflip.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.contexts.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("at least one [[contexts]] entry is required", None));
    }

    let mut seen = HashMap::new();
    for context in &manifest.contexts {
        ctx.validate_name(&context.name, "name", "context")?;

        let occurrence = seen.entry(context.name.as_str()).or_insert(0usize);
        if *occurrence > 0 {
            let span = ctx.find_value_span("name", &context.name, *occurrence);
            return Err(ctx.source_context().validation_error(
                format!("context '{}' is declared more than once", context.name),
                span,
            ));
        }
        *occurrence += 1;

        validate_context(&ctx.push(&context.name), context)?;
    }
    Ok(())
}

fn validate_context(ctx: &ParseContext<'_>, context: &ContextConfig) -> Result<()> {
    ctx.validate_namespace(&context.namespace)?;

    match context.database.source() {
        Err(message) => {
            let span = ctx.find_value_span("name", &context.name, 0);
            return Err(ctx
                .source_context()
                .validation_error(format!("context '{}': {}", context.name, message), span));
        }
        Ok(ConnectionSource::Env(var)) if var.trim().is_empty() => {
            return Err(ctx.source_context().validation_error(
                format!("context '{}': database env cannot be empty", context.name),
                None,
            ));
        }
        Ok(_) => {}
    }

    let mut methods: HashMap<&str, usize> = HashMap::new();
    for procedure in &context.procedures {
        if procedure.name.trim().is_empty() {
            return Err(ctx.source_context().validation_error(
                format!("context '{}': procedure name cannot be empty", context.name),
                ctx.find_value_span("name", &procedure.name, 0),
            ));
        }

        let method = procedure.method_name();
        if procedure.method.is_some() {
            ctx.validate_name(method, "method", "method")?;
        } else if let Some(reason) = validate_defaulted_method(method) {
            return Err(ctx.source_context().validation_error(
                format!(
                    "procedure '{}' cannot be used as a method name ({}); set 'method' explicitly",
                    procedure.name, reason
                ),
                ctx.find_value_span("name", &procedure.name, 0),
            ));
        }

        let first_index = methods.len();
        let first = *methods.entry(method).or_insert(first_index);
        if first != first_index {
            return Err(Box::new(Error::DuplicateMethod {
                src: ctx.source_context().named_source(),
                first_span: find_method_span(ctx, context, method, 0),
                second_span: find_method_span(ctx, context, method, 1),
                method: method.to_string(),
                context: context.name.clone(),
            }));
        }
    }

    Ok(())
}

fn validate_defaulted_method(method: &str) -> Option<&'static str> {
    if super::validate::is_csharp_keyword(method) {
        return Some("it is a C# reserved keyword");
    }
    super::validate::validate_identifier(method)
}

/// Locate the n-th declaration that yields `method`, whether it was spelled
/// out with `method =` or defaulted from `name =`.
fn find_method_span(
    ctx: &ParseContext<'_>,
    context: &ContextConfig,
    method: &str,
    nth: usize,
) -> Option<miette::SourceSpan> {
    let mut by_key: HashMap<&str, usize> = HashMap::new();
    context
        .procedures
        .iter()
        .filter(|p| p.method_name() == method)
        .map(|p| {
            let key = if p.method.is_some() { "method" } else { "name" };
            let value = p.method.as_deref().unwrap_or(&p.name);
            let index = by_key.entry(key).or_insert(0);
            let span = ctx.find_value_span(key, value, *index);
            *index += 1;
            span
        })
        .nth(nth)
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[[contexts]]
name = "CoolContext"
namespace = "Hello.World"

[contexts.database]
env = "DATABASE_URL"

[contexts.output]
host = "out/CoolContext.cs"

[[contexts.procedures]]
name = "GetUsers"
"#;

    #[test]
    fn test_parse_minimal() {
        let manifest: Manifest = MINIMAL.parse().unwrap();
        assert_eq!(manifest.contexts.len(), 1);
        let context = &manifest.contexts[0];
        assert_eq!(context.name, "CoolContext");
        assert_eq!(context.namespace, "Hello.World");
        assert_eq!(context.procedures[0].method_name(), "GetUsers");
        assert!(!context.output.camel_case);
        assert!(context.output.typings.is_none());
    }

    #[test]
    fn test_empty_contexts_rejected() {
        let err = "contexts = []".parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn test_missing_contexts_is_parse_error() {
        let err = "".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let src = MINIMAL.replace("name = \"GetUsers\"", "name = \"GetUsers\"\nbogus = 1");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_dotted_procedure_needs_explicit_method() {
        let src = MINIMAL.replace("\"GetUsers\"", "\"dbo.GetUsers\"");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("set 'method' explicitly"));

        let src = MINIMAL.replace(
            "name = \"GetUsers\"",
            "name = \"dbo.GetUsers\"\nmethod = \"GetUsers\"",
        );
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(manifest.contexts[0].procedures[0].method_name(), "GetUsers");
    }

    #[test]
    fn test_duplicate_method_rejected() {
        let src = format!(
            "{MINIMAL}\n[[contexts.procedures]]\nname = \"get_users_v2\"\nmethod = \"GetUsers\"\n"
        );
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::DuplicateMethod {
                method,
                context,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(method, "GetUsers");
                assert_eq!(context, "CoolContext");
                let first = first_span.unwrap();
                let second = second_span.unwrap();
                assert!(first.offset() < second.offset());
            }
            other => panic!("expected DuplicateMethod, got {other:?}"),
        }
    }

    #[test]
    fn test_keyword_method_rejected() {
        let src = MINIMAL.replace(
            "name = \"GetUsers\"",
            "name = \"GetUsers\"\nmethod = \"class\"",
        );
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_database_requires_exactly_one_source() {
        let both = MINIMAL.replace(
            "env = \"DATABASE_URL\"",
            "env = \"DATABASE_URL\"\nurl = \"postgres://localhost/db\"",
        );
        let err = both.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("exactly one"));

        let neither = MINIMAL.replace("env = \"DATABASE_URL\"", "");
        let err = neither.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("exactly one"));
    }

    #[test]
    fn test_duplicate_context_rejected() {
        let src = format!("{MINIMAL}{MINIMAL}");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let src = MINIMAL.replace("Hello.World", "Hello World");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/definitely/not/here/dataflip.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
