//! SQL text for introspection and trial calls.

use dataflip_core::{BindType, strip_prefix_markers};
use dataflip_schema::{ResultSetSchema, TrialBinding, WireColumn};

/// Finds the routine a name refers to. `$2` is the schema, or NULL to search
/// the current search path.
///
/// information_schema columns are domains; everything is cast to plain
/// types so the driver can convert them. Aggregates and window functions
/// have no routine_type and cannot be called directly.
pub(crate) const FIND_ROUTINE: &str = "\
SELECT r.specific_schema::text, r.specific_name::text, r.routine_type::text
FROM information_schema.routines r
WHERE r.routine_name::text = $1::text
  AND r.routine_type IS NOT NULL
  AND (($2::text IS NULL AND r.routine_schema::name = ANY (current_schemas(false)))
       OR r.routine_schema::text = $2::text)
ORDER BY array_position(current_schemas(false), r.routine_schema::name), r.specific_name::text
LIMIT 1";

/// Input parameters of one routine, in declaration order.
pub(crate) const ROUTINE_PARAMETERS: &str = "\
SELECT p.ordinal_position::int4, p.parameter_name::text, p.data_type::text, p.udt_name::text
FROM information_schema.parameters p
WHERE p.specific_schema::text = $1::text
  AND p.specific_name::text = $2::text
  AND p.parameter_mode::text IN ('IN', 'INOUT')
ORDER BY p.ordinal_position";

/// How a routine is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoutineKind {
    Function,
    Procedure,
}

impl RoutineKind {
    /// `None` for routines that are neither a function nor a procedure.
    pub(crate) fn from_routine_type(routine_type: Option<&str>) -> Option<Self> {
        match routine_type {
            Some(t) if t.eq_ignore_ascii_case("PROCEDURE") => Some(RoutineKind::Procedure),
            Some(t) if t.eq_ignore_ascii_case("FUNCTION") => Some(RoutineKind::Function),
            _ => None,
        }
    }
}

/// Build a parameter column from one `ROUTINE_PARAMETERS` row.
///
/// Unnamed parameters are called `arg<position>`. Arrays and domains report
/// a generic `data_type`, so their `udt_name` is used instead.
pub(crate) fn parameter_column(
    position: i32,
    name: Option<String>,
    data_type: Option<String>,
    udt_name: Option<String>,
) -> Result<WireColumn, String> {
    let wire_type = match (data_type.as_deref(), udt_name) {
        (Some("USER-DEFINED" | "ARRAY"), Some(udt_name)) => udt_name,
        (Some(data_type), _) => data_type.to_string(),
        (None, _) => return Err(format!("parameter {} has no data type", position)),
    };
    let name = name.unwrap_or_else(|| format!("arg{}", position));
    Ok(WireColumn::new(name, wire_type))
}

/// Turn the columns of a trial statement into result sets.
///
/// No columns, or the single `void` column of a function returning nothing,
/// means no result set at all.
pub(crate) fn result_sets(columns: Vec<WireColumn>) -> Vec<ResultSetSchema> {
    let empty = match columns.as_slice() {
        [] => true,
        [only] => only.wire_type == "void",
        _ => false,
    };
    if empty {
        Vec::new()
    } else {
        vec![ResultSetSchema::new(columns)]
    }
}

/// Split `schema.name` into its parts.
pub(crate) fn split_name(procedure: &str) -> (Option<&str>, &str) {
    match procedure.split_once('.') {
        Some((schema, name)) => (Some(unquote(schema)), unquote(name)),
        None => (None, unquote(procedure)),
    }
}

fn unquote(part: &str) -> &str {
    let part = part.trim();
    part.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(part)
}

pub(crate) fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Type a text parameter is cast to before it reaches the routine.
pub(crate) fn cast_name(bind: BindType) -> &'static str {
    match bind {
        BindType::BigInt => "bigint",
        BindType::Binary => "bytea",
        BindType::Bit => "boolean",
        BindType::Text => "text",
        BindType::DateTime => "timestamp",
        BindType::DateTimeOffset => "timestamptz",
        BindType::Decimal => "numeric",
        BindType::Float => "double precision",
        BindType::Int => "integer",
        BindType::Real => "real",
        BindType::SmallInt | BindType::TinyInt => "smallint",
        BindType::Time => "interval",
        BindType::UniqueIdentifier => "uuid",
        BindType::Xml => "xml",
    }
}

/// Build the statement that invokes a routine with named arguments.
///
/// Every argument is sent as text (`$n`) and cast server side.
pub(crate) fn call_statement(
    schema: Option<&str>,
    name: &str,
    kind: RoutineKind,
    arguments: &[TrialBinding],
) -> String {
    let target = match schema {
        Some(schema) => format!("{}.{}", quote_ident(schema), quote_ident(name)),
        None => quote_ident(name),
    };
    let args = arguments
        .iter()
        .enumerate()
        .map(|(i, binding)| {
            format!(
                "{} => (${}::text)::{}",
                quote_ident(&strip_prefix_markers(&binding.name)),
                i + 1,
                cast_name(binding.bind_type())
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    match kind {
        RoutineKind::Function => format!("SELECT * FROM {}({})", target, args),
        RoutineKind::Procedure => format!("CALL {}({})", target, args),
    }
}
