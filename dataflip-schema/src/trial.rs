//! Trial argument expressions.
//!
//! A trial argument names a procedure parameter and a sample literal:
//!
//! ```text
//! @Name: "Bob"            text
//! @Id: "5":int            converted to Int32
//! @Id: "5:int"            same, token inside the quotes
//! @When: 2020-01-01T10:00 unquoted, no token
//! ```
//!
//! A trailing `:token` is only split off when it names a known type token,
//! so literals that contain colons (times, URLs) survive unquoted.

use std::fmt;

use dataflip_core::{BindType, HostType, TrialType, trial_type};

use crate::{Error, Result};

const DEFAULT_TOKEN: &str = "string";

/// A parsed, not yet converted, trial expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialArgument {
    pub name: String,
    pub literal: String,
    /// Explicit type token, if one was given
    pub token: Option<String>,
}

impl TrialArgument {
    /// Parse a single trial expression.
    ///
    /// Returns the reason as an error string; callers attach the procedure.
    pub fn parse(expression: &str) -> std::result::Result<Self, String> {
        let (name, rest) = expression
            .split_once(':')
            .ok_or_else(|| "expected 'name: \"value\"'".to_string())?;

        let name = name.trim();
        if name.is_empty() {
            return Err("parameter name cannot be empty".into());
        }

        let rest = rest.trim();
        let (literal, token) = match rest.strip_prefix('"') {
            Some(quoted) => {
                let close = quoted
                    .find('"')
                    .ok_or_else(|| "unterminated string literal".to_string())?;
                let literal = &quoted[..close];
                let tail = quoted[close + 1..].trim();
                if tail.is_empty() {
                    split_known_token(literal)
                } else {
                    let token = tail
                        .strip_prefix(':')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .ok_or_else(|| format!("unexpected '{}' after the value", tail))?;
                    (literal, Some(token))
                }
            }
            None => split_known_token(rest),
        };

        Ok(Self {
            name: name.to_string(),
            literal: literal.to_string(),
            token: token.map(str::to_string),
        })
    }

    /// The type token, defaulting to `string`.
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or(DEFAULT_TOKEN)
    }

    /// Resolve the token and convert the literal, producing a binding.
    pub fn bind(self, procedure: &str) -> Result<TrialBinding> {
        let ty = trial_type(self.token()).map_err(|source| Error::TypeMapping {
            procedure: procedure.to_string(),
            source,
        })?;

        let value = TrialValue::convert(&self.literal, ty.host).ok_or_else(|| Error::TrialValue {
            procedure: procedure.to_string(),
            parameter: self.name.clone(),
            value: self.literal.clone(),
            host: ty.host,
        })?;

        Ok(TrialBinding {
            name: self.name,
            ty,
            value,
        })
    }
}

fn split_known_token(value: &str) -> (&str, Option<&str>) {
    match value.rsplit_once(':') {
        Some((literal, token)) if trial_type(token).is_ok() => (literal.trim(), Some(token.trim())),
        _ => (value, None),
    }
}

/// A trial literal converted to its host type.
#[derive(Debug, Clone, PartialEq)]
pub enum TrialValue {
    Integer(i64),
    Float(f64),
    Decimal(String),
    Boolean(bool),
    Guid(String),
    /// Passed through as text for the remote system to cast
    Text(String),
}

impl TrialValue {
    /// Convert `literal` to `host`, or `None` if it does not parse.
    pub fn convert(literal: &str, host: HostType) -> Option<Self> {
        let trimmed = literal.trim();
        let value = match host {
            HostType::Byte => TrialValue::Integer(trimmed.parse::<u8>().ok()?.into()),
            HostType::Int16 => TrialValue::Integer(trimmed.parse::<i16>().ok()?.into()),
            HostType::Int32 => TrialValue::Integer(trimmed.parse::<i32>().ok()?.into()),
            HostType::Int64 => TrialValue::Integer(trimmed.parse::<i64>().ok()?),
            HostType::Single => TrialValue::Float(parse_single(trimmed)?),
            HostType::Double => TrialValue::Float(trimmed.parse::<f64>().ok()?),
            HostType::Decimal => TrialValue::Decimal(parse_decimal(trimmed)?),
            HostType::Boolean => TrialValue::Boolean(parse_bool(trimmed)?),
            HostType::Guid => TrialValue::Guid(parse_guid(trimmed)?),
            HostType::String
            | HostType::DateTime
            | HostType::DateTimeOffset
            | HostType::TimeSpan
            | HostType::Binary
            | HostType::Object => TrialValue::Text(literal.to_string()),
        };
        Some(value)
    }
}

impl fmt::Display for TrialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialValue::Integer(v) => write!(f, "{}", v),
            TrialValue::Float(v) => write!(f, "{}", v),
            TrialValue::Boolean(v) => write!(f, "{}", v),
            TrialValue::Decimal(v) | TrialValue::Guid(v) | TrialValue::Text(v) => {
                write!(f, "{}", v)
            }
        }
    }
}

/// A `real` literal, kept at the precision it was written with. Values that
/// overflow `f32` are rejected.
fn parse_single(literal: &str) -> Option<f64> {
    let single = literal.parse::<f32>().ok()?;
    let double = literal.parse::<f64>().ok()?;
    if single.is_finite() || !double.is_finite() {
        Some(double)
    } else {
        None
    }
}

fn parse_decimal(s: &str) -> Option<String> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let valid = !(whole.is_empty() && fraction.is_empty())
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit());
    valid.then(|| s.to_string())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_guid(s: &str) -> Option<String> {
    let groups: Vec<&str> = s.split('-').collect();
    let lengths = [8, 4, 4, 4, 12];
    let valid = groups.len() == lengths.len()
        && groups
            .iter()
            .zip(lengths)
            .all(|(g, len)| g.len() == len && g.chars().all(|c| c.is_ascii_hexdigit()));
    valid.then(|| s.to_ascii_lowercase())
}

/// A converted trial argument, ready to bind.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialBinding {
    /// Parameter name as written, markers included
    pub name: String,
    pub ty: TrialType,
    pub value: TrialValue,
}

impl TrialBinding {
    pub fn bind_type(&self) -> BindType {
        self.ty.bind
    }
}

/// Parse and convert every trial expression of `procedure`, in order.
pub fn bind_all(procedure: &str, expressions: &[String]) -> Result<Vec<TrialBinding>> {
    expressions
        .iter()
        .map(|expression| {
            TrialArgument::parse(expression)
                .map_err(|reason| Error::InvalidTrialArgument {
                    procedure: procedure.to_string(),
                    expression: expression.clone(),
                    reason,
                })?
                .bind(procedure)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> TrialArgument {
        TrialArgument::parse(s).unwrap()
    }

    #[test]
    fn test_parse_quoted_defaults_to_string() {
        let arg = parse("@Name: \"Bob\"");
        assert_eq!(arg.name, "@Name");
        assert_eq!(arg.literal, "Bob");
        assert_eq!(arg.token, None);
        assert_eq!(arg.token(), "string");
    }

    #[test]
    fn test_parse_outer_token() {
        let arg = parse("@Id: \"5\":int");
        assert_eq!(arg.literal, "5");
        assert_eq!(arg.token.as_deref(), Some("int"));
    }

    #[test]
    fn test_parse_inner_token() {
        let arg = parse("@Id: \"5:int\"");
        assert_eq!(arg.literal, "5");
        assert_eq!(arg.token.as_deref(), Some("int"));
    }

    #[test]
    fn test_outer_token_wins() {
        let arg = parse("@Id: \"5:int\":string");
        assert_eq!(arg.literal, "5:int");
        assert_eq!(arg.token.as_deref(), Some("string"));
    }

    #[test]
    fn test_colons_in_literal_survive() {
        let arg = parse("@At: \"10:30\"");
        assert_eq!(arg.literal, "10:30");
        assert_eq!(arg.token, None);

        let arg = parse("@At: 2020-01-01T10:30:datetime");
        assert_eq!(arg.literal, "2020-01-01T10:30");
        assert_eq!(arg.token.as_deref(), Some("datetime"));
    }

    #[test]
    fn test_parse_unquoted() {
        let arg = parse("Limit: 10:int");
        assert_eq!(arg.name, "Limit");
        assert_eq!(arg.literal, "10");
        assert_eq!(arg.token.as_deref(), Some("int"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(TrialArgument::parse("no separator").is_err());
        assert!(TrialArgument::parse(": \"x\"").is_err());
        assert!(TrialArgument::parse("@A: \"open").is_err());
        assert!(TrialArgument::parse("@A: \"x\" junk").is_err());
    }

    #[test]
    fn test_bare_numeric_literal_stays_text() {
        let binding = parse("@Id: \"5\"").bind("GetUser").unwrap();
        assert_eq!(binding.value, TrialValue::Text("5".into()));
        assert_eq!(binding.bind_type(), BindType::Text);
    }

    #[test]
    fn test_bind_converts_literals() {
        let b = parse("@Id: \"5\":int").bind("p").unwrap();
        assert_eq!(b.value, TrialValue::Integer(5));
        assert_eq!(b.ty.host, HostType::Int32);

        let b = parse("@On: \"1\":bool").bind("p").unwrap();
        assert_eq!(b.value, TrialValue::Boolean(true));

        let b = parse("@Amount: \"-12.50\":decimal").bind("p").unwrap();
        assert_eq!(b.value, TrialValue::Decimal("-12.50".into()));

        let b = parse("@Key: \"6F9619FF-8B86-D011-B42D-00C04FC964FF\":guid")
            .bind("p")
            .unwrap();
        assert_eq!(
            b.value,
            TrialValue::Guid("6f9619ff-8b86-d011-b42d-00c04fc964ff".into())
        );
    }

    #[test]
    fn test_single_keeps_written_precision() {
        let b = parse("@Rate: \"0.1\":single").bind("p").unwrap();
        assert_eq!(b.value, TrialValue::Float(0.1));
        assert_eq!(b.value.to_string(), "0.1");

        assert_eq!(TrialValue::convert("1e39", HostType::Single), None);
        assert_eq!(
            TrialValue::convert("1e39", HostType::Double),
            Some(TrialValue::Float(1e39))
        );
    }

    #[test]
    fn test_bind_rejects_unconvertible_value() {
        let err = parse("@Id: \"abc\":int").bind("GetUser").unwrap_err();
        assert!(matches!(err, Error::TrialValue { ref parameter, .. } if parameter == "@Id"));
        assert!(err.to_string().contains("there was a problem converting"));

        let err = parse("@Small: \"300\":byte").bind("GetUser").unwrap_err();
        assert!(matches!(err, Error::TrialValue { .. }));
    }

    #[test]
    fn test_bind_rejects_unknown_token() {
        let err = parse("@Id: \"5\":widget").bind("GetUser").unwrap_err();
        assert!(matches!(err, Error::TypeMapping { ref procedure, .. } if procedure == "GetUser"));
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn test_bind_all_names_expression() {
        let exprs = vec!["@A: \"1\":int".to_string(), "broken".to_string()];
        let err = bind_all("GetUsers", &exprs).unwrap_err();
        match err {
            Error::InvalidTrialArgument {
                procedure,
                expression,
                ..
            } => {
                assert_eq!(procedure, "GetUsers");
                assert_eq!(expression, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
