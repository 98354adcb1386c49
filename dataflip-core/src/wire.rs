//! Wire type tables: database type names to host types, and trial argument
//! tokens to host types plus the type used to bind them.

use std::fmt;

use crate::{HostType, TypeMappingError};

/// The family of remote system whose metadata reports wire type names.
///
/// Each dialect has its own spelling of type names (`timestamp` is a row
/// version in SQL Server and a date/time in PostgreSQL), so lookups are
/// always keyed by dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    SqlServer,
    Postgres,
}

impl Dialect {
    /// Get the dialect identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::SqlServer => "sqlserver",
            Dialect::Postgres => "postgres",
        }
    }

    /// Resolve a wire type name (case-insensitive) to its host type.
    pub fn host_type(&self, name: &str) -> Result<HostType, TypeMappingError> {
        let key = name.trim().to_ascii_lowercase();
        let found = match self {
            Dialect::SqlServer => sql_server_host_type(&key),
            Dialect::Postgres => postgres_host_type(&key),
        };
        found.ok_or_else(|| TypeMappingError::UnknownWireType {
            dialect: self.as_str(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn sql_server_host_type(key: &str) -> Option<HostType> {
    let host = match key {
        "bigint" => HostType::Int64,
        "binary" | "varbinary" | "image" | "timestamp" | "rowversion" => HostType::Binary,
        "bit" => HostType::Boolean,
        "char" | "nchar" | "varchar" | "nvarchar" | "text" | "ntext" | "xml" | "sysname" => {
            HostType::String
        }
        "date" | "datetime" | "datetime2" | "smalldatetime" => HostType::DateTime,
        "datetimeoffset" => HostType::DateTimeOffset,
        "decimal" | "numeric" | "money" | "smallmoney" => HostType::Decimal,
        "float" => HostType::Double,
        "real" => HostType::Single,
        "int" => HostType::Int32,
        "smallint" => HostType::Int16,
        "tinyint" => HostType::Byte,
        "time" => HostType::TimeSpan,
        "uniqueidentifier" => HostType::Guid,
        "structured" | "udt" | "variant" | "sql_variant" => HostType::Object,
        _ => return None,
    };
    Some(host)
}

fn postgres_host_type(key: &str) -> Option<HostType> {
    let host = match key {
        "smallint" | "int2" => HostType::Int16,
        "integer" | "int" | "int4" => HostType::Int32,
        "bigint" | "int8" => HostType::Int64,
        "real" | "float4" => HostType::Single,
        "double precision" | "float8" => HostType::Double,
        "numeric" | "decimal" | "money" => HostType::Decimal,
        "boolean" | "bool" => HostType::Boolean,
        "text" | "character varying" | "varchar" | "character" | "char" | "bpchar" | "name"
        | "citext" | "xml" | "json" | "jsonb" => HostType::String,
        "date" | "timestamp" | "timestamp without time zone" => HostType::DateTime,
        "timestamptz" | "timestamp with time zone" => HostType::DateTimeOffset,
        "time" | "time without time zone" | "timetz" | "time with time zone" | "interval" => {
            HostType::TimeSpan
        }
        "bytea" => HostType::Binary,
        "uuid" => HostType::Guid,
        "record" => HostType::Object,
        _ => return None,
    };
    Some(host)
}

/// The wire type a trial argument is bound with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindType {
    BigInt,
    Binary,
    Bit,
    Text,
    DateTime,
    DateTimeOffset,
    Decimal,
    Float,
    Int,
    Real,
    SmallInt,
    Time,
    TinyInt,
    UniqueIdentifier,
    Xml,
}

/// Resolution of a trial argument type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialType {
    /// Host type the literal is converted to.
    pub host: HostType,
    /// Wire type used when binding the converted literal.
    pub bind: BindType,
}

impl TrialType {
    const fn new(bind: BindType, host: HostType) -> Self {
        Self { host, bind }
    }
}

/// Resolve a short type token (`int`, `string`, `guid`, ...) used in trial
/// argument expressions and scalar return overrides.
pub fn trial_type(token: &str) -> Result<TrialType, TypeMappingError> {
    let mapping = match token.trim().to_ascii_lowercase().as_str() {
        "int64" | "long" | "bigint" => TrialType::new(BindType::BigInt, HostType::Int64),
        "byte[]" | "binary" => TrialType::new(BindType::Binary, HostType::Binary),
        "boolean" | "bool" | "bit" => TrialType::new(BindType::Bit, HostType::Boolean),
        "string" | "varchar" | "text" => TrialType::new(BindType::Text, HostType::String),
        "datetime" => TrialType::new(BindType::DateTime, HostType::DateTime),
        "datetimeoffset" => TrialType::new(BindType::DateTimeOffset, HostType::DateTimeOffset),
        "decimal" | "numeric" | "number" => TrialType::new(BindType::Decimal, HostType::Decimal),
        "integer" | "int" | "int32" => TrialType::new(BindType::Int, HostType::Int32),
        "float" | "double" => TrialType::new(BindType::Float, HostType::Double),
        "single" => TrialType::new(BindType::Real, HostType::Single),
        "int16" | "short" => TrialType::new(BindType::SmallInt, HostType::Int16),
        "timespan" => TrialType::new(BindType::Time, HostType::TimeSpan),
        "byte" => TrialType::new(BindType::TinyInt, HostType::Byte),
        "guid" => TrialType::new(BindType::UniqueIdentifier, HostType::Guid),
        "xml" => TrialType::new(BindType::Xml, HostType::String),
        _ => {
            return Err(TypeMappingError::UnknownTypeToken {
                token: token.to_string(),
            });
        }
    };
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_server_types() {
        let d = Dialect::SqlServer;
        assert_eq!(d.host_type("int").unwrap(), HostType::Int32);
        assert_eq!(d.host_type("bigint").unwrap(), HostType::Int64);
        assert_eq!(d.host_type("bit").unwrap(), HostType::Boolean);
        assert_eq!(d.host_type("uniqueidentifier").unwrap(), HostType::Guid);
        assert_eq!(d.host_type("money").unwrap(), HostType::Decimal);
        assert_eq!(d.host_type("timestamp").unwrap(), HostType::Binary);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let d = Dialect::SqlServer;
        assert_eq!(d.host_type("nvarChar").unwrap(), HostType::String);
        assert_eq!(d.host_type("NVARCHAR").unwrap(), HostType::String);
        assert_eq!(
            Dialect::Postgres.host_type("Timestamp With Time Zone").unwrap(),
            HostType::DateTimeOffset
        );
    }

    #[test]
    fn test_postgres_types() {
        let d = Dialect::Postgres;
        assert_eq!(d.host_type("integer").unwrap(), HostType::Int32);
        assert_eq!(d.host_type("int4").unwrap(), HostType::Int32);
        assert_eq!(d.host_type("text").unwrap(), HostType::String);
        assert_eq!(d.host_type("character varying").unwrap(), HostType::String);
        assert_eq!(d.host_type("timestamp").unwrap(), HostType::DateTime);
        assert_eq!(d.host_type("uuid").unwrap(), HostType::Guid);
        assert_eq!(d.host_type("bytea").unwrap(), HostType::Binary);
    }

    #[test]
    fn test_unknown_wire_type_fails() {
        let err = Dialect::Postgres.host_type("geometry").unwrap_err();
        assert_eq!(
            err,
            TypeMappingError::UnknownWireType {
                dialect: "postgres",
                name: "geometry".to_string(),
            }
        );
        assert!(Dialect::SqlServer.host_type("uuid").is_err());
        assert!(Dialect::SqlServer.host_type("").is_err());
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for name in ["int", "varchar", "datetime2", "decimal", "xml"] {
            assert_eq!(
                Dialect::SqlServer.host_type(name),
                Dialect::SqlServer.host_type(name)
            );
        }
    }

    #[test]
    fn test_trial_tokens() {
        assert_eq!(
            trial_type("int").unwrap(),
            TrialType {
                host: HostType::Int32,
                bind: BindType::Int
            }
        );
        assert_eq!(trial_type("string").unwrap().host, HostType::String);
        assert_eq!(trial_type("bool").unwrap().bind, BindType::Bit);
        assert_eq!(trial_type("guid").unwrap().host, HostType::Guid);
        assert_eq!(trial_type("Int64").unwrap().host, HostType::Int64);
        assert_eq!(trial_type("xml").unwrap().host, HostType::String);
    }

    #[test]
    fn test_unknown_trial_token_fails() {
        let err = trial_type("color").unwrap_err();
        assert_eq!(err.to_string(), "unknown type token 'color'");
    }
}
