//! Host value types used inside generated executable source.

use serde::Serialize;

/// A value type in the host language.
///
/// This is a closed set: every wire type and every trial token resolves to
/// exactly one of these, and each backend renders them through its own
/// translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostType {
    Byte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    Decimal,
    Boolean,
    String,
    DateTime,
    DateTimeOffset,
    TimeSpan,
    Binary,
    Guid,
    Object,
}

/// The family a [`HostType`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    Integer,
    Float,
    Decimal,
    Text,
    Boolean,
    DateTime,
    Binary,
    UniqueIdentifier,
    Other,
}

impl HostType {
    /// Get the family of this type.
    pub fn kind(&self) -> HostKind {
        match self {
            HostType::Byte | HostType::Int16 | HostType::Int32 | HostType::Int64 => {
                HostKind::Integer
            }
            HostType::Single | HostType::Double => HostKind::Float,
            HostType::Decimal => HostKind::Decimal,
            HostType::String => HostKind::Text,
            HostType::Boolean => HostKind::Boolean,
            HostType::DateTime | HostType::DateTimeOffset => HostKind::DateTime,
            HostType::Binary => HostKind::Binary,
            HostType::Guid => HostKind::UniqueIdentifier,
            HostType::TimeSpan | HostType::Object => HostKind::Other,
        }
    }

    /// Returns true for numeric families (integer, float, decimal).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.kind(),
            HostKind::Integer | HostKind::Float | HostKind::Decimal
        )
    }

    /// Returns true if the host language treats this as a value type
    /// (one that needs an explicit nullable wrapper).
    pub fn is_value_type(&self) -> bool {
        !matches!(self, HostType::String | HostType::Binary | HostType::Object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(HostType::Int32.kind(), HostKind::Integer);
        assert_eq!(HostType::Double.kind(), HostKind::Float);
        assert_eq!(HostType::String.kind(), HostKind::Text);
        assert_eq!(HostType::DateTimeOffset.kind(), HostKind::DateTime);
        assert_eq!(HostType::Guid.kind(), HostKind::UniqueIdentifier);
        assert_eq!(HostType::TimeSpan.kind(), HostKind::Other);
    }

    #[test]
    fn test_numeric() {
        assert!(HostType::Byte.is_numeric());
        assert!(HostType::Decimal.is_numeric());
        assert!(!HostType::Boolean.is_numeric());
        assert!(!HostType::String.is_numeric());
    }

    #[test]
    fn test_value_types() {
        assert!(HostType::Int32.is_value_type());
        assert!(HostType::Guid.is_value_type());
        assert!(!HostType::String.is_value_type());
        assert!(!HostType::Binary.is_value_type());
    }
}
