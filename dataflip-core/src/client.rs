//! Client-language types used in typings and UI scaffolding.

use crate::{HostKind, HostType};

/// A primitive in the client language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientType {
    Text,
    Numeric,
    Boolean,
    Date,
    /// Untyped fallback for anything without a natural client primitive.
    Dynamic,
}

impl From<HostType> for ClientType {
    fn from(host: HostType) -> Self {
        match host.kind() {
            HostKind::Text => ClientType::Text,
            HostKind::Integer | HostKind::Float | HostKind::Decimal => ClientType::Numeric,
            HostKind::Boolean => ClientType::Boolean,
            HostKind::DateTime => ClientType::Date,
            HostKind::Binary | HostKind::UniqueIdentifier | HostKind::Other => ClientType::Dynamic,
        }
    }
}
