//! TypeScript type mapper implementation.

use dataflip_codegen::language::TypeMapper;
use dataflip_core::{ClientType, HostType};

/// TypeScript type mapper implementation.
///
/// Host types are first degraded to a [`ClientType`]; the mapping is total.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    pub fn map_client_type(&self, ty: ClientType) -> &'static str {
        match ty {
            ClientType::Text => "string",
            ClientType::Numeric => "number",
            ClientType::Boolean => "boolean",
            ClientType::Date => "Date",
            ClientType::Dynamic => "any",
        }
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn map_type(&self, ty: HostType) -> &'static str {
        self.map_client_type(ClientType::from(ty))
    }
}
