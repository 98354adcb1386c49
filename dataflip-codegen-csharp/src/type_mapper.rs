//! C# type mapper implementation.

use dataflip_codegen::language::TypeMapper;
use dataflip_core::HostType;

/// C# type mapper implementation.
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn map_type(&self, ty: HostType) -> &'static str {
        match ty {
            HostType::Byte => "Byte",
            HostType::Int16 => "Int16",
            HostType::Int32 => "Int32",
            HostType::Int64 => "Int64",
            HostType::Single => "Single",
            HostType::Double => "Double",
            HostType::Decimal => "Decimal",
            HostType::Boolean => "Boolean",
            HostType::String => "String",
            HostType::DateTime => "DateTime",
            HostType::DateTimeOffset => "DateTimeOffset",
            HostType::TimeSpan => "TimeSpan",
            HostType::Binary => "Byte[]",
            HostType::Guid => "Guid",
            HostType::Object => "Object",
        }
    }

    /// Value types become `Nullable<T>` so database nulls survive mapping.
    fn map_optional_type(&self, ty: HostType) -> String {
        if ty.is_value_type() {
            format!("{}?", self.map_type(ty))
        } else {
            self.map_type(ty).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csharp_types() {
        let mapper = CSharpTypeMapper;

        assert_eq!(mapper.map_type(HostType::Int32), "Int32");
        assert_eq!(mapper.map_type(HostType::Binary), "Byte[]");
        assert_eq!(mapper.map_type(HostType::Guid), "Guid");
    }

    #[test]
    fn test_csharp_optional_types() {
        let mapper = CSharpTypeMapper;

        assert_eq!(mapper.map_optional_type(HostType::Int32), "Int32?");
        assert_eq!(mapper.map_optional_type(HostType::DateTime), "DateTime?");
        assert_eq!(mapper.map_optional_type(HostType::String), "String");
        assert_eq!(mapper.map_optional_type(HostType::Binary), "Byte[]");
        assert_eq!(mapper.map_optional_type(HostType::Object), "Object");
    }
}
