//! Member type to Swift type mapping.

use crate::ir::{MemberType, NumericType};

/// Maps member types to Swift type names and zero values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftTypeMapper;

impl SwiftTypeMapper {
    pub fn new() -> Self {
        Self
    }

    /// Swift type name of a member type.
    pub fn swift_type(&self, ty: &MemberType) -> String {
        match ty {
            MemberType::Boolean => "Bool".to_string(),
            MemberType::Text | MemberType::SecretText => "String".to_string(),
            MemberType::Date => "Date".to_string(),
            MemberType::Numeric(numeric) => self.numeric_type(*numeric).to_string(),
            MemberType::Nested(name) => name.clone(),
        }
    }

    /// Swift name of a numeric type.
    pub fn numeric_type(&self, numeric: NumericType) -> &'static str {
        match numeric {
            NumericType::I8 => "Int8",
            NumericType::I16 => "Int16",
            NumericType::I32 => "Int32",
            NumericType::I64 => "Int64",
            NumericType::Isize => "Int",
            NumericType::U8 => "UInt8",
            NumericType::U16 => "UInt16",
            NumericType::U32 => "UInt32",
            NumericType::U64 => "UInt64",
            NumericType::Usize => "UInt",
            NumericType::F32 => "Float",
            NumericType::F64 => "Double",
        }
    }

    /// Zero value used when a persisted member has no initializer.
    ///
    /// Nested types have none; they are never persisted directly.
    pub fn type_default(&self, ty: &MemberType) -> Option<&'static str> {
        match ty {
            MemberType::Boolean => Some("false"),
            MemberType::Text | MemberType::SecretText => Some("\"\""),
            MemberType::Date => Some("Date()"),
            MemberType::Numeric(_) => Some("0"),
            MemberType::Nested(_) => None,
        }
    }
}
