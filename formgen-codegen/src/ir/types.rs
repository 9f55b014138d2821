//! Type taxonomy and declaration metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access level written on generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// `public`
    Public,
    /// `internal`
    #[default]
    Internal,
    /// `fileprivate`
    FilePrivate,
}

impl AccessLevel {
    /// Keyword written in front of declarations.
    pub fn keyword(self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Internal => "internal",
            AccessLevel::FilePrivate => "fileprivate",
        }
    }
}

/// Shape of the declaration a model was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// Struct with named fields.
    #[default]
    Struct,
    /// Struct without fields.
    UnitStruct,
    /// Struct with positional fields.
    TupleStruct,
    /// Enum.
    Enum,
    /// Union.
    Union,
}

impl DeclarationKind {
    /// Whether members of this declaration have names surfaces can key on.
    pub fn is_record(self) -> bool {
        matches!(self, DeclarationKind::Struct | DeclarationKind::UnitStruct)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeclarationKind::Struct => "struct",
            DeclarationKind::UnitStruct => "unit struct",
            DeclarationKind::TupleStruct => "tuple struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Union => "union",
        })
    }
}

/// Closed set of numeric types with a dedicated numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericType {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl NumericType {
    /// Every member of the set.
    pub const ALL: [NumericType; 12] = [
        NumericType::I8,
        NumericType::I16,
        NumericType::I32,
        NumericType::I64,
        NumericType::Isize,
        NumericType::U8,
        NumericType::U16,
        NumericType::U32,
        NumericType::U64,
        NumericType::Usize,
        NumericType::F32,
        NumericType::F64,
    ];

    /// Look up a Rust primitive name.
    ///
    /// `i128` and `u128` are not part of the set.
    pub fn from_ident(ident: &str) -> Option<Self> {
        Some(match ident {
            "i8" => NumericType::I8,
            "i16" => NumericType::I16,
            "i32" => NumericType::I32,
            "i64" => NumericType::I64,
            "isize" => NumericType::Isize,
            "u8" => NumericType::U8,
            "u16" => NumericType::U16,
            "u32" => NumericType::U32,
            "u64" => NumericType::U64,
            "usize" => NumericType::Usize,
            "f32" => NumericType::F32,
            "f64" => NumericType::F64,
            _ => return None,
        })
    }

    /// The Rust primitive name.
    pub fn ident(self) -> &'static str {
        match self {
            NumericType::I8 => "i8",
            NumericType::I16 => "i16",
            NumericType::I32 => "i32",
            NumericType::I64 => "i64",
            NumericType::Isize => "isize",
            NumericType::U8 => "u8",
            NumericType::U16 => "u16",
            NumericType::U32 => "u32",
            NumericType::U64 => "u64",
            NumericType::Usize => "usize",
            NumericType::F32 => "f32",
            NumericType::F64 => "f64",
        }
    }

    /// Whether this is a floating-point type.
    pub fn is_float(self) -> bool {
        matches!(self, NumericType::F32 | NumericType::F64)
    }
}

/// Type names classified as dates.
pub const DATE_TYPE_NAMES: &[&str] = &[
    "Date",
    "DateTime",
    "NaiveDate",
    "NaiveDateTime",
    "OffsetDateTime",
    "PrimitiveDateTime",
    "SystemTime",
];

/// Widget category of a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MemberType {
    Boolean,
    Text,
    SecretText,
    Date,
    Numeric(NumericType),
    /// Any other type; surfaces delegate to `<Type><Suffix>`.
    Nested(String),
}

impl MemberType {
    /// Classify a bare type identifier.
    ///
    /// Dispatch priority is boolean, text, date, numeric, nested. `secure` only
    /// affects text members.
    pub fn classify(ident: &str, secure: bool) -> Self {
        match ident {
            "bool" => MemberType::Boolean,
            "String" | "str" if secure => MemberType::SecretText,
            "String" | "str" => MemberType::Text,
            _ if DATE_TYPE_NAMES.contains(&ident) => MemberType::Date,
            _ => match NumericType::from_ident(ident) {
                Some(numeric) => MemberType::Numeric(numeric),
                None => MemberType::Nested(ident.to_string()),
            },
        }
    }

    /// Referenced type name for nested members.
    pub fn nested_name(&self) -> Option<&str> {
        match self {
            MemberType::Nested(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, MemberType::Nested(_))
    }
}
