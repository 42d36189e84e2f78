//! Type references used by typedefs and record fields.

use serde::Serialize;

use super::enums::EnumStatement;
use super::function::AnonymousFunctionStatement;
use super::record::{StructStatement, UnionStatement};

/// The underlying type of a typedef or the type of a record field: either a
/// plain textual reference or a nested statement.
///
/// Marked `#[non_exhaustive]` so renderers must handle unrecognized kinds
/// with a fallback (`void*` plus a comment marker) rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum TypeRef {
    /// A plain type name, e.g. `unsigned int` or `Point*`.
    Named(String),
    /// An inline struct body.
    Struct(StructStatement),
    /// An inline union body.
    Union(UnionStatement),
    /// An inline enum body.
    Enum(EnumStatement),
    /// An anonymous function signature, rendered as a function-pointer
    /// typedef.
    Function(AnonymousFunctionStatement),
}

impl TypeRef {
    /// A plain textual type reference.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [type != \"\"] failed");
        TypeRef::Named(name)
    }

    /// Human-readable kind label, used in generated comment markers.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeRef::Named(_) => "named type",
            TypeRef::Struct(_) => "struct",
            TypeRef::Union(_) => "union",
            TypeRef::Enum(_) => "enum",
            TypeRef::Function(_) => "function",
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::named(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        TypeRef::named(name)
    }
}

impl From<StructStatement> for TypeRef {
    fn from(statement: StructStatement) -> Self {
        TypeRef::Struct(statement)
    }
}

impl From<UnionStatement> for TypeRef {
    fn from(statement: UnionStatement) -> Self {
        TypeRef::Union(statement)
    }
}

impl From<EnumStatement> for TypeRef {
    fn from(statement: EnumStatement) -> Self {
        TypeRef::Enum(statement)
    }
}

impl From<AnonymousFunctionStatement> for TypeRef {
    fn from(statement: AnonymousFunctionStatement) -> Self {
        TypeRef::Function(statement)
    }
}
