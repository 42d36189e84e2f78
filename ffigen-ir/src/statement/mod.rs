//! Statement-level declaration entities.

mod enums;
mod function;
mod record;
mod typedef;
mod types;

pub use enums::{EnumCase, EnumStatement};
pub use function::{AnonymousFunctionStatement, Argument, FunctionStatement};
pub use record::{Field, Record, StructStatement, UnionStatement};
pub use typedef::TypedefStatement;
pub use types::TypeRef;

use serde::Serialize;

/// A top-level C declaration.
///
/// The set of statement kinds is closed for now but marked
/// `#[non_exhaustive]`, so downstream renderers must carry a fallback arm
/// for kinds they do not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum Statement {
    Typedef(TypedefStatement),
    Enum(EnumStatement),
    Struct(StructStatement),
    Union(UnionStatement),
    Function(FunctionStatement),
    /// A bare function signature. Renderable only through a typedef; at the
    /// top level it degrades to a comment marker.
    AnonymousFunction(AnonymousFunctionStatement),
}

impl Statement {
    /// Human-readable kind label, used in generated comment markers.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Typedef(_) => "typedef",
            Statement::Enum(_) => "enum",
            Statement::Struct(_) => "struct",
            Statement::Union(_) => "union",
            Statement::Function(_) => "function",
            Statement::AnonymousFunction(_) => "anonymous function",
        }
    }
}

impl From<TypedefStatement> for Statement {
    fn from(statement: TypedefStatement) -> Self {
        Statement::Typedef(statement)
    }
}

impl From<EnumStatement> for Statement {
    fn from(statement: EnumStatement) -> Self {
        Statement::Enum(statement)
    }
}

impl From<StructStatement> for Statement {
    fn from(statement: StructStatement) -> Self {
        Statement::Struct(statement)
    }
}

impl From<UnionStatement> for Statement {
    fn from(statement: UnionStatement) -> Self {
        Statement::Union(statement)
    }
}

impl From<FunctionStatement> for Statement {
    fn from(statement: FunctionStatement) -> Self {
        Statement::Function(statement)
    }
}

impl From<AnonymousFunctionStatement> for Statement {
    fn from(statement: AnonymousFunctionStatement) -> Self {
        Statement::AnonymousFunction(statement)
    }
}
