//! Declaration model for C FFI header generation.
//!
//! This crate provides the in-memory representation of a C header's
//! declarations: typedefs, enums, structs, unions, function prototypes,
//! callback types, and anonymous inline aggregates. A [`File`] owns an
//! ordered sequence of top-level [`Statement`]s, each of which owns its
//! leaf entities (arguments, enum cases, record fields).
//!
//! # Architecture
//!
//! ```text
//! entities (Argument, EnumCase, Field)
//!     → statements (Typedef, Enum, Struct, Union, Function)
//!         → File (ordered container)
//!             → ffigen-codegen (rendering)
//! ```
//!
//! The model offers two construction styles per container: mutating `add_*`
//! operations that return the created child for further refinement, and
//! copy-on-write `with_*` counterparts that clone the receiver before
//! adding, leaving the original untouched.
//!
//! Invariants (non-empty names, aliases, and type references) are enforced
//! with assertions at construction time; they are programmer errors, not
//! recoverable conditions.

mod file;
mod statement;

pub use file::{Definition, File};
pub use statement::{
    AnonymousFunctionStatement, Argument, EnumCase, EnumStatement, Field, FunctionStatement,
    Record, Statement, StructStatement, TypeRef, TypedefStatement, UnionStatement,
};
