//! Struct and union declarations.

use serde::Serialize;

use super::types::TypeRef;

/// A named field inside a struct or union.
///
/// The field type is either a plain textual reference or a nested
/// statement (one level of anonymous inline aggregate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: String,
    ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [name != \"\"] failed");
        Self {
            name,
            ty: ty.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

/// Shared behavior of struct and union bodies: an ordered, non-deduplicated
/// field collection.
pub trait Record: Clone {
    fn fields(&self) -> &[Field];

    fn fields_mut(&mut self) -> &mut Vec<Field>;

    /// Append a field and return it.
    fn add_field(&mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> &Field {
        let fields = self.fields_mut();
        fields.push(Field::new(name, ty));
        &fields[fields.len() - 1]
    }

    /// Copy-on-write counterpart of [`add_field`](Self::add_field).
    fn with_field(&self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self
    where
        Self: Sized,
    {
        let mut this = self.clone();
        this.add_field(name, ty);
        this
    }

    /// Exact, case-sensitive lookup by field name.
    fn has_field(&self, name: &str) -> bool {
        self.fields().iter().any(|field| field.name() == name)
    }
}

/// A C struct, either named (`struct Point { ... }`) or anonymous when used
/// inline as a field type or typedef payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructStatement {
    name: Option<String>,
    fields: Vec<Field>,
}

impl StructStatement {
    /// A named struct.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [name != \"\"] failed");
        Self {
            name: Some(name),
            fields: Vec::new(),
        }
    }

    /// An anonymous struct, usable only inline.
    pub fn anonymous() -> Self {
        Self {
            name: None,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for StructStatement {
    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }
}

impl<'a> IntoIterator for &'a StructStatement {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// A C union, either named or anonymous. Shares the [`Record`] field API
/// with [`StructStatement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionStatement {
    name: Option<String>,
    fields: Vec<Field>,
}

impl UnionStatement {
    /// A named union.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [name != \"\"] failed");
        Self {
            name: Some(name),
            fields: Vec::new(),
        }
    }

    /// An anonymous union, usable only inline.
    pub fn anonymous() -> Self {
        Self {
            name: None,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for UnionStatement {
    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }
}

impl<'a> IntoIterator for &'a UnionStatement {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
