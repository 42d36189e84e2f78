//! Typedef declarations.

use serde::Serialize;

use super::types::TypeRef;

/// A C typedef: one underlying type shared by one or more alias names.
///
/// When the underlying type is an anonymous function, each alias renders as
/// its own function-pointer typedef line (alias fan-out); otherwise all
/// aliases share a single `typedef <type> a, b, ...;` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedefStatement {
    ty: TypeRef,
    aliases: Vec<String>,
}

impl TypedefStatement {
    /// Requires at least one alias.
    pub fn new<T, I, S>(ty: T, aliases: I) -> Self
    where
        T: Into<TypeRef>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases: Vec<String> = aliases
            .into_iter()
            .map(|alias| {
                let alias = alias.into();
                assert!(!alias.is_empty(), "precondition [alias != \"\"] failed");
                alias
            })
            .collect();
        assert!(!aliases.is_empty(), "precondition [alias != []] failed");

        Self {
            ty: ty.into(),
            aliases,
        }
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub(crate) fn ty_mut(&mut self) -> &mut TypeRef {
        &mut self.ty
    }

    /// Append another alias for the same underlying type.
    pub fn add_alias(&mut self, alias: impl Into<String>) {
        let alias = alias.into();
        assert!(!alias.is_empty(), "precondition [alias != \"\"] failed");
        self.aliases.push(alias);
    }

    /// Copy-on-write counterpart of [`add_alias`](Self::add_alias).
    pub fn with_alias(&self, alias: impl Into<String>) -> Self {
        let mut this = self.clone();
        this.add_alias(alias);
        this
    }

    /// Exact lookup by alias name.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|candidate| candidate == alias)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypedefStatement {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.aliases.iter()
    }
}
