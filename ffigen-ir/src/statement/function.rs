//! Function prototypes and callback signatures.

use std::ops::{Deref, DerefMut};

use serde::Serialize;

/// A single prototype argument: a type reference with an optional name.
///
/// Positional arguments carry no name and render as the bare type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    ty: String,
    name: Option<String>,
}

impl Argument {
    /// A positional (unnamed) argument.
    pub fn positional(ty: impl Into<String>) -> Self {
        let ty = ty.into();
        assert!(!ty.is_empty(), "precondition [type != \"\"] failed");
        Self { ty, name: None }
    }

    /// A named argument.
    pub fn named(ty: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [name != \"\"] failed");
        Self {
            name: Some(name),
            ..Self::positional(ty)
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<&str> for Argument {
    fn from(ty: &str) -> Self {
        Argument::positional(ty)
    }
}

impl From<String> for Argument {
    fn from(ty: String) -> Self {
        Argument::positional(ty)
    }
}

impl<T: Into<String>, N: Into<String>> From<(T, N)> for Argument {
    fn from((ty, name): (T, N)) -> Self {
        Argument::named(ty, name)
    }
}

/// A function signature without a name: a return type and an ordered
/// argument list. Used standalone as the payload of a function-pointer
/// typedef, and as the signature half of [`FunctionStatement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnonymousFunctionStatement {
    return_type: String,
    arguments: Vec<Argument>,
}

impl AnonymousFunctionStatement {
    pub fn new(return_type: impl Into<String>) -> Self {
        let return_type = return_type.into();
        assert!(!return_type.is_empty(), "precondition [type != \"\"] failed");
        Self {
            return_type,
            arguments: Vec::new(),
        }
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Append an argument and return it. Accepts a bare type for positional
    /// arguments or a `(type, name)` pair for named ones.
    pub fn add_argument(&mut self, argument: impl Into<Argument>) -> &Argument {
        self.arguments.push(argument.into());
        &self.arguments[self.arguments.len() - 1]
    }

    /// Copy-on-write counterpart of [`add_argument`](Self::add_argument).
    pub fn with_argument(&self, argument: impl Into<Argument>) -> Self {
        let mut this = self.clone();
        this.add_argument(argument);
        this
    }

    /// Exact lookup by argument name; positional arguments never match.
    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments
            .iter()
            .any(|argument| argument.name() == Some(name))
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl Default for AnonymousFunctionStatement {
    fn default() -> Self {
        Self::new("void")
    }
}

impl<'a> IntoIterator for &'a AnonymousFunctionStatement {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}

/// A named function prototype, rendered as an `extern` declaration.
///
/// Dereferences to its [`AnonymousFunctionStatement`] signature, so the
/// argument API is available directly on the function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionStatement {
    name: String,
    signature: AnonymousFunctionStatement,
}

impl FunctionStatement {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [name != \"\"] failed");
        Self {
            name,
            signature: AnonymousFunctionStatement::new(return_type),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &AnonymousFunctionStatement {
        &self.signature
    }

    /// Copy-on-write argument addition returning a `FunctionStatement`.
    pub fn with_argument(&self, argument: impl Into<Argument>) -> Self {
        let mut this = self.clone();
        this.signature.add_argument(argument);
        this
    }
}

impl Deref for FunctionStatement {
    type Target = AnonymousFunctionStatement;

    fn deref(&self) -> &Self::Target {
        &self.signature
    }
}

impl DerefMut for FunctionStatement {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_and_named_arguments_mix() {
        let mut signature = AnonymousFunctionStatement::new("int");
        signature.add_argument("double");
        signature.add_argument(("const char*", "message"));

        assert_eq!(signature.arguments()[0].name(), None);
        assert_eq!(signature.arguments()[1].name(), Some("message"));
        assert_eq!(signature.arguments()[1].ty(), "const char*");
    }

    #[test]
    fn has_argument_ignores_positional_entries() {
        let signature = AnonymousFunctionStatement::new("void")
            .with_argument("int")
            .with_argument(("int", "count"));

        assert!(signature.has_argument("count"));
        assert!(!signature.has_argument("int"));
    }

    #[test]
    fn with_argument_leaves_original_untouched() {
        let original = AnonymousFunctionStatement::new("void").with_argument("int");
        let extended = original.with_argument("double");

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn default_signature_returns_void() {
        let signature = AnonymousFunctionStatement::default();
        assert_eq!(signature.return_type(), "void");
        assert!(signature.is_empty());
    }

    #[test]
    fn function_exposes_signature_api() {
        let mut function = FunctionStatement::new("dist", "double");
        function.add_argument("Point");
        function.add_argument("Point");

        assert_eq!(function.name(), "dist");
        assert_eq!(function.return_type(), "double");
        assert_eq!(function.len(), 2);
    }

    #[test]
    fn function_with_argument_preserves_name() {
        let function = FunctionStatement::new("sum", "int")
            .with_argument(("int", "a"))
            .with_argument(("int", "b"));

        assert_eq!(function.name(), "sum");
        assert_eq!(function.len(), 2);
    }

    #[test]
    #[should_panic(expected = "precondition [name != \"\"] failed")]
    fn empty_function_name_rejected() {
        let _ = FunctionStatement::new("", "void");
    }

    #[test]
    #[should_panic(expected = "precondition [type != \"\"] failed")]
    fn empty_return_type_rejected() {
        let _ = AnonymousFunctionStatement::new("");
    }

    #[test]
    #[should_panic(expected = "precondition [type != \"\"] failed")]
    fn empty_argument_type_rejected() {
        let _ = Argument::positional("");
    }
}
