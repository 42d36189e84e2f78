//! Top-level declaration container.

use serde::Serialize;

use crate::statement::{
    AnonymousFunctionStatement, Argument, EnumStatement, FunctionStatement, Record, Statement,
    StructStatement, TypeRef, TypedefStatement, UnionStatement,
};

/// An ordered, appendable sequence of top-level statements.
///
/// Insertion order is preserved and is the emission order. The `add_*`
/// builders construct a statement, append it, and return a mutable
/// reference so the caller can keep refining it; the `with_*` counterparts
/// clone the whole file first and take the complete child set up front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    statements: Vec<Statement>,
}

impl File {
    pub fn new(statements: impl IntoIterator<Item = Statement>) -> Self {
        Self {
            statements: statements.into_iter().collect(),
        }
    }

    /// Append a statement.
    pub fn add(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    /// Copy-on-write counterpart of [`add`](Self::add).
    pub fn with(&self, statement: impl Into<Statement>) -> Self {
        let mut this = self.clone();
        this.add(statement);
        this
    }

    /// Construct and append a typedef, returning it for refinement.
    pub fn add_typedef<T, I, S>(&mut self, ty: T, aliases: I) -> &mut TypedefStatement
    where
        T: Into<TypeRef>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statements
            .push(Statement::Typedef(TypedefStatement::new(ty, aliases)));
        match self.statements.last_mut() {
            Some(Statement::Typedef(typedef)) => typedef,
            _ => unreachable!(),
        }
    }

    pub fn with_typedef<T, I, S>(&self, ty: T, aliases: I) -> Self
    where
        T: Into<TypeRef>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut this = self.clone();
        this.add_typedef(ty, aliases);
        this
    }

    /// Lazy, restartable filter over the typedef statements.
    pub fn typedefs(&self) -> impl Iterator<Item = &TypedefStatement> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Typedef(typedef) => Some(typedef),
            _ => None,
        })
    }

    /// Construct and append an enum, returning it for case additions.
    pub fn add_enum(&mut self, name: impl Into<String>) -> &mut EnumStatement {
        self.statements
            .push(Statement::Enum(EnumStatement::new(name)));
        match self.statements.last_mut() {
            Some(Statement::Enum(statement)) => statement,
            _ => unreachable!(),
        }
    }

    pub fn with_enum<N, I, S, V>(&self, name: N, cases: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Option<u32>>,
    {
        let mut this = self.clone();
        let statement = this.add_enum(name);
        for (case, value) in cases {
            statement.add_case(case, value);
        }
        this
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumStatement> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Enum(statement) => Some(statement),
            _ => None,
        })
    }

    /// Construct and append a named struct, returning it for field additions.
    pub fn add_struct(&mut self, name: impl Into<String>) -> &mut StructStatement {
        self.statements
            .push(Statement::Struct(StructStatement::new(name)));
        match self.statements.last_mut() {
            Some(Statement::Struct(statement)) => statement,
            _ => unreachable!(),
        }
    }

    pub fn with_struct<N, I, S, T>(&self, name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<TypeRef>,
    {
        let mut this = self.clone();
        let statement = this.add_struct(name);
        for (field, ty) in fields {
            statement.add_field(field, ty);
        }
        this
    }

    pub fn structs(&self) -> impl Iterator<Item = &StructStatement> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Struct(statement) => Some(statement),
            _ => None,
        })
    }

    /// Construct and append a named union, returning it for field additions.
    pub fn add_union(&mut self, name: impl Into<String>) -> &mut UnionStatement {
        self.statements
            .push(Statement::Union(UnionStatement::new(name)));
        match self.statements.last_mut() {
            Some(Statement::Union(statement)) => statement,
            _ => unreachable!(),
        }
    }

    pub fn with_union<N, I, S, T>(&self, name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<TypeRef>,
    {
        let mut this = self.clone();
        let statement = this.add_union(name);
        for (field, ty) in fields {
            statement.add_field(field, ty);
        }
        this
    }

    pub fn unions(&self) -> impl Iterator<Item = &UnionStatement> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Union(statement) => Some(statement),
            _ => None,
        })
    }

    /// Construct and append a function prototype, returning it for argument
    /// additions.
    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> &mut FunctionStatement {
        self.statements
            .push(Statement::Function(FunctionStatement::new(name, return_type)));
        match self.statements.last_mut() {
            Some(Statement::Function(function)) => function,
            _ => unreachable!(),
        }
    }

    pub fn with_function<N, R, I, A>(&self, name: N, return_type: R, arguments: I) -> Self
    where
        N: Into<String>,
        R: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let mut this = self.clone();
        let function = this.add_function(name, return_type);
        for argument in arguments {
            function.add_argument(argument);
        }
        this
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionStatement> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Function(function) => Some(function),
            _ => None,
        })
    }

    /// Construct an anonymous function signature, wrap it in a single-alias
    /// typedef, append the typedef, and return the signature for argument
    /// additions.
    pub fn add_callback(
        &mut self,
        name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> &mut AnonymousFunctionStatement {
        let function = AnonymousFunctionStatement::new(return_type);
        self.statements
            .push(Statement::Typedef(TypedefStatement::new(function, [name.into()])));
        match self.statements.last_mut() {
            Some(Statement::Typedef(typedef)) => match typedef.ty_mut() {
                TypeRef::Function(function) => function,
                _ => unreachable!(),
            },
            _ => unreachable!(),
        }
    }

    pub fn with_callback<N, R, I, A>(&self, name: N, return_type: R, arguments: I) -> Self
    where
        N: Into<String>,
        R: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let mut this = self.clone();
        let function = this.add_callback(name, return_type);
        for argument in arguments {
            function.add_argument(argument);
        }
        this
    }

    /// Lazy `(alias, signature)` pairs for every callback typedef, one pair
    /// per alias. Anonymous functions added directly as top-level
    /// statements are not visible here; only typedef-wrapped signatures
    /// count as callbacks.
    pub fn callbacks(&self) -> impl Iterator<Item = (&str, &AnonymousFunctionStatement)> {
        self.typedefs()
            .filter_map(|typedef| match typedef.ty() {
                TypeRef::Function(function) => Some((typedef, function)),
                _ => None,
            })
            .flat_map(|(typedef, function)| {
                typedef
                    .aliases()
                    .iter()
                    .map(move |alias| (alias.as_str(), function))
            })
    }

    /// Equality membership test over the full statement sequence.
    pub fn has(&self, statement: &Statement) -> bool {
        self.statements.iter().any(|candidate| candidate == statement)
    }

    pub fn all(&self) -> &[Statement] {
        &self.statements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<'a> IntoIterator for &'a File {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Anything the rendering engine accepts: a whole file or a single
/// standalone statement.
#[derive(Debug, Clone, Copy)]
pub enum Definition<'a> {
    File(&'a File),
    Statement(&'a Statement),
}

impl<'a> From<&'a File> for Definition<'a> {
    fn from(file: &'a File) -> Self {
        Definition::File(file)
    }
}

impl<'a> From<&'a Statement> for Definition<'a> {
    fn from(statement: &'a Statement) -> Self {
        Definition::Statement(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::EnumCase;

    #[test]
    fn insertion_order_preserved() {
        let mut file = File::default();
        file.add_enum("Color");
        file.add_struct("Point");
        file.add_function("dist", "double");

        let kinds: Vec<&str> = file.iter().map(Statement::kind).collect();
        assert_eq!(kinds, ["enum", "struct", "function"]);
    }

    #[test]
    fn new_materializes_source_sequence() {
        let statements = vec![
            Statement::from(StructStatement::new("A")),
            Statement::from(EnumStatement::new("B")),
        ];
        let file = File::new(statements.clone());

        assert_eq!(file.all(), statements.as_slice());
    }

    #[test]
    fn add_builders_return_refinable_statements() {
        let mut file = File::default();
        let point = file.add_struct("Point");
        point.add_field("x", "int");
        point.add_field("y", "int");

        assert_eq!(file.structs().next().map(StructStatement::len), Some(2));
    }

    #[test]
    fn typed_filters_are_restartable_and_ordered() {
        let mut file = File::default();
        file.add_enum("A");
        file.add_struct("S");
        file.add_enum("B");

        let names: Vec<&str> = file.enums().map(EnumStatement::name).collect();
        assert_eq!(names, ["A", "B"]);

        // A fresh pass yields the same sequence.
        assert_eq!(file.enums().count(), 2);
        assert_eq!(file.structs().count(), 1);
        assert_eq!(file.unions().count(), 0);
    }

    #[test]
    fn has_is_an_equality_test() {
        let mut file = File::default();
        let statement = Statement::from(StructStatement::new("Point"));
        file.add(statement.clone());

        assert!(file.has(&statement));
        assert!(!file.has(&Statement::from(StructStatement::new("Other"))));
    }

    #[test]
    fn with_leaves_original_untouched() {
        let original = File::default().with(StructStatement::new("A"));
        let extended = original.with(EnumStatement::new("B"));

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn with_builders_populate_children() {
        let file = File::default()
            .with_enum("Color", [("Red", None), ("Green", Some(5))])
            .with_struct("Point", [("x", "int"), ("y", "int")])
            .with_function("dist", "double", ["Point", "Point"]);

        let color = file.enums().next().map(EnumStatement::cases);
        let values: Vec<u32> = color.into_iter().flatten().map(EnumCase::value).collect();
        assert_eq!(values, [0, 5]);

        assert!(file.structs().next().is_some_and(|s| s.has_field("y")));
        assert_eq!(file.functions().next().map(|f| f.len()), Some(2));
    }

    #[test]
    fn add_callback_wraps_in_typedef() {
        let mut file = File::default();
        let callback = file.add_callback("Logger", "void");
        callback.add_argument(("const char*", "message"));

        assert_eq!(file.len(), 1);
        assert_eq!(file.typedefs().count(), 1);

        let pairs: Vec<(&str, usize)> = file
            .callbacks()
            .map(|(alias, function)| (alias, function.len()))
            .collect();
        assert_eq!(pairs, [("Logger", 1)]);
    }

    #[test]
    fn callbacks_fan_out_one_pair_per_alias() {
        let mut file = File::default();
        let function = AnonymousFunctionStatement::new("void").with_argument("int");
        let typedef = file.add_typedef(function, ["Foo", "Bar", "Baz"]);
        assert_eq!(typedef.len(), 3);

        let aliases: Vec<&str> = file.callbacks().map(|(alias, _)| alias).collect();
        assert_eq!(aliases, ["Foo", "Bar", "Baz"]);

        // Every pair references the identical signature.
        assert!(file.callbacks().all(|(_, f)| f.len() == 1));
    }

    #[test]
    fn bare_anonymous_function_is_not_a_callback() {
        let mut file = File::default();
        file.add(AnonymousFunctionStatement::default());

        assert_eq!(file.len(), 1);
        assert_eq!(file.callbacks().count(), 0);
    }

    #[test]
    fn plain_typedefs_are_not_callbacks() {
        let mut file = File::default();
        file.add_typedef("unsigned int", ["uint32_t"]);

        assert_eq!(file.typedefs().count(), 1);
        assert_eq!(file.callbacks().count(), 0);
    }

    #[test]
    fn with_builders_leave_original_untouched() {
        let original = File::default().with_struct("Point", [("x", "int")]);
        let extended = original
            .with_callback("Logger", "void", ["const char*"])
            .with_union("Value", [("as_int", "int")]);

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 3);
        assert_eq!(original.callbacks().count(), 0);
    }
}
