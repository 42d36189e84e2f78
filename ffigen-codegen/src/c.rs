//! C declaration renderer.

use ffigen_ir::{
    AnonymousFunctionStatement, Definition, EnumStatement, File, FunctionStatement, Record,
    Statement, StructStatement, TypeRef, TypedefStatement, UnionStatement,
};

use crate::generator::Generator;
use crate::indent::Indent;

/// Renders the declaration model as C declaration source text.
///
/// The line delimiter and indent unit are engine-wide knobs, not per-call
/// parameters.
///
/// # Example
///
/// ```
/// use ffigen_codegen::{CGenerator, Generator};
/// use ffigen_ir::{File, Record};
///
/// let mut file = File::default();
/// let point = file.add_struct("Point");
/// point.add_field("x", "int");
/// point.add_field("y", "int");
///
/// let output = CGenerator::new().generate(&file);
/// assert!(output.starts_with("typedef struct Point {"));
/// ```
#[derive(Debug, Clone)]
pub struct CGenerator {
    delimiter: String,
    indent: Indent,
}

impl CGenerator {
    pub fn new() -> Self {
        Self {
            delimiter: "\n".to_string(),
            indent: Indent::default(),
        }
    }

    /// Override the line delimiter (default `"\n"`).
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Override the indent unit (default four spaces).
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    fn generate_statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Typedef(typedef) => self.generate_typedef(typedef),
            Statement::Struct(statement) => self.generate_root_struct(statement),
            Statement::Union(statement) => self.generate_root_union(statement),
            Statement::Enum(statement) => self.generate_root_enum(statement),
            Statement::Function(function) => self.generate_root_function(function),
            other => format!("/* non-renderable type [{}] */", other.kind()),
        }
    }

    fn generate_file(&self, file: &File) -> String {
        let mut lines = Vec::new();

        for statement in file {
            // Named aggregates at the top level emit as typedefs.
            let rendered = match self.wrap_named_type(statement) {
                Some(typedef) => self.generate_typedef(&typedef),
                None => self.generate_statement(statement),
            };
            lines.push(rendered);
            lines.push(String::new());
        }

        self.join_lines(lines)
    }

    fn wrap_named_type(&self, statement: &Statement) -> Option<TypedefStatement> {
        let (ty, name): (TypeRef, &str) = match statement {
            Statement::Struct(statement) => (statement.clone().into(), statement.name()?),
            Statement::Union(statement) => (statement.clone().into(), statement.name()?),
            Statement::Enum(statement) => (statement.clone().into(), statement.name()),
            _ => return None,
        };

        Some(TypedefStatement::new(ty, [name]))
    }

    fn generate_typedef(&self, typedef: &TypedefStatement) -> String {
        if typedef.is_empty() {
            return "/* empty typedef */".to_string();
        }

        if let TypeRef::Function(function) = typedef.ty() {
            let lines: Vec<String> = typedef
                .aliases()
                .iter()
                .map(|alias| format!("typedef {};", self.generate_callback(alias, function)))
                .collect();

            return self.join_lines(lines);
        }

        let rendered = match typedef.ty() {
            TypeRef::Named(name) => name.clone(),
            TypeRef::Struct(statement) => self.generate_struct(statement),
            TypeRef::Union(statement) => self.generate_union(statement),
            TypeRef::Enum(statement) => self.generate_enum(statement),
            other => format!("void* /* unknown type alias [{}] */", other.kind()),
        };

        format!("typedef {} {};", rendered, typedef.aliases().join(", "))
    }

    fn generate_callback(&self, alias: &str, function: &AnonymousFunctionStatement) -> String {
        format!(
            "{} (*{})({})",
            function.return_type(),
            alias,
            self.generate_arguments(function)
        )
    }

    fn generate_root_function(&self, function: &FunctionStatement) -> String {
        format!(
            "extern {} {}({});",
            function.return_type(),
            function.name(),
            self.generate_arguments(function.signature())
        )
    }

    fn generate_arguments(&self, function: &AnonymousFunctionStatement) -> String {
        let mut arguments: Vec<String> = function
            .arguments()
            .iter()
            .map(|argument| match argument.name() {
                Some(name) => format!("{} {}", argument.ty(), name),
                None => argument.ty().to_string(),
            })
            .collect();

        // Strict prototype style: an empty list is `(void)`, never `()`.
        if arguments.is_empty() {
            arguments.push("void".to_string());
        }

        arguments.join(", ")
    }

    fn generate_root_enum(&self, statement: &EnumStatement) -> String {
        if statement.is_empty() {
            return format!("/* empty enum [{}] */", statement.name());
        }

        self.generate_typedef(&TypedefStatement::new(statement.clone(), [statement.name()]))
    }

    fn generate_enum(&self, statement: &EnumStatement) -> String {
        if statement.is_empty() {
            return format!("/* empty enum [{}] */", statement.name());
        }

        let mut lines = vec![format!("enum {} {{", statement.name())];

        for (index, case) in statement.cases().iter().enumerate() {
            let mut line = format!("{} = {}", case.name(), case.value());
            if index + 1 != statement.len() {
                line.push(',');
            }
            lines.push(self.indent_text(&line));
        }

        lines.push("}".to_string());

        self.join_lines(lines)
    }

    fn generate_root_struct(&self, statement: &StructStatement) -> String {
        let Some(name) = statement.name() else {
            return "/* non-renderable type [anonymous struct] */".to_string();
        };

        if statement.is_empty() {
            return format!("/* empty struct [{name}] */");
        }

        self.generate_typedef(&TypedefStatement::new(statement.clone(), [name]))
    }

    fn generate_struct(&self, statement: &StructStatement) -> String {
        if statement.is_empty() {
            // C forbids empty aggregates.
            return "void* /* empty struct */".to_string();
        }

        let header = match statement.name() {
            Some(name) => format!("struct {name} {{"),
            None => "struct {".to_string(),
        };

        let lines = vec![
            header,
            self.indent_text(&self.generate_record(statement)),
            "}".to_string(),
        ];

        self.join_lines(lines)
    }

    fn generate_root_union(&self, statement: &UnionStatement) -> String {
        let Some(name) = statement.name() else {
            return "/* non-renderable type [anonymous union] */".to_string();
        };

        if statement.is_empty() {
            return format!("/* empty union [{name}] */");
        }

        self.generate_typedef(&TypedefStatement::new(statement.clone(), [name]))
    }

    fn generate_union(&self, statement: &UnionStatement) -> String {
        if statement.is_empty() {
            return "void* /* empty union */".to_string();
        }

        let header = match statement.name() {
            Some(name) => format!("union {name} {{"),
            None => "union {".to_string(),
        };

        let lines = vec![
            header,
            self.indent_text(&self.generate_record(statement)),
            "}".to_string(),
        ];

        self.join_lines(lines)
    }

    fn generate_record(&self, record: &impl Record) -> String {
        let lines: Vec<String> = record
            .fields()
            .iter()
            .map(|field| format!("{} {};", self.generate_field_type(field.ty()), field.name()))
            .collect();

        self.join_lines(lines)
    }

    fn generate_field_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(name) => name.clone(),
            TypeRef::Struct(statement) => self.generate_struct(statement),
            TypeRef::Union(statement) => self.generate_union(statement),
            // Lossy fallback for kinds a field cannot carry in C.
            _ => "void*".to_string(),
        }
    }

    fn join_lines(&self, lines: Vec<String>) -> String {
        lines.join(&self.delimiter)
    }

    /// Re-indent a pre-rendered, possibly multi-line fragment by one level.
    fn indent_text(&self, text: &str) -> String {
        let unit = self.indent.as_str();
        let lines: Vec<String> = text
            .split(self.delimiter.as_str())
            .map(|line| format!("{unit}{line}"))
            .collect();

        self.join_lines(lines)
    }
}

impl Default for CGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for CGenerator {
    fn generate<'a>(&self, definition: impl Into<Definition<'a>>) -> String {
        match definition.into() {
            Definition::File(file) => self.generate_file(file),
            Definition::Statement(statement) => self.generate_statement(statement),
        }
    }
}
