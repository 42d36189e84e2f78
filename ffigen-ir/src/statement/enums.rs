//! Enum declarations and their cases.

use serde::Serialize;

/// A single `name = value` case inside an [`EnumStatement`].
///
/// Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumCase {
    name: String,
    value: u32,
}

impl EnumCase {
    /// Create a case with an explicit value.
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [case != \"\"] failed");
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// A named C enum with ordered, auto-numbered cases.
///
/// A case added without an explicit value receives the previous case's
/// value plus one, or zero when it is the first case. Explicit values
/// always win, and neither case names nor values are deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumStatement {
    name: String,
    cases: Vec<EnumCase>,
}

impl EnumStatement {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "precondition [name != \"\"] failed");
        Self {
            name,
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a case, auto-numbering it when `value` is `None`.
    pub fn add_case(&mut self, name: impl Into<String>, value: impl Into<Option<u32>>) -> &EnumCase {
        let value = value.into().unwrap_or_else(|| {
            self.cases.last().map_or(0, |last| last.value() + 1)
        });
        self.cases.push(EnumCase::new(name, value));
        &self.cases[self.cases.len() - 1]
    }

    /// Copy-on-write counterpart of [`add_case`](Self::add_case): clones the
    /// enum, adds the case to the clone, and returns the clone.
    pub fn with_case(&self, name: impl Into<String>, value: impl Into<Option<u32>>) -> Self {
        let mut this = self.clone();
        this.add_case(name, value);
        this
    }

    /// Exact, case-sensitive lookup by case name.
    pub fn has_case(&self, name: &str) -> bool {
        self.cases.iter().any(|case| case.name() == name)
    }

    pub fn cases(&self) -> &[EnumCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnumStatement {
    type Item = &'a EnumCase;
    type IntoIter = std::slice::Iter<'a, EnumCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
