//! Generator contract.

use ffigen_ir::Definition;

/// A rendering engine mapping a definition tree to declaration source text.
pub trait Generator {
    /// Render `definition` (a file or a standalone statement) to source
    /// text.
    ///
    /// Implementations must be total: unrecognized kinds degrade to
    /// comment markers rather than failing, so callers should treat such
    /// output as a signal of incomplete coverage, not as success.
    fn generate<'a>(&self, definition: impl Into<Definition<'a>>) -> String;
}
