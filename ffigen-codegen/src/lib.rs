//! C declaration source generation for the `ffigen-ir` model.
//!
//! The entry point is [`CGenerator`], a [`Generator`] that walks a
//! [`ffigen_ir::File`] (or any standalone statement) and emits C89/C99
//! declaration syntax. Rendering is total: it always terminates with
//! output, degrading unrenderable or empty constructs to conspicuous
//! comment markers (`/* ... */`) or safe substitutes (`void`, `void*`)
//! instead of failing.

mod c;
mod generator;
mod indent;

pub use c::CGenerator;
pub use generator::Generator;
pub use indent::Indent;
