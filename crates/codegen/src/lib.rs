//! Code Builder Codegen - the code-generation engine.
//!
//! A stateless mapping from a [`codebuilder_domain::ProjectData`] tree to
//! language-specific source text. [`generate`] dispatches on the project's
//! target language to one of four emitters; each emitter walks the ordered
//! method and element sequences and renders one line or block of target
//! text per element. The engine is pure and total: every recognized
//! element renders with per-field defaults, every unrecognized element
//! degrades to a comment, and no input can make it fail.

mod csharp;
mod generator;
mod java;
mod javascript;
mod python;
pub mod types;
pub mod utility;

pub use generator::generate;
pub use types::translate_type;
