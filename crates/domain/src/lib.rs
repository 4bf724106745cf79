//! Code Builder Domain - Core project model
//!
//! This crate defines the project tree a collaborator UI assembles by
//! dragging code-element blocks onto a canvas: a project owns methods,
//! methods own ordered code elements, block-structured elements own
//! children. All types here are pure Rust with no I/O dependencies.

pub mod catalog;
pub mod element;
pub mod error;
pub mod export;
pub mod id;
pub mod language;
pub mod project;

pub use catalog::{BlockCategory, BlockDescriptor};
pub use element::{CodeElement, Position, Properties};
pub use error::{ProjectError, ProjectResult};
pub use id::generate_id;
pub use language::TargetLanguage;
pub use project::{Method, Parameter, ProjectData};
