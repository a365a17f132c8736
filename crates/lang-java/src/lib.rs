//! Java source parsing for binding wrapper generation.
//!
//! Parses binding classes (`public static` factory methods over UI
//! widgets) into a semantic model the code generator and validator
//! consume. Name resolution is out of scope for the parser itself:
//! every type name stays as written, qualified later through the
//! per-file [`model::ImportMap`].

pub mod error;
pub mod model;
pub mod parser;

pub use error::{JavaSourceError, Result};
pub use model::{
    BindingClass, BindingMethod, ImportMap, JavaParameter, JavaTypeParameter, SourceUnit, TypeRef,
};
pub use parser::JavaParser;
