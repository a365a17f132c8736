//! Kotlin code generation for Java binding classes.
//!
//! Turns parsed binding methods into extension-function wrappers:
//! resolves Java type shapes to Kotlin types through the file's import
//! map, rewrites Javadoc into KDoc, and assembles per-class Kotlin
//! source files. Generation is single-pass and stateless per method;
//! any structural surprise aborts the run rather than emitting a
//! partially wrong file.

pub mod doc;
pub mod emitter;
pub mod error;
pub mod file;
pub mod fun_spec;
pub mod resolver;
pub mod types;

pub use emitter::{emits_unit, fun_for_method, kotlin_file_for_class};
pub use error::{CodegenError, Result};
pub use file::KotlinFile;
pub use fun_spec::{FunSpec, ParameterSpec, TypeVariable};
pub use resolver::TypeResolver;
pub use types::{ClassName, TypeName, Variance};
