use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Java primitive type names. Everything else is a reference type.
pub const PRIMITIVE_TYPES: [&str; 9] = [
    "boolean", "byte", "short", "int", "long", "char", "float", "double", "void",
];

/// Syntactic shape of a Java type as it appears in a declaration.
///
/// The parser does not resolve names; identifiers stay as written in
/// source and are qualified later through the file's [`ImportMap`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "data")]
pub enum TypeRef {
    /// Primitive or unresolved type name (e.g., "int", "View")
    Raw(String),

    /// Generic instantiation (e.g., Func1<? super Integer, Boolean>)
    Generic {
        base: Box<TypeRef>,
        args: Vec<TypeRef>,
    },

    /// Array type (e.g., int[])
    Array {
        element: Box<TypeRef>,
        dimensions: usize,
    },

    /// Wildcard type argument (e.g., ? super CharSequence)
    Wildcard {
        bound: Option<Box<TypeRef>>,
        is_upper_bound: bool, // true: extends, false: super
    },

    Unknown,
}

impl TypeRef {
    pub fn raw(s: impl Into<String>) -> Self {
        TypeRef::Raw(s.into())
    }

    /// The simple name this type is declared with, looking through
    /// generic instantiation. Arrays and wildcards have none.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            TypeRef::Raw(name) => Some(name),
            TypeRef::Generic { base, .. } => base.simple_name(),
            _ => None,
        }
    }

    /// Type arguments of a generic instantiation, empty otherwise.
    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Generic { args, .. } => args,
            _ => &[],
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Raw(name) if PRIMITIVE_TYPES.contains(&name.as_str()))
    }

    /// Reference types are everything that is not a primitive: class
    /// and interface types, type variables, generics, and arrays.
    pub fn is_reference(&self) -> bool {
        !self.is_primitive() && !matches!(self, TypeRef::Unknown)
    }

    /// Whether `name` occurs anywhere in this type, including inside
    /// generic arguments, array elements, and wildcard bounds.
    pub fn mentions(&self, name: &str) -> bool {
        match self {
            TypeRef::Raw(n) => n == name,
            TypeRef::Generic { base, args } => {
                base.mentions(name) || args.iter().any(|a| a.mentions(name))
            }
            TypeRef::Array { element, .. } => element.mentions(name),
            TypeRef::Wildcard { bound, .. } => {
                bound.as_ref().is_some_and(|b| b.mentions(name))
            }
            TypeRef::Unknown => false,
        }
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Unknown
    }
}

impl fmt::Display for TypeRef {
    /// Renders the type back in Java syntax, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Raw(name) => f.write_str(name),
            TypeRef::Generic { base, args } => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeRef::Array {
                element,
                dimensions,
            } => {
                write!(f, "{}", element)?;
                for _ in 0..*dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            TypeRef::Wildcard { bound: None, .. } => f.write_str("?"),
            TypeRef::Wildcard {
                bound: Some(bound),
                is_upper_bound,
            } => {
                let keyword = if *is_upper_bound { "extends" } else { "super" };
                write!(f, "? {} {}", keyword, bound)
            }
            TypeRef::Unknown => f.write_str("<unknown>"),
        }
    }
}

/// Simple name -> fully-qualified name mapping for one source file.
///
/// The parser yields type names exactly as written, so qualification
/// happens through this map. It is carried explicitly through every
/// resolution call; insertion order is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportMap {
    entries: IndexMap<String, String>,
}

impl ImportMap {
    /// Registers a fully-qualified import, keyed by its simple name.
    /// Later imports of the same simple name do not override earlier
    /// ones, matching javac's rejection of ambiguous single imports.
    pub fn insert(&mut self, fqn: impl Into<String>) {
        let fqn = fqn.into();
        let simple = fqn.rsplit('.').next().unwrap_or(&fqn).to_string();
        self.entries.entry(simple).or_insert(fqn);
    }

    pub fn resolve(&self, simple_name: &str) -> Option<&str> {
        self.entries.get(simple_name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavaParameter {
    pub name: String,
    pub type_ref: TypeRef,
    /// Annotation simple names as written (NonNull, Nullable, ...).
    pub annotations: Vec<String>,
}

impl JavaParameter {
    pub fn is_reference(&self) -> bool {
        self.type_ref.is_reference()
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a == name)
    }
}

/// A method-level generic type parameter and its declared bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavaTypeParameter {
    pub name: String,
    pub bounds: Vec<TypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingMethod {
    pub name: String,
    pub annotations: Vec<String>,
    pub type_parameters: Vec<JavaTypeParameter>,
    pub parameters: Vec<JavaParameter>,
    pub return_type: TypeRef,
    /// Raw Javadoc content between `/**` and `*/`, leaders intact.
    pub doc: Option<String>,
    /// Source text of each top-level body statement, in order.
    pub body_statements: Vec<String>,
}

impl BindingMethod {
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a == name)
    }

    /// Signature for diagnostics (e.g. `RxView#clicks(View)`).
    pub fn pretty_signature(&self, class_name: &str) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| p.type_ref.to_string())
            .collect();
        format!("{}#{}({})", class_name, self.name, params.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingClass {
    pub name: String,
    pub modifiers: Vec<String>,
    /// Public static methods, in source order.
    pub methods: Vec<BindingMethod>,
}

/// The parsed model of one Java source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceUnit {
    pub package: Option<String>,
    pub imports: ImportMap,
    pub classes: Vec<BindingClass>,
}
