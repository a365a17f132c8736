use crate::error::{CodegenError, Result};
use crate::types::{ClassName, TypeName, Variance};
use kotgen_java::{ImportMap, TypeRef};

/// Resolves Java type shapes into Kotlin [`TypeName`]s.
///
/// Resolution is purely structural and deterministic: the same type
/// and import map always produce the same result. Convention policy
/// (wildcard bounds and the like) is the validator's concern, not the
/// resolver's.
pub struct TypeResolver<'a> {
    imports: &'a ImportMap,
    /// Method-level type variable names in scope (e.g. `T`).
    type_variables: Vec<String>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(imports: &'a ImportMap) -> Self {
        Self {
            imports,
            type_variables: Vec::new(),
        }
    }

    pub fn with_type_variables(imports: &'a ImportMap, names: Vec<String>) -> Self {
        Self {
            imports,
            type_variables: names,
        }
    }

    pub fn resolve(&self, type_ref: &TypeRef, nullable: bool) -> Result<TypeName> {
        match type_ref {
            TypeRef::Raw(name) => Ok(self.resolve_name(name).nullable(nullable)),
            TypeRef::Generic { base, args } => {
                let base_name = base.simple_name().ok_or_else(|| {
                    CodegenError::UnsupportedType(format!(
                        "generic instantiation of non-class type '{}'",
                        base
                    ))
                })?;
                let raw = self.class_name_for(base_name);
                let args = args
                    .iter()
                    .map(|arg| self.resolve(arg, false))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TypeName::Parameterized {
                    raw,
                    args,
                    nullable,
                })
            }
            TypeRef::Array {
                element,
                dimensions,
            } => Ok(self.resolve_array(element, *dimensions)?.nullable(nullable)),
            TypeRef::Wildcard { bound: None, .. } => Ok(TypeName::Star),
            TypeRef::Wildcard {
                bound: Some(bound),
                is_upper_bound,
            } => {
                let variance = if *is_upper_bound {
                    Variance::Out
                } else {
                    Variance::In
                };
                Ok(TypeName::Projected {
                    variance,
                    inner: Box::new(self.resolve(bound, false)?),
                })
            }
            TypeRef::Unknown => Err(CodegenError::UnsupportedType(
                "unknown type shape".to_string(),
            )),
        }
    }

    fn resolve_name(&self, name: &str) -> TypeName {
        if self.type_variables.iter().any(|tv| tv == name) {
            return TypeName::TypeVariableRef {
                name: name.to_string(),
                nullable: false,
            };
        }
        TypeName::class(self.class_name_for(name))
    }

    fn class_name_for(&self, name: &str) -> ClassName {
        if let Some(known) = kotlin_equivalent(name) {
            return known;
        }
        if let Some(fqn) = self.imports.resolve(name) {
            return ClassName::from_fqn(fqn);
        }
        // A nested reference (Outer.Inner) qualifies through its
        // outermost segment when that one was imported.
        if let Some((outer, _)) = name.split_once('.') {
            if let Some(fqn) = self.imports.resolve(outer) {
                if let Some((package, _)) = fqn.rsplit_once('.') {
                    return ClassName {
                        package: Some(package.to_string()),
                        simple: name.to_string(),
                    };
                }
            }
        }
        // Best-effort guess by simple name only; the generated file
        // will carry no import for it.
        ClassName::best_guess(name)
    }

    fn resolve_array(&self, element: &TypeRef, dimensions: usize) -> Result<TypeName> {
        let innermost = match element {
            TypeRef::Raw(name) if element.is_primitive() && name.as_str() != "void" => {
                TypeName::class(ClassName::kotlin(specialized_array(name)))
            }
            _ => TypeName::parameterized(
                ClassName::kotlin("Array"),
                vec![self.resolve(element, false)?],
            ),
        };
        let mut result = innermost;
        for _ in 1..dimensions {
            result = TypeName::parameterized(ClassName::kotlin("Array"), vec![result]);
        }
        Ok(result)
    }
}

/// Kotlin standard-library equivalents of Java primitives and the
/// `java.lang` types that appear in binding signatures.
fn kotlin_equivalent(name: &str) -> Option<ClassName> {
    let simple = match name {
        "Object" => "Any",
        "void" | "Void" => "Unit",
        "int" | "Integer" => "Int",
        "boolean" | "Boolean" => "Boolean",
        "long" | "Long" => "Long",
        "short" | "Short" => "Short",
        "byte" | "Byte" => "Byte",
        "char" | "Character" => "Char",
        "float" | "Float" => "Float",
        "double" | "Double" => "Double",
        "String" => "String",
        "CharSequence" => "CharSequence",
        "Number" => "Number",
        "Throwable" => "Throwable",
        _ => return None,
    };
    Some(ClassName::kotlin(simple))
}

fn specialized_array(primitive: &str) -> String {
    let mut chars = primitive.chars();
    let capitalized: String = chars
        .next()
        .map(|c| c.to_ascii_uppercase())
        .into_iter()
        .chain(chars)
        .collect();
    format!("{}Array", capitalized)
}
