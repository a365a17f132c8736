use std::fmt;

/// Declaration-site variance of a projected type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variance {
    /// `in T`: contravariant, from Java's `? super T`.
    In,
    /// `out T`: covariant, from Java's `? extends T`.
    Out,
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variance::In => f.write_str("in"),
            Variance::Out => f.write_str("out"),
        }
    }
}

/// A possibly-qualified Kotlin class name.
///
/// A `None` package records a best-effort guess by simple name: the
/// name could not be qualified through the import map. Such a type
/// still renders correctly but contributes no import.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClassName {
    pub package: Option<String>,
    pub simple: String,
}

impl ClassName {
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            simple: simple.into(),
        }
    }

    /// A name guessed from its simple form alone.
    pub fn best_guess(simple: impl Into<String>) -> Self {
        Self {
            package: None,
            simple: simple.into(),
        }
    }

    /// A type from the Kotlin standard library (always in scope).
    pub fn kotlin(simple: impl Into<String>) -> Self {
        Self::new("kotlin", simple)
    }

    /// Splits a dotted fully-qualified name on its last segment.
    pub fn from_fqn(fqn: &str) -> Self {
        match fqn.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::best_guess(fqn),
        }
    }

    pub fn canonical(&self) -> String {
        match &self.package {
            Some(package) => format!("{}.{}", package, self.simple),
            None => self.simple.clone(),
        }
    }

    /// The import this name needs, if any. A nested reference such as
    /// `TextView.OnEditorActionListener` imports only its outermost
    /// class and keeps the nested path at the use site.
    pub fn import_path(&self) -> Option<String> {
        let package = self.package.as_ref()?;
        let outermost = self.simple.split('.').next().unwrap_or(&self.simple);
        Some(format!("{}.{}", package, outermost))
    }

    /// The package an import of this name would come from.
    pub fn import_package(&self) -> Option<&str> {
        self.package.as_deref()
    }
}

/// A resolved Kotlin type, as it appears in a generated signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Class {
        name: ClassName,
        nullable: bool,
    },
    Parameterized {
        raw: ClassName,
        args: Vec<TypeName>,
        nullable: bool,
    },
    /// A method-level type variable reference (e.g. `T`).
    TypeVariableRef {
        name: String,
        nullable: bool,
    },
    /// A variance-projected argument (`in T` / `out T`).
    Projected {
        variance: Variance,
        inner: Box<TypeName>,
    },
    /// Star projection (`*`), from an unbounded Java wildcard.
    Star,
}

impl TypeName {
    pub fn class(name: ClassName) -> Self {
        TypeName::Class {
            name,
            nullable: false,
        }
    }

    pub fn parameterized(raw: ClassName, args: Vec<TypeName>) -> Self {
        TypeName::Parameterized {
            raw,
            args,
            nullable: false,
        }
    }

    /// Returns this type with its nullability flag set.
    pub fn nullable(self, nullable: bool) -> Self {
        match self {
            TypeName::Class { name, .. } => TypeName::Class { name, nullable },
            TypeName::Parameterized { raw, args, .. } => TypeName::Parameterized {
                raw,
                args,
                nullable,
            },
            TypeName::TypeVariableRef { name, .. } => TypeName::TypeVariableRef { name, nullable },
            other => other,
        }
    }

    /// Collects every qualified class name referenced by this type,
    /// for import emission.
    pub fn collect_class_names(&self, out: &mut Vec<ClassName>) {
        match self {
            TypeName::Class { name, .. } => {
                if name.package.is_some() {
                    out.push(name.clone());
                }
            }
            TypeName::Parameterized { raw, args, .. } => {
                if raw.package.is_some() {
                    out.push(raw.clone());
                }
                for arg in args {
                    arg.collect_class_names(out);
                }
            }
            TypeName::Projected { inner, .. } => inner.collect_class_names(out),
            TypeName::TypeVariableRef { .. } | TypeName::Star => {}
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Class { name, nullable } => {
                f.write_str(&name.simple)?;
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            TypeName::Parameterized {
                raw,
                args,
                nullable,
            } => {
                write!(f, "{}<", raw.simple)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")?;
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            TypeName::TypeVariableRef { name, nullable } => {
                f.write_str(name)?;
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            TypeName::Projected { variance, inner } => write!(f, "{} {}", variance, inner),
            TypeName::Star => f.write_str("*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_kotlin_syntax() {
        let func1 = TypeName::parameterized(
            ClassName::new("rx.functions", "Func1"),
            vec![
                TypeName::Projected {
                    variance: Variance::In,
                    inner: Box::new(TypeName::class(ClassName::kotlin("Int"))),
                },
                TypeName::class(ClassName::kotlin("Boolean")),
            ],
        );
        assert_eq!(func1.to_string(), "Func1<in Int, Boolean>");

        let nullable = TypeName::class(ClassName::new("android.view", "View")).nullable(true);
        assert_eq!(nullable.to_string(), "View?");

        let star = TypeName::parameterized(
            ClassName::new("rx.functions", "Action1"),
            vec![TypeName::Star],
        );
        assert_eq!(star.to_string(), "Action1<*>");
    }

    #[test]
    fn collects_imports_from_nested_arguments() {
        let observable = TypeName::parameterized(
            ClassName::new("rx", "Observable"),
            vec![TypeName::Projected {
                variance: Variance::Out,
                inner: Box::new(TypeName::class(ClassName::new("android.view", "MenuItem"))),
            }],
        );
        let mut names = Vec::new();
        observable.collect_class_names(&mut names);
        let canonical: Vec<String> = names.iter().map(|n| n.canonical()).collect();
        assert_eq!(canonical, vec!["rx.Observable", "android.view.MenuItem"]);
    }

    #[test]
    fn best_guess_names_contribute_no_import() {
        let guess = TypeName::class(ClassName::best_guess("SearchViewQueryTextEvent"));
        let mut names = Vec::new();
        guess.collect_class_names(&mut names);
        assert!(names.is_empty());
        assert_eq!(guess.to_string(), "SearchViewQueryTextEvent");
    }
}
