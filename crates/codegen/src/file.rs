use crate::fun_spec::FunSpec;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Adapter that maps a sentinel `Void` emission to Kotlin `Unit`,
/// imported whenever a generated body chains `.map(VoidToUnit)`.
pub const VOID_TO_UNIT_IMPORT: &str = "com.jakewharton.rxbinding.internal.VoidToUnit";

/// One generated Kotlin source file: a package header, the imports its
/// signatures require, and the extension functions in input order.
///
/// Rendering is byte-deterministic: imports are collected from the
/// resolved signatures (not copied from the Java source) and sorted.
#[derive(Debug, Clone)]
pub struct KotlinFile {
    pub package: Option<String>,
    funs: Vec<FunSpec>,
    unit_adapter_import: String,
}

impl KotlinFile {
    pub fn new(package: Option<String>) -> Self {
        Self {
            package,
            funs: Vec::new(),
            unit_adapter_import: VOID_TO_UNIT_IMPORT.to_string(),
        }
    }

    /// Overrides the unit-adapter import for bindings living outside
    /// the default library layout.
    pub fn with_unit_adapter(mut self, fqn: impl Into<String>) -> Self {
        self.unit_adapter_import = fqn.into();
        self
    }

    pub fn add_fun(&mut self, fun: FunSpec) {
        self.funs.push(fun);
    }

    pub fn funs(&self) -> &[FunSpec] {
        &self.funs
    }

    pub fn is_empty(&self) -> bool {
        self.funs.is_empty()
    }

    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        for fun in &self.funs {
            let mut names = Vec::new();
            fun.receiver.collect_class_names(&mut names);
            for tv in &fun.type_variables {
                tv.bound.collect_class_names(&mut names);
            }
            for param in &fun.parameters {
                param.type_name.collect_class_names(&mut names);
            }
            fun.returns.collect_class_names(&mut names);

            for name in names {
                let in_scope = name.import_package().is_some_and(|pkg| {
                    pkg == "kotlin" || pkg == "java.lang" || Some(pkg) == self.package.as_deref()
                });
                if in_scope {
                    continue;
                }
                if let Some(path) = name.import_path() {
                    imports.insert(path);
                }
            }
        }
        if self.funs.iter().any(|f| f.unit_mapped) {
            imports.insert(self.unit_adapter_import.clone());
        }
        imports
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(package) = &self.package {
            let _ = writeln!(out, "package {}", package);
            out.push('\n');
        }

        let imports = self.collect_imports();
        if !imports.is_empty() {
            for import in &imports {
                let _ = writeln!(out, "import {}", import);
            }
            out.push('\n');
        }

        for (i, fun) in self.funs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            fun.render(&mut out);
        }
        out
    }
}
