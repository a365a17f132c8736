mod imports;
mod methods;
mod types;

use crate::error::{JavaSourceError, Result};
use crate::model::SourceUnit;

/// Parses Java binding sources into [`SourceUnit`] models.
///
/// Only the declarations the generator consumes are extracted: the
/// package, single-type imports, top-level classes, and their `public
/// static` member methods. Nested and anonymous classes are never
/// descended into.
pub struct JavaParser {
    pub language: tree_sitter::Language,
}

impl JavaParser {
    pub fn new() -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();
        Ok(Self { language })
    }

    pub fn parse_source(&self, source: &str) -> Result<SourceUnit> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| JavaSourceError::Grammar(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| JavaSourceError::Parse("tree-sitter produced no tree".to_string()))?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(JavaSourceError::Parse(
                "source contains syntax errors".to_string(),
            ));
        }

        let (package, imports) = self.extract_package_and_imports(root, source);
        let classes = self.extract_classes(root, source);
        Ok(SourceUnit {
            package,
            imports,
            classes,
        })
    }
}
