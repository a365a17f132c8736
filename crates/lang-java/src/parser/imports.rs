use super::JavaParser;
use crate::model::ImportMap;
use tree_sitter::Node;

impl JavaParser {
    /// Extracts the package declaration and the single-type imports.
    ///
    /// Static imports and on-demand (`.*`) imports contribute no simple
    /// name binding, so they are skipped.
    pub(crate) fn extract_package_and_imports(
        &self,
        root: Node,
        source: &str,
    ) -> (Option<String>, ImportMap) {
        let mut package = None;
        let mut imports = ImportMap::default();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "package_declaration" => {
                    package = name_of_declaration(child, source);
                }
                "import_declaration" => {
                    let mut is_static = false;
                    let mut is_on_demand = false;
                    let mut decl_cursor = child.walk();
                    for part in child.children(&mut decl_cursor) {
                        match part.kind() {
                            "static" => is_static = true,
                            "asterisk" => is_on_demand = true,
                            _ => {}
                        }
                    }
                    if is_static || is_on_demand {
                        continue;
                    }
                    if let Some(name) = name_of_declaration(child, source) {
                        imports.insert(name);
                    }
                }
                _ => {}
            }
        }
        (package, imports)
    }
}

fn name_of_declaration(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matches!(child.kind(), "scoped_identifier" | "identifier") {
            return child
                .utf8_text(source.as_bytes())
                .ok()
                .map(|s| s.to_string());
        }
    }
    None
}
