use super::JavaParser;
use crate::model::TypeRef;
use tree_sitter::Node;

impl JavaParser {
    /// Converts a type node into a [`TypeRef`], recursing through
    /// generic arguments, array elements, and wildcard bounds.
    ///
    /// Identifiers are kept exactly as written; qualification happens
    /// later against the file's import map.
    pub(crate) fn parse_type_node(&self, node: Node, source: &str) -> TypeRef {
        match node.kind() {
            "generic_type" => {
                let base = match node.child(0) {
                    Some(base_node) => self.parse_type_node(base_node, source),
                    None => TypeRef::Unknown,
                };

                let mut args = Vec::new();
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "type_arguments" {
                        let mut args_cursor = child.walk();
                        for arg in child.children(&mut args_cursor) {
                            if !matches!(arg.kind(), "<" | ">" | ",") {
                                args.push(self.parse_type_node(arg, source));
                            }
                        }
                    }
                }

                TypeRef::Generic {
                    base: Box::new(base),
                    args,
                }
            }
            "array_type" => {
                let element = match node.child_by_field_name("element") {
                    Some(e) => self.parse_type_node(e, source),
                    None => TypeRef::Unknown,
                };
                let dimensions = node
                    .child_by_field_name("dimensions")
                    .and_then(|d| d.utf8_text(source.as_bytes()).ok())
                    .map(|text| text.matches('[').count())
                    .unwrap_or(1);

                TypeRef::Array {
                    element: Box::new(element),
                    dimensions,
                }
            }
            "wildcard" => {
                let mut bound = None;
                let mut is_upper_bound = true;

                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    match child.kind() {
                        "super" => is_upper_bound = false,
                        "extends" => is_upper_bound = true,
                        "?" => {}
                        _ => bound = Some(Box::new(self.parse_type_node(child, source))),
                    }
                }

                TypeRef::Wildcard {
                    bound,
                    is_upper_bound,
                }
            }
            _ => {
                // Primitive nodes (integral_type, boolean_type, void_type, ...),
                // type_identifier, scoped_type_identifier, and anything the
                // grammar surprises us with: keep the source text.
                let text = node.utf8_text(source.as_bytes()).unwrap_or_default();
                if text.is_empty() {
                    TypeRef::Unknown
                } else {
                    TypeRef::Raw(text.to_string())
                }
            }
        }
    }
}
