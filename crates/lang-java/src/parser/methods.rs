use super::JavaParser;
use crate::model::{BindingClass, BindingMethod, JavaParameter, JavaTypeParameter, TypeRef};
use tracing::debug;
use tree_sitter::Node;

impl JavaParser {
    /// Collects the top-level classes of a compilation unit.
    ///
    /// Only direct children of the program node are considered; nested
    /// and anonymous classes never produce bindings and are skipped by
    /// construction (see `extract_class`).
    pub(crate) fn extract_classes(&self, root: Node, source: &str) -> Vec<BindingClass> {
        let mut classes = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "class_declaration" {
                if let Some(class) = self.extract_class(child, source) {
                    classes.push(class);
                }
            }
        }
        classes
    }

    fn extract_class(&self, node: Node, source: &str) -> Option<BindingClass> {
        let name = node
            .child_by_field_name("name")?
            .utf8_text(source.as_bytes())
            .ok()?
            .to_string();
        let (modifiers, _annotations) = split_modifiers(node, source);

        let mut methods = Vec::new();
        let body = node.child_by_field_name("body")?;
        let mut cursor = body.walk();
        for member in body.children(&mut cursor) {
            // Direct member methods only. A nested class_declaration is
            // a distinct member kind, so its methods are not visited.
            if member.kind() == "method_declaration" {
                if let Some(method) = self.extract_method(member, source) {
                    methods.push(method);
                }
            }
        }

        debug!(class = %name, methods = methods.len(), "extracted binding class");
        Some(BindingClass {
            name,
            modifiers,
            methods,
        })
    }

    /// Models one member method. Returns `None` for anything that is
    /// not `public static`; those are implementation details of the
    /// binding class, not bindings.
    fn extract_method(&self, node: Node, source: &str) -> Option<BindingMethod> {
        let (modifiers, annotations) = split_modifiers(node, source);
        if !modifiers.iter().any(|m| m == "public") || !modifiers.iter().any(|m| m == "static") {
            return None;
        }

        let name = node
            .child_by_field_name("name")?
            .utf8_text(source.as_bytes())
            .ok()?
            .to_string();
        let return_type = match node.child_by_field_name("type") {
            Some(t) => self.parse_type_node(t, source),
            None => TypeRef::Unknown,
        };

        Some(BindingMethod {
            name,
            annotations,
            type_parameters: self.extract_type_parameters(node, source),
            parameters: self.extract_parameters(node, source),
            return_type,
            doc: javadoc_for(node, source),
            body_statements: body_statements(node, source),
        })
    }

    fn extract_type_parameters(&self, node: Node, source: &str) -> Vec<JavaTypeParameter> {
        let Some(params_node) = node.child_by_field_name("type_parameters") else {
            return vec![];
        };

        let mut result = Vec::new();
        let mut cursor = params_node.walk();
        for child in params_node.children(&mut cursor) {
            if child.kind() != "type_parameter" {
                continue;
            }
            let mut name = None;
            let mut bounds = Vec::new();
            let mut inner = child.walk();
            for part in child.children(&mut inner) {
                match part.kind() {
                    "type_identifier" => {
                        name = part.utf8_text(source.as_bytes()).ok().map(String::from);
                    }
                    "type_bound" => {
                        let mut bound_cursor = part.walk();
                        for bound in part.children(&mut bound_cursor) {
                            if !matches!(bound.kind(), "extends" | "&") {
                                bounds.push(self.parse_type_node(bound, source));
                            }
                        }
                    }
                    _ => {}
                }
            }
            if let Some(name) = name {
                result.push(JavaTypeParameter { name, bounds });
            }
        }
        result
    }

    fn extract_parameters(&self, node: Node, source: &str) -> Vec<JavaParameter> {
        let Some(params_node) = node.child_by_field_name("parameters") else {
            return vec![];
        };

        let mut result = Vec::new();
        let mut cursor = params_node.walk();
        for child in params_node.children(&mut cursor) {
            match child.kind() {
                "formal_parameter" => {
                    let Some(type_node) = child.child_by_field_name("type") else {
                        continue;
                    };
                    let type_ref = self.parse_type_node(type_node, source);
                    let name = child
                        .child_by_field_name("name")
                        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
                        .unwrap_or("arg")
                        .to_string();
                    let (_, annotations) = split_modifiers(child, source);

                    result.push(JavaParameter {
                        name,
                        type_ref,
                        annotations,
                    });
                }
                "spread_parameter" => {
                    // Varargs surface as an array, matching how the
                    // delegated call receives them.
                    let mut type_ref = TypeRef::Unknown;
                    let mut name = "arg".to_string();
                    let mut inner = child.walk();
                    for part in child.children(&mut inner) {
                        if part.kind() == "variable_declarator" {
                            if let Some(n) = part.child_by_field_name("name") {
                                if let Ok(text) = n.utf8_text(source.as_bytes()) {
                                    name = text.to_string();
                                }
                            }
                        } else if part.kind() != "..." && part.kind() != "modifiers" && part.is_named() {
                            type_ref = TypeRef::Array {
                                element: Box::new(self.parse_type_node(part, source)),
                                dimensions: 1,
                            };
                        }
                    }
                    let (_, annotations) = split_modifiers(child, source);

                    result.push(JavaParameter {
                        name,
                        type_ref,
                        annotations,
                    });
                }
                _ => {}
            }
        }
        result
    }
}

/// Splits a declaration's modifier list into keyword modifiers and
/// annotation simple names (in declaration order).
fn split_modifiers(node: Node, source: &str) -> (Vec<String>, Vec<String>) {
    let mut modifiers = Vec::new();
    let mut annotations = Vec::new();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "modifiers" {
            continue;
        }
        let mut inner = child.walk();
        for part in child.children(&mut inner) {
            match part.kind() {
                "marker_annotation" | "annotation" => {
                    if let Some(name) = part
                        .child_by_field_name("name")
                        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
                    {
                        // A qualified annotation keeps only its simple name.
                        let simple = name.rsplit('.').next().unwrap_or(name);
                        annotations.push(simple.to_string());
                    }
                }
                _ => {
                    if let Ok(text) = part.utf8_text(source.as_bytes()) {
                        modifiers.push(text.to_string());
                    }
                }
            }
        }
    }
    (modifiers, annotations)
}

/// The Javadoc block immediately preceding a declaration, with the
/// `/**` and `*/` delimiters removed and per-line leaders intact.
fn javadoc_for(node: Node, source: &str) -> Option<String> {
    let sibling = node.prev_sibling()?;
    if sibling.kind() != "block_comment" {
        return None;
    }
    let text = sibling.utf8_text(source.as_bytes()).ok()?;
    let content = text.strip_prefix("/**")?.strip_suffix("*/")?;
    Some(content.to_string())
}

/// Source text of each top-level statement in the method body.
fn body_statements(node: Node, source: &str) -> Vec<String> {
    let Some(body) = node.child_by_field_name("body") else {
        return vec![];
    };
    let mut statements = Vec::new();
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        if !child.is_named() || matches!(child.kind(), "line_comment" | "block_comment") {
            continue;
        }
        if let Ok(text) = child.utf8_text(source.as_bytes()) {
            statements.push(text.trim().to_string());
        }
    }
    statements
}
