use crate::doc::transform_doc;
use crate::error::{CodegenError, Result};
use crate::file::KotlinFile;
use crate::fun_spec::{FunSpec, ParameterSpec, TypeVariable};
use crate::resolver::TypeResolver;
use kotgen_java::{BindingClass, BindingMethod, ImportMap, TypeRef};
use tracing::debug;

/// Return-type policy: a method whose reactive return type carries a
/// `Void` argument emits a meaningless sentinel, and its wrapper maps
/// it to `Unit`.
pub fn emits_unit(return_type: &TypeRef) -> bool {
    return_type
        .type_args()
        .iter()
        .any(|arg| arg.mentions("Void"))
}

/// Builds the extension function wrapping one binding method.
///
/// The first parameter becomes the receiver; the remaining parameters
/// are declared in order and passed through positionally after `this`.
pub fn fun_for_method(
    method: &BindingMethod,
    binding_class: &str,
    imports: &ImportMap,
) -> Result<FunSpec> {
    let type_variable_names: Vec<String> = method
        .type_parameters
        .iter()
        .map(|tp| tp.name.clone())
        .collect();
    let resolver = TypeResolver::with_type_variables(imports, type_variable_names);

    let receiver_param = method
        .parameters
        .first()
        .ok_or_else(|| CodegenError::MissingReceiver {
            method: method.name.clone(),
        })?;
    let receiver = resolver.resolve(&receiver_param.type_ref, false)?;

    let mut builder = FunSpec::builder(&method.name, receiver);

    for tp in &method.type_parameters {
        // Only the first bound is considered; multiple bounds are not
        // supported by the target declaration form.
        let bound = tp
            .bounds
            .first()
            .ok_or_else(|| CodegenError::MissingTypeBound {
                method: method.name.clone(),
                name: tp.name.clone(),
            })?;
        builder = builder.add_type_variable(TypeVariable {
            name: tp.name.clone(),
            bound: resolver.resolve(bound, false)?,
        });
    }

    let mut arg_names: Vec<&str> = Vec::new();
    for param in &method.parameters[1..] {
        let nullable = param.has_annotation("Nullable");
        builder = builder.add_parameter(ParameterSpec {
            name: param.name.clone(),
            type_name: resolver.resolve(&param.type_ref, nullable)?,
        });
        arg_names.push(&param.name);
    }

    let unit_mapped = emits_unit(&method.return_type);
    let returns = resolver.resolve(&method.return_type, method.has_annotation("Nullable"))?;

    let mut body = if arg_names.is_empty() {
        format!("{}.{}(this)", binding_class, method.name)
    } else {
        format!(
            "{}.{}(this, {})",
            binding_class,
            method.name,
            arg_names.join(", ")
        )
    };
    if unit_mapped {
        body.push_str(".map(VoidToUnit)");
    }

    Ok(builder
        .returns(returns)
        .kdoc(transform_doc(method.doc.as_deref().unwrap_or("")))
        .body(body)
        .unit_mapped(unit_mapped)
        .build())
}

/// Assembles the Kotlin file wrapping one binding class. Method order
/// is preserved; no state crosses methods.
pub fn kotlin_file_for_class(
    class: &BindingClass,
    package: Option<&str>,
    imports: &ImportMap,
) -> Result<KotlinFile> {
    let mut file = KotlinFile::new(package.map(String::from));
    for method in &class.methods {
        debug!(class = %class.name, method = %method.name, "emitting wrapper");
        file.add_fun(fun_for_method(method, &class.name, imports)?);
    }
    Ok(file)
}
