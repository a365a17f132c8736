//! Authoring-convention checks over parsed binding sources.
//!
//! Runs before generation: every binding method must carry the marker
//! annotations, declare wildcard bounds on its callback types, and
//! open its body with the null-check preamble. Any violation fails the
//! build with a message naming the offending class, method, and
//! parameter. Generated code is committed, so a silently wrong wrapper
//! is worse than a stopped build.

use kotgen_java::{BindingClass, BindingMethod, SourceUnit, TypeRef};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Annotations every binding method must declare.
pub const METHOD_ANNOTATIONS: [&str; 2] = ["CheckResult", "NonNull"];

/// The fixed null-check call shape the body preamble must match.
static NULL_CHECK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^checkNotNull\((?P<param>[A-Za-z_][A-Za-z0-9_]*), "(?P<message>[^"]*)"\);$"#)
        .unwrap()
});

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required @{annotation} method annotation on {class}#{method}")]
    MissingMethodAnnotation {
        class: String,
        method: String,
        annotation: String,
    },
    #[error("Missing required @NonNull annotation on {class}#{method} parameter: \"{parameter}\"")]
    MissingParameterAnnotation {
        class: String,
        method: String,
        parameter: String,
    },
    #[error(
        "Missing wildcard type parameter declaration on {class}#{method} Func1 parameter: \"{parameter}\""
    )]
    MissingFuncWildcard {
        class: String,
        method: String,
        parameter: String,
    },
    #[error(
        "Missing wildcard type parameter declaration on {class}#{method}'s Action1 return type"
    )]
    MissingActionWildcard { class: String, method: String },
    #[error(
        "Missing proper checkNotNull call on parameter {parameter} in {signature}\nExpected:\t{expected}\nFound:\t{found}"
    )]
    MissingNullCheck {
        signature: String,
        parameter: String,
        expected: String,
        found: String,
    },
}

/// Validates every binding method of a parsed source file.
pub fn validate_unit(unit: &SourceUnit) -> Result<(), ValidationError> {
    for class in &unit.classes {
        for method in &class.methods {
            debug!(class = %class.name, method = %method.name, "validating binding");
            verify_method_annotations(class, method)?;
            verify_parameters(class, method)?;
            verify_return_type(class, method)?;
            verify_null_checks(class, method)?;
        }
    }
    Ok(())
}

/// Binding methods must declare `@CheckResult` and `@NonNull`.
fn verify_method_annotations(
    class: &BindingClass,
    method: &BindingMethod,
) -> Result<(), ValidationError> {
    for annotation in METHOD_ANNOTATIONS {
        if !method.has_annotation(annotation) {
            return Err(ValidationError::MissingMethodAnnotation {
                class: class.name.clone(),
                method: method.name.clone(),
                annotation: annotation.to_string(),
            });
        }
    }
    Ok(())
}

/// Reference-typed parameters must carry `@NonNull`, and a `Func1`
/// second parameter must declare a wildcard first type argument.
fn verify_parameters(class: &BindingClass, method: &BindingMethod) -> Result<(), ValidationError> {
    for param in &method.parameters {
        if param.is_reference() && !param.has_annotation("NonNull") {
            return Err(ValidationError::MissingParameterAnnotation {
                class: class.name.clone(),
                method: method.name.clone(),
                parameter: param.name.clone(),
            });
        }
    }

    if let Some(param) = method.parameters.get(1) {
        if param.type_ref.simple_name() == Some("Func1") && !has_wildcard_first_arg(&param.type_ref)
        {
            return Err(ValidationError::MissingFuncWildcard {
                class: class.name.clone(),
                method: method.name.clone(),
                parameter: param.name.clone(),
            });
        }
    }
    Ok(())
}

/// An `Action1` return type must declare a wildcard type argument.
fn verify_return_type(class: &BindingClass, method: &BindingMethod) -> Result<(), ValidationError> {
    if method.return_type.simple_name() == Some("Action1")
        && !has_wildcard_first_arg(&method.return_type)
    {
        return Err(ValidationError::MissingActionWildcard {
            class: class.name.clone(),
            method: method.name.clone(),
        });
    }
    Ok(())
}

fn has_wildcard_first_arg(type_ref: &TypeRef) -> bool {
    matches!(type_ref.type_args().first(), Some(TypeRef::Wildcard { .. }))
}

/// Each reference-typed parameter needs a matching `checkNotNull` call
/// at the start of the body, in parameter order.
fn verify_null_checks(class: &BindingClass, method: &BindingMethod) -> Result<(), ValidationError> {
    let reference_params = method.parameters.iter().filter(|p| p.is_reference());

    for (index, param) in reference_params.enumerate() {
        let expected = format!("checkNotNull({0}, \"{0} == null\");", param.name);
        let found = method
            .body_statements
            .get(index)
            .map(|s| s.as_str())
            .unwrap_or("<no statement>");

        let matches_pattern = NULL_CHECK.captures(found).is_some_and(|caps| {
            &caps["param"] == param.name && caps["message"] == format!("{} == null", param.name)
        });
        if !matches_pattern {
            return Err(ValidationError::MissingNullCheck {
                signature: method.pretty_signature(&class.name),
                parameter: param.name.clone(),
                expected,
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotgen_java::JavaParser;

    fn validate(source: &str) -> Result<(), ValidationError> {
        let unit = JavaParser::new().unwrap().parse_source(source).unwrap();
        validate_unit(&unit)
    }

    const VALID: &str = r#"
public final class RxView {
  @CheckResult @NonNull
  public static Observable<Void> clicks(@NonNull View view) {
    checkNotNull(view, "view == null");
    return new ViewClickObservable(view);
  }
}
"#;

    #[test]
    fn a_conventional_binding_passes() {
        assert!(validate(VALID).is_ok());
    }

    #[test]
    fn missing_method_annotation_names_the_method() {
        let err = validate(
            "public final class RxView {\n\
             @NonNull\n\
             public static Observable<Void> clicks(@NonNull View view) {\n\
             checkNotNull(view, \"view == null\");\n\
             return null;\n\
             }\n\
             }\n",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required @CheckResult method annotation on RxView#clicks"
        );
    }

    #[test]
    fn missing_parameter_annotation_names_the_parameter() {
        let err = validate(
            "public final class RxView {\n\
             @CheckResult @NonNull\n\
             public static Observable<Void> clicks(View view) {\n\
             checkNotNull(view, \"view == null\");\n\
             return null;\n\
             }\n\
             }\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingParameterAnnotation { .. }
        ));
        assert!(err.to_string().contains("RxView#clicks"));
        assert!(err.to_string().contains("\"view\""));
    }

    #[test]
    fn primitive_parameters_need_no_annotation() {
        assert!(
            validate(
                "public final class RxSeekBar {\n\
                 @CheckResult @NonNull\n\
                 public static Action1<? super Integer> progress(@NonNull SeekBar view, boolean animate) {\n\
                 checkNotNull(view, \"view == null\");\n\
                 return null;\n\
                 }\n\
                 }\n",
            )
            .is_ok()
        );
    }

    #[test]
    fn func1_second_parameter_requires_a_wildcard() {
        let err = validate(
            "public final class RxTextView {\n\
             @CheckResult @NonNull\n\
             public static Observable<Integer> editorActions(@NonNull TextView view,\n\
             @NonNull Func1<Integer, Boolean> handled) {\n\
             checkNotNull(view, \"view == null\");\n\
             checkNotNull(handled, \"handled == null\");\n\
             return null;\n\
             }\n\
             }\n",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing wildcard type parameter declaration on RxTextView#editorActions Func1 parameter: \"handled\""
        );
    }

    #[test]
    fn action1_return_requires_a_wildcard() {
        let err = validate(
            "public final class RxTextView {\n\
             @CheckResult @NonNull\n\
             public static Action1<CharSequence> text(@NonNull TextView view) {\n\
             checkNotNull(view, \"view == null\");\n\
             return null;\n\
             }\n\
             }\n",
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingActionWildcard { .. }));
        assert!(err.to_string().contains("RxTextView#text"));
    }

    #[test]
    fn null_checks_must_appear_in_parameter_order() {
        let err = validate(
            "public final class RxTextView {\n\
             @CheckResult @NonNull\n\
             public static Observable<Integer> editorActions(@NonNull TextView view,\n\
             @NonNull Func1<? super Integer, Boolean> handled) {\n\
             checkNotNull(handled, \"handled == null\");\n\
             checkNotNull(view, \"view == null\");\n\
             return null;\n\
             }\n\
             }\n",
        )
        .unwrap_err();
        match &err {
            ValidationError::MissingNullCheck {
                parameter,
                expected,
                found,
                signature,
            } => {
                assert_eq!(parameter, "view");
                assert_eq!(expected, "checkNotNull(view, \"view == null\");");
                assert_eq!(found, "checkNotNull(handled, \"handled == null\");");
                assert!(signature.starts_with("RxTextView#editorActions("));
            }
            other => panic!("expected null-check error, got {other:?}"),
        }
    }

    #[test]
    fn a_missing_null_check_statement_is_reported() {
        let err = validate(
            "public final class RxView {\n\
             @CheckResult @NonNull\n\
             public static Observable<Void> clicks(@NonNull View view) {\n\
             return new ViewClickObservable(view);\n\
             }\n\
             }\n",
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingNullCheck { .. }));
    }
}
