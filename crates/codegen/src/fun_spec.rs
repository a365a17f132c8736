use crate::types::TypeName;
use std::fmt::Write as _;

/// A named, typed parameter of a generated function.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub type_name: TypeName,
}

/// A method-level generic type variable and its (single) bound.
#[derive(Debug, Clone)]
pub struct TypeVariable {
    pub name: String,
    pub bound: TypeName,
}

/// One generated extension function, immutable once built.
///
/// Renders as a public inline single-expression function:
///
/// ```text
/// /** kdoc */
/// public inline fun <T : Adapter> AdapterView<T>.itemClicks(): Observable<Int> = RxAdapterView.itemClicks(this)
/// ```
#[derive(Debug, Clone)]
pub struct FunSpec {
    pub name: String,
    pub receiver: TypeName,
    pub type_variables: Vec<TypeVariable>,
    pub parameters: Vec<ParameterSpec>,
    pub returns: TypeName,
    pub kdoc: String,
    /// The delegation expression after `=`.
    pub body: String,
    /// Whether the body chains the value-to-unit transform.
    pub unit_mapped: bool,
}

impl FunSpec {
    pub fn builder(name: impl Into<String>, receiver: TypeName) -> FunSpecBuilder {
        FunSpecBuilder {
            name: name.into(),
            receiver,
            type_variables: Vec::new(),
            parameters: Vec::new(),
            returns: None,
            kdoc: String::new(),
            body: String::new(),
            unit_mapped: false,
        }
    }

    pub fn render(&self, out: &mut String) {
        if !self.kdoc.is_empty() {
            out.push_str("/**\n");
            for line in self.kdoc.trim_end().lines() {
                if line.is_empty() {
                    out.push_str(" *\n");
                } else {
                    let _ = writeln!(out, " * {}", line);
                }
            }
            out.push_str(" */\n");
        }

        out.push_str("public inline fun ");
        if !self.type_variables.is_empty() {
            out.push('<');
            for (i, tv) in self.type_variables.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{} : {}", tv.name, tv.bound);
            }
            out.push_str("> ");
        }
        let _ = write!(out, "{}.{}(", self.receiver, self.name);
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}: {}", param.name, param.type_name);
        }
        let _ = writeln!(out, "): {} = {}", self.returns, self.body);
    }
}

pub struct FunSpecBuilder {
    name: String,
    receiver: TypeName,
    type_variables: Vec<TypeVariable>,
    parameters: Vec<ParameterSpec>,
    returns: Option<TypeName>,
    kdoc: String,
    body: String,
    unit_mapped: bool,
}

impl FunSpecBuilder {
    pub fn returns(mut self, returns: TypeName) -> Self {
        self.returns = Some(returns);
        self
    }

    pub fn kdoc(mut self, kdoc: impl Into<String>) -> Self {
        self.kdoc = kdoc.into();
        self
    }

    pub fn add_type_variable(mut self, tv: TypeVariable) -> Self {
        self.type_variables.push(tv);
        self
    }

    pub fn add_parameter(mut self, param: ParameterSpec) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn unit_mapped(mut self, unit_mapped: bool) -> Self {
        self.unit_mapped = unit_mapped;
        self
    }

    pub fn build(self) -> FunSpec {
        let returns = self
            .returns
            .unwrap_or_else(|| TypeName::class(crate::types::ClassName::kotlin("Unit")));
        FunSpec {
            name: self.name,
            receiver: self.receiver,
            type_variables: self.type_variables,
            parameters: self.parameters,
            returns,
            kdoc: self.kdoc,
            body: self.body,
            unit_mapped: self.unit_mapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassName, TypeName};

    #[test]
    fn renders_a_single_expression_function() {
        let spec = FunSpec::builder(
            "clicks",
            TypeName::class(ClassName::new("android.view", "View")),
        )
        .returns(TypeName::parameterized(
            ClassName::new("rx", "Observable"),
            vec![TypeName::class(ClassName::kotlin("Unit"))],
        ))
        .kdoc("Create an observable of clicks on `view`.\n")
        .body("RxView.clicks(this).map(VoidToUnit)")
        .unit_mapped(true)
        .build();

        let mut out = String::new();
        spec.render(&mut out);
        assert_eq!(
            out,
            "/**\n\
             \x20* Create an observable of clicks on `view`.\n\
             \x20*/\n\
             public inline fun View.clicks(): Observable<Unit> = RxView.clicks(this).map(VoidToUnit)\n"
        );
    }

    #[test]
    fn renders_type_variables_and_parameters() {
        let spec = FunSpec::builder(
            "itemClicks",
            TypeName::parameterized(
                ClassName::new("android.widget", "AdapterView"),
                vec![TypeName::TypeVariableRef {
                    name: "T".to_string(),
                    nullable: false,
                }],
            ),
        )
        .add_type_variable(TypeVariable {
            name: "T".to_string(),
            bound: TypeName::class(ClassName::new("android.widget", "Adapter")),
        })
        .add_parameter(ParameterSpec {
            name: "handled".to_string(),
            type_name: TypeName::class(ClassName::best_guess("Func1")),
        })
        .returns(TypeName::class(ClassName::new("rx", "Observable")))
        .body("RxAdapterView.itemClicks(this, handled)")
        .build();

        let mut out = String::new();
        spec.render(&mut out);
        assert_eq!(
            out,
            "public inline fun <T : Adapter> AdapterView<T>.itemClicks(handled: Func1): Observable = RxAdapterView.itemClicks(this, handled)\n"
        );
    }
}
