//! Method parameter lists
//!
//! An ordered list of parameters, rendered as `(p1, p2)`. Each parameter
//! renders its name and type according to the configured parameter-name
//! ordering policy; the varargs flag rewrites a trailing `[]` on the last
//! parameter's type text to `...`.

use crate::core::{IndentingWriter, ParamNames, TypeDisplay};

use super::node::{RenderContext, UmlNode};
use super::type_name::TypeName;

/// A single method parameter: optional name, optional type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: Option<String>,
    type_name: Option<TypeName>,
}

impl Parameter {
    fn write_to<'w>(
        &self,
        varargs: bool,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        let methods = &ctx.config.methods;
        let mut separator = "";
        if let Some(name) = &self.name {
            if methods.param_names == ParamNames::BeforeType {
                out.append(name);
                separator = ": ";
            }
        }
        if let Some(type_name) = &self.type_name {
            if methods.param_types != TypeDisplay::None {
                let mut text = type_name.to_display(methods.param_types, None);
                if varargs && text.ends_with("[]") {
                    text.truncate(text.len() - 2);
                    text.push_str("...");
                }
                out.append(separator).append(&text);
                separator = " ";
            }
        }
        if let Some(name) = &self.name {
            if methods.param_names == ParamNames::AfterType {
                out.append(separator).append(name);
            }
        }
        out
    }

    fn replace_parameterized_type(&mut self, from: &TypeName, to: &TypeName) {
        if self.type_name.as_ref() == Some(from) {
            self.type_name = Some(to.clone());
        }
    }
}

/// The ordered parameter list of a method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parameters {
    params: Vec<Parameter>,
    varargs: bool,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn add(&mut self, name: Option<&str>, type_name: Option<TypeName>) -> &mut Self {
        self.params.push(Parameter {
            name: name.map(str::to_string),
            type_name,
        });
        self
    }

    /// Mark the parameter list as variadic: the last parameter's `[]`
    /// renders as `...`.
    pub fn set_varargs(&mut self, varargs: bool) -> &mut Self {
        self.varargs = varargs;
        self
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(crate) fn replace_parameterized_type(&mut self, from: &TypeName, to: &TypeName) {
        for param in &mut self.params {
            param.replace_parameterized_type(from, to);
        }
    }
}

impl UmlNode for Parameters {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        out.append("(");
        let last = self.params.len().saturating_sub(1);
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.append(", ");
            }
            param.write_to(self.varargs && i == last, ctx, out);
        }
        out.append(")")
    }
}
