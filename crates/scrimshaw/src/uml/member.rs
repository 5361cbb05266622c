//! Fields and methods
//!
//! The members of a [`Type`](super::types::Type): fields and methods share
//! their name/visibility/static/deprecated handling and visibility-glyph
//! rendering, and differ in how their type annotation and parameters are
//! written. A member only appears in the output when its visibility passes
//! the matching inclusion policy, evaluated at render time.

use std::hash::{Hash, Hasher};

use crate::core::{IndentingWriter, TypeDisplay, UmlError, Visibility};

use super::node::{RenderContext, UmlNode};
use super::parameters::Parameters;
use super::type_name::TypeName;
use super::types::Classification;

fn validated_name(name: impl Into<String>) -> Result<String, UmlError> {
    let name = name.into().trim().to_string();
    if name.is_empty() {
        return Err(UmlError::invalid_model("Member name is empty"));
    }
    Ok(name)
}

/// A field of a type.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    type_name: Option<TypeName>,
    visibility: Visibility,
    is_static: bool,
    deprecated: bool,
}

impl Field {
    /// A public instance field. Fails if the trimmed name is empty.
    pub fn new(name: impl Into<String>, type_name: Option<TypeName>) -> Result<Self, UmlError> {
        Ok(Self {
            name: validated_name(name)?,
            type_name,
            visibility: Visibility::Public,
            is_static: false,
            deprecated: false,
        })
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// An enum constant is a static field whose type is the enclosing enum
    /// itself; its type annotation is always suppressed.
    fn is_enum_constant(&self, ctx: &RenderContext<'_>) -> bool {
        self.is_static
            && ctx.owner.is_some_and(|owner| {
                owner.classification() == Classification::Enum
                    && self.type_name.as_ref() == Some(owner.name())
            })
    }

    pub(crate) fn replace_parameterized_type(&mut self, from: &TypeName, to: &TypeName) {
        if self.type_name.as_ref() == Some(from) {
            self.type_name = Some(to.clone());
        }
    }
}

impl UmlNode for Field {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        if !ctx.config.fields.include(self.visibility) {
            return out;
        }
        if self.is_static {
            out.append("{static}").whitespace();
        }
        write_glyph_and_name(out, self.visibility, self.deprecated, &self.name);
        if !self.is_enum_constant(ctx) {
            if let Some(type_name) = &self.type_name {
                let display = ctx.config.fields.type_display;
                if display != TypeDisplay::None {
                    out.append(": ").append(&type_name.to_display(display, None));
                }
            }
        }
        out.newline()
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A method of a type.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    return_type: Option<TypeName>,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
    deprecated: bool,
    parameters: Parameters,
}

impl Method {
    /// A public method. Fails if the trimmed name is empty.
    pub fn new(name: impl Into<String>, return_type: Option<TypeName>) -> Result<Self, UmlError> {
        Ok(Self {
            name: validated_name(name)?,
            return_type,
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            deprecated: false,
            parameters: Parameters::new(),
        })
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn abstract_member(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Append a parameter.
    pub fn add_parameter(&mut self, name: Option<&str>, type_name: Option<TypeName>) -> &mut Self {
        self.parameters.add(name, type_name);
        self
    }

    /// Mark the parameter list as variadic.
    pub fn set_varargs(&mut self, varargs: bool) -> &mut Self {
        self.parameters.set_varargs(varargs);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub(crate) fn replace_parameterized_type(&mut self, from: &TypeName, to: &TypeName) {
        if self.return_type.as_ref() == Some(from) {
            self.return_type = Some(to.clone());
        }
        self.parameters.replace_parameterized_type(from, to);
    }
}

impl UmlNode for Method {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        if !ctx.config.methods.include(self.visibility) {
            return out;
        }
        if self.is_abstract {
            out.append("{abstract}").whitespace();
        }
        if self.is_static {
            out.append("{static}").whitespace();
        }
        write_glyph_and_name(out, self.visibility, self.deprecated, &self.name);
        self.parameters.write_to(ctx, out);
        if let Some(return_type) = &self.return_type {
            let display = ctx.config.methods.return_type;
            if display != TypeDisplay::None {
                out.append(": ").append(&return_type.to_display(display, None));
            }
        }
        out.newline()
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.parameters == other.parameters
    }
}

impl Eq for Method {}

impl Hash for Method {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.parameters.hash(state);
    }
}

fn write_glyph_and_name(
    out: &mut IndentingWriter,
    visibility: Visibility,
    deprecated: bool,
    name: &str,
) {
    out.append(&visibility.glyph().to_string());
    if deprecated {
        out.append("--").append(name).append("--");
    } else {
        out.append(name);
    }
}

/// A member of a type: either a field or a method.
///
/// Two members are equal only when they are the same kind of member; methods
/// additionally require equal parameter lists, so overloads never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Field(Field),
    Method(Method),
}

impl Member {
    pub(crate) fn replace_parameterized_type(&mut self, from: &TypeName, to: &TypeName) {
        match self {
            Member::Field(field) => field.replace_parameterized_type(from, to),
            Member::Method(method) => method.replace_parameterized_type(from, to),
        }
    }
}

impl From<Field> for Member {
    fn from(field: Field) -> Self {
        Member::Field(field)
    }
}

impl From<Method> for Member {
    fn from(method: Method) -> Self {
        Member::Method(method)
    }
}

impl UmlNode for Member {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        match self {
            Member::Field(field) => field.write_to(ctx, out),
            Member::Method(method) => method.write_to(ctx, out),
        }
    }
}
