//! UML type declarations
//!
//! A [`Type`] models one class, interface, enum, or annotation declaration:
//! its classification, qualified (possibly generic) name, owning namespace,
//! deprecation flag, and member children. Equality considers the name only.

use std::hash::{Hash, Hasher};

use crate::core::{IndentingWriter, TypeDisplay};

use super::link::Link;
use super::member::Member;
use super::namespace::Namespace;
use super::node::{RenderContext, UmlNode};
use super::type_name::TypeName;

/// Classification of a UML type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Enum,
    Interface,
    Annotation,
    AbstractClass,
    Class,
}

impl Classification {
    /// The PlantUML keyword for this classification.
    pub fn keyword(self) -> &'static str {
        match self {
            Classification::Enum => "enum",
            Classification::Interface => "interface",
            Classification::Annotation => "annotation",
            Classification::AbstractClass => "abstract class",
            Classification::Class => "class",
        }
    }
}

/// A class, interface, enum, or annotation declaration.
#[derive(Debug, Clone)]
pub struct Type {
    namespace: Namespace,
    classification: Classification,
    name: TypeName,
    deprecated: bool,
    include_package_name: bool,
    members: Vec<Member>,
}

impl Type {
    pub fn new(namespace: Namespace, classification: Classification, name: TypeName) -> Self {
        Self {
            namespace,
            classification,
            name,
            deprecated: false,
            include_package_name: false,
            members: Vec::new(),
        }
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Whether the headline renders a two-line alias label carrying the
    /// package name under the simple name.
    pub fn set_include_package_name(&mut self, include: bool) {
        self.include_package_name = include;
    }

    pub fn add_member(&mut self, member: impl Into<Member>) -> &mut Self {
        self.members.push(member.into());
        self
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn package_name(&self) -> &str {
        self.namespace.name()
    }

    pub fn module_name(&self) -> Option<&str> {
        self.namespace.module_name()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The part of the qualified name inside the owning package, or the
    /// simple name when the type lives outside it.
    pub fn name_in_package(&self) -> String {
        if self.namespace.contains(&self.name) {
            self.name.qualified()[self.namespace.name().len() + 1..].to_string()
        } else {
            self.name.simple()
        }
    }

    /// Refine the generic signature of this type.
    ///
    /// When `new_name` has the same qualified form and the same generic
    /// arity, the name is replaced and every member type equal to an old
    /// generic argument is substituted positionally with the new one. This
    /// repairs member signatures after the declaration is later seen with
    /// its full type-variable bounds. Any mismatch leaves the type and all
    /// members untouched.
    pub fn update_generic_type_variables(&mut self, new_name: TypeName) {
        if new_name.qualified() != self.name.qualified() {
            return;
        }
        let old_generics = self.name.generics().to_vec();
        let new_generics = new_name.generics().to_vec();
        if old_generics.len() != new_generics.len() {
            return;
        }
        self.name = new_name;
        for member in &mut self.members {
            for (old, new) in old_generics.iter().zip(&new_generics) {
                member.replace_parameterized_type(old, new);
            }
        }
    }

    fn write_name_to<'w>(&self, out: &'w mut IndentingWriter) -> &'w mut IndentingWriter {
        if self.include_package_name && self.namespace.contains(&self.name) {
            out.append("\"<size:14>")
                .append(&self.name_in_package())
                .append("\\n<size:10>")
                .append(self.namespace.name())
                .append("\" as ");
        }
        out.append(&self.name.to_display(TypeDisplay::Qualified, None))
    }

    fn write_members_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        // Annotations never render a body, even when they have members.
        if self.members.is_empty() || self.classification == Classification::Annotation {
            return out;
        }
        let member_ctx = ctx.for_owner(self);
        out.append("{").newline();
        out.indent();
        for member in &self.members {
            member.write_to(&member_ctx, out);
        }
        out.unindent();
        out.append("}")
    }
}

impl UmlNode for Type {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        out.append(self.classification.keyword()).whitespace();
        self.write_name_to(out).whitespace();
        if self.deprecated {
            out.append("<<deprecated>>").whitespace();
        }
        Link::for_type(self, ctx.config).write_to(ctx, out).whitespace();
        self.write_members_to(ctx, out);
        out.newline()
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_keywords() {
        assert_eq!(Classification::Class.keyword(), "class");
        assert_eq!(Classification::AbstractClass.keyword(), "abstract class");
        assert_eq!(Classification::Annotation.keyword(), "annotation");
        assert_eq!(Classification::Enum.keyword(), "enum");
        assert_eq!(Classification::Interface.keyword(), "interface");
    }

    #[test]
    fn test_name_in_package() {
        let type_ = Type::new(
            Namespace::new("com.example"),
            Classification::Class,
            TypeName::new(Some("com.example"), "Foo"),
        );
        assert_eq!(type_.name_in_package(), "Foo");

        let nested = Type::new(
            Namespace::new("com.example"),
            Classification::Class,
            TypeName::new(Some("com.example"), "Foo.Inner"),
        );
        assert_eq!(nested.name_in_package(), "Foo.Inner");

        let outside = Type::new(
            Namespace::new("org.other"),
            Classification::Class,
            TypeName::new(Some("com.example"), "Foo"),
        );
        assert_eq!(outside.name_in_package(), "Foo");
    }

    #[test]
    fn test_equality_by_name() {
        let a = Type::new(
            Namespace::new("pkg"),
            Classification::Class,
            TypeName::new(Some("pkg"), "Foo"),
        );
        let b = Type::new(
            Namespace::new("pkg"),
            Classification::Interface,
            TypeName::new(Some("pkg"), "Foo"),
        );
        assert_eq!(a, b);
    }
}
