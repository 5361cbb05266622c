//! UML namespace
//!
//! A namespace corresponds to a package: it groups types and renders as a
//! `package <name> { ... }` block. Equality and hashing consider the package
//! name only.

use std::hash::{Hash, Hasher};

use crate::core::IndentingWriter;

use super::link::Link;
use super::node::{RenderContext, UmlNode};
use super::type_name::TypeName;
use super::types::Type;

/// A package (optionally inside a named module) that groups types.
#[derive(Debug, Clone)]
pub struct Namespace {
    name: String,
    module: Option<String>,
}

impl Namespace {
    /// A namespace for the given package name. The name is trimmed; an
    /// empty name denotes the default package.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            module: None,
        }
    }

    /// A namespace for a package inside a named module.
    pub fn with_module(name: &str, module: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            module: Some(module.to_string()),
        }
    }

    /// The package name; empty for the default package.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module name, if any.
    pub fn module_name(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Strict package-prefix membership test: whether the qualified name of
    /// `type_name` starts with `<name>.`.
    pub fn contains(&self, type_name: &TypeName) -> bool {
        type_name
            .qualified()
            .starts_with(&format!("{}.", self.name))
    }

    /// Render a `package` block wrapping the given types, one indent level
    /// deeper. An empty package name renders the literal `unnamed`, because
    /// an empty name is not valid in PlantUML.
    pub fn write_block<'w>(
        &self,
        types: &[Type],
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        out.append("package").whitespace();
        out.append(if self.name.is_empty() {
            "unnamed"
        } else {
            &self.name
        })
        .whitespace();
        Link::for_package(self, ctx.config).write_to(ctx, out).whitespace();
        out.append("{").newline();
        out.indent();
        for type_ in types {
            type_.write_to(ctx, out);
        }
        out.unindent();
        out.append("}").newline()
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Namespace {}

impl Hash for Namespace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
