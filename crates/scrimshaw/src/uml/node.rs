//! Tree write protocol
//!
//! Every element of the UML document tree appends its own markup fragment to
//! an [`IndentingWriter`] and recurses into its children. The writer is
//! returned for chaining. Ambient state — configuration, the link base
//! directory, and the enclosing type while members render — travels in an
//! explicit [`RenderContext`] instead of parent back-references or
//! thread-local storage, so concurrent renders are safe by construction.

use std::path::Path;

use crate::core::{Configuration, IndentingWriter};

use super::types::Type;

/// Ambient state threaded through one tree walk.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// The configuration of the diagram being rendered.
    pub config: &'a Configuration,
    /// Base directory that relative link targets are computed against.
    pub link_base: Option<&'a Path>,
    /// The type whose members are currently being written.
    pub(crate) owner: Option<&'a Type>,
}

impl<'a> RenderContext<'a> {
    /// Context for a fresh render with no link base.
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            link_base: None,
            owner: None,
        }
    }

    /// The same context with a link base directory.
    pub fn with_link_base(self, link_base: &'a Path) -> Self {
        Self {
            link_base: Some(link_base),
            ..self
        }
    }

    /// The same context scoped to the given owning type.
    pub(crate) fn for_owner(self, owner: &'a Type) -> Self {
        Self {
            owner: Some(owner),
            ..self
        }
    }
}

/// A node of the UML document tree.
///
/// `write_to` appends this node's markup (and its children's, depth-first)
/// and returns the writer it was given, so fragments chain naturally.
pub trait UmlNode {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter;
}
