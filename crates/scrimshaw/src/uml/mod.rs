//! UML document model
//!
//! The object tree behind a class diagram: a [`ClassDiagram`] owns one
//! [`Type`] with its [`Member`]s, grouped under a [`Namespace`]. Every node
//! serializes itself through [`UmlNode::write_to`], threading the render
//! context and the indentation-aware writer down the tree.

mod diagram;
mod link;
mod member;
mod namespace;
mod node;
mod parameters;
mod type_name;
mod types;

pub use diagram::ClassDiagram;
pub use link::Link;
pub use member::{Field, Member, Method};
pub use namespace::Namespace;
pub use node::{RenderContext, UmlNode};
pub use parameters::Parameters;
pub use type_name::{TypeBound, TypeName};
pub use types::{Classification, Type};
