//! Scrimshaw - Render source-code type models as PlantUML class diagrams
//!
//! A library for building a UML model of a class, interface, enum, or
//! annotation and serializing it to PlantUML source, optionally rasterizing
//! the diagram through a local PlantUML installation or a PlantUML server.
//!
//! # Quick Start
//!
//! ```rust
//! use scrimshaw::prelude::*;
//!
//! let mut foo = Type::new(
//!     Namespace::new("pkg"),
//!     Classification::Class,
//!     TypeName::new(Some("pkg"), "Foo"),
//! );
//! foo.add_member(Field::new("bar", Some(TypeName::new(Some("java.lang"), "String"))).unwrap());
//!
//! let source = scrimshaw::diagram_source(foo);
//! assert!(source.starts_with("@startuml"));
//! assert!(source.contains("+bar: String"));
//! ```
//!
//! # Advanced Usage
//!
//! For control over visibility filters, type display, image formats, and the
//! rendering backend, build a [`Configuration`] and a [`ClassDiagram`]:
//!
//! ```rust
//! use scrimshaw::prelude::*;
//!
//! let config = Configuration::default()
//!     .with_destination("target/uml")
//!     .with_visibilities(VisibilitySet::PUBLIC)
//!     .with_server_url("https://www.plantuml.com/plantuml/");
//!
//! let type_ = Type::new(
//!     Namespace::new("pkg"),
//!     Classification::Interface,
//!     TypeName::new(Some("pkg"), "Greeter"),
//! );
//! let diagram = ClassDiagram::new(config, type_);
//! let source = diagram.source();
//! assert!(source.contains("interface pkg.Greeter"));
//! ```

pub mod backend;
pub mod core;
pub mod uml;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Configuration, ImageFormat, Indentation, IndentingWriter, ParamNames, TypeDisplay,
        UmlError, Visibility, VisibilitySet,
    };
    pub use crate::uml::{
        ClassDiagram, Classification, Field, Member, Method, Namespace, Parameters, RenderContext,
        Type, TypeName, UmlNode,
    };
}

/// Serialize a type to PlantUML source with the default configuration
///
/// This is the simplest way to get diagram text for a type. For file
/// locations, rasterization, or custom policies, use [`uml::ClassDiagram`]
/// directly.
///
/// # Example
/// ```rust
/// use scrimshaw::prelude::*;
///
/// let type_ = Type::new(
///     Namespace::new("pkg"),
///     Classification::Enum,
///     TypeName::new(Some("pkg"), "Suit"),
/// );
/// let source = scrimshaw::diagram_source(type_);
/// assert!(source.contains("enum pkg.Suit"));
/// assert!(source.trim_end().ends_with("@enduml"));
/// ```
pub fn diagram_source(type_: uml::Type) -> String {
    uml::ClassDiagram::new(crate::core::Configuration::default(), type_).source()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uml::{Classification, Namespace, Type, TypeName};

    #[test]
    fn test_diagram_source_wraps_type_in_package() {
        let type_ = Type::new(
            Namespace::new("pkg"),
            Classification::Class,
            TypeName::new(Some("pkg"), "Foo"),
        );
        let source = diagram_source(type_);
        assert!(source.starts_with("@startuml\n"));
        assert!(source.contains("package pkg {"));
        assert!(source.contains("class pkg.Foo"));
        assert!(source.ends_with("@enduml\n"));
    }

    #[test]
    fn test_diagram_source_includes_footer() {
        let type_ = Type::new(
            Namespace::new("pkg"),
            Classification::Class,
            TypeName::new(Some("pkg"), "Foo"),
        );
        let source = diagram_source(type_);
        assert!(source.contains("center footer scrimshaw"));
    }
}
