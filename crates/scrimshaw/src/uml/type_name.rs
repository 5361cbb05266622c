//! Type references
//!
//! A [`TypeName`] is an immutable reference to a (possibly generic, possibly
//! array) type. Equality and hashing consider the qualified name only:
//! generic arguments are deliberately excluded, so a name can later be
//! refined in place with fully-bounded type variables without changing its
//! identity.

use std::hash::{Hash, Hasher};

use crate::core::TypeDisplay;

use super::namespace::Namespace;

/// The bound of a generic type variable or wildcard.
///
/// A variable either has no bound or exactly one upper/lower bound; the two
/// states are mutually exclusive by construction.
#[derive(Debug, Clone)]
pub enum TypeBound {
    /// `name extends Bound`
    Extends(Box<TypeName>),
    /// `name super Bound`
    Super(Box<TypeName>),
}

/// A (possibly generic, possibly array) type reference.
#[derive(Debug, Clone)]
pub enum TypeName {
    /// A named class, interface, enum, annotation, or primitive.
    Reference {
        package: Option<String>,
        simple: String,
        qualified: String,
        generics: Vec<TypeName>,
    },
    /// An array of some component type.
    Array { component: Box<TypeName> },
    /// A generic type variable or wildcard, optionally bounded.
    Variable {
        name: String,
        bound: Option<TypeBound>,
    },
}

impl TypeName {
    /// A plain type reference. The qualified name is derived from the
    /// package and simple name.
    pub fn new(package: Option<&str>, simple: &str) -> Self {
        let qualified = match package {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, simple),
            _ => simple.to_string(),
        };
        TypeName::Reference {
            package: package.filter(|p| !p.is_empty()).map(str::to_string),
            simple: simple.to_string(),
            qualified,
            generics: Vec::new(),
        }
    }

    /// A parameterized type reference.
    pub fn parameterized(package: Option<&str>, simple: &str, generics: Vec<TypeName>) -> Self {
        match Self::new(package, simple) {
            TypeName::Reference {
                package,
                simple,
                qualified,
                ..
            } => TypeName::Reference {
                package,
                simple,
                qualified,
                generics,
            },
            other => other,
        }
    }

    /// An array of the given component type.
    pub fn array_of(component: TypeName) -> Self {
        TypeName::Array {
            component: Box::new(component),
        }
    }

    /// An unbounded type variable or wildcard (`T`, `?`).
    pub fn variable(name: &str) -> Self {
        TypeName::Variable {
            name: name.to_string(),
            bound: None,
        }
    }

    /// A type variable with an upper bound (`T extends Number`).
    pub fn extends_bound(name: &str, bound: TypeName) -> Self {
        TypeName::Variable {
            name: name.to_string(),
            bound: Some(TypeBound::Extends(Box::new(bound))),
        }
    }

    /// A type variable with a lower bound (`? super Number`).
    pub fn super_bound(name: &str, bound: TypeName) -> Self {
        TypeName::Variable {
            name: name.to_string(),
            bound: Some(TypeBound::Super(Box::new(bound))),
        }
    }

    /// The fully qualified name. Arrays append `[]` to their component's
    /// qualified name; variables are identified by their variable name.
    pub fn qualified(&self) -> String {
        match self {
            TypeName::Reference { qualified, .. } => qualified.clone(),
            TypeName::Array { component } => format!("{}[]", component.qualified()),
            TypeName::Variable { name, .. } => name.clone(),
        }
    }

    /// The simple name without any package.
    pub fn simple(&self) -> String {
        match self {
            TypeName::Reference { simple, .. } => simple.clone(),
            TypeName::Array { component } => format!("{}[]", component.simple()),
            TypeName::Variable { name, .. } => name.clone(),
        }
    }

    /// The generic arguments; empty for arrays and variables.
    pub fn generics(&self) -> &[TypeName] {
        match self {
            TypeName::Reference { generics, .. } => generics,
            _ => &[],
        }
    }

    /// Render this type reference under the given display policy.
    ///
    /// `QUALIFIED` strips exactly one leading `namespace.` prefix from the
    /// outer name when the enclosing namespace is supplied and matches;
    /// generic arguments keep their simple names unless the policy is
    /// `QUALIFIED_GENERICS`.
    pub fn to_display(&self, display: TypeDisplay, namespace: Option<&Namespace>) -> String {
        if display == TypeDisplay::None {
            return String::new();
        }
        match self {
            TypeName::Reference {
                simple,
                qualified,
                generics,
                ..
            } => {
                let mut text = match display {
                    TypeDisplay::Simple => simple.clone(),
                    _ => match namespace {
                        Some(ns) if ns.contains(self) => qualified[ns.name().len() + 1..].to_string(),
                        _ => qualified.clone(),
                    },
                };
                if !generics.is_empty() {
                    let nested = match display {
                        TypeDisplay::QualifiedGenerics => TypeDisplay::QualifiedGenerics,
                        _ => TypeDisplay::Simple,
                    };
                    let args: Vec<String> = generics
                        .iter()
                        .map(|generic| generic.to_display(nested, None))
                        .collect();
                    text.push('<');
                    text.push_str(&args.join(", "));
                    text.push('>');
                }
                text
            }
            TypeName::Array { component } => {
                format!("{}[]", component.to_display(display, namespace))
            }
            TypeName::Variable { name, bound } => match bound {
                None => name.clone(),
                Some(TypeBound::Extends(bound)) => {
                    format!("{} extends {}", name, bound.to_display(display, None))
                }
                Some(TypeBound::Super(bound)) => {
                    format!("{} super {}", name, bound.to_display(display, None))
                }
            },
        }
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.qualified() == other.qualified()
    }
}

impl Eq for TypeName {}

impl Hash for TypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of_string() -> TypeName {
        TypeName::parameterized(
            Some("java.util"),
            "List",
            vec![TypeName::new(Some("java.lang"), "String")],
        )
    }

    #[test]
    fn test_qualified_name_derivation() {
        let name = TypeName::new(Some("pkg"), "Foo");
        assert_eq!(name.qualified(), "pkg.Foo");
        assert_eq!(name.simple(), "Foo");

        let unpackaged = TypeName::new(None, "int");
        assert_eq!(unpackaged.qualified(), "int");
    }

    #[test]
    fn test_display_none_is_empty() {
        assert_eq!(list_of_string().to_display(TypeDisplay::None, None), "");
    }

    #[test]
    fn test_display_simple_recurses_simple() {
        assert_eq!(
            list_of_string().to_display(TypeDisplay::Simple, None),
            "List<String>"
        );
    }

    #[test]
    fn test_display_qualified_keeps_simple_generics() {
        assert_eq!(
            list_of_string().to_display(TypeDisplay::Qualified, None),
            "java.util.List<String>"
        );
    }

    #[test]
    fn test_display_qualified_generics() {
        assert_eq!(
            list_of_string().to_display(TypeDisplay::QualifiedGenerics, None),
            "java.util.List<java.lang.String>"
        );
    }

    #[test]
    fn test_qualified_strips_one_namespace_prefix() {
        let ns = Namespace::new("java.util");
        assert_eq!(
            list_of_string().to_display(TypeDisplay::Qualified, Some(&ns)),
            "List<String>"
        );
        // A non-matching namespace strips nothing.
        let other = Namespace::new("java.lang");
        assert_eq!(
            list_of_string().to_display(TypeDisplay::Qualified, Some(&other)),
            "java.util.List<String>"
        );
    }

    #[test]
    fn test_display_is_idempotent() {
        let name = list_of_string();
        let first = name.to_display(TypeDisplay::Qualified, None);
        let second = name.to_display(TypeDisplay::Qualified, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_array_appends_brackets() {
        let array = TypeName::array_of(list_of_string());
        assert_eq!(
            array.to_display(TypeDisplay::Simple, None),
            "List<String>[]"
        );
        assert_eq!(array.qualified(), "java.util.List[]");
    }

    #[test]
    fn test_wildcard_display() {
        assert_eq!(
            TypeName::variable("?").to_display(TypeDisplay::Simple, None),
            "?"
        );
        let bounded = TypeName::extends_bound("?", TypeName::new(Some("java.lang"), "Number"));
        assert_eq!(bounded.to_display(TypeDisplay::Simple, None), "? extends Number");
        let lower = TypeName::super_bound("T", TypeName::new(Some("java.lang"), "Number"));
        assert_eq!(lower.to_display(TypeDisplay::Simple, None), "T super Number");
    }

    #[test]
    fn test_equality_ignores_generics() {
        let bare = TypeName::new(Some("java.util"), "List");
        assert_eq!(bare, list_of_string());

        let refined = TypeName::parameterized(
            Some("java.util"),
            "List",
            vec![TypeName::extends_bound(
                "T",
                TypeName::new(Some("java.lang"), "Number"),
            )],
        );
        assert_eq!(list_of_string(), refined);
    }

    #[test]
    fn test_variable_equality_by_name() {
        assert_eq!(TypeName::variable("T"), TypeName::variable("T"));
        assert_ne!(TypeName::variable("T"), TypeName::variable("U"));
    }
}
