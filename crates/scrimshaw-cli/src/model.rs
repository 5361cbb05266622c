//! JSON type-model loading
//!
//! The CLI does not extract type information from source code itself; it
//! consumes a JSON description of the types to document and builds the UML
//! tree from it. Type references are written as plain Java-like strings
//! (`java.util.List<String>`, `int[]`, `? extends Number`) and parsed here.

use anyhow::{anyhow, bail, Result};
use serde::Deserialize;

use scrimshaw::uml::{Classification, Field, Method, Namespace, Type, TypeName};
use scrimshaw::Visibility;

/// Top-level input document: the types to generate diagrams for.
#[derive(Debug, Deserialize)]
pub struct DiagramModel {
    pub types: Vec<TypeModel>,
}

/// One type declaration, diagrammed on its own.
#[derive(Debug, Deserialize)]
pub struct TypeModel {
    /// Owning package; empty for the default package.
    #[serde(default)]
    pub package: String,
    /// Optional module the package lives in.
    #[serde(default)]
    pub module: Option<String>,
    /// Type name, optionally qualified and/or generic (`Foo`, `pkg.Foo<T>`).
    pub name: String,
    #[serde(default)]
    pub kind: KindModel,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum KindModel {
    #[default]
    Class,
    AbstractClass,
    Interface,
    Enum,
    Annotation,
}

impl From<KindModel> for Classification {
    fn from(kind: KindModel) -> Self {
        match kind {
            KindModel::Class => Classification::Class,
            KindModel::AbstractClass => Classification::AbstractClass,
            KindModel::Interface => Classification::Interface,
            KindModel::Enum => Classification::Enum,
            KindModel::Annotation => Classification::Annotation,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityModel {
    Private,
    Protected,
    PackagePrivate,
    #[default]
    Public,
}

impl From<VisibilityModel> for Visibility {
    fn from(visibility: VisibilityModel) -> Self {
        match visibility {
            VisibilityModel::Private => Visibility::Private,
            VisibilityModel::Protected => Visibility::Protected,
            VisibilityModel::PackagePrivate => Visibility::PackagePrivate,
            VisibilityModel::Public => Visibility::Public,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldModel {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub visibility: VisibilityModel,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Deserialize)]
pub struct MethodModel {
    pub name: String,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub visibility: VisibilityModel,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterModel>,
    #[serde(default)]
    pub varargs: bool,
}

#[derive(Debug, Deserialize)]
pub struct ParameterModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
}

/// Parse the JSON input document.
pub fn parse_model(json: &str) -> Result<DiagramModel> {
    let model: DiagramModel =
        serde_json::from_str(json).map_err(|e| anyhow!("Invalid type model: {}", e))?;
    if model.types.is_empty() {
        bail!("Type model contains no types");
    }
    Ok(model)
}

impl TypeModel {
    /// Build the UML tree for this type.
    pub fn to_uml_type(&self) -> Result<Type> {
        let namespace = match &self.module {
            Some(module) => Namespace::with_module(&self.package, module),
            None => Namespace::new(&self.package),
        };
        let name = self.type_name()?;
        let mut type_ = Type::new(namespace, self.kind.into(), name);
        if self.deprecated {
            type_ = type_.deprecated();
        }
        for field in &self.fields {
            type_.add_member(field.to_uml_field()?);
        }
        for method in &self.methods {
            type_.add_member(method.to_uml_method()?);
        }
        Ok(type_)
    }

    /// The declared type name, qualified with the package when the model
    /// gives only a simple name.
    fn type_name(&self) -> Result<TypeName> {
        let base = base_name(&self.name);
        if self.package.is_empty() || base.contains('.') {
            parse_type_name(&self.name)
        } else {
            parse_type_name(&format!("{}.{}", self.package, self.name))
        }
    }
}

impl FieldModel {
    fn to_uml_field(&self) -> Result<Field> {
        let type_name = self.type_name.as_deref().map(parse_type_name).transpose()?;
        let mut field = Field::new(&self.name, type_name)?.with_visibility(self.visibility.into());
        if self.is_static {
            field = field.static_member();
        }
        if self.deprecated {
            field = field.deprecated();
        }
        Ok(field)
    }
}

impl MethodModel {
    fn to_uml_method(&self) -> Result<Method> {
        let return_type = self
            .return_type
            .as_deref()
            .map(parse_type_name)
            .transpose()?;
        let mut method =
            Method::new(&self.name, return_type)?.with_visibility(self.visibility.into());
        if self.is_static {
            method = method.static_member();
        }
        if self.is_abstract {
            method = method.abstract_member();
        }
        if self.deprecated {
            method = method.deprecated();
        }
        for param in &self.parameters {
            let type_name = param.type_name.as_deref().map(parse_type_name).transpose()?;
            method.add_parameter(param.name.as_deref(), type_name);
        }
        method.set_varargs(self.varargs);
        Ok(method)
    }
}

/// Parse a Java-like type reference string into a [`TypeName`].
///
/// Handles qualified names, generic arguments, array suffixes, and wildcard
/// bounds: `pkg.Foo<A, B>`, `int[][]`, `?`, `? extends Number`, `? super T`.
pub fn parse_type_name(text: &str) -> Result<TypeName> {
    let mut text = text.trim();
    if text.is_empty() {
        bail!("Empty type reference");
    }

    let mut array_depth = 0;
    while let Some(stripped) = text.strip_suffix("[]") {
        text = stripped.trim_end();
        array_depth += 1;
    }

    let mut name = wildcard(text)
        .map(Ok)
        .unwrap_or_else(|| reference(text))?;
    for _ in 0..array_depth {
        name = TypeName::array_of(name);
    }
    Ok(name)
}

fn wildcard(text: &str) -> Option<TypeName> {
    let rest = text.strip_prefix('?')?.trim_start();
    if rest.is_empty() {
        return Some(TypeName::variable("?"));
    }
    if let Some(bound) = rest.strip_prefix("extends ") {
        return parse_type_name(bound)
            .ok()
            .map(|b| TypeName::extends_bound("?", b));
    }
    if let Some(bound) = rest.strip_prefix("super ") {
        return parse_type_name(bound)
            .ok()
            .map(|b| TypeName::super_bound("?", b));
    }
    None
}

fn reference(text: &str) -> Result<TypeName> {
    let (base, generics) = match text.find('<') {
        Some(open) => {
            let inner = text[open..]
                .strip_prefix('<')
                .and_then(|s| s.strip_suffix('>'))
                .ok_or_else(|| anyhow!("Unbalanced generics in type reference: {}", text))?;
            (&text[..open], split_generic_args(inner)?)
        }
        None => (text, Vec::new()),
    };

    let (package, simple) = match base.rfind('.') {
        Some(dot) => (Some(&base[..dot]), &base[dot + 1..]),
        None => (None, base),
    };
    if simple.is_empty() {
        bail!("Invalid type reference: {}", text);
    }
    if generics.is_empty() {
        Ok(TypeName::new(package, simple))
    } else {
        Ok(TypeName::parameterized(package, simple, generics))
    }
}

/// Split generic arguments on top-level commas only.
fn split_generic_args(inner: &str) -> Result<Vec<TypeName>> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("Unbalanced generics in: {}", inner))?;
            }
            ',' if depth == 0 => {
                args.push(parse_type_name(&inner[start..i])?);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        bail!("Unbalanced generics in: {}", inner);
    }
    args.push(parse_type_name(&inner[start..])?);
    Ok(args)
}

fn base_name(text: &str) -> &str {
    match text.find('<') {
        Some(open) => &text[..open],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrimshaw::TypeDisplay;

    fn display(text: &str) -> String {
        parse_type_name(text)
            .unwrap()
            .to_display(TypeDisplay::QualifiedGenerics, None)
    }

    #[test]
    fn test_parse_simple_name() {
        let name = parse_type_name("Foo").unwrap();
        assert_eq!(name.qualified(), "Foo");
    }

    #[test]
    fn test_parse_qualified_name() {
        let name = parse_type_name("java.util.List").unwrap();
        assert_eq!(name.qualified(), "java.util.List");
        assert_eq!(name.simple(), "List");
    }

    #[test]
    fn test_parse_generics() {
        assert_eq!(
            display("java.util.Map<String, java.util.List<Integer>>"),
            "java.util.Map<String, java.util.List<Integer>>"
        );
    }

    #[test]
    fn test_parse_arrays() {
        assert_eq!(display("int[]"), "int[]");
        assert_eq!(display("pkg.Foo[][]"), "pkg.Foo[][]");
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(display("?"), "?");
        assert_eq!(display("? extends Number"), "? extends Number");
        assert_eq!(display("? super pkg.Foo"), "? super pkg.Foo");
    }

    #[test]
    fn test_parse_rejects_unbalanced_generics() {
        assert!(parse_type_name("List<String").is_err());
        assert!(parse_type_name("").is_err());
    }

    #[test]
    fn test_model_round_trip_to_uml() {
        let json = r#"{
            "types": [{
                "package": "pkg",
                "name": "Foo",
                "kind": "class",
                "fields": [{"name": "bar", "type": "java.lang.String"}],
                "methods": [{"name": "baz"}]
            }]
        }"#;
        let model = parse_model(json).unwrap();
        assert_eq!(model.types.len(), 1);
        let type_ = model.types[0].to_uml_type().unwrap();
        assert_eq!(type_.name().qualified(), "pkg.Foo");
        assert_eq!(type_.members().len(), 2);
    }

    #[test]
    fn test_qualified_model_name_kept() {
        let json = r#"{"types": [{"package": "pkg", "name": "pkg.Foo.Inner"}]}"#;
        let model = parse_model(json).unwrap();
        let type_ = model.types[0].to_uml_type().unwrap();
        assert_eq!(type_.name().qualified(), "pkg.Foo.Inner");
    }

    #[test]
    fn test_empty_model_rejected() {
        assert!(parse_model(r#"{"types": []}"#).is_err());
        assert!(parse_model("not json").is_err());
    }

    #[test]
    fn test_empty_member_name_rejected() {
        let json = r#"{"types": [{"package": "pkg", "name": "Foo",
            "fields": [{"name": "  "}]}]}"#;
        let model = parse_model(json).unwrap();
        assert!(model.types[0].to_uml_type().is_err());
    }
}
