//! Diagram document root
//!
//! A [`ClassDiagram`] wraps exactly one [`Type`], owns the configuration for
//! the render, and orchestrates the fixed serialization sequence:
//! `@startuml`, custom directives, the package block with the type, the
//! footer line, `@enduml`. It is constructed once per diagram request,
//! rendered once, and discarded.

use std::fs;
use std::path::{Path, PathBuf};
use std::slice;

use tracing::{debug, info};

use crate::backend;
use crate::core::{Configuration, ImageFormat, IndentingWriter, UmlError};

use super::node::{RenderContext, UmlNode};
use super::types::Type;

/// UML class diagram for a single type.
#[derive(Debug)]
pub struct ClassDiagram {
    config: Configuration,
    type_: Type,
    formats: Vec<ImageFormat>,
}

impl ClassDiagram {
    /// Create a diagram for one type. The configured image-format names are
    /// resolved immediately; unrecognized names are dropped with a warning.
    pub fn new(config: Configuration, type_: Type) -> Self {
        let formats = config.images.resolve_formats();
        Self {
            config,
            type_,
            formats,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// The type this diagram documents.
    pub fn diagram_type(&self) -> &Type {
        &self.type_
    }

    /// The resolved image formats this diagram renders to.
    pub fn formats(&self) -> &[ImageFormat] {
        &self.formats
    }

    /// The location of the PlantUML source file:
    /// `<dest>/[<module>/]<package-path>/<NameInPackage>.puml`.
    pub fn puml_file(&self) -> PathBuf {
        let mut file = self.config.destination_directory.clone();
        if let Some(module) = self.type_.module_name() {
            file.push(module);
        }
        let package = self.type_.package_name();
        if !package.is_empty() {
            file.push(package.replace('.', "/"));
        }
        file.push(format!("{}.puml", self.type_.name_in_package()));
        file
    }

    /// The diagram file location without its format extension.
    ///
    /// With an image directory configured, all diagrams collect there under
    /// a flattened name (path separators become `.`); otherwise the diagram
    /// sits next to its `.puml` source.
    pub fn diagram_base_file(&self) -> PathBuf {
        let puml = self.puml_file();
        let base = puml.with_extension("");
        match &self.config.images.directory {
            Some(image_dir) => {
                let relative = base
                    .strip_prefix(&self.config.destination_directory)
                    .unwrap_or(&base);
                let flattened = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(".");
                self.config
                    .destination_directory
                    .join(image_dir)
                    .join(flattened)
            }
            None => base,
        }
    }

    /// The diagram file for one image format.
    pub fn diagram_file(&self, format: ImageFormat) -> PathBuf {
        let base = self.diagram_base_file();
        let mut name = base
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        name.push_str(format.file_suffix());
        base.with_file_name(name)
    }

    /// Serialize the diagram to PlantUML source text. Relative link targets
    /// are computed against the diagram's output directory.
    pub fn source(&self) -> String {
        let base = self.diagram_base_file();
        self.source_with_link_base(base.parent())
    }

    fn source_with_link_base(&self, link_base: Option<&Path>) -> String {
        let ctx = match link_base {
            Some(base) => RenderContext::new(&self.config).with_link_base(base),
            None => RenderContext::new(&self.config),
        };
        let mut out = IndentingWriter::new(self.config.indentation);
        self.write_to(&ctx, &mut out);
        out.into_string()
    }

    /// Render the diagram: optionally write the `.puml` source file, then
    /// rasterize every resolved format through the configured backend.
    ///
    /// Backend failures are fatal for this render call and are not retried.
    pub fn render(&self) -> Result<(), UmlError> {
        self.config.charset()?;

        let source = self.source();
        if self.config.create_puml_files {
            let puml = self.puml_file();
            info!(file = %puml.display(), "Generating PlantUML file");
            ensure_parent_dir(&puml)?;
            fs::write(&puml, &source)?;
        }

        if self.formats.is_empty() {
            debug!("No image formats requested, skipping rasterization");
            return Ok(());
        }
        let backend = backend::select(&self.config)?;
        for &format in &self.formats {
            let file = self.diagram_file(format);
            info!(file = %file.display(), "Generating diagram file");
            ensure_parent_dir(&file)?;
            let mut out = fs::File::create(&file)?;
            backend.render(&source, format, &mut out)?;
        }
        Ok(())
    }

    fn write_directives_to<'w>(&self, out: &'w mut IndentingWriter) -> &'w mut IndentingWriter {
        for directive in &self.config.custom_directives {
            out.append(directive).newline();
        }
        if !self.config.custom_directives.is_empty() {
            out.newline();
        }
        out
    }

    fn write_footer_to<'w>(&self, out: &'w mut IndentingWriter) -> &'w mut IndentingWriter {
        out.append("center footer")
            .whitespace()
            .append(&self.config.footer)
            .newline()
    }

    fn write_children_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        self.type_
            .namespace()
            .write_block(slice::from_ref(&self.type_), ctx, out)
    }
}

impl UmlNode for ClassDiagram {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        out.append("@startuml").newline();
        out.indent();
        self.write_directives_to(out);
        self.write_children_to(ctx, out);
        self.write_footer_to(out);
        out.unindent();
        out.append("@enduml").newline()
    }
}

fn ensure_parent_dir(file: &Path) -> Result<(), UmlError> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uml::{Classification, Namespace, TypeName};

    fn diagram_for(package: &str, module: Option<&str>, name: &str) -> ClassDiagram {
        let namespace = match module {
            Some(module) => Namespace::with_module(package, module),
            None => Namespace::new(package),
        };
        let qualified_package = if package.is_empty() {
            None
        } else {
            Some(package)
        };
        let type_ = Type::new(
            namespace,
            Classification::Class,
            TypeName::new(qualified_package, name),
        );
        let config = Configuration::default().with_destination("/docs");
        ClassDiagram::new(config, type_)
    }

    #[test]
    fn test_puml_file_location() {
        let diagram = diagram_for("com.example", None, "Foo");
        assert_eq!(
            diagram.puml_file(),
            PathBuf::from("/docs/com/example/Foo.puml")
        );
    }

    #[test]
    fn test_puml_file_with_module() {
        let diagram = diagram_for("com.example", Some("my.module"), "Foo");
        assert_eq!(
            diagram.puml_file(),
            PathBuf::from("/docs/my.module/com/example/Foo.puml")
        );
    }

    #[test]
    fn test_diagram_base_file_without_image_directory() {
        let diagram = diagram_for("com.example", None, "Foo");
        assert_eq!(
            diagram.diagram_base_file(),
            PathBuf::from("/docs/com/example/Foo")
        );
        assert_eq!(
            diagram.diagram_file(ImageFormat::Svg),
            PathBuf::from("/docs/com/example/Foo.svg")
        );
    }

    #[test]
    fn test_diagram_base_file_flattens_into_image_directory() {
        let mut diagram = diagram_for("com.example", None, "Foo");
        diagram.config_mut().images.directory = Some("images".to_string());
        assert_eq!(
            diagram.diagram_base_file(),
            PathBuf::from("/docs/images/com.example.Foo")
        );
        assert_eq!(
            diagram.diagram_file(ImageFormat::Png),
            PathBuf::from("/docs/images/com.example.Foo.png")
        );
    }

    #[test]
    fn test_unknown_formats_dropped_at_construction() {
        let type_ = Type::new(
            Namespace::new("pkg"),
            Classification::Class,
            TypeName::new(Some("pkg"), "Foo"),
        );
        let mut config = Configuration::default();
        config.images.formats = vec!["svg".into(), "bmp".into()];
        let diagram = ClassDiagram::new(config, type_);
        assert_eq!(diagram.formats(), &[ImageFormat::Svg]);
    }
}
