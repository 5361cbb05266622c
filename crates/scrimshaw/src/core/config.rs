//! Diagram generation configuration
//!
//! A [`Configuration`] is read-only for the duration of one render. It
//! supplies the destination directory, image formats, member visibility
//! filters, type-display policies, custom PlantUML directives, and the
//! optional PlantUML server URL that selects the remote rendering backend.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use super::error::UmlError;
use super::indent::Indentation;

/// How a type reference is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDisplay {
    /// Omit the type entirely.
    None,
    /// Simple name without its package.
    Simple,
    /// Qualified name; generic arguments keep their simple names.
    Qualified,
    /// Qualified name, also for generic arguments.
    QualifiedGenerics,
}

impl FromStr for TypeDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TypeDisplay::None),
            "simple" => Ok(TypeDisplay::Simple),
            "qualified" => Ok(TypeDisplay::Qualified),
            "qualified-generics" | "qualified_generics" => Ok(TypeDisplay::QualifiedGenerics),
            _ => Err(format!("Unknown type display: {}", s)),
        }
    }
}

/// Access level of a field or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Private,
    Protected,
    PackagePrivate,
    Public,
}

impl Visibility {
    /// The PlantUML visibility glyph.
    pub fn glyph(self) -> char {
        match self {
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::PackagePrivate => '~',
            Visibility::Public => '+',
        }
    }
}

/// The set of visibilities whose members appear in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilitySet {
    private: bool,
    protected: bool,
    package_private: bool,
    public: bool,
}

impl VisibilitySet {
    /// Public members only.
    pub const PUBLIC: VisibilitySet = VisibilitySet {
        private: false,
        protected: false,
        package_private: false,
        public: true,
    };

    /// Public and protected members (the javadoc default).
    pub const PROTECTED: VisibilitySet = VisibilitySet {
        private: false,
        protected: true,
        package_private: false,
        public: true,
    };

    /// Everything except private members.
    pub const PACKAGE: VisibilitySet = VisibilitySet {
        private: false,
        protected: true,
        package_private: true,
        public: true,
    };

    /// All members.
    pub const ALL: VisibilitySet = VisibilitySet {
        private: true,
        protected: true,
        package_private: true,
        public: true,
    };

    /// Whether members with the given visibility are included.
    pub fn contains(self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Private => self.private,
            Visibility::Protected => self.protected,
            Visibility::PackagePrivate => self.package_private,
            Visibility::Public => self.public,
        }
    }

    /// Parse a javadoc-style member filter. Unknown values fall back to the
    /// `protected` default with a warning.
    pub fn parse_lenient(value: &str) -> VisibilitySet {
        match value.parse() {
            Ok(set) => set,
            Err(_) => {
                warn!(value, "Unknown visibility filter, defaulting to 'protected'");
                VisibilitySet::PROTECTED
            }
        }
    }
}

impl FromStr for VisibilitySet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(VisibilitySet::PUBLIC),
            "protected" => Ok(VisibilitySet::PROTECTED),
            "package" => Ok(VisibilitySet::PACKAGE),
            "private" | "all" => Ok(VisibilitySet::ALL),
            _ => Err(format!("Unknown visibility filter: {}", s)),
        }
    }
}

/// Where a method parameter's name appears relative to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamNames {
    /// Omit parameter names altogether.
    None,
    /// `name: type`
    BeforeType,
    /// `type name`
    AfterType,
}

impl FromStr for ParamNames {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ParamNames::None),
            "before-type" | "before_type" => Ok(ParamNames::BeforeType),
            "after-type" | "after_type" => Ok(ParamNames::AfterType),
            _ => Err(format!("Unknown parameter name policy: {}", s)),
        }
    }
}

/// How fields are rendered.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub type_display: TypeDisplay,
    pub visibilities: VisibilitySet,
}

impl FieldConfig {
    /// Whether a field with the given visibility is included.
    pub fn include(&self, visibility: Visibility) -> bool {
        self.visibilities.contains(visibility)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            type_display: TypeDisplay::Simple,
            visibilities: VisibilitySet::PROTECTED,
        }
    }
}

/// How methods are rendered.
#[derive(Debug, Clone, Copy)]
pub struct MethodConfig {
    pub param_names: ParamNames,
    pub param_types: TypeDisplay,
    pub return_type: TypeDisplay,
    pub visibilities: VisibilitySet,
}

impl MethodConfig {
    /// Whether a method with the given visibility is included.
    pub fn include(&self, visibility: Visibility) -> bool {
        self.visibilities.contains(visibility)
    }
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self {
            param_names: ParamNames::BeforeType,
            param_types: TypeDisplay::Simple,
            return_type: TypeDisplay::Simple,
            visibilities: VisibilitySet::PROTECTED,
        }
    }
}

/// A rasterized diagram output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
    Eps,
}

impl ImageFormat {
    /// The file suffix for this format, including the dot.
    pub fn file_suffix(self) -> &'static str {
        match self {
            ImageFormat::Svg => ".svg",
            ImageFormat::Png => ".png",
            ImageFormat::Eps => ".eps",
        }
    }

    /// The path segment used by the remote PlantUML server.
    pub fn remote_name(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Eps => "eps",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // "svg_img" is an accepted alias for plain SVG output.
            "svg" | "svg_img" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            "eps" => Ok(ImageFormat::Eps),
            _ => Err(format!("Unknown image format: {}", s)),
        }
    }
}

/// Image output configuration.
#[derive(Debug, Clone, Default)]
pub struct ImageConfig {
    /// Optional directory (relative to the destination) that collects all
    /// images; when set, diagram base names are flattened with `.`.
    pub directory: Option<String>,
    /// Requested format names; unrecognized entries are dropped with a
    /// warning when the list is resolved.
    pub formats: Vec<String>,
}

impl ImageConfig {
    /// Resolve the requested format names, warning about and dropping any
    /// the generator does not recognize.
    pub fn resolve_formats(&self) -> Vec<ImageFormat> {
        let mut resolved = Vec::new();
        for name in &self.formats {
            match name.parse::<ImageFormat>() {
                Ok(format) if !resolved.contains(&format) => resolved.push(format),
                Ok(_) => {}
                Err(_) => warn!(format = %name, "Unrecognized image format, skipping"),
            }
        }
        resolved
    }
}

/// Read-only configuration for one diagram render.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Directory where documentation and diagrams are generated.
    pub destination_directory: PathBuf,
    pub images: ImageConfig,
    pub fields: FieldConfig,
    pub methods: MethodConfig,
    /// Lines injected verbatim after `@startuml`.
    pub custom_directives: Vec<String>,
    /// PlantUML server base URL; an `http(s)://` value selects the remote
    /// rendering backend.
    pub server_url: Option<String>,
    pub indentation: Indentation,
    /// Text of the `center footer` line.
    pub footer: String,
    /// Character encoding name for the generated UML text.
    pub encoding: String,
    /// Whether `.puml` source files are written next to the images.
    pub create_puml_files: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            destination_directory: PathBuf::from("."),
            images: ImageConfig {
                directory: None,
                formats: vec!["svg".to_string()],
            },
            fields: FieldConfig::default(),
            methods: MethodConfig::default(),
            custom_directives: Vec::new(),
            server_url: None,
            indentation: Indentation::DEFAULT,
            footer: concat!("scrimshaw ", env!("CARGO_PKG_VERSION")).to_string(),
            encoding: "utf-8".to_string(),
            create_puml_files: false,
        }
    }
}

impl Configuration {
    /// Set the destination directory.
    pub fn with_destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination_directory = dir.into();
        self
    }

    /// Set the member visibility filter for both fields and methods.
    pub fn with_visibilities(mut self, visibilities: VisibilitySet) -> Self {
        self.fields.visibilities = visibilities;
        self.methods.visibilities = visibilities;
        self
    }

    /// Set the PlantUML server base URL.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Add a custom PlantUML directive line.
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.custom_directives.push(directive.into());
        self
    }

    /// Resolve the configured encoding name.
    ///
    /// The generator only emits UTF-8 (of which US-ASCII is a subset); any
    /// other encoding is a fatal configuration error.
    pub fn charset(&self) -> Result<&'static str, UmlError> {
        match self.encoding.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok("UTF-8"),
            "ascii" | "us-ascii" => Ok("US-ASCII"),
            other => Err(UmlError::config(format!("Unsupported encoding: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_glyphs() {
        assert_eq!(Visibility::Public.glyph(), '+');
        assert_eq!(Visibility::Protected.glyph(), '#');
        assert_eq!(Visibility::PackagePrivate.glyph(), '~');
        assert_eq!(Visibility::Private.glyph(), '-');
    }

    #[test]
    fn test_visibility_set_parsing() {
        assert_eq!("public".parse(), Ok(VisibilitySet::PUBLIC));
        assert_eq!("protected".parse(), Ok(VisibilitySet::PROTECTED));
        assert_eq!("package".parse(), Ok(VisibilitySet::PACKAGE));
        assert_eq!("private".parse(), Ok(VisibilitySet::ALL));
        assert_eq!("all".parse(), Ok(VisibilitySet::ALL));
        assert!("everything".parse::<VisibilitySet>().is_err());
    }

    #[test]
    fn test_visibility_set_lenient_fallback() {
        assert_eq!(
            VisibilitySet::parse_lenient("nonsense"),
            VisibilitySet::PROTECTED
        );
    }

    #[test]
    fn test_protected_set_membership() {
        let set = VisibilitySet::PROTECTED;
        assert!(set.contains(Visibility::Public));
        assert!(set.contains(Visibility::Protected));
        assert!(!set.contains(Visibility::PackagePrivate));
        assert!(!set.contains(Visibility::Private));
    }

    #[test]
    fn test_image_format_parsing() {
        assert_eq!("svg".parse(), Ok(ImageFormat::Svg));
        assert_eq!("SVG_IMG".parse(), Ok(ImageFormat::Svg));
        assert_eq!("png".parse(), Ok(ImageFormat::Png));
        assert!("bmp".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_resolve_formats_drops_unknown() {
        let images = ImageConfig {
            directory: None,
            formats: vec!["svg".into(), "bmp".into(), "png".into(), "svg".into()],
        };
        assert_eq!(
            images.resolve_formats(),
            vec![ImageFormat::Svg, ImageFormat::Png]
        );
    }

    #[test]
    fn test_charset_resolution() {
        let config = Configuration::default();
        assert_eq!(config.charset().unwrap(), "UTF-8");

        let mut config = Configuration::default();
        config.encoding = "latin-1".to_string();
        assert!(matches!(config.charset(), Err(UmlError::Config { .. })));
    }

    #[test]
    fn test_type_display_parsing() {
        assert_eq!("simple".parse(), Ok(TypeDisplay::Simple));
        assert_eq!("qualified-generics".parse(), Ok(TypeDisplay::QualifiedGenerics));
        assert!("fancy".parse::<TypeDisplay>().is_err());
    }
}
