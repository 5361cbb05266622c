//! Command-line interface for the scrimshaw utility
//!
//! Provides a CLI to turn a JSON type model into PlantUML class diagrams:
//! either printed as PlantUML source, rendered to image files, or turned
//! into PlantUML server URLs.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use scrimshaw::backend::RemoteBackend;
use scrimshaw::core::logging::init_logging;
use scrimshaw::uml::ClassDiagram;
use scrimshaw::{Configuration, ImageFormat, ParamNames, TypeDisplay, VisibilitySet};

use crate::model;

/// Preamble injected into every diagram unless `--plain` is given.
const DEFAULT_DIRECTIVES: &[&str] = &[
    "set namespaceSeparator none",
    "hide empty fields",
    "hide empty methods",
];

/// Scrimshaw - Render source-code type models as PlantUML class diagrams
#[derive(Parser)]
#[command(name = "scrimshaw")]
#[command(about = "A Rust utility to render source-code type models as PlantUML class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render diagrams for a JSON type model to files
    Generate {
        /// Input file containing the JSON type model (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Destination directory for generated files
        #[arg(short, long, default_value = ".")]
        dest: PathBuf,

        /// Image format to render (repeatable: svg|png|eps)
        #[arg(long = "format", default_values_t = vec!["svg".to_string()])]
        formats: Vec<String>,

        /// Collect all images under this subdirectory of the destination
        #[arg(long)]
        image_directory: Option<String>,

        /// PlantUML server base URL; renders locally when omitted
        #[arg(long)]
        server_url: Option<String>,

        /// Also write .puml source files
        #[arg(long)]
        puml: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Print the PlantUML source for a JSON type model
    Source {
        /// Input file containing the JSON type model (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the PlantUML source (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Print the PlantUML server URL for existing PlantUML source
    Url {
        /// Input file containing PlantUML source (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Image format for the URL (svg|png|eps)
        #[arg(long, default_value = "png")]
        format: String,

        /// PlantUML server base URL
        #[arg(long)]
        server_url: Option<String>,
    },
}

/// Rendering policy options shared by the model-consuming subcommands.
#[derive(Args)]
pub struct PolicyArgs {
    /// Member visibility filter (public|protected|package|private|all)
    #[arg(long, default_value = "protected")]
    pub visibility: String,

    /// Field type display (none|simple|qualified|qualified-generics)
    #[arg(long, default_value = "simple")]
    pub field_types: String,

    /// Parameter name position (none|before-type|after-type)
    #[arg(long, default_value = "before-type")]
    pub param_names: String,

    /// Parameter type display (none|simple|qualified|qualified-generics)
    #[arg(long, default_value = "simple")]
    pub param_types: String,

    /// Return type display (none|simple|qualified|qualified-generics)
    #[arg(long, default_value = "simple")]
    pub return_types: String,

    /// Render in-package type headlines with a two-line package alias label
    #[arg(long)]
    pub package_names: bool,

    /// Extra PlantUML directive line placed after @startuml (repeatable)
    #[arg(long = "directive")]
    pub directives: Vec<String>,

    /// Skip the default preamble directives
    #[arg(long)]
    pub plain: bool,

    /// Footer text override
    #[arg(long)]
    pub footer: Option<String>,
}

impl PolicyArgs {
    /// Apply these options on top of a base configuration.
    pub fn apply(&self, mut config: Configuration) -> Result<Configuration> {
        config = config.with_visibilities(VisibilitySet::parse_lenient(&self.visibility));
        config.fields.type_display = parse_policy::<TypeDisplay>(&self.field_types)?;
        config.methods.param_names = parse_policy::<ParamNames>(&self.param_names)?;
        config.methods.param_types = parse_policy::<TypeDisplay>(&self.param_types)?;
        config.methods.return_type = parse_policy::<TypeDisplay>(&self.return_types)?;
        if !self.plain {
            for directive in DEFAULT_DIRECTIVES {
                config = config.with_directive(*directive);
            }
        }
        for directive in &self.directives {
            config = config.with_directive(directive);
        }
        if let Some(footer) = &self.footer {
            config.footer = footer.clone();
        }
        Ok(config)
    }
}

fn parse_policy<T: std::str::FromStr<Err = String>>(value: &str) -> Result<T> {
    value.parse().map_err(|e: String| anyhow!(e))
}

/// Main CLI application
#[derive(Default)]
pub struct ScrimshawApp;

impl ScrimshawApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("SCRIMSHAW_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("SCRIMSHAW_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Scrimshaw v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                dest,
                formats,
                image_directory,
                server_url,
                puml,
                policy,
            } => self.generate_command(
                input,
                dest,
                formats,
                image_directory,
                server_url,
                puml,
                policy,
                cli.verbose,
            ),
            Commands::Source {
                input,
                output,
                policy,
            } => self.source_command(input, output, policy, cli.verbose),
            Commands::Url {
                input,
                format,
                server_url,
            } => self.url_command(input, format, server_url),
        }
    }

    /// Handle the generate command
    #[allow(clippy::too_many_arguments)]
    fn generate_command(
        &self,
        input: Option<PathBuf>,
        dest: PathBuf,
        formats: Vec<String>,
        image_directory: Option<String>,
        server_url: Option<String>,
        puml: bool,
        policy: PolicyArgs,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        let model = model::parse_model(&content)?;

        let mut config = policy.apply(Configuration::default().with_destination(dest))?;
        config.images.formats = formats;
        config.images.directory = image_directory;
        config.server_url = server_url;
        config.create_puml_files = puml;

        for type_model in &model.types {
            let mut type_ = type_model.to_uml_type()?;
            type_.set_include_package_name(policy.package_names);
            let name = type_.name().qualified();
            let diagram = ClassDiagram::new(config.clone(), type_);
            diagram.render()?;
            if verbose {
                eprintln!("Generated diagram for {}", name);
            }
        }
        Ok(())
    }

    /// Handle the source command
    fn source_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        policy: PolicyArgs,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        let model = model::parse_model(&content)?;
        let config = policy.apply(Configuration::default())?;

        let mut source = String::new();
        for type_model in &model.types {
            let mut type_ = type_model.to_uml_type()?;
            type_.set_include_package_name(policy.package_names);
            let diagram = ClassDiagram::new(config.clone(), type_);
            source.push_str(&diagram.source());
        }

        if verbose {
            eprintln!("Serialized {} diagram(s)", model.types.len());
        }
        self.write_output(output, &source)
    }

    /// Handle the url command
    fn url_command(
        &self,
        input: Option<PathBuf>,
        format: String,
        server_url: Option<String>,
    ) -> Result<()> {
        let source = self.read_input(input)?;
        let format: ImageFormat = format.parse().map_err(|e: String| anyhow!(e))?;
        let backend = RemoteBackend::new(server_url.as_deref())?;
        println!("{}", backend.diagram_url(&source, format)?);
        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::read_to_string(&path)
                    .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e))
            }
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
                Ok(())
            }
        }
    }
}
