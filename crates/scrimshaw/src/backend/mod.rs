//! Rasterization backends
//!
//! A [`Backend`] turns PlantUML source text into image bytes for one format.
//! [`select`] picks the implementation from the configuration: a server URL
//! starting with `http://` or `https://` chooses the [`RemoteBackend`], any
//! other configuration the [`LocalBackend`].

mod encode;
mod local;
mod remote;

use std::io;

use crate::core::{Configuration, ImageFormat, UmlError};

pub use encode::encode_diagram_source;
pub use local::LocalBackend;
pub use remote::{RemoteBackend, DEFAULT_SERVER_URL};

/// Renders PlantUML source into one image format.
pub trait Backend {
    fn render(
        &self,
        source: &str,
        format: ImageFormat,
        out: &mut dyn io::Write,
    ) -> Result<(), UmlError>;
}

/// Select the backend for a configuration.
pub fn select(config: &Configuration) -> Result<Box<dyn Backend>, UmlError> {
    match config.server_url.as_deref() {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Ok(Box::new(RemoteBackend::new(Some(url))?))
        }
        _ => Ok(Box::new(LocalBackend::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selects_remote(config: &Configuration) -> bool {
        // The trait object hides the concrete type; check the URL rule
        // the selector applies.
        config
            .server_url
            .as_deref()
            .is_some_and(|url| url.starts_with("http://") || url.starts_with("https://"))
    }

    #[test]
    fn test_remote_selected_for_http_urls() {
        let config = Configuration::default().with_server_url("https://uml.example.com/");
        assert!(selects_remote(&config));
        assert!(select(&config).is_ok());
    }

    #[test]
    fn test_local_selected_without_server_url() {
        let config = Configuration::default();
        assert!(!selects_remote(&config));
        assert!(select(&config).is_ok());
    }

    #[test]
    fn test_local_selected_for_non_http_url() {
        let config = Configuration::default().with_server_url("file:///tmp/plantuml");
        assert!(!selects_remote(&config));
        assert!(select(&config).is_ok());
    }
}
