//! Remote PlantUML server backend
//!
//! Renders diagrams by fetching `<base>/<format>/<encoded-source>` from a
//! PlantUML server over HTTP. The default server is the public instance at
//! `https://www.plantuml.com/plantuml/`.

use std::io;
use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::core::{ImageFormat, UmlError};

use super::encode::encode_diagram_source;
use super::Backend;

pub const DEFAULT_SERVER_URL: &str = "https://www.plantuml.com/plantuml/";

/// Global timeout for diagram requests.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend that delegates rendering to a PlantUML server.
pub struct RemoteBackend {
    base_url: String,
    agent: Agent,
}

impl RemoteBackend {
    /// A backend for the given server base URL, or the public PlantUML
    /// server when `None`. Only `http://` and `https://` URLs are accepted;
    /// a missing trailing slash is added.
    pub fn new(base_url: Option<&str>) -> Result<Self, UmlError> {
        let url = base_url.unwrap_or(DEFAULT_SERVER_URL);
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(UmlError::backend(format!(
                "Unsupported PlantUML server base url: [{url}]"
            )));
        }
        let mut base_url = url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .build()
            .into();
        Ok(Self { base_url, agent })
    }

    /// The URL a diagram in the given format is fetched from.
    pub fn diagram_url(&self, source: &str, format: ImageFormat) -> Result<String, UmlError> {
        let encoded = encode_diagram_source(source)?;
        Ok(format!("{}{}/{}", self.base_url, format.remote_name(), encoded))
    }
}

impl Backend for RemoteBackend {
    fn render(
        &self,
        source: &str,
        format: ImageFormat,
        out: &mut dyn io::Write,
    ) -> Result<(), UmlError> {
        let url = self.diagram_url(source, format)?;
        debug!(%url, "Fetching diagram from PlantUML server");
        let mut response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| UmlError::backend(format!("Error fetching diagram: {e}")))?;
        let mut body = response.body_mut().as_reader();
        io::copy(&mut body, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server() {
        let backend = RemoteBackend::new(None).unwrap();
        assert_eq!(backend.base_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_trailing_slash_added() {
        let backend = RemoteBackend::new(Some("http://localhost:8080/plantuml")).unwrap();
        assert_eq!(backend.base_url, "http://localhost:8080/plantuml/");
    }

    #[test]
    fn test_non_http_url_rejected() {
        assert!(RemoteBackend::new(Some("ftp://example.com/plantuml/")).is_err());
        assert!(RemoteBackend::new(Some("plantuml.com")).is_err());
    }

    #[test]
    fn test_diagram_url_shape() {
        let backend = RemoteBackend::new(Some("https://uml.example.com/")).unwrap();
        let url = backend
            .diagram_url("@startuml\n@enduml\n", ImageFormat::Png)
            .unwrap();
        assert!(url.starts_with("https://uml.example.com/png/"));
        assert!(url.len() > "https://uml.example.com/png/".len());
    }
}
