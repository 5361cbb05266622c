//! Local PlantUML backend
//!
//! Renders diagrams by piping the source through a locally installed
//! `plantuml` executable (`plantuml -pipe -t<format>`). Used whenever no
//! remote server is configured.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::{ImageFormat, UmlError};

use super::Backend;

const PLANTUML_COMMAND: &str = "plantuml";

/// Backend that shells out to a local PlantUML installation.
#[derive(Debug, Default)]
pub struct LocalBackend;

impl LocalBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for LocalBackend {
    fn render(
        &self,
        source: &str,
        format: ImageFormat,
        out: &mut dyn io::Write,
    ) -> Result<(), UmlError> {
        let format_flag = format!("-t{}", format.remote_name());
        debug!(command = PLANTUML_COMMAND, flag = %format_flag, "Rendering diagram locally");
        let mut child = Command::new(PLANTUML_COMMAND)
            .arg("-pipe")
            .arg(&format_flag)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                UmlError::backend(format!("Could not start {PLANTUML_COMMAND}: {e}"))
            })?;

        // stdin is dropped after the write so plantuml sees end-of-input.
        child
            .stdin
            .take()
            .ok_or_else(|| UmlError::backend("Could not open plantuml stdin"))?
            .write_all(source.as_bytes())?;

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(UmlError::backend(format!(
                "plantuml exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        out.write_all(&output.stdout)?;
        Ok(())
    }
}
