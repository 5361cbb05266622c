//! Documentation links
//!
//! A [`Link`] is an optional cross-reference from a diagram element to its
//! generated documentation page. Resolution checks the destination
//! directory for the candidate HTML file (falling back to the
//! module-qualified location, and for packages to the summary pages) and
//! keeps the link only when the file exists. Rendering emits `[[target]]`
//! with the target relative to the render context's base directory when one
//! is set.

use std::path::{Component, Path, PathBuf};

use crate::core::{Configuration, IndentingWriter};

use super::namespace::Namespace;
use super::node::{RenderContext, UmlNode};
use super::types::Type;

/// An optional resolved link target.
#[derive(Debug, Clone)]
pub struct Link {
    target: Option<PathBuf>,
}

impl Link {
    /// Resolve the documentation link for a type:
    /// `<dest>/<package-path>/<NameInPackage>.html`, falling back to the
    /// module-qualified location.
    pub fn for_type(type_: &Type, config: &Configuration) -> Link {
        let target = resolve_html_file(
            &config.destination_directory,
            type_.module_name(),
            type_.package_name(),
            &type_.name_in_package(),
        );
        Link { target }
    }

    /// Resolve the documentation link for a package: the `package-summary`
    /// page, falling back to `module-summary`.
    pub fn for_package(namespace: &Namespace, config: &Configuration) -> Link {
        let target = ["package-summary", "module-summary"]
            .iter()
            .find_map(|name| {
                resolve_html_file(
                    &config.destination_directory,
                    namespace.module_name(),
                    namespace.name(),
                    name,
                )
            });
        Link { target }
    }

    /// Whether a target was resolved.
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }

    fn display_target(&self, base: Option<&Path>) -> Option<String> {
        let target = self.target.as_ref()?;
        let relative = base.and_then(|base| relativize(base, target));
        Some(path_text(relative.as_deref().unwrap_or(target)))
    }
}

impl UmlNode for Link {
    fn write_to<'w>(
        &self,
        ctx: &RenderContext<'_>,
        out: &'w mut IndentingWriter,
    ) -> &'w mut IndentingWriter {
        if let Some(target) = self.display_target(ctx.link_base) {
            out.append("[[").append(&target).append("]]");
        }
        out
    }
}

fn resolve_html_file(
    destination: &Path,
    module: Option<&str>,
    package: &str,
    name_in_package: &str,
) -> Option<PathBuf> {
    let package_path = package.replace('.', "/");
    let html_file = format!("{}.html", name_in_package);

    let candidate = destination.join(&package_path).join(&html_file);
    if candidate.is_file() {
        return Some(candidate);
    }
    if let Some(module) = module {
        let candidate = destination.join(module).join(&package_path).join(&html_file);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Compute `target` relative to the directory `base`, or `None` when the
/// two paths do not share a common root (e.g. absolute vs. relative).
fn relativize(base: &Path, target: &Path) -> Option<PathBuf> {
    if base.is_absolute() != target.is_absolute() {
        return None;
    }
    let base: Vec<Component> = base.components().collect();
    let target: Vec<Component> = target.components().collect();
    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();
    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component);
    }
    Some(relative)
}

/// Render a path with forward slashes, as expected in PlantUML link targets.
fn path_text(path: &Path) -> String {
    let mut text = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => text.push('/'),
            other => {
                if !text.is_empty() && !text.ends_with('/') {
                    text.push('/');
                }
                text.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    text
}
