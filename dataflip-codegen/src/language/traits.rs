//! Backend traits.

use std::path::{Path, PathBuf};

use dataflip_core::HostType;
use dataflip_ir::Context;

use crate::builder::EmitError;

/// A generator that renders a [`Context`] into one text artifact.
///
/// Backends are pure: they read the IR, never mutate it, and share no state
/// with one another.
pub trait Backend {
    /// Backend identifier (e.g., "csharp", "typescript", "angular")
    fn name(&self) -> &'static str;

    /// File extension of the rendered artifact (e.g., "cs", "ts", "html")
    fn file_extension(&self) -> &'static str;

    /// Whether `path` carries this backend's file extension.
    fn accepts_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.file_extension()))
    }

    /// Render the whole context.
    fn render(&self, context: &Context) -> Result<String, EmitError>;

    /// Render the context into an artifact at `path`.
    fn artifact(&self, context: &Context, path: PathBuf) -> Result<Artifact, EmitError> {
        Ok(Artifact {
            backend: self.name(),
            path,
            content: self.render(context)?,
        })
    }
}

/// A rendered artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Name of the backend that produced it
    pub backend: &'static str,
    /// Destination path
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Trait for mapping host types to language-specific type names.
pub trait TypeMapper {
    /// Map a host type to its name in the target language
    fn map_type(&self, ty: HostType) -> &'static str;

    /// Map a host type for a field that may hold no value.
    fn map_optional_type(&self, ty: HostType) -> String {
        self.map_type(ty).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Backend for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn render(&self, context: &Context) -> Result<String, EmitError> {
            Ok(context.name().to_string())
        }
    }

    #[test]
    fn test_accepts_path_by_extension() {
        assert!(Plain.accepts_path(Path::new("out/Context.txt")));
        assert!(Plain.accepts_path(Path::new("out/Context.TXT")));
        assert!(!Plain.accepts_path(Path::new("out/Context.cs")));
        assert!(!Plain.accepts_path(Path::new("out/Context")));
    }

    #[test]
    fn test_artifact_carries_backend_name() {
        let context = Context::new("Hello.World", "CoolContext");
        let artifact = Plain.artifact(&context, PathBuf::from("a.txt")).unwrap();

        assert_eq!(artifact.backend, "plain");
        assert_eq!(artifact.content, "CoolContext");
    }
}
