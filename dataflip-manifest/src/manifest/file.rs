use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a dataflip.toml file with both raw content and parsed manifest.
pub struct DataflipToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl DataflipToml {
    /// Open and parse a dataflip.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the manifest lives in. Relative output paths resolve against it.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_resolves_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataflip.toml");
        std::fs::write(
            &path,
            r#"
[[contexts]]
name = "Shop"
namespace = "Acme"
database = { url = "postgres://localhost/shop" }
output = { host = "Shop.cs" }
procedures = [{ name = "list_orders", method = "ListOrders" }]
"#,
        )
        .unwrap();

        let file = DataflipToml::open(&path).unwrap();
        assert_eq!(file.root(), dir.path());
        assert_eq!(file.manifest().contexts[0].name, "Shop");
        assert!(file.content().contains("list_orders"));
    }

    #[test]
    fn test_open_reports_path_in_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataflip.toml");
        std::fs::write(&path, "contexts = 5").unwrap();

        let err = DataflipToml::open(&path).err().unwrap();
        match *err {
            crate::Error::Parse { src, .. } => {
                assert_eq!(src.name(), path.display().to_string());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
