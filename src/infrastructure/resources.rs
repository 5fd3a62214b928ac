use crate::error::LoadError;
use std::path::{Path, PathBuf};

/// Resolves named resources, `(name, type)`, to files under a root directory.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    root: PathBuf,
}

impl ResourceLocator {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of `<root>/<name>.<kind>`.
    ///
    /// Fails with `ResourceNotFound` when no regular file exists there.
    pub fn resolve(&self, name: &str, kind: &str) -> Result<PathBuf, LoadError> {
        let path = self.root.join(format!("{name}.{kind}"));
        if name.is_empty() || !path.is_file() {
            return Err(LoadError::ResourceNotFound {
                name: name.to_string(),
                kind: kind.to_string(),
            });
        }
        Ok(path)
    }
}
