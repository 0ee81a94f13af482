use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::trace;

use crate::{
    error::{HostGroupError, HostGroupResult},
    loader::ResourceLoader,
};

/// Resolves locations against an ordered list of root directories.
///
/// Absolute locations are used as-is. Relative locations are joined onto each root in turn
/// and the first existing regular file wins.
#[derive(Debug, Clone)]
pub struct SearchPathLoader {
    roots: Vec<PathBuf>,
}

impl SearchPathLoader {
    /// Create a loader searching the given roots in order.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Loader searching only the process working directory.
    pub fn current_dir() -> Self {
        Self::new([PathBuf::from(".")])
    }

    /// Append a root searched after the existing ones.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Configured roots, in search order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Resolve `location` to an existing file, if any.
    pub fn resolve(&self, location: &str) -> Option<PathBuf> {
        let path = Path::new(location);
        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }
        self.roots
            .iter()
            .map(|root| root.join(path))
            .find(|candidate| candidate.is_file())
    }
}

impl Default for SearchPathLoader {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl ResourceLoader for SearchPathLoader {
    fn name(&self) -> &'static str {
        "search-path"
    }

    fn load(&self, location: &str) -> HostGroupResult<Vec<u8>> {
        if location.is_empty() {
            return Err(HostGroupError::not_found(location));
        }
        let path = self
            .resolve(location)
            .ok_or_else(|| HostGroupError::not_found(location))?;
        trace!(location, path = %path.display(), "resolved host group labels file");

        fs::read(&path).map_err(|e| match e.kind() {
            // Removed between resolve and read.
            io::ErrorKind::NotFound => HostGroupError::not_found(location),
            _ => HostGroupError::Io {
                location: location.to_string(),
                source: e,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = SearchPathLoader::new([dir.path()]);

        let err = loader.load("hostgroups.xml").unwrap_err();
        assert!(matches!(err, HostGroupError::NotFound { .. }), "got {err:?}");
        assert_eq!(err.location(), "hostgroups.xml");
    }

    #[test]
    fn empty_location_is_not_found() {
        let loader = SearchPathLoader::current_dir();
        assert!(matches!(
            loader.load(""),
            Err(HostGroupError::NotFound { .. })
        ));
    }

    #[test]
    fn first_root_containing_the_file_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("groups.xml"), b"second").unwrap();

        let loader = SearchPathLoader::new([first.path()]).with_root(second.path());
        assert_eq!(loader.load("groups.xml").unwrap(), b"second");

        fs::write(first.path().join("groups.xml"), b"first").unwrap();
        assert_eq!(loader.load("groups.xml").unwrap(), b"first");
        assert_eq!(loader.roots().len(), 2);
    }

    #[test]
    fn absolute_location_ignores_roots() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("abs.xml");
        fs::write(&file, b"abs").unwrap();

        let loader = SearchPathLoader::new(Vec::<PathBuf>::new());
        let location = file.to_str().unwrap();
        assert_eq!(loader.load(location).unwrap(), b"abs");
    }

    #[test]
    fn directory_is_not_a_resource() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("groups.xml")).unwrap();

        let loader = SearchPathLoader::new([dir.path()]);
        assert!(loader.resolve("groups.xml").is_none());
    }
}
