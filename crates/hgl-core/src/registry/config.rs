use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loader::SearchPathLoader;

/// Registry configuration as supplied by the hosting process.
///
/// Empty strings keep their usual meaning: no resource configured, no restriction for a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Location of the host group labels document.
    pub resource: String,
    /// Label restricting map task placement.
    pub map_label: String,
    /// Label restricting reduce task placement.
    pub reduce_label: String,
    /// Directories searched for a relative `resource`. Empty means the working directory.
    pub search_paths: Vec<PathBuf>,
}

impl RegistryConfig {
    /// Builds the filesystem loader described by `search_paths`.
    pub fn loader(&self) -> SearchPathLoader {
        if self.search_paths.is_empty() {
            SearchPathLoader::current_dir()
        } else {
            SearchPathLoader::new(self.search_paths.iter().cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconfigured() {
        let cfg = RegistryConfig::default();

        assert!(cfg.resource.is_empty());
        assert!(cfg.map_label.is_empty());
        assert!(cfg.reduce_label.is_empty());
        assert_eq!(cfg.loader().roots(), &[PathBuf::from(".")]);
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"resource": "hostgroups.xml", "map_label": "GPU"}"#;
        let cfg: RegistryConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.resource, "hostgroups.xml");
        assert_eq!(cfg.map_label, "GPU");
        assert_eq!(cfg.reduce_label, "");
        assert!(cfg.search_paths.is_empty());
    }

    #[test]
    fn search_paths_become_loader_roots() {
        let json = r#"{"search_paths": ["/etc/cluster", "conf"]}"#;
        let cfg: RegistryConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            cfg.loader().roots(),
            &[PathBuf::from("/etc/cluster"), PathBuf::from("conf")]
        );
    }
}
