use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::{
    error::{HostGroupError, HostGroupResult},
    loader::ResourceLoader,
};

/// In-memory resources keyed by exact location.
///
/// Content can be replaced while a registry holds the loader, which makes it suitable
/// for embedders that fetch the document themselves.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    resources: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace the content of `location`.
    pub fn insert(&self, location: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.resources
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(location.into(), content.into());
    }

    /// Forget `location`. Returns `true` if it was present.
    pub fn remove(&self, location: &str) -> bool {
        self.resources
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(location)
            .is_some()
    }
}

impl ResourceLoader for MemoryLoader {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&self, location: &str) -> HostGroupResult<Vec<u8>> {
        self.resources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(location)
            .cloned()
            .ok_or_else(|| HostGroupError::not_found(location))
    }
}
