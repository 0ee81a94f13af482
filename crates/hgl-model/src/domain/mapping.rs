use std::{collections::BTreeMap, sync::Arc};

use crate::HostSet;

/// Mapping from group label to its host set.
///
/// Keys are stored lowercased, and lookups lowercase the query,
/// so label matching is case-insensitive in both directions.
/// Host sets are shared behind [`Arc`] so resolved sets can be handed out without copying.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LabelMapping(BTreeMap<String, Arc<HostSet>>);

impl LabelMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct (case-folded) labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Store `hosts` under the lowercased `label`, replacing any previous set.
    ///
    /// Returns the replaced set, if there was one.
    pub fn insert(&mut self, label: &str, hosts: HostSet) -> Option<Arc<HostSet>> {
        self.0.insert(label.to_lowercase(), Arc::new(hosts))
    }

    /// Look up a label case-insensitively.
    pub fn get(&self, label: &str) -> Option<&Arc<HostSet>> {
        self.0.get(&label.to_lowercase())
    }

    /// Iterate through the stored (lowercase) labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}
