use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of host identifiers belonging to one group label.
///
/// Membership is all that matters: inserting the same host twice leaves a single entry.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostSet(BTreeSet<String>);

impl HostSet {
    /// Create an empty host set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` if no hosts are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct hosts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Add a host. Returns `false` if it was already a member.
    pub fn insert<H: Into<String>>(&mut self, host: H) -> bool {
        self.0.insert(host.into())
    }

    /// Returns `true` if `host` is a member (exact, case-sensitive match).
    pub fn contains(&self, host: &str) -> bool {
        self.0.contains(host)
    }

    /// Iterate through hosts in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|h| h.as_str())
    }
}

impl<H: Into<String>> FromIterator<H> for HostSet {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
