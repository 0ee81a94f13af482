use std::sync::Arc;

use crate::HostSet;

/// Placement restriction for one task role.
///
/// The scheduler applies [`HostRestriction::allows`] as a filter over candidate machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRestriction {
    /// Every host is eligible.
    Unrestricted,
    /// Only members of the set are eligible.
    Only(Arc<HostSet>),
}

impl HostRestriction {
    /// Returns `true` if `host` may run tasks under this restriction.
    pub fn allows(&self, host: &str) -> bool {
        match self {
            HostRestriction::Unrestricted => true,
            HostRestriction::Only(hosts) => hosts.contains(host),
        }
    }

    /// Returns `true` if no restriction applies.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, HostRestriction::Unrestricted)
    }

    /// The restricting set, if any.
    pub fn hosts(&self) -> Option<&Arc<HostSet>> {
        match self {
            HostRestriction::Unrestricted => None,
            HostRestriction::Only(hosts) => Some(hosts),
        }
    }
}

impl From<Option<Arc<HostSet>>> for HostRestriction {
    fn from(hosts: Option<Arc<HostSet>>) -> Self {
        match hosts {
            Some(hosts) => HostRestriction::Only(hosts),
            None => HostRestriction::Unrestricted,
        }
    }
}
