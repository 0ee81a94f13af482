//! Thread-safe registry of host group labels.
//!
//! The registry keeps the configured resource location, the selectors for map and reduce
//! placement, the last successfully parsed [`LabelMapping`] and the two resolved host sets.
//! Every operation holds the same mutex for its whole duration, `reload` included, so callers
//! observe a single linear history of changes.
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use hgl_model::{HostRestriction, HostSet, LabelMapping, TaskRole};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::HostGroupResult,
    loader::{ResourceLoader, SearchPathLoader},
    parser,
};

mod config;
pub use config::RegistryConfig;

#[derive(Debug, Default)]
struct State {
    location: String,
    map_label: String,
    reduce_label: String,
    mapping: LabelMapping,
    map_hosts: Option<Arc<HostSet>>,
    reduce_hosts: Option<Arc<HostSet>>,
}

impl State {
    fn selector(&self, role: TaskRole) -> &str {
        match role {
            TaskRole::Map => &self.map_label,
            TaskRole::Reduce => &self.reduce_label,
        }
    }

    fn resolved(&self, role: TaskRole) -> Option<Arc<HostSet>> {
        match role {
            TaskRole::Map => self.map_hosts.clone(),
            TaskRole::Reduce => self.reduce_hosts.clone(),
        }
    }

    /// Swap in a freshly parsed mapping and re-resolve every non-empty selector.
    fn apply(&mut self, mapping: LabelMapping) {
        self.mapping = mapping;

        for role in [TaskRole::Map, TaskRole::Reduce] {
            let selector = self.selector(role);
            if selector.is_empty() {
                continue;
            }
            let resolved = self.mapping.get(selector).cloned();
            match &resolved {
                Some(hosts) => {
                    debug!(%role, label = selector, hosts = hosts.len(), "resolved host group")
                }
                None => warn!(%role, label = selector, "host group label not defined"),
            }
            match role {
                TaskRole::Map => self.map_hosts = resolved,
                TaskRole::Reduce => self.reduce_hosts = resolved,
            }
        }
    }
}

/// Holds the current host group labels and the host sets selected for map and reduce tasks.
///
/// Share it behind an [`Arc`]; all methods take `&self`.
pub struct HostGroupRegistry {
    loader: Arc<dyn ResourceLoader>,
    state: Mutex<State>,
}

impl HostGroupRegistry {
    /// Registry resolving locations against the working directory.
    pub fn new() -> Self {
        Self::with_loader(Arc::new(SearchPathLoader::current_dir()))
    }

    /// Registry using a custom resource loader.
    pub fn with_loader(loader: Arc<dyn ResourceLoader>) -> Self {
        Self {
            loader,
            state: Mutex::new(State::default()),
        }
    }

    /// Registry configured from `cfg`, with a search-path loader built from it.
    ///
    /// No I/O happens here; call [`reload`](Self::reload) to read the resource.
    pub fn from_config(cfg: &RegistryConfig) -> Self {
        let registry = Self::with_loader(Arc::new(cfg.loader()));
        registry.apply_config(cfg);
        registry
    }

    /// Apply location and both selectors from `cfg` in one step.
    pub fn apply_config(&self, cfg: &RegistryConfig) {
        let mut state = self.lock();
        info!(location = %cfg.resource, "setting the host group labels file");
        info!(map = %cfg.map_label, reduce = %cfg.reduce_label, "using host group labels");
        state.location = cfg.resource.clone();
        state.map_label = cfg.map_label.clone();
        state.reduce_label = cfg.reduce_label.clone();
    }

    /// Store the resource location used by future reloads. Empty means unconfigured.
    pub fn set_resource_location(&self, location: impl Into<String>) {
        let location = location.into();
        info!(location = %location, "setting the host group labels file");
        self.lock().location = location;
    }

    pub fn resource_location(&self) -> String {
        self.lock().location.clone()
    }

    /// Select the label restricting map tasks. Stored verbatim; empty means no restriction.
    pub fn set_map_label(&self, label: impl Into<String>) {
        let label = label.into();
        info!(label = %label, "using the map host group label");
        self.lock().map_label = label;
    }

    /// Select the label restricting reduce tasks. Stored verbatim; empty means no restriction.
    pub fn set_reduce_label(&self, label: impl Into<String>) {
        let label = label.into();
        info!(label = %label, "using the reduce host group label");
        self.lock().reduce_label = label;
    }

    /// Set both selectors under a single lock acquisition.
    pub fn set_map_and_reduce_labels(
        &self,
        map_label: impl Into<String>,
        reduce_label: impl Into<String>,
    ) {
        let (map_label, reduce_label) = (map_label.into(), reduce_label.into());
        info!(map = %map_label, reduce = %reduce_label, "using host group labels");

        let mut state = self.lock();
        state.map_label = map_label;
        state.reduce_label = reduce_label;
    }

    /// Selector currently configured for `role`, exactly as it was set.
    pub fn label(&self, role: TaskRole) -> String {
        self.lock().selector(role).to_string()
    }

    /// Re-read the labels file and re-resolve both selectors.
    ///
    /// - An empty resource location makes this a no-op.
    /// - An empty selector leaves its resolved set untouched.
    /// - A selector naming an unknown label resolves to `None`.
    ///
    /// On error nothing changes: the previous mapping and resolved sets stay in place.
    #[instrument(level = "debug", skip(self))]
    pub fn reload(&self) -> HostGroupResult<()> {
        let mut state = self.lock();
        if state.location.is_empty() {
            debug!("no host group labels file configured, reload skipped");
            return Ok(());
        }

        info!(
            location = %state.location,
            loader = self.loader.name(),
            "refreshing host group labels for map/reduce tasks"
        );
        let mapping = parser::parse(self.loader.as_ref(), &state.location)?;
        state.apply(mapping);
        Ok(())
    }

    /// Same as [`reload`](Self::reload).
    pub fn refresh(&self) -> HostGroupResult<()> {
        self.reload()
    }

    /// Hosts eligible for map tasks, or `None` when unrestricted or unresolved.
    pub fn resolved_map_hosts(&self) -> Option<Arc<HostSet>> {
        self.resolved_hosts(TaskRole::Map)
    }

    /// Hosts eligible for reduce tasks, or `None` when unrestricted or unresolved.
    pub fn resolved_reduce_hosts(&self) -> Option<Arc<HostSet>> {
        self.resolved_hosts(TaskRole::Reduce)
    }

    pub fn resolved_hosts(&self, role: TaskRole) -> Option<Arc<HostSet>> {
        self.lock().resolved(role)
    }

    /// Placement restriction currently in effect for `role`.
    pub fn restriction(&self, role: TaskRole) -> HostRestriction {
        HostRestriction::from(self.resolved_hosts(role))
    }

    /// Returns `true` if `host` may run tasks of `role`.
    pub fn is_eligible(&self, role: TaskRole, host: &str) -> bool {
        self.restriction(role).allows(host)
    }

    /// Labels (lowercase) defined by the last successful reload.
    pub fn labels(&self) -> Vec<String> {
        self.lock().mapping.labels().map(str::to_string).collect()
    }

    /// Snapshot of the mapping from the last successful reload.
    pub fn mapping(&self) -> LabelMapping {
        self.lock().mapping.clone()
    }

    // State is only replaced after a successful parse, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HostGroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostGroupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("HostGroupRegistry")
            .field("loader", &self.loader.name())
            .field("location", &state.location)
            .field("map_label", &state.map_label)
            .field("reduce_label", &state.reduce_label)
            .field("labels", &state.mapping.len())
            .finish()
    }
}
