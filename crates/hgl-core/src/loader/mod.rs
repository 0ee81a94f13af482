//! Resource lookup for host group labels documents.
//!
//! The registry only knows a location string; a [`ResourceLoader`] turns it into bytes.
use crate::error::HostGroupResult;

mod memory;
pub use memory::MemoryLoader;

mod search_path;
pub use search_path::SearchPathLoader;

/// Locates a resource by name and yields its content.
///
/// Implementations must return [`HostGroupError::NotFound`](crate::error::HostGroupError::NotFound)
/// when the name does not resolve to anything.
pub trait ResourceLoader: Send + Sync {
    /// Human-readable loader name used in logs.
    fn name(&self) -> &'static str;

    /// Load the full content of `location`.
    fn load(&self, location: &str) -> HostGroupResult<Vec<u8>>;
}
