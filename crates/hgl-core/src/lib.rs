pub mod error;
pub mod loader;
pub mod parser;
pub mod registry;

pub mod prelude {
    pub use crate::error::{HostGroupError, HostGroupResult};
    pub use crate::loader::{MemoryLoader, ResourceLoader, SearchPathLoader};
    pub use crate::parser::{parse, parse_bytes, parse_str};
    pub use crate::registry::{HostGroupRegistry, RegistryConfig};
    pub use hgl_model::{HostRestriction, HostSet, LabelMapping, TaskRole};
}
