mod host_set;
pub use host_set::HostSet;

mod mapping;
pub use mapping::LabelMapping;

mod restriction;
pub use restriction::HostRestriction;

mod constants;
pub use constants::{GROUP_LABEL_ATTR, GROUP_TAG, NODE_TAG, ROOT_TAG};
