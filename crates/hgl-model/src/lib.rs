mod domain;
pub use domain::{HostRestriction, HostSet, LabelMapping};
pub use domain::{GROUP_LABEL_ATTR, GROUP_TAG, NODE_TAG, ROOT_TAG};

mod error;
pub use error::ModelError;

mod kind;
pub use kind::TaskRole;
