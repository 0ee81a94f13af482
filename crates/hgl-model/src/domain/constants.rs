//! Element and attribute names of the node-groups document.
//!
//! Tag names are matched case-insensitively; the attribute name is matched exactly.

/// Root element of a host group labels document.
pub const ROOT_TAG: &str = "CBD-NodeGroups";

/// Direct child of the root; one per group label.
pub const GROUP_TAG: &str = "NodeGroupLabel";

/// Attribute of [`GROUP_TAG`] holding the label text.
pub const GROUP_LABEL_ATTR: &str = "label";

/// Child of [`GROUP_TAG`]; its trimmed text is one host identifier.
pub const NODE_TAG: &str = "Node";
