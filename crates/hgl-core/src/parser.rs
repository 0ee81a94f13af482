//! Parser for host group labels documents.
//!
//! Expected shape:
//! ```xml
//! <CBD-NodeGroups>
//!   <NodeGroupLabel label="GPU">
//!     <Node>host1</Node>
//!     <Node>host2</Node>
//!   </NodeGroupLabel>
//! </CBD-NodeGroups>
//! ```
//! Tag names match case-insensitively against the name as written, prefix included, so
//! `<h:Node>` is not a `Node`. Any element other than `NodeGroupLabel` directly under the root
//! is an error; elements other than `Node` inside a group are ignored.
use hgl_model::{GROUP_LABEL_ATTR, GROUP_TAG, HostSet, LabelMapping, NODE_TAG, ROOT_TAG};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, error};

use crate::{
    error::{HostGroupError, HostGroupResult},
    loader::ResourceLoader,
};

/// Location reported for content that did not come from a loader.
const INLINE_LOCATION: &str = "<inline>";

/// Load `location` through `loader` and parse it into a fresh [`LabelMapping`].
pub fn parse(loader: &dyn ResourceLoader, location: &str) -> HostGroupResult<LabelMapping> {
    let content = loader.load(location).inspect_err(|e| {
        error!(location, loader = loader.name(), error = %e, "failed to load host group labels");
    })?;
    parse_at(location, &content)
}

/// Parse raw document bytes.
///
/// The content must be UTF-8. An `encoding` declaration naming another charset is not
/// honoured: such documents fail as [`HostGroupError::Malformed`] unless their bytes also
/// happen to be valid UTF-8.
pub fn parse_bytes(content: &[u8]) -> HostGroupResult<LabelMapping> {
    parse_at(INLINE_LOCATION, content)
}

/// Parse an already loaded document.
pub fn parse_str(content: &str) -> HostGroupResult<LabelMapping> {
    parse_document(INLINE_LOCATION, content)
}

fn parse_at(location: &str, content: &[u8]) -> HostGroupResult<LabelMapping> {
    let text = std::str::from_utf8(content)
        .map_err(|e| malformed(location, format!("content is not valid UTF-8: {e}")))?;
    parse_document(location, text)
}

fn parse_document(location: &str, text: &str) -> HostGroupResult<LabelMapping> {
    let mut opts = ParsingOptions::default();
    opts.allow_dtd = true;

    let doc = Document::parse_with_options(text, opts)
        .map_err(|e| malformed(location, format!("error parsing document: {e}")))?;

    let root = doc.root_element();
    if !tag_is(root, ROOT_TAG) {
        return Err(malformed(
            location,
            format!(
                "root element is <{}>, expected <{ROOT_TAG}>",
                tag_name(root)
            ),
        ));
    }

    let mut mapping = LabelMapping::new();
    for group in root.children().filter(|n| n.is_element()) {
        if !tag_is(group, GROUP_TAG) {
            return Err(malformed(
                location,
                format!(
                    "unexpected <{}> under <{ROOT_TAG}>, expected <{GROUP_TAG}>",
                    tag_name(group)
                ),
            ));
        }

        let label = group.attribute(GROUP_LABEL_ATTR).unwrap_or_default();
        let hosts: HostSet = group
            .children()
            .filter(|n| n.is_element() && tag_is(*n, NODE_TAG))
            .map(|n| trim_control(&text_content(n)).to_string())
            .collect();

        debug!(location, label, hosts = hosts.len(), "parsed node group label");
        if mapping.insert(label, hosts).is_some() {
            debug!(location, label, "node group label redefined, later definition wins");
        }
    }

    Ok(mapping)
}

/// Element name as written in the document, e.g. `h:Node` for a prefixed element.
///
/// Elements in a default namespace have no prefix and keep their bare name.
fn tag_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", tag.name()),
        _ => tag.name().to_string(),
    }
}

fn tag_is(node: Node<'_, '_>, expected: &str) -> bool {
    tag_name(node).eq_ignore_ascii_case(expected)
}

/// Strips characters up to and including U+0020; Unicode spaces such as U+00A0 are kept.
fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Concatenated text of all descendant text nodes (CDATA included, comments excluded).
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn malformed(location: &str, reason: String) -> HostGroupError {
    error!(location, reason = %reason, "bad host group labels file");
    HostGroupError::malformed(location, reason)
}
