pub mod node;
pub mod topic;

pub use node::parse_node_info;
pub use topic::parse_topic_info;

/// Returns the value following `label` when the line starts with it,
/// trimmed. Matching is exact and case sensitive.
pub fn labeled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}
