use std::str::FromStr;

use super::labeled_value;
use crate::entity::{EndpointKind, TopicInfo, node_identity};

/// Parses the verbose endpoint stanzas printed by
/// `ros2 topic info <name> --verbose`.
///
/// `Node name:` and `Node namespace:` accumulate (later values overwrite
/// earlier unflushed ones) until an `Endpoint type:` line closes the stanza
/// and files the joined identity under the matching endpoint bucket. A
/// stanza missing either field falls back to the empty string. Tokens other
/// than `PUBLISHER` and `SUBSCRIPTION` drop the identity but still reset
/// the accumulator. Counts and the type are relayed verbatim; every other
/// line (QoS rows, GID, type hash) is ignored.
pub fn parse_topic_info(output: &str) -> TopicInfo {
    let mut info = TopicInfo::default();
    let mut node_name: Option<String> = None;
    let mut node_namespace: Option<String> = None;

    for line in output.lines() {
        let trimmed = line.trim();
        if let Some(v) = labeled_value(trimmed, "Type:") {
            info.type_name = v.to_string();
        } else if let Some(v) = labeled_value(trimmed, "Publisher count:") {
            info.publisher_count = v.to_string();
        } else if let Some(v) = labeled_value(trimmed, "Subscription count:") {
            info.subscriber_count = v.to_string();
        } else if let Some(v) = labeled_value(trimmed, "Node name:") {
            node_name = Some(v.to_string());
        } else if let Some(v) = labeled_value(trimmed, "Node namespace:") {
            node_namespace = Some(v.to_string());
        } else if let Some(v) = labeled_value(trimmed, "Endpoint type:") {
            let identity = node_identity(
                node_namespace.as_deref().unwrap_or(""),
                node_name.as_deref().unwrap_or(""),
            );
            match EndpointKind::from_str(v) {
                Ok(EndpointKind::Publisher) => info.publishers.push(identity),
                Ok(EndpointKind::Subscription) => info.subscribers.push(identity),
                Err(_) => tracing::debug!("Ignoring endpoint type: {}", v),
            }
            node_name = None;
            node_namespace = None;
        }
    }
    info
}
