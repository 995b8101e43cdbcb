use serde::Serialize;

/// Fully qualified graph entity name, `/`-separated.
pub type EntityName = String;
pub type NodeName = EntityName;
pub type TopicName = EntityName;

/// Which listing a resolved name belongs to.
#[derive(Debug, Hash, strum::Display, Eq, PartialEq, Clone, Copy)]
pub enum EntityKind {
    #[strum(serialize = "node")]
    Node,
    #[strum(serialize = "topic")]
    Topic,
}

/// Endpoint role token as printed by `ros2 topic info --verbose`.
#[derive(Debug, Hash, strum::EnumString, strum::Display, Eq, PartialEq, Clone, Copy)]
pub enum EndpointKind {
    #[strum(serialize = "PUBLISHER")]
    Publisher,
    #[strum(serialize = "SUBSCRIPTION")]
    Subscription,
}

/// Joins a node namespace and name into one fully qualified identity.
///
/// The two parts are joined with `/`, a doubled separator is collapsed in a
/// single left-to-right pass, and trailing separators are stripped. Both
/// parts empty therefore collapse to the empty string.
pub fn node_identity(namespace: &str, name: &str) -> EntityName {
    format!("{namespace}/{name}")
        .replace("//", "/")
        .trim_end_matches('/')
        .to_string()
}

/// Endpoint listing of a single node, as reported by `ros2 node info`.
///
/// `services` merges service servers and service clients into one bucket.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub publishers: Vec<TopicName>,
    pub subscribers: Vec<TopicName>,
    pub services: Vec<EntityName>,
}

impl NodeInfo {
    pub fn is_empty(&self) -> bool {
        self.publishers.is_empty() && self.subscribers.is_empty() && self.services.is_empty()
    }
}

/// Verbose description of a single topic, as reported by
/// `ros2 topic info --verbose`.
///
/// Counts are relayed exactly as printed, hence strings. The external tool
/// labels the subscriber figure `Subscription count`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicInfo {
    #[serde(rename = "type")]
    pub type_name: String,
    pub publisher_count: String,
    pub subscriber_count: String,
    pub publishers: Vec<NodeName>,
    pub subscribers: Vec<NodeName>,
}

impl TopicInfo {
    pub fn is_empty(&self) -> bool {
        self.type_name.is_empty()
            && self.publisher_count.is_empty()
            && self.subscriber_count.is_empty()
            && self.publishers.is_empty()
            && self.subscribers.is_empty()
    }
}
