use serde::Serialize;

use crate::entity::{EntityKind, EntityName, NodeInfo, TopicInfo};

/// A rendered name plus whether it can be followed to a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Linked {
    pub name: EntityName,
    pub navigable: bool,
}

/// Marks each name navigable when it appears verbatim in `listing`.
///
/// Membership is the only criterion: exact, case-sensitive, full-string.
/// No prefix or fuzzy matching.
pub fn mark_navigable(names: &[EntityName], listing: &[EntityName]) -> Vec<Linked> {
    names
        .iter()
        .map(|name| Linked {
            name: name.clone(),
            navigable: listing.contains(name),
        })
        .collect()
}

/// Finds which listing a name belongs to, nodes taking precedence over
/// topics. `None` means the name is unknown to both.
pub fn resolve(name: &str, nodes: &[EntityName], topics: &[EntityName]) -> Option<EntityKind> {
    if nodes.iter().any(|n| n == name) {
        Some(EntityKind::Node)
    } else if topics.iter().any(|t| t == name) {
        Some(EntityKind::Topic)
    } else {
        None
    }
}

/// Node detail annotated against the current topic listing.
///
/// Publisher and subscriber entries are topic names, so they cross-check
/// against the topic listing; service names are not topics and stay plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetail {
    pub name: EntityName,
    pub publishers: Vec<Linked>,
    pub subscribers: Vec<Linked>,
    pub services: Vec<EntityName>,
}

impl NodeDetail {
    pub fn annotate(name: impl Into<EntityName>, info: &NodeInfo, topics: &[EntityName]) -> Self {
        Self {
            name: name.into(),
            publishers: mark_navigable(&info.publishers, topics),
            subscribers: mark_navigable(&info.subscribers, topics),
            services: info.services.clone(),
        }
    }
}

/// Topic detail annotated against the current node listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDetail {
    pub name: EntityName,
    #[serde(rename = "type")]
    pub type_name: String,
    pub publisher_count: String,
    pub subscriber_count: String,
    pub publishers: Vec<Linked>,
    pub subscribers: Vec<Linked>,
}

impl TopicDetail {
    pub fn annotate(name: impl Into<EntityName>, info: &TopicInfo, nodes: &[EntityName]) -> Self {
        Self {
            name: name.into(),
            type_name: info.type_name.clone(),
            publisher_count: info.publisher_count.clone(),
            subscriber_count: info.subscriber_count.clone(),
            publishers: mark_navigable(&info.publishers, nodes),
            subscribers: mark_navigable(&info.subscribers, nodes),
        }
    }
}

/// Annotated view of either kind of selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Node(NodeDetail),
    Topic(TopicDetail),
}
