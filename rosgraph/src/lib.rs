pub mod entity;
pub mod explorer;
pub mod graph;
pub mod parse;
pub mod resolve;
pub mod runner;

pub use entity::{EndpointKind, EntityKind, EntityName, NodeInfo, TopicInfo, node_identity};
pub use explorer::{Explorer, Selection};
pub use graph::{Graph, GraphSnapshot, TopicRecord};
pub use parse::{parse_node_info, parse_topic_info};
pub use resolve::{Detail, Linked, NodeDetail, TopicDetail, mark_navigable, resolve};
pub use runner::{CommandRunner, MockCli, Ros2Cli};
