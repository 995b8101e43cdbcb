use std::time::SystemTime;

use serde::Serialize;

use crate::entity::{EntityName, NodeInfo, TopicInfo};
use crate::parse::{parse_node_info, parse_topic_info};
use crate::runner::{CommandRunner, Ros2Cli};

/// Queryable view of the live ROS graph, backed by a command runner.
///
/// Every query is one fresh external invocation; nothing is cached between
/// calls, so two identical queries can disagree when the graph changes
/// underneath them.
pub struct Graph<R = Ros2Cli> {
    runner: R,
}

impl Graph<Ros2Cli> {
    pub fn new() -> Self {
        Self {
            runner: Ros2Cli::new(),
        }
    }

    /// Probes whether the external tool can be invoked at all.
    pub fn available(&self) -> bool {
        self.runner.available()
    }
}

impl Default for Graph<Ros2Cli> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Graph<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Names of all discovered nodes, in the order the tool emitted them.
    pub fn list_nodes(&self) -> Vec<EntityName> {
        list_lines(&self.runner.run(&["node", "list"]))
    }

    /// Names of all discovered topics, in the order the tool emitted them.
    pub fn list_topics(&self) -> Vec<EntityName> {
        list_lines(&self.runner.run(&["topic", "list"]))
    }

    pub fn get_node_info(&self, name: &str) -> NodeInfo {
        parse_node_info(&self.runner.run(&["node", "info", name]))
    }

    pub fn get_topic_info(&self, name: &str) -> TopicInfo {
        parse_topic_info(&self.runner.run(&["topic", "info", name, "--verbose"]))
    }

    /// Captures the whole graph in one pass, one verbose query per topic.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self.list_nodes();
        let topics = self
            .list_topics()
            .into_iter()
            .map(|name| {
                let info = self.get_topic_info(&name);
                TopicRecord { name, info }
            })
            .collect();
        GraphSnapshot {
            timestamp: SystemTime::now(),
            nodes,
            topics,
        }
    }
}

fn list_lines(output: &str) -> Vec<EntityName> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A serializable capture of the graph at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub timestamp: SystemTime,
    pub nodes: Vec<EntityName>,
    pub topics: Vec<TopicRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicRecord {
    pub name: EntityName,
    pub info: TopicInfo,
}
