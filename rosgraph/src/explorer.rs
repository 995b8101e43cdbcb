use crate::entity::{EntityKind, EntityName, NodeInfo, TopicInfo};
use crate::graph::Graph;
use crate::resolve::{Detail, NodeDetail, TopicDetail, resolve};
use crate::runner::CommandRunner;

/// What the inspector is currently looking at.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Node {
        name: EntityName,
        info: NodeInfo,
    },
    Topic {
        name: EntityName,
        info: TopicInfo,
    },
}

/// Drives selection and navigation over a graph.
///
/// Holds the two listings and the current selection; `follow` re-enters the
/// same query pipeline a direct selection uses, so chained navigation never
/// behaves differently from clicking through the listings.
pub struct Explorer<R> {
    graph: Graph<R>,
    nodes: Vec<EntityName>,
    topics: Vec<EntityName>,
    selection: Selection,
}

impl<R: CommandRunner> Explorer<R> {
    /// Starts idle with freshly fetched listings.
    pub fn new(graph: Graph<R>) -> Self {
        let mut explorer = Self {
            graph,
            nodes: Vec::new(),
            topics: Vec::new(),
            selection: Selection::Idle,
        };
        explorer.refresh();
        explorer
    }

    /// Re-fetches both listings and drops any selection.
    pub fn refresh(&mut self) {
        self.nodes = self.graph.list_nodes();
        self.topics = self.graph.list_topics();
        self.selection = Selection::Idle;
    }

    pub fn graph(&self) -> &Graph<R> {
        &self.graph
    }

    pub fn nodes(&self) -> &[EntityName] {
        &self.nodes
    }

    pub fn topics(&self) -> &[EntityName] {
        &self.topics
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Queries and selects a node. The listings are not consulted, matching
    /// direct selection of a listed entry.
    pub fn select_node(&mut self, name: impl Into<EntityName>) -> &Selection {
        let name = name.into();
        tracing::debug!("Selecting node {}", name);
        let info = self.graph.get_node_info(&name);
        self.selection = Selection::Node { name, info };
        &self.selection
    }

    /// Queries and selects a topic.
    pub fn select_topic(&mut self, name: impl Into<EntityName>) -> &Selection {
        let name = name.into();
        tracing::debug!("Selecting topic {}", name);
        let info = self.graph.get_topic_info(&name);
        self.selection = Selection::Topic { name, info };
        &self.selection
    }

    /// Resolves a name against the listings and selects the match, nodes
    /// taking precedence. `None` means the name is unknown; the current
    /// selection is left untouched.
    pub fn follow(&mut self, name: &str) -> Option<EntityKind> {
        match resolve(name, &self.nodes, &self.topics)? {
            EntityKind::Node => {
                self.select_node(name);
                Some(EntityKind::Node)
            }
            EntityKind::Topic => {
                self.select_topic(name);
                Some(EntityKind::Topic)
            }
        }
    }

    /// Annotated view of the current selection, cross-checked against the
    /// opposite listing.
    pub fn detail(&self) -> Option<Detail> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Node { name, info } => Some(Detail::Node(NodeDetail::annotate(
                name.clone(),
                info,
                &self.topics,
            ))),
            Selection::Topic { name, info } => Some(Detail::Topic(TopicDetail::annotate(
                name.clone(),
                info,
                &self.nodes,
            ))),
        }
    }
}
