//! End-to-end pipeline tests over a scripted runner
//!
//! These tests verify the full inspection flow without the external tool:
//! - Listing nodes and topics
//! - Info queries through the parsers
//! - Cross-reference annotation and navigation
//! - Whole-graph snapshots

use rosgraph::{Detail, EntityKind, Explorer, Graph, MockCli, Selection};

const NODE_LIST: &str = "/talker\n/listener\n";
const TOPIC_LIST: &str = "/chatter\n/rosout\n/parameter_events\n";

const TALKER_INFO: &str = "\
/talker
  Subscribers:
    /parameter_events: rcl_interfaces/msg/ParameterEvent
  Publishers:
    /chatter: std_msgs/msg/String
    /rosout: rcl_interfaces/msg/Log
  Service Servers:
    /talker/describe_parameters: rcl_interfaces/srv/DescribeParameters
  Service Clients:

  Action Servers:

  Action Clients:
";

const CHATTER_INFO: &str = "\
Type: std_msgs/msg/String

Publisher count: 1

Node name: talker
Node namespace: /
Endpoint type: PUBLISHER
GID: 01.10.bc.b8.7d.9c.a5.7b.2c.99.94.9f.00.00.15.03
QoS profile:
  Reliability: RELIABLE
  Durability: VOLATILE

Subscription count: 2

Node name: listener
Node namespace: /
Endpoint type: SUBSCRIPTION

Node name: recorder
Node namespace: /logging
Endpoint type: SUBSCRIPTION
";

/// Helper to build a graph whose runner replays the given outputs in order
fn scripted(outputs: Vec<&str>) -> Graph<MockCli> {
    Graph::with_runner(MockCli::with_outputs(outputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a silent external tool still yields valid, empty results
    #[test]
    fn test_silent_tool_yields_an_empty_graph() {
        let graph = scripted(vec![]);
        assert!(graph.list_nodes().is_empty(), "Expected no nodes");
        assert!(graph.list_topics().is_empty(), "Expected no topics");
        assert!(
            graph.get_node_info("/talker").is_empty(),
            "Expected an empty info record, not a failure"
        );
        assert!(graph.get_topic_info("/chatter").is_empty());
    }

    /// Tests node info parsing and annotation end to end
    #[test]
    fn test_node_detail_end_to_end() {
        let graph = scripted(vec![NODE_LIST, TOPIC_LIST, TALKER_INFO]);
        let mut explorer = Explorer::new(graph);

        assert_eq!(explorer.follow("/talker"), Some(EntityKind::Node));
        let Some(Detail::Node(detail)) = explorer.detail() else {
            panic!("Expected a node detail after following a node name");
        };

        assert_eq!(detail.name, "/talker");
        let published: Vec<_> = detail.publishers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(published, ["/chatter", "/rosout"]);
        assert!(
            detail.publishers.iter().all(|l| l.navigable),
            "Both published topics are listed, so both are navigable"
        );
        assert_eq!(detail.subscribers[0].name, "/parameter_events");
        assert_eq!(detail.services, vec!["/talker/describe_parameters"]);
    }

    /// Tests verbose topic info parsing and annotation end to end
    #[test]
    fn test_topic_detail_end_to_end() {
        let graph = scripted(vec![NODE_LIST, TOPIC_LIST, CHATTER_INFO]);
        let mut explorer = Explorer::new(graph);

        assert_eq!(explorer.follow("/chatter"), Some(EntityKind::Topic));
        let Some(Detail::Topic(detail)) = explorer.detail() else {
            panic!("Expected a topic detail after following a topic name");
        };

        assert_eq!(detail.type_name, "std_msgs/msg/String");
        assert_eq!(detail.publisher_count, "1");
        assert_eq!(detail.subscriber_count, "2");
        assert_eq!(detail.publishers.len(), 1);
        assert_eq!(detail.subscribers.len(), 2);
        assert!(detail.publishers[0].navigable, "/talker is a listed node");
        assert!(detail.subscribers[0].navigable, "/listener is a listed node");
        assert!(
            !detail.subscribers[1].navigable,
            "/logging/recorder is not in the node listing"
        );
    }

    /// Tests navigating from a topic to one of its publisher nodes
    #[test]
    fn test_chained_navigation_topic_to_node() {
        let graph = scripted(vec![NODE_LIST, TOPIC_LIST, CHATTER_INFO, TALKER_INFO]);
        let mut explorer = Explorer::new(graph);

        explorer.select_topic("/chatter");
        let publisher = match explorer.selection() {
            Selection::Topic { info, .. } => info.publishers[0].clone(),
            other => panic!("Expected a topic selection, got {:?}", other),
        };

        assert_eq!(explorer.follow(&publisher), Some(EntityKind::Node));
        match explorer.selection() {
            Selection::Node { name, info } => {
                assert_eq!(name, "/talker");
                assert_eq!(info.publishers, vec!["/chatter", "/rosout"]);
            }
            other => panic!("Expected a node selection, got {:?}", other),
        }
    }

    /// Tests that an unknown name is a miss and changes nothing
    #[test]
    fn test_navigation_miss_is_non_fatal() {
        let graph = scripted(vec![NODE_LIST, TOPIC_LIST, TALKER_INFO]);
        let mut explorer = Explorer::new(graph);
        explorer.select_node("/talker");

        assert_eq!(explorer.follow("/does_not_exist"), None);
        match explorer.selection() {
            Selection::Node { name, .. } => assert_eq!(name, "/talker"),
            other => panic!("Expected the selection to survive a miss, got {:?}", other),
        }
    }

    /// Tests that refresh re-runs both listings and clears the selection
    #[test]
    fn test_refresh_relists_and_clears() {
        let graph = scripted(vec![
            NODE_LIST,
            TOPIC_LIST,
            TALKER_INFO,
            "/survivor\n",
            "/leftover\n",
        ]);
        let mut explorer = Explorer::new(graph);
        explorer.select_node("/talker");

        explorer.refresh();
        assert_eq!(*explorer.selection(), Selection::Idle);
        assert_eq!(explorer.nodes(), ["/survivor"]);
        assert_eq!(explorer.topics(), ["/leftover"]);
    }

    /// Tests the exact argument vectors sent to the external tool
    #[test]
    fn test_invocations_match_the_tool_contract() {
        let cli = MockCli::with_outputs(vec![NODE_LIST, TOPIC_LIST, TALKER_INFO, CHATTER_INFO]);
        let graph = Graph::with_runner(cli);
        graph.list_nodes();
        graph.list_topics();
        graph.get_node_info("/talker");
        graph.get_topic_info("/chatter");

        assert_eq!(
            graph.runner().calls(),
            vec![
                "node list",
                "topic list",
                "node info /talker",
                "topic info /chatter --verbose",
            ]
        );
    }

    /// Tests that a navigation miss issues no info query at all
    #[test]
    fn test_follow_miss_issues_no_invocation() {
        let mut explorer = Explorer::new(scripted(vec![NODE_LIST, TOPIC_LIST]));
        assert_eq!(explorer.follow("/ghost"), None);
        assert_eq!(
            explorer.graph().runner().calls().len(),
            2,
            "Only the two listing calls should have run"
        );
    }

    /// Tests snapshot construction and its JSON shape
    #[test]
    fn test_snapshot_serializes_to_json() {
        let graph = scripted(vec![NODE_LIST, "/chatter\n", CHATTER_INFO]);
        let snapshot = graph.snapshot();

        assert_eq!(snapshot.nodes, vec!["/talker", "/listener"]);
        assert_eq!(snapshot.topics.len(), 1);
        assert_eq!(snapshot.topics[0].name, "/chatter");
        assert_eq!(snapshot.topics[0].info.subscriber_count, "2");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["nodes"][0], "/talker");
        assert_eq!(json["topics"][0]["name"], "/chatter");
        assert_eq!(json["topics"][0]["info"]["type"], "std_msgs/msg/String");
        assert_eq!(json["topics"][0]["info"]["publisher_count"], "1");
    }
}
