use rosgraph::{EntityName, Linked, NodeDetail, TopicDetail};

/// Trailing marker for entries that can be opened by name.
const LINK_MARK: &str = " *";

pub fn print_listing(label: &str, names: &[EntityName]) {
    println!("{}:", label);
    for name in names {
        println!("  {}", name);
    }
    if names.is_empty() {
        println!("  (none)");
    }
}

fn push_linked_section(out: &mut String, label: &str, entries: &[Linked]) {
    out.push_str(&format!("\n{} ({}):\n", label, entries.len()));
    for entry in entries {
        if entry.navigable {
            out.push_str(&format!("  +-- {}{}\n", entry.name, LINK_MARK));
        } else {
            out.push_str(&format!("  +-- {}\n", entry.name));
        }
    }
    if entries.is_empty() {
        out.push_str("  (none)\n");
    }
}

pub fn node_detail(detail: &NodeDetail) -> String {
    let mut out = format!("Node: {}\n", detail.name);
    push_linked_section(&mut out, "Publishers", &detail.publishers);
    push_linked_section(&mut out, "Subscribers", &detail.subscribers);
    out.push_str(&format!("\nServices ({}):\n", detail.services.len()));
    for service in &detail.services {
        out.push_str(&format!("  +-- {}\n", service));
    }
    if detail.services.is_empty() {
        out.push_str("  (none)\n");
    }
    out
}

pub fn topic_detail(detail: &TopicDetail) -> String {
    let mut out = format!("Topic: {}\n", detail.name);
    out.push_str(&format!("Type: {}\n", detail.type_name));
    out.push_str(&format!("Publisher count: {}\n", detail.publisher_count));
    out.push_str(&format!("Subscriber count: {}\n", detail.subscriber_count));
    push_linked_section(&mut out, "Publishers", &detail.publishers);
    push_linked_section(&mut out, "Subscribers", &detail.subscribers);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosgraph::{NodeInfo, TopicInfo};

    #[test]
    fn test_node_detail_marks_navigable_entries() {
        let info = NodeInfo {
            publishers: vec!["/chatter".into(), "/hidden".into()],
            subscribers: vec![],
            services: vec!["/talker/describe_parameters".into()],
        };
        let detail = NodeDetail::annotate("/talker", &info, &["/chatter".to_string()]);
        let text = node_detail(&detail);
        assert!(text.contains("Node: /talker"));
        assert!(text.contains("  +-- /chatter *"));
        assert!(text.contains("  +-- /hidden\n"));
        assert!(
            text.contains("  +-- /talker/describe_parameters\n"),
            "services are never marked"
        );
    }

    #[test]
    fn test_empty_sections_render_a_placeholder() {
        let detail = TopicDetail::annotate("/chatter", &TopicInfo::default(), &[]);
        let text = topic_detail(&detail);
        assert!(text.contains("Publishers (0):\n  (none)"));
        assert!(text.contains("Subscribers (0):\n  (none)"));
    }

    #[test]
    fn test_topic_detail_relays_counts_verbatim() {
        let info = TopicInfo {
            type_name: "std_msgs/msg/String".into(),
            publisher_count: "1".into(),
            subscriber_count: "2".into(),
            publishers: vec!["/talker".into()],
            subscribers: vec![],
        };
        let detail = TopicDetail::annotate("/chatter", &info, &["/talker".to_string()]);
        let text = topic_detail(&detail);
        assert!(text.contains("Type: std_msgs/msg/String"));
        assert!(text.contains("Publisher count: 1"));
        assert!(text.contains("Subscriber count: 2"));
    }
}
