use std::path::Path;

use rosgraph::{CommandRunner, Graph, GraphSnapshot};

pub fn export_and_exit<R: CommandRunner>(
    graph: &Graph<R>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let extension = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match extension {
        "json" => export_json(graph, path)?,
        "dot" => export_dot(graph, path)?,
        _ => {
            eprintln!("Unsupported export format: {}", extension);
            eprintln!("Supported formats: .json, .dot");
            std::process::exit(1);
        }
    }

    tracing::info!("Exported to: {}", path);
    Ok(())
}

fn export_json<R: CommandRunner>(
    graph: &Graph<R>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let snapshot = graph.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn export_dot<R: CommandRunner>(
    graph: &Graph<R>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let snapshot = graph.snapshot();
    std::fs::write(path, generate_dot(&snapshot))?;
    Ok(())
}

fn generate_dot(snapshot: &GraphSnapshot) -> String {
    let mut dot = String::from("digraph ROS_Graph {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box];\n\n");

    for name in &snapshot.nodes {
        dot.push_str(&format!(
            "  \"{}\" [fillcolor=lightblue, style=filled];\n",
            name
        ));
    }

    for topic in &snapshot.topics {
        dot.push_str(&format!(
            "  \"topic:{}\" [label=\"{}\\n{}\", shape=ellipse, fillcolor=lightgreen, style=filled];\n",
            topic.name, topic.name, topic.info.type_name
        ));

        // Publishers -> Topic
        for publisher in &topic.info.publishers {
            dot.push_str(&format!(
                "  \"{}\" -> \"topic:{}\" [color=blue];\n",
                publisher, topic.name
            ));
        }

        // Topic -> Subscribers
        for subscriber in &topic.info.subscribers {
            dot.push_str(&format!(
                "  \"topic:{}\" -> \"{}\" [color=green];\n",
                topic.name, subscriber
            ));
        }
    }

    dot.push_str("}\n");
    dot
}
