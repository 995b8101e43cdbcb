use std::time::Duration;

mod export;
mod interactive;
mod logger;
mod render;

use clap::{Parser, Subcommand};
use rosgraph::{Explorer, Graph, NodeDetail, Ros2Cli, TopicDetail};

#[derive(Parser)]
#[command(name = "rosgraph-console")]
#[command(about = "ROS2 Graph Inspector")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Executable to query (useful with a recorded stub)
    #[arg(long, default_value = "ros2", global = true)]
    ros2_bin: String,

    /// Per-invocation timeout in seconds, 0 disables
    #[arg(long, default_value = "10", global = true)]
    timeout_secs: u64,

    /// Print structured JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List discovered nodes
    Nodes,
    /// List discovered topics
    Topics,
    /// Show one node's endpoint listing
    Node { name: String },
    /// Show one topic's verbose description
    Topic { name: String },
    /// Capture the whole graph to a .json or .dot file and exit
    Export { path: String },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    logger::init_logger(cli.debug);

    let mut runner = Ros2Cli::new().with_program(&cli.ros2_bin);
    if cli.timeout_secs > 0 {
        runner = runner.with_timeout(Duration::from_secs(cli.timeout_secs));
    }
    let graph = Graph::with_runner(runner);

    if !graph.available() {
        tracing::warn!("Cannot invoke {}", cli.ros2_bin);
        eprintln!(
            "Warning: cannot invoke '{}'; listings will be empty",
            cli.ros2_bin
        );
    }

    match cli.command {
        Some(Command::Nodes) => {
            let nodes = graph.list_nodes();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&nodes)?);
            } else {
                render::print_listing("Nodes", &nodes);
            }
        }
        Some(Command::Topics) => {
            let topics = graph.list_topics();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&topics)?);
            } else {
                render::print_listing("Topics", &topics);
            }
        }
        Some(Command::Node { name }) => {
            let topics = graph.list_topics();
            let detail = NodeDetail::annotate(name.as_str(), &graph.get_node_info(&name), &topics);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                print!("{}", render::node_detail(&detail));
            }
        }
        Some(Command::Topic { name }) => {
            let nodes = graph.list_nodes();
            let detail = TopicDetail::annotate(name.as_str(), &graph.get_topic_info(&name), &nodes);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                print!("{}", render::topic_detail(&detail));
            }
        }
        Some(Command::Export { path }) => return export::export_and_exit(&graph, &path),
        None => interactive::run(Explorer::new(graph))?,
    }

    Ok(())
}
