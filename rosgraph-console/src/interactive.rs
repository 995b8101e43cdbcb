use std::io::{self, BufRead, Write};

use rosgraph::{CommandRunner, Detail, Explorer};

use crate::render;

const PROMPT: &str = "rosgraph> ";
const HELP: &str = "\
Commands:
  nodes            list discovered nodes
  topics           list discovered topics
  refresh          re-run both listings and clear the selection
  <name>           open the node or topic with that exact name
  help             show this message
  quit             exit
Entries marked with * can be opened by name.";

pub fn run<R: CommandRunner>(
    mut explorer: Explorer<R>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    render::print_listing("Nodes", explorer.nodes());
    render::print_listing("Topics", explorer.topics());
    println!("Select a node or topic to see details. Type `help` for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(()),
            "help" => println!("{}", HELP),
            "nodes" => render::print_listing("Nodes", explorer.nodes()),
            "topics" => render::print_listing("Topics", explorer.topics()),
            "refresh" => {
                explorer.refresh();
                render::print_listing("Nodes", explorer.nodes());
                render::print_listing("Topics", explorer.topics());
                println!("Select a node or topic to see details.");
            }
            name => {
                if explorer.follow(name).is_none() {
                    println!("Cannot find: {}", name);
                    continue;
                }
                match explorer.detail() {
                    Some(Detail::Node(detail)) => print!("{}", render::node_detail(&detail)),
                    Some(Detail::Topic(detail)) => print!("{}", render::topic_detail(&detail)),
                    None => {}
                }
            }
        }
    }
}
