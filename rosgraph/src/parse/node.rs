use crate::entity::NodeInfo;

/// Bucket of `ros2 node info` output currently being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Publishers,
    Subscribers,
    Services,
}

fn section_for(header: &str) -> Option<Section> {
    match header {
        "Publishers" => Some(Section::Publishers),
        "Subscribers" => Some(Section::Subscribers),
        "Service Servers" | "Service Clients" => Some(Section::Services),
        _ => None,
    }
}

/// Parses the section-headered listing printed by `ros2 node info <name>`.
///
/// A trimmed line ending in `:` switches the current section regardless of
/// indentation; unknown headers (`Action Servers:` in stock output) park the
/// parser so their entries are dropped. An indented line containing `:`
/// contributes the part before the first `:` to the current section. Lines
/// outside any section, lines without `:`, and blank lines are ignored.
pub fn parse_node_info(output: &str) -> NodeInfo {
    let mut info = NodeInfo::default();
    let mut current = None;

    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(header) = trimmed.strip_suffix(':') {
            current = section_for(header);
        } else if line.starts_with(|c: char| c.is_whitespace()) {
            let Some(section) = current else { continue };
            let Some((entry, _)) = trimmed.split_once(':') else {
                continue;
            };
            let entry = entry.trim().to_string();
            match section {
                Section::Publishers => info.publishers.push(entry),
                Section::Subscribers => info.subscribers.push(entry),
                Section::Services => info.services.push(entry),
            }
        }
    }
    info
}
