//! CLI help: usage text for a command node and the full command tree listing.

use crate::tree::{CommandNode, CommandRegistry};
use comfy_table::presets::NOTHING;
use comfy_table::Table;

/// Help text for `node`: usage line, description, and child listing in
/// insertion order.
pub fn render_help(registry: &CommandRegistry, node: &CommandNode) -> String {
    let mut usage = registry.program().to_string();
    if !node.path().is_root() {
        usage.push(' ');
        usage.push_str(&node.path().to_string());
    }
    let mut out = String::new();

    match (node.is_runnable(), node.children().is_empty()) {
        (true, true) => out.push_str(&format!("Usage: {} [ARGS]...\n", usage)),
        (true, false) => out.push_str(&format!("Usage: {} [COMMAND | ARGS...]\n", usage)),
        (false, _) => out.push_str(&format!("Usage: {} <COMMAND>\n", usage)),
    }

    if !node.summary().is_empty() {
        out.push('\n');
        out.push_str(node.summary());
        out.push('\n');
    }
    if let Some(detail) = node.detail_text() {
        out.push('\n');
        out.push_str(detail);
        out.push('\n');
    }
    if !node.aliases().is_empty() {
        out.push_str(&format!("\nAliases: {}\n", node.aliases().join(", ")));
    }

    if !node.children().is_empty() {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        for child in node.children() {
            let aliases = if child.aliases().is_empty() {
                String::new()
            } else {
                format!("({})", child.aliases().join(", "))
            };
            table.add_row(vec![child.name().to_string(), aliases, child.summary().to_string()]);
        }
        out.push_str("\nCommands:\n");
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out
}

/// Indented listing of every command in the tree.
pub fn render_tree(registry: &CommandRegistry) -> String {
    let mut out = registry.program().to_string();
    registry.root().walk(&mut |node| {
        let depth = node.path().len();
        out.push('\n');
        out.push_str(&"  ".repeat(depth));
        out.push_str(node.name());
        if !node.aliases().is_empty() {
            out.push_str(&format!(" ({})", node.aliases().join(", ")));
        }
        if !node.summary().is_empty() {
            out.push_str(" - ");
            out.push_str(node.summary());
        }
    });
    out
}
