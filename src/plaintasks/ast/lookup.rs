//! Position-based node lookup

use super::elements::Document;
use super::error::PositionLookupError;
use super::span::Position;
use super::traits::AstNode;

pub fn find_nodes_at_position(document: &Document, position: Position) -> Vec<&dyn AstNode> {
    document.elements_at(position)
}

/// Describe the nodes at a `line:column` position, one per line of output
pub fn format_at_position(
    document: &Document,
    position: &str,
) -> Result<String, PositionLookupError> {
    let position: Position = position.parse()?;
    let nodes = find_nodes_at_position(document, position);
    if nodes.is_empty() {
        return Err(PositionLookupError::NotFound {
            line: position.line,
            column: position.column,
        });
    }
    Ok(nodes
        .iter()
        .map(|node| format!("- {}: {}", node.node_type(), node.display_label()))
        .collect::<Vec<_>>()
        .join("\n"))
}
