//! Name search and neighbour lookup.

use std::collections::HashSet;

use super::types::{Edge, NodeId, SociogramView};

/// Keep nodes whose name contains `term`, ignoring case, and the edges
/// running between them. Whitespace in `term` is matched as typed.
pub fn filter(view: &SociogramView, term: &str) -> SociogramView {
	if term.is_empty() {
		return view.clone();
	}
	let needle = term.to_lowercase();

	let nodes: Vec<_> = view
		.nodes
		.iter()
		.filter(|n| n.node.name.to_lowercase().contains(&needle))
		.cloned()
		.collect();
	let kept: HashSet<&str> = nodes.iter().map(|n| n.id()).collect();
	let edges = view
		.edges
		.iter()
		.filter(|e| kept.contains(&*e.source) && kept.contains(&*e.target))
		.cloned()
		.collect();

	SociogramView {
		nodes,
		edges,
		community_count: view.community_count,
	}
}

/// Ids linked to `id` in either direction, in first-seen order.
pub fn connected_nodes(edges: &[Edge], id: &str) -> Vec<NodeId> {
	let mut seen = HashSet::new();
	let mut connected = Vec::new();
	for edge in edges {
		let other = if edge.source == id {
			&edge.target
		} else if edge.target == id {
			&edge.source
		} else {
			continue;
		};
		if seen.insert(other.as_str()) {
			connected.push(other.clone());
		}
	}
	connected
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::analyze;
	use crate::graph::types::RelationshipMap;

	fn view() -> SociogramView {
		let map: RelationshipMap = [
			("Hannah", vec!["Hayden", "Kaley"]),
			("Hayden", vec!["Hannah"]),
			("Kaley", vec!["Nate"]),
		]
		.into_iter()
		.collect();
		analyze(&map)
	}

	#[test]
	fn empty_term_keeps_everything() {
		let v = view();
		assert_eq!(filter(&v, ""), v);
	}

	#[test]
	fn whitespace_is_part_of_the_term() {
		let v = view();
		assert!(filter(&v, "   ").nodes.is_empty());
		assert!(filter(&v, "nate ").nodes.is_empty());
		assert_eq!(filter(&v, "nate").nodes.len(), 1);
	}

	#[test]
	fn match_is_case_insensitive_substring() {
		let filtered = filter(&view(), "HA");
		let ids: Vec<&str> = filtered.nodes.iter().map(|n| n.id()).collect();
		assert_eq!(ids, ["Hannah", "Hayden"]);
	}

	#[test]
	fn edges_need_both_ends() {
		let filtered = filter(&view(), "ha");
		assert_eq!(filtered.edges.len(), 2);
		assert!(
			filtered
				.edges
				.iter()
				.all(|e| e.source != "Kaley" && e.target != "Kaley")
		);
	}

	#[test]
	fn filtered_nodes_keep_their_colors() {
		let v = view();
		let filtered = filter(&v, "nate");
		assert_eq!(filtered.nodes[0], *v.node("Nate").unwrap());
	}

	#[test]
	fn connected_in_both_directions_without_repeats() {
		let v = view();
		assert_eq!(connected_nodes(&v.edges, "Hannah"), ["Hayden", "Kaley"]);
		assert_eq!(connected_nodes(&v.edges, "Kaley"), ["Hannah", "Nate"]);
		assert!(connected_nodes(&v.edges, "Nobody").is_empty());
	}
}
