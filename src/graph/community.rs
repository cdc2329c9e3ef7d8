//! Community grouping by connected components.

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use super::types::{CommunityAssignment, Edge, Node};

/// Partition nodes into communities.
///
/// Communities are the connected components of the graph with direction
/// ignored, numbered in node order. A graph that forms one single component
/// is regrouped by degree instead (see [`degree_bucket`]).
pub fn detect(nodes: &[Node], edges: &[Edge]) -> CommunityAssignment {
	let mut adjacency: HashMap<&str, Vec<&str>> = nodes
		.iter()
		.map(|n| (n.id.as_str(), Vec::new()))
		.collect();
	for edge in edges {
		if let Some(list) = adjacency.get_mut(edge.source.as_str()) {
			list.push(edge.target.as_str());
		}
		if let Some(list) = adjacency.get_mut(edge.target.as_str()) {
			list.push(edge.source.as_str());
		}
	}

	let mut communities = CommunityAssignment::default();
	let mut visited: HashSet<&str> = HashSet::new();
	let mut next_id = 0;

	for node in nodes {
		let start = node.id.as_str();
		if !visited.insert(start) {
			continue;
		}
		let mut queue = VecDeque::from([start]);
		while let Some(current) = queue.pop_front() {
			communities.assign(current, next_id);
			for &neighbor in adjacency.get(current).into_iter().flatten() {
				if visited.insert(neighbor) {
					queue.push_back(neighbor);
				}
			}
		}
		next_id += 1;
	}

	if next_id == 1 {
		debug!(
			"single component over {} nodes, grouping by degree",
			nodes.len()
		);
		return nodes
			.iter()
			.map(|n| (n.id.clone(), degree_bucket(n.connections)))
			.collect();
	}

	debug!("{} components over {} nodes", next_id, nodes.len());
	communities
}

/// Degree bucket used when structure alone is uninformative.
pub fn degree_bucket(connections: u32) -> usize {
	match connections {
		8.. => 0,
		5.. => 1,
		3.. => 2,
		_ => 3,
	}
}
