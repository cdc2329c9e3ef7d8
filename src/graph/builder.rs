//! Relationship map to nodes and directed edges.

use std::collections::HashMap;

use super::types::{Edge, Graph, Node, RelationshipMap};

/// Turn a relationship map into nodes and directed edges.
///
/// Every name that appears as a key or inside any friend list becomes a node,
/// so dangling references still yield a well-formed graph. Each listed pair
/// becomes one edge in input order; repeated pairs are kept as parallel edges
/// and counted separately.
pub fn build(relationships: &RelationshipMap) -> Graph {
	let mut nodes: Vec<Node> = Vec::new();
	let mut index: HashMap<&str, usize> = HashMap::new();

	let keys = relationships.iter().map(|(name, _)| name);
	let listed = relationships.iter().flat_map(|(_, friends)| friends);
	let names = keys.chain(listed.map(String::as_str));
	for name in names {
		index.entry(name).or_insert_with(|| {
			nodes.push(Node::named(name));
			nodes.len() - 1
		});
	}

	let mut edges = Vec::new();
	for (source, targets) in relationships.iter() {
		for target in targets {
			let src = &mut nodes[index[source]];
			src.outgoing_connections += 1;
			src.connections += 1;
			let tgt = &mut nodes[index[target.as_str()]];
			tgt.incoming_connections += 1;
			tgt.connections += 1;

			edges.push(Edge {
				source: source.to_owned(),
				target: target.clone(),
				is_mutual: false,
			});
		}
	}

	// Reciprocity is read from the declared map, never from the edge list.
	for edge in &mut edges {
		edge.is_mutual = relationships.lists(&edge.target, &edge.source);
	}

	Graph { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn map(entries: &[(&str, &[&str])]) -> RelationshipMap {
		entries.iter().map(|(k, v)| (*k, v.to_vec())).collect()
	}

	fn node<'a>(graph: &'a Graph, id: &str) -> &'a Node {
		graph.nodes.iter().find(|n| n.id == id).unwrap()
	}

	#[test]
	fn empty_map_gives_empty_graph() {
		let graph = build(&RelationshipMap::new());
		assert!(graph.nodes.is_empty());
		assert!(graph.edges.is_empty());
	}

	#[test]
	fn three_person_example() {
		let graph = build(&map(&[("A", &["B"]), ("B", &["A", "C"]), ("C", &[])]));

		assert_eq!(graph.nodes.len(), 3);
		assert_eq!(node(&graph, "A").connections, 2);
		assert_eq!(node(&graph, "B").connections, 3);
		assert_eq!(node(&graph, "C").connections, 1);
		assert_eq!(node(&graph, "C").outgoing_connections, 0);

		let pairs: Vec<(&str, &str, bool)> = graph
			.edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str(), e.is_mutual))
			.collect();
		assert_eq!(
			pairs,
			[("A", "B", true), ("B", "A", true), ("B", "C", false)]
		);
	}

	#[test]
	fn dangling_targets_become_nodes_in_first_seen_order() {
		let graph = build(&map(&[("A", &["X", "Y"]), ("B", &["Y", "Z"])]));
		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["A", "B", "X", "Y", "Z"]);
		assert_eq!(node(&graph, "Y").incoming_connections, 2);
		for edge in &graph.edges {
			assert!(graph.nodes.iter().any(|n| n.id == edge.source));
			assert!(graph.nodes.iter().any(|n| n.id == edge.target));
		}
	}

	#[test]
	fn duplicates_stay_parallel_and_mutual_follows_declaration() {
		// "A" names "B" twice, "B" never names "A".
		let graph = build(&map(&[("A", &["B", "B"]), ("B", &[])]));
		assert_eq!(graph.edges.len(), 2);
		assert!(graph.edges.iter().all(|e| !e.is_mutual));
		assert_eq!(node(&graph, "A").outgoing_connections, 2);
		assert_eq!(node(&graph, "B").incoming_connections, 2);
	}

	#[test]
	fn self_reference_is_a_mutual_self_loop() {
		let graph = build(&map(&[("Solo", &["Solo"])]));
		assert_eq!(graph.nodes.len(), 1);
		assert_eq!(graph.edges.len(), 1);
		assert!(graph.edges[0].is_mutual);
		assert_eq!(graph.nodes[0].connections, 2);
	}

	#[test]
	fn names_are_case_sensitive() {
		let graph = build(&map(&[("amy", &["Amy"])]));
		assert_eq!(graph.nodes.len(), 2);
		assert!(!graph.edges[0].is_mutual);
	}

	#[test]
	fn connections_always_sum_and_build_is_repeatable() {
		let input = map(&[
			("A", &["B", "C"]),
			("C", &["A", "D", "A"]),
			("D", &["D"]),
		]);
		let first = build(&input);
		for n in &first.nodes {
			assert_eq!(
				n.connections,
				n.incoming_connections + n.outgoing_connections
			);
		}
		assert_eq!(first, build(&input));
	}
}
