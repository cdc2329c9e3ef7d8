use std::collections::HashSet;

use sociogram_canvas::data::{default_relationships, parse_relationships};
use sociogram_canvas::graph::encode::{Highlight, Interaction, community_color};
use sociogram_canvas::graph::filter::filter;
use sociogram_canvas::graph::layout::{LAYOUT_EXTENT, LayoutMode, compute};
use sociogram_canvas::graph::{analyze, builder, community};

#[test]
fn pasted_text_flows_through_to_layout() {
	let map = parse_relationships("A: B\nB: A, C\nD: E").unwrap();
	let view = analyze(&map);

	let ids: Vec<&str> = view.nodes.iter().map(|n| n.id()).collect();
	assert_eq!(ids, ["A", "B", "D", "C", "E"]);

	// Two components: {A, B, C} and {D, E}.
	let community = |id: &str| view.node(id).unwrap().community;
	assert_eq!(community("A"), 0);
	assert_eq!(community("C"), 0);
	assert_eq!(community("D"), 1);
	assert_eq!(view.node("E").unwrap().color, community_color(1));
	assert_eq!(view.community_count, 2);

	let mode = LayoutMode::Hierarchical;
	let columns = compute(mode, &view, LAYOUT_EXTENT, LAYOUT_EXTENT).unwrap();
	let xs: HashSet<u64> = columns.iter().map(|p| p.x.to_bits()).collect();
	assert_eq!(xs.len(), 2);
	assert_eq!(columns.len(), view.nodes.len());
}

#[test]
fn every_name_is_one_node_and_every_node_one_community() {
	let map = default_relationships();
	let graph = builder::build(&map);

	let mut names: HashSet<&str> = map.iter().map(|(k, _)| k).collect();
	let listed = map.iter().flat_map(|(_, v)| v);
	names.extend(listed.map(String::as_str));
	let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids, names);
	assert_eq!(ids.len(), graph.nodes.len());

	for edge in &graph.edges {
		assert_eq!(edge.is_mutual, map.lists(&edge.target, &edge.source));
	}

	let first = community::detect(&graph.nodes, &graph.edges);
	assert_eq!(first.len(), graph.nodes.len());
	assert_eq!(first, community::detect(&graph.nodes, &graph.edges));
}

#[test]
fn search_then_select() {
	let view = analyze(&default_relationships());
	let narrowed = filter(&view, "ka");
	for node in &narrowed.nodes {
		assert!(node.node.name.to_lowercase().contains("ka"));
	}

	let interaction = Interaction {
		selected: Some("Kaley".into()),
		hovered: None,
	};
	let highlight = Highlight::new(&interaction, &narrowed.edges);
	assert!(highlight.node_highlighted("Kaylee"));
	for node in &narrowed.nodes {
		let style = highlight.node_style(node);
		assert_eq!(style.dimmed, !highlight.node_highlighted(node.id()));
	}
}
