//! Graph analytics and layout for the sociogram.
//!
//! The pipeline runs leaves first: [`builder::build`] turns a
//! [`RelationshipMap`] into nodes and edges, [`community::detect`] groups the
//! nodes, [`encode`] colors them, and [`layout`] places them for the
//! non-physical modes. Every stage is a pure function re-run on change.

pub mod builder;
pub mod community;
pub mod encode;
pub mod filter;
pub mod layout;
pub mod types;

use log::debug;

pub use encode::{Highlight, Interaction};
pub use layout::LayoutMode;
pub use types::{
	AnnotatedNode, CommunityAssignment, Edge, Graph, LayoutPosition, Node, NodeId,
	RelationshipMap, SociogramView,
};

/// Build, group and color a relationship map in one pass.
pub fn analyze(relationships: &RelationshipMap) -> SociogramView {
	let Graph { nodes, edges } = builder::build(relationships);
	let communities = community::detect(&nodes, &edges);

	let nodes: Vec<AnnotatedNode> = nodes
		.into_iter()
		.map(|node| {
			let community = communities.get(&node.id).unwrap_or(0);
			AnnotatedNode {
				node,
				community,
				color: encode::community_color(community),
				position: None,
			}
		})
		.collect();

	debug!(
		"analyzed {} nodes, {} edges, {} communities",
		nodes.len(),
		edges.len(),
		communities.community_count()
	);

	SociogramView {
		nodes,
		edges,
		community_count: communities.community_count(),
	}
}
