//! Deterministic layouts for the non-physical modes.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;

use super::types::{AnnotatedNode, CommunityAssignment, LayoutPosition, Node, SociogramView};

/// Side of the square the deterministic layouts are computed in.
pub const LAYOUT_EXTENT: f64 = 800.0;

/// How node positions are decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
	/// Positions come from the physics simulation.
	#[default]
	Force,
	/// Evenly spaced around a circle.
	Circular,
	/// One column per community.
	Hierarchical,
}

impl LayoutMode {
	/// Every mode, in tab order.
	pub const ALL: [LayoutMode; 3] = [Self::Force, Self::Circular, Self::Hierarchical];

	/// Tab label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Force => "Force-Directed",
			Self::Circular => "Circular",
			Self::Hierarchical => "Hierarchical",
		}
	}
}

impl fmt::Display for LayoutMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Place nodes clockwise on a circle, starting at twelve o'clock.
///
/// The radius is 35% of the shorter side. Nodes keep their input order, so
/// callers group them visually by sorting first.
pub fn circular(nodes: &[Node], width: f64, height: f64) -> Vec<LayoutPosition> {
	let (cx, cy) = (width / 2.0, height / 2.0);
	let radius = width.min(height) * 0.35;
	let count = nodes.len() as f64;

	nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let angle = (i as f64 / count) * 2.0 * PI - PI / 2.0;
			LayoutPosition {
				id: node.id.clone(),
				x: cx + radius * angle.cos(),
				y: cy + radius * angle.sin(),
			}
		})
		.collect()
}

/// Place each community in its own column, members stacked top to bottom.
///
/// Columns follow the order communities are first met in `nodes`. Nodes
/// missing from `communities` count as community 0.
pub fn hierarchical(
	nodes: &[Node],
	communities: &CommunityAssignment,
	width: f64,
	height: f64,
) -> Vec<LayoutPosition> {
	let mut groups: Vec<(usize, Vec<&Node>)> = Vec::new();
	let mut column_of: HashMap<usize, usize> = HashMap::new();
	for node in nodes {
		let community = communities.get(&node.id).unwrap_or(0);
		let column = *column_of.entry(community).or_insert_with(|| {
			groups.push((community, Vec::new()));
			groups.len() - 1
		});
		groups[column].1.push(node);
	}

	let column_width = width / (groups.len() as f64 + 1.0);
	let mut positions = Vec::with_capacity(nodes.len());
	for (column, (_, members)) in groups.iter().enumerate() {
		let x = column_width * (column as f64 + 1.0);
		let row_height = height / (members.len() as f64 + 1.0);
		positions.extend(members.iter().enumerate().map(|(row, node)| LayoutPosition {
			id: node.id.clone(),
			x,
			y: row_height * (row as f64 + 1.0),
		}));
	}
	positions
}

/// Coordinates for `mode`, or `None` when the physics engine owns placement.
pub fn compute(
	mode: LayoutMode,
	view: &SociogramView,
	width: f64,
	height: f64,
) -> Option<Vec<LayoutPosition>> {
	let nodes: Vec<Node> = view.nodes.iter().map(|n| n.node.clone()).collect();
	match mode {
		LayoutMode::Force => None,
		LayoutMode::Circular => Some(circular(&nodes, width, height)),
		LayoutMode::Hierarchical => Some(hierarchical(&nodes, &view.communities(), width, height)),
	}
}

/// Fresh annotated nodes carrying `positions`.
///
/// Nodes without a matching position come back unplaced.
pub fn apply_positions(
	nodes: &[AnnotatedNode],
	positions: &[LayoutPosition],
) -> Vec<AnnotatedNode> {
	let by_id: HashMap<&str, (f64, f64)> = positions
		.iter()
		.map(|p| (p.id.as_str(), (p.x, p.y)))
		.collect();
	nodes
		.iter()
		.map(|n| AnnotatedNode {
			position: by_id.get(n.id()).copied(),
			..n.clone()
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nodes(ids: &[&str]) -> Vec<Node> {
		ids.iter().map(|id| Node::named(id)).collect()
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	fn close_point(a: (f64, f64), b: (f64, f64)) -> bool {
		close(a.0, b.0) && close(a.1, b.1)
	}

	#[test]
	fn circular_starts_at_top_and_runs_clockwise() {
		let positions = circular(&nodes(&["a", "b", "c", "d"]), 800.0, 600.0);
		let r = 600.0 * 0.35;
		let at = |i: usize| (positions[i].x, positions[i].y);
		assert!(close_point(at(0), (400.0, 300.0 - r)));
		assert!(close_point(at(1), (400.0 + r, 300.0)));
		assert!(close_point(at(2), (400.0, 300.0 + r)));
		assert!(close_point(at(3), (400.0 - r, 300.0)));
		for p in &positions {
			let d = ((p.x - 400.0).powi(2) + (p.y - 300.0).powi(2)).sqrt();
			assert!(close(d, r));
		}
	}

	#[test]
	fn circular_of_nothing_is_empty() {
		assert!(circular(&[], 800.0, 800.0).is_empty());
	}

	#[test]
	fn hierarchical_columns_and_rows() {
		let ns = nodes(&["a", "b", "c", "d", "e"]);
		let communities: CommunityAssignment =
			[("a", 5), ("b", 2), ("c", 5), ("d", 2), ("e", 5)].into_iter().collect();
		let positions = hierarchical(&ns, &communities, 900.0, 800.0);
		let at = |id: &str| positions.iter().find(|p| p.id == id).unwrap();

		// Community 5 is met first: first column.
		assert!(close(at("a").x, 300.0));
		assert!(close(at("b").x, 600.0));
		assert!(close(at("a").y, 200.0));
		assert!(close(at("c").y, 400.0));
		assert!(close(at("e").y, 600.0));
		assert!(close(at("b").y, 800.0 / 3.0));
		assert!(close(at("d").y, 1600.0 / 3.0));
	}

	#[test]
	fn hierarchical_never_overlaps() {
		let ids: Vec<String> = (0..12).map(|i| format!("n{i}")).collect();
		let ns: Vec<Node> = ids.iter().map(|id| Node::named(id)).collect();
		let communities: CommunityAssignment = ids
			.iter()
			.enumerate()
			.map(|(i, id)| (id.clone(), i % 3))
			.collect();
		let positions = hierarchical(&ns, &communities, 800.0, 800.0);

		for a in &positions {
			for b in &positions {
				if a.id == b.id {
					continue;
				}
				let same = communities.get(&a.id) == communities.get(&b.id);
				if same {
					assert!(!close(a.y, b.y));
				} else {
					assert!(!close(a.x, b.x));
				}
			}
		}
	}

	#[test]
	fn unassigned_nodes_join_community_zero() {
		let ns = nodes(&["a", "b"]);
		let communities: CommunityAssignment = [("a", 0)].into_iter().collect();
		let positions = hierarchical(&ns, &communities, 400.0, 300.0);
		assert!(close(positions[0].x, positions[1].x));
	}

	#[test]
	fn force_mode_computes_nothing() {
		let view = SociogramView::default();
		assert!(compute(LayoutMode::Force, &view, 800.0, 800.0).is_none());
	}

	#[test]
	fn apply_positions_leaves_input_untouched() {
		let annotated = vec![
			AnnotatedNode {
				node: Node::named("a"),
				..AnnotatedNode::default()
			},
			AnnotatedNode {
				node: Node::named("b"),
				..AnnotatedNode::default()
			},
		];
		let placed = apply_positions(
			&annotated,
			&[LayoutPosition {
				id: "a".into(),
				x: 1.0,
				y: 2.0,
			}],
		);
		assert_eq!(placed[0].position, Some((1.0, 2.0)));
		assert_eq!(placed[1].position, None);
		assert!(annotated.iter().all(|n| n.position.is_none()));
	}
}
