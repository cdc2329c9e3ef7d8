//! Visual encoding: sizes, colors and interaction-dependent draw parameters.
//!
//! Everything here is a pure function of its arguments. Widths are in screen
//! pixels; the renderer divides them by the current zoom.

use std::collections::HashSet;

use super::types::{AnnotatedNode, Edge, NodeId};

/// Community palette. Ids past the end wrap around.
pub const PALETTE: [&str; 8] = [
	"#3b82f6", // blue
	"#ec4899", // pink
	"#10b981", // green
	"#f59e0b", // amber
	"#8b5cf6", // purple
	"#ef4444", // red
	"#14b8a6", // teal
	"#f97316", // orange
];

const MIN_SIZE: f64 = 4.0;
const MAX_SIZE: f64 = 12.0;
const MIN_CONNECTIONS: f64 = 1.0;
const MAX_CONNECTIONS: f64 = 10.0;

const MUTUAL_COLOR: &str = "#f59010";
const MUTUAL_DIMMED: &str = "#f5901040";
const DIRECTED_COLOR: &str = "#ffffff60";
const DIRECTED_DIMMED: &str = "#ffffff20";
const SELECTED_BORDER: &str = "#fff";
const LABEL_COLOR: &str = "#ffffff";
const LABEL_DIMMED: &str = "#ffffff80";
const DIM_ALPHA: &str = "40";

/// Arrowhead length along the edge.
pub const ARROW_LENGTH: f64 = 8.0;
/// Arrowhead half width across the edge.
pub const ARROW_HALF_WIDTH: f64 = 4.0;

/// Node radius from its total connection count.
///
/// Clamped above at ten connections only; fewer than one connection gives a
/// radius slightly under the nominal minimum.
pub fn node_size(connections: u32) -> f64 {
	let t = f64::from(connections).min(MAX_CONNECTIONS);
	MIN_SIZE + ((t - MIN_CONNECTIONS) / (MAX_CONNECTIONS - MIN_CONNECTIONS)) * (MAX_SIZE - MIN_SIZE)
}

/// Palette color for a community id.
pub fn community_color(community: usize) -> &'static str {
	PALETTE[community % PALETTE.len()]
}

/// Current pointer state. At most one selected and one hovered node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
	/// Clicked node.
	pub selected: Option<NodeId>,
	/// Node under the pointer.
	pub hovered: Option<NodeId>,
}

impl Interaction {
	/// Whether anything is selected or hovered.
	pub fn is_active(&self) -> bool {
		self.selected.is_some() || self.hovered.is_some()
	}

	fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	fn is_hovered(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}
}

/// Precomputed per-frame context for styling many nodes and edges.
#[derive(Debug)]
pub struct Highlight<'a> {
	interaction: &'a Interaction,
	/// Nodes linked to the selected node in either direction.
	connected: HashSet<&'a str>,
}

impl<'a> Highlight<'a> {
	/// Collect the selected node's neighbours from `edges`.
	pub fn new(interaction: &'a Interaction, edges: impl IntoIterator<Item = &'a Edge>) -> Self {
		let mut connected = HashSet::new();
		if let Some(selected) = interaction.selected.as_deref() {
			for edge in edges {
				if edge.source == selected {
					connected.insert(edge.target.as_str());
				}
				if edge.target == selected {
					connected.insert(edge.source.as_str());
				}
			}
		}
		Self {
			interaction,
			connected,
		}
	}

	/// Selected, hovered, or linked to the selected node.
	pub fn node_highlighted(&self, id: &str) -> bool {
		self.interaction.is_selected(id)
			|| self.interaction.is_hovered(id)
			|| self.connected.contains(id)
	}

	/// Incident to the selected or hovered node.
	pub fn edge_highlighted(&self, edge: &Edge) -> bool {
		[&self.interaction.selected, &self.interaction.hovered]
			.into_iter()
			.flatten()
			.any(|id| edge.touches(id))
	}

	/// Draw parameters for `node`.
	pub fn node_style(&self, node: &AnnotatedNode) -> NodeStyle {
		let highlighted = self.node_highlighted(node.id());
		let dimmed = self.interaction.is_active() && !highlighted;
		let border = highlighted.then(|| {
			if self.interaction.is_selected(node.id()) {
				Border {
					color: SELECTED_BORDER,
					width: 3.0,
				}
			} else {
				Border {
					color: node.color,
					width: 2.0,
				}
			}
		});

		NodeStyle {
			radius: node_size(node.node.connections),
			fill: if dimmed {
				format!("{}{}", node.color, DIM_ALPHA)
			} else {
				node.color.to_owned()
			},
			border,
			label_color: if dimmed { LABEL_DIMMED } else { LABEL_COLOR },
			dimmed,
		}
	}

	/// Draw parameters for `edge`.
	pub fn edge_style(&self, edge: &Edge) -> EdgeStyle {
		let highlighted = self.edge_highlighted(edge);
		let dimmed = self.interaction.is_active() && !highlighted;
		if edge.is_mutual {
			EdgeStyle {
				color: if dimmed { MUTUAL_DIMMED } else { MUTUAL_COLOR },
				width: if highlighted { 3.0 } else { 2.0 },
				arrow: false,
				dimmed,
			}
		} else {
			EdgeStyle {
				color: if dimmed {
					DIRECTED_DIMMED
				} else {
					DIRECTED_COLOR
				},
				width: if highlighted { 2.5 } else { 1.5 },
				arrow: true,
				dimmed,
			}
		}
	}
}

/// Node outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Border {
	/// Stroke color.
	pub color: &'static str,
	/// Stroke width.
	pub width: f64,
}

/// How to draw one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	/// World-space radius.
	pub radius: f64,
	/// Fill color, alpha included.
	pub fill: String,
	/// Outline, only on highlighted nodes.
	pub border: Option<Border>,
	/// Name label color.
	pub label_color: &'static str,
	/// Faded because something else is in focus.
	pub dimmed: bool,
}

/// How to draw one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStyle {
	/// Stroke color, alpha included.
	pub color: &'static str,
	/// Stroke width.
	pub width: f64,
	/// Draw an arrowhead at the target end.
	pub arrow: bool,
	/// Faded because something else is in focus.
	pub dimmed: bool,
}

/// Triangle for an arrowhead pointing from `from` into `to`.
///
/// The tip sits `target_radius` short of `to`, on the target's boundary. The
/// first point is the tip. `None` when the endpoints coincide.
pub fn arrowhead(
	from: (f64, f64),
	to: (f64, f64),
	target_radius: f64,
	length: f64,
	half_width: f64,
) -> Option<[(f64, f64); 3]> {
	let (dx, dy) = (to.0 - from.0, to.1 - from.1);
	if dx.hypot(dy) < 1e-6 {
		return None;
	}
	let angle = dy.atan2(dx);
	let (cos, sin) = (angle.cos(), angle.sin());
	let tip = (to.0 - cos * target_radius, to.1 - sin * target_radius);
	Some([
		tip,
		(
			tip.0 - length * cos - half_width * sin,
			tip.1 - length * sin + half_width * cos,
		),
		(
			tip.0 - length * cos + half_width * sin,
			tip.1 - length * sin - half_width * cos,
		),
	])
}
