use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::camera::{Bounds, CameraTween, ViewTransform};
use crate::graph::encode::node_size;
use crate::graph::layout::LAYOUT_EXTENT;
use crate::graph::{AnnotatedNode, Edge, SociogramView};

/// Extra world-space distance around a node that still counts as a hit.
pub const HIT_SLACK: f64 = 4.0;
/// Simulation steps after a restart before the engine reports settled.
pub const COOLDOWN_TICKS: u32 = 100;
/// Screen-space margin kept around the graph by fit-to-view.
pub const FIT_PADDING: f64 = 50.0;
/// Seconds the fit-to-view camera move takes.
pub const FIT_DURATION: f64 = 0.4;
/// Pointer travel, in screen pixels, that turns a click into a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

const SEED_RADIUS: f64 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub node: AnnotatedNode,
	pub radius: f64,
}

/// An edge with its endpoints resolved to engine indices.
#[derive(Clone, Debug)]
pub struct DrawEdge {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub edge: Edge,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	/// Pin state to restore when the drag ends.
	pub was_anchored: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Canvas-side state: the physics engine, the camera and pointer gestures.
pub struct SociogramState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	cooldown: u32,
	camera: Option<CameraTween>,
	edges: Vec<DrawEdge>,
}

fn new_engine() -> ForceGraph<NodeInfo, ()> {
	ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

impl SociogramState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			graph: new_engine(),
			edges: Vec::new(),
			transform: ViewTransform {
				x: (width - LAYOUT_EXTENT) / 2.0,
				y: (height - LAYOUT_EXTENT) / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			animation_running: false,
			cooldown: 0,
			camera: None,
		}
	}

	/// Replace the engine's contents with `view`.
	///
	/// Nodes that were already on screen keep their position and pin state;
	/// new ones are seeded on a small circle around the layout centre.
	pub fn load(&mut self, view: &SociogramView) {
		let mut previous: HashMap<String, (f32, f32, bool)> = HashMap::new();
		self.graph.visit_nodes(|node| {
			previous.insert(
				node.data.user_data.node.id().to_owned(),
				(node.x(), node.y(), node.data.is_anchor),
			);
		});

		let mut graph = new_engine();
		let mut id_to_idx = HashMap::new();
		let centre = LAYOUT_EXTENT / 2.0;
		let count = view.nodes.len().max(1) as f64;

		for (i, node) in view.nodes.iter().enumerate() {
			let (x, y, is_anchor) = previous.get(node.id()).copied().unwrap_or_else(|| {
				let angle = (i as f64) * 2.0 * PI / count;
				(
					(centre + SEED_RADIUS * angle.cos()) as f32,
					(centre + SEED_RADIUS * angle.sin()) as f32,
					false,
				)
			});
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor,
				user_data: NodeInfo {
					node: node.clone(),
					radius: node_size(node.node.connections),
				},
			});
			id_to_idx.insert(node.id().to_owned(), idx);
		}

		let mut edges = Vec::with_capacity(view.edges.len());
		for edge in &view.edges {
			let endpoints = (id_to_idx.get(&edge.source), id_to_idx.get(&edge.target));
			if let (Some(&src), Some(&tgt)) = endpoints {
				// Self-loops carry no spring force.
				if src != tgt {
					graph.add_edge(src, tgt, EdgeData::default());
				}
				edges.push(DrawEdge {
					source: src,
					target: tgt,
					edge: edge.clone(),
				});
			}
		}

		debug!(
			"engine loaded {} nodes, {} edges",
			id_to_idx.len(),
			edges.len()
		);
		self.graph = graph;
		self.edges = edges;
		self.drag = DragState::default();
	}

	pub fn edges(&self) -> &[DrawEdge] {
		&self.edges
	}

	/// Current world position of every node.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if dx.hypot(dy) < node.data.user_data.radius + HIT_SLACK {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.node.id().to_owned());
			}
		});
		id
	}

	/// Pin nodes that carry a position and release the rest, then restart.
	pub fn apply_layout(&mut self, nodes: &[AnnotatedNode]) {
		let fixed: HashMap<&str, (f64, f64)> = nodes
			.iter()
			.filter_map(|n| n.position.map(|p| (n.id(), p)))
			.collect();
		self.graph.visit_nodes_mut(|node| {
			match fixed.get(node.data.user_data.node.id()) {
				Some(&(x, y)) => {
					node.data.x = x as f32;
					node.data.y = y as f32;
					node.data.is_anchor = true;
				}
				None => node.data.is_anchor = false,
			}
		});
		self.restart();
	}

	/// Pin one node at world coordinates.
	pub fn set_fixed(&mut self, idx: DefaultNodeIdx, x: f32, y: f32) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x;
				node.data.y = y;
				node.data.is_anchor = true;
			}
		});
	}

	fn set_anchor(&mut self, idx: DefaultNodeIdx, is_anchor: bool) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = is_anchor;
			}
		});
	}

	/// Start a press on node `idx` at screen point `(sx, sy)`.
	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, sx: f64, sy: f64) {
		let mut drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: sx,
			start_y: sy,
			..DragState::default()
		};
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				drag.node_start_x = node.x();
				drag.node_start_y = node.y();
				drag.was_anchored = node.data.is_anchor;
			}
		});
		self.drag = drag;
	}

	/// Finish the current press. A dragged node gets its previous pin state
	/// back; a press that never moved returns the clicked node.
	pub fn end_drag(&mut self) -> Option<DefaultNodeIdx> {
		let drag = std::mem::take(&mut self.drag);
		let idx = drag.node_idx.filter(|_| drag.active)?;
		if drag.moved {
			self.set_anchor(idx, drag.was_anchored);
			None
		} else {
			Some(idx)
		}
	}

	/// Let the simulation run again for a full cooldown.
	pub fn restart(&mut self) {
		self.animation_running = true;
		self.cooldown = COOLDOWN_TICKS;
	}

	/// Start an eased camera move that frames every node.
	pub fn fit_to_view(&mut self, padding: f64) {
		let mut circles = Vec::new();
		self.graph.visit_nodes(|node| {
			let radius = node.data.user_data.radius;
			circles.push((node.x() as f64, node.y() as f64, radius));
		});
		if let Some(bounds) = Bounds::around(circles) {
			let target = ViewTransform::fit(bounds, self.width, self.height, padding);
			self.camera = Some(CameraTween::new(self.transform, target, FIT_DURATION));
		}
	}

	/// Stop any camera move in progress; the user has taken over.
	pub fn cancel_camera(&mut self) {
		self.camera = None;
	}

	/// Advance simulation and camera. Returns true on the tick the engine
	/// settles.
	pub fn tick(&mut self, dt: f32) -> bool {
		if let Some(tween) = self.camera.as_mut() {
			let (transform, done) = tween.step(dt as f64);
			self.transform = transform;
			if done {
				self.camera = None;
			}
		}

		if !self.animation_running {
			return false;
		}
		self.graph.update(dt);
		self.cooldown = self.cooldown.saturating_sub(1);
		if self.cooldown == 0 {
			self.animation_running = false;
			return true;
		}
		false
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
