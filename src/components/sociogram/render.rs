use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use super::state::SociogramState;
use crate::graph::encode::{ARROW_HALF_WIDTH, ARROW_LENGTH, Highlight, Interaction, arrowhead};

const BACKGROUND: &str = "#1a1a2e";
const LABEL_SIZE: f64 = 12.0;

pub fn render(state: &SociogramState, interaction: &Interaction, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let highlight = Highlight::new(interaction, state.edges().iter().map(|d| &d.edge));
	draw_edges(state, &highlight, ctx);
	draw_nodes(state, &highlight, ctx);
	ctx.restore();
}

fn draw_edges(state: &SociogramState, highlight: &Highlight<'_>, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let positions = state.positions();
	let radii = radii(state);

	for draw in state.edges() {
		let endpoints = (positions.get(&draw.source), positions.get(&draw.target));
		let (Some(&from), Some(&to)) = endpoints else {
			continue;
		};
		let (dx, dy) = (to.0 - from.0, to.1 - from.1);
		if dx.hypot(dy) < 0.001 {
			continue;
		}
		let style = highlight.edge_style(&draw.edge);

		ctx.set_stroke_style_str(style.color);
		ctx.set_line_width(style.width / k);
		ctx.begin_path();
		ctx.move_to(from.0, from.1);
		ctx.line_to(to.0, to.1);
		ctx.stroke();

		if !style.arrow {
			continue;
		}
		let target_radius = radii.get(&draw.target).copied().unwrap_or_default();
		let (length, half_width) = (ARROW_LENGTH / k, ARROW_HALF_WIDTH / k);
		if let Some([tip, left, right]) = arrowhead(from, to, target_radius, length, half_width) {
			ctx.begin_path();
			ctx.move_to(tip.0, tip.1);
			ctx.line_to(left.0, left.1);
			ctx.line_to(right.0, right.1);
			ctx.close_path();
			ctx.set_fill_style_str(style.color);
			ctx.fill();
		}
	}
}

fn draw_nodes(state: &SociogramState, highlight: &Highlight<'_>, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let font_size = LABEL_SIZE / k;
	ctx.set_font(&format!("{font_size}px sans-serif"));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let info = &node.data.user_data;
		let style = highlight.node_style(&info.node);

		ctx.begin_path();
		let _ = ctx.arc(x, y, style.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.fill);
		ctx.fill();

		if let Some(border) = &style.border {
			ctx.set_stroke_style_str(border.color);
			ctx.set_line_width(border.width / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(style.label_color);
		let _ = ctx.fill_text(&info.node.node.name, x, y + style.radius + font_size);
	});
}

fn radii(state: &SociogramState) -> HashMap<DefaultNodeIdx, f64> {
	let mut radii = HashMap::new();
	state.graph.visit_nodes(|node| {
		radii.insert(node.index(), node.data.user_data.radius);
	});
	radii
}
