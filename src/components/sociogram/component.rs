use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::{DRAG_THRESHOLD, FIT_PADDING, SociogramState};
use crate::graph::layout::{LAYOUT_EXTENT, LayoutMode, apply_positions, compute};
use crate::graph::{Interaction, NodeId, SociogramView};

/// Delay before framing the graph after a layout switch.
const FIT_DELAY: Duration = Duration::from_millis(100);
/// Longest frame step fed to the simulation, in seconds.
const MAX_FRAME_DT: f64 = 0.05;

fn viewport(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn SociogramCanvas(
	#[prop(into)] graph: Signal<SociogramView>,
	#[prop(into)] layout: Signal<LayoutMode>,
	selected: RwSignal<Option<NodeId>>,
	hovered: RwSignal<Option<NodeId>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let ready = RwSignal::new(false);
	let state: Rc<RefCell<Option<SociogramState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			viewport(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("2d canvas context unavailable");
				return;
			}
		};
		*state_init.borrow_mut() = Some(SociogramState::new(w, h));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let mut last_frame = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Signals are gone once the component unmounts; stop the loop.
			let (Some(selected), Some(hovered)) =
				(selected.try_get_untracked(), hovered.try_get_untracked())
			else {
				return;
			};
			let now = js_sys::Date::now();
			let dt = ((now - last_frame) / 1000.0).clamp(0.0, MAX_FRAME_DT);
			last_frame = now;

			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.tick(dt as f32) {
					s.fit_to_view(FIT_PADDING);
				}
				render::render(s, &Interaction { selected, hovered }, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
		ready.set(true);
	});

	let state_layout = state.clone();
	Effect::new(move |_| {
		let view = graph.get();
		let mode = layout.get();
		if !ready.get() {
			return;
		}
		if let Some(ref mut s) = *state_layout.borrow_mut() {
			s.load(&view);
			let nodes = match compute(mode, &view, LAYOUT_EXTENT, LAYOUT_EXTENT) {
				Some(positions) => apply_positions(&view.nodes, &positions),
				None => view.nodes.clone(),
			};
			s.apply_layout(&nodes);
			info!("{} layout applied to {} nodes", mode, nodes.len());
		}
		// Not cancelled if the mode changes again before it fires.
		let state_fit = state_layout.clone();
		set_timeout(
			move || {
				if let Some(ref mut s) = *state_fit.borrow_mut() {
					s.fit_to_view(FIT_PADDING);
				}
			},
			FIT_DELAY,
		);
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.cancel_camera();
			if let Some(idx) = s.node_at_position(x, y) {
				s.begin_drag(idx, x, y);
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active {
				let id = s.node_at_position(x, y).and_then(|idx| s.node_id(idx));
				if hovered.get_untracked() != id {
					hovered.set(id);
				}
			}

			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (x - s.drag.start_x, y - s.drag.start_y);
					if !s.drag.moved && dx.hypot(dy) > DRAG_THRESHOLD {
						s.drag.moved = true;
						s.restart();
					}
					if s.drag.moved {
						let k = s.transform.k;
						let (nx, ny) = (
							s.drag.node_start_x + (dx / k) as f32,
							s.drag.node_start_y + (dy / k) as f32,
						);
						s.set_fixed(idx, nx, ny);
					}
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if let Some(id) = s.end_drag().and_then(|idx| s.node_id(idx)) {
				selected.update(|current| {
					*current = if current.as_deref() == Some(id.as_str()) {
						None
					} else {
						Some(id)
					};
				});
			}
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.pan.active = false;
		}
		hovered.set(None);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.cancel_camera();
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.transform.zoom_at(x, y, factor);
		}
	};

	let cursor = move || {
		if hovered.get().is_some() {
			"display: block; cursor: pointer;"
		} else {
			"display: block; cursor: grab;"
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="sociogram-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style=cursor
		/>
	}
}
