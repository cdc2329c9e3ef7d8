use leptos::prelude::*;
use log::{info, warn};

use crate::components::data_input::DataInputModal;
use crate::components::sociogram::SociogramCanvas;
use crate::data::{DatasetStore, LocalStorage, default_relationships};
use crate::graph::encode::PALETTE;
use crate::graph::filter::{connected_nodes, filter};
use crate::graph::{LayoutMode, NodeId, RelationshipMap, analyze};

fn dataset_store() -> Option<DatasetStore<LocalStorage>> {
	LocalStorage::open()
		.inspect_err(|e| warn!("{e}"))
		.ok()
		.map(DatasetStore::new)
}

/// Sociogram page: controls, canvas, legend and the selection panel.
#[component]
pub fn Home() -> impl IntoView {
	let store = dataset_store();
	let has_custom_data = store.as_ref().is_some_and(DatasetStore::has_custom_data);
	let using_custom_data = RwSignal::new(has_custom_data);
	let saved = store.and_then(|store| store.load());
	let data = RwSignal::new(saved.unwrap_or_else(default_relationships));

	let layout_mode = RwSignal::new(LayoutMode::default());
	let search = RwSignal::new(String::new());
	let selected = RwSignal::new(None::<NodeId>);
	let hovered = RwSignal::new(None::<NodeId>);
	let modal_open = RwSignal::new(false);

	let processed = Memo::new(move |_| data.with(analyze));
	let filtered = Memo::new(move |_| processed.with(|view| filter(view, &search.get())));

	let on_update = Callback::new(move |map: RelationshipMap| {
		info!("loading custom dataset with {} people", map.len());
		if let Some(store) = dataset_store() {
			if let Err(e) = store.save(&map) {
				warn!("Error saving data: {e}");
			}
		}
		selected.set(None);
		data.set(map);
		using_custom_data.set(true);
	});

	let on_reset = Callback::new(move |()| {
		info!("restoring built-in dataset");
		if let Some(store) = dataset_store() {
			if let Err(e) = store.reset() {
				warn!("Error clearing saved data: {e}");
			}
		}
		selected.set(None);
		data.set(default_relationships());
		using_custom_data.set(false);
	});

	let selected_connections = move || {
		let id = selected.get()?;
		filtered.with(|view| view.node(&id).map(|n| n.node.connections))
	};
	let selected_neighbours = move || {
		selected
			.get()
			.map(|id| filtered.with(|view| connected_nodes(&view.edges, &id)))
			.unwrap_or_default()
	};

	view! {
		<div class="app">
			<header class="app-header">
				<div class="header-content">
					<div class="header-text">
						<h1>"Interactive Sociogram"</h1>
						<p>
							"Explore peer connections with multiple layout modes, zoom & pan controls, and rich interactions"
						</p>
					</div>
					<button class="settings-btn" title="Update Data" on:click=move |_| modal_open.set(true)>
						"Update Data"
					</button>
				</div>
			</header>

			<div class="sociogram-container">
				<div class="controls">
					<div class="layout-tabs">
						{LayoutMode::ALL
							.into_iter()
							.map(|mode| {
								view! {
									<button
										class:active=move || layout_mode.get() == mode
										on:click=move |_| layout_mode.set(mode)
									>
										{mode.label()}
									</button>
								}
							})
							.collect_view()}
					</div>

					<div class="search-box">
						<input
							type="text"
							placeholder="Search people..."
							prop:value=move || search.get()
							on:input=move |ev| search.set(event_target_value(&ev))
						/>
						<Show when=move || !search.get().is_empty()>
							<button class="clear-btn" on:click=move |_| search.set(String::new())>
								"✕"
							</button>
						</Show>
					</div>
				</div>

				<div class="graph-wrapper">
					<SociogramCanvas
						graph=filtered
						layout=layout_mode
						selected=selected
						hovered=hovered
						fullscreen=false
					/>
				</div>

				<div class="legend">
					<div class="legend-item">
						<div class="legend-color-box" style=format!("background: {}", PALETTE[0])></div>
						<span>"Community"</span>
					</div>
					<div class="legend-item">
						<div class="legend-line mutual"></div>
						<span>"Mutual Connection"</span>
					</div>
					<div class="legend-item">
						<div class="legend-line directed"></div>
						<span>"Directed Connection"</span>
					</div>
					<div class="legend-item">
						<span class="legend-hint">
							"Click: Select • Hover: Preview • Drag: Move • Scroll: Zoom"
						</span>
					</div>
				</div>

				<Show when=move || selected.get().is_some()>
					<div class="info-panel">
						<div class="info-header">
							<h3>{move || selected.get().unwrap_or_default()}</h3>
							<button on:click=move |_| selected.set(None)>"✕"</button>
						</div>
						<div class="info-content">
							<p>
								<strong>"Total Connections: "</strong>
								{move || selected_connections().map(|c| c.to_string()).unwrap_or_default()}
							</p>
							<p>
								<strong>"Connected to:"</strong>
							</p>
							<ul>
								{move || {
									selected_neighbours()
										.into_iter()
										.map(|id| view! { <li>{id}</li> })
										.collect_view()
								}}
							</ul>
						</div>
					</div>
				</Show>
			</div>

			<DataInputModal
				open=modal_open
				using_custom_data=using_custom_data
				on_update=on_update
				on_reset=on_reset
			/>
		</div>
	}
}
