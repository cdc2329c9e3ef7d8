use leptos::prelude::*;

use crate::data::parse_relationships;
use crate::graph::RelationshipMap;

const EXAMPLE_DATA: &str = "Hannah: Hayden, Kaley, Kaylee
Nate: Cooper B, Tamia, Charlotte
Hunter: Mila, Livvy, Tamia";

/// Modal for pasting a new dataset.
#[component]
pub fn DataInputModal(
	open: RwSignal<bool>,
	#[prop(into)] using_custom_data: Signal<bool>,
	on_update: Callback<RelationshipMap>,
	on_reset: Callback<()>,
) -> impl IntoView {
	let (input, set_input) = signal(String::new());
	let (error, set_error) = signal(None::<String>);

	let close = move || open.set(false);

	let submit = move |_| {
		set_error.set(None);
		match parse_relationships(&input.get_untracked()) {
			Ok(map) => {
				on_update.run(map);
				set_input.set(String::new());
				close();
			}
			Err(e) => set_error.set(Some(e.to_string())),
		}
	};

	let clear = move |_| {
		set_input.set(String::new());
		set_error.set(None);
	};

	let reset = move |_| {
		on_reset.run(());
		set_input.set(String::new());
		set_error.set(None);
		close();
	};

	view! {
		<Show when=move || open.get()>
			<div class="modal-overlay" on:click=move |_| close()>
				<div class="modal-content" on:click=|ev| ev.stop_propagation()>
					<div class="modal-header">
						<h2>"Update Sociogram Data"</h2>
						<button class="close-btn" on:click=move |_| close()>
							"✕"
						</button>
					</div>

					<div class="modal-body">
						<Show when=move || using_custom_data.get()>
							<div class="status-indicator">
								<span>"Currently using custom data"</span>
							</div>
						</Show>

						<p class="modal-description">
							"Paste your sociogram data below. Each line should follow this format:"
						</p>
						<div class="example-format">
							<code>{EXAMPLE_DATA}</code>
						</div>

						<textarea
							class="data-input"
							rows=15
							placeholder="Paste your data here...\nExample:\nAlice: Bob, Charlie, Diana\nBob: Alice, Eve"
							prop:value=move || input.get()
							on:input=move |ev| set_input.set(event_target_value(&ev))
						/>

						{move || {
							error
								.get()
								.map(|message| {
									view! {
										<div class="error-message">
											<strong>"Error: "</strong>
											{message}
										</div>
									}
								})
						}}

						<div class="modal-footer">
							<div class="footer-left">
								<Show when=move || using_custom_data.get()>
									<button class="btn btn-warning" on:click=reset>
										"Reset to Original"
									</button>
								</Show>
							</div>
							<div class="footer-right">
								<button class="btn btn-secondary" on:click=clear>
									"Clear"
								</button>
								<button class="btn btn-primary" on:click=submit>
									"Update Graph"
								</button>
							</div>
						</div>
					</div>
				</div>
			</div>
		</Show>
	}
}
