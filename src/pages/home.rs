use leptos::prelude::*;

use crate::components::graph_editor::{GraphData, GraphEditorCanvas, GraphLink, GraphPoint};

/// A small starting graph: a triangle with one loose point.
fn sample_data() -> GraphData {
	let points = [(200.0, 200.0), (500.0, 200.0), (350.0, 420.0), (650.0, 380.0)]
		.into_iter()
		.map(|(x, y)| GraphPoint { x, y })
		.collect();
	let links = [(0, 1), (1, 2), (2, 0)]
		.into_iter()
		.map(|(source, target)| GraphLink { source, target })
		.collect();

	GraphData { points, links }
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(sample_data);
	let (clear_count, set_clear_count) = signal(0usize);

	view! {
		<div class="fullscreen-graph">
			<GraphEditorCanvas data=graph_data fullscreen=true clear=clear_count />
			<div class="graph-overlay">
				<h1>"Graph Editor"</h1>
				<p class="subtitle">
					"Click to add or pick a point. Pick another to connect. Drag to move. Right-click to deselect, then again to delete."
				</p>
				<button on:click=move |_| set_clear_count.update(|n| *n += 1)>"Clear"</button>
			</div>
		</div>
	}
}
