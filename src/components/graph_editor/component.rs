use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::editor::{GraphEditor, HOVER_THRESHOLD, PointerButton};
use super::graph::Graph;
use super::point::Point;
use super::render;
use super::types::GraphData;

type SharedEditor = Rc<RefCell<Option<GraphEditor>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Pointer position in canvas-local pixels.
fn pointer_location(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn GraphEditorCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = HOVER_THRESHOLD)] hover_threshold: f64,
	/// Each change empties the graph.
	#[prop(optional, into)]
	clear: Option<Signal<usize>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let editor: SharedEditor = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (editor_init, animate_init, resize_cb_init) =
		(editor.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("no window; graph editor not started");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
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

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("canvas has no 2d context");
			return;
		};
		let graph = Graph::from_data(&data.get());
		info!(
			"graph editor mounted at {w}x{h} with {} points, {} segments",
			graph.points().len(),
			graph.segments().len()
		);
		*editor_init.borrow_mut() =
			Some(GraphEditor::new(graph, w, h).with_hover_threshold(hover_threshold));

		if fullscreen {
			let (editor_resize, canvas_resize) = (editor_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut e) = *editor_resize.borrow_mut() {
					e.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (editor_anim, animate_inner) = (editor_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref e) = *editor_anim.borrow() {
				render::render(e, &ctx);
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	if let Some(clear) = clear {
		let editor_clear = editor.clone();
		// Skip the first run so the initial data survives.
		Effect::new(move |prev: Option<usize>| {
			let count = clear.get();
			if prev.is_some() {
				if let Some(ref mut e) = *editor_clear.borrow_mut() {
					e.dispose();
				}
			}
			count
		});
	}

	let editor_md = editor.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (Some(loc), Some(button)) = (
			pointer_location(canvas_ref, &ev),
			PointerButton::from_dom(ev.button()),
		) else {
			return;
		};
		if let Some(ref mut e) = *editor_md.borrow_mut() {
			e.pointer_down(button, loc);
		}
	};

	let editor_mm = editor.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(loc) = pointer_location(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut e) = *editor_mm.borrow_mut() {
			e.pointer_move(loc);
		}
	};

	let editor_mu = editor.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut e) = *editor_mu.borrow_mut() {
			e.pointer_up();
		}
	};

	let editor_ml = editor.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut e) = *editor_ml.borrow_mut() {
			e.pointer_leave();
		}
	};

	// Secondary presses belong to the editor, not the browser menu.
	let on_contextmenu = |ev: MouseEvent| ev.prevent_default();

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:contextmenu=on_contextmenu
			style="display: block; cursor: crosshair;"
		/>
	}
}
