//! Leptos component wrapping the particle field canvas.
//!
//! On mount the component sizes the canvas to the viewport, builds a [`FieldEngine`],
//! registers resize (and, without a shared tracker, pointer) listeners and starts an
//! animation loop. Everything is held in a cleanup slot, so unmounting cancels the
//! pending frame and removes the listeners.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::config::FieldConfig;
use super::engine::{FieldEngine, FieldEvent};
use super::render::CanvasPainter;
use super::theme::ThemeMode;
use crate::components::frame_loop::{AnimationLoop, WindowListener, cleanup_slot, viewport_size};
use crate::components::pointer::PointerTracker;

/// Everything kept alive while the canvas is mounted.
struct FieldSession {
	engine: Rc<RefCell<FieldEngine<CanvasPainter>>>,
	frame_loop: Option<AnimationLoop>,
	listeners: Vec<WindowListener>,
}

impl Drop for FieldSession {
	fn drop(&mut self) {
		if let Some(ref frame_loop) = self.frame_loop {
			frame_loop.cancel();
		}
		self.listeners.clear();
		self.engine.borrow_mut().teardown();
	}
}

/// Renders the animated particle field on a fixed, full-viewport canvas.
///
/// Pass the page theme via `theme`; a change recolors existing particles without
/// restarting the simulation. Pass a shared `pointer` tracker when another layer
/// already listens for pointer moves, otherwise the component listens itself.
#[component]
pub fn ParticleField(
	/// Page theme; drives the palette.
	#[prop(into)]
	theme: Signal<ThemeMode>,
	/// Field settings, defaults when omitted.
	#[prop(optional)]
	config: Option<FieldConfig>,
	/// Shared pointer tracker; the component listens itself when omitted.
	#[prop(optional)]
	pointer: Option<PointerTracker>,
	/// Canvas opacity.
	#[prop(default = 1.0)]
	opacity: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session = cleanup_slot::<FieldSession>();
	let config = config.unwrap_or_default();
	let owns_pointer = pointer.is_none();
	let tracker = pointer.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			return;
		};
		let Some(painter) = CanvasPainter::new(canvas) else {
			warn!("portfolio: canvas has no 2d context, particle field disabled");
			return;
		};

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let engine = Rc::new(RefCell::new(FieldEngine::new(
			config.clone(),
			theme.get_untracked(),
			w,
			h,
			seed,
			painter,
			tracker.clone(),
		)));

		let mut listeners = Vec::new();
		let engine_resize = engine.clone();
		listeners.extend(WindowListener::new(&window, "resize", move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Some((width, height)) = viewport_size(&win) {
				engine_resize
					.borrow_mut()
					.handle(FieldEvent::Resize { width, height });
			}
		}));

		if owns_pointer {
			let engine_pointer = engine.clone();
			listeners.extend(WindowListener::new(&window, "mousemove", move |ev| {
				if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
					engine_pointer.borrow_mut().handle(FieldEvent::PointerMove {
						x: ev.client_x() as f64,
						y: ev.client_y() as f64,
					});
				}
			}));
		}

		let engine_anim = engine.clone();
		let frame_loop = AnimationLoop::start(move |_| {
			engine_anim.borrow_mut().frame();
		});

		session.set_value(Some(FieldSession {
			engine,
			frame_loop,
			listeners,
		}));
	});

	Effect::new(move |_| {
		let mode = theme.get();
		session.with_value(|s| {
			if let Some(s) = s {
				s.engine.borrow_mut().handle(FieldEvent::Theme(mode));
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			aria-hidden="true"
			style=format!(
				"position: fixed; inset: 0; pointer-events: none; z-index: 0; opacity: {opacity};",
			)
		/>
	}
}
