//! Start/stop handles for browser animation frames and window listeners.
//!
//! Both handles undo their registration when dropped, so a component only has to keep
//! them in a [`cleanup_slot`] to guarantee nothing outlives its unmount.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

struct LoopState {
	running: Cell<bool>,
	pending: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.pending.set(Some(id)),
				Err(_) => self.running.set(false),
			}
		}
	}
}

/// A `requestAnimationFrame` chain calling `tick` once per display refresh.
///
/// The chain stops on [`AnimationLoop::cancel`] or when the handle is dropped. The
/// frame closure only holds a weak reference to the loop state, so dropping the handle
/// also frees the closure and everything it captured.
pub struct AnimationLoop {
	state: Rc<LoopState>,
}

impl AnimationLoop {
	/// Schedule the first frame. `tick` receives the frame timestamp in milliseconds.
	/// Returns `None` outside a browser window.
	pub fn start(mut tick: impl FnMut(f64) + 'static) -> Option<Self> {
		web_sys::window()?;

		let state = Rc::new(LoopState {
			running: Cell::new(true),
			pending: Cell::new(None),
			callback: RefCell::new(None),
		});
		let weak: Weak<LoopState> = Rc::downgrade(&state);
		*state.callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			let Some(state) = weak.upgrade() else {
				return;
			};
			state.pending.set(None);
			if !state.running.get() {
				return;
			}
			tick(timestamp);
			if state.running.get() {
				state.schedule();
			}
		}));
		state.schedule();

		Some(Self { state })
	}

	/// Stop the chain and cancel the frame already requested, if any.
	pub fn cancel(&self) {
		self.state.running.set(false);
		if let Some(id) = self.state.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}

	/// `false` once cancelled or dropped.
	pub fn is_running(&self) -> bool {
		self.state.running.get()
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// An event listener on the window, removed when dropped.
pub struct WindowListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	/// Listen for `event` on `window`; `None` if the browser refuses the listener.
	pub fn new(window: &Window, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
		let target = EventTarget::from(window.clone());
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
			Ok(()) => Some(Self {
				target,
				event,
				callback,
			}),
			Err(e) => {
				warn!("portfolio: could not listen for {}: {:?}", event, e);
				None
			}
		}
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// A slot emptied when the current reactive owner is cleaned up.
///
/// Whatever is stored in it (loops, listeners, sessions) is dropped on unmount.
pub fn cleanup_slot<T: 'static>() -> StoredValue<Option<T>, LocalStorage> {
	let slot = StoredValue::new_local(None);
	on_cleanup(move || {
		slot.try_update_value(|held| *held = None);
	});
	slot
}

/// Current inner size of the window in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}
