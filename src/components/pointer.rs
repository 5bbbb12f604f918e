//! Latest pointer position, shared between the decorative layers.
//!
//! Window listeners write, any number of animation loops read. Everything runs on
//! the browser's single thread, so a `Cell` is all the synchronization needed.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use crate::components::frame_loop::WindowListener;

/// A pointer position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Horizontal client coordinate.
	pub x: f64,
	/// Vertical client coordinate.
	pub y: f64,
}

impl Pointer {
	/// A pointer at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Distance from the pointer to `(x, y)`.
	pub fn distance_to(self, x: f64, y: f64) -> f64 {
		let (dx, dy) = (x - self.x, y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Shared handle on the most recent pointer position.
///
/// Clones share the same cell. The position is `None` until the first move event.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
	position: Rc<Cell<Option<Pointer>>>,
}

impl PointerTracker {
	/// A tracker with no position yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a pointer move. No filtering; smoothing is up to the reader.
	pub fn set(&self, x: f64, y: f64) {
		self.position.set(Some(Pointer::new(x, y)));
	}

	/// Most recent position, if the pointer has moved at all.
	pub fn position(&self) -> Option<Pointer> {
		self.position.get()
	}

	/// Forget the position, e.g. when the pointer leaves the window.
	pub fn clear(&self) {
		self.position.set(None);
	}
}

/// Feed `tracker` from window pointer events.
///
/// Moves record the client position; leaving the document (a `mouseout` with no related
/// target) clears it. Dropping the returned listeners stops tracking.
pub fn track_pointer(window: &Window, tracker: &PointerTracker) -> Vec<WindowListener> {
	let mover = tracker.clone();
	let leaver = tracker.clone();
	let on_move = WindowListener::new(window, "mousemove", move |ev| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			mover.set(ev.client_x() as f64, ev.client_y() as f64);
		}
	});
	let on_leave = WindowListener::new(window, "mouseout", move |ev| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			if ev.related_target().is_none() {
				leaver.clear();
			}
		}
	});
	on_move.into_iter().chain(on_leave).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clones_observe_the_same_position() {
		let writer = PointerTracker::new();
		let reader = writer.clone();
		assert_eq!(reader.position(), None);

		writer.set(10.0, 20.0);
		writer.set(30.0, 40.0);
		assert_eq!(reader.position(), Some(Pointer::new(30.0, 40.0)));

		reader.clear();
		assert_eq!(writer.position(), None);
	}

	#[test]
	fn distance_is_euclidean() {
		assert_eq!(Pointer::new(0.0, 0.0).distance_to(3.0, 4.0), 5.0);
	}
}
