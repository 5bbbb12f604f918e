//! One canvas session: field, theme, painter and pointer bundled together.
//!
//! The browser component feeds frames and events into a [`FieldEngine`]; once torn
//! down the engine ignores both, so a late callback can never touch the canvas.

use log::{debug, info};

use super::config::FieldConfig;
use super::particles::ParticleField;
use super::render::{Painter, render_frame};
use super::theme::{FieldTheme, ThemeMode};
use crate::components::pointer::PointerTracker;

/// Host signals the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
	/// The viewport changed size; the particle set is rebuilt.
	Resize {
		/// New width in px.
		width: f64,
		/// New height in px.
		height: f64,
	},
	/// The pointer moved (client coordinates).
	PointerMove {
		/// Horizontal client coordinate.
		x: f64,
		/// Vertical client coordinate.
		y: f64,
	},
	/// The page theme changed; particles are recolored in place.
	Theme(ThemeMode),
}

/// Owns the simulation and drawing surface of one mounted canvas.
pub struct FieldEngine<P: Painter> {
	field: ParticleField,
	theme: FieldTheme,
	painter: P,
	pointer: PointerTracker,
	live: bool,
	frames: u64,
}

impl<P: Painter> FieldEngine<P> {
	/// Seed a field at `width` x `height` and size the painter to match.
	pub fn new(
		config: FieldConfig,
		mode: ThemeMode,
		width: f64,
		height: f64,
		seed: u64,
		mut painter: P,
		pointer: PointerTracker,
	) -> Self {
		let theme = FieldTheme::for_mode(mode);
		let field = ParticleField::new(config, &theme.palette, width, height, seed);
		painter.resize(field.width(), field.height());
		info!(
			"portfolio: particle field started with {} particles at {}x{}",
			field.particles.len(),
			field.width(),
			field.height()
		);

		Self {
			field,
			theme,
			painter,
			pointer,
			live: true,
			frames: 0,
		}
	}

	/// Draw one frame. Returns `false` once torn down.
	pub fn frame(&mut self) -> bool {
		if !self.live {
			return false;
		}
		let pointer = self.pointer.position();
		render_frame(&mut self.field, pointer, &self.theme, &mut self.painter);
		self.frames += 1;
		true
	}

	/// Apply a host event. Returns `false` (and changes nothing) once torn down.
	pub fn handle(&mut self, event: FieldEvent) -> bool {
		if !self.live {
			return false;
		}
		match event {
			FieldEvent::Resize { width, height } => {
				self.field.reset(width, height);
				self.painter.resize(self.field.width(), self.field.height());
				debug!("portfolio: particle field resized to {}x{}", width, height);
			}
			FieldEvent::PointerMove { x, y } => self.pointer.set(x, y),
			FieldEvent::Theme(mode) => {
				if mode != self.theme.mode {
					self.theme = FieldTheme::for_mode(mode);
					self.field.set_palette(&self.theme.palette);
					debug!("portfolio: particle field switched to {} palette", mode.as_str());
				}
			}
		}
		true
	}

	/// Stop reacting to frames and events for good.
	pub fn teardown(&mut self) {
		if self.live {
			self.live = false;
			info!("portfolio: particle field stopped after {} frames", self.frames);
		}
	}

	/// `false` after [`Self::teardown`].
	pub fn is_live(&self) -> bool {
		self.live
	}

	/// The particles being drawn.
	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// The active theme.
	pub fn theme(&self) -> &FieldTheme {
		&self.theme
	}

	/// The painter frames go to.
	pub fn painter(&self) -> &P {
		&self.painter
	}

	/// Frames drawn so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::render::testing::{Op, RecordingPainter};
	use crate::components::pointer::Pointer;

	fn engine(mode: ThemeMode) -> FieldEngine<RecordingPainter> {
		FieldEngine::new(
			FieldConfig::default(),
			mode,
			1024.0,
			768.0,
			42,
			RecordingPainter::default(),
			PointerTracker::new(),
		)
	}

	#[test]
	fn new_engine_sizes_the_surface() {
		let engine = engine(ThemeMode::Dark);
		assert_eq!(engine.painter().ops, vec![Op::Resize(1024.0, 768.0)]);
		assert_eq!(engine.frames(), 0);
	}

	#[test]
	fn resize_rebuilds_particles_inside_new_viewport() {
		let mut engine = engine(ThemeMode::Dark);
		for _ in 0..10 {
			engine.frame();
		}

		assert!(engine.handle(FieldEvent::Resize {
			width: 200.0,
			height: 100.0
		}));

		let field = engine.field();
		assert_eq!(field.particles.len(), FieldConfig::default().particle_count);
		assert!(
			field
				.particles
				.iter()
				.all(|p| (0.0..=200.0).contains(&p.x) && (0.0..=100.0).contains(&p.y))
		);
		assert_eq!(engine.painter().ops.last(), Some(&Op::Resize(200.0, 100.0)));
	}

	#[test]
	fn theme_toggle_recolors_without_moving_anything() {
		let mut engine = engine(ThemeMode::Dark);
		engine.frame();
		let before = engine.field().particles.clone();

		engine.handle(FieldEvent::Theme(ThemeMode::Light));

		let light = FieldTheme::light();
		for (old, new) in before.iter().zip(&engine.field().particles) {
			assert_eq!((old.x, old.y, old.vx, old.vy), (new.x, new.y, new.vx, new.vy));
			assert!(light.owns(new.color));
		}

		let drawn_from = engine.painter().ops.len();
		engine.frame();
		let fresh = &engine.painter().ops[drawn_from..];
		for op in fresh {
			if let Op::Dot { color, .. } = op {
				assert!(light.owns(*color));
			}
		}
	}

	#[test]
	fn pointer_events_feed_the_shared_tracker() {
		let tracker = PointerTracker::new();
		let mut engine = FieldEngine::new(
			FieldConfig::default(),
			ThemeMode::Dark,
			300.0,
			300.0,
			1,
			RecordingPainter::default(),
			tracker.clone(),
		);
		engine.handle(FieldEvent::PointerMove { x: 12.0, y: 34.0 });
		assert_eq!(tracker.position(), Some(Pointer::new(12.0, 34.0)));
	}

	#[test]
	fn nothing_happens_after_teardown() {
		let tracker = PointerTracker::new();
		let mut engine = FieldEngine::new(
			FieldConfig::default(),
			ThemeMode::Dark,
			640.0,
			480.0,
			5,
			RecordingPainter::default(),
			tracker.clone(),
		);
		engine.frame();
		engine.teardown();

		let ops = engine.painter().ops.len();
		let particles = engine.field().particles.clone();

		assert!(!engine.frame());
		assert!(!engine.handle(FieldEvent::Resize {
			width: 10.0,
			height: 10.0
		}));
		assert!(!engine.handle(FieldEvent::PointerMove { x: 1.0, y: 1.0 }));
		assert!(!engine.handle(FieldEvent::Theme(ThemeMode::Light)));

		assert!(!engine.is_live());
		assert_eq!(engine.painter().ops.len(), ops);
		assert_eq!(engine.field().particles, particles);
		assert_eq!(engine.field().width(), 640.0);
		assert_eq!(engine.theme().mode, ThemeMode::Dark);
		assert_eq!(tracker.position(), None);
		assert_eq!(engine.frames(), 1);
	}
}
