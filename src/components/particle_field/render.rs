//! Per-frame drawing of the particle field.
//!
//! A frame runs in a fixed order so particles end up on top of their lines and every
//! line uses positions from the same frame:
//! 1. Clear (or paint the backdrop gradient)
//! 2. Particle-to-particle lines
//! 3. Particle-to-pointer lines
//! 4. Advance the simulation
//! 5. Particles
//!
//! Drawing goes through [`Painter`], implemented for the browser canvas by
//! [`CanvasPainter`].

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::ParticleField;
use super::theme::{BackgroundStyle, Color, FieldTheme};
use crate::components::pointer::Pointer;

/// Drawing surface the frame is rendered onto.
pub trait Painter {
	/// The surface now covers `width` x `height` pixels.
	fn resize(&mut self, width: f64, height: f64);
	/// Erase the whole surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Paint the radial backdrop over the whole surface.
	fn fill_backdrop(&mut self, width: f64, height: f64, style: &BackgroundStyle);
	/// Stroke a straight line `width` pixels wide.
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	/// Filled circle, optionally blurred by `glow` pixels.
	fn dot(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: f64);
}

/// Renders one frame and advances the simulation in between.
pub fn render_frame<P: Painter>(
	field: &mut ParticleField,
	pointer: Option<Pointer>,
	theme: &FieldTheme,
	painter: &mut P,
) {
	let (width, height) = (field.width(), field.height());
	let config = field.config().clone();

	if config.backdrop {
		painter.fill_backdrop(width, height, &theme.background);
	} else {
		painter.clear(width, height);
	}

	for link in field.connections() {
		let color = theme.connection.fade(link.strength);
		painter.line(link.from, link.to, color, config.connection_width);
	}

	if let Some(pointer) = pointer {
		for link in field.pointer_links(pointer) {
			let color = theme.pointer_link.fade(link.strength);
			painter.line(link.from, link.to, color, config.pointer_width);
		}
	}

	field.step(pointer);

	for p in &field.particles {
		let color = p.color.with_alpha((p.opacity * theme.dot_alpha).clamp(0.0, 1.0));
		painter.dot(p.x, p.y, p.radius, color, config.glow_blur);
	}
}

/// [`Painter`] backed by a 2D canvas context.
pub struct CanvasPainter {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
	/// `None` when the canvas has no 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Painter for CanvasPainter {
	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_backdrop(&mut self, width: f64, height: f64, style: &BackgroundStyle) {
		let (cx, cy) = (width / 2.0, height / 2.0);
		match self
			.ctx
			.create_radial_gradient(cx, cy, 0.0, cx, cy, (width * style.reach).max(1.0))
		{
			Ok(gradient) => {
				let _ = gradient.add_color_stop(0.0, &style.inner.to_css());
				let _ = gradient.add_color_stop(0.5, &style.middle.to_css());
				let _ = gradient.add_color_stop(1.0, &style.outer.to_css());
				#[allow(deprecated)]
				self.ctx.set_fill_style(&gradient);
			}
			Err(_) => self.ctx.set_fill_style_str(&style.outer.to_css()),
		}
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.ctx.begin_path();
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}

	fn dot(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: f64) {
		if glow > 0.0 {
			self.ctx.set_shadow_blur(glow);
			self.ctx.set_shadow_color(&color.to_css());
		}

		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();

		if glow > 0.0 {
			self.ctx.set_shadow_blur(0.0);
		}
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// Everything a frame asked the painter to do.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Resize(f64, f64),
		Clear,
		Backdrop,
		Line {
			from: (f64, f64),
			to: (f64, f64),
			color: Color,
			width: f64,
		},
		Dot {
			x: f64,
			y: f64,
			color: Color,
		},
	}

	#[derive(Debug, Default)]
	pub struct RecordingPainter {
		pub ops: Vec<Op>,
	}

	impl RecordingPainter {
		pub fn lines(&self) -> Vec<&Op> {
			self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
		}

		pub fn dots(&self) -> Vec<&Op> {
			self.ops.iter().filter(|op| matches!(op, Op::Dot { .. })).collect()
		}
	}

	impl Painter for RecordingPainter {
		fn resize(&mut self, width: f64, height: f64) {
			self.ops.push(Op::Resize(width, height));
		}

		fn clear(&mut self, _width: f64, _height: f64) {
			self.ops.push(Op::Clear);
		}

		fn fill_backdrop(&mut self, _width: f64, _height: f64, _style: &BackgroundStyle) {
			self.ops.push(Op::Backdrop);
		}

		fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
			self.ops.push(Op::Line {
				from,
				to,
				color,
				width,
			});
		}

		fn dot(&mut self, x: f64, y: f64, _radius: f64, color: Color, _glow: f64) {
			self.ops.push(Op::Dot { x, y, color });
		}
	}
}

#[cfg(test)]
mod tests {
	use super::testing::{Op, RecordingPainter};
	use super::*;
	use crate::components::particle_field::config::FieldConfig;
	use crate::components::particle_field::particles::Particle;

	fn two_particles(threshold: f64) -> ParticleField {
		let mut field = ParticleField::new(
			FieldConfig {
				particle_count: 2,
				connection_distance: threshold,
				..FieldConfig::default()
			},
			&FieldTheme::dark().palette,
			800.0,
			600.0,
			3,
		);
		let still = |x: f64, y: f64| Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			opacity: 0.5,
			color: Color::rgb(139, 92, 246),
		};
		field.particles = vec![still(100.0, 100.0), still(150.0, 100.0)];
		field
	}

	#[test]
	fn two_particles_fifty_apart_draw_one_faded_line() {
		let theme = FieldTheme::dark();
		let mut field = two_particles(150.0);
		let mut painter = RecordingPainter::default();

		render_frame(&mut field, None, &theme, &mut painter);

		let lines = painter.lines();
		assert_eq!(lines.len(), 1);
		let Op::Line { color, .. } = lines[0] else {
			unreachable!()
		};
		let expected = theme.connection.a * (1.0 - 50.0 / 150.0);
		assert!((color.a - expected).abs() < 1e-12);
		assert!(color.same_rgb(theme.connection));
	}

	#[test]
	fn frame_order_is_clear_lines_then_dots() {
		let theme = FieldTheme::dark();
		let mut field = two_particles(150.0);
		let mut painter = RecordingPainter::default();

		render_frame(&mut field, Some(Pointer::new(125.0, 100.0)), &theme, &mut painter);

		assert_eq!(painter.ops[0], Op::Clear);
		// one connection, two pointer links, two dots
		assert_eq!(painter.lines().len(), 3);
		assert_eq!(painter.dots().len(), 2);
		let first_dot = painter
			.ops
			.iter()
			.position(|op| matches!(op, Op::Dot { .. }))
			.unwrap();
		assert!(painter.ops[first_dot..].iter().all(|op| matches!(op, Op::Dot { .. })));
		assert!(matches!(
			painter.ops[3],
			Op::Line { to: (125.0, 100.0), .. }
		));
	}

	#[test]
	fn backdrop_replaces_clear_and_dots_use_theme_alpha() {
		let theme = FieldTheme::light();
		let mut field = ParticleField::new(
			FieldConfig {
				particle_count: 1,
				backdrop: true,
				..FieldConfig::default()
			},
			&theme.palette,
			100.0,
			100.0,
			9,
		);
		let opacity = field.particles[0].opacity;
		let mut painter = RecordingPainter::default();

		render_frame(&mut field, None, &theme, &mut painter);

		assert_eq!(painter.ops[0], Op::Backdrop);
		let Op::Dot { color, .. } = painter.dots()[0] else {
			unreachable!()
		};
		assert!((color.a - opacity * theme.dot_alpha).abs() < 1e-12);
	}

	#[test]
	fn empty_field_still_clears() {
		let mut field = ParticleField::new(
			FieldConfig {
				particle_count: 0,
				..FieldConfig::default()
			},
			&FieldTheme::dark().palette,
			100.0,
			100.0,
			1,
		);
		let mut painter = RecordingPainter::default();
		render_frame(&mut field, Some(Pointer::new(5.0, 5.0)), &FieldTheme::dark(), &mut painter);
		assert_eq!(painter.ops, vec![Op::Clear]);
	}
}
