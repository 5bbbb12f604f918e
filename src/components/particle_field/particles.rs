//! Drifting particles joined by proximity lines.
//!
//! The field owns its particles, its bounds, its palette and a seeded random source,
//! so every canvas mount (and every test) gets an independent simulation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::{FieldConfig, Interaction, Range};
use super::theme::Color;
use crate::components::pointer::Pointer;

/// Used when a palette is empty.
const FALLBACK_COLOR: Color = Color::rgb(255, 255, 255);

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in px.
	pub x: f64,
	/// Vertical position in px.
	pub y: f64,
	/// Horizontal velocity in px per frame.
	pub vx: f64,
	/// Vertical velocity in px per frame.
	pub vy: f64,
	/// Dot radius in px.
	pub radius: f64,
	/// Own opacity in `[0, 1]`, before the theme's dot alpha.
	pub opacity: f64,
	/// Palette color.
	pub color: Color,
}

impl Particle {
	/// Euclidean distance between centers.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Velocity magnitude in px per frame.
	pub fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}

/// A line to draw, with its falloff strength in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Start point.
	pub from: (f64, f64),
	/// End point.
	pub to: (f64, f64),
	/// `1 - distance / threshold`; multiply by the base alpha to get the line alpha.
	pub strength: f64,
}

/// Linear falloff: `Some(1 - distance / threshold)` strictly inside the threshold,
/// `None` at or beyond it.
pub fn falloff(distance: f64, threshold: f64) -> Option<f64> {
	if distance < threshold {
		Some(1.0 - distance / threshold)
	} else {
		None
	}
}

/// Manages the particle set for one canvas session.
pub struct ParticleField {
	/// Current particles, in draw order.
	pub particles: Vec<Particle>,
	config: FieldConfig,
	palette: Vec<Color>,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl ParticleField {
	/// Sanitize `config` and scatter particles over `width` x `height`; equal seeds give equal fields.
	pub fn new(config: FieldConfig, palette: &[Color], width: f64, height: f64, seed: u64) -> Self {
		let config = config.sanitized();
		let mut field = Self {
			particles: Vec::with_capacity(config.particle_count),
			config,
			palette: palette.to_vec(),
			width: 0.0,
			height: 0.0,
			rng: SmallRng::seed_from_u64(seed),
		};
		field.reset(width, height);
		field
	}

	/// The sanitized configuration.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Canvas width in px.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Canvas height in px.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Throw away every particle and spawn a fresh set inside the new bounds.
	pub fn reset(&mut self, width: f64, height: f64) {
		self.width = sanitize_extent(width);
		self.height = sanitize_extent(height);
		self.particles.clear();
		for _ in 0..self.config.particle_count {
			let particle = self.spawn();
			self.particles.push(particle);
		}
	}

	fn spawn(&mut self) -> Particle {
		let speed = self.config.speed;
		Particle {
			x: self.rng.gen_range(0.0..=self.width),
			y: self.rng.gen_range(0.0..=self.height),
			vx: self.rng.gen_range(-speed..=speed),
			vy: self.rng.gen_range(-speed..=speed),
			radius: sample(&mut self.rng, self.config.radius),
			opacity: sample(&mut self.rng, self.config.opacity),
			color: self.pick_color(),
		}
	}

	fn pick_color(&mut self) -> Color {
		if self.palette.is_empty() {
			return FALLBACK_COLOR;
		}
		self.palette[self.rng.gen_range(0..self.palette.len())]
	}

	/// Switch palettes: every particle gets a random color from `palette`, nothing else
	/// about it changes.
	pub fn set_palette(&mut self, palette: &[Color]) {
		self.palette = palette.to_vec();
		for i in 0..self.particles.len() {
			let color = self.pick_color();
			self.particles[i].color = color;
		}
	}

	/// Every unordered pair closer than the connection distance.
	pub fn connections(&self) -> impl Iterator<Item = Link> {
		let particles = &self.particles;
		let threshold = self.config.connection_distance;
		particles.iter().enumerate().flat_map(move |(i, a)| {
			particles[i + 1..].iter().filter_map(move |b| {
				falloff(a.distance_to(b), threshold).map(|strength| Link {
					from: (a.x, a.y),
					to: (b.x, b.y),
					strength,
				})
			})
		})
	}

	/// Every particle closer to the pointer than the pointer distance.
	pub fn pointer_links(&self, pointer: Pointer) -> impl Iterator<Item = Link> {
		let threshold = self.config.pointer_distance;
		self.particles.iter().filter_map(move |p| {
			falloff(pointer.distance_to(p.x, p.y), threshold).map(|strength| Link {
				from: (p.x, p.y),
				to: (pointer.x, pointer.y),
				strength,
			})
		})
	}

	/// Advance the simulation by one frame.
	pub fn step(&mut self, pointer: Option<Pointer>) {
		let boundary = self.config.boundary;
		let repel = match self.config.interaction {
			Interaction::Links => None,
			Interaction::Repel {
				radius,
				strength,
				damping,
			} => Some((radius, strength, damping)),
		};

		for p in &mut self.particles {
			if let (Some((radius, strength, _)), Some(ptr)) = (repel, pointer) {
				let (dx, dy) = (p.x - ptr.x, p.y - ptr.y);
				let dist = (dx * dx + dy * dy).sqrt();
				// No direction to push in at zero distance
				if dist > 0.0 && dist < radius {
					let force = (radius - dist) / radius;
					p.vx += dx / dist * force * strength;
					p.vy += dy / dist * force * strength;
				}
			}

			p.x += p.vx;
			p.y += p.vy;

			if let Some((_, _, damping)) = repel {
				p.vx *= damping;
				p.vy *= damping;
			}

			boundary.apply(&mut p.x, &mut p.vx, self.width);
			boundary.apply(&mut p.y, &mut p.vy, self.height);
		}
	}
}

fn sanitize_extent(extent: f64) -> f64 {
	if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}

fn sample(rng: &mut SmallRng, range: Range) -> f64 {
	rng.gen_range(range.min..=range.max)
}
