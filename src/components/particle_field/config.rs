//! Tunable parameters for the particle field.
//!
//! Everything that shapes the simulation lives in [`FieldConfig`]: particle count,
//! distance thresholds, sampling ranges, edge handling and pointer interaction.
//! The config deserializes from JSON with every field optional, so a host page can
//! override only what it cares about.
//!
//! A host page can start from a named preset and override single fields:
//!
//! ```json
//! { "preset": "constellation", "particle_count": 120 }
//! ```
//!
//! # Edge handling
//!
//! - [`BoundaryPolicy::Reflect`]: a particle crossing an edge is clamped back onto it
//!   and the matching velocity component is pointed inwards.
//! - [`BoundaryPolicy::Wrap`]: a particle crossing an edge reappears on the opposite one.
//!
//! # Pointer interaction
//!
//! - [`Interaction::Links`]: particles near the pointer get a line to it, nothing else.
//! - [`Interaction::Repel`]: additionally pushes nearby particles away and damps every
//!   particle's velocity each frame.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Most particles a single canvas will simulate; the link pass is quadratic.
pub const MAX_PARTICLES: usize = 1_000;
/// Largest accepted speed, in px per frame.
pub const MAX_SPEED: f64 = 50.0;
/// Largest accepted dot radius, in px.
pub const MAX_RADIUS: f64 = 100.0;
/// Largest accepted link, pointer or repulsion distance, in px.
pub const MAX_DISTANCE: f64 = 10_000.0;
/// Largest accepted stroke width or glow blur, in px.
pub const MAX_STROKE: f64 = 100.0;

/// How particle positions are kept inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
	/// Bounce off the edges.
	#[default]
	Reflect,
	/// Leave through one edge, enter through the opposite one.
	Wrap,
}

impl BoundaryPolicy {
	/// Bring one coordinate back into `[0, extent]`, adjusting its velocity if the
	/// policy requires it.
	pub fn apply(self, pos: &mut f64, vel: &mut f64, extent: f64) {
		let extent = extent.max(0.0);
		match self {
			BoundaryPolicy::Reflect => {
				if *pos < 0.0 {
					*pos = 0.0;
					*vel = vel.abs();
				} else if *pos > extent {
					*pos = extent;
					*vel = -vel.abs();
				}
			}
			BoundaryPolicy::Wrap => {
				if *pos < 0.0 {
					*pos = extent;
				} else if *pos > extent {
					*pos = 0.0;
				}
			}
		}
		// NaN compares false everywhere above
		if !pos.is_finite() {
			*pos = 0.0;
		}
	}
}

/// How particles react to the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Interaction {
	/// Lines to the pointer only.
	#[default]
	Links,
	/// Lines plus a push away from the pointer.
	Repel {
		/// Distance within which the push applies.
		#[serde(default = "default_repel_radius")]
		radius: f64,
		/// Velocity added per frame at zero distance.
		#[serde(default = "default_repel_strength")]
		strength: f64,
		/// Per-frame velocity multiplier, in `[0, 1]`.
		#[serde(default = "default_repel_damping")]
		damping: f64,
	},
}

fn default_repel_radius() -> f64 {
	150.0
}

fn default_repel_strength() -> f64 {
	0.2
}

fn default_repel_damping() -> f64 {
	0.99
}

impl Interaction {
	/// The repulsion variant with its default tuning.
	pub fn repel() -> Self {
		Interaction::Repel {
			radius: default_repel_radius(),
			strength: default_repel_strength(),
			damping: default_repel_damping(),
		}
	}
}

/// An inclusive `min..=max` sampling range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
	/// Lower bound.
	pub min: f64,
	/// Upper bound.
	pub max: f64,
}

impl Range {
	/// `min..=max`; reversed bounds are swapped when sanitized.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	fn ordered(self) -> Self {
		if self.min <= self.max {
			self
		} else {
			Self::new(self.max, self.min)
		}
	}
}

/// Complete particle field configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles per canvas session.
	pub particle_count: usize,
	/// Particles closer than this are joined by a line.
	pub connection_distance: f64,
	/// Particles closer than this to the pointer are joined to it by a line.
	pub pointer_distance: f64,
	/// Half-width of the symmetric velocity range, in px per frame.
	pub speed: f64,
	/// Dot radius range in px.
	pub radius: Range,
	/// Dot opacity range.
	pub opacity: Range,
	/// What happens at the canvas edges.
	pub boundary: BoundaryPolicy,
	/// How particles react to the pointer.
	pub interaction: Interaction,
	/// Stroke width of particle-to-particle lines.
	pub connection_width: f64,
	/// Stroke width of particle-to-pointer lines.
	pub pointer_width: f64,
	/// Shadow blur around each dot (0 = none).
	pub glow_blur: f64,
	/// Paint the theme's radial gradient instead of clearing to transparent.
	pub backdrop: bool,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 60,
			connection_distance: 120.0,
			pointer_distance: 150.0,
			speed: 0.2,
			radius: Range::new(1.0, 3.5),
			opacity: Range::new(0.2, 0.6),
			boundary: BoundaryPolicy::Reflect,
			interaction: Interaction::Links,
			connection_width: 0.5,
			pointer_width: 0.8,
			glow_blur: 0.0,
			backdrop: false,
		}
	}
}

impl FieldConfig {
	/// Denser, repelling variant with a painted backdrop and glowing dots.
	pub fn constellation() -> Self {
		Self {
			particle_count: 80,
			connection_distance: 150.0,
			pointer_distance: 200.0,
			speed: 0.25,
			radius: Range::new(1.0, 4.0),
			opacity: Range::new(0.2, 0.7),
			boundary: BoundaryPolicy::Wrap,
			interaction: Interaction::repel(),
			connection_width: 0.5,
			pointer_width: 1.0,
			glow_blur: 15.0,
			backdrop: true,
		}
	}

	/// Named starting point for a JSON override: `"default"` or `"constellation"`.
	pub fn preset(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default()),
			"constellation" => Some(Self::constellation()),
			_ => None,
		}
	}

	/// Parse a (possibly partial) JSON override and sanitize it.
	///
	/// An optional `"preset"` key picks the base the other keys override; without it the
	/// base is [`FieldConfig::default`].
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let overrides: Value = serde_json::from_str(json)?;
		let Value::Object(mut overrides) = overrides else {
			return Err(serde_json::Error::custom("field config must be a JSON object"));
		};
		let base = match overrides.remove("preset") {
			None => Self::default(),
			Some(Value::String(name)) => Self::preset(&name)
				.ok_or_else(|| serde_json::Error::custom(format!("unknown field config preset {name:?}")))?,
			Some(other) => return Err(serde_json::Error::custom(format!("preset must be a string, got {other}"))),
		};

		let mut merged = serde_json::to_value(base)?;
		if let Value::Object(ref mut fields) = merged {
			fields.extend(overrides);
		}
		serde_json::from_value::<Self>(merged).map(Self::sanitized)
	}

	/// Clamp values into ranges the simulation can handle.
	pub fn sanitized(mut self) -> Self {
		let bounded = |v: f64, max: f64| if v.is_finite() { v.clamp(0.0, max) } else { 0.0 };
		let unit = |v: f64| bounded(v, 1.0);

		self.particle_count = self.particle_count.min(MAX_PARTICLES);
		self.connection_distance = bounded(self.connection_distance, MAX_DISTANCE);
		self.pointer_distance = bounded(self.pointer_distance, MAX_DISTANCE);
		self.speed = bounded(self.speed, MAX_SPEED);
		self.connection_width = bounded(self.connection_width, MAX_STROKE);
		self.pointer_width = bounded(self.pointer_width, MAX_STROKE);
		self.glow_blur = bounded(self.glow_blur, MAX_STROKE);
		self.radius = Range::new(bounded(self.radius.min, MAX_RADIUS), bounded(self.radius.max, MAX_RADIUS)).ordered();
		self.opacity = Range::new(unit(self.opacity.min), unit(self.opacity.max)).ordered();

		if let Interaction::Repel {
			radius,
			strength,
			damping,
		} = self.interaction
		{
			self.interaction = Interaction::Repel {
				radius: bounded(radius, MAX_DISTANCE),
				strength: bounded(strength, MAX_SPEED),
				damping: if damping.is_finite() { damping.clamp(0.0, 1.0) } else { 1.0 },
			};
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reflect_clamps_and_turns_velocity_inwards() {
		let (mut pos, mut vel) = (-3.0, -0.5);
		BoundaryPolicy::Reflect.apply(&mut pos, &mut vel, 100.0);
		assert_eq!((pos, vel), (0.0, 0.5));

		let (mut pos, mut vel) = (104.0, 0.5);
		BoundaryPolicy::Reflect.apply(&mut pos, &mut vel, 100.0);
		assert_eq!((pos, vel), (100.0, -0.5));
	}

	#[test]
	fn wrap_teleports_and_keeps_velocity() {
		let (mut pos, mut vel) = (-0.1, -0.4);
		BoundaryPolicy::Wrap.apply(&mut pos, &mut vel, 50.0);
		assert_eq!((pos, vel), (50.0, -0.4));

		let (mut pos, mut vel) = (50.1, 0.4);
		BoundaryPolicy::Wrap.apply(&mut pos, &mut vel, 50.0);
		assert_eq!((pos, vel), (0.0, 0.4));
	}

	#[test]
	fn in_range_positions_are_untouched() {
		for policy in [BoundaryPolicy::Reflect, BoundaryPolicy::Wrap] {
			let (mut pos, mut vel) = (25.0, 0.3);
			policy.apply(&mut pos, &mut vel, 50.0);
			assert_eq!((pos, vel), (25.0, 0.3));
		}
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config = FieldConfig::from_json(
			r#"{ "particle_count": 12, "boundary": "wrap", "interaction": { "mode": "repel", "strength": 0.5 } }"#,
		)
		.unwrap();

		assert_eq!(config.particle_count, 12);
		assert_eq!(config.boundary, BoundaryPolicy::Wrap);
		assert_eq!(
			config.interaction,
			Interaction::Repel {
				radius: 150.0,
				strength: 0.5,
				damping: 0.99
			}
		);
		assert_eq!(config.connection_distance, FieldConfig::default().connection_distance);
	}

	#[test]
	fn sanitize_fixes_nonsense_values() {
		let config = FieldConfig {
			connection_distance: -5.0,
			speed: f64::NAN,
			radius: Range::new(4.0, 1.0),
			opacity: Range::new(-1.0, 3.0),
			interaction: Interaction::Repel {
				radius: 100.0,
				strength: 1.0,
				damping: 1.7,
			},
			..FieldConfig::default()
		}
		.sanitized();

		assert_eq!(config.connection_distance, 0.0);
		assert_eq!(config.speed, 0.0);
		assert_eq!(config.radius, Range::new(1.0, 4.0));
		assert_eq!(config.opacity, Range::new(0.0, 1.0));
		assert!(matches!(config.interaction, Interaction::Repel { damping, .. } if damping == 1.0));
	}

	#[test]
	fn oversized_values_are_capped() {
		let config = FieldConfig::from_json(
			r#"{ "particle_count": 50000000, "speed": 1e308, "radius": { "min": 1e308, "max": 1e308 },
				"connection_distance": 1e300, "interaction": { "mode": "repel", "strength": 1e308 } }"#,
		)
		.unwrap();

		assert_eq!(config.particle_count, MAX_PARTICLES);
		assert_eq!(config.speed, MAX_SPEED);
		assert_eq!(config.radius, Range::new(MAX_RADIUS, MAX_RADIUS));
		assert_eq!(config.connection_distance, MAX_DISTANCE);
		assert!(matches!(config.interaction, Interaction::Repel { strength, .. } if strength == MAX_SPEED));
	}

	#[test]
	fn preset_is_the_base_for_overrides() {
		let config = FieldConfig::from_json(r#"{ "preset": "constellation", "particle_count": 12 }"#).unwrap();
		assert_eq!(
			config,
			FieldConfig {
				particle_count: 12,
				..FieldConfig::constellation()
			}
		);

		let plain = FieldConfig::from_json(r#"{ "preset": "default" }"#).unwrap();
		assert_eq!(plain, FieldConfig::default());
	}

	#[test]
	fn bad_presets_are_errors() {
		assert!(FieldConfig::from_json(r#"{ "preset": "galaxy" }"#).is_err());
		assert!(FieldConfig::from_json(r#"{ "preset": 3 }"#).is_err());
		assert!(FieldConfig::from_json("[1, 2]").is_err());
	}

	#[test]
	fn unknown_boundary_is_an_error() {
		assert!(FieldConfig::from_json(r#"{ "boundary": "bounce" }"#).is_err());
	}
}
