//! Slowly pulsing gradient orbs.

/// Attempt to smooth values that would otherwise cause abrupt visual changes.
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// A `start -> peak -> start` loop eased with smooth-step on both halves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
	/// Value at phase 0.
	pub start: f64,
	/// Value at phase 0.5.
	pub peak: f64,
}

impl Pulse {
	/// A pulse from `start` to `peak` and back.
	pub const fn new(start: f64, peak: f64) -> Self {
		Self { start, peak }
	}

	/// Value at `phase` in `[0, 1)`; `0.5` is the peak.
	pub fn at(&self, phase: f64) -> f64 {
		let phase = phase.rem_euclid(1.0);
		let (from, to, t) = if phase < 0.5 {
			(self.start, self.peak, phase * 2.0)
		} else {
			(self.peak, self.start, (phase - 0.5) * 2.0)
		};
		from + (to - from) * smooth_step(t)
	}
}

/// Where an orb sits, as CSS inset declarations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
	/// Inset from the top-left corner.
	TopLeft {
		/// Percent of the viewport height.
		top_pct: f64,
		/// Percent of the viewport width.
		left_pct: f64,
	},
	/// Inset from the bottom-right corner.
	BottomRight {
		/// Percent of the viewport height.
		bottom_pct: f64,
		/// Percent of the viewport width.
		right_pct: f64,
	},
}

impl Anchor {
	/// Inline CSS for the anchor.
	pub fn to_css(self) -> String {
		match self {
			Anchor::TopLeft { top_pct, left_pct } => format!("top: {top_pct}%; left: {left_pct}%;"),
			Anchor::BottomRight {
				bottom_pct,
				right_pct,
			} => format!("bottom: {bottom_pct}%; right: {right_pct}%;"),
		}
	}
}

/// One ambient orb: a fixed disc whose scale and opacity loop forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
	/// Placement.
	pub anchor: Anchor,
	/// Diameter in px.
	pub size: f64,
	/// Seconds per full loop.
	pub period: f64,
	/// Scale multiplier over a loop.
	pub scale: Pulse,
	/// Opacity over a loop.
	pub opacity: Pulse,
}

impl Orb {
	/// `(scale, opacity)` at `seconds` since the overlay mounted.
	pub fn sample(&self, seconds: f64) -> (f64, f64) {
		if !(self.period.is_finite() && self.period > 0.0) {
			return (self.scale.start, self.opacity.start);
		}
		let phase = seconds / self.period;
		(self.scale.at(phase), self.opacity.at(phase))
	}

	/// Inline style for this orb at `seconds`.
	pub fn style(&self, seconds: f64) -> String {
		let (scale, opacity) = self.sample(seconds);
		format!(
			"position: absolute; {} width: {size}px; height: {size}px; border-radius: 50%; \
			 background: var(--gradient-glow); transform: scale({scale:.4}); opacity: {opacity:.4};",
			self.anchor.to_css(),
			size = self.size,
		)
	}
}

/// The two orbs behind every page.
pub fn default_orbs() -> [Orb; 2] {
	[
		Orb {
			anchor: Anchor::TopLeft {
				top_pct: 10.0,
				left_pct: 20.0,
			},
			size: 400.0,
			period: 10.0,
			scale: Pulse::new(1.0, 1.15),
			opacity: Pulse::new(0.5, 0.7),
		},
		Orb {
			anchor: Anchor::BottomRight {
				bottom_pct: 15.0,
				right_pct: 20.0,
			},
			size: 350.0,
			period: 12.0,
			scale: Pulse::new(1.1, 1.0),
			opacity: Pulse::new(0.5, 0.7),
		},
	]
}
