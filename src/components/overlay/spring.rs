//! Critically damped spring used to trail the pointer, and the glow state built on it.
//!
//! Integrates the closed-form solution of `x'' = -ω²(x - target) - 2ω x'`, so a step
//! of any length is exact: no overshoot from rest and no instability on long frames
//! (e.g. after a background tab resumes).

/// One-dimensional critically damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	/// Natural frequency `sqrt(stiffness / mass)`, in 1/s.
	omega: f64,
	/// Current position.
	pub value: f64,
	/// Current velocity, per second.
	pub velocity: f64,
	/// Position being chased.
	pub target: f64,
}

impl Spring {
	/// A spring at rest at 0; non-positive `stiffness` or `mass` makes it inert.
	pub fn new(stiffness: f64, mass: f64) -> Self {
		let omega = if mass > 0.0 && stiffness > 0.0 {
			(stiffness / mass).sqrt()
		} else {
			0.0
		};
		Self {
			omega,
			value: 0.0,
			velocity: 0.0,
			target: 0.0,
		}
	}

	/// Jump straight to `value` and rest there.
	pub fn snap(&mut self, value: f64) {
		self.value = value;
		self.target = value;
		self.velocity = 0.0;
	}

	/// Advance by `dt` seconds towards the current target.
	pub fn step(&mut self, dt: f64) {
		if dt.is_nan() || dt <= 0.0 || self.omega == 0.0 {
			return;
		}
		let offset = self.value - self.target;
		let decay = (-self.omega * dt).exp();
		let drift = (self.velocity + self.omega * offset) * dt;
		self.value = self.target + (offset + drift) * decay;
		self.velocity = (self.velocity - self.omega * drift) * decay;
	}

	/// Close enough to the target that further steps are invisible.
	pub fn is_settled(&self) -> bool {
		(self.value - self.target).abs() < 0.01 && self.velocity.abs() < 0.01
	}
}

impl Default for Spring {
	fn default() -> Self {
		Self::new(100.0, 1.0)
	}
}

/// Two independent springs following a 2D point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
	/// Horizontal spring.
	pub x: Spring,
	/// Vertical spring.
	pub y: Spring,
	primed: bool,
}

impl Follower {
	/// A follower whose springs share `stiffness` and `mass`.
	pub fn new(stiffness: f64, mass: f64) -> Self {
		Self {
			x: Spring::new(stiffness, mass),
			y: Spring::new(stiffness, mass),
			primed: false,
		}
	}

	/// Retarget; the first target ever seen is snapped to instead of chased.
	pub fn follow(&mut self, x: f64, y: f64) {
		if self.primed {
			self.x.target = x;
			self.y.target = y;
		} else {
			self.x.snap(x);
			self.y.snap(y);
			self.primed = true;
		}
	}

	/// Advance both springs by `dt` seconds.
	pub fn step(&mut self, dt: f64) {
		self.x.step(dt);
		self.y.step(dt);
	}

	/// Current `(x, y)`.
	pub fn position(&self) -> (f64, f64) {
		(self.x.value, self.y.value)
	}

	/// Whether a target has been seen yet.
	pub fn is_primed(&self) -> bool {
		self.primed
	}

	/// Both springs are settled.
	pub fn is_settled(&self) -> bool {
		self.x.is_settled() && self.y.is_settled()
	}
}

/// Change to apply to the glow element after a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlowUpdate {
	/// Center the glow on this point and show it.
	Show(f64, f64),
	/// The pointer left; fade the glow out.
	Hide,
	/// Nothing visible changed since the last frame.
	Unchanged,
}

/// Pointer glow state: a [`Follower`] plus what was last written to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowTrail {
	follower: Follower,
	shown: Option<(f64, f64)>,
}

impl GlowTrail {
	/// Drawn positions closer than this count as unchanged.
	const EPSILON: f64 = 0.05;

	/// A hidden glow trailing with the given spring constants.
	pub fn new(stiffness: f64, mass: f64) -> Self {
		Self {
			follower: Follower::new(stiffness, mass),
			shown: None,
		}
	}

	/// Advance by `dt` seconds towards `pointer`, if there is one.
	pub fn frame(&mut self, pointer: Option<(f64, f64)>, dt: f64) -> GlowUpdate {
		let Some((x, y)) = pointer else {
			if self.follower.is_primed() && self.shown.take().is_some() {
				return GlowUpdate::Hide;
			}
			return GlowUpdate::Unchanged;
		};
		self.follower.follow(x, y);
		self.follower.step(dt);

		let (px, py) = self.follower.position();
		if let Some((sx, sy)) = self.shown {
			let still = (px - sx).abs() < Self::EPSILON && (py - sy).abs() < Self::EPSILON;
			if still && self.follower.is_settled() {
				return GlowUpdate::Unchanged;
			}
		}
		self.shown = Some((px, py));
		GlowUpdate::Show(px, py)
	}

	/// Whether the last update showed the glow.
	pub fn is_visible(&self) -> bool {
		self.shown.is_some()
	}
}
