//! The fixed decorative layers behind page content.

use leptos::prelude::*;
use log::debug;

use super::orbs::default_orbs;
use super::spring::{GlowTrail, GlowUpdate};
use crate::components::frame_loop::{AnimationLoop, WindowListener, cleanup_slot};
use crate::components::particle_field::{FieldConfig, ParticleField, ThemeMode};
use crate::components::pointer::{PointerTracker, track_pointer};

/// Glow disc diameter in px.
const GLOW_SIZE: f64 = 400.0;
/// Longest frame gap fed to the spring, in seconds.
const MAX_FRAME_DT: f64 = 0.1;

/// Particle field, pointer glow and gradient orbs as one background.
///
/// One set of window listeners feeds the shared pointer tracker; the field and the glow
/// only read it. None of the layers intercept pointer events.
#[component]
pub fn AnimatedBackground(
	/// Page theme; drives the particle palette.
	#[prop(into)]
	theme: Signal<ThemeMode>,
	/// Particle field settings, defaults when omitted.
	#[prop(optional)]
	config: Option<FieldConfig>,
) -> impl IntoView {
	let tracker = PointerTracker::new();
	let listeners = cleanup_slot::<Vec<WindowListener>>();

	let tracker_writer = tracker.clone();
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		listeners.set_value(Some(track_pointer(&window, &tracker_writer)));
		debug!("portfolio: overlay pointer tracking started");
	});

	view! {
		<div class="animated-background" aria-hidden="true">
			<ParticleField
				theme=theme
				config=config.unwrap_or_default()
				pointer=tracker.clone()
				opacity=0.6
			/>
			<MouseGlow pointer=tracker />
			<GradientOrbs />
		</div>
	}
}

/// A radial glow that trails the pointer on a critically damped spring.
#[component]
pub fn MouseGlow(
	/// Pointer position to trail.
	pointer: PointerTracker,
) -> impl IntoView {
	let glow_ref = NodeRef::<leptos::html::Div>::new();
	let frame_loop = cleanup_slot::<AnimationLoop>();

	Effect::new(move |_| {
		let Some(glow) = glow_ref.get() else {
			return;
		};
		let style = web_sys::HtmlElement::style(&glow);
		let pointer = pointer.clone();
		let mut trail = GlowTrail::new(100.0, 1.0);
		let mut last_ts: Option<f64> = None;

		let handle = AnimationLoop::start(move |ts| {
			let dt = last_ts.map_or(0.0, |prev| ((ts - prev) / 1000.0).clamp(0.0, MAX_FRAME_DT));
			last_ts = Some(ts);

			match trail.frame(pointer.position().map(|p| (p.x, p.y)), dt) {
				GlowUpdate::Show(x, y) => {
					let half = GLOW_SIZE / 2.0;
					let _ = style.set_property(
						"transform",
						&format!("translate3d({:.1}px, {:.1}px, 0)", x - half, y - half),
					);
					let _ = style.set_property("opacity", "1");
				}
				GlowUpdate::Hide => {
					let _ = style.set_property("opacity", "0");
				}
				GlowUpdate::Unchanged => {}
			}
		});
		frame_loop.set_value(handle);
	});

	view! {
		<div
			node_ref=glow_ref
			class="mouse-glow"
			style=format!(
				"position: fixed; top: 0; left: 0; width: {GLOW_SIZE}px; height: {GLOW_SIZE}px; \
				 border-radius: 50%; background: var(--gradient-glow); pointer-events: none; \
				 z-index: 0; opacity: 0; transition: opacity 0.3s; will-change: transform;",
			)
		/>
	}
}

/// Ambient orbs pulsing on fixed periods, independent of input.
#[component]
pub fn GradientOrbs() -> impl IntoView {
	let orbs = default_orbs();
	let orb_refs = orbs.map(|_| NodeRef::<leptos::html::Div>::new());
	let frame_loop = cleanup_slot::<AnimationLoop>();

	Effect::new(move |_| {
		let mut elements = Vec::with_capacity(orb_refs.len());
		for node in &orb_refs {
			let Some(el) = node.get() else {
				return;
			};
			elements.push(el);
		}
		let mut started: Option<f64> = None;

		let handle = AnimationLoop::start(move |ts| {
			let origin = *started.get_or_insert(ts);
			let seconds = (ts - origin) / 1000.0;
			for (orb, el) in orbs.iter().zip(&elements) {
				let _ = el.set_attribute("style", &orb.style(seconds));
			}
		});
		frame_loop.set_value(handle);
	});

	view! {
		<div
			class="gradient-orbs"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0; overflow: hidden;"
		>
			{orbs
				.iter()
				.zip(orb_refs)
				.map(|(orb, node)| view! { <div node_ref=node class="gradient-orb" style=orb.style(0.0) /> })
				.collect_view()}
		</div>
	}
}
