//! portfolio-web: Client-side portfolio site with an animated particle background.
//!
//! The page content comes from the portfolio REST API ([`api::ApiClient`]); behind it
//! sits a decorative overlay of a particle field, a pointer-following glow and pulsing
//! gradient orbs ([`components::overlay::AnimatedBackground`]).

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use components::frame_loop::{WindowListener, cleanup_slot};
use components::sections::{
	ContactForm, EducationSection, FeaturedSection, Hero, ProjectDetail, SkillsSection, slug_from_hash,
};

pub mod api;
pub mod components;

pub use api::ApiClient;
pub use components::overlay::AnimatedBackground;
pub use components::particle_field::{FieldConfig, ParticleField, ThemeMode};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Load particle field overrides from a script element with id="field-config".
/// Missing fields keep their defaults.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"portfolio: loaded field config, {} particles",
				config.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio: failed to parse field config: {}", e);
			None
		}
	}
}

/// Theme the host page was served with, from `<html data-theme>`.
fn initial_theme() -> ThemeMode {
	let attr = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|el| el.get_attribute("data-theme"));
	ThemeMode::from_attr(attr.as_deref())
}

/// Project slug named by the current location hash.
fn hash_slug() -> Option<String> {
	let hash = web_sys::window()?.location().hash().ok()?;
	slug_from_hash(&hash)
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(ApiClient::from_env());

	let config = load_field_config().unwrap_or_default();
	let theme = RwSignal::new(initial_theme());

	let project_slug = RwSignal::new(hash_slug());
	let hash_listener = cleanup_slot::<WindowListener>();
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		hash_listener.set_value(WindowListener::new(&window, "hashchange", move |_| {
			project_slug.set(hash_slug());
		}));
	});

	Effect::new(move |_| {
		let mode = theme.get();
		let root = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element());
		if let Some(root) = root {
			let _ = root.set_attribute("data-theme", mode.as_str());
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AnimatedBackground theme=theme config=config />

		<header class="site-header">
			<a class="brand" href="#home">"Portfolio"</a>
			<button
				class="theme-toggle"
				type="button"
				aria-label=move || format!("Switch to {} theme", theme.get().toggled().as_str())
				on:click=move |_| theme.update(|mode| *mode = mode.toggled())
			>
				{move || match theme.get() {
					ThemeMode::Dark => "Light mode",
					ThemeMode::Light => "Dark mode",
				}}
			</button>
		</header>

		<main class="content">
			<Hero />
			<ProjectDetail slug=project_slug />
			<FeaturedSection />
			<SkillsSection />
			<EducationSection />
			<ContactForm />
		</main>
	}
}
