//! Single project view, opened through a `#project/<slug>` location hash.

use leptos::prelude::*;
use log::warn;

use super::api_client;
use crate::api::{Project, check_slug};

const HASH_PREFIX: &str = "#project/";

/// Link target that opens the detail view for `slug`.
pub fn project_href(slug: &str) -> Option<String> {
	check_slug(slug).ok()?;
	Some(format!("{HASH_PREFIX}{slug}"))
}

/// The project slug named by a location hash, if it names a valid one.
pub fn slug_from_hash(hash: &str) -> Option<String> {
	let slug = hash.strip_prefix(HASH_PREFIX)?.trim_end_matches('/');
	check_slug(slug).ok()?;
	Some(slug.to_string())
}

#[derive(Clone, Debug, PartialEq)]
enum Detail {
	Found(Project),
	Missing(String),
}

/// Details of the project named by `slug`; renders nothing while `slug` is `None`.
#[component]
pub fn ProjectDetail(
	/// Slug of the project to show.
	#[prop(into)]
	slug: Signal<Option<String>>,
) -> impl IntoView {
	let client = api_client();

	let detail = LocalResource::new(move || {
		let client = client.clone();
		let slug = slug.get();
		async move {
			let slug = slug?;
			Some(match client.project(&slug).await {
				Ok(project) => Detail::Found(project),
				Err(e) => {
					warn!("portfolio: failed to load project {}: {}", slug, e);
					let text = if e.is_not_found() {
						"This project could not be found.".to_string()
					} else {
						e.to_string()
					};
					Detail::Missing(text)
				}
			})
		}
	});

	move || {
		let detail = detail.get().flatten()?;
		let body = match detail {
			Detail::Found(project) => {
				let image = project.image_url.clone().or(project.image.clone());
				let live = (!project.live_url.is_empty()).then(|| {
					view! { <a href=project.live_url.clone() target="_blank" rel="noopener noreferrer">"Live demo"</a> }
				});
				let source = (!project.github_url.is_empty()).then(|| {
					view! { <a href=project.github_url.clone() target="_blank" rel="noopener noreferrer">"Source code"</a> }
				});
				view! {
					{image.map(|src| view! { <img src=src alt=project.title.clone() /> })}
					<h2>{project.title.clone()}</h2>
					<p class="project-description">{project.description.clone()}</p>
					<ul class="tech-list">
						{project.tech_list.iter().map(|tech| view! { <li>{tech.clone()}</li> }).collect_view()}
					</ul>
					<div class="project-links">{live}{source}</div>
				}
					.into_any()
			}
			Detail::Missing(text) => view! { <p class="form-status error" role="alert">{text}</p> }.into_any(),
		};
		Some(view! {
			<section class="project-detail" id="project">
				<a class="back-link" href="#featured">"Back to projects"</a>
				{body}
			</section>
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_round_trips_valid_slugs() {
		let href = project_href("particle-field").unwrap();
		assert_eq!(href, "#project/particle-field");
		assert_eq!(slug_from_hash(&href).as_deref(), Some("particle-field"));
		assert_eq!(slug_from_hash("#project/particle-field/").as_deref(), Some("particle-field"));
	}

	#[test]
	fn other_hashes_name_no_project() {
		for hash in ["", "#", "#contact", "#project/", "#project/../admin", "#project/a b"] {
			assert_eq!(slug_from_hash(hash), None, "{hash}");
		}
		assert_eq!(project_href("a/b"), None);
	}
}
