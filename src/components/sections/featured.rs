use leptos::prelude::*;

use super::project::project_href;
use super::{api_client, or_fallback};
use crate::api::{Project, Skill};
use crate::components::particle_field::Color;

/// Width of a proficiency bar, clamped to 0..=100 percent.
fn proficiency_width(skill: &Skill) -> String {
	format!("width: {}%;", skill.proficiency.min(100))
}

/// The skill's own bar color when it is a color we understand, else the accent.
pub(crate) fn skill_color(skill: &Skill) -> String {
	Color::parse(&skill.color)
		.map(Color::to_css)
		.unwrap_or_else(|| "var(--accent)".to_string())
}

/// Highlighted skills and projects.
#[component]
pub fn FeaturedSection() -> impl IntoView {
	let client = api_client();

	let skills_client = client.clone();
	let skills = LocalResource::new(move || {
		let client = skills_client.clone();
		async move { or_fallback("featured skills", client.featured_skills().await, Vec::new) }
	});
	let projects = LocalResource::new(move || {
		let client = client.clone();
		async move { or_fallback("featured projects", client.projects(true).await, Vec::new) }
	});

	view! {
		<section class="featured" id="featured">
			<h2>"Skills"</h2>
			<ul class="skill-list">
				{move || {
					let skills = skills.get().unwrap_or_default();
					if skills.is_empty() {
						return view! { <li class="placeholder">"Skills will appear here soon."</li> }.into_any();
					}
					skills.into_iter().map(|skill| view! { <SkillBar skill=skill /> }).collect_view().into_any()
				}}
			</ul>

			<h2>"Projects"</h2>
			<div class="project-grid">
				{move || {
					let projects = projects.get().unwrap_or_default();
					if projects.is_empty() {
						return view! { <p class="placeholder">"Projects will appear here soon."</p> }.into_any();
					}
					projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view().into_any()
				}}
			</div>
		</section>
	}
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
	let width = proficiency_width(&skill);
	let color = skill_color(&skill);
	view! {
		<li class="skill">
			<span class="skill-name">{skill.name}</span>
			<span class="skill-level">{format!("{}%", skill.proficiency.min(100))}</span>
			<div class="skill-track">
				<div class="skill-fill" style=format!("{width} background: {color};") />
			</div>
		</li>
	}
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
	let summary = if project.short_description.is_empty() {
		project.description.clone()
	} else {
		project.short_description.clone()
	};
	let image = project.image_url.clone().or(project.image.clone());
	let live = (!project.live_url.is_empty()).then(|| {
		view! { <a href=project.live_url.clone() target="_blank" rel="noopener noreferrer">"Live"</a> }
	});
	let source = (!project.github_url.is_empty()).then(|| {
		view! { <a href=project.github_url.clone() target="_blank" rel="noopener noreferrer">"Source"</a> }
	});

	view! {
		<article class="project-card">
			{image.map(|src| view! { <img src=src alt=project.title.clone() loading="lazy" /> })}
			<h3>{project.title.clone()}</h3>
			<p>{summary}</p>
			<ul class="tech-list">
				{project.tech_list.iter().map(|tech| view! { <li>{tech.clone()}</li> }).collect_view()}
			</ul>
			<div class="project-links">
				{project_href(&project.slug).map(|href| view! { <a href=href>"Details"</a> })}
				{live}
				{source}
			</div>
		</article>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn proficiency_is_capped() {
		let skill = Skill {
			proficiency: 140,
			..Skill::default()
		};
		assert_eq!(proficiency_width(&skill), "width: 100%;");
	}

	#[test]
	fn skill_colors_are_parsed_not_passed_through() {
		let colored = |color: &str| Skill {
			color: color.into(),
			..Skill::default()
		};
		assert_eq!(skill_color(&colored("#DEA584")), "#dea584");
		assert_eq!(skill_color(&colored("rgba(1, 2, 3, 0.5)")), "rgba(1, 2, 3, 0.5)");
		assert_eq!(skill_color(&colored("")), "var(--accent)");
		assert_eq!(skill_color(&colored("red; position: fixed")), "var(--accent)");
	}
}
