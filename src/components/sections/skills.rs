use leptos::prelude::*;

use super::featured::skill_color;
use super::{api_client, or_fallback};
use crate::api::{Skill, SkillCategory};

/// Skills in `category`, or all of them when no category is selected.
fn filter_skills(skills: &[Skill], category: Option<u64>) -> Vec<Skill> {
	skills
		.iter()
		.filter(|skill| category.is_none_or(|id| skill.category == id))
		.cloned()
		.collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
struct SkillsData {
	categories: Vec<SkillCategory>,
	skills: Vec<Skill>,
}

/// Every skill, filterable by category tab.
#[component]
pub fn SkillsSection() -> impl IntoView {
	let client = api_client();
	let active = RwSignal::new(None::<u64>);

	let data = LocalResource::new(move || {
		let client = client.clone();
		async move {
			let mut categories = or_fallback("skill categories", client.skill_categories().await, Vec::new);
			categories.sort_by_key(|category| category.order);
			let skills = or_fallback("skills", client.skills().await, Vec::new);
			SkillsData { categories, skills }
		}
	});

	view! {
		<section class="skills" id="skills">
			<h2>"Skills & Expertise"</h2>
			{move || {
				let SkillsData { categories, skills } = data.get().unwrap_or_default();
				if skills.is_empty() {
					return view! { <p class="placeholder">"Skills will appear here soon."</p> }.into_any();
				}
				let tabs = categories
					.into_iter()
					.map(|category| {
						let id = category.id;
						view! {
							<button
								type="button"
								class="tab"
								class:active=move || active.get() == Some(id)
								on:click=move |_| active.set(Some(id))
							>
								{category.name}
							</button>
						}
					})
					.collect_view();
				view! {
					<div class="skill-tabs" role="tablist">
						<button
							type="button"
							class="tab"
							class:active=move || active.get().is_none()
							on:click=move |_| active.set(None)
						>
							"All"
						</button>
						{tabs}
					</div>
					<ul class="skill-grid">
						{move || {
							filter_skills(&skills, active.get())
								.into_iter()
								.map(|skill| {
									let level = skill.proficiency.min(100);
									let fill = format!("width: {level}%; background: {};", skill_color(&skill));
									view! {
										<li class="skill-card">
											<span class="skill-category">{skill.category_name}</span>
											<span class="skill-name">{skill.name}</span>
											<div class="skill-track">
												<div class="skill-fill" style=fill />
											</div>
											<span class="skill-level">{format!("{level}%")}</span>
										</li>
									}
								})
								.collect_view()
						}}
					</ul>
				}
					.into_any()
			}}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn skill(name: &str, category: u64) -> Skill {
		Skill {
			name: name.into(),
			category,
			..Skill::default()
		}
	}

	#[test]
	fn category_filter_keeps_order() {
		let skills = vec![skill("Rust", 1), skill("Postgres", 2), skill("Go", 1)];

		let names = |picked: Vec<Skill>| picked.into_iter().map(|s| s.name).collect::<Vec<_>>();
		assert_eq!(names(filter_skills(&skills, None)), ["Rust", "Postgres", "Go"]);
		assert_eq!(names(filter_skills(&skills, Some(1))), ["Rust", "Go"]);
		assert!(filter_skills(&skills, Some(9)).is_empty());
	}
}
