use leptos::prelude::*;

use super::{api_client, or_fallback};
use crate::api::{Cv, PersonalInfo, SocialLink};

#[derive(Clone, Debug, Default, PartialEq)]
struct HeroData {
	info: PersonalInfo,
	links: Vec<SocialLink>,
	cv: Option<Cv>,
}

/// Name, title and bio of the site owner, with social links and the CV download.
#[component]
pub fn Hero() -> impl IntoView {
	let client = api_client();
	let download_url = client.cv_download_url();

	let data = LocalResource::new(move || {
		let client = client.clone();
		async move {
			let info = or_fallback("personal info", client.personal_info().await, PersonalInfo::placeholder);
			let mut links = or_fallback("social links", client.social_links().await, Vec::new);
			links.sort_by_key(|link| link.order);
			let cv = or_fallback("cv", client.cv().await, || None);
			HeroData {
				info: info.or_placeholder(),
				links,
				cv,
			}
		}
	});

	view! {
		<section class="hero" id="home">
			{move || {
				let HeroData { info, links, cv } = data.get().unwrap_or_else(|| HeroData {
					info: PersonalInfo::placeholder(),
					..HeroData::default()
				});
				let download = cv
					.map(|cv| {
						view! {
							<a class="button primary" href=download_url.clone() download="">
								{format!("Download {}", if cv.title.is_empty() { "CV".to_string() } else { cv.title })}
							</a>
						}
					});
				view! {
					<p class="hero-location">{info.location}</p>
					<h1 class="hero-name">{info.name}</h1>
					<h2 class="hero-title">{info.title}</h2>
					<p class="hero-bio">{info.bio}</p>
					<div class="hero-actions">
						{download}
						<a class="button" href="#contact">"Get in touch"</a>
					</div>
					<ul class="social-links">
						{links
							.into_iter()
							.map(|link| {
								let label = link.label().to_string();
								let title = label.clone();
								view! {
									<li>
										<a href=link.url target="_blank" rel="noopener noreferrer" title=title>
											{label}
										</a>
									</li>
								}
							})
							.collect_view()}
					</ul>
				}
			}}
		</section>
	}
}
