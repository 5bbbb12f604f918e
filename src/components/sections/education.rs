use leptos::prelude::*;

use super::{api_client, or_fallback};
use crate::api::{Certification, Education};

const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// Year of an ISO `YYYY-MM-DD` date.
fn year(date: &str) -> Option<&str> {
	let year = date.get(..4)?;
	year.bytes().all(|b| b.is_ascii_digit()).then_some(year)
}

/// `"May 2023"` from `"2023-05-14"`.
fn month_year(date: &str) -> Option<String> {
	let year = year(date)?;
	let month: usize = date.get(5..7)?.parse().ok()?;
	let name = MONTHS.get(month.checked_sub(1)?)?;
	Some(format!("{name} {year}"))
}

/// `"2018 - 2022"`, or `"2020 - Present"` while still enrolled.
fn year_span(entry: &Education) -> String {
	let start = year(&entry.start_date).unwrap_or("?");
	let end = match entry.end_date.as_deref().and_then(year) {
		Some(end) if !entry.is_current => end,
		_ => "Present",
	};
	format!("{start} - {end}")
}

#[derive(Clone, Debug, Default, PartialEq)]
struct EducationData {
	education: Vec<Education>,
	certifications: Vec<Certification>,
}

/// Education timeline followed by certifications, newest first.
#[component]
pub fn EducationSection() -> impl IntoView {
	let client = api_client();

	let data = LocalResource::new(move || {
		let client = client.clone();
		async move {
			let mut education = or_fallback("education", client.education().await, Vec::new);
			education.sort_by(|a, b| b.start_date.cmp(&a.start_date));
			let mut certifications = or_fallback("certifications", client.certifications().await, Vec::new);
			certifications.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
			EducationData {
				education,
				certifications,
			}
		}
	});

	view! {
		<section class="education" id="education">
			<h2>"Education"</h2>
			{move || {
				let EducationData {
					education,
					certifications,
				} = data.get().unwrap_or_default();

				let timeline = if education.is_empty() {
					view! { <p class="placeholder">"Education details will appear here soon."</p> }.into_any()
				} else {
					view! {
						<ol class="timeline">
							{education
								.into_iter()
								.map(|entry| {
									let span = year_span(&entry);
									let field = entry.field_of_study.clone();
									view! {
										<li class="timeline-entry">
											<span class="timeline-span">{span}</span>
											<h3>{entry.degree}</h3>
											<p class="institution">{entry.institution}</p>
											{(!field.is_empty()).then(|| view! { <p class="field">{field}</p> })}
											<p>{entry.description}</p>
										</li>
									}
								})
								.collect_view()}
						</ol>
					}
						.into_any()
				};

				let certs = certifications
					.into_iter()
					.map(|cert| {
						let issued = month_year(&cert.issue_date).map(|date| format!("Issued: {date}"));
						let link = (!cert.credential_url.is_empty()).then(|| {
							view! {
								<a href=cert.credential_url.clone() target="_blank" rel="noopener noreferrer">
									"View credential"
								</a>
							}
						});
						view! {
							<li class="certification">
								<h3>{cert.name.clone()}</h3>
								<p class="issuer">{cert.issuer.clone()}</p>
								{issued.map(|text| view! { <p class="issued">{text}</p> })}
								{link}
							</li>
						}
					})
					.collect_view();

				view! {
					{timeline}
					<h2>"Certifications"</h2>
					<ul class="certifications">{certs}</ul>
				}
					.into_any()
			}}
		</section>
	}
}
