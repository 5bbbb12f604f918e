//! Client for the portfolio REST API.
//!
//! Every read is a plain `GET` against `{base_url}/{resource}/` returning JSON. The
//! client is cheap to clone and is handed to components through Leptos context.

mod error;
mod types;

use gloo_net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;

pub use error::{ApiError, ValidationError};
pub use types::{
	Certification, ContactAck, ContactMessage, Cv, Education, PersonalInfo, Project, Skill,
	SkillCategory, SocialLink,
};

/// Used when `PORTFOLIO_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Reject slugs that would change the shape of the request path.
pub fn check_slug(slug: &str) -> Result<(), ValidationError> {
	let valid = !slug.is_empty()
		&& slug
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
	if valid {
		Ok(())
	} else {
		Err(ValidationError::InvalidSlug(slug.to_string()))
	}
}

/// Client for the portfolio REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
	base_url: String,
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL)
	}
}

impl ApiClient {
	/// Client rooted at `base_url`; a trailing slash is dropped and a blank URL means the default.
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = base_url.into();
		let trimmed = base_url.trim().trim_end_matches('/');
		Self {
			base_url: if trimmed.is_empty() {
				DEFAULT_BASE_URL.to_string()
			} else {
				trimmed.to_string()
			},
		}
	}

	/// Base URL baked in at compile time, falling back to [`DEFAULT_BASE_URL`].
	pub fn from_env() -> Self {
		Self::new(option_env!("PORTFOLIO_API_URL").unwrap_or(DEFAULT_BASE_URL))
	}

	/// Root every endpoint hangs off, without a trailing slash.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Absolute URL for `path`, always with a trailing slash.
	pub fn endpoint(&self, path: &str) -> String {
		let path = path.trim_matches('/');
		format!("{}/{}/", self.base_url, path)
	}

	async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
		debug!("portfolio: GET {}", url);
		let response = Request::get(&url).send().await?;
		let response = ensure_ok(response, url).await?;
		Ok(response.json::<T>().await?)
	}

	/// The owner's profile.
	pub async fn personal_info(&self) -> Result<PersonalInfo, ApiError> {
		self.get_json(self.endpoint("personal-info")).await
	}

	/// Profile links, unsorted.
	pub async fn social_links(&self) -> Result<Vec<SocialLink>, ApiError> {
		self.get_json(self.endpoint("social-links")).await
	}

	/// Skill categories with their nested skills.
	pub async fn skill_categories(&self) -> Result<Vec<SkillCategory>, ApiError> {
		self.get_json(self.endpoint("skill-categories")).await
	}

	/// Every skill.
	pub async fn skills(&self) -> Result<Vec<Skill>, ApiError> {
		self.get_json(self.endpoint("skills")).await
	}

	/// Skills flagged for the home page.
	pub async fn featured_skills(&self) -> Result<Vec<Skill>, ApiError> {
		self.get_json(self.endpoint("skills/featured")).await
	}

	/// All projects, or only the featured ones.
	pub async fn projects(&self, featured: bool) -> Result<Vec<Project>, ApiError> {
		self.get_json(self.projects_url(featured)).await
	}

	fn projects_url(&self, featured: bool) -> String {
		let url = self.endpoint("projects");
		if featured { format!("{url}?featured=true") } else { url }
	}

	/// A single project; the slug is checked before any request is made.
	pub async fn project(&self, slug: &str) -> Result<Project, ApiError> {
		check_slug(slug)?;
		self.get_json(self.endpoint(&format!("projects/{slug}"))).await
	}

	/// Education entries, unsorted.
	pub async fn education(&self) -> Result<Vec<Education>, ApiError> {
		self.get_json(self.endpoint("education")).await
	}

	/// Certifications, unsorted.
	pub async fn certifications(&self) -> Result<Vec<Certification>, ApiError> {
		self.get_json(self.endpoint("certifications")).await
	}

	/// The active CV, or `None` when none has been uploaded.
	pub async fn cv(&self) -> Result<Option<Cv>, ApiError> {
		match self.get_json(self.endpoint("cv")).await {
			Ok(cv) => Ok(Some(cv)),
			Err(e) if e.is_not_found() => Ok(None),
			Err(e) => Err(e),
		}
	}

	/// Link target for downloading the active CV.
	pub fn cv_download_url(&self) -> String {
		self.endpoint("cv/download")
	}

	/// Validate and post a contact message. Sent once; callers decide about resubmitting.
	pub async fn submit_contact(&self, message: &ContactMessage) -> Result<ContactAck, ApiError> {
		let message = message.trimmed();
		message.validate()?;

		let url = self.endpoint("contact");
		debug!("portfolio: POST {}", url);
		let response = Request::post(&url).json(&message)?.send().await?;
		let response = ensure_ok(response, url).await?;
		Ok(response.json::<ContactAck>().await?)
	}
}

async fn ensure_ok(response: Response, url: String) -> Result<Response, ApiError> {
	if response.ok() {
		return Ok(response);
	}
	let detail = response.text().await.ok().filter(|body| !body.trim().is_empty());
	Err(ApiError::Status {
		status: response.status(),
		url,
		detail,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_have_single_slashes() {
		let client = ApiClient::new("https://api.example.com/api/");
		assert_eq!(client.base_url(), "https://api.example.com/api");
		assert_eq!(client.endpoint("personal-info"), "https://api.example.com/api/personal-info/");
		assert_eq!(client.endpoint("/skills/featured/"), "https://api.example.com/api/skills/featured/");
		assert_eq!(client.cv_download_url(), "https://api.example.com/api/cv/download/");
	}

	#[test]
	fn featured_projects_use_query_flag() {
		let client = ApiClient::default();
		assert_eq!(client.projects_url(false), "http://localhost:8000/api/projects/");
		assert_eq!(client.projects_url(true), "http://localhost:8000/api/projects/?featured=true");
	}

	#[test]
	fn blank_base_url_falls_back_to_default() {
		assert_eq!(ApiClient::new("  ").base_url(), DEFAULT_BASE_URL);
		assert_eq!(ApiClient::new("/").base_url(), DEFAULT_BASE_URL);
	}

	#[test]
	fn slugs_are_path_safe() {
		assert!(check_slug("particle-field_2").is_ok());
		for bad in ["", "../admin", "a/b", "a b", "a?b=1", "caf\u{e9}"] {
			assert_eq!(check_slug(bad), Err(ValidationError::InvalidSlug(bad.to_string())));
		}
	}
}
