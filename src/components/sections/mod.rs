//! Page sections fed by the portfolio API.
//!
//! Each section fetches through a `LocalResource` and renders placeholder content when
//! the request fails, so an offline backend never leaves a blank page.

mod contact;
mod education;
mod featured;
mod hero;
mod project;
mod skills;

use leptos::prelude::*;
use log::warn;

use crate::api::{ApiClient, ApiError};

pub use contact::{ContactForm, FormStatus};
pub use education::EducationSection;
pub use featured::FeaturedSection;
pub use hero::Hero;
pub use project::{ProjectDetail, project_href, slug_from_hash};
pub use skills::SkillsSection;

/// Unwrap a fetch result, logging failures and substituting `fallback`.
pub(crate) fn or_fallback<T>(what: &str, result: Result<T, ApiError>, fallback: impl FnOnce() -> T) -> T {
	match result {
		Ok(value) => value,
		Err(e) => {
			warn!("portfolio: failed to load {}: {}", what, e);
			fallback()
		}
	}
}

/// The client from context, or one built from the compile-time base URL.
pub(crate) fn api_client() -> ApiClient {
	use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failed_fetch_uses_fallback() {
		let err = ApiError::Status {
			status: 503,
			url: "http://localhost:8000/api/skills/".into(),
			detail: None,
		};
		let skills: Vec<u8> = or_fallback("skills", Err(err), Vec::new);
		assert!(skills.is_empty());
		assert_eq!(or_fallback("skills", Ok(vec![1u8]), Vec::new), vec![1]);
	}
}
