//! Records returned by the portfolio REST API.
//!
//! Field names match the JSON on the wire. Every record tolerates missing fields so a
//! partially configured backend still renders.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// The site owner's profile.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
	/// Database id.
	pub id: u64,
	/// Full name.
	pub name: String,
	/// Job title shown under the name.
	pub title: String,
	/// Public contact address.
	pub email: String,
	/// Phone number, possibly empty.
	pub phone: String,
	/// City or `Remote`.
	pub location: String,
	/// Short bio for the hero.
	pub bio: String,
	/// Longer text for the about section.
	pub about_text: String,
	/// One-line summary used on the CV.
	pub resume_headline: String,
	/// Stored photo path.
	pub profile_photo: Option<String>,
	/// Absolute photo URL, preferred over `profile_photo`.
	pub profile_photo_url: Option<String>,
	/// Stored favicon path.
	pub favicon: Option<String>,
	/// Absolute favicon URL.
	pub favicon_url: Option<String>,
}

impl PersonalInfo {
	/// Shown while the API is unreachable.
	pub fn placeholder() -> Self {
		Self {
			name: "Your Name".into(),
			title: "Full Stack Developer".into(),
			location: "Remote".into(),
			bio: "Building fast, friendly software for the web.".into(),
			resume_headline: "Full stack developer".into(),
			..Self::default()
		}
	}

	/// Fill empty fields from the placeholder, like the page's text fallbacks.
	pub fn or_placeholder(self) -> Self {
		let fallback = Self::placeholder();
		let pick = |value: String, fallback: String| if value.trim().is_empty() { fallback } else { value };
		Self {
			name: pick(self.name, fallback.name),
			title: pick(self.title, fallback.title),
			location: pick(self.location, fallback.location),
			bio: pick(self.bio, fallback.bio),
			..self
		}
	}
}

/// A link to one of the owner's profiles elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
	/// Database id.
	pub id: u64,
	/// Platform key, e.g. `github`.
	pub platform: String,
	/// Display name of the platform.
	pub platform_display: String,
	/// Profile URL.
	pub url: String,
	/// Icon name.
	pub icon: String,
	/// Sort key, ascending.
	pub order: i32,
}

impl SocialLink {
	/// Human readable name of the platform.
	pub fn label(&self) -> &str {
		if self.platform_display.trim().is_empty() {
			&self.platform
		} else {
			&self.platform_display
		}
	}
}

/// A technology or tool, with how well it is known.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skill {
	/// Database id.
	pub id: u64,
	/// Skill name.
	pub name: String,
	/// Id of the owning [`SkillCategory`].
	pub category: u64,
	/// Name of the owning category.
	pub category_name: String,
	/// Percentage, 0 to 100.
	pub proficiency: u8,
	/// Icon name.
	pub icon: String,
	/// CSS color as entered in the admin; may be blank or malformed.
	pub color: String,
	/// Shown on the home page.
	pub is_featured: bool,
}

/// A named group of skills.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
	/// Database id.
	pub id: u64,
	/// Category name.
	pub name: String,
	/// Icon name.
	pub icon: String,
	/// Sort key, ascending.
	pub order: i32,
	/// Skills in this category.
	pub skills: Vec<Skill>,
}

/// A portfolio project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
	/// Database id.
	pub id: u64,
	/// Project name.
	pub title: String,
	/// URL-safe identifier, `[A-Za-z0-9_-]`.
	pub slug: String,
	/// One-line teaser for cards.
	pub short_description: String,
	/// Full description.
	pub description: String,
	/// Stored image path.
	pub image: Option<String>,
	/// Absolute image URL, preferred over `image`.
	pub image_url: Option<String>,
	/// Comma separated, as entered in the admin.
	pub technologies: String,
	/// `technologies` split and trimmed by the backend.
	pub tech_list: Vec<String>,
	/// Deployed site, or empty.
	pub live_url: String,
	/// Repository, or empty.
	pub github_url: String,
	/// Shown on the home page.
	pub is_featured: bool,
	/// ISO 8601 timestamp.
	pub created_at: String,
}

/// One entry of the education timeline.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Education {
	/// Database id.
	pub id: u64,
	/// School or university.
	pub institution: String,
	/// Degree obtained or pursued.
	pub degree: String,
	/// Major, or empty.
	pub field_of_study: String,
	/// ISO `YYYY-MM-DD`.
	pub start_date: String,
	/// ISO `YYYY-MM-DD`, `None` while ongoing.
	pub end_date: Option<String>,
	/// Still enrolled.
	pub is_current: bool,
	/// Free text.
	pub description: String,
	/// Stored logo path.
	pub logo: Option<String>,
	/// Absolute logo URL.
	pub logo_url: Option<String>,
}

/// A professional certification.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Certification {
	/// Database id.
	pub id: u64,
	/// Certificate name.
	pub name: String,
	/// Issuing organization.
	pub issuer: String,
	/// ISO `YYYY-MM-DD`.
	pub issue_date: String,
	/// ISO `YYYY-MM-DD`, `None` if it never expires.
	pub expiry_date: Option<String>,
	/// Issuer's credential id, or empty.
	pub credential_id: String,
	/// Verification link, or empty.
	pub credential_url: String,
	/// Stored image path.
	pub image: Option<String>,
	/// Absolute image URL.
	pub image_url: Option<String>,
}

/// The active CV document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cv {
	/// Database id.
	pub id: u64,
	/// Document title, e.g. `Resume 2024`.
	pub title: String,
	/// Stored file path.
	pub file: String,
	/// Absolute file URL.
	pub file_url: String,
	/// ISO 8601 timestamp.
	pub uploaded_at: String,
}

/// A contact form submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
	/// Sender name, at most [`Self::NAME_MAX`] characters.
	pub name: String,
	/// Reply address.
	pub email: String,
	/// Subject line, at most [`Self::SUBJECT_MAX`] characters.
	pub subject: String,
	/// Message body.
	pub message: String,
}

impl ContactMessage {
	/// Longest accepted name, in characters.
	pub const NAME_MAX: usize = 100;
	/// Longest accepted subject, in characters.
	pub const SUBJECT_MAX: usize = 200;

	/// The same message with surrounding whitespace removed from every field.
	pub fn trimmed(&self) -> Self {
		Self {
			name: self.name.trim().to_string(),
			email: self.email.trim().to_string(),
			subject: self.subject.trim().to_string(),
			message: self.message.trim().to_string(),
		}
	}

	/// Check the constraints the backend enforces, before sending anything.
	pub fn validate(&self) -> Result<(), ValidationError> {
		let required = [
			("name", &self.name),
			("email", &self.email),
			("subject", &self.subject),
			("message", &self.message),
		];
		for (field, value) in required {
			if value.trim().is_empty() {
				return Err(ValidationError::Missing(field));
			}
		}
		if self.name.trim().chars().count() > Self::NAME_MAX {
			return Err(ValidationError::TooLong {
				field: "name",
				max: Self::NAME_MAX,
			});
		}
		if self.subject.trim().chars().count() > Self::SUBJECT_MAX {
			return Err(ValidationError::TooLong {
				field: "subject",
				max: Self::SUBJECT_MAX,
			});
		}
		if !looks_like_email(self.email.trim()) {
			return Err(ValidationError::InvalidEmail);
		}
		Ok(())
	}
}

fn looks_like_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& !domain.contains('@')
		&& !email.chars().any(char::is_whitespace)
		&& domain.contains('.')
		&& !domain.starts_with('.')
		&& !domain.ends_with('.')
}

/// The server's answer to a contact submission.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactAck {
	/// Thank-you text to show the sender.
	pub message: String,
	/// The message as stored.
	pub data: ContactMessage,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn message() -> ContactMessage {
		ContactMessage {
			name: "Sam".into(),
			email: "sam@example.com".into(),
			subject: "Hello".into(),
			message: "Nice site.".into(),
		}
	}

	#[test]
	fn decodes_project_with_nulls_and_extra_fields() {
		let json = r#"{
			"id": 3,
			"title": "Backdrop",
			"slug": "backdrop",
			"short_description": "Particles",
			"description": "Long text",
			"image": null,
			"image_url": null,
			"technologies": "Rust, WASM",
			"tech_list": ["Rust", "WASM"],
			"live_url": "",
			"github_url": "https://example.com/backdrop",
			"is_featured": true,
			"created_at": "2024-05-01T10:00:00Z",
			"order": 2
		}"#;
		let project: Project = serde_json::from_str(json).unwrap();
		assert_eq!(project.slug, "backdrop");
		assert_eq!(project.tech_list, vec!["Rust", "WASM"]);
		assert_eq!(project.image_url, None);
		assert!(project.is_featured);
	}

	#[test]
	fn decodes_category_with_nested_skills() {
		let json = r##"[{ "id": 1, "name": "Languages", "icon": "code", "order": 0,
			"skills": [{ "id": 9, "name": "Rust", "category": 1, "category_name": "Languages",
			"proficiency": 85, "icon": "", "color": "#dea584", "is_featured": true }] }]"##;
		let categories: Vec<SkillCategory> = serde_json::from_str(json).unwrap();
		assert_eq!(categories[0].skills[0].proficiency, 85);
		assert_eq!(categories[0].skills[0].category_name, "Languages");
	}

	#[test]
	fn missing_fields_fall_back_to_placeholder_text() {
		let info: PersonalInfo = serde_json::from_str(r#"{ "name": "Ada", "title": "" }"#).unwrap();
		let info = info.or_placeholder();
		assert_eq!(info.name, "Ada");
		assert_eq!(info.title, PersonalInfo::placeholder().title);
	}

	#[test]
	fn social_link_label_prefers_display_name() {
		let link: SocialLink =
			serde_json::from_str(r#"{ "platform": "github", "platform_display": "GitHub", "url": "https://github.com/x" }"#)
				.unwrap();
		assert_eq!(link.label(), "GitHub");
		let bare = SocialLink {
			platform_display: String::new(),
			..link
		};
		assert_eq!(bare.label(), "github");
	}

	#[test]
	fn decodes_contact_ack() {
		let json = r#"{ "message": "Thank you for your message!",
			"data": { "id": 17, "name": "Sam", "email": "sam@example.com", "subject": "Hello", "message": "Nice site." } }"#;
		let ack: ContactAck = serde_json::from_str(json).unwrap();
		assert_eq!(ack.data, message());
		assert!(ack.message.starts_with("Thank you"));
	}

	#[test]
	fn contact_message_serializes_wire_fields() {
		let value = serde_json::to_value(message()).unwrap();
		assert_eq!(value["email"], "sam@example.com");
		assert_eq!(value.as_object().unwrap().len(), 4);
	}

	#[test]
	fn validation_requires_every_field() {
		assert_eq!(message().validate(), Ok(()));
		let blank_subject = ContactMessage {
			subject: "   ".into(),
			..message()
		};
		assert_eq!(blank_subject.validate(), Err(ValidationError::Missing("subject")));
	}

	#[test]
	fn validation_enforces_lengths_and_email_shape() {
		let long_name = ContactMessage {
			name: "x".repeat(101),
			..message()
		};
		assert!(matches!(
			long_name.validate(),
			Err(ValidationError::TooLong { field: "name", .. })
		));

		for email in ["sam", "@example.com", "sam@example", "sam@.com", "sam@example.", "s am@example.com", "a@b@c.com"] {
			let msg = ContactMessage {
				email: email.into(),
				..message()
			};
			assert_eq!(msg.validate(), Err(ValidationError::InvalidEmail), "{email}");
		}
	}

	#[test]
	fn trimming_strips_whitespace() {
		let msg = ContactMessage {
			name: "  Sam ".into(),
			..message()
		};
		assert_eq!(msg.trimmed().name, "Sam");
	}
}
