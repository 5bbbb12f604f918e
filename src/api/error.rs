//! Error types for the portfolio API client.

use std::fmt;

/// A request was refused before it reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	/// A required field is empty (after trimming).
	Missing(&'static str),
	/// A field is longer than the backend accepts.
	TooLong {
		/// Form field name.
		field: &'static str,
		/// Longest accepted length, in characters.
		max: usize,
	},
	/// The email address is not shaped like `local@domain.tld`.
	InvalidEmail,
	/// A project slug contains characters outside `[A-Za-z0-9_-]`.
	InvalidSlug(String),
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValidationError::Missing(field) => write!(f, "Please fill in the {} field.", field),
			ValidationError::TooLong { field, max } => {
				write!(f, "The {} field must be at most {} characters.", field, max)
			}
			ValidationError::InvalidEmail => write!(f, "Please enter a valid email address."),
			ValidationError::InvalidSlug(slug) => write!(f, "Invalid project slug: {:?}", slug),
		}
	}
}

impl std::error::Error for ValidationError {}

/// Errors returned by [`ApiClient`](super::ApiClient) calls.
#[derive(Debug)]
pub enum ApiError {
	/// The request could not be sent or the body could not be decoded.
	Network(gloo_net::Error),
	/// The server answered with a non-2xx status.
	Status {
		/// HTTP status code.
		status: u16,
		/// URL that was requested.
		url: String,
		/// Response body, when the server sent one.
		detail: Option<String>,
	},
	/// The request was rejected locally.
	Invalid(ValidationError),
}

impl ApiError {
	/// Whether the server answered 404.
	pub fn is_not_found(&self) -> bool {
		matches!(self, ApiError::Status { status: 404, .. })
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiError::Network(e) => write!(f, "Could not reach the server: {}", e),
			ApiError::Status {
				status,
				url,
				detail: Some(detail),
			} => write!(f, "Request to {} failed with status {}: {}", url, status, detail),
			ApiError::Status { status, url, .. } => {
				write!(f, "Request to {} failed with status {}", url, status)
			}
			ApiError::Invalid(e) => write!(f, "{}", e),
		}
	}
}

impl std::error::Error for ApiError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ApiError::Network(e) => Some(e),
			ApiError::Invalid(e) => Some(e),
			ApiError::Status { .. } => None,
		}
	}
}

impl From<gloo_net::Error> for ApiError {
	fn from(e: gloo_net::Error) -> Self {
		ApiError::Network(e)
	}
}

impl From<ValidationError> for ApiError {
	fn from(e: ValidationError) -> Self {
		ApiError::Invalid(e)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_errors_mention_url_and_detail() {
		let err = ApiError::Status {
			status: 400,
			url: "http://localhost:8000/api/contact/".into(),
			detail: Some("{\"email\":[\"Enter a valid email address.\"]}".into()),
		};
		let text = err.to_string();
		assert!(text.contains("400"));
		assert!(text.contains("/api/contact/"));
		assert!(text.contains("valid email"));
		assert!(!err.is_not_found());
	}

	#[test]
	fn validation_errors_convert_and_keep_their_message() {
		let err: ApiError = ValidationError::TooLong {
			field: "name",
			max: 100,
		}
		.into();
		assert_eq!(err.to_string(), "The name field must be at most 100 characters.");
		assert!(std::error::Error::source(&err).is_some());
	}
}
