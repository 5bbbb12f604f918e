//! Contact form posting to the API.
//!
//! A submission is sent once. On failure the form shows the error and keeps what the
//! visitor typed so they can resubmit by hand.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use super::api_client;
use crate::api::{ApiError, ContactAck, ContactMessage};

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
	/// Nothing sent yet.
	#[default]
	Idle,
	/// Waiting for the server.
	Submitting,
	/// Acknowledgement text from the server.
	Sent(String),
	/// User-facing error text.
	Failed(String),
}

impl FormStatus {
	/// Status to show for the result of a submission.
	pub fn from_result(result: &Result<ContactAck, ApiError>) -> Self {
		match result {
			Ok(ack) if ack.message.is_empty() => FormStatus::Sent("Thank you for your message!".into()),
			Ok(ack) => FormStatus::Sent(ack.message.clone()),
			Err(e) => FormStatus::Failed(e.to_string()),
		}
	}

	/// Whether the submit button should be disabled.
	pub fn is_submitting(&self) -> bool {
		matches!(self, FormStatus::Submitting)
	}

	/// Whether the typed fields should be cleared.
	pub fn clears_form(&self) -> bool {
		matches!(self, FormStatus::Sent(_))
	}
}

/// Contact form posting to the API, with inline validation and status text.
#[component]
pub fn ContactForm() -> impl IntoView {
	let client = api_client();
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let subject = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let status = RwSignal::new(FormStatus::Idle);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if status.get_untracked().is_submitting() {
			return;
		}
		let draft = ContactMessage {
			name: name.get_untracked(),
			email: email.get_untracked(),
			subject: subject.get_untracked(),
			message: message.get_untracked(),
		};
		if let Err(e) = draft.validate() {
			status.set(FormStatus::Failed(e.to_string()));
			return;
		}

		status.set(FormStatus::Submitting);
		let client = client.clone();
		spawn_local(async move {
			let result = client.submit_contact(&draft).await;
			match &result {
				Ok(_) => info!("portfolio: contact message sent"),
				Err(e) => warn!("portfolio: contact message failed: {}", e),
			}
			let next = FormStatus::from_result(&result);
			if next.clears_form() {
				for field in [name, email, subject, message] {
					field.set(String::new());
				}
			}
			status.set(next);
		});
	};

	view! {
		<section class="contact" id="contact">
			<h2>"Let's work together"</h2>
			<form class="contact-form" on:submit=on_submit novalidate=true>
				<label>
					"Name"
					<input
						type="text"
						name="name"
						maxlength={ContactMessage::NAME_MAX.to_string()}
						prop:value=name
						on:input=move |ev| name.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Email"
					<input
						type="email"
						name="email"
						prop:value=email
						on:input=move |ev| email.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Subject"
					<input
						type="text"
						name="subject"
						maxlength={ContactMessage::SUBJECT_MAX.to_string()}
						prop:value=subject
						on:input=move |ev| subject.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Message"
					<textarea
						name="message"
						rows="6"
						prop:value=message
						on:input=move |ev| message.set(event_target_value(&ev))
					/>
				</label>
				<button type="submit" disabled=move || status.get().is_submitting()>
					{move || if status.get().is_submitting() { "Sending..." } else { "Send message" }}
				</button>
				{move || match status.get() {
					FormStatus::Sent(text) => view! { <p class="form-status success" role="status">{text}</p> }.into_any(),
					FormStatus::Failed(text) => view! { <p class="form-status error" role="alert">{text}</p> }.into_any(),
					FormStatus::Idle | FormStatus::Submitting => ().into_any(),
				}}
			</form>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::ValidationError;

	#[test]
	fn success_clears_and_failure_keeps_the_form() {
		let sent = FormStatus::from_result(&Ok(ContactAck {
			message: "Thanks!".into(),
			data: ContactMessage::default(),
		}));
		assert_eq!(sent, FormStatus::Sent("Thanks!".into()));
		assert!(sent.clears_form());

		let failed = FormStatus::from_result(&Err(ApiError::Status {
			status: 500,
			url: "http://localhost:8000/api/contact/".into(),
			detail: None,
		}));
		assert!(matches!(failed, FormStatus::Failed(ref text) if text.contains("500")));
		assert!(!failed.clears_form());
	}

	#[test]
	fn validation_failures_read_as_form_errors() {
		let failed = FormStatus::from_result(&Err(ValidationError::InvalidEmail.into()));
		assert_eq!(failed, FormStatus::Failed("Please enter a valid email address.".into()));
	}

	#[test]
	fn empty_acknowledgement_gets_default_text() {
		let sent = FormStatus::from_result(&Ok(ContactAck::default()));
		assert_eq!(sent, FormStatus::Sent("Thank you for your message!".into()));
	}
}
