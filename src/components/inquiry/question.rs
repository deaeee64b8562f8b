//! Question form: validation and the dialog view.

use leptos::prelude::*;
use log::{info, warn};
use serde::Serialize;
use web_sys::SubmitEvent;

use super::context::use_inquiry;
use super::error::QuestionError;
use super::state::InquiryItem;

/// Raw form contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestionDraft {
	/// Optional reply address; blank means none.
	pub email: String,
	/// Question text; must not be blank.
	pub message: String,
}

/// A validated question about one product.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSubmission {
	/// Id of the product asked about.
	pub product_id: String,
	/// Name of the product asked about.
	pub product_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Trimmed question text.
	pub message: String,
}

fn plausible_email(email: &str) -> bool {
	match email.split_once('@') {
		Some((local, domain)) => {
			!local.is_empty()
				&& !domain.is_empty()
				&& !domain.contains('@')
				&& !email.chars().any(char::is_whitespace)
		}
		None => false,
	}
}

impl QuestionDraft {
	/// Validate the draft as a question about `subject`.
	pub fn submit(&self, subject: &InquiryItem) -> Result<QuestionSubmission, QuestionError> {
		let message = self.message.trim();
		if message.is_empty() {
			return Err(QuestionError::EmptyMessage);
		}

		let email = match self.email.trim() {
			"" => None,
			e if plausible_email(e) => Some(e.to_string()),
			_ => return Err(QuestionError::InvalidEmail),
		};

		Ok(QuestionSubmission {
			product_id: subject.id.clone(),
			product_name: subject.name.clone(),
			email,
			message: message.to_string(),
		})
	}
}

/// Modal asking a question about the product held by the inquiry store.
///
/// Visible while the store has a question subject. Closing it, by cancel,
/// backdrop click or a successful submission, clears the form.
#[component]
pub fn InquiryQuestionDialog() -> impl IntoView {
	let store = use_inquiry();
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let error = RwSignal::new(None::<QuestionError>);

	Effect::new(move |_| {
		if !store.is_question_dialog_open() {
			email.set(String::new());
			message.set(String::new());
			error.set(None);
		}
	});

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let draft = QuestionDraft {
			email: email.get_untracked(),
			message: message.get_untracked(),
		};
		match store.submit_question(&draft) {
			Ok(submission) => match serde_json::to_string(&submission) {
				Ok(json) => info!("storefront: inquiry question submitted {}", json),
				Err(e) => warn!("storefront: could not encode inquiry question: {}", e),
			},
			Err(e) => error.set(Some(e)),
		}
	};

	let subject_name = move || {
		store
			.product_for_question()
			.map(|item| item.name)
			.unwrap_or_default()
	};

	view! {
		<Show when=move || store.is_question_dialog_open()>
			<div class="dialog-backdrop" on:click=move |_| store.close_question_dialog()></div>
			<div class="dialog inquiry-question" role="dialog" aria-modal="true">
				<header>
					<h2>"Consulta sobre el producto"</h2>
					<p class="subject">{subject_name}</p>
				</header>
				<form on:submit=on_submit>
					<label for="inquiry-email">"Email (opcional)"</label>
					<input id="inquiry-email" type="email" placeholder="tu@email.com" bind:value=email />
					<label for="inquiry-message">"Tu consulta"</label>
					<textarea
						id="inquiry-message"
						placeholder="Ej: ¿Qué tamaño tiene? ¿Qué incluye exactamente?"
						bind:value=message
					></textarea>
					{move || error.get().map(|e| view! { <p class="form-error">{e.to_string()}</p> })}
					<footer>
						<button type="button" on:click=move |_| store.close_question_dialog()>
							"Cancelar"
						</button>
						<button type="submit">"Enviar consulta"</button>
					</footer>
				</form>
			</div>
		</Show>
	}
}
