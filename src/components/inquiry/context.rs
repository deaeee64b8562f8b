//! Reactive inquiry store and its provider.
//!
//! [`InquiryProvider`] creates one store per mounted subtree and
//! [`use_inquiry`] hands it to any descendant. Calling `use_inquiry` anywhere
//! else is a wiring bug and panics on the spot.

use leptos::prelude::*;
use log::debug;

use super::error::QuestionError;
use super::question::{QuestionDraft, QuestionSubmission};
use super::state::{InquiryItem, InquiryState};

/// Copyable handle to the session's inquiry state.
///
/// Reads are tracked, so views re-render when the list or the panel flags
/// change. Every mutation is a single synchronous signal update.
#[derive(Clone, Copy, Debug)]
pub struct InquiryStore {
	state: RwSignal<InquiryState>,
}

impl InquiryStore {
	/// A store with an empty list and everything closed.
	pub fn new() -> Self {
		Self {
			state: RwSignal::new(InquiryState::default()),
		}
	}

	/// Snapshot of the listed items.
	pub fn items(&self) -> Vec<InquiryItem> {
		self.state.with(|s| s.items().to_vec())
	}

	/// Number of listed items.
	pub fn item_count(&self) -> usize {
		self.state.with(|s| s.items().len())
	}

	/// Whether an item with `id` is listed.
	pub fn contains(&self, id: &str) -> bool {
		self.state.with(|s| s.contains(id))
	}

	/// Whether the side panel is open.
	pub fn is_sidebar_open(&self) -> bool {
		self.state.with(InquiryState::is_sidebar_open)
	}

	/// Subject of the open question dialog, if any.
	pub fn product_for_question(&self) -> Option<InquiryItem> {
		self.state.with(|s| s.product_for_question().cloned())
	}

	/// Whether the question dialog is showing.
	pub fn is_question_dialog_open(&self) -> bool {
		self.state.with(InquiryState::is_question_dialog_open)
	}

	/// Add `item` unless already listed; always opens the sidebar.
	pub fn add_item(&self, item: InquiryItem) {
		self.state.update(|s| {
			let id = item.id.clone();
			if s.add_item(item) {
				debug!("storefront: inquiry item {} added", id);
			}
		});
	}

	/// Remove the item with `id`, if listed.
	pub fn remove_item(&self, id: &str) {
		self.state.update(|s| {
			if s.remove_item(id) {
				debug!("storefront: inquiry item {} removed", id);
			}
		});
	}

	/// Flip the side panel.
	pub fn toggle_sidebar(&self) {
		self.state.update(InquiryState::toggle_sidebar);
	}

	/// Open or close the side panel.
	pub fn set_sidebar_open(&self, open: bool) {
		self.state.update(|s| s.set_sidebar_open(open));
	}

	/// Show the question dialog for `item`.
	pub fn open_question_dialog(&self, item: InquiryItem) {
		self.state.update(|s| s.open_question_dialog(item));
	}

	/// Close the question dialog without submitting.
	pub fn close_question_dialog(&self) {
		self.state.update(InquiryState::close_question_dialog);
	}

	/// Validate `draft` against the open dialog; closes the dialog on success.
	///
	/// A rejected draft leaves the state untouched and notifies nobody.
	pub fn submit_question(
		&self,
		draft: &QuestionDraft,
	) -> Result<QuestionSubmission, QuestionError> {
		let submission = self.state.with_untracked(|s| s.validate_question(draft))?;
		self.state.update(InquiryState::close_question_dialog);
		Ok(submission)
	}
}

impl Default for InquiryStore {
	fn default() -> Self {
		Self::new()
	}
}

/// Provide a fresh inquiry store to descendants and return it.
pub fn provide_inquiry() -> InquiryStore {
	let store = InquiryStore::new();
	provide_context(store);
	store
}

/// The inquiry store of the enclosing [`InquiryProvider`].
///
/// # Panics
///
/// Panics when no ancestor provides a store.
pub fn use_inquiry() -> InquiryStore {
	use_context::<InquiryStore>()
		.expect("use_inquiry must be called inside an <InquiryProvider>")
}

/// Scopes one inquiry session to its children.
#[component]
pub fn InquiryProvider(children: Children) -> impl IntoView {
	provide_inquiry();
	children()
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use leptos::reactive::owner::Owner;

	use super::*;

	fn item(id: &str) -> InquiryItem {
		InquiryItem {
			id: id.into(),
			name: format!("Product {id}"),
			price: None,
			image_url: None,
		}
	}

	#[test]
	#[should_panic(expected = "InquiryProvider")]
	fn use_outside_provider_panics() {
		let _ = use_inquiry();
	}

	#[test]
	fn provided_store_is_shared() {
		let owner = Owner::new();
		owner.with(|| {
			let provided = provide_inquiry();
			let store = use_inquiry();
			store.add_item(item("a"));
			store.add_item(item("a"));

			assert_eq!(provided.item_count(), 1);
			assert!(provided.is_sidebar_open());

			store.open_question_dialog(item("a"));
			store.open_question_dialog(item("b"));
			assert_eq!(provided.product_for_question().map(|i| i.id), Some("b".into()));

			store.remove_item("missing");
			assert!(store.contains("a"));
		});
	}

	#[test]
	fn rejected_question_does_not_notify() {
		let owner = Owner::new();
		owner.with(|| {
			let store = provide_inquiry();
			store.open_question_dialog(item("a"));

			let runs = Arc::new(AtomicUsize::new(0));
			let counted = runs.clone();
			let state = store.state;
			let open = Memo::new(move |_| {
				counted.fetch_add(1, Ordering::SeqCst);
				state.with(InquiryState::is_question_dialog_open)
			});
			assert!(open.get_untracked());
			assert_eq!(runs.load(Ordering::SeqCst), 1);

			let blank = QuestionDraft {
				email: String::new(),
				message: " ".into(),
			};
			assert_eq!(store.submit_question(&blank), Err(QuestionError::EmptyMessage));
			assert!(open.get_untracked());
			assert_eq!(runs.load(Ordering::SeqCst), 1);

			let filled = QuestionDraft {
				email: String::new(),
				message: "¿Viene en otros colores?".into(),
			};
			let submission = store.submit_question(&filled).unwrap();
			assert_eq!(submission.product_id, "a");
			assert!(!open.get_untracked());
			assert_eq!(runs.load(Ordering::SeqCst), 2);
		});
	}

	#[test]
	fn separate_providers_do_not_share_items() {
		let first = Owner::new();
		let second = Owner::new();
		first.with(|| provide_inquiry().add_item(item("a")));
		second.with(|| assert_eq!(provide_inquiry().item_count(), 0));
		first.with(|| assert_eq!(use_inquiry().item_count(), 1));
	}
}
