//! Inquiry list state, independent of any reactive runtime.

use super::error::QuestionError;
use super::question::{QuestionDraft, QuestionSubmission};
use crate::components::catalog::Product;

/// The slice of a product kept in the inquiry list.
#[derive(Clone, Debug, PartialEq)]
pub struct InquiryItem {
	/// Product id.
	pub id: String,
	/// Product name.
	pub name: String,
	/// Price when known.
	pub price: Option<f64>,
	/// First product image, if the product has any.
	pub image_url: Option<String>,
}

impl From<&Product> for InquiryItem {
	fn from(product: &Product) -> Self {
		Self {
			id: product.id.clone(),
			name: product.name.clone(),
			price: Some(product.price),
			image_url: product.images.first().cloned(),
		}
	}
}

/// Items the visitor wants to ask about, plus the visibility of the side
/// panel and of the question dialog.
///
/// Items are unique by id and keep insertion order. The dialog is open
/// exactly when `product_for_question` holds an item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryState {
	items: Vec<InquiryItem>,
	is_sidebar_open: bool,
	product_for_question: Option<InquiryItem>,
}

impl InquiryState {
	/// Listed items in insertion order.
	pub fn items(&self) -> &[InquiryItem] {
		&self.items
	}

	/// Whether the side panel is open.
	pub fn is_sidebar_open(&self) -> bool {
		self.is_sidebar_open
	}

	/// Subject of the open question dialog.
	pub fn product_for_question(&self) -> Option<&InquiryItem> {
		self.product_for_question.as_ref()
	}

	/// Open exactly while a subject is set.
	pub fn is_question_dialog_open(&self) -> bool {
		self.product_for_question.is_some()
	}

	/// Whether an item with `id` is listed.
	pub fn contains(&self, id: &str) -> bool {
		self.items.iter().any(|item| item.id == id)
	}

	/// Append `item` unless its id is already listed, then open the sidebar
	/// either way. Returns whether the item was new.
	pub fn add_item(&mut self, item: InquiryItem) -> bool {
		let added = !self.contains(&item.id);
		if added {
			self.items.push(item);
		}
		self.is_sidebar_open = true;
		added
	}

	/// Drop the item with the given id. Returns whether anything was removed.
	pub fn remove_item(&mut self, id: &str) -> bool {
		let before = self.items.len();
		self.items.retain(|item| item.id != id);
		self.items.len() != before
	}

	/// Open the side panel if closed, close it if open.
	pub fn toggle_sidebar(&mut self) {
		self.is_sidebar_open = !self.is_sidebar_open;
	}

	/// Open or close the side panel.
	pub fn set_sidebar_open(&mut self, open: bool) {
		self.is_sidebar_open = open;
	}

	/// Show the question dialog for `item`, replacing any current subject.
	pub fn open_question_dialog(&mut self, item: InquiryItem) {
		self.product_for_question = Some(item);
	}

	/// Close the dialog without submitting.
	pub fn close_question_dialog(&mut self) {
		self.product_for_question = None;
	}

	/// Check `draft` against the open dialog's subject without changing
	/// anything.
	pub fn validate_question(
		&self,
		draft: &QuestionDraft,
	) -> Result<QuestionSubmission, QuestionError> {
		let subject = self
			.product_for_question
			.as_ref()
			.ok_or(QuestionError::NoOpenDialog)?;
		draft.submit(subject)
	}

	/// Validate `draft` against the open dialog's subject. On success the
	/// dialog closes; on failure it stays open.
	pub fn submit_question(
		&mut self,
		draft: &QuestionDraft,
	) -> Result<QuestionSubmission, QuestionError> {
		let submission = self.validate_question(draft)?;
		self.close_question_dialog();
		Ok(submission)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: &str, name: &str) -> InquiryItem {
		InquiryItem {
			id: id.into(),
			name: name.into(),
			price: Some(1500.0),
			image_url: None,
		}
	}

	fn ids(state: &InquiryState) -> Vec<&str> {
		state.items().iter().map(|i| i.id.as_str()).collect()
	}

	#[test]
	fn starts_empty_and_closed() {
		let state = InquiryState::default();
		assert!(state.items().is_empty());
		assert!(!state.is_sidebar_open());
		assert!(!state.is_question_dialog_open());
	}

	#[test]
	fn duplicate_add_is_ignored_but_opens_sidebar() {
		let mut state = InquiryState::default();
		assert!(state.add_item(item("a", "Vase")));
		assert!(state.is_sidebar_open());

		state.set_sidebar_open(false);
		assert!(!state.add_item(item("a", "Renamed vase")));
		assert!(state.is_sidebar_open());
		assert_eq!(state.items().len(), 1);
		assert_eq!(state.items()[0].name, "Vase");
	}

	#[test]
	fn keeps_insertion_order() {
		let mut state = InquiryState::default();
		for id in ["a", "b", "c"] {
			state.add_item(item(id, id));
		}
		assert_eq!(ids(&state), ["a", "b", "c"]);

		assert!(state.remove_item("b"));
		assert_eq!(ids(&state), ["a", "c"]);

		state.add_item(item("a", "again"));
		assert_eq!(ids(&state), ["a", "c"]);
	}

	#[test]
	fn removing_unknown_id_changes_nothing() {
		let mut state = InquiryState::default();
		state.add_item(item("a", "Vase"));
		state.add_item(item("b", "Lamp"));
		let before = state.clone();

		assert!(!state.remove_item("zzz"));
		assert_eq!(state, before);

		let mut empty = InquiryState::default();
		assert!(!empty.remove_item("a"));
	}

	#[test]
	fn sidebar_toggles_independently_of_items() {
		let mut state = InquiryState::default();
		state.toggle_sidebar();
		assert!(state.is_sidebar_open());
		state.toggle_sidebar();
		assert!(!state.is_sidebar_open());
		assert!(state.items().is_empty());
	}

	#[test]
	fn last_opened_question_wins() {
		let mut state = InquiryState::default();
		state.open_question_dialog(item("x", "X"));
		state.open_question_dialog(item("y", "Y"));
		assert_eq!(state.product_for_question().map(|i| i.id.as_str()), Some("y"));

		state.close_question_dialog();
		assert!(state.product_for_question().is_none());
	}

	#[test]
	fn submitting_closes_the_dialog() {
		let mut state = InquiryState::default();
		state.open_question_dialog(item("x", "Planter"));
		let draft = QuestionDraft {
			email: String::new(),
			message: "¿Qué tamaño tiene?".into(),
		};

		let submission = state.submit_question(&draft).unwrap();
		assert_eq!(submission.product_id, "x");
		assert_eq!(submission.product_name, "Planter");
		assert!(!state.is_question_dialog_open());
	}

	#[test]
	fn invalid_submission_keeps_dialog_open() {
		let mut state = InquiryState::default();
		state.open_question_dialog(item("x", "Planter"));
		let draft = QuestionDraft {
			email: String::new(),
			message: "   ".into(),
		};
		assert_eq!(state.submit_question(&draft), Err(QuestionError::EmptyMessage));
		assert!(state.is_question_dialog_open());
	}

	#[test]
	fn submitting_without_dialog_fails() {
		let mut state = InquiryState::default();
		let draft = QuestionDraft {
			email: String::new(),
			message: "Hola".into(),
		};
		assert_eq!(state.submit_question(&draft), Err(QuestionError::NoOpenDialog));
	}

	#[test]
	fn projection_takes_first_image() {
		let product = Product {
			id: "p1".into(),
			name: "Dragon".into(),
			description: String::new(),
			price: 9900.0,
			images: vec!["front.jpg".into(), "back.jpg".into()],
			category: "figuras".into(),
			featured: false,
		};
		let item = InquiryItem::from(&product);
		assert_eq!(item.image_url.as_deref(), Some("front.jpg"));
		assert_eq!(item.price, Some(9900.0));

		let bare = Product {
			images: Vec::new(),
			..product
		};
		assert_eq!(InquiryItem::from(&bare).image_url, None);
	}
}
