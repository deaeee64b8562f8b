//! Inquiry list: products a visitor wants to ask about.
//!
//! Not a cart. Items are only collected to ask questions about them, one
//! product at a time, through the question dialog.
//!
//! # Example
//!
//! ```ignore
//! use print_storefront::{InquiryProvider, InquirySidebar, InquiryQuestionDialog};
//!
//! view! {
//!     <InquiryProvider>
//!         <ProductList catalog=catalog />
//!         <InquirySidebar />
//!         <InquiryQuestionDialog />
//!     </InquiryProvider>
//! }
//! ```

mod context;
mod error;
mod question;
mod sidebar;
mod state;

pub use context::{InquiryProvider, InquiryStore, provide_inquiry, use_inquiry};
pub use error::QuestionError;
pub use question::{InquiryQuestionDialog, QuestionDraft, QuestionSubmission};
pub use sidebar::InquirySidebar;
pub use state::{InquiryItem, InquiryState};
