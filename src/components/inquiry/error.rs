//! Errors raised while submitting an inquiry question.

use std::fmt;

/// Reasons a question cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionError {
	/// No product is selected for a question.
	NoOpenDialog,
	/// The question text is blank.
	EmptyMessage,
	/// An email was given but is not a plausible address.
	InvalidEmail,
}

impl fmt::Display for QuestionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			QuestionError::NoOpenDialog => write!(f, "No hay un producto seleccionado para consultar."),
			QuestionError::EmptyMessage => write!(f, "Escribí tu consulta antes de enviarla."),
			QuestionError::InvalidEmail => write!(f, "El email no parece válido."),
		}
	}
}

impl std::error::Error for QuestionError {}
