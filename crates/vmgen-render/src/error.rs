use std::fmt;

use crate::order::ItemKind;

/// Errors produced while configuring the printer.
#[derive(Debug)]
pub enum RenderError {
	/// An item category appears more than once in an emission order.
	DuplicateItem(ItemKind),
}

impl fmt::Display for RenderError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateItem(kind) => {
				write!(f, "duplicate item category in emission order: {}", kind.label())
			}
		}
	}
}

impl std::error::Error for RenderError {}

/// Result type returned by vmgen-render helpers.
pub type Result<T> = std::result::Result<T, RenderError>;
