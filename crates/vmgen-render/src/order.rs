use crate::error::{RenderError, Result};

/// The five item categories an interface block can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
	/// Custom error declarations.
	Error,
	/// Event declarations.
	Event,
	/// Enum declarations.
	Enum,
	/// Struct declarations.
	Struct,
	/// Cheatcode function declarations.
	Function,
}

impl ItemKind {
	/// Lowercase label for diagnostics.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Event => "event",
			Self::Enum => "enum",
			Self::Struct => "struct",
			Self::Function => "function",
		}
	}
}

/// Emission order over item categories, with no duplicates.
#[derive(Debug, Clone)]
pub struct ItemOrder(Vec<ItemKind>);

impl ItemOrder {
	/// Build an order from an explicit category sequence.
	///
	/// Categories absent from the sequence are simply not emitted; a
	/// category listed twice is rejected.
	pub fn new(kinds: Vec<ItemKind>) -> Result<Self> {
		for (i, kind) in kinds.iter().enumerate() {
			if kinds[..i].contains(kind) {
				return Err(RenderError::DuplicateItem(*kind));
			}
		}
		Ok(Self(kinds))
	}

	/// The categories in emission order.
	pub fn kinds(&self) -> &[ItemKind] {
		&self.0
	}
}

impl Default for ItemOrder {
	fn default() -> Self {
		Self(vec![
			ItemKind::Error,
			ItemKind::Event,
			ItemKind::Enum,
			ItemKind::Struct,
			ItemKind::Function,
		])
	}
}
