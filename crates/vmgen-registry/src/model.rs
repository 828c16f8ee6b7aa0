use serde::Deserialize;

/// Solidity visibility of an interface function.
///
/// Unknown values in the input document fail deserialization rather than
/// rendering as empty text downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
	/// Callable from outside the contract only.
	External,
	/// Callable from anywhere.
	Public,
	/// Callable from the contract and derived contracts.
	Internal,
	/// Callable from the contract only.
	Private,
}

/// Solidity state mutability of an interface function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Mutability {
	/// Reads no state.
	#[serde(rename = "pure")]
	Pure,
	/// Reads but does not modify state.
	#[serde(rename = "view")]
	View,
	/// No mutability modifier; serialized as the empty string.
	#[serde(rename = "")]
	None,
}

/// A single interface function as it appears in the registry document.
///
/// The declaration is the literal signature text to emit; it is never parsed.
/// The selector arrives pre-computed, both as a hex string and as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Function {
	/// Unique identifier within the registry, used as the final sort key.
	pub id: String,
	/// Human-readable documentation for the function.
	pub description: String,
	/// Opaque Solidity declaration text, emitted verbatim.
	pub declaration: String,
	/// Function visibility.
	pub visibility: Visibility,
	/// Function state mutability.
	pub mutability: Mutability,
	/// Canonical signature string.
	pub signature: String,
	/// Pre-computed selector as a hex string.
	pub selector: String,
	/// Pre-computed selector bytes.
	#[serde(rename = "selectorBytes")]
	pub selector_bytes: Vec<u8>,
}

/// A cheatcode: one function plus its grouping, lifecycle, and safety
/// metadata.
///
/// Group and status are open, case-sensitive string sets. Safety is also an
/// open string, but only "safe" and "unsafe" are meaningful downstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cheatcode {
	/// The interface function this cheatcode describes.
	pub func: Function,
	/// Free-form category label used for visual clustering.
	pub group: String,
	/// Lifecycle status, e.g. "stable" or "experimental".
	pub status: String,
	/// Safety classification, "safe" or "unsafe".
	pub safety: String,
}

/// A custom error declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Error {
	/// Error name.
	pub name: String,
	/// Human-readable documentation.
	pub description: String,
	/// Opaque declaration text, emitted verbatim.
	pub declaration: String,
}

/// An event declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
	/// Event name.
	pub name: String,
	/// Human-readable documentation.
	pub description: String,
	/// Opaque declaration text, emitted verbatim.
	pub declaration: String,
}

/// One variant of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumVariant {
	/// Variant name.
	pub name: String,
	/// Human-readable documentation.
	pub description: String,
}

/// An enum declaration with its ordered variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Enum {
	/// Enum name.
	pub name: String,
	/// Human-readable documentation.
	pub description: String,
	/// Variants in declaration order.
	pub variants: Vec<EnumVariant>,
}

/// One field of a struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructField {
	/// Field name.
	pub name: String,
	/// Opaque Solidity type text.
	pub ty: String,
	/// Human-readable documentation.
	pub description: String,
}

/// A struct declaration with its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Struct {
	/// Struct name.
	pub name: String,
	/// Human-readable documentation.
	pub description: String,
	/// Fields in declaration order.
	pub fields: Vec<StructField>,
}

/// The full registry document: every declaration category plus the cheatcode
/// list. Input order is preserved; ordering is applied downstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registry {
	/// Custom error declarations.
	pub errors: Vec<Error>,
	/// Event declarations.
	pub events: Vec<Event>,
	/// Enum declarations.
	pub enums: Vec<Enum>,
	/// Struct declarations.
	pub structs: Vec<Struct>,
	/// The full cheatcode list.
	pub cheatcodes: Vec<Cheatcode>,
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const FUNC_JSON: &str = r#"{
		"id": "getNonce",
		"description": "Gets the nonce of an account.",
		"declaration": "function getNonce(address account) external view returns (uint64 nonce);",
		"visibility": "external",
		"mutability": "view",
		"signature": "getNonce(address)",
		"selector": "0x2d0335ab",
		"selectorBytes": [45, 3, 53, 171]
	}"#;

	#[test]
	fn function_decodes() {
		let func: Function = serde_json::from_str(FUNC_JSON).unwrap();
		assert_eq!(func.id, "getNonce");
		assert_eq!(func.visibility, Visibility::External);
		assert_eq!(func.mutability, Mutability::View);
		assert_eq!(func.selector_bytes, vec![45, 3, 53, 171]);
	}

	#[test]
	fn empty_mutability_decodes_to_none() {
		let mutability: Mutability = serde_json::from_str(r#""""#).unwrap();
		assert_eq!(mutability, Mutability::None);
	}

	#[test]
	fn unknown_visibility_is_rejected() {
		let result: std::result::Result<Visibility, _> = serde_json::from_str(r#""package""#);
		assert!(result.is_err());
	}

	#[test]
	fn unknown_mutability_is_rejected() {
		let result: std::result::Result<Mutability, _> = serde_json::from_str(r#""payable""#);
		assert!(result.is_err());
	}

	#[test]
	fn cheatcode_decodes_with_metadata() {
		let json = format!(
			r#"{{"func": {FUNC_JSON}, "group": "evm", "status": "stable", "safety": "safe"}}"#
		);
		let cheatcode: Cheatcode = serde_json::from_str(&json).unwrap();
		assert_eq!(cheatcode.group, "evm");
		assert_eq!(cheatcode.status, "stable");
		assert_eq!(cheatcode.safety, "safe");
	}

	#[test]
	fn struct_field_uses_ty_key() {
		let json = r#"{"name": "kind", "ty": "uint8", "description": "Kind tag."}"#;
		let field: StructField = serde_json::from_str(json).unwrap();
		assert_eq!(field.ty, "uint8");
	}
}
