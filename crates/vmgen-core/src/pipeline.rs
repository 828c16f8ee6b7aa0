use once_cell::sync::Lazy;
use regex::Regex;
use vmgen_registry::{Cheatcode, Registry};
use vmgen_render::{InterfaceDoc, InterfacePrinter};

use crate::error::{Result, VmgenError};
use crate::group::with_group_headers;
use crate::order::{cmp_cheatcodes, filter_cheatcodes, sort_cheatcodes};

/// Fixed doc banner emitted ahead of the safe interface block.
const VM_SAFE_DOC: &str = "\
/// The `VmSafe` interface does not allow manipulation of the EVM state or other actions that may
/// result in Script simulations differing from on-chain execution. It is recommended to only use
/// these cheats in scripts.
";

/// Fixed doc banner emitted ahead of the unsafe interface block.
const VM_DOC: &str = "\
/// The `Vm` interface does allow manipulation of the EVM state. These are all intended to be used
/// in tests, but it is not recommended to use these cheats in scripts.
";

/// Fixed values threaded through one generation run.
///
/// Everything here is data rather than embedded literals, so tests can
/// substitute fixture values.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
	/// First line of the generated file.
	pub disclaimer: String,
	/// SPDX license identifier for the prelude.
	pub spdx_identifier: String,
	/// Explicit Solidity version requirement for the prelude.
	pub solidity_requirement: String,
	/// Whether to emit the experimental ABI coder pragma.
	pub abicoder_v2: bool,
	/// Name of the safe interface block.
	pub safe_name: String,
	/// Doc banner printed ahead of the safe interface block; ends with a
	/// newline.
	pub safe_doc: String,
	/// Name of the unsafe interface block, which extends the safe one.
	pub unsafe_name: String,
	/// Doc banner printed ahead of the unsafe interface block; ends with a
	/// newline.
	pub unsafe_doc: String,
}

impl Default for GenerateConfig {
	fn default() -> Self {
		Self {
			disclaimer: "// Automatically @generated by vmgen. Do not modify manually.".to_string(),
			spdx_identifier: "MIT OR Apache-2.0".to_string(),
			solidity_requirement: ">=0.8.20 <0.9.0".to_string(),
			abicoder_v2: true,
			safe_name: "VmSafe".to_string(),
			safe_doc: VM_SAFE_DOC.to_string(),
			unsafe_name: "Vm".to_string(),
			unsafe_doc: VM_DOC.to_string(),
		}
	}
}

/// Run the full generation pipeline over a loaded registry and return the
/// final source text, ready to be written and formatted.
pub fn generate(registry: &Registry, config: &GenerateConfig) -> Result<String> {
	let mut filtered = filter_cheatcodes(&registry.cheatcodes);
	sort_cheatcodes(&mut filtered);

	let mut safe: Vec<Cheatcode> = filtered
		.iter()
		.filter(|cheatcode| cheatcode.safety == "safe")
		.cloned()
		.collect();
	let mut unsafe_: Vec<Cheatcode> = filtered
		.iter()
		.filter(|cheatcode| cheatcode.safety == "unsafe")
		.cloned()
		.collect();
	if safe.len() + unsafe_.len() != filtered.len() {
		return Err(VmgenError::PartitionMismatch {
			safe: safe.len(),
			unsafe_count: unsafe_.len(),
			filtered: filtered.len(),
		});
	}

	// Already in order from the full-list sort, but each partition is sorted
	// on its own so neither depends on the other's presence.
	safe.sort_by(cmp_cheatcodes);
	unsafe_.sort_by(cmp_cheatcodes);

	// Custom errors were introduced in Solidity 0.8.4 and are suppressed
	// from the generated interface. Events, enums, and structs appear only
	// in the safe block; the unsafe block holds nothing but its functions.
	let safe_iface = InterfaceDoc {
		errors: Vec::new(),
		events: registry.events.clone(),
		enums: registry.enums.clone(),
		structs: registry.structs.clone(),
		functions: with_group_headers(safe),
	};
	let unsafe_iface = InterfaceDoc {
		functions: with_group_headers(unsafe_),
		..InterfaceDoc::default()
	};

	let mut printer = InterfacePrinter::new()
		.with_spdx_identifier(&config.spdx_identifier)
		.with_solidity_requirement(&config.solidity_requirement)
		.with_abicoder_pragma(config.abicoder_v2);

	let mut out = String::new();
	out.push_str(&config.disclaimer);
	out.push_str("\n\n");

	printer.emit_prelude(None);
	printer.set_prelude(false);
	out.push_str(&printer.finish());

	out.push_str("\n\n");
	out.push_str(&config.safe_doc);
	printer.emit_interface(&safe_iface, &config.safe_name, "");
	out.push_str(&printer.finish());

	out.push_str("\n\n");
	out.push_str(&config.unsafe_doc);
	printer.emit_interface(&unsafe_iface, &config.unsafe_name, &config.safe_name);
	out.push_str(&printer.finish());

	Ok(rewrite_memory_returns(&out))
}

static MEMORY_BEFORE_RETURNS: Lazy<Regex> =
	Lazy::new(|| Regex::new(r" memory (.*returns)").unwrap());

/// Compatibility rewrite for Solidity <0.8.0: a `memory` storage location on
/// a declaration line that goes on to mention `returns` becomes `calldata`.
///
/// This is a narrow textual pattern over generated text, not parsing, and is
/// deliberately kept identical to the historical substitution.
pub fn rewrite_memory_returns(text: &str) -> String {
	MEMORY_BEFORE_RETURNS
		.replace_all(text, " calldata $1")
		.to_string()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use vmgen_registry::{Function, Mutability, Visibility, parse_registry};

	use super::*;

	fn cheatcode(id: &str, group: &str, status: &str, safety: &str) -> Cheatcode {
		Cheatcode {
			func: Function {
				id: id.to_string(),
				description: format!("Description of `{id}`."),
				declaration: format!("function {id}() external;"),
				visibility: Visibility::External,
				mutability: Mutability::None,
				signature: format!("{id}()"),
				selector: "0x00000000".to_string(),
				selector_bytes: vec![0, 0, 0, 0],
			},
			group: group.to_string(),
			status: status.to_string(),
			safety: safety.to_string(),
		}
	}

	fn registry(cheatcodes: Vec<Cheatcode>) -> Registry {
		let mut registry = parse_registry(
			r#"{"errors": [], "events": [], "enums": [], "structs": [], "cheatcodes": []}"#,
		)
		.unwrap();
		registry.cheatcodes = cheatcodes;
		registry
	}

	#[test]
	fn two_groups_yield_two_blocks_with_one_banner_each() {
		let registry = registry(vec![
			cheatcode("a", "evm", "stable", "safe"),
			cheatcode("b", "json", "stable", "unsafe"),
		]);
		let out = generate(&registry, &GenerateConfig::default()).unwrap();

		assert_eq!(out.matches("// ======== EVM ========").count(), 1);
		assert_eq!(out.matches("// ======== JSON ========").count(), 1);

		let safe_start = out.find("interface VmSafe {").unwrap();
		let unsafe_start = out.find("interface Vm is VmSafe {").unwrap();
		let safe_block = &out[safe_start..unsafe_start];
		let unsafe_block = &out[unsafe_start..];

		assert!(safe_block.contains("// ======== EVM ========"));
		assert!(safe_block.contains("function a() external;"));
		assert!(!safe_block.contains("function b"));

		assert!(unsafe_block.contains("// ======== JSON ========"));
		assert!(unsafe_block.contains("function b() external;"));
	}

	#[test]
	fn experimental_and_internal_never_appear() {
		let registry = registry(vec![
			cheatcode("visible", "evm", "stable", "safe"),
			cheatcode("hidden", "evm", "experimental", "safe"),
			cheatcode("secret", "evm", "internal", "unsafe"),
		]);
		let out = generate(&registry, &GenerateConfig::default()).unwrap();

		assert!(out.contains("function visible() external;"));
		assert!(!out.contains("hidden"));
		assert!(!out.contains("secret"));
	}

	#[test]
	fn unexpected_safety_value_is_a_partition_mismatch() {
		let registry = registry(vec![cheatcode("odd", "evm", "stable", "dangerous")]);
		let err = generate(&registry, &GenerateConfig::default()).unwrap_err();
		assert!(
			matches!(
				err,
				VmgenError::PartitionMismatch {
					safe: 0,
					unsafe_count: 0,
					filtered: 1
				}
			),
			"unexpected error {err}"
		);
	}

	#[test]
	fn output_opens_with_disclaimer_and_prelude() {
		let registry = registry(vec![cheatcode("a", "evm", "stable", "safe")]);
		let out = generate(&registry, &GenerateConfig::default()).unwrap();

		let mut lines = out.lines();
		assert_eq!(
			lines.next(),
			Some("// Automatically @generated by vmgen. Do not modify manually.")
		);
		assert_eq!(lines.next(), Some(""));
		assert_eq!(lines.next(), Some("// SPDX-License-Identifier: MIT OR Apache-2.0"));
		assert_eq!(lines.next(), Some("pragma solidity >=0.8.20 <0.9.0;"));
		assert_eq!(lines.next(), Some("pragma experimental ABIEncoderV2;"));
	}

	#[test]
	fn safe_doc_precedes_safe_block_and_unsafe_doc_the_unsafe_block() {
		let registry = registry(vec![
			cheatcode("a", "evm", "stable", "safe"),
			cheatcode("b", "evm", "stable", "unsafe"),
		]);
		let out = generate(&registry, &GenerateConfig::default()).unwrap();

		assert!(out.contains("/// these cheats in scripts.\ninterface VmSafe {"));
		assert!(out.contains("/// in tests, but it is not recommended to use these cheats in scripts.\ninterface Vm is VmSafe {"));
	}

	#[test]
	fn generation_is_deterministic() {
		let registry = registry(vec![
			cheatcode("roll", "evm", "stable", "unsafe"),
			cheatcode("load", "evm", "stable", "safe"),
			cheatcode("parseJson", "json", "stable", "safe"),
		]);
		let config = GenerateConfig::default();
		assert_eq!(
			generate(&registry, &config).unwrap(),
			generate(&registry, &config).unwrap()
		);
	}

	#[test]
	fn memory_before_returns_becomes_calldata() {
		assert_eq!(
			rewrite_memory_returns(
				"function f(string memory foo) public returns (uint256);"
			),
			"function f(string calldata foo) public returns (uint256);"
		);
	}

	#[test]
	fn memory_without_returns_is_untouched() {
		let line = "function f(string memory foo) public;";
		assert_eq!(rewrite_memory_returns(line), line);
	}

	#[test]
	fn rewrite_does_not_cross_lines() {
		let text = "function f(string memory foo) public;\nfunction g() public returns (uint256);";
		assert_eq!(rewrite_memory_returns(text), text);
	}
}
