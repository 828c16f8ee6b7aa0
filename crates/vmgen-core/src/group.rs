use std::collections::HashSet;

use vmgen_registry::Cheatcode;
use vmgen_render::FunctionEntry;

/// Display name for a group label: known acronyms are uppercased, anything
/// else gets its first letter capitalized.
pub fn display_group(group: &str) -> String {
	match group {
		"evm" => "EVM".to_string(),
		"json" => "JSON".to_string(),
		_ => {
			let mut chars = group.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
				None => String::new(),
			}
		}
	}
}

/// Interleave one banner header ahead of the first entry of each group.
///
/// The input must already be sorted, so each group's entries are contiguous
/// and the header lands at the group's first occurrence. Headers are a
/// distinct [`FunctionEntry`] variant and carry only the display name, so
/// they can never act as a grouping trigger themselves.
pub fn with_group_headers(cheatcodes: Vec<Cheatcode>) -> Vec<FunctionEntry> {
	let mut seen: HashSet<String> = HashSet::new();
	let mut entries = Vec::with_capacity(cheatcodes.len());

	for cheatcode in cheatcodes {
		if seen.insert(cheatcode.group.clone()) {
			entries.push(FunctionEntry::GroupHeader(display_group(&cheatcode.group)));
		}
		entries.push(FunctionEntry::Cheatcode(cheatcode));
	}

	entries
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use vmgen_registry::{Function, Mutability, Visibility};

	use super::*;

	fn cheatcode(id: &str, group: &str) -> Cheatcode {
		Cheatcode {
			func: Function {
				id: id.to_string(),
				description: String::new(),
				declaration: format!("function {id}() external;"),
				visibility: Visibility::External,
				mutability: Mutability::None,
				signature: format!("{id}()"),
				selector: "0x00000000".to_string(),
				selector_bytes: vec![0, 0, 0, 0],
			},
			group: group.to_string(),
			status: "stable".to_string(),
			safety: "safe".to_string(),
		}
	}

	#[test]
	fn display_names_follow_the_known_acronyms() {
		assert_eq!(display_group("evm"), "EVM");
		assert_eq!(display_group("json"), "JSON");
		assert_eq!(display_group("testing"), "Testing");
		assert_eq!(display_group("fs"), "Fs");
		assert_eq!(display_group(""), "");
	}

	#[test]
	fn one_header_per_group_at_first_occurrence() {
		let entries = with_group_headers(vec![
			cheatcode("load", "evm"),
			cheatcode("roll", "evm"),
			cheatcode("parseJson", "json"),
		]);

		assert_eq!(entries.len(), 5);
		assert_eq!(entries[0], FunctionEntry::GroupHeader("EVM".to_string()));
		assert!(matches!(&entries[1], FunctionEntry::Cheatcode(c) if c.func.id == "load"));
		assert!(matches!(&entries[2], FunctionEntry::Cheatcode(c) if c.func.id == "roll"));
		assert_eq!(entries[3], FunctionEntry::GroupHeader("JSON".to_string()));
		assert!(matches!(&entries[4], FunctionEntry::Cheatcode(c) if c.func.id == "parseJson"));
	}

	#[test]
	fn header_count_matches_distinct_groups() {
		let entries = with_group_headers(vec![
			cheatcode("a", "evm"),
			cheatcode("b", "fs"),
			cheatcode("c", "fs"),
			cheatcode("d", "string"),
		]);

		let headers = entries
			.iter()
			.filter(|entry| matches!(entry, FunctionEntry::GroupHeader(_)))
			.count();
		assert_eq!(headers, 3);
	}

	#[test]
	fn empty_input_yields_no_entries() {
		assert_eq!(with_group_headers(Vec::new()), Vec::new());
	}
}
