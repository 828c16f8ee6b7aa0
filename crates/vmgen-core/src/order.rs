use std::cmp::Ordering;

use vmgen_registry::Cheatcode;

/// Lifecycle statuses dropped before generation.
pub const EXCLUDED_STATUSES: &[&str] = &["experimental", "internal"];

/// Drop cheatcodes whose status is excluded from generation.
pub fn filter_cheatcodes(cheatcodes: &[Cheatcode]) -> Vec<Cheatcode> {
	cheatcodes
		.iter()
		.filter(|cheatcode| !EXCLUDED_STATUSES.contains(&cheatcode.status.as_str()))
		.cloned()
		.collect()
}

/// The deterministic total order over cheatcodes: group, then status, then
/// safety, then function id, each in ascending string order.
///
/// The key order is part of the output contract; regenerating from the same
/// input must be byte-identical, so the comparison must not be rearranged.
/// Function ids are unique within a registry, which rules out ties.
pub fn cmp_cheatcodes(a: &Cheatcode, b: &Cheatcode) -> Ordering {
	a.group
		.cmp(&b.group)
		.then_with(|| a.status.cmp(&b.status))
		.then_with(|| a.safety.cmp(&b.safety))
		.then_with(|| a.func.id.cmp(&b.func.id))
}

/// Sort cheatcodes into the deterministic order.
pub fn sort_cheatcodes(cheatcodes: &mut [Cheatcode]) {
	cheatcodes.sort_by(cmp_cheatcodes);
}
