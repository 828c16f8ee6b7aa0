use std::io::Read;
use std::path::Path;

use crate::error::{RegistryError, Result};
use crate::model::Registry;

/// Well-known URL of the cheatcode registry published by Foundry.
pub const CHEATCODES_JSON_URL: &str =
	"https://raw.githubusercontent.com/foundry-rs/foundry/master/crates/cheatcodes/assets/cheatcodes.json";

/// Decode a registry document from JSON text.
pub fn parse_registry(json: &str) -> Result<Registry> {
	Ok(serde_json::from_str(json)?)
}

/// Read and decode a registry document from a local file.
pub fn read_registry(path: &Path) -> Result<Registry> {
	let json = std::fs::read_to_string(path)?;
	parse_registry(&json)
}

/// Fetch and decode the registry document from a remote URL.
pub fn fetch_registry(url: &str) -> Result<Registry> {
	let mut response = ureq::get(url)
		.call()
		.map_err(|err| RegistryError::Fetch(format!("failed to reach {url}: {err}")))?;

	let mut body = String::new();
	response
		.body_mut()
		.as_reader()
		.read_to_string(&mut body)
		.map_err(|err| RegistryError::Fetch(format!("failed to read response from {url}: {err}")))?;

	parse_registry(&body)
}
