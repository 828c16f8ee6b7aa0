use std::fmt;

/// Errors produced while acquiring or decoding the cheatcode registry.
#[derive(Debug)]
pub enum RegistryError {
	/// Network failure while fetching the registry document.
	Fetch(String),
	/// Filesystem failure while reading a local registry document.
	Io(std::io::Error),
	/// The document did not match the expected registry shape.
	Parse(serde_json::Error),
}

impl fmt::Display for RegistryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fetch(message) => write!(f, "failed to fetch cheatcode registry: {message}"),
			Self::Io(err) => write!(f, "failed to read cheatcode registry: {err}"),
			Self::Parse(err) => write!(f, "failed to parse cheatcode registry: {err}"),
		}
	}
}

impl std::error::Error for RegistryError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Fetch(_) => None,
			Self::Io(err) => Some(err),
			Self::Parse(err) => Some(err),
		}
	}
}

impl From<std::io::Error> for RegistryError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for RegistryError {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err)
	}
}

/// Result type returned by vmgen-registry helpers.
pub type Result<T> = std::result::Result<T, RegistryError>;
