use std::path::{Path, PathBuf};
use std::process::Command;

use vmgen_registry::{CHEATCODES_JSON_URL, Registry, fetch_registry, read_registry};

use crate::error::{Result, VmgenError};
use crate::pipeline::{GenerateConfig, generate};

/// Top-level driver: loads the registry, generates the interface source,
/// writes it to the output path, and runs the external formatter over it.
///
/// Every knob has a production default; tests swap in fixture files, a
/// scratch output path, and an empty formatter command.
#[derive(Debug, Clone)]
pub struct Generator {
	/// Remote registry URL, used when no local override is set.
	url: String,
	/// Local registry file overriding the remote fetch.
	from: Option<PathBuf>,
	/// Where the generated source is written.
	out_path: PathBuf,
	/// Formatter command; the output path is appended as the last argument.
	/// Empty means no formatting pass.
	formatter: Vec<String>,
	/// Fixed values for the generation run.
	config: GenerateConfig,
}

impl Default for Generator {
	fn default() -> Self {
		Self::new()
	}
}

impl Generator {
	/// Create a generator with production defaults: the well-known registry
	/// URL, `src/Vm.sol` as the output path, and `forge fmt` as the
	/// formatter.
	pub fn new() -> Self {
		Self {
			url: CHEATCODES_JSON_URL.to_string(),
			from: None,
			out_path: PathBuf::from("src/Vm.sol"),
			formatter: vec!["forge".to_string(), "fmt".to_string()],
			config: GenerateConfig::default(),
		}
	}

	/// Override the remote registry URL.
	pub fn with_url(mut self, url: &str) -> Self {
		self.url = url.to_string();
		self
	}

	/// Read the registry from a local file instead of fetching it.
	pub fn with_from(mut self, path: impl Into<PathBuf>) -> Self {
		self.from = Some(path.into());
		self
	}

	/// Override the output path.
	pub fn with_out_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.out_path = path.into();
		self
	}

	/// Override the formatter command. An empty command disables the
	/// formatting pass.
	pub fn with_formatter(mut self, formatter: Vec<String>) -> Self {
		self.formatter = formatter;
		self
	}

	/// Override the generation config.
	pub fn with_config(mut self, config: GenerateConfig) -> Self {
		self.config = config;
		self
	}

	/// The configured output path.
	pub fn out_path(&self) -> &Path {
		&self.out_path
	}

	/// Load the registry from the configured source.
	pub fn load(&self) -> Result<Registry> {
		match &self.from {
			Some(path) => Ok(read_registry(path)?),
			None => Ok(fetch_registry(&self.url)?),
		}
	}

	/// Run the full pipeline and return the output path on success.
	///
	/// If the formatter fails the file has already been written; there is no
	/// other partial state.
	pub fn run(&self) -> Result<&Path> {
		let registry = self.load()?;
		let output = generate(&registry, &self.config)?;
		std::fs::write(&self.out_path, output)?;
		self.format_output()?;
		Ok(&self.out_path)
	}

	fn format_output(&self) -> Result<()> {
		let Some((program, args)) = self.formatter.split_first() else {
			return Ok(());
		};

		let command = format!("{} {}", self.formatter.join(" "), self.out_path.display());
		let status = Command::new(program)
			.args(args)
			.arg(&self.out_path)
			.status()
			.map_err(|err| VmgenError::Format {
				command: command.clone(),
				detail: err.to_string(),
			})?;

		if !status.success() {
			return Err(VmgenError::Format {
				command,
				detail: format!("exited with {status}"),
			});
		}

		Ok(())
	}
}
