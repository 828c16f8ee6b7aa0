use std::fmt;

/// Aggregate errors produced by the generation pipeline.
#[derive(Debug)]
pub enum VmgenError {
	/// Failure while acquiring or decoding the registry document.
	Registry(vmgen_registry::RegistryError),
	/// Failure while configuring the renderer.
	Render(vmgen_render::RenderError),
	/// Filesystem failure while writing the generated output.
	Io(std::io::Error),
	/// The safe/unsafe split did not cover the filtered cheatcode list,
	/// meaning the input carried an unexpected safety value.
	PartitionMismatch {
		/// Number of entries classified safe.
		safe: usize,
		/// Number of entries classified unsafe.
		unsafe_count: usize,
		/// Number of entries after status filtering.
		filtered: usize,
	},
	/// The external formatter could not be run or exited non-zero.
	Format {
		/// The command line that was invoked.
		command: String,
		/// What went wrong.
		detail: String,
	},
}

impl fmt::Display for VmgenError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Registry(err) => write!(f, "{err}"),
			Self::Render(err) => write!(f, "{err}"),
			Self::Io(err) => write!(f, "failed to write output: {err}"),
			Self::PartitionMismatch {
				safe,
				unsafe_count,
				filtered,
			} => write!(
				f,
				"safe ({safe}) and unsafe ({unsafe_count}) partitions do not cover the \
				 {filtered} filtered cheatcodes; the input carries an unexpected safety value"
			),
			Self::Format { command, detail } => {
				write!(f, "formatter `{command}` failed: {detail}")
			}
		}
	}
}

impl std::error::Error for VmgenError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Registry(err) => Some(err),
			Self::Render(err) => Some(err),
			Self::Io(err) => Some(err),
			Self::PartitionMismatch { .. } | Self::Format { .. } => None,
		}
	}
}

impl From<vmgen_registry::RegistryError> for VmgenError {
	fn from(err: vmgen_registry::RegistryError) -> Self {
		Self::Registry(err)
	}
}

impl From<vmgen_render::RenderError> for VmgenError {
	fn from(err: vmgen_render::RenderError) -> Self {
		Self::Render(err)
	}
}

impl From<std::io::Error> for VmgenError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

/// Result type returned by vmgen-core helpers.
pub type Result<T> = std::result::Result<T, VmgenError>;
