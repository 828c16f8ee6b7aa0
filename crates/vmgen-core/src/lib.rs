//! Orchestration for the Vm.sol cheatcode interface generator.
//!
//! The pipeline is strictly downstream: the registry is loaded once, filtered
//! by lifecycle status, sorted into a deterministic total order, partitioned
//! into safe and unsafe surfaces, annotated with group headers, rendered into
//! two interface blocks behind a shared prelude, and finally passed through a
//! narrow textual compatibility rewrite. The external formatter runs over the
//! written file as a post-process.

/// Aggregate errors for the generation pipeline.
mod error;
/// Top-level driver wiring acquisition, generation, and formatting.
mod generator;
/// Group header insertion over sorted cheatcode sequences.
mod group;
/// Status filtering and the deterministic cheatcode order.
mod order;
/// Text assembly for one generation run.
mod pipeline;

pub use crate::error::{Result, VmgenError};
pub use crate::generator::Generator;
pub use crate::group::{display_group, with_group_headers};
pub use crate::order::{EXCLUDED_STATUSES, cmp_cheatcodes, filter_cheatcodes, sort_cheatcodes};
pub use crate::pipeline::{GenerateConfig, generate, rewrite_memory_returns};
