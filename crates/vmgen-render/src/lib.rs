//! Pretty-printer that renders cheatcode declarations into Solidity
//! interface source text.
//!
//! The printer is a stateful text emitter: output accumulates in a single
//! buffer, every physical line is prefixed by the current indentation depth,
//! and documentation comments can be rendered in either line (`///`) or
//! block (`/** */`) style. Declarations themselves are opaque text and are
//! emitted verbatim.

/// Aggregate input consumed by the printer.
mod doc;
/// Errors produced while configuring the printer.
mod error;
/// Emission order over the item categories.
mod order;
/// The interface printer itself.
mod printer;

pub use crate::doc::{FunctionEntry, InterfaceDoc};
pub use crate::error::{RenderError, Result};
pub use crate::order::{ItemKind, ItemOrder};
pub use crate::printer::InterfacePrinter;
