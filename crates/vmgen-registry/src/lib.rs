//! Data model and acquisition for the Foundry cheatcode registry.
//!
//! The registry is a JSON document of the shape
//! `{errors, events, enums, structs, cheatcodes}` published alongside the
//! Foundry cheatcodes crate. This crate decodes that document into plain
//! records and offers both a remote fetch of the well-known URL and a local
//! file read, which must yield the identical shape.

/// Errors produced while acquiring or decoding the registry document.
mod error;
/// Plain records for the registry document.
mod model;
/// Remote fetch and local file read of the registry document.
mod source;

pub use crate::error::{RegistryError, Result};
pub use crate::model::{
	Cheatcode, Enum, EnumVariant, Error, Event, Function, Mutability, Registry, Struct,
	StructField, Visibility,
};
pub use crate::source::{CHEATCODES_JSON_URL, fetch_registry, parse_registry, read_registry};
