use vmgen_registry::{Cheatcode, Enum, Error, Event, Struct};

/// One entry in the function list of an interface block.
///
/// Group headers are a distinct variant rather than a doctored real entry,
/// so downstream logic can never mistake a banner for data and a header can
/// never re-trigger grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionEntry {
	/// A real cheatcode function.
	Cheatcode(Cheatcode),
	/// A synthetic banner carrying the group's display name.
	GroupHeader(String),
}

/// Aggregate input for one interface block emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceDoc {
	/// Custom error declarations.
	pub errors: Vec<Error>,
	/// Event declarations.
	pub events: Vec<Event>,
	/// Enum declarations.
	pub enums: Vec<Enum>,
	/// Struct declarations.
	pub structs: Vec<Struct>,
	/// Function entries, already ordered and group-annotated.
	pub functions: Vec<FunctionEntry>,
}
