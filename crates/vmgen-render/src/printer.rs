use vmgen_registry::{Enum, EnumVariant, Error, Event, Struct, StructField};

use crate::doc::{FunctionEntry, InterfaceDoc};
use crate::order::{ItemKind, ItemOrder};

/// Stateful emitter for Solidity interface source text.
///
/// Output accumulates in an internal buffer; [`InterfacePrinter::finish`]
/// returns the trimmed text and clears the buffer, so one printer can be
/// reused across independent emissions. Indentation is tracked as a depth
/// counter and every physical line is prefixed by depth copies of the
/// indent unit. Top-level items are separated by blank lines; the external
/// formatter normalizes the rest.
#[derive(Debug, Clone)]
pub struct InterfacePrinter {
	buffer: String,
	prelude: bool,
	spdx_identifier: String,
	solidity_requirement: Option<String>,
	abicoder_v2: bool,
	block_doc_style: bool,
	indent_level: usize,
	indent_str: String,
	nl_str: String,
	items_order: ItemOrder,
}

impl Default for InterfacePrinter {
	fn default() -> Self {
		Self::new()
	}
}

impl InterfacePrinter {
	/// Create a printer with default configuration: prelude enabled,
	/// `UNLICENSED` SPDX identifier, no explicit Solidity requirement, line
	/// style comments, four-space indentation, `\n` line terminator.
	pub fn new() -> Self {
		Self {
			buffer: String::new(),
			prelude: true,
			spdx_identifier: "UNLICENSED".to_string(),
			solidity_requirement: None,
			abicoder_v2: false,
			block_doc_style: false,
			indent_level: 0,
			indent_str: " ".repeat(4),
			nl_str: "\n".to_string(),
			items_order: ItemOrder::default(),
		}
	}

	/// Set the SPDX license identifier emitted in the prelude.
	pub fn with_spdx_identifier(mut self, identifier: &str) -> Self {
		self.spdx_identifier = identifier.to_string();
		self
	}

	/// Set an explicit Solidity version requirement, overriding the
	/// error-based default.
	pub fn with_solidity_requirement(mut self, requirement: &str) -> Self {
		self.solidity_requirement = Some(requirement.to_string());
		self
	}

	/// Emit the `pragma experimental ABIEncoderV2;` line in the prelude.
	pub fn with_abicoder_pragma(mut self, abicoder_v2: bool) -> Self {
		self.abicoder_v2 = abicoder_v2;
		self
	}

	/// Render comments in block style (`/** */`) instead of line style.
	pub fn with_block_doc_style(mut self, block_doc_style: bool) -> Self {
		self.block_doc_style = block_doc_style;
		self
	}

	/// Indent with `count` spaces per depth level.
	pub fn with_indent(mut self, count: usize) -> Self {
		self.indent_str = " ".repeat(count);
		self
	}

	/// Indent with an explicit unit string per depth level.
	pub fn with_indent_str(mut self, unit: &str) -> Self {
		self.indent_str = unit.to_string();
		self
	}

	/// Set the line terminator.
	pub fn with_newline(mut self, nl_str: &str) -> Self {
		self.nl_str = nl_str.to_string();
		self
	}

	/// Set the emission order over item categories.
	pub fn with_items_order(mut self, items_order: ItemOrder) -> Self {
		self.items_order = items_order;
		self
	}

	/// Enable or disable the automatic prelude at the start of
	/// [`InterfacePrinter::emit_interface`].
	pub fn with_prelude(mut self, prelude: bool) -> Self {
		self.prelude = prelude;
		self
	}

	/// Disable or re-enable the automatic prelude on an existing printer.
	pub fn set_prelude(&mut self, prelude: bool) {
		self.prelude = prelude;
	}

	/// Return the buffered text with trailing whitespace stripped, clearing
	/// the buffer for reuse.
	pub fn finish(&mut self) -> String {
		let text = self.buffer.trim_end().to_string();
		self.buffer.clear();
		text
	}

	/// Emit one interface block: optional prelude, `interface <name>
	/// [is <inherits>] {`, every item category in configured order, closing
	/// brace. An empty `inherits` omits the `is` clause; a non-empty one is
	/// printed verbatim.
	pub fn emit_interface(&mut self, doc: &InterfaceDoc, name: &str, inherits: &str) {
		if self.prelude {
			self.emit_prelude(Some(doc));
		}

		self.push("interface ");
		let name = name.trim();
		if !name.is_empty() {
			self.push(name);
			self.push(" ");
		}
		if !inherits.is_empty() {
			self.push("is ");
			self.push(inherits);
			self.push(" ");
		}
		self.push("{");
		self.newline();
		self.with_indent_scope(|p| p.emit_items(doc));
		self.push("}");
		self.newline();
	}

	/// Emit the prelude: SPDX line, Solidity version pragma, optional
	/// experimental ABI coder pragma, trailing blank line.
	///
	/// Without an explicit requirement the version floor depends on whether
	/// the document declares custom errors, which Solidity introduced in
	/// 0.8.4.
	pub fn emit_prelude(&mut self, doc: Option<&InterfaceDoc>) {
		let spdx = format!("// SPDX-License-Identifier: {}", self.spdx_identifier);
		self.push(&spdx);
		self.newline();

		let requirement = match &self.solidity_requirement {
			Some(requirement) => requirement.clone(),
			None if doc.is_some_and(|d| !d.errors.is_empty()) => ">=0.8.4 <0.9.0".to_string(),
			None => ">=0.6.0 <0.9.0".to_string(),
		};
		let pragma = format!("pragma solidity {requirement};");
		self.push(&pragma);
		self.newline();

		if self.abicoder_v2 {
			self.push("pragma experimental ABIEncoderV2;");
			self.newline();
		}

		self.newline();
	}

	fn emit_items(&mut self, doc: &InterfaceDoc) {
		let order: Vec<ItemKind> = self.items_order.kinds().to_vec();
		for kind in order {
			match kind {
				ItemKind::Error => self.emit_errors(&doc.errors),
				ItemKind::Event => self.emit_events(&doc.events),
				ItemKind::Enum => self.emit_enums(&doc.enums),
				ItemKind::Struct => self.emit_structs(&doc.structs),
				ItemKind::Function => self.emit_functions(&doc.functions),
			}
		}
	}

	fn emit_errors(&mut self, errors: &[Error]) {
		for error in errors {
			self.emit_error(error);
			self.newline();
		}
	}

	fn emit_error(&mut self, error: &Error) {
		self.emit_comment(&error.description, true);
		self.line(|p| p.push(&error.declaration));
	}

	fn emit_events(&mut self, events: &[Event]) {
		for event in events {
			self.emit_event(event);
			self.newline();
		}
	}

	fn emit_event(&mut self, event: &Event) {
		self.emit_comment(&event.description, true);
		self.line(|p| p.push(&event.declaration));
	}

	fn emit_enums(&mut self, enums: &[Enum]) {
		for item in enums {
			self.emit_enum(item);
			self.newline();
		}
	}

	fn emit_enum(&mut self, item: &Enum) {
		self.emit_comment(&item.description, true);
		let header = format!("enum {} {{", item.name);
		self.line(|p| p.push(&header));
		self.with_indent_scope(|p| p.emit_enum_variants(&item.variants));
		self.line(|p| p.push("}"));
	}

	fn emit_enum_variants(&mut self, variants: &[EnumVariant]) {
		for (i, variant) in variants.iter().enumerate() {
			self.emit_comment(&variant.description, false);
			self.indent();
			self.push(&variant.name);
			if i + 1 < variants.len() {
				self.push(",");
			}
			self.newline();
		}
	}

	fn emit_structs(&mut self, structs: &[Struct]) {
		for item in structs {
			self.emit_struct(item);
			self.newline();
		}
	}

	fn emit_struct(&mut self, item: &Struct) {
		self.emit_comment(&item.description, true);
		let header = format!("struct {} {{", item.name);
		self.line(|p| p.push(&header));
		self.with_indent_scope(|p| p.emit_struct_fields(&item.fields));
		self.line(|p| p.push("}"));
	}

	fn emit_struct_fields(&mut self, fields: &[StructField]) {
		for field in fields {
			self.emit_struct_field(field);
		}
	}

	fn emit_struct_field(&mut self, field: &StructField) {
		self.emit_comment(&field.description, false);
		let declaration = format!("{} {};", field.ty, field.name);
		self.line(|p| p.push(&declaration));
	}

	fn emit_functions(&mut self, entries: &[FunctionEntry]) {
		for entry in entries {
			self.emit_function_entry(entry);
			self.newline();
		}
	}

	fn emit_function_entry(&mut self, entry: &FunctionEntry) {
		match entry {
			FunctionEntry::Cheatcode(cheatcode) => {
				self.emit_comment(&cheatcode.func.description, true);
				self.line(|p| p.push(&cheatcode.func.declaration));
			}
			FunctionEntry::GroupHeader(name) => {
				let banner = format!("// ======== {name} ========");
				self.line(|p| p.push(&banner));
			}
		}
	}

	/// Emit a comment from free text. The text is trimmed; empty text emits
	/// nothing. Each line is left-trimmed and re-indented to the current
	/// depth. `doc` selects `///` (or `/** */`) over `//` (or `/* */`).
	fn emit_comment(&mut self, text: &str, doc: bool) {
		let text = text.trim();
		if text.is_empty() {
			return;
		}

		if self.block_doc_style {
			self.indent();
			self.push("/*");
			if doc {
				self.push("*");
			}
			self.newline();
			for line in text.lines() {
				let line = line.trim_start();
				self.indent();
				self.push(" ");
				if doc {
					self.push("* ");
				}
				self.push(line);
				self.newline();
			}
			self.indent();
			self.push(" */");
			self.newline();
		} else {
			for line in text.lines() {
				let line = line.trim_start();
				self.indent();
				self.push(if doc { "/// " } else { "// " });
				self.push(line);
				self.newline();
			}
		}
	}

	/// Run `f` one indentation level deeper, restoring the caller's depth
	/// afterwards. The increment/decrement pairing lives here and nowhere
	/// else.
	fn with_indent_scope(&mut self, f: impl FnOnce(&mut Self)) {
		self.indent_level += 1;
		f(self);
		self.indent_level -= 1;
	}

	/// Emit one physical line: indentation, `f`, line terminator.
	fn line(&mut self, f: impl FnOnce(&mut Self)) {
		self.indent();
		f(self);
		self.newline();
	}

	fn indent(&mut self) {
		for _ in 0..self.indent_level {
			self.buffer.push_str(&self.indent_str);
		}
	}

	fn newline(&mut self) {
		self.buffer.push_str(&self.nl_str);
	}

	fn push(&mut self, text: &str) {
		self.buffer.push_str(text);
	}
}
