use std::fmt;

use super::{
	Attribute, DeclGroup, EnumDecl, ExtensionDecl, FunctionDecl, InitializerDecl, Member, Modifier,
	Parameter, Pattern, PatternBinding, Stmt, VariableDecl,
};

/// Options for rendering syntax trees as source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintOptions {
	/// Number of spaces per indentation level.
	pub indent: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self { indent: 4 }
	}
}

/// Renders declarations as host-language source.
///
/// Layout rules:
///
/// * Members of a block are separated by a single blank line.
/// * Enum cases and statements are printed one per line, with no blank lines.
/// * An empty block is printed as `{` followed by `}` on the next line.
/// * Output has no trailing newline.
pub struct Printer {
	options: PrintOptions,
	out: String,
	depth: usize,
}

impl Printer {
	pub fn new(options: PrintOptions) -> Self {
		Self {
			options,
			out: String::new(),
			depth: 0,
		}
	}

	/// Consume printer and get rendered source.
	pub fn finish(mut self) -> String {
		while self.out.ends_with('\n') {
			self.out.pop();
		}
		self.out
	}

	/// Print a blank separator line.
	pub fn blank_line(&mut self) {
		self.out.push('\n');
	}

	pub fn decl_group(&mut self, decl: &DeclGroup) {
		self.attributes(&decl.attributes);
		let mut header = modifiers_prefix(&decl.modifiers);
		header.push_str(decl.kind.keyword());
		header.push(' ');
		header.push_str(&decl.name);
		push_inherited(&mut header, &decl.inherited);
		self.members_block(header, &decl.members);
	}

	pub fn extension(&mut self, decl: &ExtensionDecl) {
		let mut header = format!("extension {}", decl.extended_type);
		push_inherited(&mut header, &decl.inherited);
		self.members_block(header, &decl.members);
	}

	pub fn member(&mut self, member: &Member) {
		match member {
			Member::Variable(decl) => self.variable(decl),
			Member::Initializer(decl) => self.initializer(decl),
			Member::Function(decl) => self.function(decl),
			Member::Enum(decl) => self.enum_decl(decl),
			Member::Type(decl) => self.decl_group(decl),
		}
	}

	fn variable(&mut self, decl: &VariableDecl) {
		self.attributes(&decl.attributes);
		let bindings = decl
			.bindings
			.iter()
			.map(binding_source)
			.collect::<Vec<_>>()
			.join(", ");
		let line = format!(
			"{}{} {}",
			modifiers_prefix(&decl.modifiers),
			decl.specifier.keyword(),
			bindings
		);
		self.line(&line);
	}

	fn initializer(&mut self, decl: &InitializerDecl) {
		let header = format!(
			"{}init({}){}",
			modifiers_prefix(&decl.modifiers),
			parameters_source(&decl.parameters),
			throws_suffix(decl.throws)
		);
		self.statements_block(header, &decl.body);
	}

	fn function(&mut self, decl: &FunctionDecl) {
		let header = format!(
			"{}func {}({}){}",
			modifiers_prefix(&decl.modifiers),
			decl.name,
			parameters_source(&decl.parameters),
			throws_suffix(decl.throws)
		);
		self.statements_block(header, &decl.body);
	}

	fn enum_decl(&mut self, decl: &EnumDecl) {
		let mut header = modifiers_prefix(&decl.modifiers);
		header.push_str("enum ");
		header.push_str(&decl.name);
		push_inherited(&mut header, &decl.inherited);

		self.open(&header);
		self.depth += 1;
		for case in &decl.cases {
			let line = match &case.raw_value {
				Some(raw_value) => format!("case {} = {}", case.name, raw_value),
				None => format!("case {}", case.name),
			};
			self.line(&line);
		}
		self.depth -= 1;
		self.line("}");
	}

	fn attributes(&mut self, attributes: &[Attribute]) {
		for attribute in attributes {
			let line = if attribute.arguments.is_empty() {
				format!("@{}", attribute.name)
			} else {
				let arguments = attribute
					.arguments
					.iter()
					.map(ToString::to_string)
					.collect::<Vec<_>>()
					.join(", ");
				format!("@{}({})", attribute.name, arguments)
			};
			self.line(&line);
		}
	}

	fn members_block(&mut self, header: String, members: &[Member]) {
		self.open(&header);
		self.depth += 1;
		for (index, member) in members.iter().enumerate() {
			if index > 0 {
				self.blank_line();
			}
			self.member(member);
		}
		self.depth -= 1;
		self.line("}");
	}

	fn statements_block(&mut self, header: String, body: &[Stmt]) {
		self.open(&header);
		self.depth += 1;
		for stmt in body {
			self.line(&stmt.to_string());
		}
		self.depth -= 1;
		self.line("}");
	}

	fn open(&mut self, header: &str) {
		self.line(&format!("{} {{", header));
	}

	fn line(&mut self, text: &str) {
		for _ in 0..self.depth * self.options.indent {
			self.out.push(' ');
		}
		self.out.push_str(text);
		self.out.push('\n');
	}
}

fn modifiers_prefix(modifiers: &[Modifier]) -> String {
	modifiers
		.iter()
		.map(|modifier| format!("{} ", modifier.as_str()))
		.collect()
}

fn push_inherited(header: &mut String, inherited: &[String]) {
	if !inherited.is_empty() {
		header.push_str(": ");
		header.push_str(&inherited.join(", "));
	}
}

fn throws_suffix(throws: bool) -> &'static str {
	if throws {
		" throws"
	} else {
		""
	}
}

fn parameters_source(parameters: &[Parameter]) -> String {
	parameters
		.iter()
		.map(|parameter| match &parameter.second_name {
			Some(second_name) => {
				format!("{} {}: {}", parameter.first_name, second_name, parameter.ty)
			}
			None => format!("{}: {}", parameter.first_name, parameter.ty),
		})
		.collect::<Vec<_>>()
		.join(", ")
}

fn binding_source(binding: &PatternBinding) -> String {
	let mut source = match &binding.pattern {
		Pattern::Identifier(name) => name.clone(),
		Pattern::Tuple(names) => format!("({})", names.join(", ")),
		Pattern::Wildcard => "_".to_string(),
	};
	if let Some(ty) = &binding.type_annotation {
		source.push_str(": ");
		source.push_str(ty);
	}
	if let Some(initializer) = &binding.initializer {
		source.push_str(" = ");
		source.push_str(&initializer.to_string());
	}
	if let Some(accessor) = &binding.accessor {
		source.push_str(" { ");
		source.push_str(&accessor.0);
		source.push_str(" }");
	}
	source
}

impl fmt::Display for DeclGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut printer = Printer::new(PrintOptions::default());
		printer.decl_group(self);
		f.write_str(&printer.finish())
	}
}

impl fmt::Display for ExtensionDecl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut printer = Printer::new(PrintOptions::default());
		printer.extension(self);
		f.write_str(&printer.finish())
	}
}

impl fmt::Display for Member {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut printer = Printer::new(PrintOptions::default());
		printer.member(self);
		f.write_str(&printer.finish())
	}
}
