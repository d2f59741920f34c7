use std::fmt;

use log::debug;

use crate::{
	diagnostic::Diagnostic,
	registry::MacroRegistry,
	syntax::{DeclGroup, ExtensionDecl, Member, PrintOptions, Printer},
};

/// A declaration after its macros have been expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedSource {
	/// The declaration with macro attributes removed and members spliced in.
	pub declaration: DeclGroup,
	/// Satellite blocks, in expansion order.
	pub extensions: Vec<ExtensionDecl>,
	pub diagnostics: Vec<Diagnostic>,
}

impl ExpandedSource {
	/// Render declaration followed by its satellite blocks.
	pub fn render(&self, options: PrintOptions) -> String {
		let mut printer = Printer::new(options);
		printer.decl_group(&self.declaration);
		for extension in &self.extensions {
			printer.blank_line();
			printer.extension(extension);
		}
		printer.finish()
	}
}

impl fmt::Display for ExpandedSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render(PrintOptions::default()))
	}
}

/// Expand every registered macro attached to `decl` or to its members.
///
/// Peer macros on members run first, and their output is placed directly
/// after the member. Attached macros then run in the order their attributes
/// are written. Each receives `decl` as written, attributes included.
/// Members they produce are appended to the body in that order.
/// The attributes of expanded macros are removed from the output.
pub fn expand_declaration(decl: &DeclGroup, registry: &MacroRegistry) -> ExpandedSource {
	let mut diagnostics: Vec<Diagnostic> = Vec::new();

	let mut members = Vec::with_capacity(decl.members.len());
	for member in &decl.members {
		let mut peers = Vec::new();
		let member_out = match member {
			Member::Variable(variable) => {
				let mut variable_out = variable.clone();
				variable_out.attributes.clear();
				for attribute in &variable.attributes {
					match registry.peer(&attribute.name) {
						Some(peer) => peers.extend(peer.expand(attribute, member, &mut diagnostics)),
						None => variable_out.attributes.push(attribute.clone()),
					}
				}
				Member::Variable(variable_out)
			}
			member => member.clone(),
		};
		members.push(member_out);
		members.append(&mut peers);
	}

	let mut attributes = Vec::new();
	let mut extensions = Vec::new();
	for attribute in &decl.attributes {
		match registry.attached(&attribute.name) {
			Some(attached) => {
				let expansion = attached.expand(attribute, decl, &mut diagnostics);
				debug!(
					"@{} on `{}` produced {} member(s), {} extension(s)",
					attribute.name,
					decl.name,
					expansion.members.len(),
					expansion.extensions.len()
				);
				members.extend(expansion.members);
				extensions.extend(expansion.extensions);
			}
			None => attributes.push(attribute.clone()),
		}
	}

	ExpandedSource {
		declaration: DeclGroup {
			attributes,
			modifiers: decl.modifiers.clone(),
			kind: decl.kind,
			name: decl.name.clone(),
			inherited: decl.inherited.clone(),
			members,
		},
		extensions,
		diagnostics,
	}
}
