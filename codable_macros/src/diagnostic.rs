use std::fmt;

use crate::syntax::{Attribute, DeclGroup};

/// Domain of every message this crate emits.
pub const DOMAIN: &str = "CodableMacros";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
	Error,
	Warning,
	Note,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId {
	pub domain: &'static str,
	pub id: &'static str,
}

impl MessageId {
	pub const fn new(id: &'static str) -> Self {
		Self { domain: DOMAIN, id }
	}
}

impl fmt::Display for MessageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.domain, self.id)
	}
}

/// A message reported against the directive that triggered an expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
	/// Node the diagnostic is anchored to.
	pub node: Attribute,
	pub id: MessageId,
	pub severity: Severity,
	pub message: String,
	pub fix_its: Vec<FixIt>,
}

impl Diagnostic {
	pub fn error(node: &Attribute, id: MessageId, message: impl Into<String>) -> Self {
		Self {
			node: node.clone(),
			id,
			severity: Severity::Error,
			message: message.into(),
			fix_its: Vec::new(),
		}
	}

	pub fn with_fix_it(mut self, fix_it: FixIt) -> Self {
		self.fix_its.push(fix_it);
		self
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let severity = match self.severity {
			Severity::Error => "error",
			Severity::Warning => "warning",
			Severity::Note => "note",
		};
		write!(f, "{}: {} [{}]", severity, self.message, self.id)
	}
}

/// Machine-applicable correction attached to a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixIt {
	pub message: String,
	pub changes: Vec<Change>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
	/// Replace an attribute of the declaration with zero or more attributes,
	/// in the same position.
	ReplaceAttribute {
		old: Attribute,
		new: Vec<Attribute>,
	},
}

impl FixIt {
	/// Apply all changes to `decl`.
	///
	/// Returns `false` if any change did not find the node it replaces.
	pub fn apply(&self, decl: &mut DeclGroup) -> bool {
		let mut applied = true;
		for change in &self.changes {
			match change {
				Change::ReplaceAttribute { old, new } => {
					match decl.attributes.iter().position(|attribute| attribute == old) {
						Some(index) => {
							decl.attributes.splice(index..=index, new.iter().cloned());
						}
						None => applied = false,
					}
				}
			}
		}
		applied
	}
}

/// Channel an expansion reports diagnostics through.
pub trait MacroExpansionContext {
	fn diagnose(&mut self, diagnostic: Diagnostic);
}

impl MacroExpansionContext for Vec<Diagnostic> {
	fn diagnose(&mut self, diagnostic: Diagnostic) {
		self.push(diagnostic);
	}
}
