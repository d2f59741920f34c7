use log::debug;

use crate::{
	classify::{classify, AccessLevel, Classification},
	directive::{resolve, Capabilities, Directive},
	error::ExpansionError,
	field::{extract, FieldDescriptor},
	syntax::DeclGroup,
};

/// Everything synthesis needs to know about one annotated declaration.
///
/// Built fresh for every expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationContext {
	pub name: String,
	pub classification: Classification,
	pub capabilities: Capabilities,
	pub access_level: Option<AccessLevel>,
	pub fields: Vec<FieldDescriptor>,
}

impl DeclarationContext {
	/// Analyze `decl` for expansion of `directive`.
	///
	/// Directives are resolved first, then the declaration is classified, then
	/// its fields are extracted.
	pub fn analyze(decl: &DeclGroup, directive: Directive) -> Result<Self, ExpansionError> {
		let capabilities = resolve(decl)?;
		let classification = classify(decl, directive)?;
		let fields = extract(&decl.members);

		debug!(
			"@{} on `{}`: {:?}, {} field(s)",
			directive,
			decl.name,
			classification,
			fields.len()
		);

		Ok(Self {
			name: decl.name.clone(),
			classification,
			capabilities,
			access_level: AccessLevel::from_modifiers(&decl.modifiers),
			fields,
		})
	}

	#[inline]
	pub fn is_sealed(&self) -> bool {
		self.classification.is_sealed()
	}
}
