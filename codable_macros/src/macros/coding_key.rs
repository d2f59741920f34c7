use super::PeerMacro;
use crate::{
	diagnostic::MacroExpansionContext,
	directive::Directive,
	error::ExpansionError,
	field::field_from_variable,
	syntax::{Attribute, Member},
};

/// `@CodingKey("...")`: marker read by the field extractor.
///
/// Produces no declarations. Only checks it is used on a typed stored
/// instance property with a single string literal argument.
pub struct CodingKeyMacro;

impl PeerMacro for CodingKeyMacro {
	fn name(&self) -> &'static str {
		Directive::CodingKey.name()
	}

	fn expand(
		&self,
		node: &Attribute,
		member: &Member,
		context: &mut dyn MacroExpansionContext,
	) -> Vec<Member> {
		// Same members the field extractor picks up
		let is_stored_property = matches!(
			member,
			Member::Variable(decl) if field_from_variable(decl).is_some()
		);
		let has_key = matches!(
			node.arguments.as_slice(),
			[argument] if argument.as_string_literal().is_some()
		);

		if !is_stored_property {
			context.diagnose(ExpansionError::CodingKeyOnUnsupportedMember.into_diagnostic(node));
		} else if !has_key {
			context.diagnose(ExpansionError::InvalidCodingKey.into_diagnostic(node));
		}

		Vec::new()
	}
}
