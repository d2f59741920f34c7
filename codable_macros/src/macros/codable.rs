use super::AttachedMacro;
use crate::{
	diagnostic::MacroExpansionContext,
	directive::{combined_directive, Directive},
	placement::Expansion,
	syntax::{Attribute, DeclGroup},
};

/// `@Codable`: the deprecated combined directive.
///
/// A macro cannot rewrite the attribute list of the declaration it is
/// attached to, so it cannot switch the declaration over to `@Decodable` and
/// `@Encodable` itself. It never synthesizes anything. Instead it reports an
/// error with a fix-it making that change.
pub struct CodableMacro;

impl AttachedMacro for CodableMacro {
	fn name(&self) -> &'static str {
		Directive::Codable.name()
	}

	fn expand(
		&self,
		node: &Attribute,
		declaration: &DeclGroup,
		context: &mut dyn MacroExpansionContext,
	) -> Expansion {
		context.diagnose(combined_directive(node, declaration).into_diagnostic(node));
		Expansion::default()
	}
}
