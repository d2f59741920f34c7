use super::{expand_capability, AttachedMacro};
use crate::{
	diagnostic::MacroExpansionContext,
	directive::Capability,
	placement::Expansion,
	syntax::{Attribute, DeclGroup},
};

/// `@Decodable`: synthesizes `CodingKeys` and `init(from:)`.
pub struct DecodableMacro;

impl AttachedMacro for DecodableMacro {
	fn name(&self) -> &'static str {
		Capability::Decode.directive().name()
	}

	fn expand(
		&self,
		node: &Attribute,
		declaration: &DeclGroup,
		context: &mut dyn MacroExpansionContext,
	) -> Expansion {
		expand_capability(Capability::Decode, node, declaration, context)
	}
}
