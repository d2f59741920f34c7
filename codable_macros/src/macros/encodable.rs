use super::{expand_capability, AttachedMacro};
use crate::{
	diagnostic::MacroExpansionContext,
	directive::Capability,
	placement::Expansion,
	syntax::{Attribute, DeclGroup},
};

/// `@Encodable`: synthesizes `CodingKeys` and `encode(to:)`.
pub struct EncodableMacro;

impl AttachedMacro for EncodableMacro {
	fn name(&self) -> &'static str {
		Capability::Encode.directive().name()
	}

	fn expand(
		&self,
		node: &Attribute,
		declaration: &DeclGroup,
		context: &mut dyn MacroExpansionContext,
	) -> Expansion {
		expand_capability(Capability::Encode, node, declaration, context)
	}
}
